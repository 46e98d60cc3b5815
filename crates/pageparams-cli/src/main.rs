mod commands;

#[cfg(feature = "watch")]
mod dev;

use anyhow::{Context, Result};
use clap::Parser;
use pageparams::{Config, Overrides, CONFIG_FILE_NAME};
use std::env;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pageparams")]
#[command(version, about = "Generate typed route parameters from a Next.js page tree", long_about = None)]
struct Cli {
    /// Watch the pages directory and regenerate on every change
    #[arg(short, long)]
    watch: bool,

    /// Project config file (default: ./pageparams.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Pages directory, overrides `paths.source`
    #[arg(long)]
    src: Option<PathBuf>,

    /// Output directory, overrides `paths.output`
    #[arg(long)]
    out: Option<PathBuf>,

    /// Next.js config to read `pageExtensions` from, overrides `paths.host_config`
    #[arg(long)]
    host_config: Option<PathBuf>,
}

/// Filter used when `RUST_LOG` is unset
const DEFAULT_LOG_FILTER: &str = "pageparams=info,pageparams_cli=info";

/// Initialize tracing on stderr; `RUST_LOG` overrides the default filter
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_tracing();

    // Parse CLI arguments
    let cli = Cli::parse();

    let project_root = env::current_dir().context("Failed to resolve current directory")?;
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| project_root.join(CONFIG_FILE_NAME));
    let config = Config::load(&config_path)?;

    let overrides = Overrides {
        source: cli.src,
        output: cli.out,
        host_config: cli.host_config,
    };
    let options = config.resolve(&project_root, &overrides);

    // Execute command
    if cli.watch {
        commands::watch::execute(options)?;
    } else {
        commands::build::execute(&options)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::EnvFilter;

    #[test]
    fn test_default_log_filter_is_info_for_own_crates() {
        let filter = EnvFilter::try_new(DEFAULT_LOG_FILTER).unwrap();
        let rendered = filter.to_string();
        assert!(rendered.contains("pageparams=info"));
        assert!(rendered.contains("pageparams_cli=info"));
    }
}
