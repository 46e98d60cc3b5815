use anyhow::Result;
use colored::Colorize;
use pageparams::BuildOptions;

#[cfg(feature = "watch")]
pub fn execute(options: BuildOptions) -> Result<()> {
    use crate::dev::watcher::PageWatcher;

    println!("{}", "Watching for page changes...".green().bold());
    println!();

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async { PageWatcher::new(options).watch().await })
}

#[cfg(not(feature = "watch"))]
pub fn execute(_options: BuildOptions) -> Result<()> {
    println!("{}", "⚠ Watch mode not available".yellow());
    println!();
    println!("Watch mode requires the 'watch' feature.");
    println!("Rebuild with: cargo build --features watch");
    anyhow::bail!("watch mode is not compiled in")
}
