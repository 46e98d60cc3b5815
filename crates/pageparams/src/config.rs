// File: src/config.rs
// Purpose: Configuration parsing from pageparams.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::emitter::ARTIFACT_FILE_NAME;
use crate::host_config;

/// Default project config file name
pub const CONFIG_FILE_NAME: &str = "pageparams.toml";

/// Project configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub paths: PathsConfig,

    #[serde(default)]
    pub pages: PagesConfig,

    #[serde(default)]
    pub watch: WatchConfig,
}

/// Input and output locations, relative to the project root
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Directory containing page files (default: "src/pages")
    #[serde(default = "default_source")]
    pub source: String,

    /// Directory the declaration is written to (default: "src/generated")
    #[serde(default = "default_output")]
    pub output: String,

    /// Host framework config to read `pageExtensions` from (default: auto-detect)
    #[serde(default)]
    pub host_config: Option<String>,
}

/// Page file matching
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PagesConfig {
    /// Explicit page extensions; when empty the host config decides
    #[serde(default)]
    pub extensions: Vec<String>,
}

/// Watch mode settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WatchConfig {
    /// Quiet period before a burst of changes triggers one rebuild (0 = no coalescing)
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

// Default values
fn default_source() -> String {
    "src/pages".to_string()
}

fn default_output() -> String {
    "src/generated".to_string()
}

fn default_debounce_ms() -> u64 {
    300
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            source: default_source(),
            output: default_output(),
            host_config: None,
        }
    }
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
        }
    }
}

/// Command-line values that take precedence over the config file
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub source: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub host_config: Option<PathBuf>,
}

/// Fully resolved settings for one build pass
///
/// Passed explicitly to every stage; nothing is read from ambient state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildOptions {
    pub source_dir: PathBuf,
    pub output_dir: PathBuf,
    pub extensions: Vec<String>,
    pub debounce: Duration,
}

impl BuildOptions {
    pub fn new(
        source_dir: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
        extensions: Vec<String>,
    ) -> Self {
        Self {
            source_dir: source_dir.into(),
            output_dir: output_dir.into(),
            extensions,
            debounce: Duration::from_millis(default_debounce_ms()),
        }
    }

    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    /// Full path of the generated declaration
    pub fn artifact_path(&self) -> PathBuf {
        self.output_dir.join(ARTIFACT_FILE_NAME)
    }
}

impl Config {
    /// Load configuration from a pageparams.toml file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // If file doesn't exist or is empty, return default config
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }

    /// Load configuration from `<project_root>/pageparams.toml`
    pub fn load_from_root(project_root: &Path) -> Result<Self> {
        Self::load(project_root.join(CONFIG_FILE_NAME))
    }

    /// Resolves file values and overrides into [`BuildOptions`]
    ///
    /// Relative paths are taken from `project_root`. Extensions come from
    /// `[pages].extensions`, then the host config, then the default pair.
    pub fn resolve(&self, project_root: &Path, overrides: &Overrides) -> BuildOptions {
        let source_dir = project_root.join(
            overrides
                .source
                .clone()
                .unwrap_or_else(|| PathBuf::from(&self.paths.source)),
        );
        let output_dir = project_root.join(
            overrides
                .output
                .clone()
                .unwrap_or_else(|| PathBuf::from(&self.paths.output)),
        );

        let host_config = overrides
            .host_config
            .clone()
            .or_else(|| self.paths.host_config.as_ref().map(PathBuf::from))
            .map(|path| project_root.join(path));

        let extensions = if self.pages.extensions.is_empty() {
            host_config::resolve_page_extensions(project_root, host_config.as_deref())
        } else {
            self.pages.extensions.clone()
        };

        BuildOptions::new(source_dir, output_dir, extensions)
            .with_debounce(Duration::from_millis(self.watch.debounce_ms))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.paths.source, "src/pages");
        assert_eq!(config.paths.output, "src/generated");
        assert!(config.paths.host_config.is_none());
        assert!(config.pages.extensions.is_empty());
        assert_eq!(config.watch.debounce_ms, 300);
    }

    #[test]
    fn test_empty_config() {
        let config = toml::from_str::<Config>("").unwrap_or_default();
        assert_eq!(config.paths.source, "src/pages");
        assert_eq!(config.watch.debounce_ms, 300);
    }

    #[test]
    fn test_custom_config() {
        let toml = r#"
            [paths]
            source = "pages"
            output = "types"

            [pages]
            extensions = ["page.tsx"]

            [watch]
            debounce_ms = 0
        "#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.paths.source, "pages");
        assert_eq!(config.paths.output, "types");
        assert_eq!(config.pages.extensions, vec!["page.tsx"]);
        assert_eq!(config.watch.debounce_ms, 0);
    }

    #[test]
    fn test_load_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from_root(dir.path()).unwrap();
        assert_eq!(config.paths.source, "src/pages");
    }

    #[test]
    fn test_load_malformed_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE_NAME), "[paths\nsource = 1").unwrap();
        assert!(Config::load_from_root(dir.path()).is_err());
    }

    #[test]
    fn test_resolve_overrides_win() {
        let root = Path::new("/project");
        let overrides = Overrides {
            source: Some(PathBuf::from("app/pages")),
            output: Some(PathBuf::from("/tmp/out")),
            host_config: None,
        };
        let mut config = Config::default();
        config.pages.extensions = vec!["mdx".to_string()];

        let options = config.resolve(root, &overrides);
        assert_eq!(options.source_dir, PathBuf::from("/project/app/pages"));
        assert_eq!(options.output_dir, PathBuf::from("/tmp/out"));
        assert_eq!(options.extensions, vec!["mdx"]);
        assert_eq!(options.artifact_path(), PathBuf::from("/tmp/out/dynamicRoutes.ts"));
    }

    #[test]
    fn test_resolve_reads_host_config() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("next.config.js"),
            "module.exports = { pageExtensions: ['page.tsx', 'page.ts'] }",
        )
        .unwrap();

        let options = Config::default().resolve(dir.path(), &Overrides::default());
        assert_eq!(options.extensions, vec!["page.tsx", "page.ts"]);
        assert_eq!(options.source_dir, dir.path().join("src/pages"));
    }
}
