// File: src/host_config.rs
// Purpose: Narrow read of `pageExtensions` from the Next.js config file

use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Extensions used when the host config does not supply any
pub const DEFAULT_EXTENSIONS: [&str; 2] = ["tsx", "ts"];

/// Host config file names, checked in order
pub const HOST_CONFIG_CANDIDATES: [&str; 4] = [
    "next.config.js",
    "next.config.mjs",
    "next.config.cjs",
    "next.config.ts",
];

static PAGE_EXTENSIONS_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"pageExtensions\s*:\s*\[([^\]]*)\]").unwrap()
});

static EXTENSION_LITERAL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^(?:'([A-Za-z0-9_][A-Za-z0-9_.-]*)'|"([A-Za-z0-9_][A-Za-z0-9_.-]*)")$"#).unwrap()
});

/// Reasons the host config could not supply page extensions
#[derive(Debug, thiserror::Error)]
pub enum HostConfigError {
    #[error("no host config found in {0}")]
    NotFound(PathBuf),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("`pageExtensions` is not declared")]
    MissingField,

    #[error("`pageExtensions` entry is not a plain string literal: {0}")]
    Malformed(String),

    #[error("`pageExtensions` is empty")]
    Empty,
}

/// Extracts `pageExtensions` from config source text
///
/// Only a literal array of quoted strings is accepted. Spreads, identifiers,
/// template strings or anything computed fail the read instead of guessing.
pub fn parse_page_extensions(source: &str) -> Result<Vec<String>, HostConfigError> {
    let captures = PAGE_EXTENSIONS_REGEX
        .captures(source)
        .ok_or(HostConfigError::MissingField)?;

    let extensions = captures[1]
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(|item| {
            EXTENSION_LITERAL_REGEX
                .captures(item)
                .and_then(|c| c.get(1).or_else(|| c.get(2)))
                .map(|m| m.as_str().to_string())
                .ok_or_else(|| HostConfigError::Malformed(item.to_string()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    if extensions.is_empty() {
        return Err(HostConfigError::Empty);
    }
    Ok(extensions)
}

/// Reads `pageExtensions` from a host config file
pub fn read_page_extensions(path: &Path) -> Result<Vec<String>, HostConfigError> {
    let content = fs::read_to_string(path).map_err(|source| HostConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_page_extensions(&content)
}

/// Finds the first host config file present in the project root
pub fn find_host_config(project_root: &Path) -> Option<PathBuf> {
    HOST_CONFIG_CANDIDATES
        .iter()
        .map(|name| project_root.join(name))
        .find(|path| path.is_file())
}

/// Resolves page extensions, falling back to [`DEFAULT_EXTENSIONS`]
///
/// Never fails: every host config problem is logged and answered with the defaults.
pub fn resolve_page_extensions(project_root: &Path, explicit: Option<&Path>) -> Vec<String> {
    let path = explicit
        .map(Path::to_path_buf)
        .or_else(|| find_host_config(project_root))
        .ok_or_else(|| HostConfigError::NotFound(project_root.to_path_buf()));

    match path.and_then(|path| read_page_extensions(&path)) {
        Ok(extensions) => {
            debug!("Page extensions from host config: {:?}", extensions);
            extensions
        }
        Err(e) => {
            debug!("Using default page extensions ({})", e);
            default_extensions()
        }
    }
}

pub fn default_extensions() -> Vec<String> {
    DEFAULT_EXTENSIONS.iter().map(|ext| ext.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_next_config() {
        let source = r#"
            /** @type {import('next').NextConfig} */
            module.exports = {
              reactStrictMode: true,
              pageExtensions: ['page.tsx', "page.ts"],
            }
        "#;
        assert_eq!(
            parse_page_extensions(source).unwrap(),
            vec!["page.tsx".to_string(), "page.ts".to_string()]
        );
    }

    #[test]
    fn test_parse_trailing_comma_and_newlines() {
        let source = "export default {\n  pageExtensions: [\n    'mdx',\n    'tsx',\n  ],\n}";
        assert_eq!(parse_page_extensions(source).unwrap(), vec!["mdx", "tsx"]);
    }

    #[test]
    fn test_missing_field() {
        assert!(matches!(
            parse_page_extensions("module.exports = { reactStrictMode: true }"),
            Err(HostConfigError::MissingField)
        ));
    }

    #[test]
    fn test_computed_entries_fail_closed() {
        assert!(matches!(
            parse_page_extensions("module.exports = { pageExtensions: [...base, 'tsx'] }"),
            Err(HostConfigError::Malformed(_))
        ));
        assert!(matches!(
            parse_page_extensions("module.exports = { pageExtensions: [`tsx`] }"),
            Err(HostConfigError::Malformed(_))
        ));
        assert!(matches!(
            parse_page_extensions("module.exports = { pageExtensions: ['.tsx'] }"),
            Err(HostConfigError::Malformed(_))
        ));
    }

    #[test]
    fn test_empty_array() {
        assert!(matches!(
            parse_page_extensions("module.exports = { pageExtensions: [] }"),
            Err(HostConfigError::Empty)
        ));
    }

    #[test]
    fn test_resolve_falls_back_without_config() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(resolve_page_extensions(dir.path(), None), vec!["tsx", "ts"]);
    }

    #[test]
    fn test_resolve_reads_detected_config() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("next.config.mjs"),
            "export default { pageExtensions: ['page.tsx'] }",
        )
        .unwrap();
        assert_eq!(resolve_page_extensions(dir.path(), None), vec!["page.tsx"]);
    }

    #[test]
    fn test_resolve_falls_back_on_malformed_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.config.js");
        fs::write(&path, "module.exports = { pageExtensions: exts }").unwrap();
        assert_eq!(resolve_page_extensions(dir.path(), Some(path.as_path())), vec!["tsx", "ts"]);
    }
}
