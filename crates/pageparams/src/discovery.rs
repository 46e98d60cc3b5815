// File: src/discovery.rs
// Purpose: Finds page files under the pages root

use crate::emitter::ARTIFACT_FILE_NAME;
use std::path::Path;
use tracing::{debug, warn};
use walkdir::WalkDir;

/// File names starting with this marker are never pages (`_app.tsx`, `_layout.tsx`)
pub const IGNORE_MARKER: char = '_';

/// Checks whether a file name denotes a page
///
/// The name must be `<stem>.<ext>` for one of `extensions` with a non-empty
/// stem, and must not start with [`IGNORE_MARKER`].
pub fn is_page_file(path: &Path, extensions: &[String]) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };

    if name.starts_with(IGNORE_MARKER) {
        return false;
    }

    extensions.iter().any(|ext| {
        name.strip_suffix(ext.as_str())
            .and_then(|rest| rest.strip_suffix('.'))
            .is_some_and(|stem| !stem.is_empty())
    })
}

/// Lists page files under `root` as `/`-separated paths relative to `root`
///
/// Traversal is sorted by file name, so the result order is stable. A missing
/// or unreadable root yields an empty list.
pub fn discover_pages(root: &Path, extensions: &[String]) -> Vec<String> {
    discover_pages_excluding(root, extensions, None)
}

/// Same as [`discover_pages`], but never descends into `excluded_dir`
///
/// Used to keep a generated artifact that lives under the pages root out of
/// its own input. The root itself is always walked, and when `excluded_dir`
/// is the root only the artifact file is skipped.
pub fn discover_pages_excluding(
    root: &Path,
    extensions: &[String],
    excluded_dir: Option<&Path>,
) -> Vec<String> {
    if !root.is_dir() {
        debug!("Pages root does not exist: {:?}", root);
        return Vec::new();
    }

    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_excluded(entry.path(), excluded_dir))
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!("Skipping unreadable entry under {:?}: {}", root, e);
                None
            }
        })
        .filter(|entry| entry.file_type().is_file() && is_page_file(entry.path(), extensions))
        .filter_map(|entry| relative_page_path(root, entry.path()))
        .collect()
}

fn is_excluded(path: &Path, excluded_dir: Option<&Path>) -> bool {
    excluded_dir.is_some_and(|dir| path == dir || path == dir.join(ARTIFACT_FILE_NAME))
}

fn relative_page_path(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    let parts: Vec<String> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    Some(parts.join("/"))
}
