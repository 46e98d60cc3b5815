/// Segment extraction and collection for page paths
///
/// All functions are **pure**: given same input, always produce same output with no side effects.

use std::collections::HashSet;

/// Sentinel segment for a page that sits directly in the pages root
///
/// Never matches the dynamic-marker syntax, so it is dropped at classification.
pub const ROOT_SEGMENT: &str = ".";

const SEPARATORS: [char; 2] = ['/', '\\'];

/// Extracts the ordered directory segments of a page path
///
/// **Pure function**: drops the file name and splits the rest on the path separator.
///
/// # Rules
///
/// - The last component (the page file itself) is never a segment
/// - `/` and `\` are both separators
/// - Empty and `.` components are skipped (`a//b`, `./a`)
/// - A page with no directory part yields `[ROOT_SEGMENT]`
///
/// # Examples
///
/// ```
/// use pageparams_router::segment::{extract_segments, ROOT_SEGMENT};
///
/// assert_eq!(
///     extract_segments("post/[post_id]/[comment_id]/index.page.tsx"),
///     vec!["post", "[post_id]", "[comment_id]"]
/// );
/// assert_eq!(extract_segments("index.page.tsx"), vec![ROOT_SEGMENT]);
/// ```
pub fn extract_segments(page_path: &str) -> Vec<&str> {
    let Some(split_at) = page_path.rfind(SEPARATORS) else {
        return vec![ROOT_SEGMENT];
    };

    let segments: Vec<&str> = page_path[..split_at]
        .split(SEPARATORS)
        .filter(|segment| !segment.is_empty() && *segment != ".")
        .collect();

    if segments.is_empty() {
        vec![ROOT_SEGMENT]
    } else {
        segments
    }
}

/// Deduplicated collection of segments in first-seen order
///
/// Insertion order is kept so everything derived from the set is reproducible
/// for the same page list.
#[derive(Debug, Clone, Default)]
pub struct SegmentSet {
    ordered: Vec<String>,
    seen: HashSet<String>,
}

impl SegmentSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a segment, returning `false` if it was already present
    pub fn insert(&mut self, segment: &str) -> bool {
        if self.seen.contains(segment) {
            return false;
        }
        self.seen.insert(segment.to_string());
        self.ordered.push(segment.to_string());
        true
    }

    pub fn contains(&self, segment: &str) -> bool {
        self.seen.contains(segment)
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    /// Iterates segments in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ordered.iter().map(String::as_str)
    }
}

impl<S: AsRef<str>> FromIterator<S> for SegmentSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        iter.into_iter().fold(Self::new(), |mut set, segment| {
            set.insert(segment.as_ref());
            set
        })
    }
}

/// Flattens per-page segment lists into one [`SegmentSet`]
///
/// Lists may have any depth; nothing is aligned or padded across pages.
///
/// # Examples
///
/// ```
/// use pageparams_router::segment::collect_segments;
///
/// let set = collect_segments(vec![vec!["users", "[id]"], vec!["[id]"], vec!["about"]]);
/// assert_eq!(set.iter().collect::<Vec<_>>(), vec!["users", "[id]", "about"]);
/// ```
pub fn collect_segments<I, L, S>(lists: I) -> SegmentSet
where
    I: IntoIterator<Item = L>,
    L: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lists.into_iter().flatten().collect()
}
