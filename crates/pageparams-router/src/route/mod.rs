/// Route module for dynamic parameter inference
///
/// Contains pure functional components:
/// - `pattern` - classify one segment
/// - `classify` - classify a whole segment set with slug deduplication

pub mod classify;
pub mod pattern;

// Re-export commonly used types
pub use classify::{classify_segments, RouteSet};
pub use pattern::{classify_segment, ClassifiedRoute, ParamKind, ParamShape};
