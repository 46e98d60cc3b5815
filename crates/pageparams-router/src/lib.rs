//! # pageparams router
//!
//! A zero-dependency library that reads the file-based routing convention of
//! a page tree and infers the dynamic route parameters it declares:
//! - Single parameters (`[id]`) → one string value
//! - Catch-all parameters (`[...slug]`) → a list of values
//! - Optional catch-all parameters (`[[...slug]]`) → a list of values
//!
//! ## Pipeline
//!
//! Every function here is **pure**: same input → same output, no I/O.
//!
//! 1. [`extract_segments`] - page path → ordered directory segments
//! 2. [`collect_segments`] - all segment lists → deduplicated [`SegmentSet`]
//! 3. [`classify_segments`] - [`SegmentSet`] → [`RouteSet`] of typed parameters
//!
//! ## Example
//!
//! ```
//! use pageparams_router::{classify_segments, collect_segments, extract_segments, ParamShape};
//!
//! let pages = ["users/[id]/index.page.tsx", "docs/[...slug]/index.page.tsx"];
//! let segments = collect_segments(pages.iter().map(|p| extract_segments(p)));
//! let routes = classify_segments(&segments);
//!
//! assert_eq!(routes.len(), 2);
//! assert_eq!(routes.routes[0].slug, "id");
//! assert_eq!(routes.routes[1].kind.shape(), ParamShape::Array);
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

pub mod route;
pub mod segment;

pub use route::classify::{classify_segments, RouteSet};
pub use route::pattern::{classify_segment, is_identifier, ClassifiedRoute, ParamKind, ParamShape};
pub use segment::{collect_segments, extract_segments, SegmentSet, ROOT_SEGMENT};
