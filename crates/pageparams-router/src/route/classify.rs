/// Classification of a whole segment set into route parameters
///
/// Pure functional fold over a [`SegmentSet`]: same input → same output.

use std::collections::HashMap;

use super::pattern::{classify_segment, ClassifiedRoute};
use crate::segment::SegmentSet;

/// Dynamic parameters found in a page tree
///
/// `routes` is unique by slug and keeps first-seen order. A later segment
/// whose slug is already taken by a different marker form (`[id]` then
/// `[...id]`) is kept aside in `shadowed` instead of being emitted twice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteSet {
    pub routes: Vec<ClassifiedRoute>,
    pub shadowed: Vec<ClassifiedRoute>,
}

impl RouteSet {
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ClassifiedRoute> {
        self.routes.iter()
    }
}

/// Internal state accumulator for fold-based classification
#[derive(Default)]
struct ClassifyState {
    routes: Vec<ClassifiedRoute>,
    shadowed: Vec<ClassifiedRoute>,
    slots: HashMap<String, usize>,
}

impl ClassifyState {
    /// Adds a route unless its slug is already taken
    fn with_route(mut self, route: ClassifiedRoute) -> Self {
        match self.slots.get(&route.slug) {
            Some(&slot) if self.routes[slot] == route => {}
            Some(_) => self.shadowed.push(route),
            None => {
                self.slots.insert(route.slug.clone(), self.routes.len());
                self.routes.push(route);
            }
        }
        self
    }

    fn finalize(self) -> RouteSet {
        RouteSet {
            routes: self.routes,
            shadowed: self.shadowed,
        }
    }
}

/// Classifies every dynamic segment of a set (pure function)
///
/// Literal segments, the root sentinel and malformed markers are skipped.
///
/// # Examples
///
/// ```
/// use pageparams_router::{classify_segments, SegmentSet, ParamKind};
///
/// let set: SegmentSet = ["post", "[post_id]", "[...rest]"].into_iter().collect();
/// let routes = classify_segments(&set);
///
/// assert_eq!(routes.len(), 2);
/// assert_eq!(routes.routes[0].slug, "post_id");
/// assert_eq!(routes.routes[1].kind, ParamKind::CatchAll);
/// ```
pub fn classify_segments(segments: &SegmentSet) -> RouteSet {
    segments
        .iter()
        .filter_map(classify_segment)
        .fold(ClassifyState::default(), ClassifyState::with_route)
        .finalize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::pattern::ParamKind;

    fn set(segments: &[&str]) -> SegmentSet {
        segments.iter().collect()
    }

    #[test]
    fn test_literals_only() {
        let routes = classify_segments(&set(&["about", "blog", "."]));
        assert!(routes.is_empty());
        assert!(routes.shadowed.is_empty());
    }

    #[test]
    fn test_malformed_segments_are_dropped() {
        let routes = classify_segments(&set(&["[id", "[]", "[...]", "[ok]"]));
        assert_eq!(routes.routes, vec![ClassifiedRoute::new("ok", ParamKind::Single)]);
    }

    #[test]
    fn test_slug_clash_keeps_first() {
        let routes = classify_segments(&set(&["[id]", "[...id]"]));
        assert_eq!(routes.routes, vec![ClassifiedRoute::new("id", ParamKind::Single)]);
        assert_eq!(routes.shadowed, vec![ClassifiedRoute::new("id", ParamKind::CatchAll)]);
    }
}
