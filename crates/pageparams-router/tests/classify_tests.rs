/// Integration tests for the segment → parameter pipeline
///
/// Each case documents the Next.js pages convention it mirrors.

use pageparams_router::{
    classify_segment, classify_segments, collect_segments, extract_segments, ClassifiedRoute,
    ParamKind, ParamShape,
};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn routes_for(pages: &[&str]) -> Vec<ClassifiedRoute> {
    let segments = collect_segments(pages.iter().map(|page| extract_segments(page)));
    classify_segments(&segments).routes
}

// ============================================================================
// Single segment classification
// ============================================================================

#[rstest]
#[case("[id]", "id", ParamShape::String)]
#[case("[...ids]", "ids", ParamShape::Array)]
#[case("[[...ids]]", "ids", ParamShape::Array)]
#[case("[post_id]", "post_id", ParamShape::String)]
#[case("[...$rest]", "$rest", ParamShape::Array)]
fn test_dynamic_markers(#[case] segment: &str, #[case] slug: &str, #[case] shape: ParamShape) {
    let route = classify_segment(segment).expect("segment should classify");
    assert_eq!(route.slug, slug);
    assert_eq!(route.kind.shape(), shape);
}

#[rstest]
#[case("about")]
#[case(".")]
#[case("[id")]
#[case("id]")]
#[case("[]")]
#[case("[...]")]
#[case("[[...]]")]
#[case("[[id]]")]
#[case("[[...ids]")]
#[case("[a]b]")]
#[case("[my-id]")]
#[case("[..id]")]
#[case("(group)")]
fn test_non_dynamic_segments(#[case] segment: &str) {
    assert_eq!(classify_segment(segment), None);
}

// ============================================================================
// Whole page trees
// ============================================================================

#[test]
fn test_nextjs_pages_scenario() {
    // Next.js: pages/article/[...article_id]/index.page.tsx → /article/*
    // Next.js: pages/categories/[[...categories_id]]/index.page.tsx → /categories/*?
    // Next.js: pages/post/[post_id]/[comment_id]/index.page.tsx → /post/:post_id/:comment_id
    let routes = routes_for(&[
        "article/[...article_id]/index.page.tsx",
        "categories/[[...categories_id]]/index.page.tsx",
        "index.page.tsx",
        "post/[post_id]/[comment_id]/index.page.tsx",
    ]);

    assert_eq!(
        routes,
        vec![
            ClassifiedRoute::new("article_id", ParamKind::CatchAll),
            ClassifiedRoute::new("categories_id", ParamKind::OptionalCatchAll),
            ClassifiedRoute::new("post_id", ParamKind::Single),
            ClassifiedRoute::new("comment_id", ParamKind::Single),
        ]
    );
}

#[test]
fn test_static_tree_has_no_parameters() {
    let routes = routes_for(&["index.tsx", "about/index.tsx", "blog/posts/latest.tsx"]);
    assert!(routes.is_empty());
}

#[test]
fn test_shared_segment_is_emitted_once() {
    let routes = routes_for(&["users/[id]/index.tsx", "posts/[id]/edit.tsx"]);
    assert_eq!(routes, vec![ClassifiedRoute::new("id", ParamKind::Single)]);
}

#[test]
fn test_dynamic_file_name_is_not_a_segment() {
    // Only directories become segments; pages/blog/[slug].tsx contributes "blog"
    let routes = routes_for(&["blog/[slug].tsx"]);
    assert!(routes.is_empty());
}

#[test]
fn test_order_is_stable_across_runs() {
    let pages = [
        "shop/[category]/[item]/index.tsx",
        "docs/[...slug]/index.tsx",
        "shop/[category]/index.tsx",
    ];
    assert_eq!(routes_for(&pages), routes_for(&pages));
}
