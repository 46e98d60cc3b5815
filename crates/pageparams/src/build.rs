// File: src/build.rs
// Purpose: One generation pass: discover → extract → collect → classify → emit

use anyhow::Result;
use pageparams_router::{classify_segments, collect_segments, extract_segments, ClassifiedRoute};
use std::path::PathBuf;
use tracing::{debug, info, trace, warn};

use crate::config::BuildOptions;
use crate::discovery::discover_pages_excluding;
use crate::emitter::write_declaration;

/// Outcome of a successful pass
#[derive(Debug, Clone)]
pub struct BuildReport {
    /// Number of page files discovered
    pub pages: usize,
    /// Parameters written to the declaration, in emitted order
    pub routes: Vec<ClassifiedRoute>,
    /// Location of the written declaration
    pub artifact: PathBuf,
}

/// Runs the full pipeline once and writes the declaration
///
/// Discovery and classification never fail; only writing the artifact can.
pub fn run(options: &BuildOptions) -> Result<BuildReport> {
    let pages = discover_pages_excluding(
        &options.source_dir,
        &options.extensions,
        Some(&options.output_dir),
    );
    debug!(
        "Discovered {} pages under {:?} (extensions: {:?})",
        pages.len(),
        options.source_dir,
        options.extensions
    );

    let segments = collect_segments(pages.iter().map(|page| extract_segments(page)));
    debug!("Collected {} distinct segments", segments.len());

    let route_set = classify_segments(&segments);
    for route in &route_set.shadowed {
        warn!(
            "Parameter `{}` declared with conflicting markers; keeping the first one seen",
            route.slug
        );
    }
    for route in &route_set.routes {
        trace!("{} → {}", route.slug, route.kind.shape().as_str());
    }

    let artifact = write_declaration(&options.output_dir, &route_set.routes)?;
    info!(
        "Wrote {} route parameters to {:?}",
        route_set.len(),
        artifact.path
    );

    Ok(BuildReport {
        pages: pages.len(),
        routes: route_set.routes,
        artifact: artifact.path,
    })
}
