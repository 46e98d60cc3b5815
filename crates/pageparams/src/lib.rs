// File: src/lib.rs
// Purpose: pageparams library root

//! Generates a TypeScript module describing the dynamic route parameters of a
//! Next.js-style page tree.
//!
//! ```no_run
//! use pageparams::{build, Config, Overrides};
//! use std::path::Path;
//!
//! let root = Path::new(".");
//! let options = Config::load_from_root(root)?.resolve(root, &Overrides::default());
//! let report = build::run(&options)?;
//! println!("{} parameters → {:?}", report.routes.len(), report.artifact);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod build;
pub mod config;
pub mod discovery;
pub mod emitter;
pub mod host_config;

pub use build::BuildReport;
pub use config::{BuildOptions, Config, Overrides, CONFIG_FILE_NAME};
pub use discovery::{discover_pages, is_page_file};
pub use emitter::{render_declaration, write_declaration, DeclarationArtifact, ARTIFACT_FILE_NAME};
pub use host_config::{resolve_page_extensions, DEFAULT_EXTENSIONS};

// Re-export the pure pipeline so callers need a single dependency
pub use pageparams_router::{ClassifiedRoute, ParamKind, ParamShape};
