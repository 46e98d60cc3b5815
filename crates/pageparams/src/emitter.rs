// File: src/emitter.rs
// Purpose: Renders classified route parameters into a TypeScript declaration module

use anyhow::{Context, Result};
use pageparams_router::{ClassifiedRoute, ParamShape};
use std::fs;
use std::path::{Path, PathBuf};

/// Fixed file name of the generated module inside the output directory
pub const ARTIFACT_FILE_NAME: &str = "dynamicRoutes.ts";

const HEADER: &str = "// This file is generated by pageparams. Do not edit.\n";
const TYPE_NAME: &str = "DynamicRoutes";
const VALUE_NAME: &str = "dynamicRoutes";
const VALUE_TYPE_NAME: &str = "DynamicRoutesValue";

/// A rendered declaration and where it was written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclarationArtifact {
    pub path: PathBuf,
    pub contents: String,
}

fn field_type(shape: ParamShape) -> &'static str {
    match shape {
        ParamShape::String => "string",
        ParamShape::Array => "string[]",
    }
}

fn default_value(shape: ParamShape) -> &'static str {
    match shape {
        ParamShape::String => "''",
        ParamShape::Array => "[]",
    }
}

/// Renders the declaration module text
///
/// Fields follow the order of `routes`, so the same input always renders the
/// same bytes.
///
/// ```text
/// export type DynamicRoutes = {
///   post_id: string
///   slug: string[]
/// }
///
/// export const dynamicRoutes: DynamicRoutes = {
///   post_id: '',
///   slug: [],
/// }
///
/// export type DynamicRoutesValue = typeof dynamicRoutes
/// ```
pub fn render_declaration(routes: &[ClassifiedRoute]) -> String {
    let mut out = String::from(HEADER);
    out.push('\n');

    if routes.is_empty() {
        out.push_str(&format!("export type {TYPE_NAME} = {{}}\n\n"));
        out.push_str(&format!("export const {VALUE_NAME}: {TYPE_NAME} = {{}}\n"));
    } else {
        let fields: String = routes
            .iter()
            .map(|route| format!("  {}: {}\n", route.slug, field_type(route.kind.shape())))
            .collect();
        let defaults: String = routes
            .iter()
            .map(|route| format!("  {}: {},\n", route.slug, default_value(route.kind.shape())))
            .collect();

        out.push_str(&format!("export type {TYPE_NAME} = {{\n{fields}}}\n\n"));
        out.push_str(&format!("export const {VALUE_NAME}: {TYPE_NAME} = {{\n{defaults}}}\n"));
    }

    out.push('\n');
    out.push_str(&format!("export type {VALUE_TYPE_NAME} = typeof {VALUE_NAME}\n"));
    out
}

/// Renders and writes the declaration into `output_dir`
///
/// Creates `output_dir` recursively if needed and overwrites any previous
/// artifact. Failures are returned to the caller.
pub fn write_declaration(output_dir: &Path, routes: &[ClassifiedRoute]) -> Result<DeclarationArtifact> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create output directory: {:?}", output_dir))?;

    let path = output_dir.join(ARTIFACT_FILE_NAME);
    let contents = render_declaration(routes);

    fs::write(&path, &contents)
        .with_context(|| format!("Failed to write declaration: {:?}", path))?;

    Ok(DeclarationArtifact { path, contents })
}
