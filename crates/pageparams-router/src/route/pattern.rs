/// Pattern parsing for dynamic route segments
///
/// Pure functional parsing of file-based route segments into typed parameters.
/// All functions are **pure**: same input → same output, no side effects.

/// The marker form a dynamic segment was written in
///
/// # Examples
///
/// ```
/// use pageparams_router::route::pattern::{classify_segment, ParamKind};
///
/// assert_eq!(classify_segment("[id]").unwrap().kind, ParamKind::Single);
/// assert_eq!(classify_segment("[...slug]").unwrap().kind, ParamKind::CatchAll);
/// assert_eq!(classify_segment("[[...slug]]").unwrap().kind, ParamKind::OptionalCatchAll);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamKind {
    /// Single parameter: [id]
    Single,
    /// Catch-all parameter: [...slug]
    CatchAll,
    /// Optional catch-all parameter: [[...slug]]
    OptionalCatchAll,
}

/// Value shape a parameter takes at request time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamShape {
    String,
    Array,
}

impl ParamKind {
    /// Maps the marker form to its value shape
    ///
    /// Optional catch-all shares the array shape with the required form; the
    /// shape carries no optionality.
    pub fn shape(self) -> ParamShape {
        match self {
            ParamKind::Single => ParamShape::String,
            ParamKind::CatchAll | ParamKind::OptionalCatchAll => ParamShape::Array,
        }
    }
}

impl ParamShape {
    /// Tag used in the declaration artifact (`"string"` / `"array"`)
    pub fn as_str(self) -> &'static str {
        match self {
            ParamShape::String => "string",
            ParamShape::Array => "array",
        }
    }
}

/// A dynamic segment with its delimiters stripped to a bare identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClassifiedRoute {
    pub slug: String,
    pub kind: ParamKind,
}

impl ClassifiedRoute {
    pub fn new(slug: impl Into<String>, kind: ParamKind) -> Self {
        Self {
            slug: slug.into(),
            kind,
        }
    }
}

/// Classifies a segment into a dynamic parameter (pure function)
///
/// **Pure functional parser**: Maps string segment → `Option<ClassifiedRoute>`
///
/// # Parsing Rules (evaluated in order)
///
/// 1. **Optional catch-all**: `[[...name]]`
/// 2. **Catch-all**: `[...name]`
/// 3. **Single**: `[name]`
/// 4. Anything else → `None`
///
/// Malformed markers (`[id`, `[]`, `[...]`, `[[id]]`, `[a]b]`) and names that
/// are not identifiers (`[my-id]`) also yield `None`. Callers drop them
/// without failing the build.
///
/// # Examples
///
/// ```
/// use pageparams_router::route::pattern::{classify_segment, ClassifiedRoute, ParamKind};
///
/// assert_eq!(classify_segment("[id]"), Some(ClassifiedRoute::new("id", ParamKind::Single)));
/// assert_eq!(classify_segment("about"), None);
/// assert_eq!(classify_segment("[id"), None);
/// ```
pub fn classify_segment(segment: &str) -> Option<ClassifiedRoute> {
    // Double brackets are only valid around a catch-all
    if let Some(inner) = segment
        .strip_prefix("[[")
        .and_then(|s| s.strip_suffix("]]"))
    {
        return inner
            .strip_prefix("...")
            .and_then(|name| parameter(name, ParamKind::OptionalCatchAll));
    }

    let inner = segment.strip_prefix('[')?.strip_suffix(']')?;
    match inner.strip_prefix("...") {
        Some(name) => parameter(name, ParamKind::CatchAll),
        None => parameter(inner, ParamKind::Single),
    }
}

fn parameter(name: &str, kind: ParamKind) -> Option<ClassifiedRoute> {
    is_identifier(name).then(|| ClassifiedRoute::new(name, kind))
}

/// Checks that a slug can be used as a field name without quoting
///
/// Accepts `[A-Za-z_$][A-Za-z0-9_$]*`.
///
/// # Examples
///
/// ```
/// use pageparams_router::route::pattern::is_identifier;
///
/// assert!(is_identifier("post_id"));
/// assert!(is_identifier("$slug"));
/// assert!(!is_identifier("1st"));
/// assert!(!is_identifier("my-id"));
/// assert!(!is_identifier(""));
/// ```
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' || first == '$' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
        }
        _ => false,
    }
}
