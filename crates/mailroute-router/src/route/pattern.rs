/// Pattern parsing for route segments
///
/// Pure functional classification of URL pattern segments into typed segments.
/// All functions are **pure**: same input → same output, no side effects.

use std::fmt;

/// Represents the different kinds of route pattern segments
///
/// # Examples
///
/// ```
/// use mailroute_router::route::pattern::{classify_segment, PatternSegment};
///
/// assert!(matches!(classify_segment("compose"), PatternSegment::Static(_)));
/// assert!(matches!(classify_segment(":id"), PatternSegment::Required(_)));
/// assert!(matches!(classify_segment(":page?"), PatternSegment::Optional(_)));
/// assert!(matches!(classify_segment("*rest"), PatternSegment::CatchAll(_)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternSegment {
    /// Literal text segment
    Static(String),
    /// Required parameter: `:id`
    Required(String),
    /// Optional parameter: `:id?`
    Optional(String),
    /// Catch-all: `*rest`, consumes the remaining path (at least one segment)
    CatchAll(String),
}

impl PatternSegment {
    /// Parameter name carried by a dynamic segment
    pub fn param_name(&self) -> Option<&str> {
        match self {
            PatternSegment::Static(_) => None,
            PatternSegment::Required(name)
            | PatternSegment::Optional(name)
            | PatternSegment::CatchAll(name) => Some(name),
        }
    }

    /// Segment with parameter names erased
    ///
    /// Two patterns with equal shapes match exactly the same set of paths.
    pub fn shape(&self, case_insensitive: bool) -> String {
        match self {
            PatternSegment::Static(text) if case_insensitive => text.to_ascii_lowercase(),
            PatternSegment::Static(text) => text.clone(),
            PatternSegment::Required(_) => ":".to_string(),
            PatternSegment::Optional(_) => ":?".to_string(),
            PatternSegment::CatchAll(_) => "*".to_string(),
        }
    }
}

/// Shape key of a whole pattern, e.g. `/view/:` for `/view/:id`
pub fn shape_of(segments: &[PatternSegment], case_insensitive: bool) -> String {
    let shape = segments
        .iter()
        .map(|segment| segment.shape(case_insensitive))
        .collect::<Vec<_>>()
        .join("/");
    format!("/{}", shape)
}

impl fmt::Display for PatternSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternSegment::Static(text) => write!(f, "{}", text),
            PatternSegment::Required(name) => write!(f, ":{}", name),
            PatternSegment::Optional(name) => write!(f, ":{}?", name),
            PatternSegment::CatchAll(name) => write!(f, "*{}", name),
        }
    }
}

/// Classifies a segment into a pattern segment (pure function)
///
/// # Parsing Rules (evaluated in order)
///
/// 1. **Optional param**: `:name?`
/// 2. **Required param**: `:name`
/// 3. **Catch-all**: `*name`
/// 4. **Static**: Any other text
///
/// Parameter names are not validated here; see [`is_valid_param_name`].
pub fn classify_segment(segment: &str) -> PatternSegment {
    if let Some(param) = segment.strip_prefix(':') {
        return match param.strip_suffix('?') {
            Some(name) => PatternSegment::Optional(name.to_string()),
            None => PatternSegment::Required(param.to_string()),
        };
    }

    match segment.strip_prefix('*') {
        Some(name) => PatternSegment::CatchAll(name.to_string()),
        None => PatternSegment::Static(segment.to_string()),
    }
}

/// Parameter names are non-empty ASCII identifiers (`[A-Za-z0-9_]`)
pub fn is_valid_param_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}
