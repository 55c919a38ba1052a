/// Pattern parsing for route declarations
///
/// Turns a declared pattern such as `/view/:id` into typed segments.
/// Parsing is a fold over the segments with a local accumulator; the only
/// side effect is the returned value.

use crate::path::normalize_path;
use crate::RouterError;

use super::pattern::{classify_segment, is_valid_param_name, shape_of, PatternSegment};

/// A validated, normalized route pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedPattern {
    /// Canonical pattern text, e.g. `/view/:id`
    pub pattern: String,
    /// Typed segments in declaration order (empty for `/`)
    pub segments: Vec<PatternSegment>,
    /// Parameter names in declaration order
    pub params: Vec<String>,
}

impl ParsedPattern {
    /// Shape key used for duplicate detection
    ///
    /// # Examples
    ///
    /// ```
    /// use mailroute_router::route::parser::parse_pattern;
    ///
    /// let a = parse_pattern("/view/:id").unwrap();
    /// let b = parse_pattern("/view/:key").unwrap();
    /// assert_eq!(a.shape(false), b.shape(false));
    /// ```
    pub fn shape(&self, case_insensitive: bool) -> String {
        shape_of(&self.segments, case_insensitive)
    }
}

/// Fold accumulator for pattern parsing
#[derive(Default)]
struct ParseState {
    segments: Vec<PatternSegment>,
    params: Vec<String>,
}

impl ParseState {
    fn with_segment(mut self, raw: &str, segment: PatternSegment) -> Result<Self, RouterError> {
        if matches!(self.segments.last(), Some(PatternSegment::CatchAll(_))) {
            return Err(RouterError::invalid_pattern(
                raw,
                "catch-all segment must be the last segment",
            ));
        }

        match segment.param_name() {
            Some(name) if !is_valid_param_name(name) => {
                return Err(RouterError::invalid_pattern(
                    raw,
                    format!("invalid parameter name `{}`", name),
                ));
            }
            Some(name) if self.params.iter().any(|p| p == name) => {
                return Err(RouterError::invalid_pattern(
                    raw,
                    format!("parameter `{}` appears more than once", name),
                ));
            }
            Some(name) => self.params.push(name.to_string()),
            None => {
                if let PatternSegment::Static(text) = &segment {
                    if text.contains(['?', '#']) {
                        return Err(RouterError::invalid_pattern(
                            raw,
                            format!("segment `{}` contains a query or fragment marker", text),
                        ));
                    }
                }
            }
        }

        self.segments.push(segment);
        Ok(self)
    }

    fn finalize(self) -> ParsedPattern {
        let pattern = if self.segments.is_empty() {
            "/".to_string()
        } else {
            self.segments
                .iter()
                .fold(String::new(), |mut acc, segment| {
                    acc.push('/');
                    acc.push_str(&segment.to_string());
                    acc
                })
        };

        ParsedPattern {
            pattern,
            segments: self.segments,
            params: self.params,
        }
    }
}

/// Parses a declared route pattern (pure function)
///
/// The pattern is normalized first, so `view/:id/` and `/view/:id` are the
/// same declaration.
///
/// # Examples
///
/// ```
/// use mailroute_router::route::parser::parse_pattern;
///
/// let parsed = parse_pattern("/").unwrap();
/// assert_eq!(parsed.pattern, "/");
/// assert!(parsed.segments.is_empty());
///
/// let parsed = parse_pattern("view/:id/").unwrap();
/// assert_eq!(parsed.pattern, "/view/:id");
/// assert_eq!(parsed.params, vec!["id".to_string()]);
///
/// assert!(parse_pattern("/files/*rest/more").is_err());
/// ```
pub fn parse_pattern(raw: &str) -> Result<ParsedPattern, RouterError> {
    let normalized = normalize_path(raw);

    normalized
        .split('/')
        .filter(|s| !s.is_empty())
        .try_fold(ParseState::default(), |state, segment| {
            state.with_segment(raw, classify_segment(segment))
        })
        .map(ParseState::finalize)
}
