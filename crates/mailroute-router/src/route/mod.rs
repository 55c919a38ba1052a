/// Route module for declared routes
///
/// Contains the pure components for pattern parsing:
/// - `pattern` classifies single segments
/// - `parser` folds a whole declaration into a `ParsedPattern`

pub mod parser;
pub mod pattern;

pub use parser::{parse_pattern, ParsedPattern};
pub use pattern::{classify_segment, is_valid_param_name, shape_of, PatternSegment};
