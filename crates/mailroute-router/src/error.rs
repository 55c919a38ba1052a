//! Error types for route registration and URL generation

use thiserror::Error;

/// Errors raised while building a route table or generating URLs from it
///
/// `InvalidPattern`, `DuplicatePattern`, `DuplicateName` and `InvalidTable`
/// are configuration errors: they surface while the table is being built and
/// are meant to abort application bootstrap. `UnknownRoute` and
/// `MissingParam` come from URL generation on a finished table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouterError {
    #[error("invalid route pattern `{pattern}`: {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("route pattern `{pattern}` duplicates `{existing}`")]
    DuplicatePattern { pattern: String, existing: String },

    #[error("route name `{0}` is already registered")]
    DuplicateName(String),

    #[error("no route named `{0}`")]
    UnknownRoute(String),

    #[error("route `{route}` requires parameter `{param}`")]
    MissingParam { route: String, param: String },

    #[error("route table has {} configuration error(s): {}", .0.len(), summarize(.0))]
    InvalidTable(Vec<RouterError>),
}

impl RouterError {
    pub(crate) fn invalid_pattern(pattern: &str, reason: impl Into<String>) -> Self {
        RouterError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: reason.into(),
        }
    }

    /// Whether this error belongs to table construction rather than lookup
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            RouterError::InvalidPattern { .. }
                | RouterError::DuplicatePattern { .. }
                | RouterError::DuplicateName(_)
                | RouterError::InvalidTable(_)
        )
    }
}

fn summarize(errors: &[RouterError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_table_lists_every_error() {
        let err = RouterError::InvalidTable(vec![
            RouterError::DuplicateName("home".to_string()),
            RouterError::invalid_pattern("/a/:", "empty parameter name"),
        ]);

        let message = err.to_string();
        assert!(message.starts_with("route table has 2 configuration error(s)"));
        assert!(message.contains("`home`"));
        assert!(message.contains("empty parameter name"));
    }

    #[test]
    fn test_is_configuration() {
        assert!(RouterError::DuplicateName("x".into()).is_configuration());
        assert!(!RouterError::UnknownRoute("x".into()).is_configuration());
    }
}
