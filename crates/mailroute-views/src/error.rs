//! View loading errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ViewError {
    /// The loader could not produce the view
    ///
    /// Terminal for the navigation that triggered the load; nothing retries
    /// automatically.
    #[error("failed to load view `{view}`: {source}")]
    LoadFailed {
        view: String,
        #[source]
        source: anyhow::Error,
    },
}

impl ViewError {
    /// Name of the view that failed
    pub fn view(&self) -> &str {
        match self {
            ViewError::LoadFailed { view, .. } => view,
        }
    }
}
