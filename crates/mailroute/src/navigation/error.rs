// File: src/navigation/error.rs
// Purpose: Navigation failure taxonomy

use mailroute_router::RouterError;
use mailroute_views::ViewError;
use thiserror::Error;

/// Why a navigation did not produce a view
#[derive(Debug, Error)]
pub enum NavigationError {
    /// No route matches; the host shows its not-found view
    #[error("no route matches `{path}`")]
    NotFound { path: String },

    #[error("`{url}` is outside the application base `{base}`")]
    OutsideBase { url: String, base: String },

    #[error("redirects starting at `{from}` exceeded {limit} hops")]
    RedirectLoop { from: String, limit: usize },

    /// The lazily-referenced view could not be loaded; not retried
    #[error("navigation to route `{route}` failed")]
    LoadFailed {
        route: String,
        #[source]
        source: ViewError,
    },

    /// A newer navigation started while this one was loading its view
    #[error("navigation to `{url}` was superseded")]
    Superseded { url: String },

    #[error(transparent)]
    Router(#[from] RouterError),
}

impl NavigationError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, NavigationError::NotFound { .. })
    }
}
