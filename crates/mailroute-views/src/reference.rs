//! Eager or lazy view references

use crate::error::ViewError;
use crate::lazy::LazyView;
use crate::loader::ViewLoader;
use crate::view::{View, ViewHandle};
use std::sync::Arc;
use tracing::info;

/// What a route points at
#[derive(Clone)]
pub enum ViewRef {
    /// Resolved at bootstrap
    Eager(ViewHandle),

    /// Resolved on first navigation, then cached
    Lazy(LazyView),
}

impl ViewRef {
    /// Wrap an already-built view
    pub fn eager(view: impl View + 'static) -> Self {
        ViewRef::Eager(Arc::new(view))
    }

    /// Run `loader` now and keep the result as an eager reference
    ///
    /// Used at bootstrap; a failure here should abort startup.
    pub async fn preload(
        name: impl Into<String>,
        loader: impl ViewLoader,
    ) -> Result<Self, ViewError> {
        let name = name.into();
        match loader.load().await {
            Ok(view) => {
                info!(view = %name, "eager view loaded");
                Ok(ViewRef::Eager(view))
            }
            Err(source) => Err(ViewError::LoadFailed { view: name, source }),
        }
    }

    /// Resolve to a view handle, loading lazily if needed
    pub async fn resolve(&self) -> Result<ViewHandle, ViewError> {
        match self {
            ViewRef::Eager(view) => Ok(Arc::clone(view)),
            ViewRef::Lazy(lazy) => lazy.get().await,
        }
    }

    /// Whether the view is available without waiting
    pub fn is_ready(&self) -> bool {
        match self {
            ViewRef::Eager(_) => true,
            ViewRef::Lazy(lazy) => lazy.is_loaded(),
        }
    }

    pub fn is_lazy(&self) -> bool {
        matches!(self, ViewRef::Lazy(_))
    }

    pub fn name(&self) -> &str {
        match self {
            ViewRef::Eager(view) => view.name(),
            ViewRef::Lazy(lazy) => lazy.name(),
        }
    }
}

impl From<LazyView> for ViewRef {
    fn from(lazy: LazyView) -> Self {
        ViewRef::Lazy(lazy)
    }
}

impl std::fmt::Debug for ViewRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViewRef::Eager(view) => f.debug_tuple("Eager").field(&view.name()).finish(),
            ViewRef::Lazy(lazy) => f.debug_tuple("Lazy").field(lazy).finish(),
        }
    }
}
