//! View types

use std::fmt;
use std::sync::Arc;

/// A resolved view the host can render
pub trait View: Send + Sync + fmt::Debug {
    /// Component name
    fn name(&self) -> &str;

    /// Component body
    fn content(&self) -> &str;
}

/// Shared handle to a resolved view
pub type ViewHandle = Arc<dyn View>;

/// Whether two handles point at the same view instance
pub fn same_view(a: &ViewHandle, b: &ViewHandle) -> bool {
    std::ptr::eq(Arc::as_ptr(a) as *const (), Arc::as_ptr(b) as *const ())
}

/// A view whose body is known up front
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticView {
    name: String,
    content: String,
}

impl StaticView {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}

impl View for StaticView {
    fn name(&self) -> &str {
        &self.name
    }

    fn content(&self) -> &str {
        &self.content
    }
}
