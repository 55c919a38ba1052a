//! View loaders

use crate::view::ViewHandle;
use anyhow::Result;
use async_trait::async_trait;
use std::future::Future;
use std::pin::Pin;

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Trait for anything that can produce a view asynchronously
#[async_trait]
pub trait ViewLoader: Send + Sync {
    /// Produce the view
    async fn load(&self) -> Result<ViewHandle>;

    /// Short label for logs
    fn describe(&self) -> String {
        "view loader".to_string()
    }
}

/// Loader backed by an async closure
pub struct FnLoader {
    label: String,
    load: Box<dyn Fn() -> BoxFuture<'static, Result<ViewHandle>> + Send + Sync>,
}

impl FnLoader {
    pub fn new<F, Fut>(label: impl Into<String>, load: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<ViewHandle>> + Send + 'static,
    {
        Self {
            label: label.into(),
            load: Box::new(move || Box::pin(load())),
        }
    }
}

impl std::fmt::Debug for FnLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnLoader").field("label", &self.label).finish()
    }
}

#[async_trait]
impl ViewLoader for FnLoader {
    async fn load(&self) -> Result<ViewHandle> {
        (self.load)().await
    }

    fn describe(&self) -> String {
        self.label.clone()
    }
}
