//! Memoised lazy view loading

use crate::error::ViewError;
use crate::loader::{FnLoader, ViewLoader};
use crate::view::ViewHandle;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::{OnceCell, RwLock};
use tracing::{debug, warn};

/// Load statistics for a lazy view
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadStats {
    /// Number of times the loader was invoked
    pub loads: u64,

    /// Number of loader invocations that failed
    pub failures: u64,

    /// Number of calls answered from the cached view
    pub hits: u64,
}

impl LoadStats {
    /// Share of calls answered without running the loader
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.loads;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// A view resolved on first use
///
/// The first call to [`LazyView::get`] runs the loader. Concurrent callers
/// wait on that same load instead of starting their own. Once a load
/// succeeds, every later call returns the cached handle without touching
/// the loader. A failed load leaves the view unloaded; the next call tries
/// again.
///
/// Clones share the cache.
#[derive(Clone)]
pub struct LazyView {
    name: String,
    loader: Arc<dyn ViewLoader>,
    cell: Arc<OnceCell<ViewHandle>>,
    stats: Arc<RwLock<LoadStats>>,
}

impl LazyView {
    /// Create a lazy view around a loader
    pub fn new(name: impl Into<String>, loader: impl ViewLoader + 'static) -> Self {
        Self::with_shared_loader(name, Arc::new(loader))
    }

    /// Create a lazy view around an already-shared loader
    pub fn with_shared_loader(name: impl Into<String>, loader: Arc<dyn ViewLoader>) -> Self {
        Self {
            name: name.into(),
            loader,
            cell: Arc::new(OnceCell::new()),
            stats: Arc::new(RwLock::new(LoadStats::default())),
        }
    }

    /// Create a lazy view from an async closure
    pub fn from_fn<F, Fut>(name: impl Into<String>, load: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = anyhow::Result<ViewHandle>> + Send + 'static,
    {
        let name = name.into();
        let loader = FnLoader::new(name.clone(), load);
        Self::new(name, loader)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether a load has already succeeded
    pub fn is_loaded(&self) -> bool {
        self.cell.initialized()
    }

    /// The cached view, without triggering a load
    pub fn peek(&self) -> Option<ViewHandle> {
        self.cell.get().cloned()
    }

    /// Resolve the view, loading it if this is the first successful call
    pub async fn get(&self) -> Result<ViewHandle, ViewError> {
        if let Some(view) = self.cell.get() {
            self.record_hit().await;
            return Ok(Arc::clone(view));
        }

        let mut ran_loader = false;
        let ran = &mut ran_loader;
        let result = self
            .cell
            .get_or_try_init(|| async move {
                *ran = true;
                debug!(view = %self.name, loader = %self.loader.describe(), "loading view");
                self.loader.load().await
            })
            .await
            .map(Arc::clone);

        match result {
            Ok(view) => {
                if ran_loader {
                    self.record_load(false).await;
                    debug!(view = %self.name, "view loaded");
                } else {
                    // Another caller finished the load while we waited.
                    self.record_hit().await;
                }
                Ok(view)
            }
            Err(source) => {
                self.record_load(true).await;
                warn!(view = %self.name, error = %source, "view load failed");
                Err(ViewError::LoadFailed {
                    view: self.name.clone(),
                    source,
                })
            }
        }
    }

    /// Get load statistics
    pub async fn stats(&self) -> LoadStats {
        *self.stats.read().await
    }

    async fn record_hit(&self) {
        let mut stats = self.stats.write().await;
        stats.hits += 1;
    }

    async fn record_load(&self, failed: bool) {
        let mut stats = self.stats.write().await;
        stats.loads += 1;
        if failed {
            stats.failures += 1;
        }
    }
}

impl std::fmt::Debug for LazyView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LazyView")
            .field("name", &self.name)
            .field("loader", &self.loader.describe())
            .field("loaded", &self.is_loaded())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::StaticView;

    #[test]
    fn test_hit_rate() {
        let stats = LoadStats {
            loads: 1,
            failures: 0,
            hits: 3,
        };
        assert_eq!(stats.hit_rate(), 0.75);
        assert_eq!(LoadStats::default().hit_rate(), 0.0);
    }

    #[tokio::test]
    async fn test_peek_does_not_load() {
        let view = LazyView::from_fn("log", || async {
            Ok(Arc::new(StaticView::new("log", "entries")) as ViewHandle)
        });

        assert!(view.peek().is_none());
        assert!(!view.is_loaded());
        assert_eq!(view.stats().await, LoadStats::default());

        view.get().await.unwrap();
        assert!(view.peek().is_some());
        assert!(view.is_loaded());
    }

    #[tokio::test]
    async fn test_clones_share_cache() {
        let view = LazyView::from_fn("log", || async {
            Ok(Arc::new(StaticView::new("log", "entries")) as ViewHandle)
        });
        let clone = view.clone();

        let a = view.get().await.unwrap();
        let b = clone.get().await.unwrap();
        assert!(crate::same_view(&a, &b));
        assert_eq!(view.stats().await.loads, 1);
        assert_eq!(clone.stats().await.hits, 1);
    }
}
