//! # Mailroute Views
//!
//! View references for the route table.
//!
//! ## Features
//!
//! - **Eager views**: resolved at bootstrap, available synchronously
//! - **Lazy views**: resolved on first navigation through a [`ViewLoader`]
//! - **Memoised loading**: one load in flight per view, later calls reuse the result
//! - **Load statistics**: loader invocations, cache hits and failures
//!
//! ## Example
//!
//! ```rust
//! use mailroute_views::{LazyView, StaticView, ViewHandle, ViewRef};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() {
//!     let compose = LazyView::from_fn("compose", || async {
//!         Ok(Arc::new(StaticView::new("compose", "<form>...</form>")) as ViewHandle)
//!     });
//!     let view = ViewRef::Lazy(compose);
//!
//!     let first = view.resolve().await.unwrap();
//!     let second = view.resolve().await.unwrap();
//!     assert!(mailroute_views::same_view(&first, &second));
//! }
//! ```

pub mod error;
pub mod lazy;
pub mod loader;
pub mod reference;
pub mod view;

pub use error::ViewError;
pub use lazy::{LazyView, LoadStats};
pub use loader::{FnLoader, ViewLoader};
pub use reference::ViewRef;
pub use view::{same_view, StaticView, View, ViewHandle};
