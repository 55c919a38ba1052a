// File: src/navigation/mod.rs
// Purpose: Client-side navigation over the mail route table

pub mod base;
pub mod error;

pub use base::BasePath;
pub use error::NavigationError;

use crate::config::RoutingConfig;
use crate::routes::MailRouter;
use mailroute_router::{generate_path, normalize_path, split_url, Params, RouteTarget};
use mailroute_views::{ViewHandle, ViewRef};
use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

/// Stages a single navigation passes through
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationPhase {
    Unmatched,
    Matched,
    Loading,
    Ready,
}

impl fmt::Display for NavigationPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phase = match self {
            NavigationPhase::Unmatched => "unmatched",
            NavigationPhase::Matched => "matched",
            NavigationPhase::Loading => "loading",
            NavigationPhase::Ready => "ready",
        };
        f.write_str(phase)
    }
}

/// Where the UI currently is
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    /// Full href including the base path
    pub href: String,
    /// Application path, without base, query or fragment
    pub path: String,
    /// Name of the route that rendered
    pub name: String,
    pub params: Params,
    pub query: HashMap<String, String>,
    pub fragment: Option<String>,
    /// Path originally requested when redirects were followed
    pub redirected_from: Option<String>,
}

impl Location {
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }
}

/// A completed navigation
#[derive(Debug, Clone)]
pub struct Navigation {
    pub location: Location,
    pub view: ViewHandle,
}

/// Drives navigation events against a frozen route table
///
/// Navigations may overlap while a lazy view is loading. Only the most
/// recently started one commits; earlier ones end with
/// [`NavigationError::Superseded`].
pub struct Navigator {
    router: Arc<MailRouter>,
    base: BasePath,
    redirect_limit: usize,
    current: RwLock<Option<Location>>,
    generation: AtomicU64,
}

impl Navigator {
    pub fn new(router: Arc<MailRouter>, config: &RoutingConfig) -> Self {
        Self {
            router,
            base: BasePath::new(&config.base_path),
            redirect_limit: config.redirect_limit,
            current: RwLock::new(None),
            generation: AtomicU64::new(0),
        }
    }

    pub fn router(&self) -> &Arc<MailRouter> {
        &self.router
    }

    pub fn base(&self) -> &BasePath {
        &self.base
    }

    /// Navigate to a URL as the browser reports it, base path included
    pub async fn push(&self, url: &str) -> Result<Navigation, NavigationError> {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        debug!(url, generation, phase = %NavigationPhase::Unmatched, "navigation started");

        let app_url = self.base.strip(url).ok_or_else(|| NavigationError::OutsideBase {
            url: url.to_string(),
            base: self.base.as_str().to_string(),
        })?;

        let (location, reference) = self.locate(app_url)?;
        debug!(route = %location.name, path = %location.path, phase = %NavigationPhase::Matched, "navigation matched");

        if !reference.is_ready() {
            debug!(route = %location.name, view = reference.name(), phase = %NavigationPhase::Loading, "loading view");
        }

        let view = reference
            .resolve()
            .await
            .map_err(|source| NavigationError::LoadFailed {
                route: location.name.clone(),
                source,
            })?;

        let mut current = self.current.write().await;
        if self.generation.load(Ordering::SeqCst) != generation {
            debug!(url, generation, "navigation superseded");
            return Err(NavigationError::Superseded {
                url: url.to_string(),
            });
        }
        *current = Some(location.clone());
        drop(current);

        info!(
            href = %location.href,
            route = %location.name,
            phase = %NavigationPhase::Ready,
            "navigation committed"
        );
        Ok(Navigation { location, view })
    }

    /// Navigate to a named route
    pub async fn push_named(&self, name: &str, params: &[(&str, &str)]) -> Result<Navigation, NavigationError> {
        let href = self.href(name, params)?;
        self.push(&href).await
    }

    /// Href for a named route, base path included
    pub fn href(&self, name: &str, params: &[(&str, &str)]) -> Result<String, NavigationError> {
        let path = self.router.url_for_params(name, params)?;
        Ok(self.base.join(&path))
    }

    /// The last committed location
    pub async fn current(&self) -> Option<Location> {
        self.current.read().await.clone()
    }

    /// Resolve a base-relative URL, following redirects
    fn locate(&self, url: &str) -> Result<(Location, &ViewRef), NavigationError> {
        let requested = split_url(url);
        let mut target = url.to_string();
        let mut redirected_from: Option<String> = None;

        for _ in 0..=self.redirect_limit {
            let route_match = match self.router.resolve(&target) {
                Some(route_match) => route_match,
                None => {
                    let path = normalize_path(split_url(&target).path).into_owned();
                    warn!(path = %path, "no route for navigation");
                    return Err(NavigationError::NotFound { path });
                }
            };

            let route = route_match.route;
            match &route.target {
                RouteTarget::View(reference) => {
                    let href = self.base.join(&with_suffix(
                        &route_match.path,
                        requested.query,
                        requested.fragment,
                    ));
                    let location = Location {
                        href,
                        path: route_match.path.clone(),
                        name: route.name.clone(),
                        params: route_match.params,
                        query: route_match.query,
                        fragment: route_match.fragment,
                        redirected_from,
                    };
                    return Ok((location, reference));
                }
                RouteTarget::Redirect { segments, .. } => {
                    let to = generate_path(&route.name, segments, &route_match.params)
                        .map_err(|err| {
                            warn!(from = %route_match.path, error = %err, "redirect target could not be built");
                            NavigationError::Router(err)
                        })?;
                    debug!(from = %route_match.path, to = %to, "following redirect");
                    if redirected_from.is_none() {
                        redirected_from = Some(route_match.path.clone());
                    }
                    target = with_suffix(&to, requested.query, requested.fragment);
                }
            }
        }

        warn!(url, limit = self.redirect_limit, "redirect limit exceeded");
        Err(NavigationError::RedirectLoop {
            from: url.to_string(),
            limit: self.redirect_limit,
        })
    }
}

impl fmt::Debug for Navigator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Navigator")
            .field("routes", &self.router.len())
            .field("base", &self.base)
            .field("redirect_limit", &self.redirect_limit)
            .field("generation", &self.generation.load(Ordering::Relaxed))
            .finish()
    }
}

fn with_suffix(path: &str, query: Option<&str>, fragment: Option<&str>) -> String {
    let mut url = path.to_string();
    if let Some(query) = query {
        url.push('?');
        url.push_str(query);
    }
    if let Some(fragment) = fragment {
        url.push('#');
        url.push_str(fragment);
    }
    url
}
