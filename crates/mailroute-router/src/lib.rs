//! # Mailroute Router
//!
//! An ordered, immutable route table for client-side navigation with support for:
//! - Static routes (`/compose`)
//! - Dynamic parameters (`/view/:id`)
//! - Optional parameters (`/log/:page?`)
//! - Catch-all routes (`/docs/*path`)
//! - Named routes for programmatic navigation and URL generation
//! - Redirect routes for legacy paths
//!
//! ## Table Lifecycle
//!
//! Routes are declared through a [`RouterBuilder`] during bootstrap. Pattern
//! shapes and route names must be unique; violations are configuration errors
//! reported by the builder. [`RouterBuilder::build`] freezes the table into a
//! [`Router`], which has no mutating API and can be shared freely.
//!
//! ## Matching
//!
//! Resolution walks routes in **declaration order**; the first match wins.
//! Query strings and fragments are split off before matching, and the path is
//! normalized (trailing slashes, double slashes, backslashes).
//!
//! ## Example
//!
//! ```
//! use mailroute_router::Router;
//!
//! let router = Router::builder()
//!     .route("/", "home", "MailBoxView")
//!     .route("/compose", "compose", "ComposeMail")
//!     .route("/view/:id", "view", "ViewMail")
//!     .build()
//!     .unwrap();
//!
//! let route_match = router.resolve("/view/42").unwrap();
//! assert_eq!(route_match.route.name, "view");
//! assert_eq!(route_match.param("id"), Some("42"));
//! assert!(router.resolve("/does-not-exist").is_none());
//! ```

use std::collections::HashMap;

use tracing::{debug, warn};

// ============================================================================
// Module Declarations
// ============================================================================

mod error;
pub mod path;
pub mod route;

pub use error::RouterError;
pub use path::{is_valid_path, normalize_path, parse_query, split_url, UrlParts};
pub use route::{parse_pattern, ParsedPattern, PatternSegment};

use path::decode_component;
use route::shape_of;
use std::borrow::Cow;

/// Parameter values extracted from (or supplied for) a path
pub type Params = HashMap<String, String>;

// ============================================================================
// Core Types
// ============================================================================

/// What a route leads to once matched
#[derive(Debug, Clone, PartialEq)]
pub enum RouteTarget<V> {
    /// Render the referenced view
    View(V),
    /// Navigate to another path instead; `:name` placeholders are filled
    /// from the matched parameters
    Redirect {
        to: String,
        segments: Vec<PatternSegment>,
    },
}

/// Represents a single declared route
#[derive(Debug, Clone)]
pub struct Route<V> {
    /// Canonical URL pattern like "/view/:id"
    pub pattern: String,
    /// Stable symbolic name used for programmatic navigation
    pub name: String,
    /// Parameter names in declaration order
    pub params: Vec<String>,
    /// Typed pattern segments
    pub segments: Vec<PatternSegment>,
    /// View reference or redirect
    pub target: RouteTarget<V>,
    /// Arbitrary metadata (titles, sections, etc.)
    pub metadata: HashMap<String, String>,
}

/// Result of resolving a URL against the table
#[derive(Debug, Clone)]
pub struct RouteMatch<'a, V> {
    /// The matched route
    pub route: &'a Route<V>,
    /// Normalized path that was matched (no query, no fragment)
    pub path: String,
    /// Extracted, percent-decoded parameters
    pub params: Params,
    /// Parsed query string
    pub query: HashMap<String, String>,
    /// Text after `#`
    pub fragment: Option<String>,
}

impl<'a, V> RouteMatch<'a, V> {
    /// Gets an extracted parameter value
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    pub fn name(&self) -> &'a str {
        let route: &'a Route<V> = self.route;
        &route.name
    }

    /// The view reference, or `None` for redirect routes
    pub fn view(&self) -> Option<&'a V> {
        let route: &'a Route<V> = self.route;
        route.view()
    }

    pub fn is_redirect(&self) -> bool {
        self.route.is_redirect()
    }

    /// Redirect destination with the matched parameters substituted
    ///
    /// `None` for view routes.
    ///
    /// ```
    /// use mailroute_router::Router;
    ///
    /// let router = Router::<()>::builder()
    ///     .redirect("/admin/pmode/:id", "legacy-pmode", "/pmode/:id/edit")
    ///     .build()
    ///     .unwrap();
    ///
    /// let route_match = router.resolve("/admin/pmode/7").unwrap();
    /// assert_eq!(route_match.redirect_target(), Some(Ok("/pmode/7/edit".to_string())));
    /// ```
    pub fn redirect_target(&self) -> Option<Result<String, RouterError>> {
        self.route.redirect_target(&self.params)
    }
}

// ============================================================================
// Route Implementation
// ============================================================================

impl<V> Route<V> {
    /// Declares a route that renders `view`
    ///
    /// # Examples
    ///
    /// ```
    /// use mailroute_router::Route;
    ///
    /// let route = Route::new("/view/:id", "view", "ViewMail").unwrap();
    /// assert_eq!(route.pattern, "/view/:id");
    /// assert_eq!(route.params, vec!["id"]);
    /// ```
    pub fn new(pattern: &str, name: impl Into<String>, view: V) -> Result<Self, RouterError> {
        Self::with_target(pattern, name.into(), RouteTarget::View(view))
    }

    /// Declares a redirect route
    ///
    /// Every `:name` placeholder in `to` must be captured by `pattern`. A
    /// placeholder the target requires may not come from an optional
    /// source parameter.
    ///
    /// ```
    /// use mailroute_router::Route;
    ///
    /// let route = Route::<()>::redirect("/admin/log", "legacy-log", "/log").unwrap();
    /// assert!(route.is_redirect());
    ///
    /// assert!(Route::<()>::redirect("/old", "legacy", "/view/:id").is_err());
    /// assert!(Route::<()>::redirect("/old/:id?", "legacy", "/view/:id").is_err());
    /// assert!(Route::<()>::redirect("/old/:id?", "legacy", "/log/:id?").is_ok());
    /// ```
    pub fn redirect(
        pattern: &str,
        name: impl Into<String>,
        to: &str,
    ) -> Result<Self, RouterError> {
        let source = parse_pattern(pattern)?;
        let target = parse_pattern(to)?;

        if let Some(reason) = unfillable_redirect(&source, &target) {
            return Err(RouterError::invalid_pattern(to, reason));
        }

        Self::from_parsed(
            source,
            name.into(),
            RouteTarget::Redirect {
                to: target.pattern,
                segments: target.segments,
            },
        )
    }

    fn with_target(
        pattern: &str,
        name: String,
        target: RouteTarget<V>,
    ) -> Result<Self, RouterError> {
        Self::from_parsed(parse_pattern(pattern)?, name, target)
    }

    fn from_parsed(
        parsed: ParsedPattern,
        name: String,
        target: RouteTarget<V>,
    ) -> Result<Self, RouterError> {
        if name.trim().is_empty() {
            return Err(RouterError::invalid_pattern(
                &parsed.pattern,
                "route name must not be empty",
            ));
        }

        Ok(Route {
            pattern: parsed.pattern,
            name,
            params: parsed.params,
            segments: parsed.segments,
            target,
            metadata: HashMap::new(),
        })
    }

    /// The view reference, or `None` for redirect routes
    pub fn view(&self) -> Option<&V> {
        match &self.target {
            RouteTarget::View(view) => Some(view),
            RouteTarget::Redirect { .. } => None,
        }
    }

    pub fn is_redirect(&self) -> bool {
        matches!(self.target, RouteTarget::Redirect { .. })
    }

    /// Generates the redirect destination for the given parameters
    ///
    /// Returns `None` for view routes, and `MissingParam` when `params`
    /// lacks a value the target needs.
    pub fn redirect_target(&self, params: &Params) -> Option<Result<String, RouterError>> {
        match &self.target {
            RouteTarget::Redirect { segments, .. } => {
                Some(generate_path(&self.name, segments, params))
            }
            RouteTarget::View(_) => None,
        }
    }

    /// Pattern with parameter names erased
    pub fn shape(&self, case_insensitive: bool) -> String {
        shape_of(&self.segments, case_insensitive)
    }

    /// Matches this route against a path (case-sensitive)
    pub fn matches(&self, path: &str) -> Option<Params> {
        self.matches_with_options(path, false)
    }

    /// Matches this route against a path with options
    ///
    /// # Examples
    ///
    /// ```
    /// use mailroute_router::Route;
    ///
    /// let route = Route::new("/compose", "compose", ()).unwrap();
    /// assert!(route.matches_with_options("/Compose", true).is_some());
    /// assert!(route.matches_with_options("/Compose", false).is_none());
    /// ```
    pub fn matches_with_options(&self, path: &str, case_insensitive: bool) -> Option<Params> {
        let path = normalize_path(path);
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        self.capture(&segments, case_insensitive)
    }

    fn capture(&self, path_segments: &[&str], case_insensitive: bool) -> Option<Params> {
        match_segments(
            &self.segments,
            path_segments,
            Params::new(),
            case_insensitive,
        )
    }

    // ========================================================================
    // Metadata Builder Methods
    // ========================================================================

    /// Sets a metadata key-value pair
    ///
    /// ```
    /// use mailroute_router::Route;
    ///
    /// let route = Route::new("/compose", "compose", ())
    ///     .unwrap()
    ///     .with_meta("title", "New message");
    ///
    /// assert_eq!(route.get_meta("title"), Some("New message"));
    /// assert!(!route.has_meta("section"));
    /// ```
    pub fn with_meta(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Sets multiple metadata entries at once
    pub fn with_metadata(mut self, metadata: HashMap<String, String>) -> Self {
        self.metadata.extend(metadata);
        self
    }

    pub fn get_meta(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).map(String::as_str)
    }

    pub fn has_meta(&self, key: &str) -> bool {
        self.metadata.contains_key(key)
    }
}

/// Why `target` cannot always be filled from what `source` captures
fn unfillable_redirect(source: &ParsedPattern, target: &ParsedPattern) -> Option<String> {
    target.segments.iter().find_map(|segment| {
        let (name, required) = match segment {
            PatternSegment::Static(_) => return None,
            PatternSegment::Optional(name) => (name, false),
            PatternSegment::Required(name) | PatternSegment::CatchAll(name) => (name, true),
        };

        let captured = source
            .segments
            .iter()
            .find(|captured| captured.param_name() == Some(name.as_str()));

        match captured {
            None => Some(format!(
                "redirect target uses `{}` which `{}` does not capture",
                segment, source.pattern
            )),
            Some(PatternSegment::Optional(_)) if required => Some(format!(
                "redirect target requires `{}` which `{}` only captures optionally",
                segment, source.pattern
            )),
            Some(_) => None,
        }
    })
}

/// Compares static pattern text with a path segment, decoding the segment
fn segment_eq(pattern: &str, path: &str, case_insensitive: bool) -> bool {
    let path = if path.contains('%') {
        Cow::Owned(decode_component(path))
    } else {
        Cow::Borrowed(path)
    };

    if case_insensitive {
        pattern.eq_ignore_ascii_case(&path)
    } else {
        pattern == path.as_ref()
    }
}

/// Walks pattern and path segments together
///
/// Optional parameters first try to consume a path segment and fall back to
/// matching without it.
fn match_segments(
    pattern: &[PatternSegment],
    path: &[&str],
    mut params: Params,
    case_insensitive: bool,
) -> Option<Params> {
    let Some((head, rest)) = pattern.split_first() else {
        return path.is_empty().then_some(params);
    };

    match head {
        PatternSegment::CatchAll(name) => {
            if path.is_empty() {
                return None;
            }
            let value = path
                .iter()
                .map(|segment| decode_component(segment))
                .collect::<Vec<_>>()
                .join("/");
            params.insert(name.clone(), value);
            Some(params)
        }
        PatternSegment::Optional(name) => {
            if let Some((first, remaining)) = path.split_first() {
                let mut consumed = params.clone();
                consumed.insert(name.clone(), decode_component(first));
                if let Some(found) = match_segments(rest, remaining, consumed, case_insensitive) {
                    return Some(found);
                }
            }
            match_segments(rest, path, params, case_insensitive)
        }
        PatternSegment::Required(name) => {
            let (first, remaining) = path.split_first()?;
            params.insert(name.clone(), decode_component(first));
            match_segments(rest, remaining, params, case_insensitive)
        }
        PatternSegment::Static(text) => {
            let (first, remaining) = path.split_first()?;
            if !segment_eq(text, first, case_insensitive) {
                return None;
            }
            match_segments(rest, remaining, params, case_insensitive)
        }
    }
}

/// Fills a pattern's parameters to produce a concrete path
///
/// `route` names the route in `MissingParam` errors.
pub fn generate_path(
    route: &str,
    segments: &[PatternSegment],
    params: &Params,
) -> Result<String, RouterError> {
    let provided = |name: &str| params.get(name).filter(|value| !value.is_empty());
    let missing = |name: &str| RouterError::MissingParam {
        route: route.to_string(),
        param: name.to_string(),
    };

    let parts = segments
        .iter()
        .map(|segment| match segment {
            PatternSegment::Static(text) => Ok(Some(text.clone())),
            PatternSegment::Required(name) => provided(name.as_str())
                .map(|value| Some(urlencoding::encode(value).into_owned()))
                .ok_or_else(|| missing(name.as_str())),
            PatternSegment::Optional(name) => {
                Ok(provided(name.as_str()).map(|value| urlencoding::encode(value).into_owned()))
            }
            PatternSegment::CatchAll(name) => provided(name.as_str())
                .map(|value| {
                    Some(
                        value
                            .split('/')
                            .filter(|s| !s.is_empty())
                            .map(|s| urlencoding::encode(s).into_owned())
                            .collect::<Vec<_>>()
                            .join("/"),
                    )
                })
                .ok_or_else(|| missing(name.as_str())),
        })
        .collect::<Result<Vec<Option<String>>, RouterError>>()?;

    let joined = parts.into_iter().flatten().collect::<Vec<_>>().join("/");
    Ok(format!("/{}", joined))
}

// ============================================================================
// Router Implementation
// ============================================================================

/// The frozen route table
///
/// Holds routes in declaration order plus a name index. There is no way to
/// add, remove or modify a route once the table is built.
#[derive(Debug, Clone)]
pub struct Router<V> {
    routes: Vec<Route<V>>,
    names: HashMap<String, usize>,
    case_insensitive: bool,
}

impl<V> Default for Router<V> {
    fn default() -> Self {
        Self {
            routes: Vec::new(),
            names: HashMap::new(),
            case_insensitive: false,
        }
    }
}

impl<V> Router<V> {
    /// Starts declaring a table (case-sensitive by default)
    pub fn builder() -> RouterBuilder<V> {
        RouterBuilder::new()
    }

    /// Resolves a URL to the first route whose pattern matches
    ///
    /// Returns `None` when no route applies; the caller decides what a miss
    /// means (typically a not-found view).
    ///
    /// # Examples
    ///
    /// ```
    /// use mailroute_router::Router;
    ///
    /// let router = Router::builder()
    ///     .route("/view/:id", "view", ())
    ///     .build()
    ///     .unwrap();
    ///
    /// let route_match = router.resolve("/view/42/?folder=inbox#body").unwrap();
    /// assert_eq!(route_match.path, "/view/42");
    /// assert_eq!(route_match.param("id"), Some("42"));
    /// assert_eq!(route_match.query.get("folder"), Some(&"inbox".to_string()));
    /// assert_eq!(route_match.fragment.as_deref(), Some("body"));
    /// ```
    pub fn resolve(&self, url: &str) -> Option<RouteMatch<'_, V>> {
        let parts = split_url(url);
        let path = normalize_path(parts.path);
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        let found = self.routes.iter().find_map(|route| {
            route
                .capture(&segments, self.case_insensitive)
                .map(|params| (route, params))
        });

        match found {
            Some((route, params)) => {
                debug!(path = %path, route = %route.name, "route matched");
                Some(RouteMatch {
                    route,
                    path: path.into_owned(),
                    params,
                    query: parts.query.map(parse_query).unwrap_or_default(),
                    fragment: parts.fragment.map(str::to_string),
                })
            }
            None => {
                debug!(path = %path, "no route matched");
                None
            }
        }
    }

    /// Looks up a route by name
    pub fn route(&self, name: &str) -> Option<&Route<V>> {
        self.names.get(name).map(|&index| &self.routes[index])
    }

    /// Generates a path for a named route
    ///
    /// Parameter values are percent-encoded. Optional parameters that are
    /// absent are dropped from the path.
    ///
    /// # Examples
    ///
    /// ```
    /// use mailroute_router::Router;
    /// use std::collections::HashMap;
    ///
    /// let router = Router::builder()
    ///     .route("/view/:id", "view", ())
    ///     .build()
    ///     .unwrap();
    ///
    /// let mut params = HashMap::new();
    /// params.insert("id".to_string(), "42".to_string());
    /// assert_eq!(router.url_for("view", &params).unwrap(), "/view/42");
    ///
    /// assert!(router.url_for("view", &HashMap::new()).is_err());
    /// assert!(router.url_for("missing", &params).is_err());
    /// ```
    pub fn url_for(&self, name: &str, params: &Params) -> Result<String, RouterError> {
        let route = self
            .route(name)
            .ok_or_else(|| RouterError::UnknownRoute(name.to_string()))?;
        generate_path(&route.name, &route.segments, params)
    }

    /// Convenience wrapper over [`Router::url_for`] taking borrowed pairs
    pub fn url_for_params(&self, name: &str, params: &[(&str, &str)]) -> Result<String, RouterError> {
        let params: Params = params
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        self.url_for(name, &params)
    }

    /// All routes in declaration order
    pub fn routes(&self) -> &[Route<V>] {
        &self.routes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn is_case_insensitive(&self) -> bool {
        self.case_insensitive
    }

    /// Routes that can never match because an earlier route takes every
    /// path they would, as `(pattern, earlier pattern)` pairs
    ///
    /// # Examples
    ///
    /// ```
    /// use mailroute_router::Router;
    ///
    /// let router = Router::builder()
    ///     .route("/log/:page?", "log-page", ())
    ///     .route("/log", "log", ())
    ///     .build()
    ///     .unwrap();
    ///
    /// assert_eq!(router.shadowed(), vec![("/log", "/log/:page?")]);
    /// ```
    pub fn shadowed(&self) -> Vec<(&str, &str)> {
        self.routes
            .iter()
            .enumerate()
            .filter_map(|(index, route)| {
                self.routes[..index]
                    .iter()
                    .find(|earlier| shadows(&earlier.segments, &route.segments, self.case_insensitive))
                    .map(|earlier| (route.pattern.as_str(), earlier.pattern.as_str()))
            })
            .collect()
    }
}

// ============================================================================
// Builder
// ============================================================================

/// Collects route declarations during bootstrap
///
/// `register*` methods report problems immediately. The chaining methods
/// (`route`, `redirect`, `with_route`) record problems instead, and
/// [`RouterBuilder::build`] reports all of them together.
#[derive(Debug)]
pub struct RouterBuilder<V> {
    routes: Vec<Route<V>>,
    errors: Vec<RouterError>,
    case_insensitive: bool,
}

impl<V> Default for RouterBuilder<V> {
    fn default() -> Self {
        Self {
            routes: Vec::new(),
            errors: Vec::new(),
            case_insensitive: false,
        }
    }
}

impl<V> RouterBuilder<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configures case sensitivity for matching and duplicate detection
    pub fn case_insensitive(mut self, case_insensitive: bool) -> Self {
        self.case_insensitive = case_insensitive;
        self
    }

    /// Appends a view route to the table
    ///
    /// # Examples
    ///
    /// ```
    /// use mailroute_router::{RouterBuilder, RouterError};
    ///
    /// let mut builder = RouterBuilder::new();
    /// builder.register("/view/:id", "view", "ViewMail").unwrap();
    ///
    /// let err = builder.register("/view/:key", "view-by-key", "ViewMail").unwrap_err();
    /// assert!(matches!(err, RouterError::DuplicatePattern { .. }));
    ///
    /// let err = builder.register("/read/:id", "view", "ViewMail").unwrap_err();
    /// assert_eq!(err, RouterError::DuplicateName("view".to_string()));
    /// ```
    pub fn register(
        &mut self,
        pattern: &str,
        name: impl Into<String>,
        view: V,
    ) -> Result<&Route<V>, RouterError> {
        let route = Route::new(pattern, name, view)?;
        self.add_route(route)
    }

    /// Appends a redirect route to the table
    pub fn register_redirect(
        &mut self,
        pattern: &str,
        name: impl Into<String>,
        to: &str,
    ) -> Result<&Route<V>, RouterError> {
        let route = Route::redirect(pattern, name, to)?;
        self.add_route(route)
    }

    /// Appends an already-constructed route
    pub fn add_route(&mut self, route: Route<V>) -> Result<&Route<V>, RouterError> {
        if let Some(err) = find_conflict(&self.routes, &route, self.case_insensitive) {
            return Err(err);
        }

        debug!(pattern = %route.pattern, name = %route.name, "registered route");
        let index = self.routes.len();
        self.routes.push(route);
        Ok(&self.routes[index])
    }

    /// Chaining form of [`RouterBuilder::register`]
    pub fn route(mut self, pattern: &str, name: impl Into<String>, view: V) -> Self {
        let outcome = self.register(pattern, name, view).map(|_| ());
        self.record(outcome)
    }

    /// Chaining form of [`RouterBuilder::register_redirect`]
    pub fn redirect(mut self, pattern: &str, name: impl Into<String>, to: &str) -> Self {
        let outcome = self.register_redirect(pattern, name, to).map(|_| ());
        self.record(outcome)
    }

    /// Chaining form of [`RouterBuilder::add_route`]
    pub fn with_route(mut self, route: Route<V>) -> Self {
        let outcome = self.add_route(route).map(|_| ());
        self.record(outcome)
    }

    fn record(mut self, outcome: Result<(), RouterError>) -> Self {
        if let Err(err) = outcome {
            self.errors.push(err);
        }
        self
    }

    /// Freezes the table
    ///
    /// Fails with [`RouterError::InvalidTable`] carrying every recorded
    /// configuration error.
    pub fn build(self) -> Result<Router<V>, RouterError> {
        let mut errors = self.errors;

        // Case sensitivity may have changed after registration.
        for (index, route) in self.routes.iter().enumerate() {
            if let Some(err) = find_conflict(&self.routes[..index], route, self.case_insensitive) {
                errors.push(err);
            }
        }

        if !errors.is_empty() {
            return Err(RouterError::InvalidTable(errors));
        }

        let names = self
            .routes
            .iter()
            .enumerate()
            .map(|(index, route)| (route.name.clone(), index))
            .collect();

        let router = Router {
            routes: self.routes,
            names,
            case_insensitive: self.case_insensitive,
        };

        for (pattern, shadowed_by) in router.shadowed() {
            warn!(pattern, shadowed_by, "route is unreachable behind an earlier route");
        }

        Ok(router)
    }
}

/// Whether every path `later` matches is already matched by `earlier`
///
/// Conservative: some shadowed pairs are not detected.
fn shadows(earlier: &[PatternSegment], later: &[PatternSegment], case_insensitive: bool) -> bool {
    // An optional segment in `later` is checked both absent and present.
    if let Some((PatternSegment::Optional(name), rest)) = later.split_first() {
        let mut present = vec![PatternSegment::Required(name.clone())];
        present.extend_from_slice(rest);
        return shadows(earlier, rest, case_insensitive)
            && shadows(earlier, &present, case_insensitive);
    }

    let Some((head, rest)) = earlier.split_first() else {
        return later.is_empty();
    };

    match head {
        PatternSegment::CatchAll(_) => !later.is_empty(),
        PatternSegment::Optional(_) => {
            shadows(rest, later, case_insensitive)
                || after_one(later).is_some_and(|tail| shadows(rest, tail, case_insensitive))
        }
        PatternSegment::Required(_) => {
            after_one(later).is_some_and(|tail| shadows(rest, tail, case_insensitive))
        }
        PatternSegment::Static(text) => match later.split_first() {
            Some((PatternSegment::Static(other), tail)) => {
                segment_eq(text, other, case_insensitive) && shadows(rest, tail, case_insensitive)
            }
            _ => false,
        },
    }
}

/// Rest of `later` after a leading segment any single-segment parameter accepts
fn after_one(later: &[PatternSegment]) -> Option<&[PatternSegment]> {
    match later.split_first() {
        Some((PatternSegment::Static(_) | PatternSegment::Required(_), rest)) => Some(rest),
        _ => None,
    }
}

fn find_conflict<V>(
    existing: &[Route<V>],
    route: &Route<V>,
    case_insensitive: bool,
) -> Option<RouterError> {
    if existing.iter().any(|r| r.name == route.name) {
        return Some(RouterError::DuplicateName(route.name.clone()));
    }

    let shape = route.shape(case_insensitive);
    existing
        .iter()
        .find(|r| r.shape(case_insensitive) == shape)
        .map(|r| RouterError::DuplicatePattern {
            pattern: route.pattern.clone(),
            existing: r.pattern.clone(),
        })
}
