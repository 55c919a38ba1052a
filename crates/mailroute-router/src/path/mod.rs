/// Path utilities for validation, normalization and URL splitting
///
/// All functions are **pure**: given same input, always produce same output with no side effects.

use std::borrow::Cow;
use std::collections::HashMap;

/// Validates if a path is in canonical form
///
/// # Rules
///
/// - Must start with `/`
/// - Must not contain `//` or `\`
/// - Must not end with `/` (except root `/`)
/// - Must not be empty
///
/// # Examples
///
/// ```
/// use mailroute_router::path::is_valid_path;
///
/// assert!(is_valid_path("/"));
/// assert!(is_valid_path("/compose"));
/// assert!(is_valid_path("/view/42"));
///
/// assert!(!is_valid_path(""));
/// assert!(!is_valid_path("compose")); // Missing leading /
/// assert!(!is_valid_path("/compose/")); // Trailing /
/// assert!(!is_valid_path("/partner//add")); // Double //
/// assert!(!is_valid_path("/partner\\add")); // Backslash
/// ```
pub fn is_valid_path(path: &str) -> bool {
    if path.is_empty() || !path.starts_with('/') {
        return false;
    }

    if path.contains("//") || path.contains('\\') {
        return false;
    }

    path == "/" || !path.ends_with('/')
}

/// Normalize a path to canonical form
///
/// Returns `Cow::Borrowed` when input is already valid, `Cow::Owned` otherwise.
///
/// - Trailing slashes: `/path/` → `/path`
/// - Double slashes: `/path//to` → `/path/to`
/// - Backslashes: `\path\to` → `/path/to`
/// - Missing leading slash: `path` → `/path`
///
/// # Examples
///
/// ```
/// use mailroute_router::path::normalize_path;
/// use std::borrow::Cow;
///
/// let path = normalize_path("/compose");
/// assert!(matches!(path, Cow::Borrowed("/compose")));
///
/// assert_eq!(normalize_path("/compose/"), "/compose");
/// assert_eq!(normalize_path("\\view\\42"), "/view/42");
/// assert_eq!(normalize_path("partner//add"), "/partner/add");
/// ```
pub fn normalize_path(path: &str) -> Cow<'_, str> {
    if is_valid_path(path) {
        return Cow::Borrowed(path);
    }

    let normalized = path
        .replace('\\', "/")
        .split('/')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("/");

    if normalized.is_empty() {
        Cow::Borrowed("/")
    } else {
        Cow::Owned(format!("/{}", normalized))
    }
}

/// A URL broken into its path, query and fragment parts (borrowed)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UrlParts<'a> {
    pub path: &'a str,
    pub query: Option<&'a str>,
    pub fragment: Option<&'a str>,
}

/// Splits a location string into path, query and fragment
///
/// The fragment is cut first, so a `?` inside the fragment stays there.
///
/// # Examples
///
/// ```
/// use mailroute_router::path::split_url;
///
/// let parts = split_url("/view/42?folder=inbox#reply");
/// assert_eq!(parts.path, "/view/42");
/// assert_eq!(parts.query, Some("folder=inbox"));
/// assert_eq!(parts.fragment, Some("reply"));
/// ```
pub fn split_url(url: &str) -> UrlParts<'_> {
    let (rest, fragment) = match url.split_once('#') {
        Some((rest, fragment)) => (rest, Some(fragment)),
        None => (url, None),
    };

    let (path, query) = match rest.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (rest, None),
    };

    UrlParts {
        path,
        query,
        fragment,
    }
}

/// Decodes one percent-encoded URL component, falling back to the raw text
/// when it is not valid UTF-8 after decoding
pub fn decode_component(raw: &str) -> String {
    urlencoding::decode(raw)
        .map(Cow::into_owned)
        .unwrap_or_else(|_| raw.to_string())
}

/// Parses a query string (`a=1&b=two+words`) into a map
///
/// Later keys win over earlier ones. A key with no `=` maps to an empty value.
///
/// # Examples
///
/// ```
/// use mailroute_router::path::parse_query;
///
/// let query = parse_query("folder=inbox&q=hello+world&draft");
/// assert_eq!(query.get("folder"), Some(&"inbox".to_string()));
/// assert_eq!(query.get("q"), Some(&"hello world".to_string()));
/// assert_eq!(query.get("draft"), Some(&String::new()));
/// ```
pub fn parse_query(query: &str) -> HashMap<String, String> {
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (
                decode_component(&key.replace('+', " ")),
                decode_component(&value.replace('+', " ")),
            )
        })
        .collect()
}
