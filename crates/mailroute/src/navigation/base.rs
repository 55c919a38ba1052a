// File: src/navigation/base.rs
// Purpose: History base path handling

use mailroute_router::normalize_path;

/// The path prefix the UI is served under
///
/// Stored without a trailing slash; the root base is stored empty.
///
/// # Examples
///
/// ```
/// use mailroute::navigation::BasePath;
///
/// let base = BasePath::new("/mail/");
/// assert_eq!(base.as_str(), "/mail");
/// assert_eq!(base.strip("/mail/view/42"), Some("/view/42"));
/// assert_eq!(base.strip("/mailbox"), None);
/// assert_eq!(base.join("/compose"), "/mail/compose");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BasePath(String);

impl BasePath {
    pub fn new(raw: &str) -> Self {
        let normalized = normalize_path(raw.trim());
        if normalized == "/" {
            BasePath(String::new())
        } else {
            BasePath(normalized.into_owned())
        }
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        if self.is_root() {
            "/"
        } else {
            &self.0
        }
    }

    /// Remove the base from a URL, `None` when the URL lies outside it
    ///
    /// The remainder may be empty or start with `?`/`#`; the router treats
    /// those as the root path.
    pub fn strip<'a>(&self, url: &'a str) -> Option<&'a str> {
        if self.is_root() {
            return Some(url);
        }

        let rest = url.strip_prefix(self.0.as_str())?;
        match rest.chars().next() {
            None | Some('/') | Some('?') | Some('#') => Some(rest),
            Some(_) => None,
        }
    }

    /// Prefix an application path with the base
    pub fn join(&self, path: &str) -> String {
        if self.is_root() {
            path.to_string()
        } else {
            format!("{}{}", self.0, path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("/", "/")]
    #[case("", "/")]
    #[case("/app", "/app")]
    #[case("/app/", "/app")]
    #[case("app//mail/", "/app/mail")]
    fn test_normalizes(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(BasePath::new(raw).as_str(), expected);
    }

    #[test]
    fn test_root_base_passes_everything() {
        let base = BasePath::new("/");
        assert!(base.is_root());
        assert_eq!(base.strip("/compose"), Some("/compose"));
        assert_eq!(base.join("/compose"), "/compose");
    }

    #[rstest]
    #[case("/app", Some(""))]
    #[case("/app/", Some("/"))]
    #[case("/app?folder=sent", Some("?folder=sent"))]
    #[case("/app/view/1#body", Some("/view/1#body"))]
    #[case("/application", None)]
    #[case("/other/app", None)]
    fn test_strip(#[case] url: &str, #[case] expected: Option<&str>) {
        assert_eq!(BasePath::new("/app/").strip(url), expected);
    }

    #[test]
    fn test_join_root_path() {
        assert_eq!(BasePath::new("/app").join("/"), "/app/");
    }
}
