//! Path normalization for redirect sources and destinations.
//!
//! Redirect rules come from hand-maintained files, so sources arrive with
//! missing leading slashes, stray query strings, fragments, and trailing
//! slashes. Two paths are equivalent for validation purposes iff their
//! [`normalize`]d forms are equal.
//!
//! All functions here are pure and total: any string input yields a
//! deterministic result, malformed or not.

use url::Url;

/// Ensure a path starts with `/`.
///
/// ```
/// use relint_core::normalize::ensure_leading_slash;
///
/// assert_eq!(ensure_leading_slash("docs/start"), "/docs/start");
/// assert_eq!(ensure_leading_slash("/docs/start"), "/docs/start");
/// ```
#[must_use]
pub fn ensure_leading_slash(path: &str) -> String {
    if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    }
}

/// Strip any query string or fragment, keeping only the path component.
///
/// Inputs are site-relative paths, so this is a truncation at the first
/// `?` or `#` rather than a full URL parse. Absolute URLs never reach the
/// path-normalization machinery; they are detected up front with
/// [`has_scheme`].
#[must_use]
pub fn strip_query_fragment(path: &str) -> &str {
    match path.find(['?', '#']) {
        Some(idx) => &path[..idx],
        None => path,
    }
}

/// Canonicalize a redirect path.
///
/// Ensures a leading `/`, strips query string and fragment, and strips
/// trailing slashes, except that the root path `/` is left unchanged.
/// Idempotent: `normalize(normalize(p)) == normalize(p)` for any input.
///
/// ```
/// use relint_core::normalize::normalize;
///
/// assert_eq!(normalize("/a/b/"), "/a/b");
/// assert_eq!(normalize("a/b?version=2#install"), "/a/b");
/// assert_eq!(normalize("/"), "/");
/// ```
#[must_use]
pub fn normalize(path: &str) -> String {
    let path = ensure_leading_slash(strip_query_fragment(path));
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Whether a redirect destination is an absolute URL with a scheme.
///
/// Scheme-bearing destinations (`https://...`, `mailto:...`) are external
/// and terminal: they are never followed through the redirect map and are
/// skipped by the static cross-check.
#[must_use]
pub fn has_scheme(target: &str) -> bool {
    Url::parse(target).is_ok()
}

/// Extract the path component of an absolute URL, or return the input
/// unchanged (minus query/fragment) when it is not one.
#[must_use]
pub fn path_component(target: &str) -> String {
    match Url::parse(target) {
        Ok(url) => url.path().to_string(),
        Err(_) => strip_query_fragment(target).to_string(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_leading_slash_added_once() {
        assert_eq!(ensure_leading_slash("docs"), "/docs");
        assert_eq!(ensure_leading_slash("/docs"), "/docs");
        assert_eq!(ensure_leading_slash(""), "/");
    }

    #[test]
    fn test_query_and_fragment_stripped() {
        assert_eq!(strip_query_fragment("/a/b?x=1"), "/a/b");
        assert_eq!(strip_query_fragment("/a/b#section"), "/a/b");
        assert_eq!(strip_query_fragment("/a/b?x=1#section"), "/a/b");
        assert_eq!(strip_query_fragment("/a/b"), "/a/b");
    }

    #[test]
    fn test_normalize_collapses_trailing_slash() {
        assert_eq!(normalize("/a/b/"), "/a/b");
        assert_eq!(normalize("/a/b"), "/a/b");
        assert_eq!(normalize("/"), "/");
        assert_eq!(normalize(""), "/");
    }

    #[test]
    fn test_scheme_detection() {
        assert!(has_scheme("https://example.com/docs/"));
        assert!(has_scheme("mailto:docs@example.com"));
        assert!(!has_scheme("/docs/start/"));
        assert!(!has_scheme("docs/start"));
    }

    #[test]
    fn test_path_component_of_absolute_url() {
        assert_eq!(path_component("https://example.com/docs/?q=1"), "/docs/");
        assert_eq!(path_component("/docs/start?q=1"), "/docs/start");
    }

    proptest! {
        #[test]
        fn normalize_is_idempotent(path in r".{0,200}") {
            let once = normalize(&path);
            prop_assert_eq!(normalize(&once), once);
        }

        #[test]
        fn normalize_output_has_leading_slash(path in r".{0,200}") {
            prop_assert!(normalize(&path).starts_with('/'));
        }

        #[test]
        fn normalize_ignores_trailing_slash(path in r"/[a-z/]{0,40}[a-z]") {
            prop_assert_eq!(normalize(&format!("{path}/")), normalize(&path));
        }
    }
}
