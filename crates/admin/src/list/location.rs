//! The browser location a list view reads and rewrites.

use axum::http::{HeaderMap, Uri};
use url::Url;

/// htmx request header carrying the browser's current URL.
pub const HX_CURRENT_URL: &str = "HX-Current-URL";

/// Read/write access to the address bar of the view being served.
pub trait Location {
    /// Path component, e.g. `/shopping-cart`.
    fn current_path(&self) -> &str;

    /// Query component including the leading `?`, or `""` when there is none.
    fn current_query(&self) -> &str;

    /// Replace the address with `target` (path plus query).
    fn navigate(&mut self, target: &str);
}

/// Address bar of one request.
///
/// Navigations are recorded rather than performed; the response tells the
/// browser to apply the last one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressBar {
    path: String,
    query: String,
    navigations: Vec<String>,
}

impl AddressBar {
    /// Address bar at `path` with `query` (leading `?` optional).
    #[must_use]
    pub fn new(path: impl Into<String>, query: &str) -> Self {
        Self {
            path: path.into(),
            query: normalize_query(query),
            navigations: Vec::new(),
        }
    }

    /// Address bar of the page a request was made from.
    ///
    /// htmx requests report the page URL in `HX-Current-URL`; the request URI
    /// itself is only the fragment endpoint. Full page loads use the URI.
    #[must_use]
    pub fn from_request(uri: &Uri, headers: &HeaderMap) -> Self {
        let current = headers
            .get(HX_CURRENT_URL)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| Url::parse(v).ok());

        match current {
            Some(url) => Self::new(url.path(), url.query().unwrap_or_default()),
            None => Self::new(uri.path(), uri.query().unwrap_or_default()),
        }
    }

    /// Every navigation performed, oldest first.
    #[must_use]
    pub fn navigations(&self) -> &[String] {
        &self.navigations
    }

    /// The URL the browser should end up at, if it has to change.
    #[must_use]
    pub fn pushed_url(&self) -> Option<&str> {
        self.navigations.last().map(String::as_str)
    }
}

impl Location for AddressBar {
    fn current_path(&self) -> &str {
        &self.path
    }

    fn current_query(&self) -> &str {
        &self.query
    }

    fn navigate(&mut self, target: &str) {
        let (path, query) = target.split_once('?').unwrap_or((target, ""));
        self.path = path.to_string();
        self.query = normalize_query(query);
        self.navigations.push(target.to_string());
    }
}

fn normalize_query(query: &str) -> String {
    match query.strip_prefix('?').unwrap_or(query) {
        "" => String::new(),
        q => format!("?{q}"),
    }
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    #[test]
    fn test_query_is_normalized() {
        assert_eq!(AddressBar::new("/a", "").current_query(), "");
        assert_eq!(AddressBar::new("/a", "?").current_query(), "");
        assert_eq!(AddressBar::new("/a", "x=1").current_query(), "?x=1");
        assert_eq!(AddressBar::new("/a", "?x=1").current_query(), "?x=1");
    }

    #[test]
    fn test_from_request_uses_uri() {
        let uri: Uri = "/shopping-cart?sort=id,desc".parse().unwrap();
        let bar = AddressBar::from_request(&uri, &HeaderMap::new());
        assert_eq!(bar.current_path(), "/shopping-cart");
        assert_eq!(bar.current_query(), "?sort=id,desc");
    }

    #[test]
    fn test_from_request_prefers_htmx_current_url() {
        let uri: Uri = "/shopping-cart?sort_by=status".parse().unwrap();
        let mut headers = HeaderMap::new();
        headers.insert(
            HX_CURRENT_URL,
            HeaderValue::from_static("http://localhost:3001/shopping-cart?sort=id,asc"),
        );
        let bar = AddressBar::from_request(&uri, &headers);
        assert_eq!(bar.current_path(), "/shopping-cart");
        assert_eq!(bar.current_query(), "?sort=id,asc");
    }

    #[test]
    fn test_from_request_ignores_unparseable_header() {
        let uri: Uri = "/product".parse().unwrap();
        let mut headers = HeaderMap::new();
        headers.insert(HX_CURRENT_URL, HeaderValue::from_static("not a url"));
        let bar = AddressBar::from_request(&uri, &headers);
        assert_eq!(bar.current_path(), "/product");
        assert_eq!(bar.current_query(), "");
    }

    #[test]
    fn test_navigate_records_and_applies() {
        let mut bar = AddressBar::new("/product", "");
        assert_eq!(bar.pushed_url(), None);

        bar.navigate("/product?sort=name,desc");
        assert_eq!(bar.current_path(), "/product");
        assert_eq!(bar.current_query(), "?sort=name,desc");
        assert_eq!(bar.pushed_url(), Some("/product?sort=name,desc"));
        assert_eq!(bar.navigations().len(), 1);
    }
}
