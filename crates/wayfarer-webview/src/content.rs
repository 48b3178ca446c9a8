//! Bundled chrome assets served over the `wayfarer://` custom protocol.

use std::borrow::Cow;
use std::collections::HashMap;
use std::path::Path;

use tracing::warn;
use wry::http::header::{HeaderValue, CONTENT_TYPE};
use wry::http::{Response, StatusCode};

use crate::csp::apply_permissive_csp;

pub const SCHEME: &str = "wayfarer";

/// Page the chrome view loads on start.
#[cfg(not(target_os = "windows"))]
pub const CHROME_URL: &str = "wayfarer://localhost/index.html";
/// WebView2 exposes custom schemes as `http://<scheme>.localhost/`.
#[cfg(target_os = "windows")]
pub const CHROME_URL: &str = "http://wayfarer.localhost/index.html";

const CHROME_HTML: &str = include_str!("../assets/chrome/index.html");
const CHROME_CSS: &str = include_str!("../assets/chrome/chrome.css");
const CHROME_JS: &str = include_str!("../assets/chrome/chrome.js");

/// In-memory asset table keyed by request path.
#[derive(Debug, Default)]
pub struct ContentProvider {
    assets: HashMap<String, (&'static str, Cow<'static, [u8]>)>, // path -> (mime, data)
}

impl ContentProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Provider holding the chrome UI.
    pub fn bundled() -> Self {
        let mut provider = Self::new();
        provider.add("index.html", CHROME_HTML.as_bytes());
        provider.add("chrome.css", CHROME_CSS.as_bytes());
        provider.add("chrome.js", CHROME_JS.as_bytes());
        provider
    }

    /// Register an asset; the MIME type follows the path's extension.
    pub fn add(&mut self, path: impl Into<String>, data: impl Into<Cow<'static, [u8]>>) {
        let path = path.into();
        let mime = mime_from_extension(Path::new(&path));
        self.assets
            .insert(path.trim_start_matches('/').to_string(), (mime, data.into()));
    }

    /// Resolve a request path to its MIME type and bytes.
    pub fn resolve(&self, path: &str) -> Option<(&'static str, &[u8])> {
        let clean = path.trim_start_matches('/');
        let clean = clean.split(['?', '#']).next().unwrap_or(clean);
        let clean = if clean.is_empty() { "index.html" } else { clean };
        self.assets
            .get(clean)
            .map(|(mime, data)| (*mime, data.as_ref()))
    }

    /// Answer a custom-protocol request for `uri`.
    pub fn respond(&self, uri: &str) -> Response<Cow<'static, [u8]>> {
        let path = request_path(uri);
        let mut response = match self.resolve(path) {
            Some((mime, data)) => {
                let mut response = Response::new(Cow::Owned(data.to_vec()));
                response
                    .headers_mut()
                    .insert(CONTENT_TYPE, HeaderValue::from_static(mime));
                response
            }
            None => {
                warn!(path = %path, "custom protocol: asset not found");
                let mut response = Response::new(Cow::Borrowed(&b"Not Found"[..]));
                *response.status_mut() = StatusCode::NOT_FOUND;
                response
            }
        };
        apply_permissive_csp(response.headers_mut());
        response
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}

/// Strip the scheme and host from a custom-protocol request URI.
pub fn request_path(uri: &str) -> &str {
    uri.strip_prefix("wayfarer://localhost/")
        .or_else(|| uri.strip_prefix("wayfarer://localhost"))
        .or_else(|| uri.strip_prefix("http://wayfarer.localhost/"))
        .or_else(|| uri.strip_prefix("https://wayfarer.localhost/"))
        .or_else(|| uri.strip_prefix("wayfarer:///"))
        .or_else(|| uri.strip_prefix("wayfarer://"))
        .unwrap_or("")
}

fn mime_from_extension(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("html") | Some("htm") => "text/html",
        Some("css") => "text/css",
        Some("js") | Some("mjs") => "application/javascript",
        Some("json") => "application/json",
        Some("png") => "image/png",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        Some("woff2") => "font/woff2",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wry::http::header::CONTENT_SECURITY_POLICY;

    #[test]
    fn bundled_chrome_resolves() {
        let cp = ContentProvider::bundled();
        assert_eq!(cp.len(), 3);

        let (mime, data) = cp.resolve("index.html").unwrap();
        assert_eq!(mime, "text/html");
        let html = String::from_utf8_lossy(data);
        assert!(html.contains("chrome.js"));

        assert_eq!(cp.resolve("/chrome.css").unwrap().0, "text/css");
        assert_eq!(cp.resolve("chrome.js").unwrap().0, "application/javascript");
    }

    #[test]
    fn chrome_script_uses_ipc_bridge() {
        let cp = ContentProvider::bundled();
        let (_, data) = cp.resolve("chrome.js").unwrap();
        let js = String::from_utf8_lossy(data);
        assert!(js.contains("window.wayfarer.ipc"));
        assert!(!js.contains(".innerHTML"), "chrome must not inject page titles as HTML");
    }

    #[test]
    fn empty_path_and_query_map_to_index() {
        let cp = ContentProvider::bundled();
        assert_eq!(cp.resolve("").unwrap().0, "text/html");
        assert_eq!(cp.resolve("index.html?v=2").unwrap().0, "text/html");
    }

    #[test]
    fn missing_asset_is_none() {
        let cp = ContentProvider::bundled();
        assert!(cp.resolve("../../etc/passwd").is_none());
        assert!(cp.resolve("nope.html").is_none());
    }

    #[test]
    fn added_asset_gets_mime_from_extension() {
        let mut cp = ContentProvider::new();
        cp.add("icons/tab.svg", &b"<svg/>"[..]);
        assert_eq!(cp.resolve("icons/tab.svg"), Some(("image/svg+xml", &b"<svg/>"[..])));

        cp.add("blob.bin", vec![1u8, 2]);
        assert_eq!(cp.resolve("blob.bin").unwrap().0, "application/octet-stream");
    }

    #[test]
    fn request_path_strips_scheme_and_host() {
        assert_eq!(request_path("wayfarer://localhost/index.html"), "index.html");
        assert_eq!(request_path("http://wayfarer.localhost/chrome.js"), "chrome.js");
        assert_eq!(request_path("wayfarer://localhost"), "");
        assert_eq!(request_path("https://elsewhere.com/x"), "");
    }

    #[test]
    fn response_carries_type_and_csp() {
        let cp = ContentProvider::bundled();
        let response = cp.respond("wayfarer://localhost/index.html");
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers().get(CONTENT_TYPE).unwrap(), "text/html");
        assert_eq!(
            response.headers().get(CONTENT_SECURITY_POLICY).unwrap(),
            crate::csp::PERMISSIVE_CSP
        );
    }

    #[test]
    fn missing_asset_is_404_with_csp() {
        let cp = ContentProvider::bundled();
        let response = cp.respond("wayfarer://localhost/missing.png");
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(response.headers().get(CONTENT_SECURITY_POLICY).is_some());
    }
}
