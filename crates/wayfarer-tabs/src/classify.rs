//! Address-bar input classification and auth-page detection.

use url::Url;

/// Search prefix used when no configuration is supplied.
pub const DEFAULT_SEARCH_URL: &str = "https://www.google.com/search?q=";

/// Hosts that only ever serve sign-in flows. Subdomains match too.
const IDENTITY_PROVIDERS: &[&str] = &[
    "accounts.google.com",
    "login.microsoftonline.com",
    "login.live.com",
    "login.microsoft.com",
    "appleid.apple.com",
    "login.yahoo.com",
    "id.atlassian.com",
    "auth0.com",
    "okta.com",
    "onelogin.com",
];

/// Path or query fragments that mark an auth page on any host.
const AUTH_KEYWORDS: &[&str] = &[
    "login",
    "signin",
    "sign-in",
    "auth",
    "authenticate",
    "oauth",
    "sso",
    "saml",
    "account",
    "session",
];

/// Turns free-form address-bar text into a navigable URL.
#[derive(Debug, Clone)]
pub struct InputClassifier {
    search_url: String,
}

impl InputClassifier {
    pub fn new(search_url: impl Into<String>) -> Self {
        Self {
            search_url: search_url.into(),
        }
    }

    /// Classify `text` as a URL or a search query. Never fails.
    ///
    /// 1. An explicit `http://` or `https://` scheme is kept as-is.
    /// 2. Text with a `.` and no whitespace gets `https://` prepended.
    /// 3. Anything else becomes a percent-encoded search query.
    pub fn classify_input(&self, text: &str) -> String {
        if has_web_scheme(text) {
            text.to_string()
        } else if text.contains('.') && !text.chars().any(char::is_whitespace) {
            format!("https://{text}")
        } else {
            format!("{}{}", self.search_url, urlencoding::encode(text))
        }
    }

    pub fn search_url(&self) -> &str {
        &self.search_url
    }
}

impl Default for InputClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_SEARCH_URL)
    }
}

fn has_web_scheme(text: &str) -> bool {
    ["http://", "https://"].iter().any(|scheme| {
        text.get(..scheme.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
    })
}

/// True when `host` is `domain` or one of its subdomains.
pub(crate) fn host_matches(host: &str, domain: &str) -> bool {
    host == domain
        || host
            .strip_suffix(domain)
            .is_some_and(|rest| rest.ends_with('.'))
}

/// Heuristic check for an authentication page.
///
/// Unparseable input is never considered an auth URL.
pub fn looks_like_auth_url(url: &str) -> bool {
    let Ok(parsed) = Url::parse(url) else {
        return false;
    };

    if let Some(host) = parsed.host_str() {
        let host = host.to_ascii_lowercase();
        if IDENTITY_PROVIDERS.iter().any(|idp| host_matches(&host, idp)) {
            return true;
        }
    }

    let mut haystack = parsed.path().to_lowercase();
    if let Some(query) = parsed.query() {
        haystack.push('?');
        haystack.push_str(&query.to_lowercase());
    }
    AUTH_KEYWORDS.iter().any(|kw| haystack.contains(kw))
}
