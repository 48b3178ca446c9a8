use url::Url;

use crate::classify::{host_matches, looks_like_auth_url};

pub const DEFAULT_LOGIN_PATH: &str = "/login";

/// One row of the site table: a domain suffix and the sign-in template for
/// it. `{url}` in the template is replaced by the percent-encoded current
/// address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthRule {
    pub domain: String,
    pub template: String,
}

impl AuthRule {
    pub fn new(domain: impl Into<String>, template: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            template: template.into(),
        }
    }

    fn matches(&self, host: &str) -> bool {
        host_matches(host, &self.domain)
    }

    fn render(&self, current: &str) -> String {
        self.template.replace("{url}", &urlencoding::encode(current))
    }
}

/// Built-in site table, checked top to bottom.
///
/// A domain matches its own host and any subdomain, never a bare substring,
/// so `notgoogle.com` does not hit `google.com`. Put narrower domains above
/// broader ones when they would both match.
pub const DEFAULT_RULES: &[(&str, &str)] = &[
    (
        "youtube.com",
        "https://accounts.google.com/ServiceLogin?service=youtube&continue={url}",
    ),
    (
        "google.com",
        "https://accounts.google.com/ServiceLogin?continue={url}",
    ),
    ("github.com", "https://github.com/login?return_to={url}"),
    ("slack.com", "https://slack.com/signin?redir={url}"),
    (
        "atlassian.net",
        "https://id.atlassian.com/login?continue={url}",
    ),
    ("outlook.com", "https://login.live.com/login.srf?wreply={url}"),
    (
        "office.com",
        "https://login.microsoftonline.com/common/login?redirect_uri={url}",
    ),
    ("live.com", "https://login.live.com/login.srf?wreply={url}"),
    (
        "microsoft.com",
        "https://login.microsoftonline.com/common/login?redirect_uri={url}",
    ),
];

/// Finds the sign-in page for the site the user is looking at.
#[derive(Debug, Clone)]
pub struct AuthResolver {
    rules: Vec<AuthRule>,
    login_path: String,
}

impl AuthResolver {
    pub fn new(rules: Vec<AuthRule>, login_path: impl Into<String>) -> Self {
        Self {
            rules,
            login_path: login_path.into(),
        }
    }

    /// Default table with a custom generic login path.
    pub fn with_login_path(login_path: impl Into<String>) -> Self {
        Self::new(default_rules(), login_path)
    }

    pub fn rules(&self) -> &[AuthRule] {
        &self.rules
    }

    /// Resolve the sign-in URL for `current`.
    ///
    /// Returns `None` only when `current` does not parse. The generic
    /// `origin + login_path` candidate is not checked for existence.
    pub fn resolve(&self, current: &str) -> Option<String> {
        let parsed = match Url::parse(current) {
            Ok(url) => url,
            Err(e) => {
                tracing::debug!(url = %current, error = %e, "cannot resolve auth url");
                return None;
            }
        };

        if let Some(host) = parsed.host_str() {
            if let Some(rule) = self.rules.iter().find(|r| r.matches(host)) {
                tracing::debug!(host, domain = %rule.domain, "auth rule matched");
                return Some(rule.render(current));
            }
        }

        if looks_like_auth_url(current) {
            return Some(current.to_string());
        }

        let origin = parsed.origin();
        if origin.is_tuple() {
            return Some(format!("{}{}", origin.ascii_serialization(), self.login_path));
        }

        Some(current.to_string())
    }
}

impl Default for AuthResolver {
    fn default() -> Self {
        Self::with_login_path(DEFAULT_LOGIN_PATH)
    }
}

fn default_rules() -> Vec<AuthRule> {
    DEFAULT_RULES
        .iter()
        .map(|(domain, template)| AuthRule::new(*domain, *template))
        .collect()
}

/// Resolve with the built-in table and `/login` fallback.
pub fn resolve_auth_url(current: &str) -> Option<String> {
    AuthResolver::default().resolve(current)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gmail_resolves_to_google_sign_in() {
        let out = resolve_auth_url("https://mail.google.com/mail/u/0").unwrap();
        assert!(out.starts_with("https://accounts.google.com/ServiceLogin?"));
        assert!(out.contains("continue=https%3A%2F%2Fmail.google.com%2Fmail%2Fu%2F0"));
    }

    #[test]
    fn youtube_is_checked_before_google() {
        let out = resolve_auth_url("https://www.youtube.com/feed").unwrap();
        assert!(out.contains("service=youtube"));
    }

    #[test]
    fn substring_domains_do_not_match() {
        let out = resolve_auth_url("https://notgoogle.com/home").unwrap();
        assert_eq!(out, "https://notgoogle.com/login");
    }

    #[test]
    fn subdomain_of_table_entry_matches() {
        let out = resolve_auth_url("https://acme.atlassian.net/jira").unwrap();
        assert!(out.starts_with("https://id.atlassian.com/login?continue="));
    }

    #[test]
    fn outlook_live_prefers_live_over_outlook() {
        // outlook.live.com is a subdomain of live.com, not of outlook.com.
        let out = resolve_auth_url("https://outlook.live.com/mail/").unwrap();
        assert!(out.starts_with("https://login.live.com/login.srf?wreply="));
    }

    #[test]
    fn first_matching_rule_wins() {
        let resolver = AuthResolver::new(
            vec![
                AuthRule::new("docs.example.com", "https://sso.example.com/docs?u={url}"),
                AuthRule::new("example.com", "https://sso.example.com/?u={url}"),
            ],
            "/login",
        );
        let out = resolver.resolve("https://docs.example.com/").unwrap();
        assert!(out.starts_with("https://sso.example.com/docs?u="));
        let out = resolver.resolve("https://www.example.com/").unwrap();
        assert!(out.starts_with("https://sso.example.com/?u="));
    }

    #[test]
    fn auth_url_is_returned_unchanged() {
        let url = "https://mycorp.okta.com/app/sso/saml";
        assert_eq!(resolve_auth_url(url).unwrap(), url);
    }

    #[test]
    fn unknown_site_falls_back_to_login_path() {
        assert_eq!(
            resolve_auth_url("https://example.com/dashboard?tab=2").unwrap(),
            "https://example.com/login"
        );
        assert_eq!(
            resolve_auth_url("http://localhost:8080/app").unwrap(),
            "http://localhost:8080/login"
        );
    }

    #[test]
    fn custom_login_path() {
        let resolver = AuthResolver::with_login_path("/users/sign_in");
        assert_eq!(
            resolver.resolve("https://gitlab.example.org/explore").unwrap(),
            "https://gitlab.example.org/users/sign_in"
        );
    }

    #[test]
    fn opaque_origin_returns_current() {
        assert_eq!(resolve_auth_url("about:blank").unwrap(), "about:blank");
        assert_eq!(
            resolve_auth_url("data:text/plain,hello").unwrap(),
            "data:text/plain,hello"
        );
    }

    #[test]
    fn unparseable_returns_none() {
        assert_eq!(resolve_auth_url("not a url"), None);
        assert_eq!(resolve_auth_url(""), None);
    }

    #[test]
    fn default_table_order() {
        let resolver = AuthResolver::default();
        let domains: Vec<&str> = resolver
            .rules()
            .iter()
            .map(|r| r.domain.as_str())
            .collect();
        assert_eq!(domains[0], "youtube.com");
        assert_eq!(domains.len(), DEFAULT_RULES.len());
        let google = domains.iter().position(|d| *d == "google.com").unwrap();
        assert!(google > 0);
    }
}
