//! Content-Security-Policy handling for responses the host serves.
//!
//! The chrome loads through `wayfarer://` and runs inline scripts, so every
//! response from the custom protocol carries a permissive policy in place
//! of whatever header it had.
//!
//! Pages loaded over the network keep their own CSP: `wry` gives no hook
//! to rewrite response headers of ordinary http(s) loads, so only
//! `wayfarer://` responses pass through [`apply_permissive_csp`].

use wry::http::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_SECURITY_POLICY};

pub const PERMISSIVE_CSP: &str = "default-src * 'unsafe-inline' 'unsafe-eval' data: blob:; \
script-src * 'unsafe-inline' 'unsafe-eval' data: blob:; \
style-src * 'unsafe-inline' data:; \
img-src * data: blob:; \
connect-src * data: blob:; \
frame-src *";

const REPORT_ONLY: &str = "content-security-policy-report-only";

/// Replace any CSP headers with [`PERMISSIVE_CSP`].
pub fn apply_permissive_csp(headers: &mut HeaderMap) {
    headers.remove(CONTENT_SECURITY_POLICY);
    headers.remove(HeaderName::from_static(REPORT_ONLY));
    headers.insert(
        CONTENT_SECURITY_POLICY,
        HeaderValue::from_static(PERMISSIVE_CSP),
    );
}
