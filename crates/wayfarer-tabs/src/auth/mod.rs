//! Sign-in redirection: where to send the user, and when to bring them back.

mod resolver;
mod tracker;

pub use resolver::{resolve_auth_url, AuthResolver, AuthRule, DEFAULT_LOGIN_PATH, DEFAULT_RULES};
pub use tracker::{AuthResolution, AuthTracker};
