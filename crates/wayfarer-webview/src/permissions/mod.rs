//! Per-origin permission decisions.

mod policy;
mod store;

pub use policy::PermissionPolicy;
pub use store::PermissionStore;

/// Store key for a permission decision.
pub fn permission_key(kind: &str, origin: &str) -> String {
    format!("permission.{kind}.{origin}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_format() {
        assert_eq!(
            permission_key("geolocation", "https://maps.example.com"),
            "permission.geolocation.https://maps.example.com"
        );
    }
}
