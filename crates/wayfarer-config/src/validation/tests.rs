//! Tests for the full validation pipeline.

use super::*;

#[test]
fn default_config_validates() {
    let config = WayfarerConfig::default();
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_non_http_home_url() {
    let mut config = WayfarerConfig::default();
    config.general.home_url = "file:///etc/passwd".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("general.home_url"));
}

#[test]
fn catches_sidebar_width_outside_bounds() {
    let mut config = WayfarerConfig::default();
    config.sidebar.width = 650;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("sidebar.width"));
}

#[test]
fn catches_inverted_sidebar_bounds() {
    let mut config = WayfarerConfig::default();
    config.sidebar.min_width = 600;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("sidebar.min_width"));
}

#[test]
fn catches_non_positive_zoom_floor() {
    let mut config = WayfarerConfig::default();
    config.zoom.min = 0.0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("zoom.min"));
}

#[test]
fn catches_zoom_default_outside_range() {
    let mut config = WayfarerConfig::default();
    config.zoom.default = 9.0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("zoom.default"));
}

#[test]
fn catches_settle_delay_too_long() {
    let mut config = WayfarerConfig::default();
    config.auth.settle_delay_ms = 60_000;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("auth.settle_delay_ms"));
}

#[test]
fn catches_relative_login_path() {
    let mut config = WayfarerConfig::default();
    config.auth.login_path = "login".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("auth.login_path"));
}

#[test]
fn catches_empty_partition() {
    let mut config = WayfarerConfig::default();
    config.session.partition = "  ".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("session.partition"));
}

#[test]
fn collects_multiple_errors() {
    let mut config = WayfarerConfig::default();
    config.window.width = 10;
    config.keybinds.reload = "Cmd+T".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("window.width"));
    assert!(err.contains("duplicate keybind"));
}
