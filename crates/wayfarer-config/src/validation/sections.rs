//! Per-section validators: general, window, sidebar, zoom, auth, session.

use crate::schema::WayfarerConfig;

use super::helpers::{validate_http_url, validate_range, validate_range_f64};

pub(crate) fn validate_general(errors: &mut Vec<String>, config: &WayfarerConfig) {
    validate_http_url(errors, "general.home_url", &config.general.home_url);
    validate_http_url(errors, "general.search_url", &config.general.search_url);
}

pub(crate) fn validate_window(errors: &mut Vec<String>, config: &WayfarerConfig) {
    validate_range(errors, "window.width", config.window.width.into(), 400, 7680);
    validate_range(errors, "window.height", config.window.height.into(), 300, 4320);
    validate_range(
        errors,
        "window.nav_bar_height",
        config.window.nav_bar_height.into(),
        24,
        120,
    );
}

pub(crate) fn validate_sidebar(errors: &mut Vec<String>, config: &WayfarerConfig) {
    let sidebar = &config.sidebar;
    if sidebar.min_width > sidebar.max_width {
        errors.push(format!(
            "sidebar.min_width ({}) must not exceed sidebar.max_width ({})",
            sidebar.min_width, sidebar.max_width
        ));
        return;
    }
    validate_range(
        errors,
        "sidebar.width",
        sidebar.width.into(),
        sidebar.min_width.into(),
        sidebar.max_width.into(),
    );
}

pub(crate) fn validate_zoom(errors: &mut Vec<String>, config: &WayfarerConfig) {
    let zoom = &config.zoom;
    if zoom.min <= 0.0 {
        errors.push(format!("zoom.min = {} must be positive", zoom.min));
    }
    if zoom.step <= 0.0 {
        errors.push(format!("zoom.step = {} must be positive", zoom.step));
    }
    if zoom.min > zoom.max {
        errors.push(format!(
            "zoom.min ({}) must not exceed zoom.max ({})",
            zoom.min, zoom.max
        ));
    } else {
        validate_range_f64(errors, "zoom.default", zoom.default, zoom.min, zoom.max);
    }
}

pub(crate) fn validate_auth(errors: &mut Vec<String>, config: &WayfarerConfig) {
    validate_range(
        errors,
        "auth.settle_delay_ms",
        config.auth.settle_delay_ms,
        0,
        10_000,
    );
    if !config.auth.login_path.starts_with('/') {
        errors.push(format!(
            "auth.login_path = '{}' must start with '/'",
            config.auth.login_path
        ));
    }
}

pub(crate) fn validate_session(errors: &mut Vec<String>, config: &WayfarerConfig) {
    if config.session.partition.trim().is_empty() {
        errors.push("session.partition must not be empty".into());
    }
}
