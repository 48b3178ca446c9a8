/// Settings applied to every content view.
#[derive(Debug, Clone)]
pub struct WebViewConfig {
    /// Whether to enable dev tools (always on in debug builds).
    pub devtools: bool,
    /// Custom user agent; `None` keeps the engine default so sites serve
    /// their regular pages.
    pub user_agent: Option<String>,
    pub clipboard: bool,
    pub autoplay: bool,
}

impl Default for WebViewConfig {
    fn default() -> Self {
        Self {
            devtools: cfg!(debug_assertions),
            user_agent: None,
            clipboard: true,
            autoplay: true,
        }
    }
}
