//! IPC between Rust and the JavaScript running in webviews.
//!
//! - **JS -> Rust**: scripts call `window.ipc.postMessage(JSON.stringify({kind, payload}))`,
//!   which reaches the `ipc_handler` registered on the webview.
//! - **Rust -> JS**: Rust calls `webview.evaluate_script(..)` with snippets
//!   built by [`js_dispatch_message`] and [`js_resolve_permission`].
//!
//! Two scripts are injected. The chrome view gets [`CHROME_INIT_SCRIPT`];
//! every content view gets [`PAGE_BRIDGE_SCRIPT`], which exposes nothing
//! beyond reporting back to the host.

use serde::{Deserialize, Serialize};

/// A typed IPC message from JavaScript to Rust.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IpcMessage {
    /// Command name.
    pub kind: String,
    #[serde(default = "IpcPayload::none")]
    pub payload: IpcPayload,
}

/// Payload of an IPC message, either a plain string or structured JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IpcPayload {
    Text(String),
    Json(serde_json::Value),
    None,
}

impl IpcPayload {
    fn none() -> Self {
        IpcPayload::None
    }

    /// Field lookup on a JSON object payload.
    pub fn field(&self, name: &str) -> Option<&serde_json::Value> {
        match self {
            IpcPayload::Json(value) => value.get(name),
            _ => None,
        }
    }

    pub fn str_field(&self, name: &str) -> Option<&str> {
        self.field(name).and_then(|v| v.as_str())
    }

    pub fn f64_field(&self, name: &str) -> Option<f64> {
        self.field(name).and_then(|v| v.as_f64())
    }

    pub fn bool_field(&self, name: &str) -> Option<bool> {
        self.field(name).and_then(|v| v.as_bool())
    }
}

impl IpcMessage {
    /// Parse an IPC message from a raw `postMessage` body.
    pub fn from_json(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }

    pub fn text(kind: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            payload: IpcPayload::Text(text.into()),
        }
    }

    pub fn json(kind: impl Into<String>, value: serde_json::Value) -> Self {
        Self {
            kind: kind.into(),
            payload: IpcPayload::Json(value),
        }
    }
}

/// Keyboard shortcut captured by a page or the chrome while it has focus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortcutPress {
    pub key: String,
    #[serde(default)]
    pub ctrl: bool,
    #[serde(default)]
    pub alt: bool,
    #[serde(default)]
    pub shift: bool,
    #[serde(default)]
    pub meta: bool,
}

/// Messages posted by [`PAGE_BRIDGE_SCRIPT`].
#[derive(Debug, Clone, PartialEq)]
pub enum PageMessage {
    /// Candidate favicon URLs, in document order.
    Favicons(Vec<String>),
    /// Same-document navigation (history API or fragment change).
    /// `replace` is set for `history.replaceState`.
    Navigated { url: String, replace: bool },
    /// `popstate`: the page moved along its existing history.
    Traversed { url: String },
    /// The page called `window.close()`.
    Close,
    /// The page requested a permission.
    Permission {
        id: u64,
        kind: String,
        origin: String,
    },
    Shortcut(ShortcutPress),
}

impl PageMessage {
    /// Interpret a parsed IPC message. Returns `None` for kinds the bridge
    /// does not send or payloads missing required fields.
    pub fn parse(msg: &IpcMessage) -> Option<Self> {
        match msg.kind.as_str() {
            "favicons" => {
                let urls = match &msg.payload {
                    IpcPayload::Json(serde_json::Value::Array(items)) => items
                        .iter()
                        .filter_map(|v| v.as_str())
                        .map(str::to_owned)
                        .collect(),
                    IpcPayload::Text(url) => vec![url.clone()],
                    _ => return None,
                };
                Some(PageMessage::Favicons(urls))
            }
            "navigated" => {
                let url = match &msg.payload {
                    IpcPayload::Text(url) => url.clone(),
                    other => other.str_field("url")?.to_string(),
                };
                let replace = msg.payload.bool_field("replace").unwrap_or(false);
                Some(PageMessage::Navigated { url, replace })
            }
            "traversed" => Some(PageMessage::Traversed {
                url: msg.payload.str_field("url")?.to_string(),
            }),
            "close" => Some(PageMessage::Close),
            "permission" => Some(PageMessage::Permission {
                id: msg.payload.field("id")?.as_u64()?,
                kind: msg.payload.str_field("kind")?.to_string(),
                origin: msg.payload.str_field("origin")?.to_string(),
            }),
            "shortcut" => match &msg.payload {
                IpcPayload::Json(value) => serde_json::from_value(value.clone())
                    .ok()
                    .map(PageMessage::Shortcut),
                _ => None,
            },
            _ => None,
        }
    }
}

/// Chrome-side IPC bridge, `window.wayfarer.ipc`.
pub const CHROME_INIT_SCRIPT: &str = r#"
(function() {
    window.wayfarer = window.wayfarer || {};
    window.wayfarer.ipc = {
        send: function(kind, payload) {
            window.ipc.postMessage(JSON.stringify({
                kind: kind,
                payload: payload === undefined ? null : payload
            }));
        },
        _handlers: {},
        on: function(kind, callback) {
            this._handlers[kind] = callback;
        },
        _dispatch: function(kind, payload) {
            var handler = this._handlers[kind];
            if (handler) {
                handler(payload);
            }
        }
    };
})();
"#;

/// Reporting script injected into every content page.
pub const PAGE_BRIDGE_SCRIPT: &str = r#"
(function() {
    if (window.__wayfarer || window.top !== window) { return; }
    function post(kind, payload) {
        try {
            window.ipc.postMessage(JSON.stringify({ kind: kind, payload: payload }));
        } catch (_) {}
    }

    var pending = {};
    var nextId = 1;
    window.__wayfarer = {
        resolvePermission: function(id, granted) {
            var done = pending[id];
            delete pending[id];
            if (done) { done(granted); }
        }
    };

    function ask(kind) {
        return new Promise(function(resolve) {
            var id = nextId++;
            pending[id] = resolve;
            post('permission', { id: id, kind: kind, origin: location.origin });
        });
    }

    if (window.Notification) {
        var granted = null;
        try {
            Object.defineProperty(Notification, 'permission', {
                get: function() {
                    return granted === null ? 'default' : (granted ? 'granted' : 'denied');
                }
            });
        } catch (_) {}
        Notification.requestPermission = function(callback) {
            return ask('notifications').then(function(ok) {
                granted = ok;
                var state = ok ? 'granted' : 'denied';
                if (typeof callback === 'function') { callback(state); }
                return state;
            });
        };
    }

    function denied(kind) {
        var err = new Error(kind + ' permission denied');
        err.name = 'NotAllowedError';
        err.code = 1;
        err.PERMISSION_DENIED = 1;
        return err;
    }

    if (navigator.geolocation) {
        var geo = navigator.geolocation;
        var getCurrent = geo.getCurrentPosition.bind(geo);
        var watch = geo.watchPosition.bind(geo);
        var clearWatch = geo.clearWatch.bind(geo);
        var watches = [];
        geo.getCurrentPosition = function(success, failure, options) {
            ask('geolocation').then(function(ok) {
                if (ok) {
                    getCurrent(success, failure, options);
                } else if (typeof failure === 'function') {
                    failure(denied('geolocation'));
                }
            });
        };
        geo.watchPosition = function(success, failure, options) {
            var handle = { id: null, cleared: false };
            ask('geolocation').then(function(ok) {
                if (handle.cleared) { return; }
                if (ok) {
                    handle.id = watch(success, failure, options);
                } else if (typeof failure === 'function') {
                    failure(denied('geolocation'));
                }
            });
            var token = watches.length;
            watches.push(handle);
            return token;
        };
        geo.clearWatch = function(token) {
            var handle = watches[token];
            if (!handle) { return; }
            handle.cleared = true;
            if (handle.id !== null) { clearWatch(handle.id); }
        };
    }

    if (navigator.mediaDevices && navigator.mediaDevices.getUserMedia) {
        var media = navigator.mediaDevices;
        var getUserMedia = media.getUserMedia.bind(media);
        media.getUserMedia = function(constraints) {
            return ask('media').then(function(ok) {
                if (!ok) { throw denied('media'); }
                return getUserMedia(constraints);
            });
        };
    }

    function favicons() {
        var links = document.querySelectorAll('link[rel~="icon"], link[rel="shortcut icon"], link[rel="apple-touch-icon"]');
        var urls = [];
        for (var i = 0; i < links.length; i++) {
            if (links[i].href) { urls.push(links[i].href); }
        }
        if (urls.length === 0 && /^https?:$/.test(location.protocol)) {
            urls.push(location.origin + '/favicon.ico');
        }
        post('favicons', urls);
    }
    if (document.readyState === 'loading') {
        document.addEventListener('DOMContentLoaded', favicons);
    } else {
        favicons();
    }

    function navigated(replace) {
        post('navigated', { url: location.href, replace: replace === true });
    }
    ['pushState', 'replaceState'].forEach(function(name) {
        var original = history[name];
        history[name] = function() {
            var result = original.apply(this, arguments);
            navigated(name === 'replaceState');
            return result;
        };
    });
    window.addEventListener('popstate', function() {
        post('traversed', { url: location.href });
    });
    window.addEventListener('hashchange', function() { navigated(false); });

    window.close = function() { post('close', null); };

    document.addEventListener('keydown', function(e) {
        if (!(e.ctrlKey || e.metaKey || e.altKey) && !/^F\d+$/.test(e.key)) { return; }
        post('shortcut', {
            key: e.key, ctrl: e.ctrlKey, alt: e.altKey, shift: e.shiftKey, meta: e.metaKey
        });
    }, true);
})();
"#;

/// JS snippet dispatching a message to a chrome-side handler.
pub fn js_dispatch_message(kind: &str, payload: &serde_json::Value) -> String {
    let payload_json = serde_json::to_string(payload).unwrap_or_else(|_| "null".to_string());
    format!(
        "window.wayfarer && window.wayfarer.ipc._dispatch({}, {});",
        serde_json::to_string(kind).unwrap_or_else(|_| "\"unknown\"".to_string()),
        payload_json,
    )
}

/// JS snippet answering a pending permission request in a content page.
pub fn js_resolve_permission(id: u64, granted: bool) -> String {
    format!("window.__wayfarer && window.__wayfarer.resolvePermission({id}, {granted});")
}
