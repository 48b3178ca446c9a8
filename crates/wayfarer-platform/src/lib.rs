pub mod input;
pub mod keymap;
pub mod paths;
pub mod winit_keys;

pub use input::{KeyCombo, KeybindRegistry};
pub use keymap::{KeyBind, Modifier};
pub use paths::{config_dir, data_dir, ensure_dirs, log_dir, permissions_file, webview_data_dir};
pub use winit_keys::normalize_winit_key;
