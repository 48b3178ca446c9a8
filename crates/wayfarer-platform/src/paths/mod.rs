mod ensure;
mod resolve;

pub use ensure::ensure_dirs;
pub use resolve::{
    config_dir, data_dir, log_dir, permissions_file, webview_data_dir, PERSIST_PREFIX,
};
