use std::path::PathBuf;

use wayfarer_common::PlatformError;

pub(super) const APP_NAME: &str = "wayfarer";

/// Prefix marking a storage partition that survives restarts.
pub const PERSIST_PREFIX: &str = "persist:";

/// Returns the platform-specific configuration directory.
///
/// - macOS: `~/Library/Application Support/wayfarer`
/// - Linux: `$XDG_CONFIG_HOME/wayfarer` (defaults to `~/.config/wayfarer`)
/// - Windows: `%APPDATA%\wayfarer`
pub fn config_dir() -> Result<PathBuf, PlatformError> {
    Ok(dirs::config_dir()
        .ok_or_else(|| PlatformError::PathError("could not determine config directory".into()))?
        .join(APP_NAME))
}

/// Returns the platform-specific data directory.
///
/// - macOS: `~/Library/Application Support/wayfarer`
/// - Linux: `$XDG_DATA_HOME/wayfarer` (defaults to `~/.local/share/wayfarer`)
/// - Windows: `%APPDATA%\wayfarer`
pub fn data_dir() -> Result<PathBuf, PlatformError> {
    Ok(dirs::data_dir()
        .ok_or_else(|| PlatformError::PathError("could not determine data directory".into()))?
        .join(APP_NAME))
}

/// Located at `data_dir()/logs`.
pub fn log_dir() -> Result<PathBuf, PlatformError> {
    Ok(data_dir()?.join("logs"))
}

/// Persisted permission decisions, at `data_dir()/permissions.json`.
pub fn permissions_file() -> Result<PathBuf, PlatformError> {
    Ok(data_dir()?.join("permissions.json"))
}

/// Resolve the on-disk directory for a storage partition.
///
/// `"persist:main"` maps to `data_dir()/partitions/main`. Any partition
/// without the `persist:` prefix is in-memory and yields `Ok(None)`.
pub fn webview_data_dir(partition: &str) -> Result<Option<PathBuf>, PlatformError> {
    let Some(name) = partition.strip_prefix(PERSIST_PREFIX) else {
        return Ok(None);
    };
    let name = sanitize_partition(name);
    if name.is_empty() {
        return Err(PlatformError::PathError(format!(
            "invalid partition name: {partition:?}"
        )));
    }
    Ok(Some(data_dir()?.join("partitions").join(name)))
}

fn sanitize_partition(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_'))
        .collect()
}
