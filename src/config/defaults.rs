//! Default values for configuration options.
//!
//! Centralized constants to avoid magic strings scattered across the codebase.

use std::path::PathBuf;

/// Default config file name, used by `init` and for the per-user location.
pub const CONFIG_FILE_NAME: &str = "want.toml";

/// Directory under the platform config dir holding the per-user config.
pub const APP_DIR: &str = "want";

/// Whether conflicting values are rejected when neither CLI nor file says so.
pub const STRICT: bool = false;

/// Per-user config file location (`<config_dir>/want/want.toml`), if the
/// platform has a config directory.
#[must_use]
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE_NAME))
}
