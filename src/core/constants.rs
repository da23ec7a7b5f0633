//! Constants used throughout vaultdiff.
//!
//! Centralizes magic strings and configuration values.

/// Project configuration file name (.vaultdiff.toml).
pub const CONFIG_FILE: &str = ".vaultdiff.toml";

/// Directory under the user config dir holding the global config.
pub const CONFIG_DIR: &str = "vaultdiff";

/// Global configuration file name inside [`CONFIG_DIR`].
pub const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Environment variable controlling the log filter.
pub const LOG_ENV: &str = "VAULTDIFF_LOG";

/// Values longer than this many characters are not displayed.
pub const MAX_DISPLAY_LEN: usize = 300;

/// Shown in place of a secret that is absent or could not be read.
pub const NOT_FOUND_MARKER: &str = "Not Found";

/// Shown in place of a value longer than [`MAX_DISPLAY_LEN`].
pub const TOO_LONG_MARKER: &str = "Value too long to display";
