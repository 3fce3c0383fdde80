//! Application-wide constants.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "HexPaint";

/// The binary name of the application (used in command examples).
pub const APP_BINARY_NAME: &str = "hexpaint";

/// Directory name under the platform config directory.
pub const APP_DATA_DIR: &str = "HexPaint";
