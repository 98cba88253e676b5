//! Common constants used throughout cpm.

/// Configuration file name looked up when `--config` is not given
pub const CONFIG_FILE_NAME: &str = "cpm.config.json";

/// Supported configuration file names, in lookup order
pub const CONFIG_FILES: [&str; 3] = [CONFIG_FILE_NAME, "cpm.config.yml", "cpm.config.yaml"];

/// Separates segments of a type value and of configured paths
pub const TYPE_VALUE_SEPARATOR: &str = "/";
