/// Environment variable name constants
/// Configuration keys can be overridden from the environment using the
/// `HUESHIFT` prefix and `__` as the section separator.
//
// Prefix and separator used by the configuration loader
pub const ENV_PREFIX: &str = "HUESHIFT";
pub const ENV_SEPARATOR: &str = "__";

// Frequently overridden settings
pub const PYWAL_ENABLED: &str = "HUESHIFT__PYWAL__ENABLED";
pub const PYWAL_PROGRAM: &str = "HUESHIFT__PYWAL__PROGRAM";
pub const MATUGEN_PROGRAM: &str = "HUESHIFT__MATUGEN__PROGRAM";
pub const MATUGEN_WALLPAPER: &str = "HUESHIFT__MATUGEN__WALLPAPER";
pub const MODE_DARK_LIGHT: &str = "HUESHIFT__MODE__DARK_LIGHT";
pub const LOGGING_LEVEL: &str = "HUESHIFT__LOGGING__LEVEL";
