use engine::matugen::DEFAULT_MATUGEN_TIMEOUT;
use engine::pywal::DEFAULT_WAL_TIMEOUT;

pub use engine::matugen::DEFAULT_MATUGEN_PROGRAM;

/// Default configuration file embedded in the binary
pub const DEFAULT_CONFIG: &str = include_str!("../../../config.default.toml");

/// Scheme file names looked up inside the schemes directory
pub const LIGHT_SCHEME_FILE: &str = "light.json";
pub const DARK_SCHEME_FILE: &str = "dark.json";

pub const DEFAULT_PYWAL_PROGRAM: &str = "wal";
pub const DEFAULT_PYWAL_TIMEOUT_SECS: u64 = DEFAULT_WAL_TIMEOUT.as_secs();
pub const DEFAULT_MATUGEN_TIMEOUT_SECS: u64 = DEFAULT_MATUGEN_TIMEOUT.as_secs();
pub const DEFAULT_LOG_LEVEL: &str = "info";
