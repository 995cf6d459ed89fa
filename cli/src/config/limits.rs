/// Hard limits for configurable values

/// Shortest accepted tool timeout
pub const MIN_TOOL_TIMEOUT_SECS: u64 = 1;

/// Longest accepted tool timeout (10 minutes)
pub const MAX_TOOL_TIMEOUT_SECS: u64 = 600;

/// Log levels accepted in `[logging] level`
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
