/// Standard date format used throughout the codebase: "2025-01-15"
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// Compact date format used in billing month ranges: "20250115"
pub(crate) const COMPACT_DATE_FORMAT: &str = "%Y%m%d";

/// Environment variable naming an explicit config file
pub(crate) const CONFIG_ENV: &str = "DATEKEEPER_CONFIG";

/// Environment variable enabling debug mode
pub(crate) const DEBUG_ENV: &str = "DATEKEEPER_DEBUG";

/// Environment variable holding the date override
pub(crate) const DATE_OVERRIDE_ENV: &str = "DATEKEEPER_DATE_OVERRIDE";
