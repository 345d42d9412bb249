// HitMapper - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "HitMapper";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Mapper rules
// =============================================================================

/// Client address whose hits are counted. Matched as a substring of the
/// first field, so `10.99.99.186` also matches `10.99.99.1860`.
pub const TARGET_IP: &str = "10.99.99.186";

/// Number of positional fields in a common-log-format line:
/// ip, identity, username, time, request, status code, size.
pub const EXPECTED_FIELD_COUNT: usize = 7;

/// Token count of a combined-log-format line: the common fields followed by
/// the quoted referrer and user agent.
pub const COMBINED_FIELD_COUNT: usize = EXPECTED_FIELD_COUNT + 2;

/// Value emitted alongside every matching key.
pub const HIT_COUNT: u32 = 1;

/// Token extraction pattern. Each match is a quoted segment, a bracketed
/// segment, or a run of non-whitespace, tried in that order.
pub const EXTRACTION_PATTERN: &str = r#""(.*?)"|\[(.*?)\]|(\S+)"#;

/// chrono format of the bracketed access-log time field,
/// e.g. `10/Oct/2000:13:55:36 -0700`.
pub const ACCESS_LOG_TIME_FORMAT: &str = "%d/%b/%Y:%H:%M:%S %z";

// =============================================================================
// Logging
// =============================================================================

/// Default log level. Kept at `warn` so a healthy run writes nothing to
/// stderr; the framework collecting task logs only sees real problems.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Log levels accepted in `[logging] level`.
pub const VALID_LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

/// Maximum length of a log line included in debug output.
pub const DEBUG_MAX_LINE_PREVIEW: usize = 200;

// =============================================================================
// Configuration
// =============================================================================

/// Maximum size of a config file in bytes.
pub const MAX_CONFIG_FILE_SIZE: u64 = 64 * 1024; // 64 KB
