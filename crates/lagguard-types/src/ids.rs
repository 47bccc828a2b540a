//! Stable identifiers for check modes, exclusion reasons, and tool metadata.

pub const TOOL_NAME: &str = "lagguard";

// Check modes
pub const CHECK_MODE_FILE: &str = "file";
pub const CHECK_MODE_BUILD: &str = "build";
pub const CHECK_MODE_NEWEST: &str = "newest";
pub const CHECK_MODE_OLDEST: &str = "oldest";

pub const CHECK_MODES: [&str; 4] = [
    CHECK_MODE_FILE,
    CHECK_MODE_BUILD,
    CHECK_MODE_NEWEST,
    CHECK_MODE_OLDEST,
];

// Reasons attached to excluded packages
pub const REASON_TOO_NEW: &str = "too_new";
