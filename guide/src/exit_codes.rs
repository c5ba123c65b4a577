//! Stable exit codes for guide CLI commands.

/// Command succeeded.
pub const OK: i32 = 0;
/// Command failed due to an invalid catalog, config, argument or other error.
pub const INVALID: i32 = 1;
/// `guide filter` left nothing to show.
pub const NO_MATCH: i32 = 2;
