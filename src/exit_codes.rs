//! Exit code constants for the carcopy CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, unreadable input, bad config)
//! - 2: Validation failure (content too long, selection policy)
//! - 3: Missing credential
//! - 4: Generation failure (any fault from the text-generation service)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, unreadable input file, or invalid configuration.
pub const USER_ERROR: i32 = 1;

/// Validation failure: content over the word ceiling or a required selection missing.
pub const VALIDATION_FAILURE: i32 = 2;

/// No credential was found in the environment or supplied interactively.
pub const MISSING_CREDENTIAL: i32 = 3;

/// The generation request failed: network, timeout, auth, quota, or service error.
pub const GENERATION_FAILURE: i32 = 4;
