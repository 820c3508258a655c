//! Exit code constants for the arrow-launcher CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, unreadable or invalid config)
//! - 2: Generator binary could not be located
//! - 3: Generator binary could not be started
//! - 4: Generator ran and exited non-zero

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments or invalid configuration.
pub const USER_ERROR: i32 = 1;

/// No resolution strategy produced a generator path.
pub const BINARY_NOT_FOUND: i32 = 2;

/// The resolved generator path could not be executed.
pub const LAUNCH_FAILURE: i32 = 3;

/// The generator reported a failure through its exit status.
pub const GENERATION_FAILED: i32 = 4;
