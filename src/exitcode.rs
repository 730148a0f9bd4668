//! Standard exit codes (BSD sysexits.h compatible)

/// Successful termination
pub const OK: i32 = 0;

/// Command line usage error
pub const USAGE: i32 = 64;

/// Cannot open input (parameter does not exist)
pub const NOINPUT: i32 = 66;

/// Service unavailable (remote call failed)
pub const UNAVAILABLE: i32 = 69;

/// Input/output error
pub const IOERR: i32 = 74;

/// Permission denied (no usable credentials)
pub const NOPERM: i32 = 77;

/// Configuration error
pub const CONFIG: i32 = 78;
