//! Exit code constants for the tabnine-config CLI.
//!
//! - 0: Success (for `check`: at least one path is ignored)
//! - 1: `check` found no ignored path
//! - 2: User error (bad args, refusing to overwrite)
//! - 3: I/O failure reading or writing a config file

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// `check` ran, but none of the given paths is ignored.
pub const NOT_IGNORED: i32 = 1;

/// User error: bad arguments or an operation that would clobber existing state.
pub const USER_ERROR: i32 = 2;

/// I/O failure: the config file could not be read or written.
pub const IO_FAILURE: i32 = 3;
