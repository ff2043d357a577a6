//! Exit code constants for the cfgtree CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, empty path, bad element index)
//! - 2: Not found (missing node or unloaded document)
//! - 3: I/O or JSON failure

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments or an invalid path.
pub const USER_ERROR: i32 = 1;

/// The addressed node or document does not exist.
pub const NOT_FOUND: i32 = 2;

/// Reading, writing or decoding a document failed.
pub const IO_FAILURE: i32 = 3;
