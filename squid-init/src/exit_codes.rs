//! Stable exit codes for the launcher.
//!
//! The cache-initialization child's own nonzero exit code is propagated
//! verbatim and therefore has no constant here.

/// `--help`/`--version` was requested. A successful launch never observes an
/// exit code of its own: the process image is replaced by the daemon.
pub const OK: i32 = 0;
/// Usage error, unrunnable binary, cache directory failure, spawn failure,
/// or an abnormally terminated cache initialization.
pub const FAILURE: i32 = 1;
/// The final exec of the daemon failed after initialization succeeded.
pub const EXEC_FAILED: i32 = 127;
