//! Launcher for the squid caching proxy daemon.
//!
//! `squid-init` performs one linear startup sequence: resolve configuration
//! (flags > environment > defaults), verify the daemon binary is executable,
//! ensure the cache directory tree exists, run the daemon once in
//! cache-initialization mode, and finally replace itself with the daemon in
//! normal run mode. The architecture keeps a strict separation:
//!
//! - **[`config`]**: Pure resolution of launcher configuration. No I/O; the
//!   environment is injected as a lookup closure.
//! - **[`io`]**: Side-effecting operations (directory creation, process
//!   spawning and replacement).
//! - **[`launch`]**: Orchestration of the startup sequence, with the error
//!   taxonomy that determines the process exit code.
//!
//! Every failure is terminal. The launcher never retries a stage; the
//! surrounding supervisor is expected to re-invoke it wholesale.

pub mod config;
pub mod exit_codes;
pub mod io;
pub mod launch;
pub mod logging;
