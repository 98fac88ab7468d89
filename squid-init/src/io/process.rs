//! Spawning and replacing the daemon process.

use std::convert::Infallible;
use std::os::unix::process::CommandExt;
use std::path::Path;
use std::process::Command;

use anyhow::{Context, Result};
use tracing::debug;

/// How a cache-initialization child terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitOutcome {
    /// Normal exit with the given code.
    Exited(i32),
    /// Killed by a signal (no exit code).
    Signaled,
}

/// Run the daemon once in cache-initialization mode (`-N -z -f <conf>`) and
/// block until it finishes.
///
/// Stdio is inherited, so initialization output lands on the launcher's own
/// streams. The wait is retried on `EINTR` by the standard library. Fails
/// only if the child could not be spawned at all.
pub fn run_init(bin: &Path, conf: &Path) -> Result<ExitOutcome> {
    debug!(bin = %bin.display(), conf = %conf.display(), "spawning cache initialization");
    let status = Command::new(bin)
        .arg("-N")
        .arg("-z")
        .arg("-f")
        .arg(conf)
        .status()
        .with_context(|| format!("spawn {}", bin.display()))?;

    let outcome = match status.code() {
        Some(code) => ExitOutcome::Exited(code),
        None => ExitOutcome::Signaled,
    };
    debug!(?outcome, "cache initialization finished");
    Ok(outcome)
}

/// Replace the current process image with the daemon in normal run mode
/// (`-N -f <conf>`).
///
/// On success this never returns: the launcher ceases to exist and the
/// daemon takes over its process identity. Returns only on exec failure.
pub fn run_forever(bin: &Path, conf: &Path) -> Result<Infallible> {
    debug!(bin = %bin.display(), conf = %conf.display(), "handing control to the daemon");
    let err = Command::new(bin).arg("-N").arg("-f").arg(conf).exec();
    Err(err).with_context(|| format!("exec {}", bin.display()))
}
