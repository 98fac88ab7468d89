//! Orchestration of the launch sequence.
//!
//! The sequence is strictly linear: verify the daemon binary, ensure the
//! cache directory, run one-shot cache initialization, then replace this
//! process with the daemon. Every failure is terminal and carries the exit
//! code the supervisor observes.

use std::convert::Infallible;
use std::path::{Path, PathBuf};

use nix::errno::Errno;
use nix::sys::stat::Mode;
use nix::unistd::{AccessFlags, access};
use thiserror::Error;
use tracing::debug;

use crate::config::ResolvedConfig;
use crate::exit_codes;
use crate::io::dirs::{EnsureDirError, ensure_directory};
use crate::io::process::{ExitOutcome, run_forever, run_init};

/// Permission bits for cache directories created by the launcher.
const CACHE_DIR_MODE: u32 = 0o755;

/// Terminal launch failure, mapped to a process exit code.
#[derive(Debug, Error)]
pub enum LaunchError {
    /// The daemon binary is missing or not executable.
    #[error("cannot execute {}: {}", .path.display(), .source)]
    NotRunnable { path: PathBuf, source: Errno },
    /// The cache directory could not be created.
    #[error(transparent)]
    CacheDir(#[from] EnsureDirError),
    /// The cache-initialization child could not be spawned.
    #[error("cache initialization failed to start: {:#}", .0)]
    InitSpawn(anyhow::Error),
    /// Cache initialization ran and exited with a nonzero code.
    #[error("cache initialization failed with code {code}")]
    InitExited { code: i32 },
    /// Cache initialization was killed by a signal.
    #[error("cache initialization terminated abnormally")]
    InitSignaled,
    /// The final exec of the daemon failed.
    #[error("{:#}", .0)]
    Exec(anyhow::Error),
}

impl LaunchError {
    /// Exit code reported to the supervisor for this failure.
    ///
    /// A nonzero init exit code is propagated verbatim; abnormal init
    /// termination and wait failures both collapse to [`exit_codes::FAILURE`].
    pub fn exit_code(&self) -> i32 {
        match self {
            LaunchError::InitExited { code } => *code,
            LaunchError::Exec(_) => exit_codes::EXEC_FAILED,
            _ => exit_codes::FAILURE,
        }
    }
}

/// Run the full launch sequence.
///
/// On success the daemon replaces this process and the call never returns.
pub fn launch(cfg: &ResolvedConfig) -> Result<Infallible, LaunchError> {
    verify_executable(&cfg.bin)?;

    ensure_directory(&cfg.cache_dir, Mode::from_bits_truncate(CACHE_DIR_MODE))?;
    debug!(cache_dir = %cfg.cache_dir.display(), "cache directory ready");

    eprintln!("squid-init: Initializing cache...");
    match run_init(&cfg.bin, &cfg.conf).map_err(LaunchError::InitSpawn)? {
        ExitOutcome::Exited(0) => {}
        ExitOutcome::Exited(code) => return Err(LaunchError::InitExited { code }),
        ExitOutcome::Signaled => return Err(LaunchError::InitSignaled),
    }

    eprintln!("squid-init: Starting squid...");
    match run_forever(&cfg.bin, &cfg.conf) {
        Ok(never) => match never {},
        Err(err) => Err(LaunchError::Exec(err)),
    }
}

/// Check the daemon binary is executable before any side effects.
fn verify_executable(path: &Path) -> Result<(), LaunchError> {
    access(path, AccessFlags::X_OK).map_err(|source| LaunchError::NotRunnable {
        path: path.to_path_buf(),
        source,
    })
}
