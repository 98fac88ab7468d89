//! Cache directory creation.
//!
//! [`ensure_directory`] is the launcher's equivalent of `mkdir -p`: it
//! creates every missing ancestor of the target path and treats "already
//! exists" as success on every prefix, so a concurrent creator racing on the
//! same tree is not an error.

use std::fs;
use std::path::{Path, PathBuf};

use nix::errno::Errno;
use nix::sys::stat::Mode;
use nix::unistd::mkdir;
use thiserror::Error;
use tracing::debug;

/// Failure to ensure a directory exists.
#[derive(Debug, Error)]
pub enum EnsureDirError {
    /// The requested path was empty.
    #[error("path is empty")]
    EmptyPath,
    /// The requested path is at or beyond the platform path length limit.
    #[error("path too long: {}", .path.display())]
    PathTooLong { path: PathBuf },
    /// The requested path exists but is not a directory.
    #[error("not a directory: {}", .path.display())]
    NotADirectory { path: PathBuf },
    /// Creating one of the prefixes failed.
    #[error("create directory {}: {}", .path.display(), .source)]
    Create { path: PathBuf, source: Errno },
}

/// Ensure `path` exists as a directory, creating missing ancestors with `mode`.
///
/// Prefixes that already exist are fine, whoever created them; the first real
/// creation failure aborts with the offending prefix. Directories created
/// before that point are left in place.
pub fn ensure_directory(path: &Path, mode: Mode) -> Result<(), EnsureDirError> {
    if path.as_os_str().is_empty() {
        return Err(EnsureDirError::EmptyPath);
    }

    // Fast path: nothing to do for an existing directory.
    if let Ok(meta) = fs::metadata(path) {
        if meta.is_dir() {
            return Ok(());
        }
        return Err(EnsureDirError::NotADirectory {
            path: path.to_path_buf(),
        });
    }

    if path.as_os_str().len() >= libc::PATH_MAX as usize {
        return Err(EnsureDirError::PathTooLong {
            path: path.to_path_buf(),
        });
    }

    // Shortest prefix first. `ancestors` normalizes trailing separators and
    // ends with the root (absolute paths) or the empty path (relative paths);
    // neither is ours to create.
    let prefixes: Vec<&Path> = path
        .ancestors()
        .filter(|p| !p.as_os_str().is_empty() && p.parent().is_some())
        .collect();
    for prefix in prefixes.iter().rev() {
        match mkdir(*prefix, mode) {
            Ok(()) => debug!(path = %prefix.display(), "created directory"),
            Err(Errno::EEXIST) => {}
            Err(errno) => {
                return Err(EnsureDirError::Create {
                    path: prefix.to_path_buf(),
                    source: errno,
                });
            }
        }
    }

    Ok(())
}
