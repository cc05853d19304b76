//! Build directory removal and creation.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum CleanError {
  #[error("failed to remove {path}: {source}")]
  Remove {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  #[error("failed to create {path}: {source}")]
  Create {
    path: PathBuf,
    #[source]
    source: io::Error,
  },
}

/// What `clean` found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CleanOutcome {
  Removed,
  NotFound,
}

/// Recursively delete `dir` if it exists.
///
/// Calling this on an already clean tree is not an error, it reports
/// `NotFound`.
pub fn clean(dir: &Path) -> Result<CleanOutcome, CleanError> {
  if !dir.exists() {
    debug!(path = %dir.display(), "nothing to clean");
    return Ok(CleanOutcome::NotFound);
  }

  fs::remove_dir_all(dir).map_err(|source| CleanError::Remove {
    path: dir.to_path_buf(),
    source,
  })?;

  info!(path = %dir.display(), "removed build directory");
  Ok(CleanOutcome::Removed)
}

/// Create `dir` and its parents; existing directories are left untouched.
pub fn ensure_dir(dir: &Path) -> Result<(), CleanError> {
  fs::create_dir_all(dir).map_err(|source| CleanError::Create {
    path: dir.to_path_buf(),
    source,
  })?;
  debug!(path = %dir.display(), "build directory ready");
  Ok(())
}
