//! Build configuration.
//!
//! Everything the orchestrator needs to know about the project lives in a
//! `BuildConfig` value that is handed to it explicitly. The defaults describe
//! the `floppy` project built with `odin`; the command line can override the
//! toolchain, target, build root and collections.

use std::path::PathBuf;

use crate::consts::{DEBUG_FLAGS, DEFAULT_BUILD_ROOT, DEFAULT_TOOLCHAIN, EXTRA_FLAGS, RELEASE_FLAGS};
use crate::flags::FlagSet;
use crate::mode::Profile;
use crate::platform::{self, os::Os};
use crate::target::BuildTarget;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfig {
  /// Toolchain executable, resolved through `PATH` when not a path.
  pub toolchain: String,
  pub target: BuildTarget,
  /// Directory holding one subdirectory per profile.
  pub root_build_dir: PathBuf,
  /// Module/library search path flags, placed between base and extra flags.
  pub collections: Vec<String>,
  /// Flags shared by every profile.
  pub extra_flags: Vec<String>,
  pub debug_flags: Vec<String>,
  pub release_flags: Vec<String>,
  /// OS whose executable naming rules apply to the output binary.
  pub os: Os,
}

impl BuildConfig {
  /// Full flag list for a profile: base flags, then collections, then extras.
  pub fn flags_for(&self, profile: Profile) -> FlagSet {
    let base = match profile {
      Profile::Release => &self.release_flags,
      Profile::Debug => &self.debug_flags,
    };
    FlagSet::compose(base.iter().cloned(), self.collections.iter().cloned(), self.extra_flags.iter().cloned())
  }

  /// Output directory for a profile, e.g. `build/debug`.
  pub fn build_dir(&self, profile: Profile) -> PathBuf {
    self.root_build_dir.join(profile.dir_name())
  }
}

fn owned(flags: &[&str]) -> Vec<String> {
  flags.iter().map(|s| s.to_string()).collect()
}

impl Default for BuildConfig {
  fn default() -> Self {
    Self {
      toolchain: DEFAULT_TOOLCHAIN.to_string(),
      target: BuildTarget::default(),
      root_build_dir: PathBuf::from(DEFAULT_BUILD_ROOT),
      collections: Vec::new(),
      extra_flags: owned(EXTRA_FLAGS),
      debug_flags: owned(DEBUG_FLAGS),
      release_flags: owned(RELEASE_FLAGS),
      os: platform::os(),
    }
  }
}
