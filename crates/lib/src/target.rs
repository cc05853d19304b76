//! Build target naming and output binary paths.

use std::path::{Path, PathBuf};

use crate::consts::DEFAULT_PROGRAM;
use crate::platform::os::Os;

/// The program to produce and the source module it is compiled from.
///
/// Usually both names are the same; a project can still name its binary
/// differently from its entry point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildTarget {
  pub program: String,
  pub source: String,
}

impl BuildTarget {
  pub fn new(program: impl Into<String>, source: impl Into<String>) -> Self {
    Self {
      program: program.into(),
      source: source.into(),
    }
  }

  /// Target whose binary and source module share a name.
  pub fn same(name: impl Into<String>) -> Self {
    let name = name.into();
    Self {
      program: name.clone(),
      source: name,
    }
  }

  /// Path of the binary the toolchain writes into `dir`.
  ///
  /// On Windows the executable extension is appended only when the program
  /// name has no extension of its own.
  pub fn binary_path(&self, dir: &Path, os: Os) -> PathBuf {
    let binary = dir.join(&self.program);
    match os.exe_extension() {
      Some(ext) if binary.extension().is_none() => binary.with_extension(ext),
      _ => binary,
    }
  }
}

impl Default for BuildTarget {
  fn default() -> Self {
    Self::same(DEFAULT_PROGRAM)
  }
}
