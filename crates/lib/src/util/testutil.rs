//! Test utilities for make-exe-lib.
//!
//! Provides a stand-in toolchain: a shell script that records the arguments
//! it was called with and exits with a chosen status.

#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

pub struct FakeToolchain {
  program: PathBuf,
  args_file: PathBuf,
  watch_file: PathBuf,
}

impl FakeToolchain {
  pub fn program(&self) -> &str {
    self.program.to_str().unwrap()
  }

  /// Arguments of the last invocation, one per entry.
  pub fn recorded_args(&self) -> Vec<String> {
    fs::read_to_string(&self.args_file)
      .unwrap()
      .lines()
      .map(str::to_string)
      .collect()
  }

  pub fn was_invoked(&self) -> bool {
    self.args_file.exists()
  }

  /// "present" or "absent": whether the watched path existed while the toolchain ran.
  pub fn watched_result(&self) -> String {
    fs::read_to_string(&self.watch_file).unwrap().trim().to_string()
  }
}

/// Write a fake toolchain into `dir` that exits with `exit_code`.
pub fn fake_toolchain(dir: &Path, exit_code: i32) -> FakeToolchain {
  fake_toolchain_watching(dir, exit_code, &dir.join("no-watch"))
}

/// Like `fake_toolchain`, additionally recording whether `watched` exists at call time.
pub fn fake_toolchain_watching(dir: &Path, exit_code: i32, watched: &Path) -> FakeToolchain {
  let program = dir.join("fake-toolchain");
  let args_file = dir.join("toolchain-args");
  let watch_file = dir.join("toolchain-watch");

  let script = format!(
    "#!/bin/sh\n\
     for arg in \"$@\"; do printf '%s\\n' \"$arg\"; done > '{args}'\n\
     if [ -e '{watched}' ]; then echo present; else echo absent; fi > '{watch_out}'\n\
     exit {exit_code}\n",
    args = args_file.display(),
    watched = watched.display(),
    watch_out = watch_file.display(),
  );
  fs::write(&program, script).unwrap();
  fs::set_permissions(&program, fs::Permissions::from_mode(0o755)).unwrap();

  FakeToolchain {
    program,
    args_file,
    watch_file,
  }
}

/// Write a toolchain into `dir` that interrupts its parent and then waits
/// until it is killed.
pub fn interrupting_toolchain(dir: &Path) -> FakeToolchain {
  let program = dir.join("interrupting-toolchain");
  let args_file = dir.join("toolchain-args");
  let watch_file = dir.join("toolchain-watch");

  let script = format!(
    "#!/bin/sh\n\
     for arg in \"$@\"; do printf '%s\\n' \"$arg\"; done > '{args}'\n\
     kill -INT $PPID\n\
     exec sleep 30\n",
    args = args_file.display(),
  );
  fs::write(&program, script).unwrap();
  fs::set_permissions(&program, fs::Permissions::from_mode(0o755)).unwrap();

  FakeToolchain {
    program,
    args_file,
    watch_file,
  }
}
