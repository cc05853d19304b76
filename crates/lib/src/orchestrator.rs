//! The build orchestrator.
//!
//! Turns a selected `BuildMode` into filesystem work and at most one
//! toolchain invocation:
//!
//! - Release: clean `<root>/release`, recreate it, build with release flags
//! - Debug: create `<root>/debug` if missing, build with debug flags
//! - Clean: remove the whole build root
//! - None: print a usage hint and touch nothing
//!
//! Status lines go to the supplied writer; the hold prompt reads from the
//! supplied reader, so callers decide what "the terminal" is.

use std::io::{self, BufRead, Write};
use std::path::Path;

use thiserror::Error;
use tracing::{info, warn};

use crate::clean::{CleanError, CleanOutcome, clean, ensure_dir};
use crate::config::BuildConfig;
use crate::consts::USAGE_HINT;
use crate::execute::{ExecuteError, ProcessExit, Subcommand, ToolchainCommand};
use crate::flags::FlagSet;
use crate::mode::{BuildMode, ModeFlags, Profile};
use crate::prompt::wait_for_enter;

#[derive(Debug, Error)]
pub enum OrchestratorError {
  #[error(transparent)]
  Clean(#[from] CleanError),

  #[error(transparent)]
  Execute(#[from] ExecuteError),

  #[error("terminal io error: {0}")]
  Io(#[from] io::Error),
}

/// Result of one invocation, as seen by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
  Success,
  CompilerFailure,
  UserAbort,
}

impl Outcome {
  /// Process exit status for this outcome. An interrupt is not a failure.
  pub fn exit_code(self) -> i32 {
    match self {
      Self::Success | Self::UserAbort => 0,
      Self::CompilerFailure => 1,
    }
  }
}

/// Modifiers that change how a build behaves, not which mode runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunOptions {
  /// Use the toolchain's build-and-run subcommand.
  pub run: bool,
  /// Wait for Enter after a failed build.
  pub hold: bool,
}

impl From<&ModeFlags> for RunOptions {
  fn from(flags: &ModeFlags) -> Self {
    Self {
      run: flags.run,
      hold: flags.hold,
    }
  }
}

pub struct Orchestrator {
  config: BuildConfig,
  options: RunOptions,
}

impl Orchestrator {
  pub fn new(config: BuildConfig, options: RunOptions) -> Self {
    Self { config, options }
  }

  /// Perform the action for `mode`.
  pub fn run<R: BufRead, W: Write>(
    &self,
    mode: BuildMode,
    out: &mut W,
    input: &mut R,
  ) -> Result<Outcome, OrchestratorError> {
    info!(%mode, os = %self.config.os, run = self.options.run, hold = self.options.hold, "starting");

    match mode {
      BuildMode::Release => {
        let dir = self.config.build_dir(Profile::Release);
        self.clean_dir(&dir, out)?;
        ensure_dir(&dir)?;
        self.build(&dir, &self.config.flags_for(Profile::Release), out, input)
      }
      BuildMode::Debug => {
        let dir = self.config.build_dir(Profile::Debug);
        ensure_dir(&dir)?;
        self.build(&dir, &self.config.flags_for(Profile::Debug), out, input)
      }
      BuildMode::Clean => {
        self.clean_dir(&self.config.root_build_dir, out)?;
        Ok(Outcome::Success)
      }
      BuildMode::None => {
        writeln!(out, "{}", USAGE_HINT)?;
        Ok(Outcome::Success)
      }
    }
  }

  /// The toolchain invocation that builds into `dir` with `flags`.
  pub fn command(&self, dir: &Path, flags: &FlagSet) -> ToolchainCommand {
    let binary = self.config.target.binary_path(dir, self.config.os);
    ToolchainCommand::new(
      &self.config.toolchain,
      Subcommand::from_run_flag(self.options.run),
      &self.config.target.source,
      &binary,
      flags,
    )
  }

  /// Echo and run the toolchain, mapping its exit to an `Outcome`.
  pub fn build<R: BufRead, W: Write>(
    &self,
    dir: &Path,
    flags: &FlagSet,
    out: &mut W,
    input: &mut R,
  ) -> Result<Outcome, OrchestratorError> {
    let binary = self.config.target.binary_path(dir, self.config.os);
    let command = self.command(dir, flags);

    writeln!(out, "{}", command)?;
    out.flush()?;

    match command.execute()? {
      ProcessExit::Success => {
        info!(binary = %binary.display(), "build finished");
        Ok(Outcome::Success)
      }
      ProcessExit::Failed(code) => {
        warn!(?code, "toolchain failed");
        if self.options.hold {
          wait_for_enter(input, out)?;
        }
        Ok(Outcome::CompilerFailure)
      }
      ProcessExit::Interrupted => {
        writeln!(out, "\nforce quit: {}", binary.display())?;
        Ok(Outcome::UserAbort)
      }
    }
  }

  fn clean_dir<W: Write>(&self, dir: &Path, out: &mut W) -> Result<CleanOutcome, OrchestratorError> {
    let outcome = clean(dir)?;
    match outcome {
      CleanOutcome::Removed => writeln!(out, "Removed directory: {}", dir.display())?,
      CleanOutcome::NotFound => writeln!(out, "No directory to clean at: {}", dir.display())?,
    }
    Ok(outcome)
  }
}
