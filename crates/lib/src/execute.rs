//! Toolchain process execution.
//!
//! The toolchain runs as a single blocking child process with its output
//! passed straight through to the terminal. An interrupt while waiting is
//! not an error: the child is stopped and the caller is told the run was
//! interrupted.

use std::fmt;
use std::io;
use std::path::Path;
use std::process::ExitStatus;

use thiserror::Error;
use tokio::process::Command;
use tracing::{debug, info, warn};

use crate::flags::FlagSet;

#[derive(Debug, Error)]
pub enum ExecuteError {
  /// The toolchain could not be started, usually because it is not on `PATH`.
  #[error("failed to start {program}: {source}")]
  Spawn {
    program: String,
    #[source]
    source: io::Error,
  },

  #[error("failed to wait for {program}: {source}")]
  Wait {
    program: String,
    #[source]
    source: io::Error,
  },

  #[error("failed to listen for interrupt: {0}")]
  Signal(#[source] io::Error),

  #[error("failed to create runtime: {0}")]
  Runtime(#[source] io::Error),
}

/// Toolchain subcommand: compile only, or compile and run in one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subcommand {
  Build,
  Run,
}

impl Subcommand {
  pub fn from_run_flag(run: bool) -> Self {
    if run { Self::Run } else { Self::Build }
  }

  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Build => "build",
      Self::Run => "run",
    }
  }
}

/// How the toolchain process ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessExit {
  Success,
  /// Non-zero exit; the code is absent when the process died from a signal.
  Failed(Option<i32>),
  Interrupted,
}

/// A fully constructed toolchain invocation:
/// `<toolchain> <build|run> <source> -out:<binary> <flags...>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolchainCommand {
  program: String,
  args: Vec<String>,
}

impl ToolchainCommand {
  pub fn new(toolchain: &str, subcommand: Subcommand, source: &str, binary: &Path, flags: &FlagSet) -> Self {
    let mut args = Vec::with_capacity(flags.len() + 3);
    args.push(subcommand.as_str().to_string());
    args.push(source.to_string());
    args.push(format!("-out:{}", binary.display()));
    args.extend(flags.iter().cloned());

    Self {
      program: toolchain.to_string(),
      args,
    }
  }

  pub fn program(&self) -> &str {
    &self.program
  }

  pub fn args(&self) -> &[String] {
    &self.args
  }

  /// Program followed by its arguments.
  pub fn tokens(&self) -> impl Iterator<Item = &str> {
    std::iter::once(self.program.as_str()).chain(self.args.iter().map(String::as_str))
  }

  /// Run the command and block until it exits or the user interrupts it.
  pub fn execute(&self) -> Result<ProcessExit, ExecuteError> {
    let runtime = tokio::runtime::Builder::new_current_thread()
      .enable_all()
      .build()
      .map_err(ExecuteError::Runtime)?;
    runtime.block_on(self.execute_async())
  }

  async fn execute_async(&self) -> Result<ProcessExit, ExecuteError> {
    // Listen before spawning so an interrupt aimed at the whole process
    // group can never reach us with the default disposition.
    let mut interrupt = listen_for_interrupt().map_err(ExecuteError::Signal)?;

    info!(program = %self.program, args = ?self.args, "spawning toolchain");

    let mut child = Command::new(&self.program)
      .args(&self.args)
      .kill_on_drop(true)
      .spawn()
      .map_err(|source| ExecuteError::Spawn {
        program: self.program.clone(),
        source,
      })?;

    // A terminal interrupt hits the child too, so both branches can be ready
    // at once; the interrupt must win.
    let event = tokio::select! {
      biased;
      _ = interrupt.recv() => WaitEvent::Interrupted,
      status = child.wait() => WaitEvent::Exited(status),
    };

    match event {
      WaitEvent::Exited(status) => {
        let status = status.map_err(|source| ExecuteError::Wait {
          program: self.program.clone(),
          source,
        })?;
        debug!(code = ?status.code(), "toolchain exited");
        Ok(classify(status))
      }
      WaitEvent::Interrupted => {
        warn!(program = %self.program, "interrupted while waiting for toolchain");
        if let Err(err) = child.start_kill() {
          debug!(error = %err, "toolchain already gone");
        }
        if let Err(err) = child.wait().await {
          debug!(error = %err, "failed to reap toolchain");
        }
        Ok(ProcessExit::Interrupted)
      }
    }
  }
}

enum WaitEvent {
  Interrupted,
  Exited(io::Result<ExitStatus>),
}

#[cfg(unix)]
fn listen_for_interrupt() -> io::Result<tokio::signal::unix::Signal> {
  tokio::signal::unix::signal(tokio::signal::unix::SignalKind::interrupt())
}

#[cfg(windows)]
fn listen_for_interrupt() -> io::Result<tokio::signal::windows::CtrlC> {
  tokio::signal::windows::ctrl_c()
}

/// Map an exit status to a `ProcessExit`. A toolchain killed by SIGINT was
/// interrupted, not failed.
fn classify(status: ExitStatus) -> ProcessExit {
  if status.success() {
    return ProcessExit::Success;
  }

  #[cfg(unix)]
  {
    use std::os::unix::process::ExitStatusExt;
    if status.signal() == Some(libc::SIGINT) {
      return ProcessExit::Interrupted;
    }
  }

  ProcessExit::Failed(status.code())
}

impl fmt::Display for ToolchainCommand {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.tokens().collect::<Vec<_>>().join(" "))
  }
}
