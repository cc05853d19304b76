//! Implementation of the `make_exe` invocation.
//!
//! Selects the build mode from the parsed flags and hands it to the
//! orchestrator with the terminal's stdout and stdin.

use std::io;

use anyhow::{Context, Result};
use tracing::debug;

use make_exe_lib::{BuildConfig, BuildMode, ModeFlags, Orchestrator, Outcome, RunOptions};

use crate::output::print_warning;

/// Execute one invocation and report how it ended.
///
/// `-run` and `-hold` only matter for the compiling modes; passing them
/// alone is allowed but produces a warning.
pub fn cmd_make(flags: ModeFlags, config: BuildConfig) -> Result<Outcome> {
  let mode = BuildMode::select(&flags);
  debug!(%mode, ?config, "resolved invocation");

  if mode.profile().is_none() && (flags.run || flags.hold) {
    print_warning("-run and -hold only take effect together with -debug or -release");
  }

  let orchestrator = Orchestrator::new(config, RunOptions::from(&flags));

  let stdout = io::stdout();
  let stdin = io::stdin();
  orchestrator
    .run(mode, &mut stdout.lock(), &mut stdin.lock())
    .with_context(|| format!("{} failed", mode))
}
