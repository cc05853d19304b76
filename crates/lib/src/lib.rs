//! make-exe-lib: build orchestration for a single toolchain target
//!
//! This crate provides the pieces behind the `make_exe` command:
//! - `BuildMode`: which action the invocation selected
//! - `BuildConfig`: toolchain, target and flag lists, passed in explicitly
//! - `ToolchainCommand`: the external compiler invocation
//! - `Orchestrator`: ties mode selection, cleaning and building together

pub mod clean;
pub mod config;
pub mod consts;
pub mod execute;
pub mod flags;
pub mod mode;
pub mod orchestrator;
pub mod platform;
pub mod prompt;
pub mod target;

#[cfg(test)]
mod util;

pub use clean::{CleanError, CleanOutcome, clean, ensure_dir};
pub use config::BuildConfig;
pub use execute::{ExecuteError, ProcessExit, Subcommand, ToolchainCommand};
pub use flags::FlagSet;
pub use mode::{BuildMode, ModeFlags, Profile};
pub use orchestrator::{Orchestrator, OrchestratorError, Outcome, RunOptions};
pub use platform::os::Os;
pub use target::BuildTarget;
