use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use make_exe_lib::consts::{APP_NAME, DEFAULT_BUILD_ROOT, DEFAULT_PROGRAM, DEFAULT_TOOLCHAIN};
use make_exe_lib::{BuildConfig, BuildTarget, ModeFlags};

mod args;
mod cmd;
mod output;

use output::{error_chain, print_error};

/// Build script for odin projects
///
/// Pass exactly one of -release, -debug or -clean. Single- and double-dash
/// spellings are both accepted.
#[derive(Parser)]
#[command(name = APP_NAME)]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Release build (removes the previous release output first)
  #[arg(long)]
  release: bool,

  /// Debug build
  #[arg(long)]
  debug: bool,

  /// Clean the build folder
  #[arg(long)]
  clean: bool,

  /// Run the executable after compiling it, requires -debug | -release
  #[arg(long)]
  run: bool,

  /// If the build fails, hold the terminal until Enter is pressed, requires -run
  #[arg(long)]
  hold: bool,

  /// Toolchain executable to invoke
  #[arg(long, value_name = "EXE", default_value = DEFAULT_TOOLCHAIN)]
  toolchain: String,

  /// Name of the produced binary
  #[arg(long, value_name = "NAME", default_value = DEFAULT_PROGRAM)]
  program: String,

  /// Source target to compile (default: same as --program)
  #[arg(long, value_name = "TARGET")]
  source: Option<String>,

  /// Root build directory
  #[arg(long = "build-dir", value_name = "DIR", default_value = DEFAULT_BUILD_ROOT)]
  build_dir: PathBuf,

  /// Extra collection flag passed to the toolchain (repeatable)
  #[arg(long = "collection", value_name = "FLAG", allow_hyphen_values = true)]
  collections: Vec<String>,

  /// Enable verbose output
  #[arg(short, long)]
  verbose: bool,
}

impl Cli {
  fn mode_flags(&self) -> ModeFlags {
    ModeFlags {
      release: self.release,
      debug: self.debug,
      clean: self.clean,
      run: self.run,
      hold: self.hold,
    }
  }

  fn build_config(self) -> BuildConfig {
    let source = self.source.unwrap_or_else(|| self.program.clone());
    BuildConfig {
      toolchain: self.toolchain,
      target: BuildTarget::new(self.program, source),
      root_build_dir: self.build_dir,
      collections: self.collections,
      ..Default::default()
    }
  }
}

fn init_logging(verbose: bool) {
  let default_level = if verbose { "debug" } else { "warn" };
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .without_time()
    .init();
}

fn main() -> ExitCode {
  let cli = Cli::parse_from(args::normalize(std::env::args_os()));

  init_logging(cli.verbose);

  let flags = cli.mode_flags();
  match cmd::cmd_make(flags, cli.build_config()) {
    Ok(outcome) => ExitCode::from(u8::try_from(outcome.exit_code()).unwrap_or(1)),
    Err(err) => {
      print_error(&error_chain(&err));
      ExitCode::FAILURE
    }
  }
}
