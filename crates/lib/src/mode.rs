//! Build mode selection.
//!
//! The command line carries three mutually exclusive mode flags. When more
//! than one is present the first match in the order release, debug, clean
//! wins, so selection never fails.

use std::fmt;

/// Raw mode and modifier flags as parsed from the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModeFlags {
  pub release: bool,
  pub debug: bool,
  pub clean: bool,
  pub run: bool,
  pub hold: bool,
}

/// The single action an invocation performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuildMode {
  Release,
  Debug,
  Clean,
  None,
}

impl BuildMode {
  /// Select the mode for a set of flags.
  ///
  /// Priority is Release, then Debug, then Clean; `run` and `hold` do not
  /// influence the choice.
  pub fn select(flags: &ModeFlags) -> Self {
    if flags.release {
      Self::Release
    } else if flags.debug {
      Self::Debug
    } else if flags.clean {
      Self::Clean
    } else {
      Self::None
    }
  }

  /// The build profile this mode compiles with, if it compiles at all.
  pub fn profile(self) -> Option<Profile> {
    match self {
      Self::Release => Some(Profile::Release),
      Self::Debug => Some(Profile::Debug),
      Self::Clean | Self::None => None,
    }
  }

  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Release => "release",
      Self::Debug => "debug",
      Self::Clean => "clean",
      Self::None => "none",
    }
  }
}

impl fmt::Display for BuildMode {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

/// A compiling mode; each profile owns one subdirectory of the build root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Profile {
  Release,
  Debug,
}

impl Profile {
  /// Name of the profile's directory under the build root.
  pub fn dir_name(&self) -> &'static str {
    match self {
      Self::Release => "release",
      Self::Debug => "debug",
    }
  }
}

impl fmt::Display for Profile {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.dir_name())
  }
}
