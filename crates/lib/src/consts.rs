/// Name used for the binary and log targets.
pub const APP_NAME: &str = "make_exe";

/// Toolchain executable invoked when none is configured.
pub const DEFAULT_TOOLCHAIN: &str = "odin";

/// Program and source target name used when none is configured.
pub const DEFAULT_PROGRAM: &str = "floppy";

/// Root of all build output, relative to the working directory.
pub const DEFAULT_BUILD_ROOT: &str = "build";

pub const DEBUG_FLAGS: &[&str] = &["-debug"];
pub const RELEASE_FLAGS: &[&str] = &["-o:speed", "-vet", "-no-bounds-check"];
pub const EXTRA_FLAGS: &[&str] = &["-strict-style", "-disallow-do"];

/// Printed when no mode flag was given.
pub const USAGE_HINT: &str = "pass either of these flags: -release | -debug | -clean | --help";
