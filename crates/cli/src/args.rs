//! Command-line argument normalization.
//!
//! The tool has always been driven with single-dash long flags (`-release`,
//! `-debug -run`). clap only understands `--release`, so known long names
//! spelled with one dash are rewritten before parsing. Anything else,
//! including flag values such as `-collection:shared=shared`, passes through
//! untouched.

use std::ffi::OsString;

const LONG_NAMES: &[&str] = &[
  "release",
  "debug",
  "clean",
  "run",
  "hold",
  "help",
  "version",
  "verbose",
  "toolchain",
  "program",
  "source",
  "build-dir",
  "collection",
];

/// Rewrite `-name` and `-name=value` into their double-dash form.
///
/// The first item (the program path) is never rewritten.
pub fn normalize<I>(args: I) -> Vec<OsString>
where
  I: IntoIterator<Item = OsString>,
{
  let mut args = args.into_iter();
  let mut normalized: Vec<OsString> = args.next().into_iter().collect();
  normalized.extend(args.map(normalize_one));
  normalized
}

fn normalize_one(arg: OsString) -> OsString {
  let Some(text) = arg.to_str() else {
    return arg;
  };

  let Some(rest) = text.strip_prefix('-') else {
    return arg;
  };
  if rest.starts_with('-') {
    return arg;
  }

  let name = rest.split_once('=').map_or(rest, |(name, _)| name);
  if LONG_NAMES.contains(&name) {
    OsString::from(format!("-{}", text))
  } else {
    arg
  }
}
