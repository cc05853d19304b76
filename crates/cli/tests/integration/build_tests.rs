//! `-debug` / `-release` integration tests against a stand-in toolchain.

use predicates::prelude::*;
use serial_test::serial;

use super::common::TestEnv;

#[test]
#[serial]
fn debug_run_invokes_toolchain_run() {
  let env = TestEnv::new();
  let toolchain = env.fake_toolchain(0, "build/debug");

  env
    .make_cmd()
    .args(["-debug", "-run", "-toolchain"])
    .arg(&toolchain)
    .assert()
    .success()
    .stdout(predicate::str::contains(
      "run floppy -out:build/debug/floppy -debug -strict-style -disallow-do",
    ))
    .stdout(predicate::str::contains("compiling..."));

  assert_eq!(
    env.recorded_args(),
    [
      "run",
      "floppy",
      "-out:build/debug/floppy",
      "-debug",
      "-strict-style",
      "-disallow-do"
    ]
  );
  assert_eq!(env.watched_result(), "present");
  assert!(!env.path("build/release").exists());
}

#[test]
#[serial]
fn debug_does_not_clean_existing_output() {
  let env = TestEnv::new();
  env.write_file("build/debug/notes.txt", "keep");
  let toolchain = env.fake_toolchain(0, "build/debug/notes.txt");

  env
    .make_cmd()
    .arg("-debug")
    .arg("--toolchain")
    .arg(&toolchain)
    .assert()
    .success()
    .stdout(predicate::str::contains("Removed directory").not());

  assert_eq!(env.recorded_args()[0], "build");
  assert_eq!(env.watched_result(), "present");
  assert!(env.path("build/debug/notes.txt").exists());
}

#[test]
#[serial]
fn release_cleans_then_builds() {
  let env = TestEnv::new();
  env.write_file("build/release/stale", "old");
  env.write_file("build/debug/floppy", "debug binary");
  let toolchain = env.fake_toolchain(0, "build/release/stale");

  env
    .make_cmd()
    .arg("-release")
    .arg("-toolchain")
    .arg(&toolchain)
    .assert()
    .success()
    .stdout(predicate::str::contains("Removed directory: build/release"));

  assert_eq!(env.watched_result(), "absent");
  assert!(env.path("build/release").is_dir());
  assert!(env.path("build/debug/floppy").exists());
  assert_eq!(
    env.recorded_args(),
    [
      "build",
      "floppy",
      "-out:build/release/floppy",
      "-o:speed",
      "-vet",
      "-no-bounds-check",
      "-strict-style",
      "-disallow-do"
    ]
  );
}

#[test]
#[serial]
fn program_and_source_can_differ() {
  let env = TestEnv::new();
  let toolchain = env.fake_toolchain(0, "build");

  env
    .make_cmd()
    .args(["-debug", "-program", "game", "-source", "src", "-collection", "-collection:lib=lib"])
    .arg("-toolchain")
    .arg(&toolchain)
    .assert()
    .success();

  assert_eq!(
    env.recorded_args(),
    [
      "build",
      "src",
      "-out:build/debug/game",
      "-debug",
      "-collection:lib=lib",
      "-strict-style",
      "-disallow-do"
    ]
  );
}

#[test]
#[serial]
fn compiler_failure_exits_with_one() {
  let env = TestEnv::new();
  let toolchain = env.fake_toolchain(7, "build");

  env
    .make_cmd()
    .arg("-debug")
    .arg("-toolchain")
    .arg(&toolchain)
    .assert()
    .code(1)
    .stdout(predicate::str::contains("Press 'Enter'").not());
}

#[test]
#[serial]
fn compiler_failure_with_hold_waits_for_enter() {
  let env = TestEnv::new();
  let toolchain = env.fake_toolchain(1, "build");

  env
    .make_cmd()
    .args(["-debug", "-run", "-hold", "-toolchain"])
    .arg(&toolchain)
    .write_stdin("\n")
    .assert()
    .code(1)
    .stdout(predicate::str::contains("Press 'Enter' to exit..."));
}

#[test]
#[serial]
fn missing_toolchain_reports_error() {
  let env = TestEnv::new();

  env
    .make_cmd()
    .args(["-debug", "-toolchain", "make-exe-toolchain-that-does-not-exist"])
    .assert()
    .code(1)
    .stderr(predicate::str::contains("failed to start make-exe-toolchain-that-does-not-exist"));

  assert!(!env.toolchain_invoked());
}

#[test]
#[serial]
fn interrupt_is_a_force_quit_not_a_failure() {
  let env = TestEnv::new();
  let toolchain = env.interrupting_toolchain();

  env
    .make_cmd()
    .args(["-debug", "-run", "-hold", "-toolchain"])
    .arg(&toolchain)
    .write_stdin("\n")
    .assert()
    .code(0)
    .stdout(predicate::str::contains("\nforce quit: build/debug/floppy"))
    .stdout(predicate::str::contains("Press 'Enter'").not());
}
