//! Shared utilities.
//!
//! Test helpers for exercising the toolchain invocation without a real compiler.

pub mod testutil;
