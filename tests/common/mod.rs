//! Common test utilities for treemenu CLI and scenario tests.
//!
//! - `TestEnv`: isolated temp directory plus helpers to run the binary
//! - Fixtures: reusable menu definitions

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
