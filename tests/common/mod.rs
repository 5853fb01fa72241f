//! Common test utilities and helpers
//!
//! This module provides shared functionality for integration tests:
//! - Assertion helpers for bundle layout checks
//! - Test fixture creation utilities
//!
//! # Usage
//!
//! ```rust,no_run
//! mod common;
//! use common::{assertions::*, fixtures};
//!
//! fn test_banner_lands_first() {
//!     let app = fixtures::create_has_banner_app().unwrap();
//!     let bundle = std::fs::read_to_string(&app.bundle).unwrap();
//!     assert_parts_in_order(&bundle, &fixtures::BUNDLE_PARTS);
//! }
//! ```

pub mod assertions;
pub mod fixtures;

/// Get the bundle-banner binary command with a quiet, reproducible environment
#[allow(dead_code)]
pub fn get_bin() -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(env!("CARGO_BIN_EXE_bundle-banner"));
    cmd.env_remove("RUST_LOG")
        .env_remove("SOURCE_DATE_EPOCH")
        .env("NO_EMOJI", "1");
    cmd
}
