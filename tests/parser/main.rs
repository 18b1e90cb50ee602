//! Integration tests for the xreflect_parser crate.
//!
//! Tests for the declaration parsing pipeline:
//! - Grammar matching
//! - Type resolution
//! - Modifier validation and handle population
//! - Crash resistance on arbitrary input

mod fuzz_tests;
mod handle_tests;
mod resolution_tests;

/// Routes `log` output through the test harness. Safe to call repeatedly.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
