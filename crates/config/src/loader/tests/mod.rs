//! Tests for the configuration loader builder.
//!
//! Invariants:
//! - Tests touching the process environment use `serial_test` and `global_test_lock()`.

use std::sync::Mutex;


/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}
