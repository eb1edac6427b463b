//! Tests for source collection and initialization.
//!
//! Responsibilities:
//! - Test source precedence across all five candidate mappings.
//! - Test env-file filtering, skipping, and the disable gate.
//! - Test deferred-value resolution through the full pipeline.
//!
//! Invariants / Assumptions:
//! - Tests use `env_lock()` plus `serial_test` to serialize mutations of
//!   process-global state (cwd/env).
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::path::PathBuf;
use std::sync::Mutex;
use tempfile::TempDir;


/// Returns the global test lock for cwd/env isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// RAII guard for temporarily changing the current working directory.
pub struct CwdGuard {
    original_dir: PathBuf,
}

impl CwdGuard {
    pub fn new(temp_dir: &TempDir) -> Self {
        let original_dir = std::env::current_dir().expect("Failed to get current directory");
        std::env::set_current_dir(temp_dir.path()).expect("Failed to set current directory");
        Self { original_dir }
    }
}

impl Drop for CwdGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original_dir);
    }
}

/// Set a process environment variable for the duration of a test.
pub fn set_env(key: &str, value: &str) {
    unsafe {
        std::env::set_var(key, value);
    }
}

/// Remove a process environment variable set by a test.
pub fn remove_env(key: &str) {
    unsafe {
        std::env::remove_var(key);
    }
}
