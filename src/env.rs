//! Guarded access to the process-environment store.
//!
//! Responsibilities:
//! - Serialize all environment reads and writes behind a process-wide lock.
//! - Wrap the `unsafe` mutation APIs (edition 2024) in one audited place.
//!
//! Does NOT handle:
//! - Deciding which keys to read or write (see `view.rs` and the loader).
//!
//! Invariants:
//! - Every environment mutation in this crate goes through this module.
//! - Reads take the shared lock, mutations the exclusive lock.

use std::collections::HashMap;
use std::sync::{OnceLock, PoisonError, RwLock};

static ENV_LOCK: OnceLock<RwLock<()>> = OnceLock::new();

fn lock() -> &'static RwLock<()> {
    ENV_LOCK.get_or_init(|| RwLock::new(()))
}

/// Snapshot of every current environment variable.
pub(crate) fn snapshot() -> HashMap<String, String> {
    let _guard = lock().read().unwrap_or_else(PoisonError::into_inner);
    std::env::vars().collect()
}

/// Read a single variable; `None` when unset or not valid UTF-8.
pub(crate) fn var(key: &str) -> Option<String> {
    let _guard = lock().read().unwrap_or_else(PoisonError::into_inner);
    std::env::var(key).ok()
}

/// Set a variable in the process environment.
pub(crate) fn set_var(key: &str, value: &str) {
    let _guard = lock().write().unwrap_or_else(PoisonError::into_inner);
    // SAFETY: all environment mutation in this crate is funneled through this
    // module while holding the exclusive lock.
    unsafe {
        std::env::set_var(key, value);
    }
}

/// Remove a variable from the process environment.
pub(crate) fn remove_var(key: &str) {
    let _guard = lock().write().unwrap_or_else(PoisonError::into_inner);
    // SAFETY: see `set_var`.
    unsafe {
        std::env::remove_var(key);
    }
}
