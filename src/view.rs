//! The live configuration view.
//!
//! Responsibilities:
//! - Expose the resolved configuration through an explicit
//!   get/set/delete/has/keys interface.
//! - Mirror every successful write and delete into the process environment.
//! - Fall back to the process environment on reads of unresolved keys.
//!
//! Does NOT handle:
//! - Source collection, precedence, or value resolution (see `loader/`).
//!
//! Invariants:
//! - Operations never panic; invalid keys produce failure indicators.
//! - A key is "invalid" when empty or whitespace-only.
//! - Mutations are visible to any code inspecting the process environment
//!   directly, not only through this view.

use std::collections::{BTreeSet, HashMap};
use std::sync::{PoisonError, RwLock};

use crate::env;
use crate::logger::sink;

/// Mutable, environment-synchronized façade over the resolved configuration.
///
/// Reads consult the resolved store first, then the process environment.
/// Writes and deletes update both. Each individual operation is atomic from
/// the caller's perspective; concurrent writers follow last-write-wins.
#[derive(Debug)]
pub struct LiveConfig {
    resolved: RwLock<HashMap<String, String>>,
}

impl LiveConfig {
    pub(crate) fn new(resolved: HashMap<String, String>) -> Self {
        Self {
            resolved: RwLock::new(resolved),
        }
    }

    fn valid_key(key: &str) -> bool {
        !key.trim().is_empty()
    }

    /// Read a key, falling back to the process environment when unresolved.
    pub fn get(&self, key: &str) -> Option<String> {
        if !Self::valid_key(key) {
            sink().debug(&format!("rejected read of invalid configuration key {key:?}"));
            return None;
        }
        let stored = self
            .resolved
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned();
        stored.or_else(|| env::var(key))
    }

    /// Store a value and mirror it into the process environment.
    ///
    /// Returns `false` (no-op) for an invalid key.
    pub fn set(&self, key: &str, value: &str) -> bool {
        if !Self::valid_key(key) {
            sink().warn(&format!("rejected write to invalid configuration key {key:?}"));
            return false;
        }
        self.resolved
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
        env::set_var(key, value);
        true
    }

    /// Remove a key from the resolved store and the process environment.
    ///
    /// Returns `false` when the key is invalid or absent from the resolved
    /// store.
    pub fn delete(&self, key: &str) -> bool {
        if !Self::valid_key(key) {
            sink().debug(&format!(
                "rejected delete of invalid configuration key {key:?}"
            ));
            return false;
        }
        let removed = self
            .resolved
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key)
            .is_some();
        if removed {
            env::remove_var(key);
        }
        removed
    }

    /// Whether the key is present in the resolved store or the environment.
    pub fn has(&self, key: &str) -> bool {
        if !Self::valid_key(key) {
            return false;
        }
        self.resolved
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(key)
            || env::var(key).is_some()
    }

    /// Deduplicated union of resolved-store and environment keys.
    pub fn keys(&self) -> Vec<String> {
        let mut keys: BTreeSet<String> = self
            .resolved
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect();
        keys.extend(env::snapshot().into_keys());
        keys.into_iter().collect()
    }
}
