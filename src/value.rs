//! Configuration candidate values and their resolution.
//!
//! Responsibilities:
//! - Define [`Candidate`], the tagged variant covering literal, deferred,
//!   and already-pending configuration values.
//! - Resolve a merged candidate mapping into concrete strings.
//!
//! Does NOT handle:
//! - Source collection or precedence (see `loader/sources.rs`).
//! - Post-resolution mutation (see `view.rs`).
//!
//! Invariants:
//! - A candidate is consumed exactly once; resolution is per-key atomic.
//! - A failed deferred/pending computation aborts the whole initialization,
//!   surfacing as one error naming the offending key.

use std::collections::HashMap;
use std::fmt;
use std::future::Future;

use futures::future::BoxFuture;

use crate::loader::ConfigError;

type DeferredFn = Box<dyn FnOnce() -> BoxFuture<'static, anyhow::Result<String>> + Send>;

/// One source's contribution of keys to candidate values, pre-merge.
pub type Candidates = HashMap<String, Candidate>;

/// A configuration value before resolution.
pub enum Candidate {
    /// A plain string, kept as-is.
    Literal(String),
    /// A zero-argument computation invoked once during resolution.
    Deferred(DeferredFn),
    /// An already-pending computation awaited during resolution.
    Pending(BoxFuture<'static, anyhow::Result<String>>),
}

impl Candidate {
    /// A deferred candidate from a synchronous closure.
    pub fn lazy<F>(f: F) -> Self
    where
        F: FnOnce() -> anyhow::Result<String> + Send + 'static,
    {
        Self::Deferred(Box::new(move || Box::pin(async move { f() })))
    }

    /// A deferred candidate from an async closure.
    pub fn deferred<F, Fut>(f: F) -> Self
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = anyhow::Result<String>> + Send + 'static,
    {
        Self::Deferred(Box::new(move || Box::pin(f())))
    }

    /// A candidate from a computation that is already in flight.
    pub fn pending<Fut>(fut: Fut) -> Self
    where
        Fut: Future<Output = anyhow::Result<String>> + Send + 'static,
    {
        Self::Pending(Box::pin(fut))
    }

    /// Consume the candidate, producing its concrete string value.
    pub(crate) async fn resolve(self) -> anyhow::Result<String> {
        match self {
            Self::Literal(value) => Ok(value),
            Self::Deferred(f) => f().await,
            Self::Pending(fut) => fut.await,
        }
    }
}

impl From<&str> for Candidate {
    fn from(value: &str) -> Self {
        Self::Literal(value.to_string())
    }
}

impl From<String> for Candidate {
    fn from(value: String) -> Self {
        Self::Literal(value)
    }
}

impl fmt::Debug for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(value) => f.debug_tuple("Literal").field(value).finish(),
            Self::Deferred(_) => f.write_str("Deferred(..)"),
            Self::Pending(_) => f.write_str("Pending(..)"),
        }
    }
}

/// Resolve every candidate in the merged mapping to a concrete string.
///
/// Keys resolve sequentially; a single failure is fatal for the whole map.
pub(crate) async fn resolve_all(
    candidates: Candidates,
) -> Result<HashMap<String, String>, ConfigError> {
    let mut resolved = HashMap::with_capacity(candidates.len());
    for (key, candidate) in candidates {
        let value = candidate
            .resolve()
            .await
            .map_err(|source| ConfigError::Resolve {
                key: key.clone(),
                source,
            })?;
        resolved.insert(key, value);
    }
    Ok(resolved)
}
