//! Error types for configuration loading.
//!
//! Responsibilities:
//! - Define error variants for all configuration loading failures.
//!
//! Invariants:
//! - All variants include context for debugging (key names, paths).
//! - Env-file errors NEVER include raw line contents, to prevent secret
//!   leakage; parse failures carry only position information.

use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A deferred or pending candidate failed to produce a string.
    ///
    /// This indicates a programming error in a source, not an environmental
    /// condition, and aborts the whole initialization sequence.
    #[error("failed to resolve configuration value for key '{key}': {source}")]
    Resolve {
        key: String,
        #[source]
        source: anyhow::Error,
    },

    /// An env file exists but has invalid syntax.
    ///
    /// SAFETY: only the byte index of the failure is reported, NOT the
    /// offending line content.
    #[error("failed to parse env file {path} at position {position}")]
    EnvFileParse { path: PathBuf, position: usize },

    /// An env file exists but cannot be read.
    #[error("failed to read env file {path}: {kind}")]
    EnvFileIo { path: PathBuf, kind: ErrorKind },

    /// Unknown env-file error (future variants from the dotenvy crate).
    #[error("failed to load env file {path}")]
    EnvFileUnknown { path: PathBuf },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The one-shot initialization already failed in an earlier call.
    ///
    /// Repeated calls share the first sequence's outcome; the original
    /// failure is handed back instead of re-running the merge.
    #[error(transparent)]
    Initialization(#[from] Arc<ConfigError>),
}
