//! Env-file loading and filtering.
//!
//! Responsibilities:
//! - Parse a dotenv-style file into a candidate mapping via `dotenvy`,
//!   without touching the process environment.
//! - Drop entries whose value is empty or whitespace-only (absent, not
//!   "set to empty").
//! - Provide the `ENVMERGE_DISABLE_DOTENV` gate for tests and CI.
//!
//! Does NOT handle:
//! - Deciding which file paths to load (see `sources.rs`).
//!
//! Invariants:
//! - A missing file yields an empty mapping, not an error.
//! - Errors never include raw line contents, to prevent secret leakage.

use std::path::Path;

use crate::constants::DISABLE_DOTENV_VAR;
use crate::env;
use crate::value::{Candidate, Candidates};

use super::error::ConfigError;

/// Whether project `.env` loading is disabled via environment variable.
pub(crate) fn dotenv_disabled() -> bool {
    matches!(
        env::var(DISABLE_DOTENV_VAR).as_deref(),
        Some("true") | Some("1")
    )
}

/// Check if a dotenv error indicates the file was not found.
fn is_not_found(err: &dotenvy::Error) -> bool {
    matches!(
        err,
        dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
    )
}

fn map_error(err: dotenvy::Error, path: &Path) -> ConfigError {
    match err {
        dotenvy::Error::LineParse(_, position) => ConfigError::EnvFileParse {
            path: path.to_path_buf(),
            position,
        },
        dotenvy::Error::Io(io_err) => ConfigError::EnvFileIo {
            path: path.to_path_buf(),
            kind: io_err.kind(),
        },
        _ => ConfigError::EnvFileUnknown {
            path: path.to_path_buf(),
        },
    }
}

/// Load one env file into a candidate mapping.
///
/// A missing file produces an empty mapping. Entries with empty or
/// whitespace-only values are dropped. A malformed file is an error; the
/// caller logs it and continues with the sources merged so far.
pub(crate) fn load_env_file(path: &Path) -> Result<Candidates, ConfigError> {
    let iter = match dotenvy::from_path_iter(path) {
        Ok(iter) => iter,
        Err(err) if is_not_found(&err) => return Ok(Candidates::new()),
        Err(err) => return Err(map_error(err, path)),
    };

    let mut entries = Candidates::new();
    for item in iter {
        let (key, value) = item.map_err(|err| map_error(err, path))?;
        if value.trim().is_empty() {
            continue;
        }
        entries.insert(key, Candidate::Literal(value));
    }
    Ok(entries)
}
