//! Five-source precedence merge and the one-shot entry point.
//!
//! Responsibilities:
//! - Collect candidate mappings from all sources and merge them in
//!   precedence order.
//! - Resolve the merged mapping and construct the [`LiveConfig`].
//! - Guard the whole sequence behind a process-wide one-shot cell.
//!
//! Does NOT handle:
//! - Parsing env files (see `env_file.rs`) or deriving defaults
//!   (see `defaults.rs`).
//!
//! Invariants:
//! - The merge is strictly sequential and positional; a later source
//!   silently overwrites an earlier one on key collision.
//! - File-level problems (missing `--config` file, malformed env file) are
//!   warnings, never initialization failures.
//! - Either a fully-constructed view or a single error escapes; no partial
//!   view is ever observable.

use std::path::PathBuf;
use std::sync::{Arc, Mutex, PoisonError};

use tokio::sync::OnceCell;

use crate::constants::{
    CONFIG_FLAG, CONFIG_FLAG_ALIAS, ENV_FILE_NAME, KEY_WORKSPACE, WORKSPACE_FLAG,
    WORKSPACE_FLAG_ALIAS,
};
use crate::logger::{Logger, sink};
use crate::value::{self, Candidate, Candidates};
use crate::view::LiveConfig;
use crate::{env, logger};

use super::error::ConfigError;
use super::{args, defaults, env_file};

static VIEW: OnceCell<Result<LiveConfig, Arc<ConfigError>>> = OnceCell::const_new();

/// Load the merged configuration, initializing it on first call.
///
/// Exactly one initialization sequence runs per process; concurrent and
/// repeated callers share its outcome, success or failure. Once ready,
/// later calls apply their `overrides` through the live write path instead
/// of re-running the merge (literal values only; deferred overrides are
/// rejected with a warning). An override mapping supplied by a caller that
/// lost the initialization race is applied the same way, best-effort, once
/// the view is ready.
///
/// A custom `logger` replaces the default tracing-backed sink for the
/// remainder of the process before any other work happens.
///
/// # Errors
///
/// Fails only when a deferred or pending candidate fails to resolve, or the
/// current working directory is unreadable. The failure is memoized: every
/// later call gets the original error back without a second merge.
pub async fn load_config(
    overrides: Option<Candidates>,
    custom_logger: Option<Arc<dyn Logger>>,
) -> Result<&'static LiveConfig, ConfigError> {
    if let Some(custom_logger) = custom_logger {
        logger::install(custom_logger);
    }

    if let Some(outcome) = VIEW.get() {
        return share_outcome(outcome, overrides);
    }

    // The cell invokes at most one closure; a concurrent loser's overrides
    // stay in the mutex and are applied through the live write path below.
    let pending = Mutex::new(overrides);
    let outcome = VIEW
        .get_or_init(|| async {
            let overrides = pending
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .take();
            initialize(overrides).await.map_err(Arc::new)
        })
        .await;

    let leftover = pending
        .into_inner()
        .unwrap_or_else(PoisonError::into_inner);
    share_outcome(outcome, leftover)
}

/// Hand back the memoized initialization outcome, applying any late
/// overrides when it succeeded.
fn share_outcome(
    outcome: &'static Result<LiveConfig, Arc<ConfigError>>,
    overrides: Option<Candidates>,
) -> Result<&'static LiveConfig, ConfigError> {
    match outcome {
        Ok(view) => {
            if let Some(overrides) = overrides {
                apply_live_overrides(view, overrides);
            }
            Ok(view)
        }
        Err(err) => Err(ConfigError::Initialization(Arc::clone(err))),
    }
}

/// Apply overrides to an already-initialized view.
///
/// Only literal values can flow through the write path; this mirrors the
/// write operation's string-only contract.
fn apply_live_overrides(view: &LiveConfig, overrides: Candidates) {
    for (key, candidate) in overrides {
        match candidate {
            Candidate::Literal(value) => {
                if !view.set(&key, &value) {
                    sink().warn(&format!("override for key {key:?} was rejected"));
                }
            }
            _ => sink().warn(&format!(
                "deferred override for key {key:?} ignored after initialization"
            )),
        }
    }
}

/// Run the full collect/resolve sequence against the real process argv.
pub(crate) async fn initialize(overrides: Option<Candidates>) -> Result<LiveConfig, ConfigError> {
    let argv: Vec<String> = std::env::args().skip(1).collect();
    initialize_with_args(overrides, &argv).await
}

/// Collect, merge, and resolve every source, then wrap the result.
pub(crate) async fn initialize_with_args(
    overrides: Option<Candidates>,
    argv: &[String],
) -> Result<LiveConfig, ConfigError> {
    let mut merged = defaults::defaults();
    merge(&mut merged, env_snapshot());

    if env_file::dotenv_disabled() {
        sink().debug("project env file loading is disabled");
    } else {
        let path = std::env::current_dir()?.join(ENV_FILE_NAME);
        match env_file::load_env_file(&path) {
            Ok(entries) => merge(&mut merged, entries),
            Err(err) => sink().warn(&format!("skipping project env file: {err}")),
        }
    }

    if let Some(path) = args::flag_value(argv, CONFIG_FLAG, CONFIG_FLAG_ALIAS) {
        let path = PathBuf::from(path);
        if tokio::fs::try_exists(&path).await.unwrap_or(false) {
            match env_file::load_env_file(&path) {
                Ok(entries) => merge(&mut merged, entries),
                Err(err) => sink().warn(&format!("skipping specified config file: {err}")),
            }
        } else {
            sink().warn(&format!(
                "specified config file {} does not exist, skipping",
                path.display()
            ));
        }
    }

    if let Some(overrides) = overrides {
        merge(&mut merged, overrides);
    }

    let mut resolved = value::resolve_all(merged).await?;

    // The workspace flag wins over every source; otherwise the cwd is the
    // fallback for a still-unset workspace key.
    if let Some(workspace) = args::flag_value(argv, WORKSPACE_FLAG, WORKSPACE_FLAG_ALIAS) {
        resolved.insert(KEY_WORKSPACE.to_string(), workspace);
    } else if !resolved.contains_key(KEY_WORKSPACE) {
        let cwd = std::env::current_dir()?;
        resolved.insert(KEY_WORKSPACE.to_string(), cwd.display().to_string());
    }

    Ok(LiveConfig::new(resolved))
}

/// Incoming overwrites base on key collision; pure, infallible.
fn merge(base: &mut Candidates, incoming: Candidates) {
    base.extend(incoming);
}

fn env_snapshot() -> Candidates {
    env::snapshot()
        .into_iter()
        .map(|(key, value)| (key, Candidate::Literal(value)))
        .collect()
}
