//! Merged, environment-synchronized configuration loading.
//!
//! This crate merges configuration values from five sources — built-in
//! defaults, a snapshot of the process environment, a project-local `.env`
//! file, an optional override env file named by `--config`/`-c`, and
//! programmatic overrides — into a single resolved string map, then exposes
//! it through [`LiveConfig`]: a mutable view whose writes and deletes are
//! mirrored into the process environment.
//!
//! Values may be deferred: a [`Candidate`] can be a literal string, a
//! closure producing a string (synchronously or asynchronously), or an
//! already-pending future. All candidates are resolved exactly once during
//! initialization, which runs at most once per process; concurrent callers
//! of [`load_config`] share the same in-flight initialization.

pub mod constants;
mod env;
mod loader;
pub mod logger;
mod value;
mod view;

pub use constants::{KEY_DIR, KEY_ENV, KEY_NAME, KEY_WORKSPACE};
pub use loader::{ConfigError, load_config};
pub use logger::{Logger, TracingLogger};
pub use value::{Candidate, Candidates};
pub use view::LiveConfig;

#[cfg(test)]
pub(crate) mod test_util {
    use std::sync::{Mutex, OnceLock};

    /// Serializes tests that touch process-global state (cwd, env vars).
    pub fn global_test_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }
}
