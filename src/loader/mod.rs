//! Configuration source collection and initialization.
//!
//! Responsibilities:
//! - Gather candidate mappings from all five sources in precedence order.
//! - Drive the one-shot initialization sequence behind [`load_config`].
//!
//! Does NOT handle:
//! - Candidate resolution itself (see `value.rs`).
//! - Post-initialization reads and writes (see `view.rs`).
//!
//! Invariants:
//! - Precedence, lowest to highest: defaults, process environment snapshot,
//!   project `.env`, `--config` file, programmatic overrides.
//! - At most one initialization sequence runs per process.

mod args;
mod defaults;
mod env_file;
mod error;
mod sources;

#[cfg(test)]
mod tests;

pub use error::ConfigError;
pub use sources::load_config;
