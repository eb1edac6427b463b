//! Pluggable diagnostic sink.
//!
//! Responsibilities:
//! - Define the [`Logger`] capability set (log/info/warn/error/debug).
//! - Provide the default sink, which forwards to `tracing` macros.
//! - Hold the process-wide active sink and allow replacing it.
//!
//! Does NOT handle:
//! - Subscriber/exporter setup (left to the host application).
//!
//! Invariants:
//! - The sink's absence or replacement never changes control flow, only
//!   diagnostics.
//! - Replacement takes effect for all subsequent logging process-wide,
//!   including inside an initialization already in flight.

use std::sync::{Arc, OnceLock, PoisonError, RwLock};

/// Diagnostic sink capability set.
///
/// All five methods take an already-formatted message; the trait makes the
/// capability set statically complete, so a partial sink cannot be supplied.
pub trait Logger: Send + Sync {
    fn log(&self, message: &str);
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    fn debug(&self, message: &str);
}

/// Default sink forwarding to `tracing`.
///
/// `log` is treated as plain informational output.
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn log(&self, message: &str) {
        tracing::info!("{message}");
    }

    fn info(&self, message: &str) {
        tracing::info!("{message}");
    }

    fn warn(&self, message: &str) {
        tracing::warn!("{message}");
    }

    fn error(&self, message: &str) {
        tracing::error!("{message}");
    }

    fn debug(&self, message: &str) {
        tracing::debug!("{message}");
    }
}

static SINK: OnceLock<RwLock<Arc<dyn Logger>>> = OnceLock::new();

fn cell() -> &'static RwLock<Arc<dyn Logger>> {
    SINK.get_or_init(|| RwLock::new(Arc::new(TracingLogger)))
}

/// Returns the active sink.
pub(crate) fn sink() -> Arc<dyn Logger> {
    cell()
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// Replaces the active sink for the remainder of the process.
pub fn install(logger: Arc<dyn Logger>) {
    *cell().write().unwrap_or_else(PoisonError::into_inner) = logger;
}
