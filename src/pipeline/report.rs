// src/pipeline/report.rs

//! Pipeline event reporting.
//!
//! The driver emits progress through an injected observer rather than a
//! process-wide logger, so tests can assert on emitted events
//! deterministically.

/// Observer for pipeline events.
pub trait Reporter: Send + Sync {
    /// Report a progress event.
    fn info(&self, message: &str);

    /// Report a failure event.
    fn error(&self, message: &str);
}

/// Reporter that forwards events to the `log` facade.
#[derive(Debug, Default)]
pub struct LogReporter;

impl Reporter for LogReporter {
    fn info(&self, message: &str) {
        log::info!("{message}");
    }

    fn error(&self, message: &str) {
        log::error!("{message}");
    }
}
