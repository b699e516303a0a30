// ============================================================================
// Fatal Termination Hook
// Unconditional process termination with a pluggable diagnostic handler
// ============================================================================
//
// Any component of the host system reports an unrecoverable condition by
// calling `stop_all(context, message)`. The call never returns. What happens
// to the two strings before the process ends is the installed handler's
// business; the default writes both, verbatim, to stderr.

use parking_lot::RwLock;
use std::sync::Arc;

/// Handler invoked with the diagnostic payload before the process ends.
///
/// Implementations must surface both strings verbatim (external tooling
/// parses them), and must be callable from any thread. Cleanup beyond that
/// (flushing checkpoints, tearing down communicators) is up to the host.
pub trait FatalHandler: Send + Sync {
    /// Receive the diagnostic payload of a fatal condition.
    fn on_fatal(&self, context: &str, message: &str);
}

/// Default handler: writes both strings to stderr.
pub struct StderrFatalHandler;

impl FatalHandler for StderrFatalHandler {
    fn on_fatal(&self, context: &str, message: &str) {
        eprintln!("FATAL ERROR in {context}: {message}");
    }
}

/// Handler that also emits a structured log record.
pub struct LoggingFatalHandler;

impl FatalHandler for LoggingFatalHandler {
    fn on_fatal(&self, context: &str, message: &str) {
        tracing::error!(context, "fatal error: {message}");
        eprintln!("FATAL ERROR in {context}: {message}");
    }
}

// Installed handler; `None` falls back to StderrFatalHandler.
static HANDLER: RwLock<Option<Arc<dyn FatalHandler>>> = RwLock::new(None);

/// Install a process-wide fatal handler, replacing any previous one.
pub fn set_fatal_handler(handler: Arc<dyn FatalHandler>) {
    *HANDLER.write() = Some(handler);
}

/// Restore the default stderr handler.
pub fn reset_fatal_handler() {
    *HANDLER.write() = None;
}

/// Install a stderr `tracing` subscriber so log records emitted on the
/// fatal path are visible. No-op if a subscriber is already set.
#[cfg(feature = "logging")]
pub fn init_diagnostics() {
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .try_init();
}

fn dispatch(context: &str, message: &str) {
    let handler = HANDLER.read().clone();
    match handler {
        Some(handler) => handler.on_fatal(context, message),
        None => StderrFatalHandler.on_fatal(context, message),
    }
}

/// Report an unrecoverable failure and end the process.
///
/// The two strings are conventionally a module/context identifier and a
/// human-readable description. Both reach the error stream (or the installed
/// [`FatalHandler`]) before termination; neither is transformed.
///
/// This function never returns. It is safe to call from any thread,
/// including concurrently; the process ends either way.
///
/// # Example
/// ```no_run
/// use qmc_numeric::fatal::stop_all;
///
/// stop_all("integrals", "integral dump is truncated");
/// ```
pub fn stop_all(context: &str, message: &str) -> ! {
    dispatch(context, message);
    std::process::abort();
}

// ============================================================================
// Tests
// ============================================================================
