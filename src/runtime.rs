use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Once;

use log::warn;

use crate::error::Result;

static TLS_WARNINGS_SUPPRESSED: AtomicBool = AtomicBool::new(false);
static TLS_WARNING_EMITTED: Once = Once::new();

/// Silence the warning emitted when a fetch runs with certificate
/// verification disabled.
///
/// Call this once from the process entry point before issuing fetches.
/// Idempotent; later calls are no-ops.
pub fn suppress_tls_warnings() {
    TLS_WARNINGS_SUPPRESSED.store(true, Ordering::Relaxed);
}

/// Warns at most once per process that certificate verification is off.
pub(crate) fn warn_tls_verification_disabled(url: &str) {
    if TLS_WARNINGS_SUPPRESSED.load(Ordering::Relaxed) {
        return;
    }
    TLS_WARNING_EMITTED.call_once(|| {
        warn!(
            "certificate verification is disabled for outbound fetches (first url: {})",
            url
        );
    });
}

/// Run a blocking closure on the shared worker pool and await its result.
///
/// The awaiting task suspends without stalling the async scheduler. Errors
/// returned by the closure propagate unchanged; a panicked or cancelled
/// worker surfaces as [`crate::Error::Worker`]. No bound on concurrent
/// outstanding calls is enforced here, and cancelling the awaiting task
/// does not stop a worker that is already running.
pub async fn run_blocking<F, T>(f: F) -> Result<T>
where
    F: FnOnce() -> Result<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f).await?
}
