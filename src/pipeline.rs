//! Debounced translation pipeline.
//!
//! Keystrokes enqueue [`TranslateJob`]s on an unbounded channel. The worker
//! collapses a burst of jobs into the newest one after a quiet window
//! ([`DEBOUNCE_MS`]), announces [`TranslateUpdate::Started`] so the UI can
//! show its placeholder, then performs the network call on a detached task
//! and reports [`TranslateUpdate::Finished`]. In-flight calls are never
//! cancelled; the monotonically increasing job id lets the main loop drop
//! completions that arrive after a newer request was issued.

use tokio::sync::mpsc;
use tokio::time::{Duration, sleep};

use crate::net::{self, TranslateError};

/// Quiet window after the last keystroke before a job fires.
pub const DEBOUNCE_MS: u64 = 500;

/// One translation request flowing through the pipeline.
#[derive(Clone, Debug)]
pub struct TranslateJob {
    /// Monotonic identifier used to discard stale completions.
    pub id: u64,
    /// Text to translate (already clamped by the input layer).
    pub text: String,
    /// Source language code or `"auto"`.
    pub source: String,
    /// Target language code.
    pub target: String,
    /// Bypass the debounce window (Ctrl+Enter, language change, swap).
    pub immediate: bool,
}

/// Progress report from the worker back to the main loop.
#[derive(Debug)]
pub enum TranslateUpdate {
    /// A job passed the debounce window and its request was dispatched.
    Started {
        /// Identifier of the dispatched job.
        id: u64,
    },
    /// A request completed, successfully or not.
    Finished {
        /// Identifier echoed from the originating job.
        id: u64,
        /// Translated text or the failure to render.
        result: Result<String, TranslateError>,
    },
}

/// What: Collapse a burst of jobs into the newest one.
///
/// Inputs:
/// - `rx`: Job channel to drain while the burst lasts.
/// - `latest`: First job of the burst.
/// - `window`: Quiet window that must elapse with no new job.
///
/// Output:
/// - The last job received before `window` of silence, or the first job
///   flagged `immediate`.
///
/// Details:
/// - Each arrival re-arms the timer, so at most one timer is pending at a
///   time and a burst of any length produces exactly one downstream job.
pub async fn settle_latest(
    rx: &mut mpsc::UnboundedReceiver<TranslateJob>,
    mut latest: TranslateJob,
    window: Duration,
) -> TranslateJob {
    if latest.immediate {
        return latest;
    }
    loop {
        tokio::select! {
            Some(next) = rx.recv() => {
                let urgent = next.immediate;
                latest = next;
                if urgent {
                    return latest;
                }
            }
            () = sleep(window) => {
                return latest;
            }
        }
    }
}

/// What: Spawn the background translation worker.
///
/// Inputs:
/// - `job_rx`: Channel receiver for translation jobs.
/// - `update_tx`: Channel sender for progress updates.
///
/// Details:
/// - Debounces jobs with a [`DEBOUNCE_MS`] window.
/// - Spawns each network call on its own task so a slow response never
///   blocks the next burst; completion order is unordered by design and
///   resolved by the id check in the main loop.
pub fn spawn_translate_worker(
    mut job_rx: mpsc::UnboundedReceiver<TranslateJob>,
    update_tx: mpsc::UnboundedSender<TranslateUpdate>,
) {
    tokio::spawn(async move {
        loop {
            let Some(first) = job_rx.recv().await else {
                break;
            };
            let job = settle_latest(&mut job_rx, first, Duration::from_millis(DEBOUNCE_MS)).await;
            let _ = update_tx.send(TranslateUpdate::Started { id: job.id });

            let tx = update_tx.clone();
            tokio::spawn(async move {
                let result = net::translate(&job.text, &job.source, &job.target).await;
                if let Err(e) = &result {
                    tracing::warn!(id = job.id, error = %e, "translation failed");
                }
                let _ = tx.send(TranslateUpdate::Finished { id: job.id, result });
            });
        }
    });
}
