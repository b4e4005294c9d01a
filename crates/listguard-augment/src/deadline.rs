use crate::{AugmentError, Augmenter, CancelToken};
use listguard_types::{AiRequest, AiVerdict};
use std::sync::Arc;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};
use tracing::debug;

/// How often a waiting caller re-checks its cancel token.
const POLL_INTERVAL: Duration = Duration::from_millis(25);

/// Run `augmenter` on a worker thread and wait at most `timeout` for its verdict.
///
/// Returns early with [`AugmentError::Cancelled`] once `cancel` is set. A worker that
/// outlives the deadline is left to finish on its own; its result is dropped.
pub fn run_with_deadline(
    augmenter: Arc<dyn Augmenter>,
    request: AiRequest,
    timeout: Duration,
    cancel: &CancelToken,
) -> Result<AiVerdict, AugmentError> {
    let (tx, rx) = mpsc::channel();
    let name = augmenter.name().to_string();
    thread::Builder::new()
        .name("listguard-augment".to_string())
        .spawn(move || {
            // The receiver may be gone after a timeout.
            let _ = tx.send(augmenter.analyze(&request));
        })
        .map_err(|e| AugmentError::Transport(format!("cannot start worker: {e}")))?;

    let deadline = Instant::now() + timeout;
    loop {
        if cancel.is_cancelled() {
            debug!(augmenter = %name, "augmentation cancelled by caller");
            return Err(AugmentError::Cancelled);
        }
        let now = Instant::now();
        if now >= deadline {
            return Err(AugmentError::Timeout(timeout));
        }
        match rx.recv_timeout((deadline - now).min(POLL_INTERVAL)) {
            Ok(result) => return result,
            Err(RecvTimeoutError::Timeout) => continue,
            Err(RecvTimeoutError::Disconnected) => return Err(AugmentError::WorkerLost),
        }
    }
}
