use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AugmentError {
    #[error("augmentation request failed: {0}")]
    Transport(String),

    #[error("augmentation service returned HTTP {0}")]
    Status(u16),

    #[error("augmentation response is not a verdict: {0}")]
    Malformed(String),

    #[error("augmentation timed out after {} ms", .0.as_millis())]
    Timeout(Duration),

    #[error("augmentation cancelled")]
    Cancelled,

    #[error("augmentation worker exited without a result")]
    WorkerLost,
}

impl AugmentError {
    /// Stable, short reason recorded in the report.
    pub fn reason(&self) -> &'static str {
        match self {
            AugmentError::Transport(_) => "transport_error",
            AugmentError::Status(_) => "http_status",
            AugmentError::Malformed(_) => "malformed_response",
            AugmentError::Timeout(_) => "timeout",
            AugmentError::Cancelled => "cancelled",
            AugmentError::WorkerLost => "worker_lost",
        }
    }
}
