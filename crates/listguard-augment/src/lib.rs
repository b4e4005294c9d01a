//! AI augmentation adapter.
//!
//! The engine never calls the model directly: the app layer asks an [`Augmenter`]
//! for a verdict through [`run_with_deadline`], which bounds the call by a timeout
//! and a [`CancelToken`]. Every failure comes back as an [`AugmentError`] so the
//! caller can degrade to rule and policy results.

#![forbid(unsafe_code)]

mod cancel;
mod deadline;
mod error;
mod http;

pub use cancel::CancelToken;
pub use deadline::run_with_deadline;
pub use error::AugmentError;
pub use http::{HttpAugmenter, parse_verdict};

use listguard_types::{AiRequest, AiVerdict};

/// Source of AI verdicts.
pub trait Augmenter: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &str;

    fn analyze(&self, request: &AiRequest) -> Result<AiVerdict, AugmentError>;
}
