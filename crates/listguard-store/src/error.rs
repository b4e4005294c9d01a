use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    /// The store could not be read or did not contain a record list.
    #[error("{kind} store unavailable ({location}): {reason}")]
    Unavailable {
        kind: &'static str,
        location: String,
        reason: String,
    },
}

impl StoreError {
    pub(crate) fn unavailable(
        kind: &'static str,
        location: impl Into<String>,
        reason: impl ToString,
    ) -> Self {
        StoreError::Unavailable {
            kind,
            location: location.into(),
            reason: reason.to_string(),
        }
    }
}
