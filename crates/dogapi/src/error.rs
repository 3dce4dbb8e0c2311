//! The error returned by every breed fetcher.

/// A breed could not be resolved to its sub-breeds.
///
/// Every failure of a lookup is reported with this one kind: unknown breeds,
/// HTTP error statuses, network failures and unreadable responses alike. The
/// message is either the breed name itself or a diagnostic describing what
/// went wrong.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct BreedNotFound {
    message: String,
}

impl BreedNotFound {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The diagnostic message carried by this error.
    pub fn message(&self) -> &str {
        &self.message
    }
}
