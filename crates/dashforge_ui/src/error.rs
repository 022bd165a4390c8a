use thiserror::Error;

/// Failure reported by a [`crate::Document`] backend.
///
/// These are passed through to the caller unchanged; nothing in this crate
/// retries or swallows them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomError {
    #[error("document unavailable: {0}")]
    Unavailable(String),

    #[error("{operation} rejected: {message}")]
    Rejected {
        operation: &'static str,
        message: String,
    },
}

#[derive(Debug, Error)]
pub enum UiError {
    #[error("dashboard UI plugin is not installed")]
    NotInstalled,

    #[error(transparent)]
    Dom(#[from] DomError),
}
