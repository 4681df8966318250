//! Typed errors raised by the database proxy.

use thiserror::Error;

/// Error returned by [`DatabaseProxy`](super::DatabaseProxy) operations.
#[derive(Debug, Error)]
pub enum ProxyError {
    /// The exchange completed, but the service answered with a
    /// non-success status.
    #[error("Request failed: {status}")]
    RequestFailed {
        /// HTTP status code reported by the service.
        status: u16,
    },

    /// The exchange could not be completed; the underlying fault is
    /// passed through unchanged.
    #[error(transparent)]
    Transport(#[from] anyhow::Error),
}

impl ProxyError {
    /// HTTP status code for a completed-but-failed exchange, `None` for
    /// transport faults.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::RequestFailed { status } => Some(*status),
            Self::Transport(_) => None,
        }
    }
}
