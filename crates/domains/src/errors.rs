//! # DomainError
//!
//! The failures a board operation can report. The display strings of the
//! first three variants are exactly what clients receive as response bodies.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The thread id does not resolve to a stored thread.
    #[error("thread not found")]
    ThreadNotFound,

    /// The thread exists but holds no reply with the given id.
    #[error("reply not found")]
    ReplyNotFound,

    /// The supplied delete password differs from the stored one.
    #[error("incorrect password")]
    IncorrectPassword,

    /// Infrastructure failure (e.g., DB down, serialization of a document)
    #[error("storage error: {0}")]
    Storage(String),
}

impl DomainError {
    /// True for the outcomes that are answered to the client as plain text
    /// rather than treated as a server failure.
    pub fn is_client_facing(&self) -> bool {
        !matches!(self, DomainError::Storage(_))
    }
}

/// A specialized Result type for board logic.
pub type Result<T> = std::result::Result<T, DomainError>;
