//! The `error` module defines the error types used within `subject-observer`.
//!
//! Subscription operations are total in their plain form; these errors are
//! only reported by the `try_` variants and by strict subscription mode.

use thiserror::Error;

/// Result type for application-level operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported by the checked subscription operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubscriptionError {
    /// The observer handle is already registered with the subject.
    #[error("observer is already attached to this subject")]
    DuplicateSubscription,

    /// The observer handle is not registered with the subject.
    #[error("observer is not attached to this subject")]
    NotFound,

    /// A callback tried to change the subject while it was notifying.
    #[error("cannot {operation} while the subject is notifying its observers")]
    ReentrantMutation { operation: &'static str },
}

/// Errors surfaced by the binary.
#[derive(Debug, Error)]
pub enum Error {
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),
}
