//! Error types for support domain validation.

use thiserror::Error;

/// Errors returned while constructing support domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SupportDomainError {
    /// The submitter name is empty after trimming.
    #[error("submitter name must not be empty")]
    EmptyName,

    /// The submitter name exceeds the 200-character storage limit.
    #[error("submitter name exceeds 200 character limit")]
    NameTooLong,

    /// The email address is empty after trimming.
    #[error("email address must not be empty")]
    EmptyEmail,

    /// The email address is not email-shaped.
    #[error("'{0}' is not a valid email address")]
    InvalidEmail(String),

    /// The email address exceeds the 320-character storage limit.
    #[error("email address exceeds 320 character limit")]
    EmailTooLong,

    /// The message body is empty after trimming.
    #[error("message body must not be empty")]
    EmptyMessage,

    /// The message body is shorter than the required minimum.
    #[error("message body must be at least {minimum} characters (got {actual})")]
    MessageTooShort {
        /// Required minimum length in characters.
        minimum: usize,
        /// Actual trimmed length in characters.
        actual: usize,
    },

    /// The message body exceeds the 10 000-character storage limit.
    #[error("message body exceeds 10000 character limit")]
    MessageTooLong,
}
