//! Validated field types for submitted support messages.
//!
//! Submission fields arrive as raw form text; these newtypes own the
//! validation rules so the rest of the crate only ever sees well-formed
//! values. HTTP-facing callers are expected to map
//! [`SupportDomainError`] values onto their own form feedback.

use super::SupportDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum length for a submitter name, matching the `VARCHAR(200)` column.
const MAX_NAME_LENGTH: usize = 200;

/// Maximum length for an email address, matching the `VARCHAR(320)` column.
const MAX_EMAIL_LENGTH: usize = 320;

/// Minimum message body length in characters.
const MIN_BODY_LENGTH: usize = 10;

/// Maximum message body length in characters.
const MAX_BODY_LENGTH: usize = 10_000;

/// Validated, trimmed submitter name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubmitterName(String);

impl SubmitterName {
    /// Creates a validated submitter name.
    ///
    /// The input is trimmed; case is preserved.
    ///
    /// # Errors
    ///
    /// Returns [`SupportDomainError::EmptyName`] when the value is empty
    /// after trimming, or [`SupportDomainError::NameTooLong`] when it
    /// exceeds 200 characters.
    pub fn new(value: impl Into<String>) -> Result<Self, SupportDomainError> {
        let trimmed = value.into().trim().to_owned();

        if trimmed.is_empty() {
            return Err(SupportDomainError::EmptyName);
        }

        if trimmed.chars().count() > MAX_NAME_LENGTH {
            return Err(SupportDomainError::NameTooLong);
        }

        Ok(Self(trimmed))
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for SubmitterName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for SubmitterName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Validated, trimmed email address.
///
/// Validation checks shape only (`local@domain.tld`), not deliverability.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Creates a validated email address.
    ///
    /// # Errors
    ///
    /// Returns [`SupportDomainError::EmptyEmail`] when the value is empty
    /// after trimming, [`SupportDomainError::EmailTooLong`] when it exceeds
    /// 320 characters, or [`SupportDomainError::InvalidEmail`] when it is
    /// not email-shaped.
    pub fn new(value: impl Into<String>) -> Result<Self, SupportDomainError> {
        let trimmed = value.into().trim().to_owned();

        if trimmed.is_empty() {
            return Err(SupportDomainError::EmptyEmail);
        }

        if trimmed.chars().count() > MAX_EMAIL_LENGTH {
            return Err(SupportDomainError::EmailTooLong);
        }

        if !is_email_shaped(&trimmed) {
            return Err(SupportDomainError::InvalidEmail(trimmed));
        }

        Ok(Self(trimmed))
    }

    /// Returns the email address as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Checks that a value has the shape `local@domain` where the domain
/// contains an interior dot and nothing contains whitespace or a second `@`.
fn is_email_shaped(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.contains('@') {
        return false;
    }

    // The dot must have at least one character on each side.
    domain
        .char_indices()
        .any(|(index, c)| c == '.' && index >= 1 && index + 1 < domain.len())
}

/// Validated, trimmed support message body.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageBody(String);

impl MessageBody {
    /// Creates a validated message body.
    ///
    /// # Errors
    ///
    /// Returns [`SupportDomainError::EmptyMessage`] when the value is empty
    /// after trimming, [`SupportDomainError::MessageTooShort`] when the
    /// trimmed value is shorter than 10 characters, or
    /// [`SupportDomainError::MessageTooLong`] when it exceeds 10 000
    /// characters.
    pub fn new(value: impl Into<String>) -> Result<Self, SupportDomainError> {
        let trimmed = value.into().trim().to_owned();

        if trimmed.is_empty() {
            return Err(SupportDomainError::EmptyMessage);
        }

        let length = trimmed.chars().count();

        if length < MIN_BODY_LENGTH {
            return Err(SupportDomainError::MessageTooShort {
                minimum: MIN_BODY_LENGTH,
                actual: length,
            });
        }

        if length > MAX_BODY_LENGTH {
            return Err(SupportDomainError::MessageTooLong);
        }

        Ok(Self(trimmed))
    }

    /// Returns the message body as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the first `max_chars` characters of the body.
    ///
    /// Used by reply generators that quote the submission back to the
    /// submitter. Truncation is by character, never mid code point.
    #[must_use]
    pub fn excerpt(&self, max_chars: usize) -> String {
        self.0.chars().take(max_chars).collect()
    }
}

impl AsRef<str> for MessageBody {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for MessageBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
