//! Support message aggregate root.

use super::{EmailAddress, MessageBody, MessageId, SubmitterName};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A stored support message.
///
/// Messages are created once on submission and never mutated afterwards.
/// The serialised form matches the store's wire contract
/// (`id`, `name`, `email`, `message`, `ai_response`, `created_at`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportMessage {
    id: MessageId,
    name: SubmitterName,
    email: EmailAddress,
    #[serde(rename = "message")]
    body: MessageBody,
    #[serde(rename = "ai_response")]
    reply: Option<String>,
    created_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted support message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedMessageData {
    /// Persisted message identifier.
    pub id: MessageId,
    /// Persisted submitter name.
    pub name: SubmitterName,
    /// Persisted email address.
    pub email: EmailAddress,
    /// Persisted message body.
    pub body: MessageBody,
    /// Persisted automated reply, when one was generated.
    pub reply: Option<String>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl SupportMessage {
    /// Creates a new support message stamped with the current clock time.
    #[must_use]
    pub fn new(
        name: SubmitterName,
        email: EmailAddress,
        body: MessageBody,
        reply: Option<String>,
        clock: &impl Clock,
    ) -> Self {
        Self {
            id: MessageId::new(),
            name,
            email,
            body,
            reply,
            created_at: clock.utc(),
        }
    }

    /// Reconstructs a message from persisted storage without re-stamping.
    #[must_use]
    pub fn from_persisted(data: PersistedMessageData) -> Self {
        Self {
            id: data.id,
            name: data.name,
            email: data.email,
            body: data.body,
            reply: data.reply,
            created_at: data.created_at,
        }
    }

    /// Returns the message identifier.
    #[must_use]
    pub const fn id(&self) -> MessageId {
        self.id
    }

    /// Returns the submitter name.
    #[must_use]
    pub const fn name(&self) -> &SubmitterName {
        &self.name
    }

    /// Returns the submitter email address.
    #[must_use]
    pub const fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Returns the message body.
    #[must_use]
    pub const fn body(&self) -> &MessageBody {
        &self.body
    }

    /// Returns the automated reply, when one was generated.
    #[must_use]
    pub fn reply(&self) -> Option<&str> {
        self.reply.as_deref()
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
