//! Diesel row models and row ↔ domain conversion for support messages.

use super::schema::support_messages;
use crate::support::domain::{
    EmailAddress, MessageBody, MessageId, PersistedMessageData, SubmitterName, SupportMessage,
};
use crate::support::ports::{MessageStoreError, MessageStoreResult};
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for support message records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = support_messages)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct SupportMessageRow {
    /// Message identifier.
    pub id: uuid::Uuid,
    /// Submitter name.
    pub name: String,
    /// Submitter email address.
    pub email: String,
    /// Message body.
    pub message: String,
    /// Automated reply, when one was generated.
    pub ai_response: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Insert model for support message records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = support_messages)]
pub struct NewSupportMessageRow {
    /// Message identifier.
    pub id: uuid::Uuid,
    /// Submitter name.
    pub name: String,
    /// Submitter email address.
    pub email: String,
    /// Message body.
    pub message: String,
    /// Automated reply, when one was generated.
    pub ai_response: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Builds an insert row from a domain message.
pub fn to_new_row(message: &SupportMessage) -> NewSupportMessageRow {
    NewSupportMessageRow {
        id: message.id().into_inner(),
        name: message.name().as_str().to_owned(),
        email: message.email().as_str().to_owned(),
        message: message.body().as_str().to_owned(),
        ai_response: message.reply().map(ToOwned::to_owned),
        created_at: message.created_at(),
    }
}

/// Reconstructs a domain message from a stored row.
///
/// Re-validates persisted fields through the domain constructors; rows that
/// no longer satisfy the domain rules surface as
/// [`MessageStoreError::InvalidPersistedData`].
pub fn row_to_message(row: SupportMessageRow) -> MessageStoreResult<SupportMessage> {
    let SupportMessageRow {
        id,
        name,
        email,
        message,
        ai_response,
        created_at,
    } = row;

    let parsed_name =
        SubmitterName::new(name).map_err(MessageStoreError::invalid_persisted_data)?;
    let parsed_email =
        EmailAddress::new(email).map_err(MessageStoreError::invalid_persisted_data)?;
    let parsed_body =
        MessageBody::new(message).map_err(MessageStoreError::invalid_persisted_data)?;

    let data = PersistedMessageData {
        id: MessageId::from_uuid(id),
        name: parsed_name,
        email: parsed_email,
        body: parsed_body,
        reply: ai_response,
        created_at,
    };
    Ok(SupportMessage::from_persisted(data))
}
