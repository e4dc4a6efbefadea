//! Repository port for support-message persistence and paginated retrieval.

use crate::support::domain::{MessageId, SupportMessage};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for message store operations.
pub type MessageStoreResult<T> = Result<T, MessageStoreError>;

/// Support-message persistence contract.
///
/// The store never reports a total message count; callers probe for further
/// pages by requesting one record beyond the page size.
#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Stores a new support message.
    ///
    /// # Errors
    ///
    /// Returns [`MessageStoreError::DuplicateMessage`] when the message ID
    /// already exists.
    async fn create(&self, message: &SupportMessage) -> MessageStoreResult<()>;

    /// Returns stored messages ordered newest first, skipping `skip`
    /// records and returning at most `limit`.
    async fn list(&self, skip: u64, limit: u64) -> MessageStoreResult<Vec<SupportMessage>>;

    /// Finds a message by identifier.
    ///
    /// Returns `None` when the message does not exist.
    async fn find_by_id(&self, id: MessageId) -> MessageStoreResult<Option<SupportMessage>>;
}

/// Errors returned by message repository implementations.
#[derive(Debug, Clone, Error)]
pub enum MessageStoreError {
    /// A message with the same identifier already exists.
    #[error("duplicate message identifier: {0}")]
    DuplicateMessage(MessageId),

    /// Persisted data could not be reconstructed into domain types.
    #[error("invalid persisted data: {0}")]
    InvalidPersistedData(Arc<dyn std::error::Error + Send + Sync>),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl MessageStoreError {
    /// Wraps a data-quality or deserialization error from persisted rows.
    pub fn invalid_persisted_data(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::InvalidPersistedData(Arc::new(err))
    }

    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
