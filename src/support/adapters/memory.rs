//! In-memory message store.
//!
//! Stands in for a real persistence layer in tests and demos; implements
//! the same [`MessageRepository`] contract as the `PostgreSQL` adapter so
//! either can sit behind the submission service.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::support::{
    domain::{MessageId, SupportMessage},
    ports::{MessageRepository, MessageStoreError, MessageStoreResult},
};

/// Thread-safe in-memory message repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMessageStore {
    state: Arc<RwLock<Vec<SupportMessage>>>,
}

impl InMemoryMessageStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MessageRepository for InMemoryMessageStore {
    async fn create(&self, message: &SupportMessage) -> MessageStoreResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|err| MessageStoreError::persistence(std::io::Error::other(err.to_string())))?;

        if state.iter().any(|stored| stored.id() == message.id()) {
            return Err(MessageStoreError::DuplicateMessage(message.id()));
        }

        state.push(message.clone());
        Ok(())
    }

    async fn list(&self, skip: u64, limit: u64) -> MessageStoreResult<Vec<SupportMessage>> {
        let state = self
            .state
            .read()
            .map_err(|err| MessageStoreError::persistence(std::io::Error::other(err.to_string())))?;

        // Reverse insertion order first so the stable sort keeps the most
        // recently stored message ahead of others with an equal timestamp.
        let mut messages: Vec<SupportMessage> = state.iter().rev().cloned().collect();
        messages.sort_by(|a, b| b.created_at().cmp(&a.created_at()));

        let skip_count = usize::try_from(skip).unwrap_or(usize::MAX);
        let take_count = usize::try_from(limit).unwrap_or(usize::MAX);
        Ok(messages
            .into_iter()
            .skip(skip_count)
            .take(take_count)
            .collect())
    }

    async fn find_by_id(&self, id: MessageId) -> MessageStoreResult<Option<SupportMessage>> {
        let state = self
            .state
            .read()
            .map_err(|err| MessageStoreError::persistence(std::io::Error::other(err.to_string())))?;
        Ok(state.iter().find(|stored| stored.id() == id).cloned())
    }
}
