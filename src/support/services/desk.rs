//! Support desk orchestration service.
//!
//! Provides [`SupportDeskService`] which coordinates message submission
//! (validation, reply generation, persistence) and newest-first page
//! fetches for the dashboard.

use crate::listing::{ITEMS_PER_PAGE, PageWindow, window_page};
use crate::support::{
    domain::{
        EmailAddress, MessageBody, MessageId, SubmitterName, SupportDomainError, SupportMessage,
    },
    ports::{MessageRepository, MessageStoreError, ReplyError, ReplyGenerator},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for submitting a new support message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitMessageRequest {
    name: String,
    email: String,
    message: String,
}

impl SubmitMessageRequest {
    /// Creates a request from raw form fields.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }
}

/// One fetched dashboard page: the displayed messages plus the derived
/// page window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardPage {
    messages: Vec<SupportMessage>,
    window: PageWindow,
}

impl DashboardPage {
    /// Returns the messages displayed on this page, newest first.
    #[must_use]
    pub fn messages(&self) -> &[SupportMessage] {
        &self.messages
    }

    /// Returns the derived page window.
    #[must_use]
    pub const fn window(&self) -> PageWindow {
        self.window
    }
}

/// Service-level errors for support desk operations.
#[derive(Debug, Error)]
pub enum SupportDeskError {
    /// Submission field validation failed.
    #[error(transparent)]
    Domain(#[from] SupportDomainError),
    /// Reply generation failed.
    #[error(transparent)]
    Reply(#[from] ReplyError),
    /// Repository operation failed.
    #[error(transparent)]
    Store(#[from] MessageStoreError),
}

/// Result type for support desk service operations.
pub type SupportDeskResult<T> = Result<T, SupportDeskError>;

/// Support desk submission and dashboard orchestration service.
#[derive(Clone)]
pub struct SupportDeskService<R, G, C>
where
    R: MessageRepository,
    G: ReplyGenerator,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    replies: Arc<G>,
    clock: Arc<C>,
}

impl<R, G, C> SupportDeskService<R, G, C>
where
    R: MessageRepository,
    G: ReplyGenerator,
    C: Clock + Send + Sync,
{
    /// Creates a new support desk service.
    #[must_use]
    pub const fn new(repository: Arc<R>, replies: Arc<G>, clock: Arc<C>) -> Self {
        Self {
            repository,
            replies,
            clock,
        }
    }

    /// Validates and stores a submitted support message, attaching an
    /// automated reply when the strategy produces one.
    ///
    /// # Errors
    ///
    /// Returns [`SupportDeskError`] when field validation fails, the reply
    /// strategy fails, or the repository rejects persistence.
    pub async fn submit(
        &self,
        request: SubmitMessageRequest,
    ) -> SupportDeskResult<SupportMessage> {
        let SubmitMessageRequest {
            name,
            email,
            message,
        } = request;

        let submitter = SubmitterName::new(name)?;
        let address = EmailAddress::new(email)?;
        let body = MessageBody::new(message)?;

        let reply = self.replies.reply_to(&body).await?;
        let stored = SupportMessage::new(submitter, address, body, reply, &*self.clock);
        self.repository.create(&stored).await?;
        Ok(stored)
    }

    /// Fetches one dashboard page of messages, newest first.
    ///
    /// `requested_page` is clamped up to 1. One record beyond the page size
    /// is fetched as a next-page probe; the probe never appears in the
    /// returned messages.
    ///
    /// # Errors
    ///
    /// Returns [`SupportDeskError::Store`] when the repository fails.
    pub async fn fetch_page(&self, requested_page: u32) -> SupportDeskResult<DashboardPage> {
        let page = requested_page.max(1);
        let per_page = u64::try_from(ITEMS_PER_PAGE).unwrap_or(u64::MAX);
        let skip = u64::from(page - 1).saturating_mul(per_page);
        let limit = per_page.saturating_add(1);

        let fetched = self.repository.list(skip, limit).await?;
        let (messages, window) = window_page(fetched, page, ITEMS_PER_PAGE);
        Ok(DashboardPage { messages, window })
    }

    /// Finds a stored message by identifier.
    ///
    /// Returns `Ok(None)` when no message has the given ID.
    ///
    /// # Errors
    ///
    /// Returns [`SupportDeskError::Store`] when the repository lookup fails.
    pub async fn find_by_id(&self, id: MessageId) -> SupportDeskResult<Option<SupportMessage>> {
        Ok(self.repository.find_by_id(id).await?)
    }
}
