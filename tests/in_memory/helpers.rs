//! Shared test helpers for in-memory support-workflow integration tests.

use async_trait::async_trait;
use helpdesk::support::{
    adapters::{canned::CannedReplyGenerator, memory::InMemoryMessageStore},
    domain::{MessageBody, SupportMessage},
    ports::{MessageRepository, ReplyGenerator, ReplyResult},
    services::{SubmitMessageRequest, SupportDeskService},
};
use mockable::{Clock, DefaultClock};
use rstest::fixture;
use std::sync::Arc;

/// Service wired with the in-memory store and the deterministic canned
/// reply generator.
pub type TestService =
    SupportDeskService<InMemoryMessageStore, CannedReplyGenerator, DefaultClock>;

/// Service whose reply strategy always declines, for tests that must not
/// have generated-reply text participating in search matches.
pub type SilentTestService = SupportDeskService<InMemoryMessageStore, SilentReplies, DefaultClock>;

/// Reply strategy that never produces a reply.
pub struct SilentReplies;

#[async_trait]
impl ReplyGenerator for SilentReplies {
    async fn reply_to(&self, _body: &MessageBody) -> ReplyResult {
        Ok(None)
    }
}

/// Provides a fresh canned-reply service for each test.
#[fixture]
pub fn service() -> TestService {
    SupportDeskService::new(
        Arc::new(InMemoryMessageStore::new()),
        Arc::new(CannedReplyGenerator::with_seed(2024)),
        Arc::new(DefaultClock),
    )
}

/// Provides a fresh reply-less service for each test.
#[fixture]
pub fn silent_service() -> SilentTestService {
    SupportDeskService::new(
        Arc::new(InMemoryMessageStore::new()),
        Arc::new(SilentReplies),
        Arc::new(DefaultClock),
    )
}

/// Submits a message and returns the stored aggregate.
///
/// # Errors
///
/// Returns an error when submission fails.
pub async fn submit<R, G, C>(
    service: &SupportDeskService<R, G, C>,
    name: &str,
    email: &str,
    message: &str,
) -> eyre::Result<SupportMessage>
where
    R: MessageRepository,
    G: ReplyGenerator,
    C: Clock + Send + Sync,
{
    let stored = service
        .submit(SubmitMessageRequest::new(name, email, message))
        .await?;
    Ok(stored)
}

/// Submits the three standing example messages (Alice, Bob, Carol).
///
/// # Errors
///
/// Returns an error when any submission fails.
pub async fn submit_sample_trio<R, G, C>(
    service: &SupportDeskService<R, G, C>,
) -> eyre::Result<()>
where
    R: MessageRepository,
    G: ReplyGenerator,
    C: Clock + Send + Sync,
{
    submit(
        service,
        "Alice",
        "alice@example.com",
        "The login page keeps refreshing endlessly.",
    )
    .await?;
    submit(
        service,
        "Bob",
        "bob@example.com",
        "Exported CSV files come out empty.",
    )
    .await?;
    submit(
        service,
        "Carol",
        "carol@example.com",
        "Billing shows the wrong currency for my region.",
    )
    .await?;
    Ok(())
}
