//! Integration tests for message submission against the in-memory store.

use super::helpers::{TestService, service, submit};
use helpdesk::support::{
    domain::SupportDomainError,
    services::{SubmitMessageRequest, SupportDeskError},
};
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn a_submission_is_stored_and_retrievable(service: TestService) {
    let stored = submit(
        &service,
        "Alice",
        "alice@example.com",
        "The login page keeps refreshing endlessly.",
    )
    .await
    .expect("submission should succeed");

    let found = service
        .find_by_id(stored.id())
        .await
        .expect("lookup should succeed")
        .expect("stored message should be found");

    assert_eq!(found, stored);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn every_submission_receives_a_canned_reply(service: TestService) {
    let stored = submit(
        &service,
        "Bob",
        "bob@example.com",
        "Exported CSV files come out empty.",
    )
    .await
    .expect("submission should succeed");

    let reply = stored.reply().expect("canned generator always replies");
    assert!(!reply.is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn submission_fields_are_trimmed_before_storage(service: TestService) {
    let stored = submit(
        &service,
        "  Carol  ",
        "  carol@example.com  ",
        "  Billing shows the wrong currency for my region.  ",
    )
    .await
    .expect("submission should succeed");

    assert_eq!(stored.name().as_str(), "Carol");
    assert_eq!(stored.email().as_str(), "carol@example.com");
    assert_eq!(
        stored.body().as_str(),
        "Billing shows the wrong currency for my region."
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn an_invalid_email_fails_the_whole_submission(service: TestService) {
    let result = service
        .submit(SubmitMessageRequest::new(
            "Alice",
            "alice-at-example",
            "A perfectly valid message body.",
        ))
        .await;

    assert!(matches!(
        result,
        Err(SupportDeskError::Domain(SupportDomainError::InvalidEmail(_)))
    ));

    let page = service
        .fetch_page(1)
        .await
        .expect("page fetch should succeed");
    assert!(page.messages().is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn a_short_message_body_is_rejected(service: TestService) {
    let result = service
        .submit(SubmitMessageRequest::new(
            "Alice",
            "alice@example.com",
            "help",
        ))
        .await;

    assert!(matches!(
        result,
        Err(SupportDeskError::Domain(
            SupportDomainError::MessageTooShort { .. }
        ))
    ));
}
