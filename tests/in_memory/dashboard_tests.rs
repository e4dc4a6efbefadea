//! Integration tests for the paginated, searchable dashboard listing.

use super::helpers::{
    SilentTestService, TestService, service, silent_service, submit, submit_sample_trio,
};
use helpdesk::listing::{PageMarker, filter_messages, page_numbers};
use rstest::rstest;

// Uses the reply-less service: canned acknowledgements contain the word
// "about", which would otherwise match the "bo" query.
#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn searching_the_trio_for_bo_finds_only_bob(silent_service: SilentTestService) {
    submit_sample_trio(&silent_service)
        .await
        .expect("sample submissions should succeed");

    let page = silent_service
        .fetch_page(1)
        .await
        .expect("page fetch should succeed");
    let filtered = filter_messages(page.messages(), "bo");

    let names: Vec<&str> = filtered
        .iter()
        .map(|found| found.name().as_str())
        .collect();
    assert_eq!(names, vec!["Bob"]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn a_blank_search_shows_the_whole_page(service: TestService) {
    submit_sample_trio(&service)
        .await
        .expect("sample submissions should succeed");

    let page = service
        .fetch_page(1)
        .await
        .expect("page fetch should succeed");
    let filtered = filter_messages(page.messages(), "   ");

    assert_eq!(filtered.len(), 3);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn the_dashboard_lists_newest_submissions_first(service: TestService) {
    submit_sample_trio(&service)
        .await
        .expect("sample submissions should succeed");

    let page = service
        .fetch_page(1)
        .await
        .expect("page fetch should succeed");

    let names: Vec<&str> = page
        .messages()
        .iter()
        .map(|message| message.name().as_str())
        .collect();
    assert_eq!(names, vec!["Carol", "Bob", "Alice"]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn twelve_submissions_paginate_with_a_probe(service: TestService) {
    for index in 0..12 {
        submit(
            &service,
            &format!("Submitter {index}"),
            &format!("submitter{index}@example.com"),
            &format!("Ticket number {index} with plenty of detail attached."),
        )
        .await
        .expect("submission should succeed");
    }

    let first = service
        .fetch_page(1)
        .await
        .expect("page fetch should succeed");
    assert_eq!(first.messages().len(), 10);
    assert!(first.window().has_next_page());
    assert_eq!(first.window().total_pages(), 2);

    let second = service
        .fetch_page(2)
        .await
        .expect("page fetch should succeed");
    assert_eq!(second.messages().len(), 2);
    assert!(!second.window().has_next_page());
    assert_eq!(second.window().start_item(), 11);
    assert_eq!(second.window().end_item(), 12);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn navigation_markers_follow_the_page_window(service: TestService) {
    for index in 0..11 {
        submit(
            &service,
            &format!("Submitter {index}"),
            &format!("submitter{index}@example.com"),
            &format!("Ticket number {index} with plenty of detail attached."),
        )
        .await
        .expect("submission should succeed");
    }

    let page = service
        .fetch_page(1)
        .await
        .expect("page fetch should succeed");
    let markers = page_numbers(page.window().current_page(), page.window().total_pages());

    assert_eq!(markers, vec![PageMarker::Page(1), PageMarker::Page(2)]);
}
