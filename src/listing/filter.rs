//! Free-text filtering over a page of support messages.

use crate::support::domain::SupportMessage;

/// Returns the messages matching a free-text query, preserving input order.
///
/// Matching is case-insensitive substring search across the submitter name,
/// email, message body, and automated reply (the reply participates only
/// when present). An empty or whitespace-only query is the identity: every
/// message is returned, not none.
#[must_use]
pub fn filter_messages<'a>(
    messages: &'a [SupportMessage],
    query: &str,
) -> Vec<&'a SupportMessage> {
    if query.trim().is_empty() {
        return messages.iter().collect();
    }

    let needle = query.to_lowercase();
    messages
        .iter()
        .filter(|message| matches_query(message, &needle))
        .collect()
}

fn matches_query(message: &SupportMessage, needle: &str) -> bool {
    contains_insensitive(message.name().as_str(), needle)
        || contains_insensitive(message.email().as_str(), needle)
        || contains_insensitive(message.body().as_str(), needle)
        || message
            .reply()
            .is_some_and(|reply| contains_insensitive(reply, needle))
}

fn contains_insensitive(haystack: &str, lowercased_needle: &str) -> bool {
    haystack.to_lowercase().contains(lowercased_needle)
}
