//! Port contracts for support-message persistence and reply generation.

pub mod reply;
pub mod repository;

pub use reply::{ReplyError, ReplyGenerator, ReplyResult};
pub use repository::{MessageRepository, MessageStoreError, MessageStoreResult};
