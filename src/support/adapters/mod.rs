//! Adapter implementations of the support-message ports.

pub mod canned;
pub mod memory;
pub mod postgres;

pub use canned::CannedReplyGenerator;
pub use memory::InMemoryMessageStore;
pub use postgres::{PgMessageStore, SupportPgPool};
