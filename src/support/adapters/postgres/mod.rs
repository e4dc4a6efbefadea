//! `PostgreSQL` adapters for support-message persistence.

pub(crate) mod models;
mod repository;
mod schema;

pub use repository::{PgMessageStore, SupportPgPool};
