//! `PostgreSQL` repository implementation for support messages.

use super::{
    models::{SupportMessageRow, row_to_message, to_new_row},
    schema::support_messages,
};
use crate::support::{
    domain::{MessageId, SupportMessage},
    ports::{MessageRepository, MessageStoreError, MessageStoreResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL` connection pool type used by the support-message adapter.
pub type SupportPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed support-message repository.
#[derive(Debug, Clone)]
pub struct PgMessageStore {
    pool: SupportPgPool,
}

impl PgMessageStore {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: SupportPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> MessageStoreResult<T>
    where
        F: FnOnce(&mut PgConnection) -> MessageStoreResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(MessageStoreError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(MessageStoreError::persistence)?
    }
}

#[async_trait]
impl MessageRepository for PgMessageStore {
    async fn create(&self, message: &SupportMessage) -> MessageStoreResult<()> {
        let message_id = message.id();
        let new_row = to_new_row(message);

        self.run_blocking(move |connection| {
            diesel::insert_into(support_messages::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        MessageStoreError::DuplicateMessage(message_id)
                    }
                    _ => MessageStoreError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn list(&self, skip: u64, limit: u64) -> MessageStoreResult<Vec<SupportMessage>> {
        let offset = i64::try_from(skip).unwrap_or(i64::MAX);
        let page_size = i64::try_from(limit).unwrap_or(i64::MAX);

        self.run_blocking(move |connection| {
            let rows = support_messages::table
                .order(support_messages::created_at.desc())
                .offset(offset)
                .limit(page_size)
                .select(SupportMessageRow::as_select())
                .load::<SupportMessageRow>(connection)
                .map_err(MessageStoreError::persistence)?;
            rows.into_iter().map(row_to_message).collect()
        })
        .await
    }

    async fn find_by_id(&self, id: MessageId) -> MessageStoreResult<Option<SupportMessage>> {
        self.run_blocking(move |connection| {
            let row = support_messages::table
                .filter(support_messages::id.eq(id.into_inner()))
                .select(SupportMessageRow::as_select())
                .first::<SupportMessageRow>(connection)
                .optional()
                .map_err(MessageStoreError::persistence)?;
            row.map(row_to_message).transpose()
        })
        .await
    }
}
