//! Document record store backed by one unified table.
//!
//! Metadata and audit rows share a table with a `(pk, sk)` composite
//! key: the partition key groups everything belonging to one document,
//! the sort key discriminates the singleton metadata row from the
//! append-only, time-ordered audit rows. The table name is taken from
//! configuration, so statements are built with sea-query rather than a
//! static entity.

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::sea_query::{Alias, Query};
use sea_orm::{ConnectionTrait, DatabaseConnection, DeriveIden};
use uuid::Uuid;

use docvault_core::document::{
    AuditEvent, DocumentRecord, DocumentStore, METADATA_SORT_KEY, StoreError, audit_sort_key,
    partition_key,
};

/// Columns of the unified record table.
#[derive(DeriveIden)]
enum RecordColumn {
    Pk,
    Sk,
    Payload,
}

/// Document record store implementation.
#[derive(Debug, Clone)]
pub struct DocumentRepository {
    db: Arc<DatabaseConnection>,
    table: String,
}

impl DocumentRepository {
    /// Create a new document repository writing to the given table.
    #[must_use]
    pub fn new(db: Arc<DatabaseConnection>, table: impl Into<String>) -> Self {
        Self {
            db,
            table: table.into(),
        }
    }

    async fn insert_row(
        &self,
        pk: String,
        sk: String,
        payload: serde_json::Value,
    ) -> Result<(), StoreError> {
        let mut stmt = Query::insert();
        stmt.into_table(Alias::new(self.table.as_str()))
            .columns([RecordColumn::Pk, RecordColumn::Sk, RecordColumn::Payload])
            .values([pk.into(), sk.into(), payload.into()])
            .map_err(|e| StoreError::new(e.to_string()))?;

        let backend = self.db.get_database_backend();
        self.db
            .execute(backend.build(&stmt))
            .await
            .map_err(|e| StoreError::new(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl DocumentStore for DocumentRepository {
    async fn put_metadata(&self, record: &DocumentRecord) -> Result<(), StoreError> {
        let payload = serde_json::to_value(record).map_err(|e| StoreError::new(e.to_string()))?;

        self.insert_row(
            partition_key(record.document_id),
            METADATA_SORT_KEY.to_string(),
            payload,
        )
        .await
    }

    async fn append_audit(
        &self,
        document_id: Uuid,
        event: &AuditEvent,
    ) -> Result<(), StoreError> {
        let payload = serde_json::to_value(event).map_err(|e| StoreError::new(e.to_string()))?;

        self.insert_row(
            partition_key(document_id),
            audit_sort_key(&event.timestamp_utc, event.event_id),
            payload,
        )
        .await
    }
}
