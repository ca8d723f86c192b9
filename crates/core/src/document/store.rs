//! Persistence port for document metadata and audit rows.

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use super::types::{AuditEvent, DocumentRecord};

/// A failed durable write.
#[derive(Debug, Clone, Error)]
#[error("{0}")]
pub struct StoreError(String);

impl StoreError {
    /// Create a store error.
    #[must_use]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }
}

/// Port for persisting document rows.
///
/// Both row shapes share the document's partition key and are otherwise
/// independent: there is no foreign key or transaction tying them
/// together, and consistency between them is best effort within one
/// request.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Persists the initial DRAFT metadata row. Exactly one per document.
    async fn put_metadata(&self, record: &DocumentRecord) -> Result<(), StoreError>;

    /// Appends one immutable audit row under the document's partition.
    async fn append_audit(&self, document_id: Uuid, event: &AuditEvent)
    -> Result<(), StoreError>;
}
