//! Document upload-initiation workflow.
//!
//! This module provides the business logic for starting an upload:
//! - Document identity and storage-key allocation
//! - Metadata and audit record shapes
//! - The linear initiation sequence with its partial-failure semantics

mod error;
mod keys;
mod service;
mod store;
mod types;

pub use error::UploadError;
pub use keys::{
    METADATA_SORT_KEY, audit_sort_key, new_document_id, partition_key, storage_key,
};
pub use service::{InitiateUploadInput, UploadInitiated, UploadService, UploadTicket};
pub use store::{DocumentStore, StoreError};
pub use types::{AuditDetails, AuditEvent, DocumentRecord, DocumentStatus, IntegrityRef};
