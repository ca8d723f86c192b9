//! Upload-initiation service.

use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;
use tracing::warn;
use uuid::Uuid;

use super::error::UploadError;
use super::keys;
use super::store::DocumentStore;
use super::types::{AuditEvent, DocumentRecord};
use crate::actor::ActorContext;
use crate::authz::require_uploader;
use crate::storage::CredentialIssuer;

/// Input for initiating an upload.
#[derive(Debug, Clone)]
pub struct InitiateUploadInput {
    /// Declared filename. Shape-validated by the caller; must be non-empty.
    pub filename: String,
    /// Declared content type.
    pub content_type: String,
    /// Caller-declared expected content hash.
    pub expected_sha256: Option<String>,
}

/// The issued upload ticket returned to the caller.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadTicket {
    /// Bucket the credential is scoped to.
    pub bucket: String,
    /// Object key the credential is scoped to.
    pub key: String,
    /// Content type bound into the credential.
    pub content_type: String,
    /// The presigned PUT URL.
    pub presigned_url: String,
    /// Credential validity window in seconds.
    pub expires_in_seconds: u64,
}

/// Successful outcome of upload initiation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadInitiated {
    /// The allocated document identifier.
    pub document_id: Uuid,
    /// The issued upload ticket.
    pub upload: UploadTicket,
    /// Present when the audit write failed after metadata succeeded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

/// Service running the upload-initiation sequence.
///
/// The sequence is strictly linear per request: gate, allocate,
/// presign, metadata write, audit write. No state is retained between
/// requests; the injected ports are safe to share across invocations.
pub struct UploadService {
    issuer: Arc<dyn CredentialIssuer>,
    store: Arc<dyn DocumentStore>,
    env_name: String,
    enforce_groups: bool,
}

impl UploadService {
    /// Create a new upload service.
    #[must_use]
    pub fn new(
        issuer: Arc<dyn CredentialIssuer>,
        store: Arc<dyn DocumentStore>,
        env_name: impl Into<String>,
        enforce_groups: bool,
    ) -> Self {
        Self {
            issuer,
            store,
            env_name: env_name.into(),
            enforce_groups,
        }
    }

    /// Initiates an upload for the given actor.
    ///
    /// On success the caller receives the allocated document id and a
    /// time-limited upload ticket. A failed audit write does not fail
    /// the operation; it is reported through the `warning` field.
    ///
    /// A credential may already have been issued when the metadata
    /// write fails. No revocation is attempted; the operation reports
    /// failure and the credential expires via its TTL.
    ///
    /// # Errors
    ///
    /// Returns `UploadError::Forbidden` when the gate rejects the actor,
    /// `UploadError::Validation` for an empty filename, and a dependency
    /// error when credential issuance or the metadata write fails.
    pub async fn initiate(
        &self,
        actor: &ActorContext,
        input: InitiateUploadInput,
    ) -> Result<UploadInitiated, UploadError> {
        require_uploader(actor, self.enforce_groups)?;

        if input.filename.is_empty() {
            return Err(UploadError::validation("filename is required"));
        }

        let document_id = keys::new_document_id();
        let created_at = Utc::now();
        let storage_key = keys::storage_key(&self.env_name, document_id, &input.filename);

        let presigned = self
            .issuer
            .presign_put(&storage_key, &input.content_type)
            .await
            .map_err(|e| UploadError::credential_issuance(e.to_string()))?;

        let record = DocumentRecord::draft(
            document_id,
            actor,
            self.issuer.bucket(),
            &storage_key,
            &input.content_type,
            input.expected_sha256.clone(),
            created_at,
        );

        self.store
            .put_metadata(&record)
            .await
            .map_err(|e| UploadError::metadata_write(e.to_string()))?;

        let event = AuditEvent::upload_initiated(&record, actor, &input.filename, &self.env_name);
        let warning = match self.store.append_audit(document_id, &event).await {
            Ok(()) => None,
            Err(e) => {
                // Best effort: audit must never block the upload, but
                // its failure has to stay observable downstream.
                warn!(document_id = %document_id, error = %e, "Audit write failed");
                Some(format!("Metadata saved but audit write failed: {e}"))
            }
        };

        Ok(UploadInitiated {
            document_id,
            upload: UploadTicket {
                bucket: self.issuer.bucket().to_string(),
                key: storage_key,
                content_type: input.content_type,
                presigned_url: presigned.url,
                expires_in_seconds: presigned.expires_in_secs,
            },
            warning,
        })
    }
}

impl std::fmt::Debug for UploadService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UploadService")
            .field("env_name", &self.env_name)
            .field("enforce_groups", &self.enforce_groups)
            .finish_non_exhaustive()
    }
}
