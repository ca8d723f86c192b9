//! Document metadata and audit record shapes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::actor::ActorContext;

/// Audit event type for upload initiation.
pub const DOC_UPLOAD_INITIATED: &str = "DOC_UPLOAD_INITIATED";

/// Lifecycle status of a document record.
///
/// Upload initiation only ever produces `Draft`; the rest of the
/// lifecycle is driven by downstream review/approval services.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DocumentStatus {
    /// Initial state, prior to any confirmed successful upload.
    Draft,
}

/// Durable metadata record, one per upload attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentRecord {
    /// Unique identifier, assigned exactly once at creation.
    pub document_id: Uuid,
    /// Title, unset at creation.
    pub title: Option<String>,
    /// Description, unset at creation.
    pub description: Option<String>,
    /// Owner's user identifier.
    pub owner_user_id: String,
    /// Owner's display name.
    pub owner_username: String,
    /// Lifecycle status.
    pub status: DocumentStatus,
    /// Bucket holding the document object.
    pub storage_bucket: String,
    /// Object key within the bucket.
    pub storage_key: String,
    /// Object version marker, unset until the first successful write.
    pub storage_version_id: Option<String>,
    /// Declared content type.
    pub content_type: String,
    /// Caller-declared expected content hash.
    pub expected_sha256: Option<String>,
    /// Computed content hash, unset at creation.
    pub sha256: Option<String>,
    /// Creation timestamp (UTC).
    pub created_at: DateTime<Utc>,
    /// Last-update timestamp (UTC).
    pub updated_at: DateTime<Utc>,
}

/// Contextual detail payload of an audit event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditDetails {
    /// Declared filename.
    pub filename: String,
    /// Declared content type.
    pub content_type: String,
    /// Deployment environment name.
    pub env: String,
}

/// Integrity payload of an audit event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntegrityRef {
    /// Bucket the credential was scoped to.
    pub storage_bucket: String,
    /// Object key the credential was scoped to.
    pub storage_key: String,
    /// Object version marker, if any.
    pub storage_version_id: Option<String>,
    /// Expected content hash, if declared.
    pub sha256: Option<String>,
}

/// Immutable audit-trail event, keyed by the owning document.
///
/// Events are append-only: never mutated, never deleted. Ordering among
/// a document's events comes from their timestamp-qualified sort key,
/// not a sequence counter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditEvent {
    /// Unique event identifier.
    pub event_id: Uuid,
    /// Event type marker.
    pub event_type: String,
    /// Event timestamp (UTC).
    pub timestamp_utc: DateTime<Utc>,
    /// Acting user's identifier.
    pub actor_user_id: String,
    /// Acting user's display name.
    pub actor_username: String,
    /// Acting user's group memberships.
    pub actor_groups: Vec<String>,
    /// Contextual details.
    pub details: AuditDetails,
    /// Integrity reference for the allocated storage location.
    pub integrity: IntegrityRef,
}

impl DocumentRecord {
    /// Builds the initial DRAFT record for a freshly allocated document.
    #[must_use]
    pub fn draft(
        document_id: Uuid,
        actor: &ActorContext,
        storage_bucket: impl Into<String>,
        storage_key: impl Into<String>,
        content_type: impl Into<String>,
        expected_sha256: Option<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            document_id,
            title: None,
            description: None,
            owner_user_id: actor.user_id.clone(),
            owner_username: actor.username.clone(),
            status: DocumentStatus::Draft,
            storage_bucket: storage_bucket.into(),
            storage_key: storage_key.into(),
            storage_version_id: None,
            content_type: content_type.into(),
            expected_sha256,
            sha256: None,
            created_at,
            updated_at: created_at,
        }
    }
}

impl AuditEvent {
    /// Builds the `DOC_UPLOAD_INITIATED` event for a new DRAFT record.
    #[must_use]
    pub fn upload_initiated(
        record: &DocumentRecord,
        actor: &ActorContext,
        filename: impl Into<String>,
        env: impl Into<String>,
    ) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            event_type: DOC_UPLOAD_INITIATED.to_string(),
            timestamp_utc: record.created_at,
            actor_user_id: actor.user_id.clone(),
            actor_username: actor.username.clone(),
            actor_groups: actor.groups.iter().cloned().collect(),
            details: AuditDetails {
                filename: filename.into(),
                content_type: record.content_type.clone(),
                env: env.into(),
            },
            integrity: IntegrityRef {
                storage_bucket: record.storage_bucket.clone(),
                storage_key: record.storage_key.clone(),
                storage_version_id: record.storage_version_id.clone(),
                sha256: record.expected_sha256.clone(),
            },
        }
    }
}
