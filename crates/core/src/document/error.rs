//! Upload-initiation error taxonomy.

use thiserror::Error;

use crate::authz::PermissionDenied;

/// Errors terminating the upload-initiation sequence.
///
/// Audit-write failure is deliberately absent: it does not terminate
/// the sequence and surfaces as a warning on the success result.
#[derive(Debug, Error)]
pub enum UploadError {
    /// Request shape was invalid.
    #[error("{0}")]
    Validation(String),

    /// The authorization gate rejected the actor.
    #[error(transparent)]
    Forbidden(#[from] PermissionDenied),

    /// The write credential could not be obtained.
    #[error("Failed to generate presigned URL: {0}")]
    CredentialIssuance(String),

    /// The metadata row could not be written.
    #[error("Failed to write document metadata: {0}")]
    MetadataWrite(String),
}

impl UploadError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::Validation(_) => 400,
            Self::Forbidden(_) => 403,
            Self::CredentialIssuance(_) | Self::MetadataWrite(_) => 500,
        }
    }

    /// Create a validation error.
    #[must_use]
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a credential issuance error.
    #[must_use]
    pub fn credential_issuance(msg: impl Into<String>) -> Self {
        Self::CredentialIssuance(msg.into())
    }

    /// Create a metadata write error.
    #[must_use]
    pub fn metadata_write(msg: impl Into<String>) -> Self {
        Self::MetadataWrite(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(UploadError::validation("x").status_code(), 400);
        assert_eq!(
            UploadError::from(PermissionDenied("Uploader role required".to_string()))
                .status_code(),
            403
        );
        assert_eq!(UploadError::credential_issuance("x").status_code(), 500);
        assert_eq!(UploadError::metadata_write("x").status_code(), 500);
    }

    #[test]
    fn test_messages_keep_dependency_context() {
        assert_eq!(
            UploadError::credential_issuance("boom").to_string(),
            "Failed to generate presigned URL: boom"
        );
        assert_eq!(
            UploadError::metadata_write("boom").to_string(),
            "Failed to write document metadata: boom"
        );
    }
}
