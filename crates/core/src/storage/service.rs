//! Credential issuance implementation using Apache OpenDAL.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use opendal::{Operator, services};

use super::config::{StorageConfig, StorageProvider};
use super::error::StorageError;

/// A time-bounded write credential for one storage location.
#[derive(Debug, Clone)]
pub struct PresignedUpload {
    /// The presigned URL.
    pub url: String,
    /// HTTP method to use (PUT).
    pub method: String,
    /// Required headers for the upload request.
    pub headers: HashMap<String, String>,
    /// Validity window in seconds.
    pub expires_in_secs: u64,
}

/// Port for obtaining scoped write credentials.
///
/// Object-safe so request handling and tests can substitute fakes for
/// the OpenDAL-backed implementation.
#[async_trait]
pub trait CredentialIssuer: Send + Sync {
    /// Issues a presigned PUT URL for the given key.
    ///
    /// The declared content type is bound into the credential's required
    /// headers. Content hashes are deliberately not enforced here;
    /// verification belongs to the later submission step.
    async fn presign_put(
        &self,
        key: &str,
        content_type: &str,
    ) -> Result<PresignedUpload, StorageError>;

    /// The bucket/container credentials are scoped to.
    fn bucket(&self) -> &str;
}

/// Storage service issuing upload credentials.
pub struct StorageService {
    operator: Operator,
    config: StorageConfig,
}

impl StorageService {
    /// Create a new storage service from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage provider cannot be initialized.
    pub fn from_config(config: StorageConfig) -> Result<Self, StorageError> {
        let operator = Self::create_operator(&config.provider)?;
        Ok(Self { operator, config })
    }

    /// Create OpenDAL operator from provider config.
    fn create_operator(provider: &StorageProvider) -> Result<Operator, StorageError> {
        match provider {
            StorageProvider::S3 {
                endpoint,
                bucket,
                access_key_id,
                secret_access_key,
                region,
            } => {
                let builder = services::S3::default()
                    .endpoint(endpoint)
                    .bucket(bucket)
                    .access_key_id(access_key_id)
                    .secret_access_key(secret_access_key)
                    .region(region);

                Ok(Operator::new(builder)
                    .map_err(|e| StorageError::configuration(e.to_string()))?
                    .finish())
            }
            StorageProvider::LocalFs { root } => {
                let builder = services::Fs::default().root(
                    root.to_str()
                        .ok_or_else(|| StorageError::configuration("invalid path"))?,
                );

                Ok(Operator::new(builder)
                    .map_err(|e| StorageError::configuration(e.to_string()))?
                    .finish())
            }
        }
    }

    /// Get the storage provider name.
    #[must_use]
    pub fn provider_name(&self) -> &'static str {
        self.config.provider.name()
    }
}

#[async_trait]
impl CredentialIssuer for StorageService {
    async fn presign_put(
        &self,
        key: &str,
        content_type: &str,
    ) -> Result<PresignedUpload, StorageError> {
        let ttl_secs = self.config.presign_upload_ttl_secs;
        let ttl = Duration::from_secs(ttl_secs);

        let presigned = self
            .operator
            .presign_write(key, ttl)
            .await
            .map_err(StorageError::from)?;

        let mut headers = HashMap::new();
        headers.insert("Content-Type".to_string(), content_type.to_string());

        Ok(PresignedUpload {
            url: presigned.uri().to_string(),
            method: presigned.method().to_string(),
            headers,
            expires_in_secs: ttl_secs,
        })
    }

    fn bucket(&self) -> &str {
        self.config.provider.bucket()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config_local_fs() {
        let config = StorageConfig::new(StorageProvider::local_fs("./test-storage"));
        let service = StorageService::from_config(config).expect("should create service");
        assert_eq!(service.provider_name(), "local");
        assert_eq!(service.bucket(), "./test-storage");
    }

    #[test]
    fn test_from_config_s3() {
        let config = StorageConfig::new(StorageProvider::s3(
            "https://account.r2.cloudflarestorage.com",
            "documents",
            "key",
            "secret",
            "auto",
        ));
        let service = StorageService::from_config(config).expect("should create service");
        assert_eq!(service.provider_name(), "s3");
        assert_eq!(service.bucket(), "documents");
    }

    #[tokio::test]
    async fn test_presign_unsupported_on_local_fs() {
        // The fs backend cannot presign; the error must surface rather
        // than be swallowed, since a missing credential has no useful
        // outcome for the caller.
        let config = StorageConfig::new(StorageProvider::local_fs("./test-storage"));
        let service = StorageService::from_config(config).expect("should create service");

        let result = service.presign_put("dev/documents/x/y.pdf", "application/pdf").await;
        assert!(result.is_err());
    }
}
