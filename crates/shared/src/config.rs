//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Deployment environment name (embedded in storage keys and audit events).
    #[serde(default = "default_environment")]
    pub environment: String,
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Database configuration.
    pub database: DatabaseConfig,
    /// Authentication and authorization configuration.
    pub auth: AuthConfig,
    /// Object storage configuration.
    pub storage: StorageSettings,
    /// CORS configuration.
    #[serde(default)]
    pub cors: CorsConfig,
}

fn default_environment() -> String {
    "dev".to_string()
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Database configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Database connection URL.
    pub url: String,
    /// Table holding document metadata and audit rows.
    #[serde(default = "default_table")]
    pub table: String,
    /// Maximum number of connections in the pool.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

/// Default name of the unified document/audit table.
pub fn default_table() -> String {
    "document_records".to_string()
}

fn default_max_connections() -> u32 {
    10
}

/// Authentication and authorization configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// Secret key for validating tokens.
    pub jwt_secret: String,
    /// Whether the Uploaders-group requirement is enforced.
    ///
    /// Off by default so the service is usable before the identity
    /// provider is wired up.
    #[serde(default)]
    pub enforce_groups: bool,
}

/// Object storage configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    /// Bucket holding uploaded documents.
    pub bucket: String,
    /// S3-compatible endpoint URL. Empty selects the local-fs provider.
    #[serde(default)]
    pub endpoint: String,
    /// Region for S3-compatible providers.
    #[serde(default = "default_region")]
    pub region: String,
    /// Access key ID for S3-compatible providers.
    #[serde(default)]
    pub access_key_id: String,
    /// Secret access key for S3-compatible providers.
    #[serde(default)]
    pub secret_access_key: String,
    /// Presigned upload URL TTL in seconds.
    #[serde(default = "default_presign_ttl")]
    pub presign_ttl_secs: u64,
}

fn default_region() -> String {
    "auto".to_string()
}

fn default_presign_ttl() -> u64 {
    900
}

/// CORS configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    /// Origin allowed to call the API.
    #[serde(default = "default_allow_origin")]
    pub allow_origin: String,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allow_origin: default_allow_origin(),
        }
    }
}

fn default_allow_origin() -> String {
    "*".to_string()
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("DOCVAULT").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_from_environment() {
        temp_env::with_vars(
            [
                ("DOCVAULT__DATABASE__URL", Some("postgres://localhost/dv")),
                ("DOCVAULT__AUTH__JWT_SECRET", Some("secret")),
                ("DOCVAULT__STORAGE__BUCKET", Some("docs-bucket")),
                ("DOCVAULT__SERVER__HOST", Some("127.0.0.1")),
            ],
            || {
                let config = AppConfig::load().expect("config should load");
                assert_eq!(config.environment, "dev");
                assert_eq!(config.server.host, "127.0.0.1");
                assert_eq!(config.server.port, 8080);
                assert_eq!(config.database.table, "document_records");
                assert_eq!(config.storage.bucket, "docs-bucket");
                assert_eq!(config.storage.presign_ttl_secs, 900);
                assert!(!config.auth.enforce_groups);
                assert_eq!(config.cors.allow_origin, "*");
            },
        );
    }

    #[test]
    fn test_overrides() {
        temp_env::with_vars(
            [
                ("DOCVAULT__DATABASE__URL", Some("postgres://localhost/dv")),
                ("DOCVAULT__AUTH__JWT_SECRET", Some("secret")),
                ("DOCVAULT__AUTH__ENFORCE_GROUPS", Some("true")),
                ("DOCVAULT__STORAGE__BUCKET", Some("docs-bucket")),
                ("DOCVAULT__STORAGE__PRESIGN_TTL_SECS", Some("300")),
                ("DOCVAULT__ENVIRONMENT", Some("prod")),
                ("DOCVAULT__CORS__ALLOW_ORIGIN", Some("https://app.example")),
            ],
            || {
                let config = AppConfig::load().expect("config should load");
                assert_eq!(config.environment, "prod");
                assert_eq!(config.storage.presign_ttl_secs, 300);
                assert!(config.auth.enforce_groups);
                assert_eq!(config.cors.allow_origin, "https://app.example");
                // No server vars set; the section defaults whole.
                assert_eq!(config.server.host, "0.0.0.0");
                assert_eq!(config.server.port, 8080);
            },
        );
    }

    #[test]
    fn test_missing_required_bucket_fails() {
        temp_env::with_vars(
            [
                ("DOCVAULT__DATABASE__URL", Some("postgres://localhost/dv")),
                ("DOCVAULT__AUTH__JWT_SECRET", Some("secret")),
                ("DOCVAULT__STORAGE__BUCKET", None::<&str>),
            ],
            || {
                assert!(AppConfig::load().is_err());
            },
        );
    }
}
