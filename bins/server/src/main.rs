//! Docvault API Server
//!
//! Main entry point for the document-upload backend service.

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use docvault_api::{AppState, create_router};
use docvault_core::storage::{StorageConfig, StorageProvider, StorageService};
use docvault_db::{DocumentRepository, connect};
use docvault_shared::{AppConfig, JwtService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "docvault=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load().expect("Failed to load configuration");

    // Connect to database
    let db = connect(&config.database.url, config.database.max_connections).await?;
    info!("Connected to database");

    // Create storage service. An empty endpoint selects the local
    // filesystem provider; the configured bucket doubles as its root so
    // issued credentials always name the configured bucket.
    let provider = if config.storage.endpoint.is_empty() {
        StorageProvider::local_fs(&config.storage.bucket)
    } else {
        StorageProvider::s3(
            &config.storage.endpoint,
            &config.storage.bucket,
            &config.storage.access_key_id,
            &config.storage.secret_access_key,
            &config.storage.region,
        )
    };
    info!(provider = provider.name(), bucket = provider.bucket(), "Storage configured");
    let storage = StorageService::from_config(
        StorageConfig::new(provider).with_upload_ttl(config.storage.presign_ttl_secs),
    )?;

    // Create JWT service
    let jwt_service = JwtService::new(&config.auth.jwt_secret);

    // Create the document store
    let repository = DocumentRepository::new(Arc::new(db), config.database.table.clone());

    // Create application state
    let state = AppState {
        store: Arc::new(repository),
        issuer: Arc::new(storage),
        jwt_service: Arc::new(jwt_service),
        environment: config.environment.clone(),
        enforce_groups: config.auth.enforce_groups,
    };

    // Create router
    let app = create_router(state, &config.cors.allow_origin);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
