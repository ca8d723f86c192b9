//! Database layer for Docvault.
//!
//! This crate provides:
//! - The `SeaORM`-backed document record store
//! - Database migrations

pub mod migration;
pub mod repositories;

pub use repositories::DocumentRepository;

use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};

/// Establishes a connection pool to the database.
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub async fn connect(database_url: &str, max_connections: u32) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(database_url.to_string());
    options.max_connections(max_connections);
    Database::connect(options).await
}
