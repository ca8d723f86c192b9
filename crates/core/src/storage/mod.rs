//! Write-credential issuance for document uploads using Apache OpenDAL.
//!
//! This module provides vendor-agnostic presigned upload URLs with
//! support for:
//! - S3-compatible: Cloudflare R2, Supabase Storage, AWS S3, DigitalOcean Spaces
//! - Local filesystem (development only)
//!
//! The issuer is exposed through the object-safe [`CredentialIssuer`]
//! port so request handling and tests can substitute fakes.

mod config;
mod error;
mod service;

pub use config::{StorageConfig, StorageProvider};
pub use error::StorageError;
pub use service::{CredentialIssuer, PresignedUpload, StorageService};
