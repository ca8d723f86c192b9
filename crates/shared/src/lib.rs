//! Shared types and configuration for Docvault.
//!
//! This crate provides common types used across all other crates:
//! - JWT claim shapes for authenticated callers
//! - Token validation
//! - Configuration management

pub mod auth;
pub mod config;
pub mod jwt;

pub use auth::{Claims, GroupsClaim};
pub use config::AppConfig;
pub use jwt::{JwtError, JwtService};
