//! Request middleware.

pub mod auth;

pub use auth::claims_middleware;
