//! HTTP API layer with Axum routes and middleware.
//!
//! This crate provides:
//! - REST API routes
//! - Claims-extraction middleware
//! - The shared application state with its injectable ports

pub mod middleware;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::http::{HeaderValue, header};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;
use tracing::warn;

use docvault_core::document::DocumentStore;
use docvault_core::storage::CredentialIssuer;
use docvault_shared::JwtService;

/// Application state shared across handlers.
///
/// The store and issuer are constructed once at process start and
/// injected here, so tests can substitute fakes.
#[derive(Clone)]
pub struct AppState {
    /// Document record store.
    pub store: Arc<dyn DocumentStore>,
    /// Write-credential issuer.
    pub issuer: Arc<dyn CredentialIssuer>,
    /// JWT service for token validation.
    pub jwt_service: Arc<JwtService>,
    /// Deployment environment name.
    pub environment: String,
    /// Whether the Uploaders-group requirement is enforced.
    pub enforce_groups: bool,
}

/// Creates the main application router.
///
/// CORS headers are stamped onto every response rather than handled by
/// a preflight-intercepting layer: OPTIONS must reach the route's own
/// handler so the acknowledgment body stays `{"ok": true}`.
pub fn create_router(state: AppState, allow_origin: &str) -> Router {
    Router::new()
        .nest("/api/v1", routes::api_routes_with_state(state.clone()))
        .layer(TraceLayer::new_for_http())
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            origin_value(allow_origin),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("POST, OPTIONS"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("content-type, authorization"),
        ))
        .with_state(state)
}

/// Allowed-origin header value, falling back to `*` when unparseable.
fn origin_value(allow_origin: &str) -> HeaderValue {
    match allow_origin.parse::<HeaderValue>() {
        Ok(value) => value,
        Err(_) => {
            warn!(origin = %allow_origin, "Invalid CORS origin, falling back to any");
            HeaderValue::from_static("*")
        }
    }
}
