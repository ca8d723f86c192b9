//! API route definitions.

use axum::{Router, middleware};

use crate::{AppState, middleware::auth::claims_middleware};

pub mod documents;
pub mod health;

/// Creates the API router with all routes.
pub fn api_routes_with_state(state: AppState) -> Router<AppState> {
    // Document routes get claims extraction; authorization itself is
    // decided inside the upload workflow.
    let document_routes = documents::routes().layer(middleware::from_fn_with_state(
        state,
        claims_middleware,
    ));

    Router::new().merge(health::routes()).merge(document_routes)
}
