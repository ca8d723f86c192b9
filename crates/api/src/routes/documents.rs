//! Document upload-initiation routes.

use axum::{
    Json, Router,
    body::Bytes,
    extract::{Extension, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use serde_json::{Value, json};
use tracing::{error, info};

use crate::AppState;
use docvault_core::actor::ActorContext;
use docvault_core::document::{InitiateUploadInput, UploadService};
use docvault_shared::Claims;

/// Creates the document routes.
pub fn routes() -> Router<AppState> {
    Router::new().route(
        "/documents/uploads",
        post(initiate_upload).options(preflight),
    )
}

/// OPTIONS `/documents/uploads`
/// CORS preflight acknowledgment.
async fn preflight() -> impl IntoResponse {
    Json(json!({ "ok": true }))
}

/// POST `/documents/uploads`
/// Initiate a document upload.
async fn initiate_upload(
    State(state): State<AppState>,
    claims: Option<Extension<Claims>>,
    body: Bytes,
) -> Response {
    let actor = ActorContext::from_claims(claims.as_deref());

    let input = match parse_body(&body) {
        Ok(input) => input,
        Err(message) => return error_response(StatusCode::BAD_REQUEST, &message),
    };

    let service = UploadService::new(
        state.issuer.clone(),
        state.store.clone(),
        state.environment.clone(),
        state.enforce_groups,
    );

    match service.initiate(&actor, input).await {
        Ok(outcome) => {
            info!(
                document_id = %outcome.document_id,
                actor = %actor.user_id,
                "Upload initiated"
            );
            (StatusCode::OK, Json(outcome)).into_response()
        }
        Err(e) => {
            error!(error = %e, actor = %actor.user_id, "Upload initiation failed");
            let status = StatusCode::from_u16(e.status_code())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            error_response(status, &e.to_string())
        }
    }
}

/// Parses the request body into upload input.
///
/// The error contract is exactly `{"error": string}` with a 400 status,
/// so the body is inspected as a JSON value here instead of letting an
/// extractor shape the rejection. An absent body behaves like `{}`.
fn parse_body(body: &[u8]) -> Result<InitiateUploadInput, String> {
    let value: Value = if body.is_empty() {
        Value::Object(serde_json::Map::new())
    } else {
        serde_json::from_slice(body).map_err(|_| "Invalid JSON body".to_string())?
    };

    let filename = value
        .get("filename")
        .and_then(Value::as_str)
        .filter(|f| !f.is_empty())
        .ok_or_else(|| "filename is required".to_string())?
        .to_string();

    let content_type = value
        .get("contentType")
        .and_then(Value::as_str)
        .unwrap_or("application/octet-stream")
        .to_string();

    let expected_sha256 = value
        .get("expectedSha256")
        .and_then(Value::as_str)
        .map(ToString::to_string);

    Ok(InitiateUploadInput {
        filename,
        content_type,
        expected_sha256,
    })
}

/// Builds the uniform error envelope.
fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_body_full_request() {
        let input = parse_body(
            br#"{"filename":"report.pdf","contentType":"application/pdf","expectedSha256":"abc"}"#,
        )
        .unwrap();
        assert_eq!(input.filename, "report.pdf");
        assert_eq!(input.content_type, "application/pdf");
        assert_eq!(input.expected_sha256.as_deref(), Some("abc"));
    }

    #[test]
    fn test_parse_body_defaults_content_type() {
        let input = parse_body(br#"{"filename":"report.pdf"}"#).unwrap();
        assert_eq!(input.content_type, "application/octet-stream");
        assert!(input.expected_sha256.is_none());
    }

    #[test]
    fn test_parse_body_malformed_json() {
        assert_eq!(parse_body(b"{not json").unwrap_err(), "Invalid JSON body");
    }

    #[test]
    fn test_parse_body_missing_filename() {
        assert_eq!(parse_body(b"{}").unwrap_err(), "filename is required");
        assert_eq!(parse_body(b"").unwrap_err(), "filename is required");
    }

    #[test]
    fn test_parse_body_non_string_filename() {
        assert_eq!(
            parse_body(br#"{"filename":42}"#).unwrap_err(),
            "filename is required"
        );
        assert_eq!(
            parse_body(br#"{"filename":""}"#).unwrap_err(),
            "filename is required"
        );
    }
}
