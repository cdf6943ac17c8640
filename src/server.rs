use axum::Router;
use axum::http::StatusCode;
use axum::routing::post;
use bytes::Bytes;

use crate::csp::Csp;

/// Build the application router. `POST /report` is the only route; any
/// other method on it dispatches to 405, any other path to the 404
/// fallback.
pub fn app() -> Router {
    Router::new()
        .route("/report", post(report))
        .fallback(not_found)
}

async fn report(body: Bytes) -> StatusCode {
    let csp: Csp = match serde_json::from_slice(&body) {
        Ok(csp) => csp,
        Err(err) => {
            tracing::error!(error = %err, "decode json payload failed");
            return StatusCode::INTERNAL_SERVER_ERROR;
        }
    };

    tracing::info!(
        "document-uri" = %csp.report.document_uri,
        "referrer" = %csp.report.referrer,
        "violated-directive" = %csp.report.violated_directive,
        "original-policy" = %csp.report.original_policy,
        "blocked-uri" = %csp.report.blocked_uri,
        "new content security policy violation received"
    );

    StatusCode::OK
}

async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "404 page not found\n")
}
