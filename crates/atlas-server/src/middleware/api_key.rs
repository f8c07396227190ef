//! API-key gate for every route outside the allowlist

use crate::handlers::ApiError;
use atlas_core::{ApiKeyGate, AtlasError, GateDecision, API_KEY_HEADER};
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};

pub async fn require_api_key(
    State(gate): State<ApiKeyGate>,
    request: Request,
    next: Next,
) -> Response {
    let presented = request
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|h| h.to_str().ok());

    let decision = gate.check(request.uri().path(), presented);

    match decision {
        GateDecision::Rejected => {
            tracing::debug!("Rejected {} {}", request.method(), request.uri().path());
            ApiError(AtlasError::Unauthorized).into_response()
        }
        GateDecision::Open | GateDecision::Allowed => next.run(request).await,
    }
}
