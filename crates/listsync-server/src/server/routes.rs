use crate::codec;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

// ============================================================================
// Health endpoint
// ============================================================================

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

// ============================================================================
// Query endpoints
// ============================================================================

pub async fn get_strings(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.service.strings())
}

/// Same list as `get_strings`, encoded as a base64 JSON payload.
pub async fn get_binary_strings(State(state): State<AppState>) -> impl IntoResponse {
    match codec::encode(&state.service.strings()) {
        Ok(payload) => Json(payload).into_response(),
        Err(e) => {
            tracing::error!("failed to encode snapshot: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

// ============================================================================
// Mutation endpoints
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct ValueRequest {
    pub value: String,
}

/// Blank values are a client mistake and rejected here at the boundary;
/// the service itself accepts anything.
pub async fn add_string(
    State(state): State<AppState>,
    Json(req): Json<ValueRequest>,
) -> impl IntoResponse {
    if req.value.trim().is_empty() {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(serde_json::json!({ "error": "value must not be blank" })),
        )
            .into_response();
    }

    state.service.add_string(req.value);
    Json(true).into_response()
}

pub async fn update_string(
    State(state): State<AppState>,
    Path(index): Path<usize>,
    Json(req): Json<ValueRequest>,
) -> impl IntoResponse {
    match state.service.update_string(index, req.value) {
        Ok(()) => Json(true),
        Err(e) => {
            tracing::debug!("update rejected: {}", e);
            Json(false)
        }
    }
}

pub async fn delete_string(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> impl IntoResponse {
    match state.service.delete_string(index) {
        Ok(removed) => {
            tracing::debug!("removed entry {:?}", removed);
            Json(true)
        }
        Err(e) => {
            tracing::debug!("delete rejected: {}", e);
            Json(false)
        }
    }
}
