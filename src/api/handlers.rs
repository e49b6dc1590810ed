//! API handlers

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::api::AppState;
use crate::types::{creation_time, CreatedResponse, ErrorResponse, NewRecord, Record};
use crate::Error;

const REDACTED_MESSAGE: &str = "internal server error";

/// Health check with backend name
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        backend: state.backend().to_string(),
    })
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub backend: String,
}

/// List every item in the collection
pub async fn list_items(State(state): State<AppState>) -> Result<Json<Vec<Record>>, ApiError> {
    let records = state
        .store
        .list_all()
        .await
        .map_err(|e| storage_failure(&state, "list", e))?;

    Ok(Json(records))
}

/// Create an item
///
/// The body is rejected as a whole when it does not decode into [`NewRecord`];
/// nothing is written in that case.
pub async fn create_item(
    State(state): State<AppState>,
    payload: Result<Json<NewRecord>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    let Json(new_record) = payload.map_err(|rejection| {
        tracing::debug!(error = %rejection.body_text(), "Rejected create request body");
        ApiError::bad_request(rejection.body_text())
    })?;

    let record = new_record.into_record(creation_time());

    let id = state
        .store
        .insert_one(record)
        .await
        .map_err(|e| storage_failure(&state, "create", e))?;

    tracing::debug!(%id, "Created item");

    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}

fn storage_failure(state: &AppState, operation: &'static str, err: Error) -> ApiError {
    tracing::error!(operation, error = %err, "Storage operation failed");

    if state.expose_errors {
        ApiError::internal(err.to_string())
    } else {
        ApiError::internal(REDACTED_MESSAGE)
    }
}

/// Error response carrying a status code and an `{"error": ...}` body.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: msg.into(),
        }
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: msg.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(ErrorResponse {
            error: self.message,
        });
        (self.status, body).into_response()
    }
}
