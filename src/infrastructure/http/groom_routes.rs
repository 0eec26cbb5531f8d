//! Grooming API routes

use axum::{body::Body, extract::State, Json};
use serde_json::Value;
use std::sync::Arc;
use uuid::Uuid;

use super::body::read_json_body;
use super::ApiError;
use crate::application::dto::GroomResponseDto;
use crate::infrastructure::state::AppState;

/// Groom free-form backlog text into structured items
pub async fn groom(
    State(state): State<Arc<AppState>>,
    body: Body,
) -> Result<Json<GroomResponseDto>, ApiError> {
    let request_id = Uuid::new_v4();

    let payload = read_json_body(body).await.inspect_err(|e| {
        if let ApiError::Io(source) = e {
            tracing::error!("[{}] Failed to read request body: {}", request_id, source);
        }
    })?;
    let text = backlog_text(&payload)?;

    tracing::info!("[{}] Grooming {} chars of backlog text", request_id, text.len());

    let items = state.grooming_service.groom(text).await.map_err(|e| {
        tracing::error!("[{}] Grooming failed: {}", request_id, e);
        ApiError::from(e)
    })?;

    tracing::info!("[{}] Groomed into {} items", request_id, items.len());

    Ok(Json(GroomResponseDto { items }))
}

/// The `text` field, required to be a non-blank string
fn backlog_text(payload: &Value) -> Result<&str, ApiError> {
    payload
        .get("text")
        .and_then(Value::as_str)
        .filter(|text| !text.trim().is_empty())
        .ok_or(ApiError::MissingField)
}
