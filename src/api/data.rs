//! Document endpoints: the whole application state as one JSON blob.

use axum::{extract::State, Json};
use serde_json::{Map, Value};

use crate::errors::{AppError, MessageBody};
use crate::AppState;

/// GET /api/data - Return the full document.
pub async fn get_data(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let document = state.store.read().await?;
    Ok(Json(document))
}

/// POST /api/data - Shallow-merge a patch of top-level keys and persist.
///
/// Non-object bodies are rejected at extraction time.
pub async fn save_data(
    State(state): State<AppState>,
    Json(patch): Json<Map<String, Value>>,
) -> Result<Json<MessageBody>, AppError> {
    state.store.write(patch).await?;
    Ok(Json(MessageBody::new("Data saved successfully")))
}
