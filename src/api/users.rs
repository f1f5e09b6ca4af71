//! Mock user directory endpoints.
//!
//! The directory is synthetic and regenerated per process; it backs the
//! user-search page and nothing else.

use axum::{
    extract::{Path, State},
    Json,
};

use crate::errors::AppError;
use crate::mock_users::UserRecord;
use crate::AppState;

/// GET /api/users - List the synthetic user directory.
pub async fn list_users(State(state): State<AppState>) -> Json<Vec<UserRecord>> {
    Json(state.users.all().to_vec())
}

/// GET /api/users/{steam_id} - Look up a user by exact Steam ID.
pub async fn get_user(
    State(state): State<AppState>,
    Path(steam_id): Path<String>,
) -> Result<Json<UserRecord>, AppError> {
    match state.users.find(&steam_id) {
        Some(user) => Ok(Json(user.clone())),
        None => Err(AppError::UserNotFound(steam_id)),
    }
}
