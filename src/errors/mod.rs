//! Error handling module for the staff dashboard backend.
//!
//! The frontend contract knows exactly two store failures, read and write,
//! both surfaced as a 500 with a short human-readable message. Failure
//! detail goes to the server log, never to the wire.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    /// The document could not be read or parsed
    Read(String),
    /// The document could not be merged or persisted
    Write(String),
    /// A mock user directory lookup missed
    UserNotFound(String),
}

impl AppError {
    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Read(_) | AppError::Write(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::UserNotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    /// Get the message the frontend displays.
    pub fn message(&self) -> String {
        match self {
            AppError::Read(_) => "Error reading data".to_string(),
            AppError::Write(_) => "Error writing data".to_string(),
            AppError::UserNotFound(steam_id) => {
                format!("No user found with Steam ID {}", steam_id)
            }
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Read(detail) => write!(f, "read error: {}", detail),
            AppError::Write(detail) => write!(f, "write error: {}", detail),
            AppError::UserNotFound(steam_id) => {
                write!(f, "no user with steam id {}", steam_id)
            }
        }
    }
}

impl std::error::Error for AppError {}

/// Message envelope shared by error responses and write acknowledgements.
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageBody {
    pub message: String,
}

impl MessageBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(MessageBody::new(self.message()))).into_response()
    }
}
