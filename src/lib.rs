//! Staff Dashboard Backend
//!
//! REST backend for a role-play community staff dashboard: moderator and
//! event-master rosters, promotion/warning suggestions, and the galaxy
//! conquest map, all persisted as a single flat-file JSON document.

pub mod api;
pub mod config;
pub mod errors;
pub mod mock_users;
pub mod models;
pub mod roles;
pub mod roster;
pub mod store;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use mock_users::UserDirectory;
use store::JsonStore;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<JsonStore>,
    pub users: Arc<UserDirectory>,
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API routes
    let api_routes = Router::new()
        // Document store
        .route("/data", get(api::get_data))
        .route("/data", post(api::save_data))
        // Mock user directory
        .route("/users", get(api::list_users))
        .route("/users/{steam_id}", get(api::get_user));

    // Health check
    let health_routes = Router::new().route("/health", get(health_check));

    Router::new()
        .nest("/api", api_routes)
        .merge(health_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}
