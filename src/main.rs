use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use staff_dashboard_backend::config::Config;
use staff_dashboard_backend::mock_users::UserDirectory;
use staff_dashboard_backend::store::JsonStore;
use staff_dashboard_backend::{create_router, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env();

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Staff Dashboard Backend");
    tracing::info!("Data path: {:?}", config.data_path);
    tracing::info!("Bind address: {}", config.bind_addr);

    // Initialize the document store. Fresh checkouts have no document yet;
    // reads never synthesize one, so seed an empty document at startup only.
    let store = Arc::new(JsonStore::new(&config.data_path));
    store.ensure_exists().await?;

    // Generate the synthetic user directory once per process
    let users = Arc::new(UserDirectory::default());
    tracing::info!(
        "Mock user directory generated with {} users",
        users.all().len()
    );

    // Create application state
    let state = AppState { store, users };

    // Build router
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
