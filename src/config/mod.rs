//! Configuration module for the staff dashboard backend.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the JSON document file
    pub data_path: PathBuf,
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let data_path = env::var("STAFF_DATA_PATH")
            .unwrap_or_else(|_| "./data/data.json".to_string())
            .into();

        let bind_addr = env::var("STAFF_BIND_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:8080".to_string())
            .parse()
            .expect("Invalid STAFF_BIND_ADDR format");

        let log_level = env::var("STAFF_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Self {
            data_path,
            bind_addr,
            log_level,
        }
    }
}
