//! TaskFlow API
//!
//! HTTP entry point for the task-management service. Today it only answers
//! the liveness probe; domain routes will be mounted here as they land.
//!
//! ## Routes
//!
//! - `GET /health`: `{"status": "OK", "timestamp": "...", "version": "1.0.0"}`

pub mod config;

use axum::Router;
use axum_helpers::server::{create_router, health_router};
use core_config::{AppInfo, app_info};

pub use config::Config;

/// Version reported by `GET /health`. Clients pin on it, so it is fixed here
/// rather than tracking the package version.
pub const API_VERSION: &str = "1.0.0";

/// Binary name with the public API version.
pub fn api_info() -> AppInfo {
    AppInfo {
        version: API_VERSION,
        ..app_info!()
    }
}

/// Build the full application router.
pub fn app(app_info: AppInfo) -> Router {
    create_router(health_router(app_info))
}
