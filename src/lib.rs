pub mod config;
pub mod db;
pub mod errors;
pub mod routes;
pub mod swagger;

#[cfg(test)]
mod tests;

use axum::{http::StatusCode, Json};

use config::Config;
use db::Database;

#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub config: Config,
}

/// Health check endpoint for monitoring
pub async fn health_check() -> Result<Json<serde_json::Value>, StatusCode> {
    Ok(Json(serde_json::json!({"status": "ok"})))
}
