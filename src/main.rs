use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use platform_read_api::{config::Config, db::Database, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let config = Config::from_env()?;
    let db = Database::new(&config.mongodb_url, &config.database_name).await?;

    // The driver connects lazily; a failed ping here is logged but not
    // fatal, the store may come up before the first request.
    match db.ping().await {
        Ok(()) => info!("Connected to document store, database {}", db.database_name()),
        Err(e) => warn!("Document store not reachable yet: {e:#}"),
    }

    let state = Arc::new(AppState {
        db,
        config: config.clone(),
    });

    let app = Router::new()
        .route("/api/health", get(platform_read_api::health_check))
        .nest("/licensing", platform_read_api::routes::licensing::router())
        .merge(platform_read_api::swagger::create_swagger_router())
        .layer(CorsLayer::permissive())
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&config.server_address).await?;
    info!("Server starting on {}", config.server_address);

    axum::serve(listener, app).await?;

    Ok(())
}
