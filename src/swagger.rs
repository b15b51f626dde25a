use axum::{routing::get, Json, Router};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(crate::routes::licensing::dump_licensing),
    tags(
        (name = "licensing", description = "Licensing collection dump"),
    ),
    info(
        title = "Performance Platform Read API",
        description = "Read-only access to the performance platform document store"
    )
)]
pub struct ApiDoc;

pub fn create_swagger_router() -> Router<Arc<AppState>> {
    Router::new().route("/api-docs/openapi.json", get(openapi_json))
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
