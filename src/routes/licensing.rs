use axum::{extract::State, routing::get, Json, Router};
use mongodb::bson::Document;
use std::sync::Arc;

use crate::{db::documents::LICENSING_COLLECTION, errors::ApiError, AppState};

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/", get(dump_licensing))
}

#[utoipa::path(
    get,
    path = "/licensing",
    tag = "licensing",
    responses(
        (status = 200, description = "Every licensing document, with the store identifier removed"),
        (status = 500, description = "Document store unreachable or the read failed")
    )
)]
pub async fn dump_licensing(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Document>>, ApiError> {
    let documents = state.db.dump_collection(LICENSING_COLLECTION).await?;
    Ok(Json(documents))
}
