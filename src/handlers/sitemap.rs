use axum::Json;
use serde_json::{Value, json};

use crate::router::ROUTES;

/// GET / -> every endpoint the API serves.
pub async fn sitemap() -> Json<Value> {
    let endpoints: Vec<Value> = ROUTES
        .iter()
        .map(|(method, path)| json!({ "method": method, "path": path }))
        .collect();
    Json(json!({ "endpoints": endpoints }))
}
