// src/handlers/ping.rs

use axum::{routing::get, Json, Router};
use serde_json::{json, Value};

use crate::config::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(ping))
}

#[utoipa::path(
    get,
    path = "/api/v1/test",
    tag = "Test",
    responses((status = 200, description = "API en línea"))
)]
pub async fn ping() -> Json<Value> {
    Json(json!({ "message": "API funcionando correctamente" }))
}
