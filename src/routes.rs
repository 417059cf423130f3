// src/routes.rs

use axum::{routing::get, Json, Router};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use utoipa::OpenApi;

use crate::{config::AppState, docs::ApiDoc, handlers};

pub const API_PREFIX: &str = "/api/v1";

/// Router completo: recursos sob `/api/v1`, documento OpenAPI e arquivos estáticos.
pub fn app(state: AppState, public_dir: &str) -> Router {
    let api = Router::new()
        .nest("/test", handlers::ping::router())
        .nest("/areas", handlers::areas::router())
        .nest("/categories", handlers::categories::router())
        .nest("/products", handlers::products::router())
        .nest("/roles", handlers::roles::router())
        .nest("/users", handlers::users::router())
        .nest("/warehouses", handlers::warehouses::router());

    Router::new()
        .nest(API_PREFIX, api)
        .route("/api-docs/openapi.json", get(|| async { Json(ApiDoc::openapi()) }))
        .fallback_service(ServeDir::new(public_dir))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
