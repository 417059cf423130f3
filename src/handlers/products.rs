// src/handlers/products.rs

use axum::{extract::State, response::IntoResponse, routing::get, Router};

use crate::{
    config::AppState,
    middleware::{ExistingId, RecordId, ValidatedBody, ValidatedUpdate},
    models::{Product, ProductInput},
    services::ResourceService,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_all).post(create))
        .route("/{id}", get(get_one).put(update).delete(delete))
}

#[utoipa::path(
    get,
    path = "/api/v1/products",
    tag = "Products",
    responses(
        (status = 200, description = "Registros encontrados", body = [Product]),
        (status = 404, description = "No se encontraron registros"),
        (status = 500, description = "Error del servidor")
    )
)]
pub async fn get_all(State(service): State<ResourceService<Product>>) -> impl IntoResponse {
    service.get_all().await
}

#[utoipa::path(
    get,
    path = "/api/v1/products/{id}",
    tag = "Products",
    params(("id" = i32, Path, description = "ID do produto")),
    responses(
        (status = 200, description = "Registro encontrado", body = Product),
        (status = 400, description = "id inválido"),
        (status = 404, description = "Registro no encontrado")
    )
)]
pub async fn get_one(
    State(service): State<ResourceService<Product>>,
    RecordId(id): RecordId,
) -> impl IntoResponse {
    service.get_by_id(id).await
}

#[utoipa::path(
    post,
    path = "/api/v1/products",
    tag = "Products",
    request_body = ProductInput,
    responses(
        (status = 201, description = "Registro creado exitosamente", body = Product),
        (status = 400, description = "Errores de validación")
    )
)]
pub async fn create(
    State(service): State<ResourceService<Product>>,
    ValidatedBody(input): ValidatedBody<Product>,
) -> impl IntoResponse {
    service.create(&input).await
}

#[utoipa::path(
    put,
    path = "/api/v1/products/{id}",
    tag = "Products",
    request_body = ProductInput,
    params(("id" = i32, Path, description = "ID do produto")),
    responses(
        (status = 200, description = "Registro actualizado exitosamente", body = Product),
        (status = 400, description = "Errores de validación o id inexistente")
    )
)]
pub async fn update(
    State(service): State<ResourceService<Product>>,
    ValidatedUpdate { id, input }: ValidatedUpdate<Product>,
) -> impl IntoResponse {
    service.update(id, &input).await
}

#[utoipa::path(
    delete,
    path = "/api/v1/products/{id}",
    tag = "Products",
    params(("id" = i32, Path, description = "ID do produto")),
    responses(
        (status = 204, description = "Registro eliminado exitosamente"),
        (status = 400, description = "id inexistente")
    )
)]
pub async fn delete(
    State(service): State<ResourceService<Product>>,
    ExistingId(id, _): ExistingId<Product>,
) -> impl IntoResponse {
    service.delete(id).await.without_data()
}
