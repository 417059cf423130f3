// src/handlers/categories.rs

use axum::{extract::State, response::IntoResponse, routing::get, Router};

use crate::{
    config::AppState,
    middleware::{ExistingId, RecordId, ValidatedBody, ValidatedUpdate},
    models::{Category, CategoryInput},
    services::ResourceService,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_all).post(create))
        .route("/{id}", get(get_one).put(update).delete(delete))
}

#[utoipa::path(
    get,
    path = "/api/v1/categories",
    tag = "Categories",
    responses(
        (status = 200, description = "Registros encontrados", body = [Category]),
        (status = 404, description = "No se encontraron registros"),
        (status = 500, description = "Error del servidor")
    )
)]
pub async fn get_all(State(service): State<ResourceService<Category>>) -> impl IntoResponse {
    service.get_all().await
}

#[utoipa::path(
    get,
    path = "/api/v1/categories/{id}",
    tag = "Categories",
    params(("id" = i32, Path, description = "ID da categoria")),
    responses(
        (status = 200, description = "Registro encontrado", body = Category),
        (status = 400, description = "id inválido"),
        (status = 404, description = "Registro no encontrado")
    )
)]
pub async fn get_one(
    State(service): State<ResourceService<Category>>,
    RecordId(id): RecordId,
) -> impl IntoResponse {
    service.get_by_id(id).await
}

#[utoipa::path(
    post,
    path = "/api/v1/categories",
    tag = "Categories",
    request_body = CategoryInput,
    responses(
        (status = 201, description = "Registro creado exitosamente", body = Category),
        (status = 400, description = "Errores de validación")
    )
)]
pub async fn create(
    State(service): State<ResourceService<Category>>,
    ValidatedBody(input): ValidatedBody<Category>,
) -> impl IntoResponse {
    service.create(&input).await
}

#[utoipa::path(
    put,
    path = "/api/v1/categories/{id}",
    tag = "Categories",
    request_body = CategoryInput,
    params(("id" = i32, Path, description = "ID da categoria")),
    responses(
        (status = 200, description = "Registro actualizado exitosamente", body = Category),
        (status = 400, description = "Errores de validación o id inexistente")
    )
)]
pub async fn update(
    State(service): State<ResourceService<Category>>,
    ValidatedUpdate { id, input }: ValidatedUpdate<Category>,
) -> impl IntoResponse {
    service.update(id, &input).await
}

#[utoipa::path(
    delete,
    path = "/api/v1/categories/{id}",
    tag = "Categories",
    params(("id" = i32, Path, description = "ID da categoria")),
    responses(
        (status = 204, description = "Registro eliminado exitosamente"),
        (status = 400, description = "id inexistente")
    )
)]
pub async fn delete(
    State(service): State<ResourceService<Category>>,
    ExistingId(id, _): ExistingId<Category>,
) -> impl IntoResponse {
    service.delete(id).await.without_data()
}
