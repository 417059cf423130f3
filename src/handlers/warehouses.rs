// src/handlers/warehouses.rs

use axum::{extract::State, response::IntoResponse, routing::get, Router};

use crate::{
    config::AppState,
    middleware::{ExistingId, RecordId, ValidatedBody, ValidatedUpdate},
    models::{Warehouse, WarehouseInput},
    services::ResourceService,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_all).post(create))
        .route("/{id}", get(get_one).put(update).delete(delete))
}

#[utoipa::path(
    get,
    path = "/api/v1/warehouses",
    tag = "Warehouses",
    responses(
        (status = 200, description = "Registros encontrados", body = [Warehouse]),
        (status = 404, description = "No se encontraron registros"),
        (status = 500, description = "Error del servidor")
    )
)]
pub async fn get_all(State(service): State<ResourceService<Warehouse>>) -> impl IntoResponse {
    service.get_all().await
}

#[utoipa::path(
    get,
    path = "/api/v1/warehouses/{id}",
    tag = "Warehouses",
    params(("id" = i32, Path, description = "ID do armazém")),
    responses(
        (status = 200, description = "Registro encontrado", body = Warehouse),
        (status = 400, description = "id inválido"),
        (status = 404, description = "Registro no encontrado")
    )
)]
pub async fn get_one(
    State(service): State<ResourceService<Warehouse>>,
    RecordId(id): RecordId,
) -> impl IntoResponse {
    service.get_by_id(id).await
}

#[utoipa::path(
    post,
    path = "/api/v1/warehouses",
    tag = "Warehouses",
    request_body = WarehouseInput,
    responses(
        (status = 201, description = "Registro creado exitosamente", body = Warehouse),
        (status = 400, description = "Errores de validación")
    )
)]
pub async fn create(
    State(service): State<ResourceService<Warehouse>>,
    ValidatedBody(input): ValidatedBody<Warehouse>,
) -> impl IntoResponse {
    service.create(&input).await
}

#[utoipa::path(
    put,
    path = "/api/v1/warehouses/{id}",
    tag = "Warehouses",
    request_body = WarehouseInput,
    params(("id" = i32, Path, description = "ID do armazém")),
    responses(
        (status = 200, description = "Registro actualizado exitosamente", body = Warehouse),
        (status = 400, description = "Errores de validación o id inexistente")
    )
)]
pub async fn update(
    State(service): State<ResourceService<Warehouse>>,
    ValidatedUpdate { id, input }: ValidatedUpdate<Warehouse>,
) -> impl IntoResponse {
    service.update(id, &input).await
}

#[utoipa::path(
    delete,
    path = "/api/v1/warehouses/{id}",
    tag = "Warehouses",
    params(("id" = i32, Path, description = "ID do armazém")),
    responses(
        (status = 204, description = "Registro eliminado exitosamente"),
        (status = 400, description = "id inexistente")
    )
)]
pub async fn delete(
    State(service): State<ResourceService<Warehouse>>,
    ExistingId(id, _): ExistingId<Warehouse>,
) -> impl IntoResponse {
    // Exclusão lógica; a resposta só leva a mensagem.
    service.delete(id).await.without_data()
}
