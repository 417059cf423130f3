// src/handlers/areas.rs

use axum::{extract::State, response::IntoResponse, routing::get, Router};

use crate::{
    config::AppState,
    middleware::{ExistingId, RecordId, ValidatedBody, ValidatedUpdate},
    models::{Area, AreaInput},
    services::ResourceService,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_all).post(create))
        .route("/{id}", get(get_one).put(update).delete(delete))
}

#[utoipa::path(
    get,
    path = "/api/v1/areas",
    tag = "Areas",
    responses(
        (status = 200, description = "Registros encontrados", body = [Area]),
        (status = 404, description = "No se encontraron registros"),
        (status = 500, description = "Error del servidor")
    )
)]
pub async fn get_all(State(service): State<ResourceService<Area>>) -> impl IntoResponse {
    service.get_all().await
}

#[utoipa::path(
    get,
    path = "/api/v1/areas/{id}",
    tag = "Areas",
    params(("id" = i32, Path, description = "ID da área")),
    responses(
        (status = 200, description = "Registro encontrado", body = Area),
        (status = 400, description = "id inválido"),
        (status = 404, description = "Registro no encontrado")
    )
)]
pub async fn get_one(
    State(service): State<ResourceService<Area>>,
    RecordId(id): RecordId,
) -> impl IntoResponse {
    service.get_by_id(id).await
}

#[utoipa::path(
    post,
    path = "/api/v1/areas",
    tag = "Areas",
    request_body = AreaInput,
    responses(
        (status = 201, description = "Registro creado exitosamente", body = Area),
        (status = 400, description = "Errores de validación")
    )
)]
pub async fn create(
    State(service): State<ResourceService<Area>>,
    ValidatedBody(input): ValidatedBody<Area>,
) -> impl IntoResponse {
    service.create(&input).await
}

#[utoipa::path(
    put,
    path = "/api/v1/areas/{id}",
    tag = "Areas",
    request_body = AreaInput,
    params(("id" = i32, Path, description = "ID da área")),
    responses(
        (status = 200, description = "Registro actualizado exitosamente", body = Area),
        (status = 400, description = "Errores de validación o id inexistente")
    )
)]
pub async fn update(
    State(service): State<ResourceService<Area>>,
    ValidatedUpdate { id, input }: ValidatedUpdate<Area>,
) -> impl IntoResponse {
    service.update(id, &input).await
}

#[utoipa::path(
    delete,
    path = "/api/v1/areas/{id}",
    tag = "Areas",
    params(("id" = i32, Path, description = "ID da área")),
    responses(
        (status = 204, description = "Registro eliminado exitosamente"),
        (status = 400, description = "id inexistente")
    )
)]
pub async fn delete(
    State(service): State<ResourceService<Area>>,
    ExistingId(id, _): ExistingId<Area>,
) -> impl IntoResponse {
    service.delete(id).await.without_data()
}
