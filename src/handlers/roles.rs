// src/handlers/roles.rs

use axum::{extract::State, response::IntoResponse, routing::get, Router};

use crate::{
    config::AppState,
    middleware::{ExistingId, RecordId, ValidatedBody, ValidatedUpdate},
    models::{Role, RoleInput},
    services::ResourceService,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_all).post(create))
        .route("/{id}", get(get_one).put(update).delete(delete))
}

#[utoipa::path(
    get,
    path = "/api/v1/roles",
    tag = "Roles",
    responses(
        (status = 200, description = "Registros encontrados", body = [Role]),
        (status = 404, description = "No se encontraron registros"),
        (status = 500, description = "Error del servidor")
    )
)]
pub async fn get_all(State(service): State<ResourceService<Role>>) -> impl IntoResponse {
    service.get_all().await
}

#[utoipa::path(
    get,
    path = "/api/v1/roles/{id}",
    tag = "Roles",
    params(("id" = i32, Path, description = "ID do papel")),
    responses(
        (status = 200, description = "Registro encontrado", body = Role),
        (status = 400, description = "id inválido"),
        (status = 404, description = "Registro no encontrado")
    )
)]
pub async fn get_one(
    State(service): State<ResourceService<Role>>,
    RecordId(id): RecordId,
) -> impl IntoResponse {
    service.get_by_id(id).await
}

#[utoipa::path(
    post,
    path = "/api/v1/roles",
    tag = "Roles",
    request_body = RoleInput,
    responses(
        (status = 201, description = "Registro creado exitosamente", body = Role),
        (status = 400, description = "Errores de validación")
    )
)]
pub async fn create(
    State(service): State<ResourceService<Role>>,
    ValidatedBody(input): ValidatedBody<Role>,
) -> impl IntoResponse {
    service.create(&input).await
}

#[utoipa::path(
    put,
    path = "/api/v1/roles/{id}",
    tag = "Roles",
    request_body = RoleInput,
    params(("id" = i32, Path, description = "ID do papel")),
    responses(
        (status = 200, description = "Registro actualizado exitosamente", body = Role),
        (status = 400, description = "Errores de validación o id inexistente")
    )
)]
pub async fn update(
    State(service): State<ResourceService<Role>>,
    ValidatedUpdate { id, input }: ValidatedUpdate<Role>,
) -> impl IntoResponse {
    service.update(id, &input).await
}

#[utoipa::path(
    delete,
    path = "/api/v1/roles/{id}",
    tag = "Roles",
    params(("id" = i32, Path, description = "ID do papel")),
    responses(
        (status = 204, description = "Registro eliminado exitosamente"),
        (status = 400, description = "id inexistente")
    )
)]
pub async fn delete(
    State(service): State<ResourceService<Role>>,
    ExistingId(id, _): ExistingId<Role>,
) -> impl IntoResponse {
    service.delete(id).await.without_data()
}
