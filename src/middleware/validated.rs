// src/middleware/validated.rs

use std::marker::PhantomData;

use axum::{
    body::Bytes,
    extract::{FromRef, FromRequest, FromRequestParts, RawPathParams, Request},
    http::request::Parts,
};
use serde_json::{Map, Value};

use crate::{
    common::error::{AppError, FieldError},
    config::AppState,
    validation::{self, Validated},
};

// ---
// Extractors que rodam o pipeline de validação antes do handler.
// Qualquer falha rejeita a requisição com `AppError` (400 ou 500).
// ---

/// `id` da rota com forma válida. Não verifica existência (GET por id).
#[derive(Debug, Clone, Copy)]
pub struct RecordId(pub i32);

/// `id` da rota apontando para um registro ativo de `R` (DELETE).
pub struct ExistingId<R>(pub i32, pub PhantomData<fn() -> R>);

/// Corpo de criação validado, convertido e livre de colisões.
pub struct ValidatedBody<R: Validated>(pub R::Input);

/// `id` existente + corpo validado, para updates.
pub struct ValidatedUpdate<R: Validated> {
    pub id: i32,
    pub input: R::Input,
}

async fn path_params<S: Send + Sync>(parts: &mut Parts, state: &S) -> Map<String, Value> {
    // Sem parâmetros capturados, o mapa vazio faz a regra de presença falhar.
    match RawPathParams::from_request_parts(parts, state).await {
        Ok(raw) => raw
            .iter()
            .map(|(key, value)| (key.to_string(), Value::String(value.to_string())))
            .collect(),
        Err(_) => Map::new(),
    }
}

async fn json_object<S: Send + Sync>(req: Request, state: &S) -> Result<Map<String, Value>, AppError> {
    let malformed = || AppError::field(FieldError::malformed_body());

    let bytes = Bytes::from_request(req, state).await.map_err(|_| malformed())?;
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Map::new());
    }

    match serde_json::from_slice::<Value>(&bytes) {
        Ok(Value::Object(map)) => Ok(map),
        _ => Err(malformed()),
    }
}

impl<S> FromRequestParts<S> for RecordId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let params = path_params(parts, state).await;
        validation::validate_id_shape(&params).await.map(RecordId)
    }
}

impl<R, S> FromRequestParts<S> for ExistingId<R>
where
    R: Validated,
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);
        let params = path_params(parts, state).await;
        let id = validation::validate_existing_id::<R>(&app_state, &params).await?;
        Ok(ExistingId(id, PhantomData))
    }
}

impl<R, S> FromRequest<S> for ValidatedBody<R>
where
    R: Validated,
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);
        let body = json_object(req, state).await?;
        let (_, input) = validation::validate_write::<R>(&app_state, None, &body).await?;
        Ok(ValidatedBody(input))
    }
}

impl<R, S> FromRequest<S> for ValidatedUpdate<R>
where
    R: Validated,
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);

        let (mut parts, body) = req.into_parts();
        let params = path_params(&mut parts, state).await;
        let body = json_object(Request::from_parts(parts, body), state).await?;

        let (id, input) = validation::validate_write::<R>(&app_state, Some(&params), &body).await?;
        // Com `params` presente o pipeline sempre devolve o id.
        let id = id.ok_or_else(|| AppError::from(anyhow::anyhow!("update sem id na rota")))?;
        Ok(ValidatedUpdate { id, input })
    }
}
