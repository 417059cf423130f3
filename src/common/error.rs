// src/common/error.rs

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::{json, Value};
use thiserror::Error;

/// Mensagem genérica devolvida em qualquer falha interna (nunca vaza detalhes).
pub const SERVER_ERROR_MESSAGE: &str = "Por favor contacte al administrador";

// ---
// Erros de campo (formato do express-validator)
// ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldErrorKind {
    Field,
    UnknownFields,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    Body,
    Params,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    #[serde(rename = "type")]
    pub kind: FieldErrorKind,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,

    pub msg: String,
    pub path: String,
    pub location: Location,
}

impl FieldError {
    pub fn new(path: &str, location: Location, value: Option<&Value>, msg: impl Into<String>) -> Self {
        Self {
            kind: FieldErrorKind::Field,
            value: value.cloned(),
            msg: msg.into(),
            path: path.to_string(),
            location,
        }
    }

    pub fn unknown_field(path: &str, value: &Value) -> Self {
        Self {
            kind: FieldErrorKind::UnknownFields,
            value: Some(value.clone()),
            msg: "Campo no permitido".to_string(),
            path: path.to_string(),
            location: Location::Body,
        }
    }

    /// Corpo que não é um objeto JSON válido.
    pub fn malformed_body() -> Self {
        Self::new(
            "",
            Location::Body,
            None,
            "El cuerpo de la solicitud debe ser un objeto JSON válido",
        )
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação ({} campo(s))", .0.len())]
    Validation(Vec<FieldError>),

    #[error("Erro de banco de dados: {0}")]
    Database(#[from] sqlx::Error),

    // Variante genérica para qualquer outro erro inesperado
    #[error("Erro interno do servidor: {0}")]
    InternalServerError(#[from] anyhow::Error),
}

impl AppError {
    pub fn field(error: FieldError) -> Self {
        AppError::Validation(vec![error])
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(errors) => {
                tracing::debug!("Requisição rejeitada pela validação: {:?}", errors);
                (StatusCode::BAD_REQUEST, Json(json!({ "errors": errors }))).into_response()
            }
            // Banco e erros internos viram 500 com a mensagem genérica.
            ref e => {
                tracing::error!("Erro Interno do Servidor: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "message": SERVER_ERROR_MESSAGE })),
                )
                    .into_response()
            }
        }
    }
}
