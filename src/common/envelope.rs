// src/common/envelope.rs

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{ser::SerializeMap, Serialize, Serializer};

use crate::{common::error::SERVER_ERROR_MESSAGE, models::Resource};

pub const MSG_FOUND_MANY: &str = "Registros encontrados";
pub const MSG_NOT_FOUND_MANY: &str = "No se encontraron registros";
pub const MSG_FOUND: &str = "Registro encontrado";
pub const MSG_NOT_FOUND: &str = "Registro no encontrado";
pub const MSG_CREATED: &str = "Registro creado exitosamente";
pub const MSG_UPDATED: &str = "Registro actualizado exitosamente";
pub const MSG_DELETED: &str = "Registro eliminado exitosamente";

/// O conteúdo de `data`, com as chaves nomeadas pelo recurso.
#[derive(Debug, Clone)]
pub enum ResponseData<R> {
    /// `{ "<plural>": [...], "total": n }`
    List(Vec<R>),
    /// `{ "<singular>": {...} }`
    Record(R),
    /// `{}`
    Empty,
}

impl<R: Resource> Serialize for ResponseData<R> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ResponseData::List(records) => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry(R::PLURAL, records)?;
                map.serialize_entry("total", &records.len())?;
                map.end()
            }
            ResponseData::Record(record) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry(R::SINGULAR, record)?;
                map.end()
            }
            ResponseData::Empty => serializer.serialize_map(Some(0))?.end(),
        }
    }
}

/// Resultado normalizado de uma operação de serviço: `{message, status, data}`.
#[derive(Debug, Clone)]
pub struct ServiceResponse<R> {
    pub message: &'static str,
    pub status: StatusCode,
    pub data: Option<ResponseData<R>>,
}

impl<R: Resource> ServiceResponse<R> {
    pub fn new(message: &'static str, status: StatusCode, data: ResponseData<R>) -> Self {
        Self { message, status, data: Some(data) }
    }

    pub fn server_error() -> Self {
        Self {
            message: SERVER_ERROR_MESSAGE,
            status: StatusCode::INTERNAL_SERVER_ERROR,
            data: None,
        }
    }

    pub fn is_found(&self) -> bool {
        self.status.is_success()
    }

    pub fn is_server_error(&self) -> bool {
        self.status.is_server_error()
    }

    /// O registro único carregado em `data`, se houver.
    pub fn record(&self) -> Option<&R> {
        match &self.data {
            Some(ResponseData::Record(record)) => Some(record),
            _ => None,
        }
    }

    #[cfg(test)]
    pub fn into_record(self) -> Option<R> {
        match self.data {
            Some(ResponseData::Record(record)) => Some(record),
            _ => None,
        }
    }

    /// Respostas de exclusão só carregam a mensagem.
    pub fn without_data(mut self) -> Self {
        self.data = None;
        self
    }
}

#[derive(Serialize)]
struct Envelope<'a, R: Resource> {
    message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<&'a ResponseData<R>>,
}

impl<R: Resource> IntoResponse for ServiceResponse<R> {
    fn into_response(self) -> Response {
        let body = Envelope {
            message: self.message,
            data: self.data.as_ref(),
        };
        (self.status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, CategoryInput, RecordMeta};
    use chrono::Utc;
    use serde_json::json;

    fn category(id: i32, name: &str) -> Category {
        let input = CategoryInput { name: name.to_string(), status: None };
        Category::from_input(id, &input, RecordMeta::new(Utc::now()))
    }

    #[test]
    fn list_uses_plural_key_and_total() {
        let data = ResponseData::List(vec![category(1, "A"), category(2, "B")]);
        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(json["total"], 2);
        assert_eq!(json["categories"][1]["name"], "B");
    }

    #[test]
    fn empty_list_still_reports_zero_total() {
        let data: ResponseData<Category> = ResponseData::List(Vec::new());
        assert_eq!(serde_json::to_value(&data).unwrap(), json!({ "categories": [], "total": 0 }));
    }

    #[test]
    fn single_record_uses_singular_key() {
        let json = serde_json::to_value(ResponseData::Record(category(3, "C"))).unwrap();
        assert_eq!(json["category"]["id"], 3);
        assert_eq!(json["category"]["status"], true);
    }

    #[test]
    fn empty_serializes_as_object() {
        let data: ResponseData<Category> = ResponseData::Empty;
        assert_eq!(serde_json::to_value(&data).unwrap(), json!({}));
    }
}
