// src/models/record.rs

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

// ---
// Campos de ciclo de vida comuns a todas as tabelas
// ---
// Um registro é "visível" apenas enquanto status = true. A exclusão é lógica.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow, ToSchema)]
pub struct RecordMeta {
    #[schema(example = true)]
    pub status: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl RecordMeta {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            status: true,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    pub fn touch(&mut self, status: bool, now: DateTime<Utc>) {
        self.status = status;
        self.updated_at = now;
    }

    pub fn soft_delete(&mut self, now: DateTime<Utc>) {
        self.status = false;
        self.deleted_at = Some(now);
    }
}

/// Campo usado nas buscas de unicidade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupField {
    Name,
    Username,
    Email,
}

impl LookupField {
    pub fn column(self) -> &'static str {
        match self {
            LookupField::Name => "name",
            LookupField::Username => "username",
            LookupField::Email => "email",
        }
    }

    /// Nome e username comparam sem diferenciar maiúsculas; email é exato.
    pub fn case_insensitive(self) -> bool {
        !matches!(self, LookupField::Email)
    }

    pub fn matches(self, stored: &str, candidate: &str) -> bool {
        if self.case_insensitive() {
            stored.to_lowercase() == candidate.to_lowercase()
        } else {
            stored == candidate
        }
    }
}

/// Um tipo de recurso do inventário (área, categoria, produto...).
///
/// `SINGULAR` e `PLURAL` são as chaves usadas no envelope `data` das respostas.
pub trait Resource: Clone + Serialize + Send + Sync + Unpin + 'static {
    type Input: Clone + Send + Sync + 'static;

    const TABLE: &'static str;
    const SINGULAR: &'static str;
    const PLURAL: &'static str;

    fn id(&self) -> i32;
    fn meta(&self) -> &RecordMeta;
    fn meta_mut(&mut self) -> &mut RecordMeta;

    /// Monta um registro novo a partir do payload (id e datas vêm do store).
    fn from_input(id: i32, input: &Self::Input, meta: RecordMeta) -> Self;

    /// Substitui os campos declarados pelo payload.
    fn apply_input(&mut self, input: &Self::Input);

    /// Valor do campo de unicidade, se o recurso o possuir.
    fn lookup_value(&self, field: LookupField) -> Option<&str>;

    /// `status` enviado pelo cliente no payload, se houver.
    fn requested_status(input: &Self::Input) -> Option<bool>;

    fn is_active(&self) -> bool {
        self.meta().status
    }
}
