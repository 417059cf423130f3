// src/db/store.rs

use async_trait::async_trait;

use crate::{
    common::error::AppError,
    models::{LookupField, Resource},
};

/// Capacidades de armazenamento usadas pelos serviços.
///
/// Toda leitura enxerga apenas registros ativos (`status = true`). Escritas
/// nunca removem linhas: `soft_delete` só desliga o status e carimba `deleted_at`.
#[async_trait]
pub trait RecordStore<R: Resource>: Send + Sync {
    async fn find_all_active(&self) -> Result<Vec<R>, AppError>;

    async fn find_active_by_id(&self, id: i32) -> Result<Option<R>, AppError>;

    async fn find_active_by_field(
        &self,
        field: LookupField,
        value: &str,
    ) -> Result<Option<R>, AppError>;

    /// Insere um registro novo; id e datas ficam por conta do store.
    async fn insert(&self, input: &R::Input) -> Result<R, AppError>;

    /// Substitui os campos declarados e recarimba `updated_at`.
    async fn replace(&self, id: i32, input: &R::Input, status: bool) -> Result<R, AppError>;

    async fn soft_delete(&self, id: i32) -> Result<R, AppError>;
}
