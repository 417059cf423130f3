// src/db/memory_store.rs

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Mutex,
};

use async_trait::async_trait;
use chrono::Utc;

use crate::{
    common::error::AppError,
    db::store::RecordStore,
    models::{LookupField, RecordMeta, Resource},
};

/// Store em memória usado pelos testes no lugar do Postgres.
///
/// `set_failing(true)` faz toda operação falhar como se a pool estivesse fora.
pub struct MemoryStore<R> {
    rows: Mutex<Vec<R>>,
    failing: AtomicBool,
}

impl<R: Resource> MemoryStore<R> {
    pub fn new() -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            failing: AtomicBool::new(false),
        }
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Todas as linhas, inclusive as excluídas logicamente.
    pub fn raw_rows(&self) -> Vec<R> {
        self.lock().clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<R>> {
        // Um teste que entrou em pânico segurando o lock não invalida os dados.
        self.rows.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn check_available(&self) -> Result<(), AppError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(AppError::Database(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

impl<R: Resource> Default for MemoryStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<R: Resource> RecordStore<R> for MemoryStore<R> {
    async fn find_all_active(&self) -> Result<Vec<R>, AppError> {
        self.check_available()?;
        Ok(self.lock().iter().filter(|r| r.is_active()).cloned().collect())
    }

    async fn find_active_by_id(&self, id: i32) -> Result<Option<R>, AppError> {
        self.check_available()?;
        Ok(self
            .lock()
            .iter()
            .find(|r| r.id() == id && r.is_active())
            .cloned())
    }

    async fn find_active_by_field(
        &self,
        field: LookupField,
        value: &str,
    ) -> Result<Option<R>, AppError> {
        self.check_available()?;
        Ok(self
            .lock()
            .iter()
            .filter(|r| r.is_active())
            .find(|r| r.lookup_value(field).is_some_and(|stored| field.matches(stored, value)))
            .cloned())
    }

    async fn insert(&self, input: &R::Input) -> Result<R, AppError> {
        self.check_available()?;
        let mut rows = self.lock();
        let id = rows.iter().map(|r| r.id()).max().unwrap_or(0) + 1;
        let record = R::from_input(id, input, RecordMeta::new(Utc::now()));
        rows.push(record.clone());
        Ok(record)
    }

    async fn replace(&self, id: i32, input: &R::Input, status: bool) -> Result<R, AppError> {
        self.check_available()?;
        let mut rows = self.lock();
        let record = rows
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or(AppError::Database(sqlx::Error::RowNotFound))?;
        record.apply_input(input);
        record.meta_mut().touch(status, Utc::now());
        Ok(record.clone())
    }

    async fn soft_delete(&self, id: i32) -> Result<R, AppError> {
        self.check_available()?;
        let mut rows = self.lock();
        let record = rows
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or(AppError::Database(sqlx::Error::RowNotFound))?;
        record.meta_mut().soft_delete(Utc::now());
        Ok(record.clone())
    }
}
