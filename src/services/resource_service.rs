// src/services/resource_service.rs

use std::sync::Arc;

use axum::http::StatusCode;

use crate::{
    common::envelope::{
        ResponseData, ServiceResponse, MSG_CREATED, MSG_DELETED, MSG_FOUND, MSG_FOUND_MANY,
        MSG_NOT_FOUND, MSG_NOT_FOUND_MANY, MSG_UPDATED,
    },
    db::RecordStore,
    models::{LookupField, Resource},
};

/// Fachada CRUD de um recurso sobre o `RecordStore`.
///
/// Nenhuma operação devolve `Err`: falhas do store são logadas e viram a
/// resposta genérica 500. Não há retry.
#[derive(Clone)]
pub struct ResourceService<R: Resource> {
    store: Arc<dyn RecordStore<R>>,
}

impl<R: Resource> ResourceService<R> {
    pub fn new(store: Arc<dyn RecordStore<R>>) -> Self {
        Self { store }
    }

    // --- GET ALL ---
    pub async fn get_all(&self) -> ServiceResponse<R> {
        match self.store.find_all_active().await {
            Ok(records) if records.is_empty() => ServiceResponse::new(
                MSG_NOT_FOUND_MANY,
                StatusCode::NOT_FOUND,
                ResponseData::List(records),
            ),
            Ok(records) => {
                ServiceResponse::new(MSG_FOUND_MANY, StatusCode::OK, ResponseData::List(records))
            }
            Err(e) => Self::fail("get_all", e),
        }
    }

    // --- GET BY ID ---
    pub async fn get_by_id(&self, id: i32) -> ServiceResponse<R> {
        match self.store.find_active_by_id(id).await {
            Ok(found) => Self::lookup(found),
            Err(e) => Self::fail("get_by_id", e),
        }
    }

    // --- CREATE ---
    pub async fn create(&self, input: &R::Input) -> ServiceResponse<R> {
        match self.store.insert(input).await {
            Ok(record) => {
                tracing::info!("{} #{} criado", R::SINGULAR, record.id());
                ServiceResponse::new(MSG_CREATED, StatusCode::CREATED, ResponseData::Record(record))
            }
            Err(e) => Self::fail("create", e),
        }
    }

    // --- UPDATE ---
    // Status omitido no payload volta para `true`.
    pub async fn update(&self, id: i32, input: &R::Input) -> ServiceResponse<R> {
        let status = R::requested_status(input).unwrap_or(true);
        match self.store.replace(id, input, status).await {
            Ok(record) => {
                ServiceResponse::new(MSG_UPDATED, StatusCode::OK, ResponseData::Record(record))
            }
            Err(e) => Self::fail("update", e),
        }
    }

    // --- DELETE (lógico) ---
    pub async fn delete(&self, id: i32) -> ServiceResponse<R> {
        match self.store.soft_delete(id).await {
            Ok(record) => {
                tracing::info!("{} #{} excluído (soft delete)", R::SINGULAR, record.id());
                ServiceResponse::new(MSG_DELETED, StatusCode::NO_CONTENT, ResponseData::Record(record))
            }
            Err(e) => Self::fail("delete", e),
        }
    }

    // ---
    // Buscas usadas exclusivamente pelos validadores
    // ---

    async fn get_by_field(&self, field: LookupField, value: &str) -> ServiceResponse<R> {
        match self.store.find_active_by_field(field, value).await {
            Ok(found) => Self::lookup(found),
            Err(e) => Self::fail("get_by_field", e),
        }
    }

    pub async fn get_by_name(&self, name: &str) -> ServiceResponse<R> {
        self.get_by_field(LookupField::Name, name).await
    }

    pub async fn get_by_email(&self, email: &str) -> ServiceResponse<R> {
        self.get_by_field(LookupField::Email, email).await
    }

    pub async fn get_by_username(&self, username: &str) -> ServiceResponse<R> {
        self.get_by_field(LookupField::Username, username).await
    }

    fn lookup(found: Option<R>) -> ServiceResponse<R> {
        match found {
            Some(record) => {
                ServiceResponse::new(MSG_FOUND, StatusCode::OK, ResponseData::Record(record))
            }
            None => ServiceResponse::new(MSG_NOT_FOUND, StatusCode::NOT_FOUND, ResponseData::Empty),
        }
    }

    fn fail(operation: &str, error: crate::common::error::AppError) -> ServiceResponse<R> {
        tracing::error!("Falha no store de {} durante {}: {}", R::TABLE, operation, error);
        ServiceResponse::server_error()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        db::MemoryStore,
        models::{Category, CategoryInput, User, UserInput},
    };

    fn category_service() -> (Arc<MemoryStore<Category>>, ResourceService<Category>) {
        let store = Arc::new(MemoryStore::<Category>::new());
        (store.clone(), ResourceService::new(store))
    }

    fn named(name: &str) -> CategoryInput {
        CategoryInput { name: name.to_string(), status: None }
    }

    #[tokio::test]
    async fn get_all_on_empty_store_is_not_found_with_zero_total() {
        let (_, service) = category_service();
        let response = service.get_all().await;

        assert_eq!(response.status, StatusCode::NOT_FOUND);
        assert_eq!(response.message, MSG_NOT_FOUND_MANY);
        let json = serde_json::to_value(response.data.unwrap()).unwrap();
        assert_eq!(json, serde_json::json!({ "categories": [], "total": 0 }));
    }

    #[tokio::test]
    async fn get_all_lists_only_active_records() {
        let (_, service) = category_service();
        service.create(&named("A")).await;
        service.create(&named("B")).await;
        service.delete(1).await;

        let response = service.get_all().await;
        assert_eq!(response.status, StatusCode::OK);
        match response.data {
            Some(ResponseData::List(records)) => {
                assert_eq!(records.len(), 1);
                assert_eq!(records[0].name, "B");
            }
            other => panic!("esperava lista, veio {other:?}"),
        }
    }

    #[tokio::test]
    async fn create_assigns_id_and_reports_created() {
        let (_, service) = category_service();
        let response = service.create(&named("Electronics")).await;

        assert_eq!(response.status, StatusCode::CREATED);
        assert_eq!(response.message, MSG_CREATED);
        let record = response.record().unwrap();
        assert_eq!(record.id, 1);
        assert!(record.meta.status);
    }

    #[tokio::test]
    async fn delete_then_get_is_not_found_but_row_remains() {
        let (store, service) = category_service();
        service.create(&named("Electronics")).await;

        let deleted = service.delete(1).await;
        assert_eq!(deleted.status, StatusCode::NO_CONTENT);

        let response = service.get_by_id(1).await;
        assert_eq!(response.status, StatusCode::NOT_FOUND);
        assert_eq!(response.message, MSG_NOT_FOUND);

        let rows = store.raw_rows();
        assert_eq!(rows.len(), 1);
        assert!(!rows[0].meta.status);
        assert!(rows[0].meta.deleted_at.is_some());
    }

    #[tokio::test]
    async fn update_defaults_status_to_true_and_restamps() {
        let (_, service) = category_service();
        let created = service.create(&named("Old")).await.into_record().unwrap();

        let updated = service.update(1, &named("New")).await;
        assert_eq!(updated.status, StatusCode::OK);
        let record = updated.into_record().unwrap();
        assert_eq!(record.name, "New");
        assert!(record.meta.status);
        assert!(record.meta.updated_at >= created.meta.updated_at);
    }

    #[tokio::test]
    async fn update_honours_explicit_false_status() {
        let (_, service) = category_service();
        service.create(&named("Old")).await;

        let input = CategoryInput { name: "Old".into(), status: Some(false) };
        let record = service.update(1, &input).await.into_record().unwrap();
        assert!(!record.meta.status);
        assert_eq!(service.get_by_id(1).await.status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn store_failures_become_generic_server_errors() {
        let (store, service) = category_service();
        store.set_failing(true);

        for response in [
            service.get_all().await,
            service.get_by_id(1).await,
            service.create(&named("X")).await,
            service.update(1, &named("X")).await,
            service.delete(1).await,
            service.get_by_name("X").await,
        ] {
            assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(response.message, "Por favor contacte al administrador");
            assert!(response.data.is_none());
        }
    }

    #[tokio::test]
    async fn user_lookups_follow_field_case_rules() {
        let store = Arc::new(MemoryStore::<User>::new());
        let service = ResourceService::new(store);
        service
            .create(&UserInput {
                name: "Ana".into(),
                username: "APerez".into(),
                email: "ana@acme.io".into(),
                password: "s3cretpass".into(),
                role_id: 1,
                status: None,
            })
            .await;

        assert!(service.get_by_username("aperez").await.is_found());
        assert!(service.get_by_email("ana@acme.io").await.is_found());
        assert!(!service.get_by_email("ANA@acme.io").await.is_found());
    }
}
