// src/validation/uniqueness.rs

use serde_json::{Map, Value};

use crate::{
    common::error::{AppError, FieldError, Location},
    models::{LookupField, Resource},
    services::ResourceService,
};

/// Um campo que não pode repetir entre registros ativos do mesmo recurso.
#[derive(Debug, Clone, Copy)]
pub struct UniqueField {
    pub path: &'static str,
    pub lookup: LookupField,
    /// Início da mensagem, ex.: "El nombre de área".
    pub label: &'static str,
    /// Quem detém o valor no caso de update, ex.: "registro", "usuario".
    pub owner: &'static str,
}

impl UniqueField {
    pub const fn name(label: &'static str) -> Self {
        Self { path: "name", lookup: LookupField::Name, label, owner: "registro" }
    }
}

/// Roda as verificações em ordem; a primeira colisão interrompe a cadeia.
///
/// `path_id` vazio = criação. Em update, colidir com o próprio registro é permitido.
pub async fn ensure_unique<R: Resource>(
    service: &ResourceService<R>,
    checks: &[UniqueField],
    body: &Map<String, Value>,
    path_id: Option<i32>,
) -> Result<(), AppError> {
    for check in checks {
        let candidate = match body.get(check.path).and_then(Value::as_str) {
            Some(value) if !value.is_empty() => value,
            _ => continue,
        };

        let response = match check.lookup {
            LookupField::Name => service.get_by_name(candidate).await,
            LookupField::Email => service.get_by_email(candidate).await,
            LookupField::Username => service.get_by_username(candidate).await,
        };
        if response.is_server_error() {
            return Err(anyhow::anyhow!(
                "falha ao verificar unicidade de {}.{}",
                R::TABLE,
                check.path
            )
            .into());
        }

        let Some(holder) = response.record() else {
            continue;
        };

        let msg = match path_id {
            None => format!("{} '{}' ya está en uso.", check.label, candidate),
            Some(id) if id != holder.id() => {
                format!("{} '{}' ya está en uso por otro {}.", check.label, candidate, check.owner)
            }
            Some(_) => continue,
        };

        return Err(AppError::field(FieldError::new(check.path, Location::Body, None, msg)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        db::MemoryStore,
        models::{Warehouse, WarehouseInput},
    };
    use serde_json::json;
    use std::sync::Arc;

    const WAREHOUSE_NAME: [UniqueField; 1] = [UniqueField::name("El nombre de almacén")];

    async fn seeded() -> (Arc<MemoryStore<Warehouse>>, ResourceService<Warehouse>) {
        let store = Arc::new(MemoryStore::<Warehouse>::new());
        let service = ResourceService::new(store.clone());
        for name in ["Central", "Norte"] {
            service.create(&WarehouseInput { name: name.into(), status: None }).await;
        }
        (store, service)
    }

    fn body(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap_or_default()
    }

    fn messages(result: Result<(), AppError>) -> Vec<String> {
        match result {
            Err(AppError::Validation(errors)) => errors.into_iter().map(|e| e.msg).collect(),
            other => panic!("esperava erro de validação, veio {other:?}"),
        }
    }

    #[tokio::test]
    async fn create_with_taken_name_in_other_case_fails() {
        let (_, service) = seeded().await;
        let result = ensure_unique(&service, &WAREHOUSE_NAME, &body(json!({ "name": "CENTRAL" })), None).await;
        assert_eq!(messages(result), ["El nombre de almacén 'CENTRAL' ya está en uso."]);
    }

    #[tokio::test]
    async fn create_with_free_name_passes() {
        let (_, service) = seeded().await;
        let result = ensure_unique(&service, &WAREHOUSE_NAME, &body(json!({ "name": "Sur" })), None).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn update_to_own_name_passes_but_not_to_another() {
        let (_, service) = seeded().await;
        let own = ensure_unique(&service, &WAREHOUSE_NAME, &body(json!({ "name": "central" })), Some(1)).await;
        assert!(own.is_ok());

        let other = ensure_unique(&service, &WAREHOUSE_NAME, &body(json!({ "name": "Norte" })), Some(1)).await;
        assert_eq!(
            messages(other),
            ["El nombre de almacén 'Norte' ya está en uso por otro registro."]
        );
    }

    #[tokio::test]
    async fn deleted_records_do_not_hold_names() {
        let (_, service) = seeded().await;
        service.delete(2).await;
        let result = ensure_unique(&service, &WAREHOUSE_NAME, &body(json!({ "name": "Norte" })), None).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn absent_or_empty_candidate_is_skipped() {
        let (store, service) = seeded().await;
        store.set_failing(true);
        // Nenhuma consulta acontece, então a falha do store não aparece.
        assert!(ensure_unique(&service, &WAREHOUSE_NAME, &Map::new(), None).await.is_ok());
        assert!(ensure_unique(&service, &WAREHOUSE_NAME, &body(json!({ "name": "" })), None).await.is_ok());
    }

    #[tokio::test]
    async fn store_failure_is_not_treated_as_available() {
        let (store, service) = seeded().await;
        store.set_failing(true);
        let result = ensure_unique(&service, &WAREHOUSE_NAME, &body(json!({ "name": "Sur" })), None).await;
        assert!(matches!(result, Err(AppError::InternalServerError(_))));
    }
}
