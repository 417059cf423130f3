// src/validation.rs
//
// Pipeline de validação das requisições de escrita:
//   1. regras de campo e de referência (todas avaliadas, erros acumulados)
//   2. unicidade (sequencial, a primeira colisão vence)
//   3. conversão para o payload tipado do recurso

pub mod rules;
pub mod uniqueness;
pub mod values;

mod areas;
mod categories;
mod products;
mod roles;
mod users;
mod warehouses;

use std::sync::Arc;

use serde_json::{Map, Value};

use crate::{
    common::error::{AppError, FieldError},
    config::AppState,
    models::Resource,
    services::ResourceService,
};

pub use rules::{ExistenceCheck, FieldRules, RuleSet};
pub use uniqueness::{ensure_unique, UniqueField};

/// Um recurso cujas requisições passam pelo pipeline de validação.
pub trait Validated: Resource {
    /// Mensagem quando o `id` da rota não aponta para um registro ativo.
    const ID_NOT_FOUND: &'static str;

    /// Checagens de unicidade, na ordem em que são aplicadas.
    const UNIQUE_FIELDS: &'static [UniqueField];

    fn service(state: &AppState) -> &ResourceService<Self>;

    /// Regras do corpo (sem `status`, que é comum a todos).
    fn body_rules(state: &AppState) -> RuleSet;

    /// Converte um corpo já validado no payload tipado.
    fn parse_input(body: &Map<String, Value>) -> Result<Self::Input, AppError>;
}

pub(crate) fn name_rules() -> FieldRules {
    FieldRules::body("name")
        .not_empty("El nombre es requerido")
        .is_string("El nombre debe ser una cadena de texto")
}

fn status_rule() -> FieldRules {
    FieldRules::body("status")
        .optional()
        .is_boolean("El estado debe ser un valor booleano")
}

/// Forma do `id` da rota: presente e inteiro positivo.
pub fn id_shape_rules() -> FieldRules {
    FieldRules::param("id")
        .not_empty("El id es requerido")
        .is_int_min(1, "El id debe ser un número")
}

/// Forma do `id` + existência de um registro ativo com esse id.
pub fn id_rules<R: Validated>(state: &AppState) -> FieldRules {
    let own: Arc<dyn ExistenceCheck> = Arc::new(R::service(state).clone());
    id_shape_rules().exists(own, R::ID_NOT_FOUND)
}

fn path_id(params: &Map<String, Value>) -> Result<i32, AppError> {
    params
        .get("id")
        .and_then(values::as_i32)
        .ok_or_else(|| anyhow::anyhow!("id da rota ausente após a validação").into())
}

fn unknown_fields(rules: &RuleSet, body: &Map<String, Value>) -> Vec<FieldError> {
    let allowed: Vec<&str> = rules.body_paths().collect();
    body.iter()
        .filter(|(key, _)| !allowed.contains(&key.as_str()))
        .map(|(key, value)| FieldError::unknown_field(key, value))
        .collect()
}

async fn run(
    rules: &RuleSet,
    body: &Map<String, Value>,
    params: &Map<String, Value>,
) -> Result<(), AppError> {
    let mut errors = rules.run(body, params).await?;
    errors.extend(unknown_fields(rules, body));
    if errors.is_empty() {
        Ok(())
    } else {
        Err(AppError::Validation(errors))
    }
}

/// GET por id: só a forma do id é verificada; ausência vira 404 no serviço.
pub async fn validate_id_shape(params: &Map<String, Value>) -> Result<i32, AppError> {
    let rules = RuleSet::new().field(id_shape_rules());
    run(&rules, &Map::new(), params).await?;
    path_id(params)
}

/// DELETE: o id precisa existir e estar ativo.
pub async fn validate_existing_id<R: Validated>(
    state: &AppState,
    params: &Map<String, Value>,
) -> Result<i32, AppError> {
    let rules = RuleSet::new().field(id_rules::<R>(state));
    run(&rules, &Map::new(), params).await?;
    path_id(params)
}

/// POST (`params = None`) ou PUT (`params = Some`): pipeline completo.
pub async fn validate_write<R: Validated>(
    state: &AppState,
    params: Option<&Map<String, Value>>,
    body: &Map<String, Value>,
) -> Result<(Option<i32>, R::Input), AppError> {
    let empty = Map::new();
    let mut rules = RuleSet::new();
    if params.is_some() {
        rules = rules.field(id_rules::<R>(state));
    }
    let rules = rules.extend(R::body_rules(state)).field(status_rule());

    run(&rules, body, params.unwrap_or(&empty)).await?;

    let id = params.map(path_id).transpose()?;
    ensure_unique(R::service(state), R::UNIQUE_FIELDS, body, id).await?;

    Ok((id, R::parse_input(body)?))
}
