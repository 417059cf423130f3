// src/validation/rules.rs

use std::sync::Arc;

use async_trait::async_trait;
use futures::future::join_all;
use rust_decimal::Decimal;
use serde_json::{Map, Value};
use validator::{ValidateEmail, ValidateLength, ValidateRange};

use crate::{
    common::error::{AppError, FieldError, Location},
    models::Resource,
    services::ResourceService,
    validation::values::{as_decimal, as_float, as_i32, display, is_empty},
};

// ---
// Verificação de existência (chaves estrangeiras e id da rota)
// ---

#[async_trait]
pub trait ExistenceCheck: Send + Sync {
    /// `true` se existe um registro ativo com esse id.
    async fn exists(&self, id: i32) -> Result<bool, AppError>;
}

#[async_trait]
impl<R: Resource> ExistenceCheck for ResourceService<R> {
    async fn exists(&self, id: i32) -> Result<bool, AppError> {
        let response = self.get_by_id(id).await;
        if response.is_server_error() {
            return Err(anyhow::anyhow!("falha ao verificar {} #{}", R::TABLE, id).into());
        }
        Ok(response.is_found())
    }
}

// ---
// Regras síncronas
// ---

#[derive(Debug, Clone, Copy)]
enum Check {
    NotEmpty,
    IsString,
    IsInt { min: Option<i64> },
    IsFloat { greater_than: f64 },
    /// Cabe numa coluna `NUMERIC(precision, scale)` sem arredondar.
    Numeric { precision: u32, scale: u32 },
    IsEmail,
    MinLength(u64),
    IsBoolean,
}

impl Check {
    fn passes(self, value: Option<&Value>) -> bool {
        match self {
            Check::NotEmpty => !is_empty(value),
            Check::IsString => matches!(value, Some(Value::String(_))),
            Check::IsInt { min } => value
                .and_then(as_i32)
                .is_some_and(|n| i64::from(n).validate_range(min, None, None, None)),
            Check::IsFloat { greater_than } => value
                .and_then(as_float)
                .is_some_and(|n| n.validate_range(None, None, Some(greater_than), None)),
            Check::Numeric { precision, scale } => match value.and_then(as_decimal) {
                Some(n) => fits_numeric(n, precision, scale),
                // Valor não numérico fica para a regra de tipo.
                None => value.and_then(as_float).is_none(),
            },
            Check::IsEmail => match value {
                Some(Value::String(s)) => s.validate_email(),
                _ => false,
            },
            Check::MinLength(min) => {
                let text = match value {
                    Some(Value::String(s)) => s.clone(),
                    Some(Value::Number(n)) => n.to_string(),
                    _ => String::new(),
                };
                text.validate_length(Some(min), None, None)
            }
            Check::IsBoolean => matches!(value, Some(Value::Bool(_))),
        }
    }
}

fn fits_numeric(n: Decimal, precision: u32, scale: u32) -> bool {
    let n = n.normalize();
    let limit = 10_i64
        .checked_pow(precision.saturating_sub(scale))
        .map_or(Decimal::MAX, Decimal::from);
    n.scale() <= scale && n.abs() < limit
}

#[derive(Debug, Clone, Copy)]
struct Rule {
    check: Check,
    message: &'static str,
}

struct Reference {
    target: Arc<dyn ExistenceCheck>,
    not_found: &'static str,
}

/// Todas as regras de um campo, avaliadas de forma independente (sem "bail").
pub struct FieldRules {
    path: &'static str,
    location: Location,
    optional: bool,
    rules: Vec<Rule>,
    reference: Option<Reference>,
}

impl FieldRules {
    pub fn body(path: &'static str) -> Self {
        Self::at(path, Location::Body)
    }

    pub fn param(path: &'static str) -> Self {
        Self::at(path, Location::Params)
    }

    fn at(path: &'static str, location: Location) -> Self {
        Self {
            path,
            location,
            optional: false,
            rules: Vec::new(),
            reference: None,
        }
    }

    /// Campo opcional: as regras só rodam se o valor vier preenchido.
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    fn rule(mut self, check: Check, message: &'static str) -> Self {
        self.rules.push(Rule { check, message });
        self
    }

    pub fn not_empty(self, message: &'static str) -> Self {
        self.rule(Check::NotEmpty, message)
    }

    pub fn is_string(self, message: &'static str) -> Self {
        self.rule(Check::IsString, message)
    }

    pub fn is_int(self, message: &'static str) -> Self {
        self.rule(Check::IsInt { min: None }, message)
    }

    pub fn is_int_min(self, min: i64, message: &'static str) -> Self {
        self.rule(Check::IsInt { min: Some(min) }, message)
    }

    pub fn is_float_gt(self, greater_than: f64, message: &'static str) -> Self {
        self.rule(Check::IsFloat { greater_than }, message)
    }

    pub fn is_numeric(self, precision: u32, scale: u32, message: &'static str) -> Self {
        self.rule(Check::Numeric { precision, scale }, message)
    }

    pub fn is_email(self, message: &'static str) -> Self {
        self.rule(Check::IsEmail, message)
    }

    pub fn min_length(self, min: u64, message: &'static str) -> Self {
        self.rule(Check::MinLength(min), message)
    }

    pub fn is_boolean(self, message: &'static str) -> Self {
        self.rule(Check::IsBoolean, message)
    }

    /// O valor precisa apontar para um registro ativo de `target`.
    pub fn exists(mut self, target: Arc<dyn ExistenceCheck>, not_found: &'static str) -> Self {
        self.reference = Some(Reference { target, not_found });
        self
    }

    fn error(&self, value: Option<&Value>, message: impl Into<String>) -> FieldError {
        FieldError::new(self.path, self.location, value, message)
    }
}

/// Conjunto ordenado de regras de uma requisição.
#[derive(Default)]
pub struct RuleSet {
    fields: Vec<FieldRules>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, rules: FieldRules) -> Self {
        self.fields.push(rules);
        self
    }

    pub fn extend(mut self, other: RuleSet) -> Self {
        self.fields.extend(other.fields);
        self
    }

    /// Campos de corpo declarados (o esquema aceito).
    pub fn body_paths(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields
            .iter()
            .filter(|f| f.location == Location::Body)
            .map(|f| f.path)
    }

    /// Avalia todas as regras e devolve os erros acumulados, na ordem de declaração.
    ///
    /// As verificações de existência rodam concorrentemente depois das
    /// síncronas. `Err` só acontece quando o store falha durante uma delas.
    pub async fn run(
        &self,
        body: &Map<String, Value>,
        params: &Map<String, Value>,
    ) -> Result<Vec<FieldError>, AppError> {
        let mut errors: Vec<(usize, FieldError)> = Vec::new();
        let mut pending = Vec::new();

        for (index, field) in self.fields.iter().enumerate() {
            let source = match field.location {
                Location::Body => body,
                Location::Params => params,
            };
            let value = source.get(field.path);

            if field.optional && matches!(value, None | Some(Value::Null)) {
                continue;
            }

            for rule in &field.rules {
                if !rule.check.passes(value) {
                    errors.push((index, field.error(value, rule.message)));
                }
            }

            let Some(reference) = &field.reference else {
                continue;
            };
            match value.and_then(as_float) {
                // Não numérico: falha sem consultar o store.
                None => errors.push((
                    index,
                    field.error(
                        value,
                        format!("El parámetro {}: {} debe ser un número", field.path, display(value)),
                    ),
                )),
                Some(_) => match value.and_then(as_i32) {
                    Some(id) => pending.push(async move {
                        (index, field, value, reference, reference.target.exists(id).await)
                    }),
                    // Numérico, mas nunca seria um id válido.
                    None => errors.push((index, field.error(value, reference.not_found))),
                },
            }
        }

        for (index, field, value, reference, outcome) in join_all(pending).await {
            if !outcome? {
                errors.push((index, field.error(value, reference.not_found)));
            }
        }

        // Ordenação estável: dentro do campo, a ordem das regras é mantida.
        errors.sort_by_key(|(index, _)| *index);
        Ok(errors.into_iter().map(|(_, error)| error).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    // Mock de existência: ids conhecidos existem, e conta as consultas.
    struct KnownIds {
        ids: Vec<i32>,
        calls: AtomicUsize,
        failing: bool,
    }

    impl KnownIds {
        fn new(ids: &[i32]) -> Arc<Self> {
            Arc::new(Self { ids: ids.to_vec(), calls: AtomicUsize::new(0), failing: false })
        }
    }

    #[async_trait]
    impl ExistenceCheck for KnownIds {
        async fn exists(&self, id: i32) -> Result<bool, AppError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.failing {
                return Err(anyhow::anyhow!("store fora").into());
            }
            Ok(self.ids.contains(&id))
        }
    }

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("esperava objeto"),
        }
    }

    fn paths(errors: &[FieldError]) -> Vec<&str> {
        errors.iter().map(|e| e.path.as_str()).collect()
    }

    #[tokio::test]
    async fn every_violated_rule_yields_its_own_entry() {
        let rules = RuleSet::new().field(
            FieldRules::body("name")
                .not_empty("El nombre es requerido")
                .is_string("El nombre debe ser una cadena de texto"),
        );

        let errors = rules.run(&Map::new(), &Map::new()).await.unwrap();
        let messages: Vec<&str> = errors.iter().map(|e| e.msg.as_str()).collect();
        assert_eq!(
            messages,
            ["El nombre es requerido", "El nombre debe ser una cadena de texto"]
        );
    }

    #[tokio::test]
    async fn errors_across_fields_are_reported_together_in_declaration_order() {
        let categories = KnownIds::new(&[1]);
        let rules = RuleSet::new()
            .field(FieldRules::body("name").not_empty("requerido"))
            .field(FieldRules::body("price").is_float_gt(0.0, "precio"))
            .field(FieldRules::body("category_id").exists(categories, "categoría inexistente"));

        let body = object(json!({ "price": -5, "category_id": 77 }));
        let errors = rules.run(&body, &Map::new()).await.unwrap();
        assert_eq!(paths(&errors), ["name", "price", "category_id"]);
        assert_eq!(errors[1].value, Some(json!(-5)));
        assert_eq!(errors[2].msg, "categoría inexistente");
    }

    #[tokio::test]
    async fn non_numeric_reference_fails_without_querying() {
        let warehouses = KnownIds::new(&[1]);
        let rules = RuleSet::new().field(
            FieldRules::body("warehouse_id")
                .is_int("entero")
                .exists(warehouses.clone(), "no existe"),
        );

        let body = object(json!({ "warehouse_id": "abc" }));
        let errors = rules.run(&body, &Map::new()).await.unwrap();

        assert_eq!(errors.len(), 2);
        assert_eq!(errors[1].msg, "El parámetro warehouse_id: abc debe ser un número");
        assert_eq!(warehouses.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn missing_reference_reports_presence_type_and_number_errors() {
        let roles = KnownIds::new(&[]);
        let rules = RuleSet::new().field(
            FieldRules::body("role_id")
                .not_empty("El ID del rol es requerido")
                .is_int("El ID del rol debe ser un número entero")
                .exists(roles, "no existe"),
        );

        let errors = rules.run(&Map::new(), &Map::new()).await.unwrap();
        assert_eq!(errors.len(), 3);
        assert_eq!(errors[2].msg, "El parámetro role_id: undefined debe ser un número");
        assert!(errors[2].value.is_none());
    }

    #[tokio::test]
    async fn independent_references_are_all_checked() {
        let categories = KnownIds::new(&[]);
        let areas = KnownIds::new(&[]);
        let rules = RuleSet::new()
            .field(FieldRules::body("category_id").exists(categories.clone(), "categoría"))
            .field(FieldRules::body("area_id").exists(areas.clone(), "área"));

        let body = object(json!({ "category_id": 3, "area_id": "4" }));
        let errors = rules.run(&body, &Map::new()).await.unwrap();

        assert_eq!(paths(&errors), ["category_id", "area_id"]);
        assert_eq!(categories.calls.load(Ordering::SeqCst), 1);
        assert_eq!(areas.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn store_failure_during_reference_check_is_an_error() {
        let broken = Arc::new(KnownIds { ids: vec![], calls: AtomicUsize::new(0), failing: true });
        let rules = RuleSet::new().field(FieldRules::body("area_id").exists(broken, "área"));

        let body = object(json!({ "area_id": 1 }));
        let result = rules.run(&body, &Map::new()).await;
        assert!(matches!(result, Err(AppError::InternalServerError(_))));
    }

    #[tokio::test]
    async fn optional_fields_are_skipped_when_absent() {
        let rules = RuleSet::new().field(FieldRules::body("status").optional().is_boolean("booleano"));

        assert!(rules.run(&Map::new(), &Map::new()).await.unwrap().is_empty());

        let body = object(json!({ "status": "yes" }));
        assert_eq!(rules.run(&body, &Map::new()).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn param_rules_read_from_params() {
        let rules = RuleSet::new().field(
            FieldRules::param("id")
                .not_empty("El id es requerido")
                .is_int_min(1, "El id debe ser un número"),
        );

        let params = object(json!({ "id": "0" }));
        let errors = rules.run(&Map::new(), &params).await.unwrap();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].location, Location::Params);

        let params = object(json!({ "id": "12" }));
        assert!(rules.run(&Map::new(), &params).await.unwrap().is_empty());
    }

    #[test]
    fn scalar_checks() {
        let email = Check::IsEmail;
        assert!(email.passes(Some(&json!("ana@acme.io"))));
        assert!(!email.passes(Some(&json!("ana@"))));

        let password = Check::MinLength(8);
        assert!(password.passes(Some(&json!("12345678"))));
        assert!(!password.passes(Some(&json!("1234567"))));
        assert!(!password.passes(None));

        let quantity = Check::IsInt { min: Some(0) };
        assert!(quantity.passes(Some(&json!(0))));
        assert!(!quantity.passes(Some(&json!(-1))));
        assert!(!quantity.passes(Some(&json!(1.5))));

        let price = Check::IsFloat { greater_than: 0.0 };
        assert!(price.passes(Some(&json!("0.01"))));
        assert!(!price.passes(Some(&json!(0))));
    }

    #[test]
    fn numeric_check_follows_column_precision_and_scale() {
        let money = Check::Numeric { precision: 12, scale: 2 };
        assert!(money.passes(Some(&json!(0.01))));
        assert!(money.passes(Some(&json!("45.50"))));
        assert!(money.passes(Some(&json!("45.500"))));
        assert!(money.passes(Some(&json!("9999999999.99"))));
        assert!(!money.passes(Some(&json!(0.001))));
        assert!(!money.passes(Some(&json!("10000000000"))));
        assert!(!money.passes(Some(&json!(1e11))));

        // Ausente ou não numérico: quem reporta são as outras regras.
        assert!(money.passes(None));
        assert!(money.passes(Some(&json!("abc"))));
    }
}
