// src/validation/categories.rs

use serde_json::{Map, Value};

use super::{name_rules, values, RuleSet, UniqueField, Validated};
use crate::{
    common::error::AppError,
    config::AppState,
    models::{Category, CategoryInput},
    services::ResourceService,
};

impl Validated for Category {
    const ID_NOT_FOUND: &'static str = "El id de categoría no se encuentra en los registros";
    const UNIQUE_FIELDS: &'static [UniqueField] = &[UniqueField::name("El nombre de categoría")];

    fn service(state: &AppState) -> &ResourceService<Self> {
        &state.categories
    }

    fn body_rules(_state: &AppState) -> RuleSet {
        RuleSet::new().field(name_rules())
    }

    fn parse_input(body: &Map<String, Value>) -> Result<CategoryInput, AppError> {
        Ok(CategoryInput {
            name: values::required_string(body, "name")?,
            status: values::optional_bool(body, "status")?,
        })
    }
}
