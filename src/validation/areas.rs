// src/validation/areas.rs

use std::sync::Arc;

use serde_json::{Map, Value};

use super::{name_rules, values, FieldRules, RuleSet, UniqueField, Validated};
use crate::{
    common::error::AppError,
    config::AppState,
    models::{Area, AreaInput},
    services::ResourceService,
};

impl Validated for Area {
    const ID_NOT_FOUND: &'static str = "El id no se encuentra en los registros";
    const UNIQUE_FIELDS: &'static [UniqueField] = &[UniqueField::name("El nombre de área")];

    fn service(state: &AppState) -> &ResourceService<Self> {
        &state.areas
    }

    fn body_rules(state: &AppState) -> RuleSet {
        RuleSet::new().field(name_rules()).field(
            FieldRules::body("warehouse_id")
                .not_empty("El ID del almacén es requerido")
                .is_int("El ID del almacén debe ser un número entero")
                .exists(
                    Arc::new(state.warehouses.clone()),
                    "El ID del almacén no se encuentra en los registros",
                ),
        )
    }

    fn parse_input(body: &Map<String, Value>) -> Result<AreaInput, AppError> {
        Ok(AreaInput {
            name: values::required_string(body, "name")?,
            warehouse_id: values::required_i32(body, "warehouse_id")?,
            status: values::optional_bool(body, "status")?,
        })
    }
}
