// src/validation/warehouses.rs

use serde_json::{Map, Value};

use super::{name_rules, values, RuleSet, UniqueField, Validated};
use crate::{
    common::error::AppError,
    config::AppState,
    models::{Warehouse, WarehouseInput},
    services::ResourceService,
};

impl Validated for Warehouse {
    const ID_NOT_FOUND: &'static str = "El id de almacén no se encuentra en los registros";
    const UNIQUE_FIELDS: &'static [UniqueField] = &[UniqueField::name("El nombre de almacén")];

    fn service(state: &AppState) -> &ResourceService<Self> {
        &state.warehouses
    }

    fn body_rules(_state: &AppState) -> RuleSet {
        RuleSet::new().field(name_rules())
    }

    fn parse_input(body: &Map<String, Value>) -> Result<WarehouseInput, AppError> {
        Ok(WarehouseInput {
            name: values::required_string(body, "name")?,
            status: values::optional_bool(body, "status")?,
        })
    }
}
