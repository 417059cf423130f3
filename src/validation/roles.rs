// src/validation/roles.rs

use serde_json::{Map, Value};

use super::{name_rules, values, RuleSet, UniqueField, Validated};
use crate::{
    common::error::AppError,
    config::AppState,
    models::{Role, RoleInput},
    services::ResourceService,
};

impl Validated for Role {
    const ID_NOT_FOUND: &'static str = "El id del rol no se encuentra en los registros";
    const UNIQUE_FIELDS: &'static [UniqueField] = &[UniqueField::name("El nombre de rol")];

    fn service(state: &AppState) -> &ResourceService<Self> {
        &state.roles
    }

    fn body_rules(_state: &AppState) -> RuleSet {
        RuleSet::new().field(name_rules())
    }

    fn parse_input(body: &Map<String, Value>) -> Result<RoleInput, AppError> {
        Ok(RoleInput {
            name: values::required_string(body, "name")?,
            status: values::optional_bool(body, "status")?,
        })
    }
}
