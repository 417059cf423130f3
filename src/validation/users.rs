// src/validation/users.rs

use std::sync::Arc;

use serde_json::{Map, Value};

use super::{name_rules, values, FieldRules, RuleSet, UniqueField, Validated};
use crate::{
    common::error::AppError,
    config::AppState,
    models::{LookupField, User, UserInput},
    services::ResourceService,
};

impl Validated for User {
    const ID_NOT_FOUND: &'static str = "El id de usuario no se encuentra en los registros";

    // Email antes de username: se o email colidir, o username nem é consultado.
    const UNIQUE_FIELDS: &'static [UniqueField] = &[
        UniqueField {
            path: "email",
            lookup: LookupField::Email,
            label: "El email",
            owner: "usuario",
        },
        UniqueField {
            path: "username",
            lookup: LookupField::Username,
            label: "El nombre de usuario",
            owner: "usuario",
        },
    ];

    fn service(state: &AppState) -> &ResourceService<Self> {
        &state.users
    }

    fn body_rules(state: &AppState) -> RuleSet {
        RuleSet::new()
            .field(name_rules())
            .field(
                FieldRules::body("username")
                    .not_empty("El nombre de usuario es requerido")
                    .is_string("El nombre de usuario debe ser una cadena de texto"),
            )
            .field(
                FieldRules::body("email")
                    .not_empty("El email es requerido")
                    .is_email("El formato del email no es válido"),
            )
            .field(
                FieldRules::body("password")
                    .not_empty("La contraseña es requerida")
                    .min_length(8, "La contraseña debe tener al menos 8 caracteres"),
            )
            .field(
                FieldRules::body("role_id")
                    .not_empty("El ID del rol es requerido")
                    .is_int("El ID del rol debe ser un número entero")
                    .exists(
                        Arc::new(state.roles.clone()),
                        "El ID del rol no se encuentra en los registros",
                    ),
            )
    }

    fn parse_input(body: &Map<String, Value>) -> Result<UserInput, AppError> {
        Ok(UserInput {
            name: values::required_string(body, "name")?,
            username: values::required_string(body, "username")?,
            email: values::required_string(body, "email")?,
            password: values::required_string(body, "password")?,
            role_id: values::required_i32(body, "role_id")?,
            status: values::optional_bool(body, "status")?,
        })
    }
}
