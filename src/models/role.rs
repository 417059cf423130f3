// src/models/role.rs

use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

use super::record::{LookupField, RecordMeta, Resource};

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct Role {
    #[schema(example = 1)]
    pub id: i32,

    #[schema(example = "Administrador")]
    pub name: String,

    #[serde(flatten)]
    #[sqlx(flatten)]
    pub meta: RecordMeta,
}

#[derive(Debug, Clone, PartialEq, ToSchema)]
pub struct RoleInput {
    #[schema(example = "Administrador")]
    pub name: String,
    pub status: Option<bool>,
}

impl Resource for Role {
    type Input = RoleInput;

    const TABLE: &'static str = "roles";
    const SINGULAR: &'static str = "role";
    const PLURAL: &'static str = "roles";

    fn id(&self) -> i32 {
        self.id
    }

    fn meta(&self) -> &RecordMeta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut RecordMeta {
        &mut self.meta
    }

    fn from_input(id: i32, input: &RoleInput, meta: RecordMeta) -> Self {
        Self { id, name: input.name.clone(), meta }
    }

    fn apply_input(&mut self, input: &RoleInput) {
        self.name = input.name.clone();
    }

    fn lookup_value(&self, field: LookupField) -> Option<&str> {
        match field {
            LookupField::Name => Some(self.name.as_str()),
            _ => None,
        }
    }

    fn requested_status(input: &RoleInput) -> Option<bool> {
        input.status
    }
}
