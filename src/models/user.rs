// src/models/user.rs

use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

use super::record::{LookupField, RecordMeta, Resource};

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct User {
    #[schema(example = 1)]
    pub id: i32,

    #[schema(example = "Ana Pérez")]
    pub name: String,

    #[schema(example = "aperez")]
    pub username: String,

    #[schema(example = "ana@acme.io")]
    pub email: String,

    // Guardada como veio (hash fica fora do escopo), nunca serializada.
    #[serde(skip_serializing)]
    #[schema(ignore)]
    pub password: String,

    #[schema(example = 1)]
    pub role_id: i32,

    #[serde(flatten)]
    #[sqlx(flatten)]
    pub meta: RecordMeta,
}

#[derive(Debug, Clone, PartialEq, ToSchema)]
pub struct UserInput {
    #[schema(example = "Ana Pérez")]
    pub name: String,
    #[schema(example = "aperez")]
    pub username: String,
    #[schema(example = "ana@acme.io")]
    pub email: String,
    #[schema(example = "s3cretpass")]
    pub password: String,
    #[schema(example = 1)]
    pub role_id: i32,
    pub status: Option<bool>,
}

impl Resource for User {
    type Input = UserInput;

    const TABLE: &'static str = "users";
    const SINGULAR: &'static str = "user";
    const PLURAL: &'static str = "users";

    fn id(&self) -> i32 {
        self.id
    }

    fn meta(&self) -> &RecordMeta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut RecordMeta {
        &mut self.meta
    }

    fn from_input(id: i32, input: &UserInput, meta: RecordMeta) -> Self {
        Self {
            id,
            name: input.name.clone(),
            username: input.username.clone(),
            email: input.email.clone(),
            password: input.password.clone(),
            role_id: input.role_id,
            meta,
        }
    }

    fn apply_input(&mut self, input: &UserInput) {
        self.name = input.name.clone();
        self.username = input.username.clone();
        self.email = input.email.clone();
        self.password = input.password.clone();
        self.role_id = input.role_id;
    }

    fn lookup_value(&self, field: LookupField) -> Option<&str> {
        match field {
            LookupField::Name => Some(self.name.as_str()),
            LookupField::Username => Some(self.username.as_str()),
            LookupField::Email => Some(self.email.as_str()),
        }
    }

    fn requested_status(input: &UserInput) -> Option<bool> {
        input.status
    }
}
