// src/models/area.rs

use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

use super::record::{LookupField, RecordMeta, Resource};

// Uma área física dentro de um armazém.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct Area {
    #[schema(example = 1)]
    pub id: i32,

    #[schema(example = "Main")]
    pub name: String,

    #[schema(example = 1)]
    pub warehouse_id: i32,

    #[serde(flatten)]
    #[sqlx(flatten)]
    pub meta: RecordMeta,
}

#[derive(Debug, Clone, PartialEq, ToSchema)]
pub struct AreaInput {
    #[schema(example = "Main")]
    pub name: String,
    #[schema(example = 1)]
    pub warehouse_id: i32,
    pub status: Option<bool>,
}

impl Resource for Area {
    type Input = AreaInput;

    const TABLE: &'static str = "areas";
    const SINGULAR: &'static str = "area";
    const PLURAL: &'static str = "areas";

    fn id(&self) -> i32 {
        self.id
    }

    fn meta(&self) -> &RecordMeta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut RecordMeta {
        &mut self.meta
    }

    fn from_input(id: i32, input: &AreaInput, meta: RecordMeta) -> Self {
        Self {
            id,
            name: input.name.clone(),
            warehouse_id: input.warehouse_id,
            meta,
        }
    }

    fn apply_input(&mut self, input: &AreaInput) {
        self.name = input.name.clone();
        self.warehouse_id = input.warehouse_id;
    }

    fn lookup_value(&self, field: LookupField) -> Option<&str> {
        match field {
            LookupField::Name => Some(self.name.as_str()),
            _ => None,
        }
    }

    fn requested_status(input: &AreaInput) -> Option<bool> {
        input.status
    }
}
