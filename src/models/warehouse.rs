// src/models/warehouse.rs

use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

use super::record::{LookupField, RecordMeta, Resource};

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct Warehouse {
    #[schema(example = 1)]
    pub id: i32,

    #[schema(example = "Almacén Central")]
    pub name: String,

    #[serde(flatten)]
    #[sqlx(flatten)]
    pub meta: RecordMeta,
}

#[derive(Debug, Clone, PartialEq, ToSchema)]
pub struct WarehouseInput {
    #[schema(example = "Almacén Central")]
    pub name: String,
    pub status: Option<bool>,
}

impl Resource for Warehouse {
    type Input = WarehouseInput;

    const TABLE: &'static str = "warehouses";
    const SINGULAR: &'static str = "warehouse";
    const PLURAL: &'static str = "warehouses";

    fn id(&self) -> i32 {
        self.id
    }

    fn meta(&self) -> &RecordMeta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut RecordMeta {
        &mut self.meta
    }

    fn from_input(id: i32, input: &WarehouseInput, meta: RecordMeta) -> Self {
        Self { id, name: input.name.clone(), meta }
    }

    fn apply_input(&mut self, input: &WarehouseInput) {
        self.name = input.name.clone();
    }

    fn lookup_value(&self, field: LookupField) -> Option<&str> {
        match field {
            LookupField::Name => Some(self.name.as_str()),
            _ => None,
        }
    }

    fn requested_status(input: &WarehouseInput) -> Option<bool> {
        input.status
    }
}
