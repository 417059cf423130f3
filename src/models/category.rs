// src/models/category.rs

use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

use super::record::{LookupField, RecordMeta, Resource};

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct Category {
    #[schema(example = 1)]
    pub id: i32,

    #[schema(example = "Electronics")]
    pub name: String,

    #[serde(flatten)]
    #[sqlx(flatten)]
    pub meta: RecordMeta,
}

#[derive(Debug, Clone, PartialEq, ToSchema)]
pub struct CategoryInput {
    #[schema(example = "Electronics")]
    pub name: String,
    pub status: Option<bool>,
}

impl Resource for Category {
    type Input = CategoryInput;

    const TABLE: &'static str = "categories";
    const SINGULAR: &'static str = "category";
    const PLURAL: &'static str = "categories";

    fn id(&self) -> i32 {
        self.id
    }

    fn meta(&self) -> &RecordMeta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut RecordMeta {
        &mut self.meta
    }

    fn from_input(id: i32, input: &CategoryInput, meta: RecordMeta) -> Self {
        Self { id, name: input.name.clone(), meta }
    }

    fn apply_input(&mut self, input: &CategoryInput) {
        self.name = input.name.clone();
    }

    fn lookup_value(&self, field: LookupField) -> Option<&str> {
        match field {
            LookupField::Name => Some(self.name.as_str()),
            _ => None,
        }
    }

    fn requested_status(input: &CategoryInput) -> Option<bool> {
        input.status
    }
}
