// src/models/product.rs

use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

use super::record::{LookupField, RecordMeta, Resource};

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct Product {
    #[schema(example = 1)]
    pub id: i32,

    #[schema(example = "Laptop 14")]
    pub name: String,

    #[schema(value_type = f64, example = 1299.90)]
    pub price: Decimal,

    #[schema(example = 10)]
    pub quantity: i32,

    #[schema(example = 1)]
    pub category_id: i32,

    #[schema(example = 1)]
    pub area_id: i32,

    #[serde(flatten)]
    #[sqlx(flatten)]
    pub meta: RecordMeta,
}

#[derive(Debug, Clone, PartialEq, ToSchema)]
pub struct ProductInput {
    #[schema(example = "Laptop 14")]
    pub name: String,
    #[schema(value_type = f64, example = 1299.90)]
    pub price: Decimal,
    #[schema(example = 10)]
    pub quantity: i32,
    #[schema(example = 1)]
    pub category_id: i32,
    #[schema(example = 1)]
    pub area_id: i32,
    pub status: Option<bool>,
}

impl Resource for Product {
    type Input = ProductInput;

    const TABLE: &'static str = "products";
    const SINGULAR: &'static str = "product";
    const PLURAL: &'static str = "products";

    fn id(&self) -> i32 {
        self.id
    }

    fn meta(&self) -> &RecordMeta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut RecordMeta {
        &mut self.meta
    }

    fn from_input(id: i32, input: &ProductInput, meta: RecordMeta) -> Self {
        Self {
            id,
            name: input.name.clone(),
            price: input.price,
            quantity: input.quantity,
            category_id: input.category_id,
            area_id: input.area_id,
            meta,
        }
    }

    fn apply_input(&mut self, input: &ProductInput) {
        self.name = input.name.clone();
        self.price = input.price;
        self.quantity = input.quantity;
        self.category_id = input.category_id;
        self.area_id = input.area_id;
    }

    fn lookup_value(&self, field: LookupField) -> Option<&str> {
        match field {
            LookupField::Name => Some(self.name.as_str()),
            _ => None,
        }
    }

    fn requested_status(input: &ProductInput) -> Option<bool> {
        input.status
    }
}
