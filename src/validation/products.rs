// src/validation/products.rs

use std::sync::Arc;

use serde_json::{Map, Value};

use super::{name_rules, values, FieldRules, RuleSet, UniqueField, Validated};
use crate::{
    common::error::AppError,
    config::AppState,
    models::{Product, ProductInput},
    services::ResourceService,
};

impl Validated for Product {
    const ID_NOT_FOUND: &'static str = "El id de producto no se encuentra en los registros";
    const UNIQUE_FIELDS: &'static [UniqueField] = &[UniqueField::name("El nombre de producto")];

    fn service(state: &AppState) -> &ResourceService<Self> {
        &state.products
    }

    fn body_rules(state: &AppState) -> RuleSet {
        RuleSet::new()
            .field(name_rules())
            .field(
                FieldRules::body("price")
                    .not_empty("El precio es requerido")
                    .is_float_gt(0.0, "El precio debe ser un número mayor que 0")
                    .is_numeric(12, 2, "El precio admite como máximo 10 dígitos enteros y 2 decimales"),
            )
            .field(
                FieldRules::body("quantity")
                    .not_empty("La cantidad es requerida")
                    .is_int_min(0, "La cantidad debe ser un número entero igual o mayor que 0"),
            )
            .field(
                FieldRules::body("category_id")
                    .not_empty("El ID de categoría es requerido")
                    .is_int("El ID de categoría debe ser un número entero")
                    .exists(
                        Arc::new(state.categories.clone()),
                        "El ID de categoría no se encuentra en los registros",
                    ),
            )
            .field(
                FieldRules::body("area_id")
                    .not_empty("El ID de área es requerido")
                    .is_int("El ID de área debe ser un número entero")
                    .exists(
                        Arc::new(state.areas.clone()),
                        "El ID de área no se encuentra en los registros",
                    ),
            )
    }

    fn parse_input(body: &Map<String, Value>) -> Result<ProductInput, AppError> {
        Ok(ProductInput {
            name: values::required_string(body, "name")?,
            price: values::required_decimal(body, "price")?,
            quantity: values::required_i32(body, "quantity")?,
            category_id: values::required_i32(body, "category_id")?,
            area_id: values::required_i32(body, "area_id")?,
            status: values::optional_bool(body, "status")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use serde_json::json;
    use std::str::FromStr;

    #[test]
    fn numeric_strings_are_accepted_in_the_payload() {
        let body = json!({
            "name": "Silla",
            "price": "45.50",
            "quantity": "0",
            "category_id": 2,
            "area_id": "3"
        });
        let input = Product::parse_input(body.as_object().unwrap()).unwrap();

        assert_eq!(input.price, Decimal::from_str("45.50").unwrap());
        assert_eq!(input.quantity, 0);
        assert_eq!(input.area_id, 3);
        assert_eq!(input.status, None);
    }
}
