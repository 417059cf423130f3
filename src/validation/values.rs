// src/validation/values.rs
//
// Leitura tolerante de valores JSON:
// inteiros aceitam número ou string de dígitos, decimais aceitam número ou
// string numérica.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde_json::{Map, Value};

use crate::common::error::{AppError, FieldError, Location};

/// Ausente, `null`, string vazia ou lista vazia.
pub fn is_empty(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(Value::Array(items)) => items.is_empty(),
        Some(_) => false,
    }
}

pub fn as_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f <= i64::MAX as f64)
                .map(|f| f as i64)
        }),
        Value::String(s) => parse_integer(s),
        _ => None,
    }
}

fn parse_integer(s: &str) -> Option<i64> {
    let digits = s.strip_prefix(['+', '-']).unwrap_or(s);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// Inteiro que cabe numa coluna INTEGER.
pub fn as_i32(value: &Value) -> Option<i32> {
    as_integer(value).and_then(|n| i32::try_from(n).ok())
}

pub fn as_float(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) if !s.trim().is_empty() => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    // "NaN" e "inf" passam no parse do Rust, mas não são números válidos aqui.
    parsed.filter(|f| f.is_finite())
}

pub fn as_decimal(value: &Value) -> Option<Decimal> {
    let text = match value {
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.trim().to_string(),
        _ => return None,
    };
    Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .ok()
}

/// Representação usada nas mensagens de erro.
pub fn display(value: Option<&Value>) -> String {
    match value {
        None => "undefined".to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

// ---
// Conversão para os payloads tipados (depois que as regras passaram)
// ---

fn invalid(body: &Map<String, Value>, key: &str) -> AppError {
    AppError::field(FieldError::new(
        key,
        Location::Body,
        body.get(key),
        format!("El campo {key} tiene un formato inválido"),
    ))
}

pub fn required_string(body: &Map<String, Value>, key: &str) -> Result<String, AppError> {
    body.get(key)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| invalid(body, key))
}

pub fn required_i32(body: &Map<String, Value>, key: &str) -> Result<i32, AppError> {
    body.get(key).and_then(as_i32).ok_or_else(|| invalid(body, key))
}

pub fn required_decimal(body: &Map<String, Value>, key: &str) -> Result<Decimal, AppError> {
    body.get(key).and_then(as_decimal).ok_or_else(|| invalid(body, key))
}

pub fn optional_bool(body: &Map<String, Value>, key: &str) -> Result<Option<bool>, AppError> {
    match body.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Bool(b)) => Ok(Some(*b)),
        Some(_) => Err(invalid(body, key)),
    }
}
