//! Form value coercion
//!
//! Raw form values arrive as untyped JSON. A value is *falsy* when it is
//! `null`, `false`, zero or the empty string; every other value is *truthy*
//! and coerces to a string.

use serde_json::Value;

/// Whether a raw value counts as filled in
#[must_use]
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// String form of a truthy value, `None` for falsy ones
#[must_use]
pub fn coerce(value: &Value) -> Option<String> {
    if !is_truthy(value) {
        return None;
    }

    let text = match value {
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n
            .as_i64()
            .map(|i| i.to_string())
            .or_else(|| n.as_u64().map(|u| u.to_string()))
            .or_else(|| n.as_f64().map(|f| f.to_string()))
            .unwrap_or_else(|| n.to_string()),
        other => other.to_string(),
    };
    Some(text)
}

/// Coerce an optional object field, treating a missing key as falsy
#[inline]
#[must_use]
pub fn coerce_field(value: Option<&Value>) -> Option<String> {
    value.and_then(coerce)
}

/// Whether a normalised field holds a non-empty value
#[inline]
#[must_use]
pub fn is_filled(field: Option<&str>) -> bool {
    field.is_some_and(|s| !s.is_empty())
}
