//! Interop with `serde_json` — the boundary where values are parsed and
//! printed.
//!
//! `serde_json::Value` (with the `preserve_order` feature, so object key
//! order survives) is the external representation; conversions in both
//! directions are total:
//!
//! - Numbers representable as `i64` become [`Value::Integer`]; everything
//!   else (non-integral numbers, `u64` values above `i64::MAX`) becomes
//!   [`Value::Float`]. Above 2^53 the `u64` path is lossy.
//! - A non-finite [`Value::Float`] (only constructible programmatically)
//!   has no JSON form and serializes as `null`.
//!
//! Parsed input inherits serde_json's recursion limit, which bounds the
//! nesting depth of anything arriving through [`from_json`]; only values
//! built programmatically can be deeper.

use crate::error::Result;
use crate::value::Value;
use serde_json::{Map, Number};

/// Parse a JSON string into a [`Value`].
pub fn from_json(json: &str) -> Result<Value> {
    let parsed: serde_json::Value = serde_json::from_str(json)?;
    Ok(Value::from(parsed))
}

/// Serialize a [`Value`] to compact JSON.
pub fn to_json(value: &Value) -> Result<String> {
    Ok(serde_json::to_string(&serde_json::Value::from(value))?)
}

/// Serialize a [`Value`] to pretty-printed JSON.
pub fn to_json_pretty(value: &Value) -> Result<String> {
    Ok(serde_json::to_string_pretty(&serde_json::Value::from(
        value,
    ))?)
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => from_number(&n),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Sequence(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Value::Mapping(
                map.into_iter()
                    .map(|(key, child)| (key, Value::from(child)))
                    .collect(),
            ),
        }
    }
}

fn from_number(n: &Number) -> Value {
    if let Some(i) = n.as_i64() {
        Value::Integer(i)
    } else if let Some(f) = n.as_f64() {
        // u64 values above i64::MAX land here, losing precision past 2^53.
        Value::Float(f)
    } else {
        Value::Null
    }
}

impl From<&Value> for serde_json::Value {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::Integer(n) => serde_json::Value::Number(Number::from(*n)),
            Value::Float(f) => match Number::from_f64(*f) {
                Some(n) => serde_json::Value::Number(n),
                // NaN and infinities have no JSON representation.
                None => serde_json::Value::Null,
            },
            Value::String(s) => serde_json::Value::String(s.clone()),
            Value::Sequence(items) => {
                serde_json::Value::Array(items.iter().map(Self::from).collect())
            }
            Value::Mapping(entries) => {
                // Later duplicate keys win, matching JSON object semantics.
                let mut map = Map::with_capacity(entries.len());
                for (key, child) in entries {
                    map.insert(key.clone(), Self::from(child));
                }
                serde_json::Value::Object(map)
            }
        }
    }
}

impl From<Value> for serde_json::Value {
    fn from(value: Value) -> Self {
        Self::from(&value)
    }
}
