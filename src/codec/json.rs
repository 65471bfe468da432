use serde_json::{Number, Value};

// Largest integer a JSON consumer can represent exactly as an IEEE double.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Rewrite integral floats as integers, recursively.
///
/// `serde_json` prints `1.0_f64` as `1.0`; browser-side `JSON.stringify` prints
/// `1`. Exported files must match the latter byte for byte.
pub(crate) fn normalize_numbers(value: &mut Value) {
    match value {
        Value::Number(n) => {
            if let Some(int) = integral(n) {
                *n = Number::from(int);
            }
        }
        Value::Array(items) => items.iter_mut().for_each(normalize_numbers),
        Value::Object(map) => map.values_mut().for_each(normalize_numbers),
        Value::Null | Value::Bool(_) | Value::String(_) => {}
    }
}

fn integral(n: &Number) -> Option<i64> {
    if n.is_i64() || n.is_u64() {
        return None;
    }
    let f = n.as_f64()?;
    if f.fract() != 0.0 || f.abs() > MAX_SAFE_INTEGER {
        return None;
    }
    // `-0.0` prints as `0` in JSON.stringify as well.
    Some(f as i64)
}

/// Serialize to a normalized JSON value.
pub(crate) fn to_normalized_value<T: serde::Serialize>(v: &T) -> serde_json::Result<Value> {
    let mut value = serde_json::to_value(v)?;
    normalize_numbers(&mut value);
    Ok(value)
}

#[cfg(test)]
#[path = "../../tests/unit/codec/json.rs"]
mod tests;
