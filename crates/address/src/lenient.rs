//! Field decoders for request bodies written by hand.
//!
//! Only a missing `cep` makes a body invalid, so the other fields take
//! whatever JSON they are given and fall back to their empty value.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Identifier: the repository assigns its own, so anything that is not an
/// unsigned integer reads as `0`.
pub(crate) fn id<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Value::deserialize(deserializer)?
        .as_u64()
        .unwrap_or_default())
}

/// Ordering value: integers as is, fractions truncated toward zero, numeric
/// strings parsed, anything else `0`.
pub(crate) fn order<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let order = match Value::deserialize(deserializer)? {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .unwrap_or_default(),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| {
                    s.parse::<f64>()
                        .ok()
                        .filter(|f| f.is_finite())
                        .map(|f| f as i64)
                })
                .unwrap_or_default()
        }
        _ => 0,
    };
    Ok(order)
}

/// Text field: `null` reads as empty, scalars keep their JSON spelling.
pub(crate) fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let text = match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    };
    Ok(text)
}
