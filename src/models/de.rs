//! Lenient deserialization helpers.
//!
//! Listing documents arrive from a remote document store where numeric
//! fields are sometimes stored as strings and boolean flags as 0/1 or
//! "true"/"false". These helpers coerce instead of rejecting, so a single
//! malformed field never drops an entire listing.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Numeric field that must always have a value. Non-numeric input
/// coerces to 0.0.
pub fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_f64(&value).unwrap_or(0.0))
}

/// Optional numeric field. Null/absent stays `None`; a present but
/// unparseable value also resolves to `None` so fallback chains can move
/// on to the next source field.
pub fn lenient_opt_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_f64(&value))
}

/// Coordinate component. Unlike [`lenient_f64`], a bad value becomes NaN
/// rather than 0.0 — a (0, 0) coordinate is a real place, NaN makes the
/// distance undefined as intended.
pub fn lenient_coord<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_f64(&value).unwrap_or(f64::NAN))
}

/// Boolean flag. Accepts bool, 0/1 numbers, and "true"/"1"/"evet"
/// strings; anything else is falsy.
pub fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Bool(b) => b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(false),
        Value::String(s) => {
            let s = s.trim().to_lowercase();
            s == "true" || s == "1" || s == "evet"
        }
        _ => false,
    })
}

/// Categorical/string field. Numbers render as their decimal text so
/// fields like `bathroomCount` compare the same whether stored as 2 or "2".
pub fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    })
}

fn coerce_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}
