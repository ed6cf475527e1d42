//! Lenient field decoders for remote JSON.
//!
//! The HR API returns numbers as strings, empty strings for missing values and
//! `null` in arbitrary places. These helpers decode such fields without failing
//! the whole row.

use std::collections::BTreeMap;

use serde::de::{self, DeserializeOwned};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

#[derive(Deserialize)]
#[serde(untagged)]
enum Loose {
    Integer(i64),
    Float(f64),
    Text(String),
    Flag(bool),
}

fn loose_number(value: Option<Loose>) -> Option<f64> {
    match value? {
        Loose::Integer(n) => Some(n as f64),
        Loose::Float(n) => Some(n),
        Loose::Text(s) => s.trim().parse::<f64>().ok(),
        Loose::Flag(_) => None,
    }
    .filter(|n| n.is_finite())
}

/// Decodes a string or number into a string; `null` becomes empty.
pub(crate) fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Loose>::deserialize(deserializer)? {
        Some(Loose::Integer(n)) => n.to_string(),
        Some(Loose::Float(n)) => n.to_string(),
        Some(Loose::Text(s)) => s,
        Some(Loose::Flag(b)) => b.to_string(),
        None => String::new(),
    })
}

/// Decodes an optional string; `null` and blank strings become `None`.
pub(crate) fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Loose>::deserialize(deserializer)? {
        Some(Loose::Text(s)) if !s.trim().is_empty() => Some(s),
        Some(Loose::Integer(n)) => Some(n.to_string()),
        Some(Loose::Float(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// Decodes a non-negative whole number; anything else becomes 0.
pub(crate) fn whole_number<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = loose_number(Option::<Loose>::deserialize(deserializer)?).unwrap_or(0.0);
    Ok(if value <= 0.0 {
        0
    } else {
        value.trunc().min(f64::from(u32::MAX)) as u32
    })
}

/// Decodes a non-negative decimal number; anything else becomes 0.0.
pub(crate) fn decimal_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(loose_number(Option::<Loose>::deserialize(deserializer)?)
        .filter(|n| *n > 0.0)
        .unwrap_or(0.0))
}

/// Decodes `true`/`false`, `1`/`0` and `"1"`/`"yes"`/`"true"` style flags.
pub(crate) fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Loose>::deserialize(deserializer)? {
        Some(Loose::Flag(b)) => b,
        Some(Loose::Integer(n)) => n != 0,
        Some(Loose::Float(n)) => n != 0.0,
        Some(Loose::Text(s)) => matches!(
            s.trim().to_ascii_lowercase().as_str(),
            "1" | "true" | "yes" | "on leave" | "leave"
        ),
        None => false,
    })
}

/// Decodes a keyed object; `null` and the empty list `[]` become an empty map.
///
/// The HR API serializes an empty associative array as `[]`. A non-empty list
/// is still rejected since its entries carry no keys.
pub(crate) fn keyed_map<'de, D, K, V>(deserializer: D) -> Result<BTreeMap<K, V>, D::Error>
where
    D: Deserializer<'de>,
    K: Ord + DeserializeOwned,
    V: DeserializeOwned,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(BTreeMap::new()),
        Value::Array(items) if items.is_empty() => Ok(BTreeMap::new()),
        value @ Value::Object(_) => serde_json::from_value(value).map_err(de::Error::custom),
        other => Err(de::Error::invalid_type(
            unexpected(&other),
            &"an object or an empty list",
        )),
    }
}

fn unexpected(value: &Value) -> de::Unexpected<'_> {
    match value {
        Value::Bool(b) => de::Unexpected::Bool(*b),
        Value::String(s) => de::Unexpected::Str(s),
        Value::Array(_) => de::Unexpected::Seq,
        _ => de::Unexpected::Other("value"),
    }
}
