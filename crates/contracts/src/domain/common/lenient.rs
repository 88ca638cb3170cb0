//! Lenient deserializers for loosely typed backend payloads.
//!
//! The backend is not strongly typed end-to-end: ids and amounts arrive
//! either as JSON numbers or as numeric strings, text fields sometimes as
//! numbers or `null`. These helpers are used with `#[serde(deserialize_with)]`.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

fn value_to_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().map(|f| f as i64))
        }
        Value::Bool(b) => Some(i64::from(*b)),
        _ => None,
    }
}

fn value_to_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

/// Converts a scalar JSON value into display text (`null` becomes empty).
pub fn value_to_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}

/// Integer from number or numeric string; anything else becomes `0`.
pub fn de_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value_to_i64(&value).unwrap_or_default())
}

/// Optional integer; empty strings, `0` and `null` become `None`.
pub fn de_opt_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value_to_i64(&value).filter(|id| *id > 0))
}

/// Float from number or numeric string; anything else becomes `0.0`.
pub fn de_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value_to_f64(&value).unwrap_or_default())
}

/// Text from string, number or `null`.
pub fn de_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value_to_string(&value))
}

/// Formats a float for a form input: integers without a trailing `.0`.
pub fn number_to_input(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

/// Optional id for a form input (`None` becomes empty).
pub fn id_to_input(id: Option<i64>) -> String {
    id.map(|v| v.to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Probe {
        #[serde(deserialize_with = "de_i64", default)]
        id: i64,
        #[serde(deserialize_with = "de_f64", default)]
        amount: f64,
        #[serde(deserialize_with = "de_string", default)]
        phone: String,
        #[serde(deserialize_with = "de_opt_id", default)]
        vendor_id: Option<i64>,
    }

    #[test]
    fn accepts_numbers_as_strings() {
        let p: Probe = serde_json::from_str(
            r#"{"id":"42","amount":"12.5","phone":9876543210,"vendor_id":"7"}"#,
        )
        .unwrap();
        assert_eq!(p.id, 42);
        assert_eq!(p.amount, 12.5);
        assert_eq!(p.phone, "9876543210");
        assert_eq!(p.vendor_id, Some(7));
    }

    #[test]
    fn null_and_garbage_fall_back_to_defaults() {
        let p: Probe = serde_json::from_str(
            r#"{"id":null,"amount":"n/a","phone":null,"vendor_id":""}"#,
        )
        .unwrap();
        assert_eq!(p.id, 0);
        assert_eq!(p.amount, 0.0);
        assert_eq!(p.phone, "");
        assert_eq!(p.vendor_id, None);
    }

    #[test]
    fn number_to_input_drops_integral_fraction() {
        assert_eq!(number_to_input(25.0), "25");
        assert_eq!(number_to_input(2.75), "2.75");
    }
}
