//! Forgiving field decoders for records written by other clients.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Decodes `null` as the type's default.
pub(crate) fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Decodes a count from an integer, a float, a numeric string or anything else (as 0).
pub(crate) fn count<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(count_from_value(&value))
}

fn count_from_value(value: &Value) -> i64 {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64))
            .unwrap_or(0),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| {
                    s.parse::<f64>()
                        .ok()
                        .filter(|f| f.is_finite())
                        .map(|f| f.trunc() as i64)
                })
                .unwrap_or(0)
        }
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn count_accepts_the_shapes_seen_in_the_wild() {
        assert_eq!(count_from_value(&json!(5)), 5);
        assert_eq!(count_from_value(&json!(5.9)), 5);
        assert_eq!(count_from_value(&json!(" 12 ")), 12);
        assert_eq!(count_from_value(&json!("3.5")), 3);
        assert_eq!(count_from_value(&json!("lots")), 0);
        assert_eq!(count_from_value(&json!(null)), 0);
        assert_eq!(count_from_value(&json!([1])), 0);
    }
}
