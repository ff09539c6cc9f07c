//! Conversion from DynamoDB attribute values to plain JSON.
//!
//! Items come back from the SDK as `HashMap<String, AttributeValue>`.
//! The response body is plain JSON, so every item is unmarshalled here:
//!
//! - `S` -> string, `BOOL` -> bool, `NULL` -> null
//! - `N` -> number (integers stay integers, everything else is `f64`)
//! - `L` / `M` -> array / object, recursively
//! - `SS` / `NS` -> arrays of strings / numbers
//! - `B` / `BS` -> arrays of byte values
//!
//! Anything we cannot represent is reported as [`StoreError::Malformed`]
//! with the dotted path of the offending attribute.

use std::collections::HashMap;

use aws_sdk_dynamodb::primitives::Blob;
use aws_sdk_dynamodb::types::AttributeValue;
use serde_json::{Number, Value};

use crate::error::{Result, StoreError};
use crate::types::{Attributes, MovieId};

/// Attribute value used for a numeric key in `Key` and
/// `ExpressionAttributeValues`.
pub fn key_value(id: MovieId) -> AttributeValue {
    AttributeValue::N(id.to_string())
}

/// Convert a whole item into an attribute map.
pub fn item_to_attributes(item: HashMap<String, AttributeValue>) -> Result<Attributes> {
    let mut attributes = Attributes::new();
    for (name, value) in item {
        let json = attribute_to_json(&name, value)?;
        attributes.insert(name, json);
    }
    Ok(attributes)
}

/// Convert a single attribute value. `path` is only used in error messages.
pub fn attribute_to_json(path: &str, value: AttributeValue) -> Result<Value> {
    match value {
        AttributeValue::S(s) => Ok(Value::String(s)),
        AttributeValue::N(n) => number_to_json(path, &n),
        AttributeValue::Bool(b) => Ok(Value::Bool(b)),
        AttributeValue::Null(_) => Ok(Value::Null),
        AttributeValue::B(blob) => Ok(blob_to_json(blob)),
        AttributeValue::L(values) => values
            .into_iter()
            .enumerate()
            .map(|(i, v)| attribute_to_json(&format!("{path}[{i}]"), v))
            .collect::<Result<Vec<_>>>()
            .map(Value::Array),
        AttributeValue::M(map) => {
            let mut object = Attributes::new();
            for (key, v) in map {
                let json = attribute_to_json(&format!("{path}.{key}"), v)?;
                object.insert(key, json);
            }
            Ok(Value::Object(object))
        }
        AttributeValue::Ss(values) => Ok(Value::Array(
            values.into_iter().map(Value::String).collect(),
        )),
        AttributeValue::Ns(values) => values
            .iter()
            .map(|n| number_to_json(path, n))
            .collect::<Result<Vec<_>>>()
            .map(Value::Array),
        AttributeValue::Bs(blobs) => Ok(Value::Array(
            blobs.into_iter().map(blob_to_json).collect(),
        )),
        _ => Err(StoreError::Malformed {
            attribute: path.to_string(),
            reason: "unsupported attribute type".to_string(),
        }),
    }
}

/// Parse the string form of a DynamoDB number.
///
/// Integers that fit `i64` (or `u64`) are kept exact; anything else goes
/// through `f64`. A float with no fractional part inside the `i64` range
/// (`1E+2`, `2.50E1`) is emitted as an integer. NaN and infinities have no
/// JSON representation.
fn number_to_json(path: &str, raw: &str) -> Result<Value> {
    let raw = raw.trim();
    if let Ok(n) = raw.parse::<i64>() {
        return Ok(Value::from(n));
    }
    if let Ok(n) = raw.parse::<u64>() {
        return Ok(Value::from(n));
    }

    let malformed = || StoreError::Malformed {
        attribute: path.to_string(),
        reason: format!("not a number: {raw}"),
    };
    let n = raw.parse::<f64>().map_err(|_| malformed())?;
    if n.fract() == 0.0 && n >= i64::MIN as f64 && n < i64::MAX as f64 {
        return Ok(Value::from(n as i64));
    }
    Number::from_f64(n).map(Value::Number).ok_or_else(malformed)
}

fn blob_to_json(blob: Blob) -> Value {
    Value::Array(blob.into_inner().into_iter().map(Value::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn item(pairs: Vec<(&str, AttributeValue)>) -> HashMap<String, AttributeValue> {
        pairs
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect()
    }

    #[test]
    fn test_scalar_attributes() {
        let converted = item_to_attributes(item(vec![
            ("id", AttributeValue::N("42".to_string())),
            ("title", AttributeValue::S("X".to_string())),
            ("adult", AttributeValue::Bool(false)),
            ("tagline", AttributeValue::Null(true)),
            ("popularity", AttributeValue::N("7.25".to_string())),
        ]))
        .unwrap();

        assert_eq!(
            Value::Object(converted),
            json!({
                "id": 42,
                "title": "X",
                "adult": false,
                "tagline": null,
                "popularity": 7.25
            })
        );
    }

    #[test]
    fn test_nested_list_and_map() {
        let details = AttributeValue::M(item(vec![
            ("director", AttributeValue::S("Someone".to_string())),
            (
                "genreIds",
                AttributeValue::L(vec![
                    AttributeValue::N("18".to_string()),
                    AttributeValue::N("53".to_string()),
                ]),
            ),
        ]));

        let value = attribute_to_json("details", details).unwrap();
        assert_eq!(value, json!({"director": "Someone", "genreIds": [18, 53]}));
    }

    #[test]
    fn test_sets_and_binary() {
        let value = attribute_to_json(
            "languages",
            AttributeValue::Ss(vec!["en".to_string(), "fr".to_string()]),
        )
        .unwrap();
        assert_eq!(value, json!(["en", "fr"]));

        let value = attribute_to_json(
            "scores",
            AttributeValue::Ns(vec!["1".to_string(), "2.5".to_string()]),
        )
        .unwrap();
        assert_eq!(value, json!([1, 2.5]));

        let value = attribute_to_json("poster", AttributeValue::B(Blob::new(vec![1u8, 2, 255])))
            .unwrap();
        assert_eq!(value, json!([1, 2, 255]));
    }

    #[test]
    fn test_large_unsigned_number_stays_exact() {
        let value = attribute_to_json("budget", AttributeValue::N("18446744073709551615".to_string()))
            .unwrap();
        assert_eq!(value, json!(u64::MAX));
    }

    #[test]
    fn test_exponent_form_integers_stay_integers() {
        let value = attribute_to_json("revenue", AttributeValue::N("1E+2".to_string())).unwrap();
        assert_eq!(value, json!(100));
        assert!(value.is_i64());

        let value = attribute_to_json("runtime", AttributeValue::N("2.50E1".to_string())).unwrap();
        assert_eq!(value, json!(25));

        let value = attribute_to_json("rating", AttributeValue::N("7.5E-1".to_string())).unwrap();
        assert_eq!(value, json!(0.75));
    }

    #[test]
    fn test_bad_number_reports_path() {
        let nested = AttributeValue::L(vec![
            AttributeValue::N("1".to_string()),
            AttributeValue::N("NaN".to_string()),
        ]);

        let err = attribute_to_json("ratings", nested).unwrap_err();
        assert_eq!(
            err,
            StoreError::Malformed {
                attribute: "ratings[1]".to_string(),
                reason: "not a number: NaN".to_string(),
            }
        );
    }

    #[test]
    fn test_key_value_is_number() {
        assert_eq!(key_value(42), AttributeValue::N("42".to_string()));
    }
}
