//! Firestore REST document value encoding and decoding.
//!
//! The Firestore REST API wraps every field in a typed value object:
//!
//! ```json
//! {
//!   "name": "projects/p/databases/(default)/documents/products/aZ3xK9pQ",
//!   "fields": {
//!     "name": { "stringValue": "Royal Maroon Wedding Sherwani" },
//!     "price": { "doubleValue": 45000 },
//!     "featured": { "booleanValue": true },
//!     "sizes": { "arrayValue": { "values": [ { "stringValue": "40" } ] } }
//!   }
//! }
//! ```
//!
//! This module provides the pure transforms between that wire shape and plain
//! Rust values. It performs no I/O; the per-binary clients own the HTTP side.

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde_json::{Map, Value, json};

/// The `fields` object of a Firestore document.
pub type FieldMap = Map<String, Value>;

// =============================================================================
// Encoding
// =============================================================================

/// Encode a string field value.
#[must_use]
pub fn string_value(s: impl Into<String>) -> Value {
    json!({ "stringValue": s.into() })
}

/// Encode a double field value.
#[must_use]
pub fn double_value(n: f64) -> Value {
    json!({ "doubleValue": n })
}

/// Encode a decimal amount as a double field value.
///
/// Firestore has no decimal type; doubles are how the original documents
/// store prices and ratings.
#[must_use]
pub fn decimal_value(d: Decimal) -> Value {
    // f64 has 15-16 significant digits; catalog prices are far below that.
    json!({ "doubleValue": d.to_f64().unwrap_or_default() })
}

/// Encode an integer field value (wire format is a decimal string).
#[must_use]
pub fn integer_value(n: i64) -> Value {
    json!({ "integerValue": n.to_string() })
}

/// Encode an explicit null field value.
///
/// Written for absent optionals so a merge patch clears the stored field
/// instead of leaving the previous value behind.
#[must_use]
pub fn null_value() -> Value {
    json!({ "nullValue": null })
}

/// Encode a boolean field value.
#[must_use]
pub fn boolean_value(b: bool) -> Value {
    json!({ "booleanValue": b })
}

/// Encode an array of string values.
#[must_use]
pub fn string_array_value(items: &[String]) -> Value {
    let values: Vec<Value> = items.iter().map(|s| string_value(s.clone())).collect();
    json!({ "arrayValue": { "values": values } })
}

// =============================================================================
// Decoding
// =============================================================================

/// Extract the document ID from a full Firestore resource name.
///
/// Resource names look like
/// `projects/{p}/databases/(default)/documents/{collection}/{id}`; the ID is
/// the final path segment.
#[must_use]
pub fn document_id(resource_name: &str) -> &str {
    resource_name
        .rsplit('/')
        .next()
        .unwrap_or(resource_name)
}

/// Get the `fields` map of a document JSON value.
///
/// Documents with no fields (possible in Firestore) yield `None`.
#[must_use]
pub fn document_fields(doc: &Value) -> Option<&FieldMap> {
    doc.get("fields")?.as_object()
}

/// Read a string field.
#[must_use]
pub fn field_str(fields: &FieldMap, name: &str) -> Option<String> {
    fields
        .get(name)?
        .get("stringValue")?
        .as_str()
        .map(ToOwned::to_owned)
}

/// Read a boolean field. Missing fields read as `false`, matching how the
/// original UI treats absent flags.
#[must_use]
pub fn field_bool(fields: &FieldMap, name: &str) -> bool {
    fields
        .get(name)
        .and_then(|v| v.get("booleanValue"))
        .and_then(Value::as_bool)
        .unwrap_or(false)
}

/// Read a numeric field as `f64`, accepting either wire encoding
/// (`doubleValue` number or `integerValue` string).
#[must_use]
pub fn field_f64(fields: &FieldMap, name: &str) -> Option<f64> {
    let value = fields.get(name)?;
    if let Some(double) = value.get("doubleValue").and_then(Value::as_f64) {
        return Some(double);
    }
    value
        .get("integerValue")?
        .as_str()?
        .parse::<f64>()
        .ok()
}

/// Read a numeric field as an exact `Decimal`.
///
/// Goes through the JSON number's textual form rather than `f64` so that a
/// stored `45000` decodes to exactly `45000`.
#[must_use]
pub fn field_decimal(fields: &FieldMap, name: &str) -> Option<Decimal> {
    let value = fields.get(name)?;
    if let Some(double) = value.get("doubleValue") {
        let text = double.as_number()?.to_string();
        return Decimal::from_str(&text).ok();
    }
    let text = value.get("integerValue")?.as_str()?;
    Decimal::from_str(text).ok()
}

/// Read an array-of-strings field. Missing or empty arrays read as empty.
#[must_use]
pub fn field_string_array(fields: &FieldMap, name: &str) -> Vec<String> {
    fields
        .get(name)
        .and_then(|v| v.get("arrayValue"))
        .and_then(|v| v.get("values"))
        .and_then(Value::as_array)
        .map(|values| {
            values
                .iter()
                .filter_map(|v| v.get("stringValue").and_then(Value::as_str))
                .map(ToOwned::to_owned)
                .collect()
        })
        .unwrap_or_default()
}

/// Read an ISO `YYYY-MM-DD` string field as a date.
#[must_use]
pub fn field_date(fields: &FieldMap, name: &str) -> Option<NaiveDate> {
    field_str(fields, name)?.parse().ok()
}

/// Decode a typed Firestore value into plain JSON.
///
/// Handles the value kinds the catalog documents use (strings, numbers,
/// booleans, arrays, maps, timestamps, null). Unknown kinds decode to null.
#[must_use]
pub fn decode_value(value: &Value) -> Value {
    if let Some(s) = value.get("stringValue").and_then(Value::as_str) {
        return Value::String(s.to_owned());
    }
    if let Some(d) = value.get("doubleValue") {
        return d.clone();
    }
    if let Some(i) = value.get("integerValue").and_then(Value::as_str) {
        return i
            .parse::<i64>()
            .map_or(Value::Null, |n| Value::Number(n.into()));
    }
    if let Some(b) = value.get("booleanValue").and_then(Value::as_bool) {
        return Value::Bool(b);
    }
    if let Some(ts) = value.get("timestampValue").and_then(Value::as_str) {
        return Value::String(ts.to_owned());
    }
    if let Some(arr) = value.get("arrayValue") {
        let items = arr
            .get("values")
            .and_then(Value::as_array)
            .map(|values| values.iter().map(decode_value).collect())
            .unwrap_or_default();
        return Value::Array(items);
    }
    if let Some(map) = value.get("mapValue") {
        let fields = map
            .get("fields")
            .and_then(Value::as_object)
            .map(decode_fields)
            .unwrap_or_default();
        return Value::Object(fields);
    }
    Value::Null
}

/// Decode a whole `fields` map into a plain JSON object.
#[must_use]
pub fn decode_fields(fields: &FieldMap) -> Map<String, Value> {
    fields
        .iter()
        .map(|(name, value)| (name.clone(), decode_value(value)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_fields() -> FieldMap {
        let mut fields = FieldMap::new();
        fields.insert("name".into(), string_value("Royal Maroon Wedding Sherwani"));
        fields.insert("price".into(), double_value(45000.0));
        fields.insert("rating".into(), json!({ "doubleValue": 4.5 }));
        fields.insert("stock".into(), integer_value(7));
        fields.insert("featured".into(), boolean_value(true));
        fields.insert(
            "sizes".into(),
            string_array_value(&["38".into(), "40".into(), "42".into()]),
        );
        fields.insert("startDate".into(), string_value("2026-08-01"));
        fields
    }

    #[test]
    fn test_document_id() {
        let name = "projects/hibhana/databases/(default)/documents/products/aZ3xK9pQ";
        assert_eq!(document_id(name), "aZ3xK9pQ");
    }

    #[test]
    fn test_field_str() {
        let fields = sample_fields();
        assert_eq!(
            field_str(&fields, "name").as_deref(),
            Some("Royal Maroon Wedding Sherwani")
        );
        assert_eq!(field_str(&fields, "missing"), None);
    }

    #[test]
    fn test_field_bool_defaults_false() {
        let fields = sample_fields();
        assert!(field_bool(&fields, "featured"));
        assert!(!field_bool(&fields, "isNew"));
    }

    #[test]
    fn test_field_f64_both_encodings() {
        let fields = sample_fields();
        assert_eq!(field_f64(&fields, "rating"), Some(4.5));
        assert_eq!(field_f64(&fields, "stock"), Some(7.0));
    }

    #[test]
    fn test_field_decimal_exact() {
        let fields = sample_fields();
        assert_eq!(
            field_decimal(&fields, "price"),
            Some(Decimal::from(45000))
        );
        assert_eq!(field_decimal(&fields, "stock"), Some(Decimal::from(7)));
    }

    #[test]
    fn test_field_string_array() {
        let fields = sample_fields();
        assert_eq!(field_string_array(&fields, "sizes"), vec!["38", "40", "42"]);
        assert!(field_string_array(&fields, "missing").is_empty());
    }

    #[test]
    fn test_field_date() {
        let fields = sample_fields();
        assert_eq!(
            field_date(&fields, "startDate"),
            Some("2026-08-01".parse().expect("valid date"))
        );
    }

    #[test]
    fn test_decode_fields_to_plain_json() {
        let fields = sample_fields();
        let decoded = decode_fields(&fields);

        assert_eq!(decoded["name"], json!("Royal Maroon Wedding Sherwani"));
        assert_eq!(decoded["price"], json!(45000.0));
        assert_eq!(decoded["stock"], json!(7));
        assert_eq!(decoded["featured"], json!(true));
        assert_eq!(decoded["sizes"], json!(["38", "40", "42"]));
    }

    #[test]
    fn test_decode_nested_map() {
        let value = json!({
            "mapValue": {
                "fields": {
                    "city": { "stringValue": "Kochi" },
                    "pin": { "integerValue": "682001" }
                }
            }
        });
        assert_eq!(decode_value(&value), json!({ "city": "Kochi", "pin": 682_001 }));
    }

    #[test]
    fn test_roundtrip_through_document() {
        let doc = json!({
            "name": "projects/p/databases/(default)/documents/categories/c1",
            "fields": {
                "title": string_value("Indo Western"),
                "slug": string_value("indo-western"),
            }
        });
        let fields = document_fields(&doc).expect("has fields");
        assert_eq!(field_str(fields, "title").as_deref(), Some("Indo Western"));
        assert_eq!(document_id(doc["name"].as_str().expect("name")), "c1");
    }
}
