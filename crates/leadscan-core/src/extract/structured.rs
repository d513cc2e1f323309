//! Structured-payload extraction: a serialized object with a nested name.

use serde_json::Value;

use super::Result;
use crate::error::ExtractionError;
use crate::models::record::{self, FieldMap};

/// Extract fields from a payload of the shape
/// `{"name": {"firstname": .., "lastname": ..}, "company"?, "phone"?, "email"?}`.
///
/// The presence checks run in a fixed order: whole name object, then first
/// name, then last name. An empty string counts as absent.
pub(super) fn extract(payload: &str) -> Result<FieldMap> {
    if payload.trim().is_empty() {
        return Err(ExtractionError::Empty);
    }

    let value: Value = serde_json::from_str(payload)
        .map_err(|e| ExtractionError::Malformed(e.to_string()))?;
    let object = value
        .as_object()
        .ok_or_else(|| ExtractionError::Malformed("payload is not an object".to_string()))?;

    let name = object
        .get("name")
        .and_then(Value::as_object)
        .ok_or_else(|| ExtractionError::MissingField("name".to_string()))?;
    let firstname = non_empty(name.get("firstname"))
        .ok_or_else(|| ExtractionError::MissingField("name.firstname".to_string()))?;
    let lastname = non_empty(name.get("lastname"))
        .ok_or_else(|| ExtractionError::MissingField("name.lastname".to_string()))?;

    let mut fields = FieldMap::new();
    fields.insert(record::FIRST_NAME, firstname);
    fields.insert(record::LAST_NAME, lastname);

    // Optionals are copied through only when present and non-empty.
    for (key, logical) in [
        ("company", record::COMPANY),
        ("phone", record::PHONE),
        ("email", record::EMAIL),
    ] {
        if let Some(text) = non_empty(object.get(key)) {
            fields.insert(logical, text);
        }
    }

    Ok(fields)
}

fn non_empty(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str).filter(|s| !s.is_empty())
}
