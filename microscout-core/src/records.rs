//! Strict decoding of FAQ data into [`FaqRecord`] values.
//!
//! The store hands over raw JSON. Anything that is not an array of
//! `{id, title, body}` objects with string values is rejected here, so the
//! engines never see a partially-formed record.

use crate::error::{CoreError, Result};
use crate::types::FaqRecord;
use serde_json::{Map, Value};
use std::collections::HashSet;

/// Decode a JSON array of FAQ records.
///
/// Unknown fields on a record are ignored.
///
/// # Errors
///
/// Returns [`CoreError::MalformedRecord`] if the input is not a JSON array,
/// an element is not an object, a required field is missing or not a
/// string, or two records share an id.
pub fn parse_records(json: &str) -> Result<Vec<FaqRecord>> {
    let value: Value = serde_json::from_str(json)
        .map_err(|e| CoreError::MalformedRecord(format!("invalid JSON: {e}")))?;
    records_from_value(value)
}

/// Decode records from an already-parsed JSON value.
///
/// # Errors
///
/// Same as [`parse_records`].
pub fn records_from_value(value: Value) -> Result<Vec<FaqRecord>> {
    let Value::Array(items) = value else {
        return Err(CoreError::MalformedRecord(
            "expected a JSON array of records".into(),
        ));
    };

    let mut seen = HashSet::with_capacity(items.len());
    let mut records = Vec::with_capacity(items.len());

    for (index, item) in items.into_iter().enumerate() {
        let record = record_from_value(index, item)?;
        if !seen.insert(record.id.clone()) {
            return Err(CoreError::MalformedRecord(format!(
                "record {index}: duplicate id `{}`",
                record.id
            )));
        }
        records.push(record);
    }

    Ok(records)
}

fn record_from_value(index: usize, item: Value) -> Result<FaqRecord> {
    let Value::Object(map) = item else {
        return Err(CoreError::MalformedRecord(format!(
            "record {index}: expected an object"
        )));
    };

    Ok(FaqRecord {
        id: string_field(&map, index, "id")?,
        title: string_field(&map, index, "title")?,
        body: string_field(&map, index, "body")?,
    })
}

fn string_field(map: &Map<String, Value>, index: usize, name: &str) -> Result<String> {
    match map.get(name) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(CoreError::MalformedRecord(format!(
            "record {index}: field `{name}` must be a string"
        ))),
        None => Err(CoreError::MalformedRecord(format!(
            "record {index}: missing field `{name}`"
        ))),
    }
}
