//! Typed field readers over `serde_json::Value`
//!
//! Payloads from Twitch are loose about scalar types: ids arrive as strings or
//! numbers, timestamps as numbers or numeric strings, flags as booleans or
//! `"true"`/`"false"`. These helpers accept all of those and report failures by
//! wire field name. An explicit `null` is treated the same as an absent key.

use serde_json::Value;

use crate::error::{DecodeError, Result};

/// Look up a field, treating `null` and non-object parents as absent
pub(crate) fn field<'a>(obj: &'a Value, name: &str) -> Option<&'a Value> {
    match obj.get(name) {
        None | Some(Value::Null) => None,
        Some(value) => Some(value),
    }
}

/// Textual form of a scalar; containers render as compact JSON
pub(crate) fn text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Read a required field as text
pub(crate) fn required_str(obj: &Value, name: &'static str) -> Result<String> {
    field(obj, name)
        .map(text)
        .ok_or(DecodeError::missing_field(name))
}

/// Read an optional field as text
pub(crate) fn optional_str(obj: &Value, name: &str) -> Option<String> {
    field(obj, name).map(text)
}

/// Read a required integer field
///
/// Accepts JSON integers and strings holding an optionally signed decimal
/// integer. Fractions, exponents and out-of-range values are rejected.
pub(crate) fn required_int<T>(obj: &Value, name: &'static str) -> Result<T>
where
    T: TryFrom<i64>,
{
    let value = field(obj, name).ok_or(DecodeError::missing_field(name))?;
    let wide = match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
    .ok_or(DecodeError::invalid_number(name))?;
    T::try_from(wide).map_err(|_| DecodeError::invalid_number(name))
}

/// Read a required boolean field
///
/// Accepts JSON booleans and the text `true`/`false` in any letter case.
pub(crate) fn required_bool(obj: &Value, name: &'static str) -> Result<bool> {
    match field(obj, name).ok_or(DecodeError::missing_field(name))? {
        Value::Bool(b) => Ok(*b),
        Value::String(s) => {
            let s = s.trim();
            if s.eq_ignore_ascii_case("true") {
                Ok(true)
            } else if s.eq_ignore_ascii_case("false") {
                Ok(false)
            } else {
                Err(DecodeError::invalid_boolean(name))
            }
        }
        _ => Err(DecodeError::invalid_boolean(name)),
    }
}

/// Read a required array field; absent or non-array values are missing
pub(crate) fn required_array<'a>(obj: &'a Value, name: &'static str) -> Result<&'a [Value]> {
    field(obj, name)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .ok_or(DecodeError::missing_field(name))
}

/// Read a required object field; absent or non-object values are missing
pub(crate) fn required_object<'a>(obj: &'a Value, name: &'static str) -> Result<&'a Value> {
    field(obj, name)
        .filter(|value| value.is_object())
        .ok_or(DecodeError::missing_field(name))
}
