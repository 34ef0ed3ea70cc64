//! Input guards applied before any request is sent.

use crate::{Error, ErrorContext, Result};
use serde_json::Value;

/// Validate that `value` is non-empty once surrounding whitespace is ignored.
pub fn validate_non_empty_string(value: &str, param_name: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::validation_with_context(
            format!("{} cannot be empty", param_name),
            ErrorContext::new()
                .with_field_path(param_name)
                .with_source("validation"),
        ));
    }
    Ok(())
}

/// Validate that a JSON value is a non-empty string and return it.
pub fn validate_string_value<'a>(value: &'a Value, param_name: &str) -> Result<&'a str> {
    let s = value.as_str().ok_or_else(|| {
        Error::validation_with_context(
            format!("{} must be a string", param_name),
            ErrorContext::new()
                .with_field_path(param_name)
                .with_details(format!("got {}", json_type_name(value)))
                .with_source("validation"),
        )
    })?;
    validate_non_empty_string(s, param_name)?;
    Ok(s)
}

/// Validate that a JSON value is an object. The empty object is accepted.
pub fn validate_object(value: &Value, param_name: &str) -> Result<()> {
    if !value.is_object() {
        return Err(Error::validation_with_context(
            format!("{} must be an object", param_name),
            ErrorContext::new()
                .with_field_path(param_name)
                .with_details(format!("got {}", json_type_name(value)))
                .with_source("validation"),
        ));
    }
    Ok(())
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
