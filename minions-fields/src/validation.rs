//! Field validation against a type schema.
//!
//! Validation collects every problem rather than stopping at the first one,
//! so callers can report all field errors together.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::types::{FieldDef, FieldKind};

/// A single field-level validation failure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Outcome of validating a set of field values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Vec<FieldError>,
}

impl ValidationResult {
    fn from_errors(errors: Vec<FieldError>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }
}

/// Validate field values against a schema.
///
/// `fields` must be a JSON object. Each schema field is checked in order;
/// keys that the schema doesn't mention are accepted as-is.
pub fn validate_fields(fields: &Value, schema: &[FieldDef]) -> ValidationResult {
    let Some(map) = fields.as_object() else {
        return ValidationResult::from_errors(vec![FieldError::new(
            "fields",
            format!("Expected object, got {}", json_kind(fields)),
        )]);
    };

    let mut errors = Vec::new();
    for def in schema {
        match map.get(&def.name) {
            None | Some(Value::Null) => {
                if def.required {
                    errors.push(FieldError::new(&def.name, "Required field is missing"));
                }
            }
            Some(value) => {
                if let Some(message) = check_value(def, value) {
                    errors.push(FieldError::new(&def.name, message));
                }
            }
        }
    }

    ValidationResult::from_errors(errors)
}

fn check_value(def: &FieldDef, value: &Value) -> Option<String> {
    let type_ok = match def.kind {
        FieldKind::String | FieldKind::Select => value.is_string(),
        FieldKind::Number => value.is_number(),
        FieldKind::Boolean => value.is_boolean(),
    };
    if !type_ok {
        return Some(format!("Expected {}, got {}", def.kind, json_kind(value)));
    }

    if def.kind == FieldKind::Select && !def.options.is_empty() {
        let v = value.as_str().unwrap_or_default();
        if !def.options.iter().any(|o| o == v) {
            return Some(format!(
                "Value '{}' is not one of: {}",
                v,
                def.options.join(", ")
            ));
        }
    }

    None
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
