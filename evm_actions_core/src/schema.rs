//! Structural validation of action inputs against their declared schema.
//!
//! Schemas are the JSON-schema-shaped objects each action builds in its
//! constructor: `{"type": "object", "properties": {...}, "required": [...],
//! "additionalProperties": false}`. Validation checks required fields and
//! primitive types only; anything fancier belongs in the handler.

use serde_json::Value;

use crate::error::ActionError;

/// Validate `input` against an action's `input_schema`.
///
/// Returns the first mismatch as `ActionError::Validation { field, reason }`
/// so the handler is never invoked with malformed input.
pub fn validate(input: &Value, schema: &Value) -> Result<(), ActionError> {
    let input_obj = input
        .as_object()
        .ok_or_else(|| ActionError::validation("input", "expected a JSON object"))?;

    let empty = serde_json::Map::new();
    let properties = schema["properties"].as_object().unwrap_or(&empty);

    if let Some(required) = schema["required"].as_array() {
        for field in required.iter().filter_map(|f| f.as_str()) {
            if !input_obj.contains_key(field) {
                return Err(ActionError::validation(field, "missing required field"));
            }
        }
    }

    let closed = schema["additionalProperties"] == Value::Bool(false);

    for (field, value) in input_obj {
        let Some(spec) = properties.get(field) else {
            if closed {
                return Err(ActionError::validation(field, "unexpected field"));
            }
            continue;
        };
        check_type(field, value, &spec["type"])?;
    }

    Ok(())
}

// A declared type is either a single name or a list of alternatives,
// e.g. ["string", "null"].
fn check_type(field: &str, value: &Value, declared: &Value) -> Result<(), ActionError> {
    let matches = match declared {
        Value::String(ty) => type_matches(value, ty),
        Value::Array(alternatives) => alternatives
            .iter()
            .filter_map(|t| t.as_str())
            .any(|ty| type_matches(value, ty)),
        // No type declared; accept anything.
        _ => true,
    };

    if matches {
        Ok(())
    } else {
        Err(ActionError::validation(
            field,
            format!("expected {declared}"),
        ))
    }
}

fn type_matches(value: &Value, ty: &str) -> bool {
    match ty {
        "string" => value.is_string(),
        "number" => value.is_number(),
        "integer" => value.is_i64() || value.is_u64(),
        "boolean" => value.is_boolean(),
        "array" => value.is_array(),
        "object" => value.is_object(),
        "null" => value.is_null(),
        _ => true,
    }
}
