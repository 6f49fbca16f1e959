//! JSON Schema builders shared by the tool catalog.
//!
//! Input contracts are closed objects (`additionalProperties: false`); output
//! documents stay open so hosts may enrich results.

use serde_json::{Value, json};

/// Closed object schema for a tool input contract.
pub fn input_object(properties: Value, required: &[&str]) -> Value {
    json!({
        "type": "object",
        "required": required,
        "properties": properties,
        "additionalProperties": false
    })
}

/// Open object schema for a tool output document.
pub fn output_object(properties: Value, required: &[&str]) -> Value {
    json!({
        "type": "object",
        "required": required,
        "properties": properties
    })
}

/// String schema with a description.
pub fn string(description: &str) -> Value {
    json!({
        "type": "string",
        "description": description
    })
}

/// Closed string enumeration with a description.
pub fn string_enum(values: &[&str], description: &str) -> Value {
    json!({
        "type": "string",
        "enum": values,
        "description": description
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_objects_are_closed() {
        let schema = input_object(json!({ "id": { "type": "string" } }), &["id"]);
        assert_eq!(schema["additionalProperties"], json!(false));
        assert_eq!(schema["required"], json!(["id"]));
    }

    #[test]
    fn output_objects_stay_open() {
        let schema = output_object(json!({ "id": { "type": "string" } }), &["id"]);
        assert!(schema.get("additionalProperties").is_none());
    }
}
