//! MCP tool-listing conversion.
//!
//! Hosts advertise the catalog to an assistant as MCP `Tool` values. This
//! module lifts each descriptor's input contract and access mode into that
//! shape; it does not serve the protocol itself.

use std::collections::HashMap;

use rust_mcp_schema::{Tool, ToolAnnotations, ToolInputSchema};
use serde_json::{Map as JsonMap, Value as JsonValue};

use crate::model::{Access, ToolDescriptor};

/// Build the MCP tool listing for a validated tool set.
pub fn tool_listing(tools: &[ToolDescriptor]) -> Vec<Tool> {
    tracing::debug!("building tool listing (count={})", tools.len());
    tools.iter().map(tool_definition).collect()
}

fn tool_definition(descriptor: &ToolDescriptor) -> Tool {
    // Fold the disambiguation guidance into the advertised description so the
    // assistant sees it next to the schema.
    let description = format!(
        "{} Do not use for: {}",
        descriptor.use_this_when, descriptor.do_not_use_for
    );
    Tool {
        annotations: Some(ToolAnnotations {
            destructive_hint: None,
            idempotent_hint: None,
            open_world_hint: None,
            read_only_hint: Some(descriptor.access == Access::Ro),
            title: None,
        }),
        description: Some(description),
        input_schema: input_schema_for(descriptor),
        meta: None,
        name: descriptor.name.clone(),
        output_schema: None,
        title: None,
    }
}

/// Lift the descriptor's input schema document into the MCP input schema.
fn input_schema_for(descriptor: &ToolDescriptor) -> ToolInputSchema {
    let required: Vec<String> = descriptor
        .input_schema
        .get("required")
        .and_then(JsonValue::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(|v| v.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default();
    let properties: Option<HashMap<String, JsonMap<String, JsonValue>>> = descriptor
        .input_schema
        .get("properties")
        .and_then(JsonValue::as_object)
        .map(|props| {
            props
                .iter()
                .filter_map(|(key, value)| {
                    value.as_object().map(|o| (key.clone(), o.clone()))
                })
                .collect()
        });
    ToolInputSchema::new(required, properties)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    fn listed(name: &str) -> JsonValue {
        let tools = catalog::tool_descriptors();
        let listing = tool_listing(&tools);
        let tool = listing
            .iter()
            .find(|t| t.name == name)
            .unwrap_or_else(|| panic!("{name} missing from listing"));
        serde_json::to_value(tool).expect("serialize tool")
    }

    #[test]
    fn listing_covers_every_descriptor() {
        let tools = catalog::tool_descriptors();
        assert_eq!(tool_listing(&tools).len(), tools.len());
    }

    #[test]
    fn read_only_access_becomes_annotation() {
        let val = listed("budget.check_offer");
        assert_eq!(val["annotations"]["readOnlyHint"], JsonValue::Bool(true));
        let val = listed("notify.send_alert");
        assert_eq!(val["annotations"]["readOnlyHint"], JsonValue::Bool(false));
    }

    #[test]
    fn input_contract_survives_the_lift() {
        let val = listed("mail.prepare_action");
        let required = val["inputSchema"]["required"]
            .as_array()
            .expect("required array")
            .iter()
            .filter_map(|v| v.as_str())
            .collect::<Vec<_>>();
        assert!(required.contains(&"consent_token"));
        assert!(val["inputSchema"]["properties"]["action"].get("enum").is_some());
    }

    #[test]
    fn guidance_lands_in_the_description() {
        let val = listed("ws.list_members");
        let description = val["description"].as_str().expect("description");
        assert!(description.contains("Do not use for:"));
    }
}
