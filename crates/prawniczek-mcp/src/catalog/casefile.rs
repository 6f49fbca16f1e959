//! Case lifecycle tools (`case.*`).

use serde_json::json;

use super::read_only;
use super::schema::{input_object, output_object, string_enum};
use super::security::WORKSPACE_OAUTH;
use crate::model::{Access, ToolDescriptor, ToolExample};

/// Case registration, document attachment, and summary tools, in catalog order.
pub fn tools() -> Vec<ToolDescriptor> {
    vec![create(), attach_document(), summary()]
}

fn create() -> ToolDescriptor {
    ToolDescriptor {
        name: "case.create".to_string(),
        access: Access::Mut,
        use_this_when:
            "You need to register a new case for a client matter or financial comparison."
                .to_string(),
        do_not_use_for: "Attaching documents or summarising cases.".to_string(),
        input_schema: input_object(
            json!({
                "workspace_id": { "type": "string" },
                "title": { "type": "string" },
                "type": string_enum(
                    &["housing", "litigation", "compliance", "elder", "email"],
                    "Case category used for routing workflows."
                )
            }),
            &["workspace_id", "title", "type"],
        ),
        output_schema: output_object(
            json!({
                "case_id": { "type": "string" }
            }),
            &["case_id"],
        ),
        security_schemes: vec![WORKSPACE_OAUTH.to_string()],
        examples: vec![ToolExample {
            name: "family-case".to_string(),
            description: "Create a housing comparison case inside the family workspace."
                .to_string(),
            arguments: json!({
                "workspace_id": "ws_family",
                "title": "Porównanie ofert bankowych",
                "type": "housing"
            }),
        }],
        metadata: None,
    }
}

fn attach_document() -> ToolDescriptor {
    ToolDescriptor {
        name: "case.attach_document".to_string(),
        access: Access::Mut,
        use_this_when:
            "A new document, statement, or contract needs to be analysed as part of a case."
                .to_string(),
        do_not_use_for: "Summarising a case without adding files.".to_string(),
        input_schema: input_object(
            json!({
                "case_id": { "type": "string" },
                "file": {
                    "type": "object",
                    "required": ["url", "mime", "label"],
                    "properties": {
                        "url": { "type": "string", "format": "uri" },
                        "mime": { "type": "string" },
                        "label": { "type": "string" }
                    },
                    "additionalProperties": false
                }
            }),
            &["case_id", "file"],
        ),
        output_schema: output_object(
            json!({
                "doc_id": { "type": "string" }
            }),
            &["doc_id"],
        ),
        security_schemes: vec![WORKSPACE_OAUTH.to_string()],
        examples: vec![ToolExample {
            name: "attach-term-sheet".to_string(),
            description: "Add the latest bank term sheet to the housing case.".to_string(),
            arguments: json!({
                "case_id": "case_abc",
                "file": {
                    "url": "https://storage.example.com/term-sheet.pdf",
                    "mime": "application/pdf",
                    "label": "Term sheet maj 2024"
                }
            }),
        }],
        metadata: None,
    }
}

fn summary() -> ToolDescriptor {
    ToolDescriptor {
        name: "case.summary".to_string(),
        access: Access::Ro,
        use_this_when:
            "You need an up-to-date compliance and action summary for a case dashboard."
                .to_string(),
        do_not_use_for: "Editing case data or attachments.".to_string(),
        input_schema: input_object(
            json!({
                "case_id": { "type": "string" }
            }),
            &["case_id"],
        ),
        output_schema: output_object(
            json!({
                "status": string_enum(
                    &["green", "amber", "red"],
                    "Compliance state of the case."
                ),
                "breaches": {
                    "type": "array",
                    "items": { "type": "string" }
                },
                "next_actions": {
                    "type": "array",
                    "items": { "type": "string" }
                },
                "timeline": {
                    "type": "array",
                    "items": {
                        "type": "object",
                        "required": ["at", "event"],
                        "properties": {
                            "at": { "type": "string", "format": "date-time" },
                            "event": { "type": "string" }
                        }
                    }
                }
            }),
            &["status", "breaches", "next_actions", "timeline"],
        ),
        security_schemes: vec![WORKSPACE_OAUTH.to_string()],
        examples: vec![ToolExample {
            name: "case-health".to_string(),
            description: "Surface the case summary inside the inline dashboard.".to_string(),
            arguments: json!({
                "case_id": "case_abc"
            }),
        }],
        metadata: read_only(),
    }
}
