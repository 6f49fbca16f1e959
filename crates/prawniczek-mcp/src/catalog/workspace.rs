//! Workspace lifecycle tools (`ws.*`).

use serde_json::json;

use super::read_only;
use super::schema::{input_object, output_object, string, string_enum};
use super::security::WORKSPACE_OAUTH;
use crate::model::{Access, ToolDescriptor, ToolExample};

/// Workspace creation, membership, and audit tools, in catalog order.
pub fn tools() -> Vec<ToolDescriptor> {
    vec![create_workspace(), invite_member(), list_members()]
}

fn create_workspace() -> ToolDescriptor {
    ToolDescriptor {
        name: "ws.create_workspace".to_string(),
        access: Access::Mut,
        use_this_when:
            "You need to create a new workspace for a family, law firm, or elder support plan."
                .to_string(),
        do_not_use_for: "Listing existing workspaces or inviting members.".to_string(),
        input_schema: input_object(
            json!({
                "name": string("Human readable workspace name such as 'Mieszkanie 2026'."),
                "plan": string_enum(
                    &["family", "business", "elder"],
                    "Workspace plan that tunes policies and budgets."
                )
            }),
            &["name", "plan"],
        ),
        output_schema: output_object(
            json!({
                "workspace_id": string("Identifier for the newly created workspace.")
            }),
            &["workspace_id"],
        ),
        security_schemes: vec![WORKSPACE_OAUTH.to_string()],
        examples: vec![ToolExample {
            name: "create-family-plan".to_string(),
            description: "Initialize the Family Plan workspace for housing comparison."
                .to_string(),
            arguments: json!({
                "name": "Mieszkanie 2026",
                "plan": "family"
            }),
        }],
        metadata: None,
    }
}

fn invite_member() -> ToolDescriptor {
    ToolDescriptor {
        name: "ws.invite_member".to_string(),
        access: Access::Mut,
        use_this_when:
            "A collaborator needs access to an existing workspace with a specific role.".to_string(),
        do_not_use_for: "Creating workspaces or changing guardrails.".to_string(),
        input_schema: input_object(
            json!({
                "workspace_id": { "type": "string" },
                "email": { "type": "string", "format": "email" },
                "role": string_enum(
                    &["owner", "member", "viewer", "guardian"],
                    "Role assignment controlling available actions."
                )
            }),
            &["workspace_id", "email", "role"],
        ),
        output_schema: output_object(
            json!({
                "workspace_id": { "type": "string" },
                "email": { "type": "string", "format": "email" }
            }),
            &["workspace_id", "email"],
        ),
        security_schemes: vec![WORKSPACE_OAUTH.to_string()],
        examples: vec![ToolExample {
            name: "invite-guardian".to_string(),
            description: "Add a guardian to monitor Elder Shield alerts.".to_string(),
            arguments: json!({
                "workspace_id": "ws_123",
                "email": "opiekun@example.com",
                "role": "guardian"
            }),
        }],
        metadata: None,
    }
}

fn list_members() -> ToolDescriptor {
    ToolDescriptor {
        name: "ws.list_members".to_string(),
        access: Access::Ro,
        use_this_when:
            "You need to audit who has access to a workspace before inviting or revoking members."
                .to_string(),
        do_not_use_for: "Creating or removing members.".to_string(),
        input_schema: input_object(
            json!({
                "workspace_id": { "type": "string" }
            }),
            &["workspace_id"],
        ),
        output_schema: output_object(
            json!({
                "members": {
                    "type": "array",
                    "items": {
                        "type": "object",
                        "required": ["email", "role"],
                        "properties": {
                            "email": { "type": "string", "format": "email" },
                            "role": { "type": "string" }
                        }
                    }
                }
            }),
            &["members"],
        ),
        security_schemes: vec![WORKSPACE_OAUTH.to_string()],
        examples: vec![ToolExample {
            name: "review-members".to_string(),
            description: "Review existing participants before sharing Elder Shield alerts."
                .to_string(),
            arguments: json!({
                "workspace_id": "ws_123"
            }),
        }],
        metadata: read_only(),
    }
}
