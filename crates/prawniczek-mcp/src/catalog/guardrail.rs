//! Guardrail and budget tools (`policy.*`, `budget.*`).

use serde_json::json;

use super::read_only;
use super::schema::{input_object, output_object, string_enum};
use super::security::WORKSPACE_OAUTH;
use crate::model::{Access, ToolDescriptor, ToolExample};

/// Guardrail definition and budget check tools, in catalog order.
pub fn tools() -> Vec<ToolDescriptor> {
    vec![set_guardrails(), set_shared_budget(), check_offer()]
}

fn set_guardrails() -> ToolDescriptor {
    ToolDescriptor {
        name: "policy.set_guardrails".to_string(),
        access: Access::Mut,
        use_this_when:
            "You must define or update legal, finance, or notification guardrails for a workspace or case."
                .to_string(),
        do_not_use_for: "Checking if an offer stays within an existing budget.".to_string(),
        input_schema: input_object(
            json!({
                "workspace_id": { "type": "string" },
                "scope": string_enum(
                    &["workspace", "case"],
                    "Scope of guardrails being applied."
                ),
                "case_id": { "type": "string" },
                "rules": {
                    "type": "object",
                    "required": ["finance", "legal", "notifications"],
                    "properties": {
                        "finance": {
                            "type": "array",
                            "items": { "type": "string" },
                            "description": "Finance guardrail expressions or identifiers."
                        },
                        "legal": {
                            "type": "array",
                            "items": { "type": "string" }
                        },
                        "notifications": {
                            "type": "array",
                            "items": { "type": "string" }
                        }
                    },
                    "additionalProperties": false
                }
            }),
            &["workspace_id", "scope", "rules"],
        ),
        output_schema: output_object(
            json!({
                "policy_id": { "type": "string" },
                "applied": { "type": "boolean" }
            }),
            &["policy_id", "applied"],
        ),
        security_schemes: vec![WORKSPACE_OAUTH.to_string()],
        examples: vec![ToolExample {
            name: "family-guardrails".to_string(),
            description: "Apply spending guardrails for the Family Plan workspace.".to_string(),
            arguments: json!({
                "workspace_id": "ws_family",
                "scope": "workspace",
                "rules": {
                    "finance": ["rrso <= 12", "fees.total <= 4000"],
                    "legal": ["require_data_consent"],
                    "notifications": ["consent_token_required"]
                }
            }),
        }],
        metadata: None,
    }
}

fn set_shared_budget() -> ToolDescriptor {
    ToolDescriptor {
        name: "budget.set_shared".to_string(),
        access: Access::Mut,
        use_this_when:
            "A family or firm needs a shared budget definition with monthly and total limits."
                .to_string(),
        do_not_use_for: "Evaluating individual offers against an existing budget.".to_string(),
        input_schema: input_object(
            json!({
                "workspace_id": { "type": "string" },
                "name": { "type": "string" },
                "currency": { "type": "string", "pattern": "^[A-Z]{3}$" },
                "limits": {
                    "type": "object",
                    "required": ["monthly", "total"],
                    "properties": {
                        "monthly": { "type": "number", "minimum": 0 },
                        "total": { "type": "number", "minimum": 0 }
                    },
                    "additionalProperties": false
                }
            }),
            &["workspace_id", "name", "currency", "limits"],
        ),
        output_schema: output_object(
            json!({
                "budget_id": { "type": "string" }
            }),
            &["budget_id"],
        ),
        security_schemes: vec![WORKSPACE_OAUTH.to_string()],
        examples: vec![ToolExample {
            name: "mortgage-cap".to_string(),
            description: "Create a shared mortgage budget for the housing comparison.".to_string(),
            arguments: json!({
                "workspace_id": "ws_family",
                "name": "Rodzinny budżet kredytowy",
                "currency": "PLN",
                "limits": {
                    "monthly": 4500,
                    "total": 900000
                }
            }),
        }],
        metadata: None,
    }
}

fn check_offer() -> ToolDescriptor {
    ToolDescriptor {
        name: "budget.check_offer".to_string(),
        access: Access::Ro,
        use_this_when:
            "Validate if a banking offer complies with a shared budget before showing recommendations."
                .to_string(),
        do_not_use_for: "Creating or editing budgets.".to_string(),
        input_schema: input_object(
            json!({
                "budget_id": { "type": "string" },
                "offer": {
                    "type": "object",
                    "required": ["principal", "term_months", "rrso", "fees"],
                    "properties": {
                        "principal": { "type": "number", "minimum": 0 },
                        "term_months": { "type": "integer", "minimum": 1 },
                        "rrso": { "type": "number", "minimum": 0 },
                        "fees": {
                            "type": "array",
                            "items": {
                                "type": "object",
                                "required": ["label", "amount"],
                                "properties": {
                                    "label": { "type": "string" },
                                    "amount": { "type": "number" }
                                }
                            }
                        }
                    },
                    "additionalProperties": false
                }
            }),
            &["budget_id", "offer"],
        ),
        output_schema: output_object(
            json!({
                "within_limits": { "type": "boolean" },
                "breaches": {
                    "type": "array",
                    "items": { "type": "string" }
                }
            }),
            &["within_limits", "breaches"],
        ),
        security_schemes: vec![WORKSPACE_OAUTH.to_string()],
        examples: vec![ToolExample {
            name: "compare-offer".to_string(),
            description: "Check if the leading mortgage offer respects the family budget."
                .to_string(),
            arguments: json!({
                "budget_id": "budget_01",
                "offer": {
                    "principal": 750000,
                    "term_months": 300,
                    "rrso": 9.8,
                    "fees": [
                        { "label": "Prowizja", "amount": 2500 },
                        { "label": "Ubezpieczenie", "amount": 600 }
                    ]
                }
            }),
        }],
        metadata: read_only(),
    }
}
