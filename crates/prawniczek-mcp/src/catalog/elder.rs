//! Elder Shield tools (`elder.*`) and guardian alerts (`notify.*`).

use serde_json::json;

use super::read_only;
use super::schema::{input_object, output_object, string_enum};
use super::security::WORKSPACE_OAUTH;
use crate::model::{Access, ToolDescriptor, ToolExample};

/// Elder risk policy, evaluation, and alert tools, in catalog order.
pub fn tools() -> Vec<ToolDescriptor> {
    vec![set_policy(), evaluate_risk(), send_alert()]
}

fn set_policy() -> ToolDescriptor {
    ToolDescriptor {
        name: "elder.set_policy".to_string(),
        access: Access::Mut,
        use_this_when:
            "You must configure Elder Shield risk evaluation thresholds and guardians.".to_string(),
        do_not_use_for: "Evaluating a message risk score.".to_string(),
        input_schema: input_object(
            json!({
                "workspace_id": { "type": "string" },
                "enabled": { "type": "boolean" },
                "risk_threshold": { "type": "number", "minimum": 0, "maximum": 1 },
                "notify_contacts": {
                    "type": "array",
                    "items": {
                        "type": "object",
                        "required": ["email", "relationship"],
                        "properties": {
                            "email": { "type": "string", "format": "email" },
                            "relationship": { "type": "string" }
                        }
                    }
                },
                "data_minimization": { "type": "string" },
                "consent_token": { "type": "string" }
            }),
            &[
                "workspace_id",
                "enabled",
                "risk_threshold",
                "notify_contacts",
                "data_minimization",
                "consent_token",
            ],
        ),
        output_schema: output_object(
            json!({
                "workspace_id": { "type": "string" },
                "enabled": { "type": "boolean" }
            }),
            &["workspace_id", "enabled"],
        ),
        security_schemes: vec![WORKSPACE_OAUTH.to_string()],
        examples: vec![ToolExample {
            name: "enable-elder-shield".to_string(),
            description:
                "Enable Elder Shield with strict data minimisation and guardian notifications."
                    .to_string(),
            arguments: json!({
                "workspace_id": "ws_elder",
                "enabled": true,
                "risk_threshold": 0.65,
                "notify_contacts": [
                    { "email": "syn@example.com", "relationship": "son" }
                ],
                "data_minimization": "truncate_content",
                "consent_token": "consent_elder_2024"
            }),
        }],
        metadata: None,
    }
}

fn evaluate_risk() -> ToolDescriptor {
    ToolDescriptor {
        name: "elder.evaluate_risk".to_string(),
        access: Access::Ro,
        use_this_when: "Screen a message for elder fraud risk before alerting guardians."
            .to_string(),
        do_not_use_for: "Sending alerts or configuring policies.".to_string(),
        input_schema: input_object(
            json!({
                "text_or_doc_id": { "type": "string" },
                "context": {
                    "type": "object",
                    "required": ["workspace_id"],
                    "properties": {
                        "workspace_id": { "type": "string" }
                    }
                }
            }),
            &["text_or_doc_id", "context"],
        ),
        output_schema: output_object(
            json!({
                "risk_score": { "type": "number", "minimum": 0, "maximum": 1 },
                "signals": {
                    "type": "array",
                    "items": { "type": "string" }
                },
                "explanation": { "type": "string" }
            }),
            &["risk_score", "signals", "explanation"],
        ),
        security_schemes: vec![WORKSPACE_OAUTH.to_string()],
        examples: vec![ToolExample {
            name: "assess-scam".to_string(),
            description: "Evaluate a suspicious SMS before sending alerts.".to_string(),
            arguments: json!({
                "text_or_doc_id": "Proszę pilnie przelać 5000 PLN, to Twój wnuk",
                "context": {
                    "workspace_id": "ws_elder"
                }
            }),
        }],
        metadata: read_only(),
    }
}

fn send_alert() -> ToolDescriptor {
    ToolDescriptor {
        name: "notify.send_alert".to_string(),
        access: Access::Mut,
        use_this_when:
            "Guardian alerts must be drafted after a high-risk Elder Shield finding.".to_string(),
        do_not_use_for: "General communications without verified consent tokens.".to_string(),
        input_schema: input_object(
            json!({
                "to": {
                    "type": "array",
                    "items": { "type": "string", "format": "email" },
                    "minItems": 1
                },
                "channel": string_enum(&["email", "sms"], "Alert delivery channel."),
                "subject": { "type": "string" },
                "summary": { "type": "string" },
                "consent_token": { "type": "string" }
            }),
            &["to", "channel", "subject", "summary", "consent_token"],
        ),
        output_schema: output_object(
            json!({
                "alert_id": { "type": "string" },
                "status": { "type": "string", "enum": ["draft", "queued"] }
            }),
            &["alert_id", "status"],
        ),
        security_schemes: vec![WORKSPACE_OAUTH.to_string()],
        examples: vec![ToolExample {
            name: "notify-guardian".to_string(),
            description: "Draft an email alert for a suspected scam call.".to_string(),
            arguments: json!({
                "to": ["syn@example.com"],
                "channel": "email",
                "subject": "Podejrzenie oszustwa",
                "summary": "Wiadomość z prośbą o szybki przelew przekroczyła próg ryzyka.",
                "consent_token": "consent_elder_2024"
            }),
        }],
        metadata: None,
    }
}
