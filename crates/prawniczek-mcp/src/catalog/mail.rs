//! Email Defense tools (`mail.*`).

use serde_json::json;

use super::read_only;
use super::schema::{input_object, output_object, string_enum};
use super::security::GMAIL_OAUTH;
use crate::model::{Access, ToolDescriptor, ToolExample};

/// Mailbox connection, scanning, classification, and remediation tools, in
/// catalog order.
pub fn tools() -> Vec<ToolDescriptor> {
    vec![
        connect_account(),
        scan_inbox(),
        classify_message(),
        prepare_action(),
    ]
}

fn connect_account() -> ToolDescriptor {
    ToolDescriptor {
        name: "mail.connect_account".to_string(),
        access: Access::Mut,
        use_this_when: "A user opts in to email scanning and provides OAuth consent.".to_string(),
        do_not_use_for: "Scanning messages without explicit authorisation.".to_string(),
        input_schema: input_object(
            json!({
                "workspace_id": { "type": "string" },
                "provider": string_enum(
                    &["gmail", "imap"],
                    "Email provider supporting OAuth or token-based auth."
                ),
                "scopes": {
                    "type": "array",
                    "items": { "type": "string" },
                    "minItems": 1
                },
                "consent_token": { "type": "string" }
            }),
            &["workspace_id", "provider", "scopes", "consent_token"],
        ),
        output_schema: output_object(
            json!({
                "mailbox_id": { "type": "string" }
            }),
            &["mailbox_id"],
        ),
        security_schemes: vec![GMAIL_OAUTH.to_string()],
        examples: vec![ToolExample {
            name: "connect-gmail".to_string(),
            description:
                "Connect a Gmail account using OAuth scopes required for phishing detection."
                    .to_string(),
            arguments: json!({
                "workspace_id": "ws_email",
                "provider": "gmail",
                "scopes": ["https://mail.google.com/"],
                "consent_token": "consent_email_2024"
            }),
        }],
        metadata: None,
    }
}

fn scan_inbox() -> ToolDescriptor {
    ToolDescriptor {
        name: "mail.scan_inbox".to_string(),
        access: Access::Ro,
        use_this_when:
            "You must retrieve a bounded set of messages for phishing classification.".to_string(),
        do_not_use_for: "Modifying or deleting email messages.".to_string(),
        input_schema: input_object(
            json!({
                "mailbox_id": { "type": "string" },
                "since": { "type": "string", "format": "date-time" },
                "max": { "type": "integer", "minimum": 1, "maximum": 200 }
            }),
            &["mailbox_id", "since", "max"],
        ),
        output_schema: output_object(
            json!({
                "messages": {
                    "type": "array",
                    "items": {
                        "type": "object",
                        "required": ["id", "subject", "from", "received_at"],
                        "properties": {
                            "id": { "type": "string" },
                            "subject": { "type": "string" },
                            "from": { "type": "string" },
                            "received_at": { "type": "string", "format": "date-time" }
                        }
                    }
                }
            }),
            &["messages"],
        ),
        security_schemes: vec![GMAIL_OAUTH.to_string()],
        examples: vec![ToolExample {
            name: "scan-recent".to_string(),
            description:
                "Scan the last fifty messages to surface phishing attempts under 30 seconds."
                    .to_string(),
            arguments: json!({
                "mailbox_id": "mailbox_001",
                "since": "2024-05-01T00:00:00Z",
                "max": 50
            }),
        }],
        metadata: read_only(),
    }
}

fn classify_message() -> ToolDescriptor {
    ToolDescriptor {
        name: "mail.classify_message".to_string(),
        access: Access::Ro,
        use_this_when:
            "Determine whether a specific email is phishing and gather supporting signals."
                .to_string(),
        do_not_use_for: "Sending actions or modifying labels.".to_string(),
        input_schema: input_object(
            json!({
                "message_id": { "type": "string" }
            }),
            &["message_id"],
        ),
        output_schema: output_object(
            json!({
                "is_phishing": { "type": "boolean" },
                "signals": {
                    "type": "array",
                    "items": { "type": "string" }
                },
                "confidence": { "type": "number", "minimum": 0, "maximum": 1 }
            }),
            &["is_phishing", "signals", "confidence"],
        ),
        security_schemes: vec![GMAIL_OAUTH.to_string()],
        examples: vec![ToolExample {
            name: "classify-link".to_string(),
            description: "Classify a suspicious unsubscribe link for Email Defense.".to_string(),
            arguments: json!({
                "message_id": "msg_987"
            }),
        }],
        metadata: read_only(),
    }
}

fn prepare_action() -> ToolDescriptor {
    ToolDescriptor {
        name: "mail.prepare_action".to_string(),
        access: Access::Mut,
        use_this_when:
            "Prepare a draft remediation such as unsubscribe verification or alert reply."
                .to_string(),
        do_not_use_for: "Sending final emails automatically without user approval.".to_string(),
        input_schema: input_object(
            json!({
                "message_id": { "type": "string" },
                "action": string_enum(
                    &["unsubscribe", "forward_to_security", "draft_reply"],
                    "Action blueprint to draft without sending automatically."
                ),
                "consent_token": { "type": "string" }
            }),
            &["message_id", "action", "consent_token"],
        ),
        output_schema: output_object(
            json!({
                "draft_id": { "type": "string" },
                "preview": { "type": "string" },
                "requires_user_send": { "type": "boolean" }
            }),
            &["draft_id", "preview", "requires_user_send"],
        ),
        security_schemes: vec![GMAIL_OAUTH.to_string()],
        examples: vec![ToolExample {
            name: "draft-unsubscribe".to_string(),
            description: "Prepare a safe unsubscribe workflow for a newsletter.".to_string(),
            arguments: json!({
                "message_id": "msg_987",
                "action": "unsubscribe",
                "consent_token": "consent_email_2024"
            }),
        }],
        metadata: None,
    }
}
