//! Transcription and commitment-extraction tools (`media.*`, `conversation.*`).

use serde_json::json;

use super::read_only;
use super::schema::{input_object, output_object, string};
use super::security::{INTERNAL_NOAUTH, WORKSPACE_OAUTH};
use crate::model::{Access, ToolDescriptor, ToolExample};

/// Media analysis tools, in catalog order.
pub fn tools() -> Vec<ToolDescriptor> {
    vec![transcribe(), extract_commitments()]
}

fn transcribe() -> ToolDescriptor {
    ToolDescriptor {
        name: "media.transcribe".to_string(),
        access: Access::Ro,
        use_this_when:
            "You need a high confidence transcript of an audio or video meeting for case review."
                .to_string(),
        do_not_use_for: "Creating summaries without transcripts or non-media documents."
            .to_string(),
        input_schema: input_object(
            json!({
                "case_id": { "type": "string" },
                "file": {
                    "type": "object",
                    "required": ["url", "mime"],
                    "properties": {
                        "url": { "type": "string", "format": "uri" },
                        "mime": { "type": "string" }
                    },
                    "additionalProperties": false
                },
                "lang": string("BCP-47 language tag for the audio source.")
            }),
            &["case_id", "file", "lang"],
        ),
        output_schema: output_object(
            json!({
                "transcript_id": { "type": "string" },
                "text": { "type": "string" },
                "confidence": { "type": "number", "minimum": 0, "maximum": 1 }
            }),
            &["transcript_id", "text", "confidence"],
        ),
        security_schemes: vec![WORKSPACE_OAUTH.to_string()],
        examples: vec![ToolExample {
            name: "transcribe-call".to_string(),
            description: "Transcribe a bank negotiation call for breach detection.".to_string(),
            arguments: json!({
                "case_id": "case_abc",
                "file": {
                    "url": "https://storage.example.com/call.wav",
                    "mime": "audio/wav"
                },
                "lang": "pl-PL"
            }),
        }],
        metadata: read_only(),
    }
}

fn extract_commitments() -> ToolDescriptor {
    ToolDescriptor {
        name: "conversation.extract_commitments".to_string(),
        access: Access::Ro,
        use_this_when:
            "Identify obligations or promises from conversation transcripts for guardrail monitoring."
                .to_string(),
        do_not_use_for: "Summarising unrelated documents or sending notifications.".to_string(),
        input_schema: input_object(
            json!({
                "text": { "type": "string" }
            }),
            &["text"],
        ),
        output_schema: output_object(
            json!({
                "claims": {
                    "type": "array",
                    "items": {
                        "type": "object",
                        "required": ["actor", "action", "due"],
                        "properties": {
                            "actor": { "type": "string" },
                            "action": { "type": "string" },
                            "due": { "type": "string" }
                        }
                    }
                }
            }),
            &["claims"],
        ),
        security_schemes: vec![INTERNAL_NOAUTH.to_string()],
        examples: vec![ToolExample {
            name: "commitment-detection".to_string(),
            description: "Extract commitments after transcribing a bank conversation."
                .to_string(),
            arguments: json!({
                "text": "Bank promises fixed rate for 24 months if documents submitted by 15 czerwca"
            }),
        }],
        metadata: read_only(),
    }
}
