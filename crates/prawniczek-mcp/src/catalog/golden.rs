//! Golden prompts: one expected tool selection per persona.
//!
//! The arguments are concrete fixtures; keeping them schema-conformant is a
//! convention checked by assistant regression suites, not by the registry.

use serde_json::json;

use crate::model::{GoldenPrompt, Persona};

/// The golden prompt set, in fixture order.
pub fn golden_prompts() -> Vec<GoldenPrompt> {
    vec![
        GoldenPrompt {
            id: "family-offer-comparison".to_string(),
            persona: Persona::Family,
            utterance:
                "Porównaj nowe oferty bankowe w workspace Mieszkanie 2026 i sprawdź budżet"
                    .to_string(),
            expected_tool: "budget.check_offer".to_string(),
            expected_arguments: json!({
                "budget_id": "budget_family_mortgage",
                "offer": {
                    "principal": 720000,
                    "term_months": 300,
                    "rrso": 9.1,
                    "fees": [
                        { "label": "Prowizja", "amount": 2000 },
                        { "label": "Ubezpieczenie", "amount": 500 }
                    ]
                }
            }),
        },
        GoldenPrompt {
            id: "law-case-dashboard".to_string(),
            persona: Persona::Business,
            utterance:
                "Pokaż status zgodności sprawy Kaucja klienta i zaproponuj kolejne kroki"
                    .to_string(),
            expected_tool: "case.summary".to_string(),
            expected_arguments: json!({
                "case_id": "case_kaucja_01"
            }),
        },
        GoldenPrompt {
            id: "elder-risk-alert".to_string(),
            persona: Persona::Elder,
            utterance:
                "Czy ta wiadomość o wnuczku to scam? Jeśli tak przygotuj alert dla syna"
                    .to_string(),
            expected_tool: "elder.evaluate_risk".to_string(),
            expected_arguments: json!({
                "text_or_doc_id": "Pilnie potrzebuję przelewu 4000 PLN, podpisano wnuczek",
                "context": {
                    "workspace_id": "ws_elder"
                }
            }),
        },
        GoldenPrompt {
            id: "email-defense-draft".to_string(),
            persona: Persona::Email,
            utterance:
                "Przeskanuj skrzynkę i przygotuj draft wypisania z newslettera FinQuick"
                    .to_string(),
            expected_tool: "mail.prepare_action".to_string(),
            expected_arguments: json!({
                "message_id": "msg_finquick_44",
                "action": "unsubscribe",
                "consent_token": "consent_email_2024"
            }),
        },
    ]
}
