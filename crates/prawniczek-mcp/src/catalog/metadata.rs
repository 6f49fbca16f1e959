//! Application metadata: identity, starter prompts, compliance, and the
//! host rendering hints carried in `_meta`.

use serde_json::{Map as JsonMap, json};

use super::security::security_schemes;
use super::tool_descriptors;
use crate::model::{AppMetadata, Compliance, LatencyTargets};

/// The full application descriptor, assembled from the static catalog.
pub fn app_metadata() -> AppMetadata {
    let mut meta = JsonMap::new();
    meta.insert(
        "openai/outputTemplate".to_string(),
        json!({
            "inline": "prawniczek://components/compliance-card",
            "fullscreen": "prawniczek://components/comparator",
            "pip": "prawniczek://components/pip-preview"
        }),
    );

    AppMetadata {
        name: "prawniczek".to_string(),
        display_name: "Prawniczek — doradca".to_string(),
        description:
            "Prawniczek pomaga rodzinom, kancelariom i seniorom porównywać oferty, monitorować \
             zgodność i reagować na ryzyka e-mailowe zgodnie z guardrails i zgodami."
                .to_string(),
        version: "1.0.0".to_string(),
        keywords: vec![
            "rodzina".to_string(),
            "kancelaria".to_string(),
            "senior".to_string(),
            "email".to_string(),
            "compliance".to_string(),
        ],
        starter_prompts: vec![
            "Pomóż mojej rodzinie porównać oferty kredytów hipotecznych w workspace 'Mieszkanie \
             2026'."
                .to_string(),
            "Przygotuj dashboard spraw kancelarii i wskaż czerwone flagi w sprawie 'Umowa najmu'."
                .to_string(),
            "Oceń czy ta wiadomość do babci wygląda na próbę oszustwa i przygotuj alert dla \
             opiekuna."
                .to_string(),
            "Przeskanuj skrzynkę firmową pod kątem phishingu i pokaż draft odpowiedzi."
                .to_string(),
        ],
        compliance: Compliance {
            privacy:
                "Minimalizujemy dane wrażliwe, wymagamy consent_token przed akcjami wysyłkowymi i \
                 stosujemy krótkie TTL dla plików."
                    .to_string(),
            safety:
                "Wszystkie akcje są oznaczone jako DRAFT do zatwierdzenia przez użytkownika, brak \
                 automatycznej wysyłki."
                    .to_string(),
            latency_targets: LatencyTargets {
                family_workspace_seconds: 120,
                business_workspace_seconds: 120,
                email_scan_seconds: 30,
            },
        },
        security_schemes: security_schemes(),
        tools: tool_descriptors(),
        meta,
    }
}
