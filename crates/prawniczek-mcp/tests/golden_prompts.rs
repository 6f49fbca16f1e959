//! End-to-end checks over the shipped catalog: the registry builds, its
//! cross-referential invariants hold, and the emitted document keeps the
//! field spelling hosts rely on.

use std::collections::HashSet;

use jsonschema::Draft;
use serde_json::Value;

use prawniczek_mcp::model::{Access, McpServerConfig, Persona, naming::tool_namespace};
use prawniczek_mcp::model::naming::has_outward_effect;
use prawniczek_mcp::registry;

const EXPECTED_TOOLS: [&str; 18] = [
    "ws.create_workspace",
    "ws.invite_member",
    "ws.list_members",
    "policy.set_guardrails",
    "budget.set_shared",
    "budget.check_offer",
    "case.create",
    "case.attach_document",
    "case.summary",
    "media.transcribe",
    "conversation.extract_commitments",
    "elder.set_policy",
    "elder.evaluate_risk",
    "notify.send_alert",
    "mail.connect_account",
    "mail.scan_inbox",
    "mail.classify_message",
    "mail.prepare_action",
];

#[test]
fn shipped_catalog_builds_with_the_expected_surface() {
    let config = registry::build().expect("shipped catalog must validate");

    let names: Vec<&str> = config
        .metadata
        .tools
        .iter()
        .map(|t| t.name.as_str())
        .collect();
    assert_eq!(names, EXPECTED_TOOLS);

    let namespaces: HashSet<&str> = names.iter().map(|n| tool_namespace(n)).collect();
    let expected: HashSet<&str> = [
        "ws",
        "policy",
        "budget",
        "case",
        "media",
        "conversation",
        "elder",
        "notify",
        "mail",
    ]
    .into_iter()
    .collect();
    assert_eq!(namespaces, expected);

    assert_eq!(config.metadata.security_schemes.len(), 3);
    assert_eq!(config.golden_prompts.len(), 4);
    let personas: HashSet<Persona> = config.golden_prompts.iter().map(|p| p.persona).collect();
    assert_eq!(
        personas,
        [
            Persona::Family,
            Persona::Business,
            Persona::Elder,
            Persona::Email
        ]
        .into_iter()
        .collect()
    );
}

#[test]
fn golden_prompts_reference_registered_tools() {
    let config = registry::build().expect("build");
    let tool_names: HashSet<&str> = config
        .metadata
        .tools
        .iter()
        .map(|t| t.name.as_str())
        .collect();
    for prompt in &config.golden_prompts {
        assert!(
            tool_names.contains(prompt.expected_tool.as_str()),
            "unknown tool referenced: {}",
            prompt.expected_tool
        );
    }
}

#[test]
fn read_only_tools_include_read_only_hint() {
    let config = registry::build().expect("build");
    let missing: Vec<&str> = config
        .metadata
        .tools
        .iter()
        .filter(|t| t.access == Access::Ro && !t.has_read_only_hint())
        .map(|t| t.name.as_str())
        .collect();
    assert!(missing.is_empty(), "missing readOnlyHint on: {missing:?}");
}

#[test]
fn consent_token_documented_on_outward_actions() {
    let config = registry::build().expect("build");
    let outward: Vec<_> = config
        .metadata
        .tools
        .iter()
        .filter(|t| has_outward_effect(&t.name))
        .collect();
    assert_eq!(outward.len(), 3, "outward-effect family drifted");
    for tool in outward {
        let declared = tool.input_schema["properties"].get("consent_token").is_some();
        assert!(declared, "consent_token required in {}", tool.name);
        let required = tool.input_schema["required"]
            .as_array()
            .expect("required array")
            .iter()
            .any(|v| v.as_str() == Some("consent_token"));
        assert!(required, "consent_token optional in {}", tool.name);
    }
}

#[test]
fn identifiers_are_pairwise_distinct() {
    let config = registry::build().expect("build");
    let tools = &config.metadata.tools;
    let names: HashSet<&str> = tools.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names.len(), tools.len());
    let schemes = &config.metadata.security_schemes;
    let ids: HashSet<&str> = schemes.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids.len(), schemes.len());
    let prompts = &config.golden_prompts;
    let prompt_ids: HashSet<&str> = prompts.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(prompt_ids.len(), prompts.len());
}

#[test]
fn every_tool_scheme_reference_resolves() {
    let config = registry::build().expect("build");
    let scheme_ids: HashSet<&str> = config
        .metadata
        .security_schemes
        .iter()
        .map(|s| s.id.as_str())
        .collect();
    for tool in &config.metadata.tools {
        assert!(!tool.security_schemes.is_empty(), "{} unbound", tool.name);
        for scheme in &tool.security_schemes {
            assert!(
                scheme_ids.contains(scheme.as_str()),
                "{} references unknown scheme {scheme}",
                tool.name
            );
        }
    }
}

#[test]
fn catalog_examples_match_their_input_schemas() {
    let config = registry::build().expect("build");
    for tool in &config.metadata.tools {
        let validator = jsonschema::options()
            .with_draft(Draft::Draft202012)
            .build(&tool.input_schema)
            .unwrap_or_else(|e| panic!("schema compilation failed for {}: {e}", tool.name));
        for example in &tool.examples {
            assert!(
                validator.is_valid(&example.arguments),
                "example {} does not satisfy the input schema of {}",
                example.name,
                tool.name
            );
        }
    }
}

#[test]
fn emitted_document_keeps_the_wire_spelling() {
    let config = registry::build().expect("build");
    let value = serde_json::to_value(&config).expect("serialize");

    assert_eq!(
        value["metadata"]["_meta"]["openai/outputTemplate"]["inline"],
        Value::String("prawniczek://components/compliance-card".to_string())
    );
    assert!(value["metadata"]["tools"][0]["useThisWhen"].is_string());
    assert_eq!(
        value["metadata"]["tools"][2]["metadata"]["readOnlyHint"],
        Value::Bool(true)
    );
    assert_eq!(
        value["goldenPrompts"][0]["expectedTool"],
        Value::String("budget.check_offer".to_string())
    );
    assert_eq!(
        value["metadata"]["securitySchemes"][0]["type"],
        Value::String("noauth".to_string())
    );

    let round_tripped: McpServerConfig =
        serde_json::from_value(value).expect("document must deserialize back");
    assert_eq!(round_tripped.metadata.tools.len(), config.metadata.tools.len());
}
