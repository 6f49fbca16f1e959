use serde::{Deserialize, Serialize};
use serde_json::{Map as JsonMap, Value as JsonValue};

/// Authorization mechanism kinds the catalog may declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemeKind {
    Noauth,
    Oauth2,
}

/// A named authorization mechanism a tool may require.
///
/// Schemes are defined once at startup and treated as immutable; tools refer
/// to them by `id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityScheme {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: SchemeKind,
    pub description: String,
    /// OAuth scope strings, in grant order. Present for delegated schemes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scopes: Option<Vec<String>>,
}

/// Declared access mode for a tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Access {
    /// Read-only: no observable side effect.
    Ro,
    /// Mutating: creates or changes state somewhere.
    Mut,
}

/// A named example invocation with concrete arguments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolExample {
    pub name: String,
    pub description: String,
    pub arguments: JsonValue,
}

/// Optional hints attached to a tool for downstream safety/UX logic.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_only_hint: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

/// A callable capability exposed to the assistant.
///
/// The schema fields are structural JSON Schema documents kept as data: the
/// registry validates that they compile, but never executes the tool.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolDescriptor {
    /// Unique dotted name, e.g. `budget.check_offer`.
    pub name: String,
    pub access: Access,
    /// Disambiguation guidance: when the assistant should pick this tool.
    pub use_this_when: String,
    /// Disambiguation guidance: requests this tool must not be picked for.
    pub do_not_use_for: String,
    pub input_schema: JsonValue,
    pub output_schema: JsonValue,
    /// Scheme ids the caller may satisfy; at least one is required.
    pub security_schemes: Vec<String>,
    pub examples: Vec<ToolExample>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<ToolMetadata>,
}

impl ToolDescriptor {
    /// True when the descriptor opts into the read-only rendering hint.
    pub fn has_read_only_hint(&self) -> bool {
        self.metadata
            .as_ref()
            .and_then(|m| m.read_only_hint)
            .unwrap_or(false)
    }
}

/// Latency targets in seconds for the headline user journeys.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LatencyTargets {
    pub family_workspace_seconds: u64,
    pub business_workspace_seconds: u64,
    pub email_scan_seconds: u64,
}

/// Compliance prose plus the numeric latency targets.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Compliance {
    pub privacy: String,
    pub safety: String,
    pub latency_targets: LatencyTargets,
}

/// Aggregate descriptor of the application surface advertised to a host.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppMetadata {
    pub name: String,
    pub display_name: String,
    pub description: String,
    pub version: String,
    pub keywords: Vec<String>,
    pub starter_prompts: Vec<String>,
    pub compliance: Compliance,
    pub security_schemes: Vec<SecurityScheme>,
    pub tools: Vec<ToolDescriptor>,
    /// Open-ended host rendering hints (e.g. display-mode component URIs).
    #[serde(rename = "_meta")]
    pub meta: JsonMap<String, JsonValue>,
}

/// User persona a golden prompt exercises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Persona {
    Family,
    Business,
    Elder,
    Email,
}

/// Fixture pairing a natural-language utterance with the tool and arguments
/// an ideal assistant should select.
///
/// `expected_arguments` is kept schema-conformant by convention; the registry
/// deliberately does not validate it against the tool's input schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoldenPrompt {
    pub id: String,
    pub persona: Persona,
    pub utterance: String,
    pub expected_tool: String,
    pub expected_arguments: JsonValue,
}

/// The single validated output of the registry builder.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct McpServerConfig {
    pub metadata: AppMetadata,
    pub golden_prompts: Vec<GoldenPrompt>,
}
