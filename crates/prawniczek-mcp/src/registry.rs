//! Registry builder: assembles the static catalog into one validated,
//! immutable [`McpServerConfig`].
//!
//! The catalog is large and hand-edited by multiple contributors; the highest
//! value check is a fast, load-time integrity pass so that drift (a golden
//! prompt pointing at a renamed tool, an outward-facing tool shipped without
//! a consent token) fails the build instead of reaching an end user. Any
//! failure is fatal: there is no partial or degraded registry.

use std::collections::HashSet;

use jsonschema::Draft;
use serde_json::Value;
use thiserror::Error;

use crate::catalog;
use crate::model::{
    Access, AppMetadata, GoldenPrompt, McpServerConfig, ToolDescriptor, has_outward_effect,
};

/// Fatal registry construction failures.
///
/// Every variant names the offending document or identifier so a contributor
/// can fix the catalog without re-running under a debugger.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// A declared document does not match its required shape.
    #[error("invalid {document}: {reason}")]
    Structural { document: String, reason: String },
    /// A tool's input or output schema does not compile as JSON Schema.
    #[error("tool {tool} has an invalid {slot} schema: {reason}")]
    Schema {
        tool: String,
        slot: &'static str,
        reason: String,
    },
    #[error("duplicate security scheme id {id}")]
    DuplicateSchemeId { id: String },
    #[error("duplicate tool name {name}")]
    DuplicateToolName { name: String },
    #[error("duplicate golden prompt id {id}")]
    DuplicatePromptId { id: String },
    #[error("tool {tool} references unknown security scheme {scheme}")]
    UnknownScheme { tool: String, scheme: String },
    #[error("read-only tool {tool} does not set metadata.readOnlyHint")]
    MissingReadOnlyHint { tool: String },
    #[error("outward-facing tool {tool} does not require consent_token")]
    MissingConsentToken { tool: String },
    /// A golden prompt names a tool absent from the tool set.
    #[error("golden prompt {prompt} references missing tool {tool}")]
    UnknownTool { prompt: String, tool: String },
}

/// Assemble and validate the shipped catalog.
///
/// Runs once at process start; the returned config is immutable for the
/// process lifetime.
pub fn build() -> Result<McpServerConfig, RegistryError> {
    build_from_parts(catalog::app_metadata(), catalog::golden_prompts())
}

/// Validate explicit parts into a config.
///
/// Split out from [`build`] so tests can exercise every failure arm against
/// mutated copies of the catalog.
pub fn build_from_parts(
    metadata: AppMetadata,
    golden_prompts: Vec<GoldenPrompt>,
) -> Result<McpServerConfig, RegistryError> {
    validate_metadata(&metadata)?;
    validate_prompts(&golden_prompts, &metadata.tools)?;
    tracing::debug!(
        "registry validated (tools={}, schemes={}, prompts={})",
        metadata.tools.len(),
        metadata.security_schemes.len(),
        golden_prompts.len()
    );
    Ok(McpServerConfig {
        metadata,
        golden_prompts,
    })
}

fn validate_metadata(metadata: &AppMetadata) -> Result<(), RegistryError> {
    require_nonempty_str("metadata.name", &metadata.name)?;
    require_nonempty_str("metadata.displayName", &metadata.display_name)?;
    require_nonempty_str("metadata.description", &metadata.description)?;
    require_nonempty_str("metadata.version", &metadata.version)?;
    require_nonempty("metadata.keywords", metadata.keywords.len())?;
    require_nonempty("metadata.starterPrompts", metadata.starter_prompts.len())?;
    require_nonempty("metadata.securitySchemes", metadata.security_schemes.len())?;
    require_nonempty("metadata.tools", metadata.tools.len())?;

    let mut scheme_ids = HashSet::new();
    for scheme in &metadata.security_schemes {
        require_nonempty_str("securityScheme.id", &scheme.id)?;
        if !scheme_ids.insert(scheme.id.as_str()) {
            return Err(RegistryError::DuplicateSchemeId {
                id: scheme.id.clone(),
            });
        }
    }

    let mut tool_names = HashSet::new();
    for tool in &metadata.tools {
        if !tool_names.insert(tool.name.as_str()) {
            return Err(RegistryError::DuplicateToolName {
                name: tool.name.clone(),
            });
        }
        validate_tool(tool, &scheme_ids)?;
    }
    Ok(())
}

fn validate_tool(tool: &ToolDescriptor, scheme_ids: &HashSet<&str>) -> Result<(), RegistryError> {
    let document = format!("tool {}", tool.name);
    require_nonempty_str(&document, &tool.name)?;
    if tool.security_schemes.is_empty() {
        return Err(RegistryError::Structural {
            document,
            reason: "securitySchemes must not be empty".to_string(),
        });
    }
    if tool.examples.is_empty() {
        return Err(RegistryError::Structural {
            document,
            reason: "examples must not be empty".to_string(),
        });
    }
    for scheme in &tool.security_schemes {
        if !scheme_ids.contains(scheme.as_str()) {
            return Err(RegistryError::UnknownScheme {
                tool: tool.name.clone(),
                scheme: scheme.clone(),
            });
        }
    }
    compile_schema(&tool.name, "input", &tool.input_schema)?;
    compile_schema(&tool.name, "output", &tool.output_schema)?;
    if tool.access == Access::Ro && !tool.has_read_only_hint() {
        return Err(RegistryError::MissingReadOnlyHint {
            tool: tool.name.clone(),
        });
    }
    if has_outward_effect(&tool.name) && !requires_consent_token(&tool.input_schema) {
        return Err(RegistryError::MissingConsentToken {
            tool: tool.name.clone(),
        });
    }
    Ok(())
}

/// The consent token must be both declared and required by the input contract.
fn requires_consent_token(input_schema: &Value) -> bool {
    let declared = input_schema
        .get("properties")
        .and_then(|p| p.get("consent_token"))
        .is_some();
    let required = input_schema
        .get("required")
        .and_then(Value::as_array)
        .is_some_and(|r| r.iter().any(|v| v.as_str() == Some("consent_token")));
    declared && required
}

fn validate_prompts(
    prompts: &[GoldenPrompt],
    tools: &[ToolDescriptor],
) -> Result<(), RegistryError> {
    require_nonempty("goldenPrompts", prompts.len())?;
    let tool_names: HashSet<&str> = tools.iter().map(|t| t.name.as_str()).collect();
    let mut prompt_ids = HashSet::new();
    for prompt in prompts {
        let document = format!("golden prompt {}", prompt.id);
        require_nonempty_str(&document, &prompt.id)?;
        require_nonempty_str(&document, &prompt.utterance)?;
        if !prompt_ids.insert(prompt.id.as_str()) {
            return Err(RegistryError::DuplicatePromptId {
                id: prompt.id.clone(),
            });
        }
        if !tool_names.contains(prompt.expected_tool.as_str()) {
            return Err(RegistryError::UnknownTool {
                prompt: prompt.id.clone(),
                tool: prompt.expected_tool.clone(),
            });
        }
    }
    Ok(())
}

fn compile_schema(tool: &str, slot: &'static str, schema: &Value) -> Result<(), RegistryError> {
    jsonschema::options()
        .with_draft(Draft::Draft202012)
        .build(schema)
        .map(|_| ())
        .map_err(|e| RegistryError::Schema {
            tool: tool.to_string(),
            slot,
            reason: e.to_string(),
        })
}

fn require_nonempty(document: &str, len: usize) -> Result<(), RegistryError> {
    if len == 0 {
        return Err(RegistryError::Structural {
            document: document.to_string(),
            reason: "must not be empty".to_string(),
        });
    }
    Ok(())
}

fn require_nonempty_str(document: &str, value: &str) -> Result<(), RegistryError> {
    if value.trim().is_empty() {
        return Err(RegistryError::Structural {
            document: document.to_string(),
            reason: "must not be blank".to_string(),
        });
    }
    Ok(())
}
