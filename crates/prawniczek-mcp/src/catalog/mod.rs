//! The static catalog: security schemes, tool descriptors, application
//! metadata, and golden prompts.
//!
//! Everything here is hand-maintained declarative data, edited independently
//! over time. The registry builder validates it before any consumer sees it;
//! nothing in this module enforces its own invariants.

mod casefile;
mod elder;
mod golden;
mod guardrail;
mod mail;
mod media;
mod metadata;
mod schema;
mod security;
mod workspace;

pub use golden::golden_prompts;
pub use metadata::app_metadata;
pub use security::{GMAIL_OAUTH, INTERNAL_NOAUTH, WORKSPACE_OAUTH, security_schemes};

use crate::model::{ToolDescriptor, ToolMetadata};

/// All tool descriptors, in catalog order.
///
/// The order is intentional: it is preserved in the emitted document to keep
/// diffs stable. Append new tools at the end of their namespace module.
pub fn tool_descriptors() -> Vec<ToolDescriptor> {
    let mut tools = workspace::tools();
    tools.extend(guardrail::tools());
    tools.extend(casefile::tools());
    tools.extend(media::tools());
    tools.extend(elder::tools());
    tools.extend(mail::tools());
    tools
}

/// Metadata bundle shared by every read-only tool.
fn read_only() -> Option<ToolMetadata> {
    Some(ToolMetadata {
        read_only_hint: Some(true),
        notes: None,
        tags: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Access;

    #[test]
    fn catalog_order_is_stable() {
        let names: Vec<String> = tool_descriptors().into_iter().map(|t| t.name).collect();
        assert_eq!(names.first().map(String::as_str), Some("ws.create_workspace"));
        assert_eq!(names.last().map(String::as_str), Some("mail.prepare_action"));
    }

    #[test]
    fn read_only_tools_carry_the_hint() {
        for tool in tool_descriptors() {
            if tool.access == Access::Ro {
                assert!(tool.has_read_only_hint(), "missing hint on {}", tool.name);
            }
        }
    }

    #[test]
    fn every_tool_ships_an_example() {
        for tool in tool_descriptors() {
            assert!(!tool.examples.is_empty(), "no example on {}", tool.name);
        }
    }
}
