//! Host SDK boundary: the capabilities a widget needs from its embedder.

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

use super::DisplayMode;

/// Scheduling hint for a host tool invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CallMode {
    Background,
    Sync,
}

/// Argument bundle for a host tool invocation.
#[derive(Debug, Clone, Serialize)]
pub struct ToolCall {
    pub arguments: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<CallMode>,
}

impl ToolCall {
    /// Plain invocation with host-default scheduling.
    pub fn new(arguments: Value) -> Self {
        Self {
            arguments,
            mode: None,
        }
    }
}

/// Capabilities the embedding host provides to mounted widgets.
///
/// Injected at bootstrap so a test double can stand in for the real host.
/// Widgets never assume more than these three operations, never retry them,
/// and never order calls beyond single-call completion.
#[async_trait]
pub trait HostSdk: Send + Sync {
    /// Invoke a named tool with concrete arguments.
    async fn call_tool(&self, name: &str, call: ToolCall) -> anyhow::Result<Value>;

    /// Ask the host to switch the widget's display mode.
    async fn request_display_mode(&self, mode: DisplayMode) -> anyhow::Result<()>;

    /// Persist opaque widget state across redisplays.
    async fn set_widget_state(&self, state: Value) -> anyhow::Result<()>;
}
