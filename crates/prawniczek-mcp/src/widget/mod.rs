//! Host-rendered widgets: one bootstrap entry point, three presentational
//! views, and the injected host-SDK capability they call back into.
//!
//! Each bootstrap call owns its mount point exclusively and mounts exactly
//! one view tree. Host calls are asynchronous and fire-and-forget: a view
//! awaits single-call completion but never uses the result to decide what to
//! render. No retries, timeouts, or cancellation live here; any such policy
//! belongs to the host runtime.

mod fullscreen;
mod host;
mod inline;
mod pip;
mod view;

pub use fullscreen::{ComparatorProps, OfferComparator, OfferRow};
pub use host::{CallMode, HostSdk, ToolCall};
pub use inline::{ComplianceCard, ComplianceCardProps};
pub use pip::{PipPreview, PipPreviewProps};
pub use view::{ActionId, Container, Status, ViewNode};

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Host-controlled rendering context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    Inline,
    Fullscreen,
    Pip,
}

impl DisplayMode {
    pub fn as_str(self) -> &'static str {
        match self {
            DisplayMode::Inline => "inline",
            DisplayMode::Fullscreen => "fullscreen",
            DisplayMode::Pip => "pip",
        }
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DisplayMode {
    type Err = WidgetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "inline" => Ok(DisplayMode::Inline),
            "fullscreen" => Ok(DisplayMode::Fullscreen),
            "pip" => Ok(DisplayMode::Pip),
            other => Err(WidgetError::UnsupportedMode(other.to_string())),
        }
    }
}

/// Mount-time failures. Surfaced immediately, never deferred to first use.
#[derive(Debug, Error)]
pub enum WidgetError {
    /// The embedder did not supply its SDK capability.
    #[error("host sdk is unavailable; widgets cannot mount without it")]
    HostUnavailable,
    #[error("unsupported display mode: {0}")]
    UnsupportedMode(String),
}

/// Mode-specific props bundles. An omitted bundle falls back to a fixed
/// illustrative sample payload so a bare mount still renders.
#[derive(Debug, Clone, Default)]
pub struct WidgetProps {
    pub inline: Option<ComplianceCardProps>,
    pub fullscreen: Option<ComparatorProps>,
    pub pip: Option<PipPreviewProps>,
}

/// Exactly one mounted view, wired to the host SDK.
pub enum MountedWidget {
    Inline(ComplianceCard),
    Fullscreen(OfferComparator),
    Pip(PipPreview),
}

impl std::fmt::Debug for MountedWidget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple(match self {
            MountedWidget::Inline(_) => "Inline",
            MountedWidget::Fullscreen(_) => "Fullscreen",
            MountedWidget::Pip(_) => "Pip",
        })
        .finish()
    }
}

impl MountedWidget {
    pub fn mode(&self) -> DisplayMode {
        match self {
            MountedWidget::Inline(_) => DisplayMode::Inline,
            MountedWidget::Fullscreen(_) => DisplayMode::Fullscreen,
            MountedWidget::Pip(_) => DisplayMode::Pip,
        }
    }

    pub fn view(&self) -> ViewNode {
        match self {
            MountedWidget::Inline(card) => card.view(),
            MountedWidget::Fullscreen(comparator) => comparator.view(),
            MountedWidget::Pip(preview) => preview.view(),
        }
    }
}

/// Mount the view for `mode` into `container`.
///
/// Fails for an unrecognized mode or a missing host capability; on success
/// the container holds the freshly rendered view tree and the returned handle
/// dispatches the view's user actions.
pub fn bootstrap(
    mode: &str,
    container: &mut Container,
    props: WidgetProps,
    host: Option<Arc<dyn HostSdk>>,
) -> Result<MountedWidget, WidgetError> {
    let mode: DisplayMode = mode.parse()?;
    let host = host.ok_or(WidgetError::HostUnavailable)?;
    let widget = match mode {
        DisplayMode::Inline => MountedWidget::Inline(ComplianceCard::new(
            props.inline.unwrap_or_else(ComplianceCardProps::sample),
            host,
        )),
        DisplayMode::Fullscreen => MountedWidget::Fullscreen(OfferComparator::new(
            props.fullscreen.unwrap_or_else(ComparatorProps::sample),
            host,
        )),
        DisplayMode::Pip => MountedWidget::Pip(PipPreview::new(
            props.pip.unwrap_or_else(PipPreviewProps::sample),
            host,
        )),
    };
    container.mount(widget.view());
    tracing::debug!("mounted {mode} widget");
    Ok(widget)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_mode_parses_the_three_values() {
        assert_eq!("inline".parse::<DisplayMode>().ok(), Some(DisplayMode::Inline));
        assert_eq!(
            "fullscreen".parse::<DisplayMode>().ok(),
            Some(DisplayMode::Fullscreen)
        );
        assert_eq!("pip".parse::<DisplayMode>().ok(), Some(DisplayMode::Pip));
    }

    #[test]
    fn unknown_mode_is_rejected_with_its_name() {
        let err = "sidebar".parse::<DisplayMode>().expect_err("must fail");
        assert_eq!(err.to_string(), "unsupported display mode: sidebar");
    }

    #[test]
    fn display_mode_round_trips_as_str() {
        for mode in [DisplayMode::Inline, DisplayMode::Fullscreen, DisplayMode::Pip] {
            assert_eq!(mode.as_str().parse::<DisplayMode>().ok(), Some(mode));
        }
    }
}
