//! Picture-in-picture draft preview.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::json;

use super::DisplayMode;
use super::host::HostSdk;
use super::view::{ActionId, ViewNode};

/// Props for the PIP draft preview.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PipPreviewProps {
    pub title: String,
    pub summary: String,
    pub consent_token: String,
}

impl PipPreviewProps {
    /// Illustrative fallback payload used when the host omits pip props.
    pub fn sample() -> Self {
        Self {
            title: "Alert Elder Shield".to_string(),
            summary: "Wiadomość o wnuczku przekroczyła próg ryzyka. Draft wysłano do przeglądu."
                .to_string(),
            consent_token: "consent_elder_2024".to_string(),
        }
    }
}

/// Minimal draft summary with open and persist actions.
pub struct PipPreview {
    props: PipPreviewProps,
    host: Arc<dyn HostSdk>,
}

impl PipPreview {
    pub(super) fn new(props: PipPreviewProps, host: Arc<dyn HostSdk>) -> Self {
        Self { props, host }
    }

    pub fn props(&self) -> &PipPreviewProps {
        &self.props
    }

    /// Primary action: open the full draft surface.
    pub async fn open_draft(&self) -> anyhow::Result<()> {
        self.host
            .request_display_mode(DisplayMode::Fullscreen)
            .await
    }

    /// Secondary action: persist exactly `{ consentToken }` as widget state
    /// so the host can restore the draft later.
    pub async fn save_state(&self) -> anyhow::Result<()> {
        self.host
            .set_widget_state(json!({ "consentToken": self.props.consent_token }))
            .await
    }

    pub fn view(&self) -> ViewNode {
        ViewNode::Section {
            label: "Podgląd draftu".to_string(),
            children: vec![
                ViewNode::Heading {
                    text: self.props.title.clone(),
                },
                ViewNode::Text {
                    text: self.props.summary.clone(),
                },
                ViewNode::Button {
                    action: ActionId::OpenDraft,
                    label: "Otwórz draft".to_string(),
                },
                ViewNode::Button {
                    action: ActionId::SaveWidgetState,
                    label: "Zapisz stan widgetu".to_string(),
                },
                ViewNode::Note {
                    text: "Draft wymaga zgody użytkownika na wysyłkę.".to_string(),
                },
            ],
        }
    }
}
