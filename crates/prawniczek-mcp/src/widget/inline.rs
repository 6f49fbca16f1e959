//! Inline compliance card.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::DisplayMode;
use super::host::HostSdk;
use super::view::{ActionId, Status, ViewNode};

/// Props for the inline compliance card.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceCardProps {
    pub workspace_name: String,
    pub status: Status,
    pub breaches: Vec<String>,
    pub next_action: String,
}

impl ComplianceCardProps {
    /// Illustrative fallback payload used when the host omits inline props.
    pub fn sample() -> Self {
        Self {
            workspace_name: "Mieszkanie 2026".to_string(),
            status: Status::Amber,
            breaches: vec!["RRSO powyżej 10%".to_string()],
            next_action: "Poproś bank Alfa o aktualizację oferty".to_string(),
        }
    }
}

/// Compact compliance summary with a single call-to-action.
pub struct ComplianceCard {
    props: ComplianceCardProps,
    host: Arc<dyn HostSdk>,
}

impl ComplianceCard {
    pub(super) fn new(props: ComplianceCardProps, host: Arc<dyn HostSdk>) -> Self {
        Self { props, host }
    }

    pub fn props(&self) -> &ComplianceCardProps {
        &self.props
    }

    /// Call-to-action: hand the user over to the fullscreen comparator.
    pub async fn open_comparator(&self) -> anyhow::Result<()> {
        self.host
            .request_display_mode(DisplayMode::Fullscreen)
            .await
    }

    pub fn view(&self) -> ViewNode {
        let breach_summary = if self.props.breaches.is_empty() {
            "Brak naruszeń guardrails".to_string()
        } else {
            format!("{} naruszenia guardrails", self.props.breaches.len())
        };
        let mut children = vec![
            ViewNode::Heading {
                text: self.props.workspace_name.clone(),
            },
            ViewNode::StatusPill {
                status: self.props.status,
            },
            ViewNode::Text {
                text: breach_summary,
            },
        ];
        if !self.props.breaches.is_empty() {
            children.push(ViewNode::List {
                items: self.props.breaches.clone(),
            });
        }
        children.push(ViewNode::Text {
            text: format!("Następna akcja: {}", self.props.next_action),
        });
        children.push(ViewNode::Button {
            action: ActionId::OpenComparator,
            label: "Otwórz porównywarkę".to_string(),
        });
        children.push(ViewNode::Note {
            text: "Widok jest szkicem (DRAFT). Żadne wysyłki nie odbywają się automatycznie."
                .to_string(),
        });
        ViewNode::Section {
            label: format!("Zgodność workspace {}", self.props.workspace_name),
            children,
        }
    }
}
