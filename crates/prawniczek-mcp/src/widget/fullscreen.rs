//! Fullscreen offer comparator.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::{Value as JsonValue, json};

use super::DisplayMode;
use super::host::{HostSdk, ToolCall};
use super::view::{ActionId, ViewNode};

/// One bank offer row in the comparator table.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferRow {
    pub id: String,
    pub provider: String,
    pub rrso: f64,
    pub monthly_payment: f64,
    pub total_cost: f64,
    pub breaches: Vec<String>,
    pub recommended: bool,
}

/// Props for the fullscreen comparator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparatorProps {
    pub workspace_id: String,
    pub budget_id: String,
    pub offers: Vec<OfferRow>,
}

impl ComparatorProps {
    /// Illustrative fallback payload used when the host omits fullscreen props.
    pub fn sample() -> Self {
        Self {
            workspace_id: "ws_family".to_string(),
            budget_id: "budget_family_mortgage".to_string(),
            offers: vec![
                OfferRow {
                    id: "offer_1".to_string(),
                    provider: "Bank Alfa".to_string(),
                    rrso: 9.4,
                    monthly_payment: 3950.0,
                    total_cost: 890_000.0,
                    breaches: vec![],
                    recommended: true,
                },
                OfferRow {
                    id: "offer_2".to_string(),
                    provider: "Bank Beta".to_string(),
                    rrso: 10.1,
                    monthly_payment: 4200.0,
                    total_cost: 935_000.0,
                    breaches: vec!["Przekroczona rata miesięczna".to_string()],
                    recommended: false,
                },
            ],
        }
    }
}

/// Offer table plus an inspector over the selected row.
pub struct OfferComparator {
    props: ComparatorProps,
    selected: Option<usize>,
    host: Arc<dyn HostSdk>,
}

impl OfferComparator {
    pub(super) fn new(props: ComparatorProps, host: Arc<dyn HostSdk>) -> Self {
        let selected = if props.offers.is_empty() { None } else { Some(0) };
        Self {
            props,
            selected,
            host,
        }
    }

    pub fn props(&self) -> &ComparatorProps {
        &self.props
    }

    /// Row currently shown in the inspector.
    pub fn selected_offer(&self) -> Option<&OfferRow> {
        self.selected.map(|idx| &self.props.offers[idx])
    }

    /// Select a row by id; unknown ids leave the selection unchanged.
    pub fn select(&mut self, offer_id: &str) {
        if let Some(idx) = self.props.offers.iter().position(|o| o.id == offer_id) {
            self.selected = Some(idx);
        }
    }

    /// Re-run the budget check for the selected row.
    ///
    /// The payload is recomputed from the row: total cost becomes the
    /// principal, the term derives from the monthly payment, and breaches are
    /// carried as zero-amount fee labels. The tool result never drives
    /// rendering here; hosts refresh the view on their own schedule.
    pub async fn reassess(&self) -> anyhow::Result<()> {
        let Some(offer) = self.selected_offer() else {
            return Ok(());
        };
        let term_months = ((offer.total_cost / offer.monthly_payment) * 12.0).round() as i64;
        let fees: Vec<JsonValue> = offer
            .breaches
            .iter()
            .map(|label| json!({ "label": label, "amount": 0 }))
            .collect();
        let arguments = json!({
            "budget_id": self.props.budget_id,
            "offer": {
                "principal": offer.total_cost,
                "term_months": term_months,
                "rrso": offer.rrso,
                "fees": fees
            }
        });
        self.host
            .call_tool("budget.check_offer", ToolCall::new(arguments))
            .await?;
        Ok(())
    }

    /// Close action: return to the inline card.
    pub async fn close(&self) -> anyhow::Result<()> {
        self.host.request_display_mode(DisplayMode::Inline).await
    }

    pub fn view(&self) -> ViewNode {
        let mut children = vec![
            ViewNode::Heading {
                text: "Porównanie ofert".to_string(),
            },
            ViewNode::Text {
                text: format!("Workspace: {}", self.props.workspace_id),
            },
            ViewNode::Button {
                action: ActionId::CloseComparator,
                label: "Zamknij".to_string(),
            },
        ];
        for offer in &self.props.offers {
            let mut line = format!(
                "{}: RRSO {:.2}%, rata {:.0} PLN, koszt {:.0} PLN",
                offer.provider, offer.rrso, offer.monthly_payment, offer.total_cost
            );
            if offer.recommended {
                line.push_str(" (rekomendacja)");
            }
            children.push(ViewNode::Text { text: line });
            if !offer.breaches.is_empty() {
                children.push(ViewNode::List {
                    items: offer.breaches.clone(),
                });
            }
        }
        if let Some(offer) = self.selected_offer() {
            let guardrails = if offer.breaches.is_empty() {
                ViewNode::Text {
                    text: "Brak naruszeń, mieści się w budżecie.".to_string(),
                }
            } else {
                ViewNode::List {
                    items: offer.breaches.clone(),
                }
            };
            children.push(ViewNode::Section {
                label: "Szczegóły oferty".to_string(),
                children: vec![
                    ViewNode::Text {
                        text: offer.provider.clone(),
                    },
                    guardrails,
                    ViewNode::Button {
                        action: ActionId::Reassess,
                        label: "Ponownie sprawdź budżet".to_string(),
                    },
                ],
            });
        }
        children.push(ViewNode::Note {
            text: "Wszystkie akcje to drafty. Użytkownik finalnie zatwierdza komunikację."
                .to_string(),
        });
        ViewNode::Section {
            label: "Porównanie ofert".to_string(),
            children,
        }
    }
}
