//! Serializable view tree handed to the host's rendering layer.
//!
//! Widgets are presentational: they produce data, not pixels. The host walks
//! the tree, renders it, and routes button activations back through the
//! mounted widget's action methods.

use serde::{Deserialize, Serialize};

/// Compliance traffic-light status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Green,
    Amber,
    Red,
}

/// Stable identifiers for user-triggerable view actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionId {
    OpenComparator,
    Reassess,
    CloseComparator,
    OpenDraft,
    SaveWidgetState,
}

/// One node of a rendered view.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ViewNode {
    Section {
        label: String,
        children: Vec<ViewNode>,
    },
    Heading {
        text: String,
    },
    Text {
        text: String,
    },
    StatusPill {
        status: Status,
    },
    List {
        items: Vec<String>,
    },
    Button {
        action: ActionId,
        label: String,
    },
    /// Fine-print disclaimer, rendered out of the main flow.
    Note {
        text: String,
    },
}

/// A mount point owned exclusively by one bootstrap call.
#[derive(Debug, Default)]
pub struct Container {
    root: Option<ViewNode>,
}

impl Container {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn mount(&mut self, root: ViewNode) {
        self.root = Some(root);
    }

    /// The mounted view tree, if any bootstrap call succeeded.
    pub fn root(&self) -> Option<&ViewNode> {
        self.root.as_ref()
    }
}
