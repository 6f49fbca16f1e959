//! Widget bootstrap behavior against a recording host double: default props,
//! mode routing, and the exact host calls each view action issues.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{Value, json};

use prawniczek_mcp::widget::{
    Container, DisplayMode, HostSdk, MountedWidget, PipPreviewProps, Status, ToolCall, WidgetError,
    WidgetProps, bootstrap,
};

#[derive(Debug, Clone, PartialEq)]
enum HostEvent {
    ToolCall { name: String, arguments: Value },
    ModeChange(DisplayMode),
    State(Value),
}

/// Test double standing in for the embedding host.
#[derive(Default)]
struct RecordingHost {
    events: Mutex<Vec<HostEvent>>,
}

impl RecordingHost {
    fn events(&self) -> Vec<HostEvent> {
        self.events.lock().expect("events lock").clone()
    }

    fn record(&self, event: HostEvent) {
        self.events.lock().expect("events lock").push(event);
    }
}

#[async_trait]
impl HostSdk for RecordingHost {
    async fn call_tool(&self, name: &str, call: ToolCall) -> anyhow::Result<Value> {
        self.record(HostEvent::ToolCall {
            name: name.to_string(),
            arguments: call.arguments,
        });
        Ok(Value::Null)
    }

    async fn request_display_mode(&self, mode: DisplayMode) -> anyhow::Result<()> {
        self.record(HostEvent::ModeChange(mode));
        Ok(())
    }

    async fn set_widget_state(&self, state: Value) -> anyhow::Result<()> {
        self.record(HostEvent::State(state));
        Ok(())
    }
}

fn sdk(host: &Arc<RecordingHost>) -> Option<Arc<dyn HostSdk>> {
    Some(host.clone() as Arc<dyn HostSdk>)
}

#[tokio::test]
async fn inline_card_falls_back_to_sample_props_and_requests_fullscreen() {
    let host = Arc::new(RecordingHost::default());
    let mut container = Container::new();
    let widget = bootstrap("inline", &mut container, WidgetProps::default(), sdk(&host))
        .expect("inline mount");
    assert!(container.root().is_some(), "container holds the view tree");

    let MountedWidget::Inline(card) = widget else {
        panic!("expected the inline card");
    };
    assert_eq!(card.props().workspace_name, "Mieszkanie 2026");
    assert_eq!(card.props().status, Status::Amber);

    card.open_comparator().await.expect("cta");
    assert_eq!(
        host.events(),
        vec![HostEvent::ModeChange(DisplayMode::Fullscreen)],
        "exactly one display-mode request"
    );
}

#[tokio::test]
async fn pip_secondary_action_persists_exact_consent_state() {
    let host = Arc::new(RecordingHost::default());
    let mut container = Container::new();
    let props = WidgetProps {
        pip: Some(PipPreviewProps {
            title: "Draft unsubscribe".to_string(),
            summary: "Draft gotowy do wysyłki po zatwierdzeniu.".to_string(),
            consent_token: "consent_email_2024".to_string(),
        }),
        ..WidgetProps::default()
    };
    let widget = bootstrap("pip", &mut container, props, sdk(&host)).expect("pip mount");
    let MountedWidget::Pip(preview) = widget else {
        panic!("expected the pip preview");
    };

    preview.save_state().await.expect("persist");
    assert_eq!(
        host.events(),
        vec![HostEvent::State(json!({ "consentToken": "consent_email_2024" }))]
    );
}

#[tokio::test]
async fn pip_primary_action_requests_fullscreen() {
    let host = Arc::new(RecordingHost::default());
    let mut container = Container::new();
    let widget = bootstrap("pip", &mut container, WidgetProps::default(), sdk(&host))
        .expect("pip mount");
    let MountedWidget::Pip(preview) = widget else {
        panic!("expected the pip preview");
    };

    preview.open_draft().await.expect("open");
    assert_eq!(
        host.events(),
        vec![HostEvent::ModeChange(DisplayMode::Fullscreen)]
    );
}

#[tokio::test]
async fn comparator_reassess_recomputes_the_offer_payload() {
    let host = Arc::new(RecordingHost::default());
    let mut container = Container::new();
    let widget = bootstrap(
        "fullscreen",
        &mut container,
        WidgetProps::default(),
        sdk(&host),
    )
    .expect("fullscreen mount");
    let MountedWidget::Fullscreen(mut comparator) = widget else {
        panic!("expected the comparator");
    };

    comparator.select("offer_2");
    comparator.reassess().await.expect("reassess");
    comparator.close().await.expect("close");

    // 935000 / 4200 * 12, rounded.
    let expected_arguments = json!({
        "budget_id": "budget_family_mortgage",
        "offer": {
            "principal": 935000.0,
            "term_months": 2671,
            "rrso": 10.1,
            "fees": [
                { "label": "Przekroczona rata miesięczna", "amount": 0 }
            ]
        }
    });
    assert_eq!(
        host.events(),
        vec![
            HostEvent::ToolCall {
                name: "budget.check_offer".to_string(),
                arguments: expected_arguments,
            },
            HostEvent::ModeChange(DisplayMode::Inline),
        ]
    );
}

#[tokio::test]
async fn comparator_ignores_unknown_row_selection() {
    let host = Arc::new(RecordingHost::default());
    let mut container = Container::new();
    let widget = bootstrap(
        "fullscreen",
        &mut container,
        WidgetProps::default(),
        sdk(&host),
    )
    .expect("fullscreen mount");
    let MountedWidget::Fullscreen(mut comparator) = widget else {
        panic!("expected the comparator");
    };

    comparator.select("offer_404");
    let selected = comparator.selected_offer().expect("default selection");
    assert_eq!(selected.id, "offer_1");
}

#[test]
fn every_mode_renders_without_props() {
    let host = Arc::new(RecordingHost::default());
    for mode in ["inline", "fullscreen", "pip"] {
        let mut container = Container::new();
        let widget = bootstrap(mode, &mut container, WidgetProps::default(), sdk(&host))
            .unwrap_or_else(|e| panic!("{mode} mount failed: {e}"));
        assert_eq!(widget.mode().as_str(), mode);
        assert!(container.root().is_some(), "{mode} left the container empty");
    }
}

#[test]
fn unsupported_mode_fails_and_leaves_the_container_untouched() {
    let host = Arc::new(RecordingHost::default());
    let mut container = Container::new();
    let err = bootstrap("sidebar", &mut container, WidgetProps::default(), sdk(&host))
        .expect_err("must fail");
    assert!(matches!(err, WidgetError::UnsupportedMode(ref mode) if mode.as_str() == "sidebar"));
    assert!(container.root().is_none());
}

#[test]
fn missing_host_capability_fails_at_mount_time() {
    let mut container = Container::new();
    let err = bootstrap("inline", &mut container, WidgetProps::default(), None)
        .expect_err("must fail");
    assert!(matches!(err, WidgetError::HostUnavailable));
    assert!(container.root().is_none());
}
