//! Naming helpers for dotted tool identifiers.

/// Extract the namespace prefix of a dotted tool name
/// (`mail.scan_inbox` -> `mail`).
pub fn tool_namespace(name: &str) -> &str {
    name.split('.').next().unwrap_or(name)
}

/// True when a tool's effect reaches outside the system boundary: guardian
/// notifications, mail action drafts, and mail account connections. Such
/// tools must require a `consent_token` in their input contract.
pub fn has_outward_effect(name: &str) -> bool {
    name.starts_with("notify.")
        || name.starts_with("mail.prepare_")
        || name.starts_with("mail.connect")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn namespace_is_first_dotted_segment() {
        assert_eq!(tool_namespace("budget.check_offer"), "budget");
        assert_eq!(tool_namespace("ws.create_workspace"), "ws");
        assert_eq!(tool_namespace("plain"), "plain");
    }

    #[test]
    fn outward_effect_family_matches() {
        assert!(has_outward_effect("notify.send_alert"));
        assert!(has_outward_effect("mail.prepare_action"));
        assert!(has_outward_effect("mail.connect_account"));
        assert!(!has_outward_effect("mail.scan_inbox"));
        assert!(!has_outward_effect("elder.evaluate_risk"));
    }
}
