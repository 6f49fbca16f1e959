//! Security schemes tools may bind to.

use crate::model::{SchemeKind, SecurityScheme};

/// Scheme id for internal read-only lookups.
pub const INTERNAL_NOAUTH: &str = "internal-noauth";
/// Scheme id for workspace-scoped OAuth 2.1 + PKCE access.
pub const WORKSPACE_OAUTH: &str = "workspace-oauth";
/// Scheme id for delegated Gmail/IMAP OAuth access.
pub const GMAIL_OAUTH: &str = "gmail-oauth";

/// The declared scheme set, in catalog order.
pub fn security_schemes() -> Vec<SecurityScheme> {
    vec![
        SecurityScheme {
            id: INTERNAL_NOAUTH.to_string(),
            kind: SchemeKind::Noauth,
            description: "Use for read-only internal lookups that do not leave the tenant boundary."
                .to_string(),
            scopes: None,
        },
        SecurityScheme {
            id: WORKSPACE_OAUTH.to_string(),
            kind: SchemeKind::Oauth2,
            description:
                "Workspace authenticated access for protected resources via OAuth 2.1 with PKCE."
                    .to_string(),
            scopes: Some(vec![
                "workspace.read".to_string(),
                "workspace.write".to_string(),
                "cases.manage".to_string(),
                "email.scan".to_string(),
                "email.modify".to_string(),
                "elder.notify".to_string(),
            ]),
        },
        SecurityScheme {
            id: GMAIL_OAUTH.to_string(),
            kind: SchemeKind::Oauth2,
            description:
                "Delegated Gmail/IMAP OAuth 2.1 client with dynamic registration and consent tokens."
                    .to_string(),
            scopes: Some(vec![
                "https://mail.google.com/".to_string(),
                "email.readonly".to_string(),
                "email.modify".to_string(),
            ]),
        },
    ]
}
