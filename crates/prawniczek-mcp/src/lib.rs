//! Prawniczek registry: a validated catalog of tool descriptors, security
//! schemes, and golden prompts for an assistant host, plus the host-rendered
//! compliance widgets.
//!
//! The registry side is pure data validation: [`registry::build`] assembles
//! the static catalog into one immutable config or fails fast with a typed
//! error. The widget side is presentational only and talks to its embedder
//! through the injected [`widget::HostSdk`] capability.

pub mod advertise;
pub mod catalog;
pub mod model;
pub mod registry;
pub mod widget;
