//! Registry domain types: schemes, tool descriptors, metadata, golden prompts.

pub mod naming;
pub mod types;

pub use naming::*;
pub use types::*;
