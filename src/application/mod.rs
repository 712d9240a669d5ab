//! Application layer - Use cases and port interfaces
//!
//! Contains environment discovery, the notification use case,
//! and trait definitions for external system interactions.

pub mod discover;
pub mod notify;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

// Re-export use cases
pub use discover::{detect_environment, discover_context, probe_capabilities};
pub use notify::{ChoiceAnswer, NotifyService};
