//! Domain layer - Core notification model
//!
//! Contains value objects, the choice protocol state machine, and domain errors.
//! This layer has no dependencies on external systems.

pub mod config;
pub mod environment;
pub mod error;
pub mod notification;

// Re-export common types
pub use config::AppConfig;
pub use environment::{CapabilitySet, HostEnvironment, NotifyContext};
pub use error::*;
pub use notification::{
    ChoiceOutcome, ChoiceRequest, ChoiceState, NotificationRequest, ProgressRequest,
};
