//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod command;
pub mod config;
pub mod notifier;
pub mod signals;

// Re-export common types
pub use command::{CommandError, CommandOutput, CommandRunner, CommandSpec};
pub use config::ConfigStore;
pub use notifier::{NotificationBackend, NotifyError};
pub use signals::EnvironmentSignals;
