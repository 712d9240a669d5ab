//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with external systems like notify-send, osascript,
//! PowerShell and the filesystem.

pub mod config;
pub mod environment;
pub mod notification;
pub mod process;

// Re-export adapters
pub use config::XdgConfigStore;
pub use environment::SystemSignals;
pub use notification::{
    create_backend, BurntToastBackend, NoOpBackend, NotifySendBackend, OsascriptBackend,
};
pub use process::TokioCommandRunner;
