//! toast-notify - desktop notifications for scripts
//!
//! Sends toasts, asks multiple-choice questions and shows progress bars
//! through whatever notifier the host provides: BurntToast via PowerShell
//! on WSL, notify-send on a Linux desktop, osascript on macOS.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Requests, choice state machine, environment and config value objects
//! - **Application**: Environment discovery, the notification use case, and port traits
//! - **Infrastructure**: Adapter implementations (process runner, notifier backends, config)
//! - **CLI**: Command-line interface, output formatting and logging setup

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
