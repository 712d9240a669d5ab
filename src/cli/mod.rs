//! CLI layer - Command-line interface
//!
//! Contains argument parsing, output formatting, logging setup
//! and the application runner.

pub mod app;
pub mod args;
pub mod logging;
pub mod presenter;

// Re-export commonly used types
pub use app::{load_merged_config, run};
pub use args::{Action, Cli};
pub use presenter::Presenter;
