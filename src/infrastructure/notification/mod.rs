//! Notification infrastructure module
//!
//! One backend per host environment: notify-send (Linux desktop),
//! osascript (macOS) and BurntToast via PowerShell (WSL), plus a no-op
//! backend for everything else.

mod answer_file;
mod burnt_toast;
mod factory;
mod noop;
mod notify_send;
mod osascript;

pub use answer_file::{AnswerFile, ANSWER_FILE_NAME};
pub use burnt_toast::BurntToastBackend;
pub use factory::create_backend;
pub use noop::NoOpBackend;
pub use notify_send::NotifySendBackend;
pub use osascript::OsascriptBackend;
