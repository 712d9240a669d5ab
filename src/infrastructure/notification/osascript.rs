//! osascript notification backend (macOS)
//!
//! `display notification` has no buttons, so choices degrade to a plain
//! notification and return immediately.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::application::ports::{CommandRunner, CommandSpec, NotificationBackend, NotifyError};
use crate::domain::{
    ChoiceOutcome, ChoiceRequest, ChoiceState, HostEnvironment, NotificationRequest,
    ProgressRequest,
};

const OSASCRIPT: &str = "osascript";

const SEND_TIMEOUT: Duration = Duration::from_secs(5);

fn escape(text: &str) -> String {
    text.replace('"', "\\\"")
}

/// One-line AppleScript `display notification` expression
fn display_script(title: &str, message: &str, sound: bool) -> String {
    let sound = if sound { r#" sound name "default""# } else { "" };
    format!(
        r#"display notification "{}" with title "{}"{}"#,
        escape(message),
        escape(title),
        sound
    )
}

/// osascript notification backend
pub struct OsascriptBackend {
    runner: Arc<dyn CommandRunner>,
    app_name: String,
}

impl OsascriptBackend {
    pub fn new(runner: Arc<dyn CommandRunner>, app_name: impl Into<String>) -> Self {
        Self {
            runner,
            app_name: app_name.into(),
        }
    }

    async fn display(&self, title: &str, message: &str, sound: bool) -> Result<(), NotifyError> {
        let spec = CommandSpec::new(OSASCRIPT, SEND_TIMEOUT)
            .arg("-e")
            .arg(display_script(title, message, sound));

        let output = self.runner.run(&spec).await?;
        if !output.success() {
            return Err(NotifyError::rejected(OSASCRIPT, &output));
        }

        Ok(())
    }
}

#[async_trait]
impl NotificationBackend for OsascriptBackend {
    fn environment(&self) -> HostEnvironment {
        HostEnvironment::MacOS
    }

    async fn send_toast(&self, request: &NotificationRequest) -> Result<(), NotifyError> {
        // Only the default alert sound is available; any sound request maps to it
        let sound = request.urgent || request.sound_name.is_some();
        self.display(&request.title, &request.joined_body("\n"), sound)
            .await
    }

    async fn ask_choice(&self, request: &ChoiceRequest) -> Result<ChoiceOutcome, NotifyError> {
        self.display(&self.app_name, &request.question, request.sound_on)
            .await?;
        Ok(ChoiceState::Idle.unsupported().finish())
    }

    async fn send_progress(&self, request: &ProgressRequest) -> Result<(), NotifyError> {
        let message = format!("{} — {}%", request.status, request.percent());
        self.display(&request.title, &message, false).await
    }
}
