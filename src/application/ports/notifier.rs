//! Notification backend port interface

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::error::AnswerParseError;
use crate::domain::{
    ChoiceOutcome, ChoiceRequest, HostEnvironment, NotificationRequest, ProgressRequest,
};

use super::command::{CommandError, CommandOutput};

/// Notification errors
#[derive(Debug, Clone, Error)]
pub enum NotifyError {
    #[error("{0} not found")]
    ToolMissing(String),

    #[error("{tool} timed out after {timeout:?}")]
    ToolTimeout { tool: String, timeout: Duration },

    #[error("{tool} failed: {reason}")]
    ToolRejected { tool: String, reason: String },

    #[error("Not supported on {0}")]
    Unsupported(HostEnvironment),

    #[error(transparent)]
    ParseFailure(#[from] AnswerParseError),
}

impl NotifyError {
    /// Error for a tool that exited unsuccessfully
    pub fn rejected(tool: impl Into<String>, output: &CommandOutput) -> Self {
        let stderr = output.stderr.trim();
        let reason = if stderr.is_empty() {
            output.status_text()
        } else {
            format!("{} ({})", output.status_text(), stderr)
        };

        Self::ToolRejected {
            tool: tool.into(),
            reason,
        }
    }
}

impl From<CommandError> for NotifyError {
    fn from(err: CommandError) -> Self {
        match err {
            CommandError::NotFound(program) => Self::ToolMissing(program),
            CommandError::TimedOut { program, timeout } => Self::ToolTimeout {
                tool: program,
                timeout,
            },
            CommandError::Io { program, message } => Self::ToolRejected {
                tool: program,
                reason: message,
            },
        }
    }
}

/// Port for a host notification surface.
///
/// One implementation exists per host environment; all of them accept the
/// same requests and silently drop what they cannot render.
#[async_trait]
pub trait NotificationBackend: Send + Sync {
    /// The environment this backend targets
    fn environment(&self) -> HostEnvironment;

    /// Show a fire-and-forget toast.
    async fn send_toast(&self, request: &NotificationRequest) -> Result<(), NotifyError>;

    /// Prompt the user with options and wait for the answer.
    ///
    /// # Returns
    /// The terminal state of the exchange; a timeout is an `Ok` outcome
    async fn ask_choice(&self, request: &ChoiceRequest) -> Result<ChoiceOutcome, NotifyError>;

    /// Show or update a progress notification.
    async fn send_progress(&self, request: &ProgressRequest) -> Result<(), NotifyError>;
}

/// Blanket implementation for boxed backend types
#[async_trait]
impl NotificationBackend for Box<dyn NotificationBackend> {
    fn environment(&self) -> HostEnvironment {
        self.as_ref().environment()
    }

    async fn send_toast(&self, request: &NotificationRequest) -> Result<(), NotifyError> {
        self.as_ref().send_toast(request).await
    }

    async fn ask_choice(&self, request: &ChoiceRequest) -> Result<ChoiceOutcome, NotifyError> {
        self.as_ref().ask_choice(request).await
    }

    async fn send_progress(&self, request: &ProgressRequest) -> Result<(), NotifyError> {
        self.as_ref().send_progress(request).await
    }
}
