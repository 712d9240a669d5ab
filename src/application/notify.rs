//! Notification use case
//!
//! Wraps a backend and folds every failure into a plain `bool` / `Option`
//! result. Errors are logged, never returned to the caller.

use tracing::{debug, info, warn};

use crate::domain::{ChoiceOutcome, ChoiceRequest, NotificationRequest, ProgressRequest};

use super::ports::NotificationBackend;

/// Result of a choice, as reported to the caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceAnswer {
    /// 1-based option number
    pub choice: usize,
    /// Label of the chosen option
    pub label: String,
}

/// Notification use case
pub struct NotifyService<B: NotificationBackend> {
    backend: B,
}

impl<B: NotificationBackend> NotifyService<B> {
    /// Create a new service around a backend
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Send a toast. Returns `true` if the native tool accepted it.
    pub async fn send_toast(&self, request: &NotificationRequest) -> bool {
        match self.backend.send_toast(request).await {
            Ok(()) => {
                debug!(title = %request.title, "toast sent");
                true
            }
            Err(e) => {
                warn!(environment = %self.backend.environment(), error = %e, "Failed to send toast");
                false
            }
        }
    }

    /// Ask a multi-choice question.
    ///
    /// Returns `None` on timeout, on error, and when the environment cannot
    /// collect answers; these cases are deliberately indistinguishable here.
    pub async fn ask_choice(&self, request: &ChoiceRequest) -> Option<ChoiceAnswer> {
        if request.options().is_empty() {
            debug!("choice without options, nothing to ask");
            return None;
        }

        let outcome = match self.backend.ask_choice(request).await {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!(environment = %self.backend.environment(), error = %e, "Failed to show choice");
                return None;
            }
        };

        match outcome {
            ChoiceOutcome::Answered(choice) => {
                let label = request.label(choice)?.to_string();
                info!(choice, %label, "choice answered");
                Some(ChoiceAnswer { choice, label })
            }
            ChoiceOutcome::TimedOut => {
                debug!(timeout = request.timeout_secs, "choice timed out");
                None
            }
            ChoiceOutcome::Unsupported => {
                debug!(environment = %self.backend.environment(), "interactive choice unsupported");
                None
            }
        }
    }

    /// Send a progress update. Returns `true` if the native tool accepted it.
    pub async fn send_progress(&self, request: &ProgressRequest) -> bool {
        match self.backend.send_progress(request).await {
            Ok(()) => {
                debug!(percent = request.percent(), "progress sent");
                true
            }
            Err(e) => {
                warn!(environment = %self.backend.environment(), error = %e, "Failed to send progress");
                false
            }
        }
    }
}
