//! No-op notification backend

use async_trait::async_trait;

use crate::application::ports::{NotificationBackend, NotifyError};
use crate::domain::{
    ChoiceOutcome, ChoiceRequest, ChoiceState, HostEnvironment, NotificationRequest,
    ProgressRequest,
};

/// Backend for hosts with no known notification surface.
///
/// Sends fail with `Unsupported`; choices end as unsupported right away.
pub struct NoOpBackend;

impl NoOpBackend {
    /// Create a new no-op backend
    pub fn new() -> Self {
        Self
    }
}

impl Default for NoOpBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NotificationBackend for NoOpBackend {
    fn environment(&self) -> HostEnvironment {
        HostEnvironment::Unsupported
    }

    async fn send_toast(&self, _request: &NotificationRequest) -> Result<(), NotifyError> {
        Err(NotifyError::Unsupported(HostEnvironment::Unsupported))
    }

    async fn ask_choice(&self, _request: &ChoiceRequest) -> Result<ChoiceOutcome, NotifyError> {
        Ok(ChoiceState::Idle.unsupported().finish())
    }

    async fn send_progress(&self, _request: &ProgressRequest) -> Result<(), NotifyError> {
        Err(NotifyError::Unsupported(HostEnvironment::Unsupported))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn everything_degrades() {
        let backend = NoOpBackend::new();
        assert!(backend
            .send_toast(&NotificationRequest::new("t", "m"))
            .await
            .is_err());
        assert!(backend
            .send_progress(&ProgressRequest::new("t", "s", 0.5))
            .await
            .is_err());
        assert_eq!(
            backend
                .ask_choice(&ChoiceRequest::new("q", ["a"]))
                .await
                .unwrap(),
            ChoiceOutcome::Unsupported
        );
    }
}
