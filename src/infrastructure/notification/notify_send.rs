//! notify-send notification backend (Linux desktop)

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::application::discover::NOTIFY_SEND;
use crate::application::ports::{
    CommandError, CommandRunner, CommandSpec, NotificationBackend, NotifyError,
};
use crate::domain::notification::PROGRESS_REPLACE_ID;
use crate::domain::{
    CapabilitySet, ChoiceOutcome, ChoiceRequest, ChoiceState, HostEnvironment,
    NotificationRequest, ProgressRequest,
};

/// Timeout for fire-and-forget sends
const SEND_TIMEOUT: Duration = Duration::from_secs(5);

/// notify-send urgency levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Urgency {
    Normal,
    Critical,
}

impl Urgency {
    fn from_flag(urgent: bool) -> Self {
        if urgent {
            Self::Critical
        } else {
            Self::Normal
        }
    }

    const fn as_str(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Critical => "critical",
        }
    }
}

/// Answer printed by `notify-send --wait` for the clicked action
fn read_answer(request: &ChoiceRequest, stdout: &str) -> Result<usize, NotifyError> {
    Ok(request.parse_answer(stdout)?)
}

/// Rewrite pipe-delimited line separators to real newlines
fn split_lines(body: &str) -> String {
    body.replace(" | ", "\n").replace('|', "\n")
}

/// notify-send notification backend
pub struct NotifySendBackend {
    runner: Arc<dyn CommandRunner>,
    capabilities: CapabilitySet,
    /// Application name for notifications
    app_name: String,
    /// Icon used for hero notifications
    icon: String,
}

impl NotifySendBackend {
    /// Create a new notify-send backend
    pub fn new(
        runner: Arc<dyn CommandRunner>,
        capabilities: CapabilitySet,
        app_name: impl Into<String>,
        icon: impl Into<String>,
    ) -> Self {
        Self {
            runner,
            capabilities,
            app_name: app_name.into(),
            icon: icon.into(),
        }
    }

    /// `notify-send <summary> <body> --app-name=.. -u <urgency> [-i icon]`
    fn command(
        &self,
        timeout: Duration,
        summary: &str,
        body: &str,
        urgency: Urgency,
        hero: bool,
    ) -> CommandSpec {
        let spec = CommandSpec::new(NOTIFY_SEND, timeout)
            .arg(summary)
            .arg(body)
            .arg(format!("--app-name={}", self.app_name));
        self.with_flags(spec, urgency, hero)
    }

    fn with_flags(&self, spec: CommandSpec, urgency: Urgency, hero: bool) -> CommandSpec {
        let spec = spec.args(["-u", urgency.as_str()]);
        if hero && self.capabilities.icons {
            spec.args(["-i", self.icon.as_str()])
        } else {
            spec
        }
    }

    fn ensure_available(&self) -> Result<(), NotifyError> {
        if self.capabilities.available {
            Ok(())
        } else {
            Err(NotifyError::ToolMissing(NOTIFY_SEND.to_string()))
        }
    }

    async fn dispatch(&self, spec: CommandSpec) -> Result<(), NotifyError> {
        self.ensure_available()?;

        let output = self.runner.run(&spec).await?;
        if !output.success() {
            return Err(NotifyError::rejected(NOTIFY_SEND, &output));
        }

        Ok(())
    }
}

#[async_trait]
impl NotificationBackend for NotifySendBackend {
    fn environment(&self) -> HostEnvironment {
        HostEnvironment::LinuxDesktop
    }

    async fn send_toast(&self, request: &NotificationRequest) -> Result<(), NotifyError> {
        let body = split_lines(&request.joined_body(" | "));
        let spec = self.command(
            SEND_TIMEOUT,
            &request.title,
            &body,
            Urgency::from_flag(request.urgent),
            request.hero,
        );
        self.dispatch(spec).await
    }

    async fn ask_choice(&self, request: &ChoiceRequest) -> Result<ChoiceOutcome, NotifyError> {
        let urgency = Urgency::from_flag(request.urgent || request.sound_on);
        let state = ChoiceState::Idle;

        if !self.capabilities.actions {
            debug!("notify-send has no action buttons, sending plain notification");
            let spec = self.command(
                SEND_TIMEOUT,
                &self.app_name,
                &request.question,
                urgency,
                request.hero,
            );
            self.dispatch(spec).await?;
            return Ok(state.unsupported().finish());
        }

        self.ensure_available()?;

        // The tool blocks until a button is clicked and prints its name
        let spec = CommandSpec::new(NOTIFY_SEND, request.timeout())
            .arg(self.app_name.as_str())
            .arg(request.question.as_str())
            .arg(format!("--app-name={}", self.app_name))
            .arg("--wait");
        let mut spec = self.with_flags(spec, urgency, request.hero);
        for (i, option) in request.numbered_options() {
            spec = spec.args(["-A".to_string(), format!("{}={}. {}", i, i, option)]);
        }

        let state = state.prompt();
        let state = match self.runner.run(&spec).await {
            Ok(output) if output.success() => match read_answer(request, &output.stdout) {
                Ok(choice) => state.answer(choice),
                // Dismissed or expired without a click
                Err(e) => {
                    debug!(error = %e, "no usable answer from notify-send");
                    state.time_out()
                }
            },
            Ok(output) => return Err(NotifyError::rejected(NOTIFY_SEND, &output)),
            Err(CommandError::TimedOut { .. }) => state.time_out(),
            Err(e) => return Err(e.into()),
        };

        Ok(state.finish())
    }

    async fn send_progress(&self, request: &ProgressRequest) -> Result<(), NotifyError> {
        let message = format!(
            "{} | [{}] {}%",
            request.status,
            request.bar(),
            request.percent()
        );
        let mut spec = self.command(
            SEND_TIMEOUT,
            &request.title,
            &split_lines(&message),
            Urgency::Normal,
            request.hero,
        );
        if self.capabilities.replace {
            spec = spec.args(["-r".to_string(), PROGRESS_REPLACE_ID.to_string()]);
        }
        self.dispatch(spec).await
    }
}
