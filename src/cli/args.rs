//! CLI argument definitions using Clap

use clap::Parser;

use crate::domain::{ChoiceRequest, NotificationRequest, ProgressRequest};

/// toast-notify - desktop notifications for scripts
#[derive(Parser, Debug)]
#[command(name = "toast-notify")]
#[command(version)]
#[command(about = "Desktop notifications for scripts: toasts, choices and progress on WSL, Linux and macOS")]
#[command(long_about = None)]
pub struct Cli {
    /// Toast title (line 1)
    #[arg(value_name = "TITLE")]
    pub title: Option<String>,

    /// Toast message (line 2)
    #[arg(value_name = "MESSAGE")]
    pub message: Option<String>,

    /// Optional third line
    #[arg(value_name = "LINE3")]
    pub line3: Option<String>,

    /// Include the app icon
    #[arg(long)]
    pub hero: bool,

    /// Play alarm sound / use critical urgency
    #[arg(long)]
    pub alarm: bool,

    /// Ask an interactive question with these options (max 5)
    #[arg(long, value_name = "LABEL", num_args = 1..)]
    pub choices: Option<Vec<String>>,

    /// Show a progress bar (0-1)
    #[arg(long, value_name = "VALUE", allow_negative_numbers = true)]
    pub progress: Option<f64>,

    /// Progress status text
    #[arg(long, value_name = "TEXT", default_value = "Working...")]
    pub status: String,

    /// Seconds to wait for a choice
    #[arg(long, value_name = "SECONDS")]
    pub timeout: Option<f64>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging on stderr
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

/// What a parsed command line asks for
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Choice(ChoiceRequest),
    Progress(ProgressRequest),
    Toast(NotificationRequest),
}

impl Cli {
    /// Resolve the requested action: choices first, then progress, then a
    /// plain toast. `None` if nothing actionable was given.
    ///
    /// `default_title` and `choice_timeout` come from the merged config.
    pub fn action(&self, default_title: &str, choice_timeout: f64) -> Option<Action> {
        let title = self
            .title
            .clone()
            .unwrap_or_else(|| default_title.to_string());

        if let Some(choices) = self.choices.as_ref().filter(|c| !c.is_empty()) {
            let request = ChoiceRequest::new(title, choices.iter().cloned())
                .with_timeout(self.timeout.unwrap_or(choice_timeout))
                .sound(self.alarm)
                .hero(self.hero);
            return Some(Action::Choice(request));
        }

        if let Some(value) = self.progress {
            let request = ProgressRequest::new(title, self.status.clone(), value).hero(self.hero);
            return Some(Action::Progress(request));
        }

        let message = self.message.as_ref().filter(|m| !m.is_empty())?;
        let mut request = NotificationRequest::new(title, message.clone())
            .urgent(self.alarm)
            .hero(self.hero);
        if let Some(line3) = &self.line3 {
            request = request.with_extra_line(line3.clone());
        }
        Some(Action::Toast(request))
    }
}
