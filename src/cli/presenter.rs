//! CLI presenter for output formatting

use std::time::Duration;

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;

use crate::application::ChoiceAnswer;

#[derive(Serialize)]
struct ChoiceJson<'a> {
    choice: Option<usize>,
    label: Option<&'a str>,
}

#[derive(Serialize)]
struct SuccessJson {
    success: bool,
}

/// Format a choice result as a JSON object
pub fn choice_json(answer: Option<&ChoiceAnswer>) -> String {
    let body = ChoiceJson {
        choice: answer.map(|a| a.choice),
        label: answer.map(|a| a.label.as_str()),
    };
    serde_json::to_string(&body).unwrap_or_else(|_| r#"{"choice":null,"label":null}"#.into())
}

/// Format a send result as a JSON object
pub fn success_json(success: bool) -> String {
    format!(r#"{{"success":{}}}"#, success)
}

/// Human-readable line for a choice result
pub fn format_choice(answer: Option<&ChoiceAnswer>) -> String {
    match answer {
        Some(a) => format!("Choice: {} ({})", a.choice, a.label),
        None => "No choice made (timeout)".to_string(),
    }
}

/// Presenter for CLI output formatting
///
/// Results go to stdout. Everything else (spinner, diagnostics) goes to
/// stderr so `--json` output stays machine-readable.
pub struct Presenter {
    json: bool,
    spinner: Option<ProgressBar>,
}

impl Presenter {
    /// Create a new presenter
    pub fn new(json: bool) -> Self {
        Self {
            json,
            spinner: None,
        }
    }

    /// Start a spinner with message. No-op in JSON mode.
    pub fn start_spinner(&mut self, message: &str) {
        if self.json {
            return;
        }
        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
            .template("{spinner:.cyan} {msg}")
        {
            spinner.set_style(style);
        }
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(Duration::from_millis(80));
        self.spinner = Some(spinner);
    }

    /// Stop spinner without status
    pub fn stop_spinner(&mut self) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }
    }

    /// Print warning message to stderr
    pub fn warn(&self, message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Output text to stdout
    pub fn output(&self, text: &str) {
        println!("{}", text);
    }

    /// Report the result of a toast
    pub fn toast_result(&self, success: bool) {
        if self.json {
            self.output(&success_json(success));
        } else if success {
            self.output("Toast sent");
        } else {
            self.output("Failed to send");
        }
    }

    /// Report the result of a progress update
    pub fn progress_result(&self, success: bool) {
        if self.json {
            self.output(&success_json(success));
        } else if success {
            self.output("Progress toast sent");
        } else {
            self.output("Failed to send");
        }
    }

    /// Report the result of a choice
    pub fn choice_result(&self, answer: Option<&ChoiceAnswer>) {
        if self.json {
            self.output(&choice_json(answer));
        } else {
            self.output(&format_choice(answer));
        }
    }
}

impl Drop for Presenter {
    fn drop(&mut self) {
        self.stop_spinner();
    }
}
