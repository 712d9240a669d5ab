//! Interactive choice request and protocol state

use std::fmt;

use crate::domain::error::AnswerParseError;

/// Maximum number of options presented to the user
pub const MAX_CHOICE_OPTIONS: usize = 5;

/// Longest wait for an answer, in seconds (about 100 years).
/// Larger and infinite timeouts saturate here.
pub const MAX_CHOICE_TIMEOUT_SECS: f64 = 100.0 * 365.0 * 24.0 * 3600.0;

fn clamp_timeout(secs: f64) -> f64 {
    if secs.is_nan() {
        0.0
    } else {
        secs.clamp(0.0, MAX_CHOICE_TIMEOUT_SECS)
    }
}

/// A question with up to [`MAX_CHOICE_OPTIONS`] ordered answers.
#[derive(Debug, Clone, PartialEq)]
pub struct ChoiceRequest {
    pub question: String,
    options: Vec<String>,
    /// How long to wait for an answer, in seconds
    pub timeout_secs: f64,
    /// Persistent / critical notification
    pub urgent: bool,
    /// Play the alarm sound
    pub sound_on: bool,
    /// Include the app icon where supported
    pub hero: bool,
}

impl ChoiceRequest {
    /// Create a choice request. Options beyond the fifth are dropped.
    pub fn new<I, S>(question: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            question: question.into(),
            options: options
                .into_iter()
                .take(MAX_CHOICE_OPTIONS)
                .map(Into::into)
                .collect(),
            timeout_secs: 60.0,
            urgent: true,
            sound_on: false,
            hero: true,
        }
    }

    /// Set the answer timeout in seconds.
    ///
    /// Negative and NaN values become zero; huge values and `+inf`
    /// saturate at [`MAX_CHOICE_TIMEOUT_SECS`].
    pub fn with_timeout(mut self, secs: f64) -> Self {
        self.timeout_secs = clamp_timeout(secs);
        self
    }

    pub fn urgent(mut self, urgent: bool) -> Self {
        self.urgent = urgent;
        self
    }

    pub fn sound(mut self, on: bool) -> Self {
        self.sound_on = on;
        self
    }

    pub fn hero(mut self, hero: bool) -> Self {
        self.hero = hero;
        self
    }

    /// The presented options, in order
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Options paired with their 1-based numbers
    pub fn numbered_options(&self) -> impl Iterator<Item = (usize, &str)> {
        self.options
            .iter()
            .enumerate()
            .map(|(i, opt)| (i + 1, opt.as_str()))
    }

    /// Label for a 1-based choice number
    pub fn label(&self, choice: usize) -> Option<&str> {
        choice
            .checked_sub(1)
            .and_then(|i| self.options.get(i))
            .map(String::as_str)
    }

    /// Timeout as a `std::time::Duration`
    pub fn timeout(&self) -> std::time::Duration {
        std::time::Duration::try_from_secs_f64(clamp_timeout(self.timeout_secs))
            .unwrap_or(std::time::Duration::ZERO)
    }

    /// Parse a raw answer for this request.
    ///
    /// Only the first line is considered; it must hold a number in
    /// `1..=options().len()`.
    pub fn parse_answer(&self, raw: &str) -> Result<usize, AnswerParseError> {
        let first = raw.lines().next().unwrap_or("").trim();
        let invalid = || AnswerParseError {
            input: first.to_string(),
            option_count: self.options.len(),
        };

        let choice: usize = first.parse().map_err(|_| invalid())?;
        if (1..=self.options.len()).contains(&choice) {
            Ok(choice)
        } else {
            Err(invalid())
        }
    }
}

/// Choice protocol states.
///
/// State machine:
///   IDLE -> PROMPTED (prompt)
///   PROMPTED -> ANSWERED (answer)
///   PROMPTED -> TIMED_OUT (time_out)
///   IDLE | PROMPTED -> UNSUPPORTED (unsupported)
///
/// Transitions that do not apply to the current state leave it unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChoiceState {
    #[default]
    Idle,
    Prompted,
    Answered(usize),
    TimedOut,
    Unsupported,
}

impl ChoiceState {
    pub fn prompt(self) -> Self {
        match self {
            Self::Idle => Self::Prompted,
            other => other,
        }
    }

    pub fn answer(self, choice: usize) -> Self {
        match self {
            Self::Prompted => Self::Answered(choice),
            other => other,
        }
    }

    pub fn time_out(self) -> Self {
        match self {
            Self::Prompted => Self::TimedOut,
            other => other,
        }
    }

    pub fn unsupported(self) -> Self {
        match self {
            Self::Idle | Self::Prompted => Self::Unsupported,
            other => other,
        }
    }

    /// Whether no further transition is possible
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Answered(_) | Self::TimedOut | Self::Unsupported)
    }

    /// Terminal projection, `None` while the exchange is still open
    pub fn outcome(self) -> Option<ChoiceOutcome> {
        match self {
            Self::Answered(n) => Some(ChoiceOutcome::Answered(n)),
            Self::TimedOut => Some(ChoiceOutcome::TimedOut),
            Self::Unsupported => Some(ChoiceOutcome::Unsupported),
            Self::Idle | Self::Prompted => None,
        }
    }

    /// Close the exchange; one still open counts as timed out
    pub fn finish(self) -> ChoiceOutcome {
        self.outcome().unwrap_or(ChoiceOutcome::TimedOut)
    }
}

impl fmt::Display for ChoiceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Prompted => write!(f, "prompted"),
            Self::Answered(n) => write!(f, "answered({})", n),
            Self::TimedOut => write!(f, "timed out"),
            Self::Unsupported => write!(f, "unsupported"),
        }
    }
}

/// How a choice exchange ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceOutcome {
    Answered(usize),
    TimedOut,
    Unsupported,
}

impl ChoiceOutcome {
    /// The selected 1-based option, if any
    pub fn choice(&self) -> Option<usize> {
        match self {
            Self::Answered(n) => Some(*n),
            Self::TimedOut | Self::Unsupported => None,
        }
    }
}
