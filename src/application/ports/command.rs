//! External command port interface

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

/// Command runner errors
#[derive(Debug, Clone, Error)]
pub enum CommandError {
    #[error("{0} not found")]
    NotFound(String),

    #[error("{program} timed out after {timeout:?}")]
    TimedOut { program: String, timeout: Duration },

    #[error("Failed to run {program}: {message}")]
    Io { program: String, message: String },
}

/// A single external command invocation with a hard deadline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
    pub timeout: Duration,
}

impl CommandSpec {
    /// Create a command with no arguments
    pub fn new(program: impl Into<String>, timeout: Duration) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            timeout,
        }
    }

    /// Append one argument
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append several arguments
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Whether `flag` appears verbatim in the argument list
    pub fn has_arg(&self, flag: &str) -> bool {
        self.args.iter().any(|a| a == flag)
    }

    /// Value following `flag`, if present
    pub fn arg_after(&self, flag: &str) -> Option<&str> {
        self.args
            .iter()
            .position(|a| a == flag)
            .and_then(|i| self.args.get(i + 1))
            .map(String::as_str)
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {:?}", arg)?;
        }
        Ok(())
    }
}

/// Captured result of a command that ran to completion
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code, `None` when terminated by a signal
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    /// A successful, silent exit
    pub fn ok() -> Self {
        Self {
            code: Some(0),
            ..Default::default()
        }
    }

    /// A successful exit printing `stdout`
    pub fn with_stdout(stdout: impl Into<String>) -> Self {
        Self {
            code: Some(0),
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    /// A failing exit with the given code
    pub fn failed(code: i32) -> Self {
        Self {
            code: Some(code),
            ..Default::default()
        }
    }

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    /// Human-readable exit status
    pub fn status_text(&self) -> String {
        match self.code {
            Some(code) => format!("exit code {}", code),
            None => "terminated by signal".to_string(),
        }
    }
}

/// Port for running external tools.
///
/// Implementations must enforce `spec.timeout`, and must have reaped the
/// child (exit status and output collected, or killed on timeout) before
/// returning.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    async fn run(&self, spec: &CommandSpec) -> Result<CommandOutput, CommandError>;
}

#[async_trait]
impl<T: CommandRunner + ?Sized> CommandRunner for Arc<T> {
    async fn run(&self, spec: &CommandSpec) -> Result<CommandOutput, CommandError> {
        self.as_ref().run(spec).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_collects_args() {
        let spec = CommandSpec::new("notify-send", Duration::from_secs(5))
            .arg("Title")
            .args(["-u", "normal"]);
        assert_eq!(spec.args, vec!["Title", "-u", "normal"]);
        assert!(spec.has_arg("-u"));
        assert_eq!(spec.arg_after("-u"), Some("normal"));
        assert_eq!(spec.arg_after("-r"), None);
    }

    #[test]
    fn display_quotes_args() {
        let spec = CommandSpec::new("osascript", Duration::from_secs(5)).args(["-e", "a b"]);
        assert_eq!(spec.to_string(), r#"osascript "-e" "a b""#);
    }

    #[test]
    fn output_status() {
        assert!(CommandOutput::ok().success());
        assert!(!CommandOutput::failed(2).success());
        assert_eq!(CommandOutput::failed(2).status_text(), "exit code 2");
        assert!(!CommandOutput::default().success());
    }
}
