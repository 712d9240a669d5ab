//! Subprocess runner backed by tokio::process

use std::io;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::io::AsyncReadExt;
use tokio::process::{Child, Command};
use tracing::debug;

use crate::application::ports::{CommandError, CommandOutput, CommandRunner, CommandSpec};

/// Runs external tools with a hard timeout.
///
/// stdin is closed; stdout and stderr are captured. On timeout the child is
/// killed and reaped before the error is returned.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioCommandRunner;

impl TokioCommandRunner {
    /// Create a new runner
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CommandRunner for TokioCommandRunner {
    async fn run(&self, spec: &CommandSpec) -> Result<CommandOutput, CommandError> {
        debug!(command = %spec, timeout = ?spec.timeout, "spawning");

        let mut child = Command::new(&spec.program)
            .args(&spec.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| spawn_error(&spec.program, e))?;

        let result = tokio::time::timeout(spec.timeout, collect(&mut child)).await;
        match result {
            Ok(Ok(output)) => {
                debug!(program = %spec.program, code = ?output.code, "exited");
                Ok(output)
            }
            Ok(Err(e)) => Err(CommandError::Io {
                program: spec.program.clone(),
                message: e.to_string(),
            }),
            Err(_) => {
                // kill() also waits, so no zombie is left behind
                if let Err(e) = child.kill().await {
                    debug!(program = %spec.program, error = %e, "kill after timeout failed");
                }
                Err(CommandError::TimedOut {
                    program: spec.program.clone(),
                    timeout: spec.timeout,
                })
            }
        }
    }
}

/// Drain both pipes and wait for exit
async fn collect(child: &mut Child) -> io::Result<CommandOutput> {
    let mut stdout_pipe = child.stdout.take();
    let mut stderr_pipe = child.stderr.take();
    let mut stdout = Vec::new();
    let mut stderr = Vec::new();

    let read_stdout = async {
        if let Some(pipe) = stdout_pipe.as_mut() {
            pipe.read_to_end(&mut stdout).await?;
        }
        Ok::<_, io::Error>(())
    };
    let read_stderr = async {
        if let Some(pipe) = stderr_pipe.as_mut() {
            pipe.read_to_end(&mut stderr).await?;
        }
        Ok::<_, io::Error>(())
    };

    let (out_res, err_res, status) = tokio::join!(read_stdout, read_stderr, child.wait());
    out_res?;
    err_res?;
    let status = status?;

    Ok(CommandOutput {
        code: status.code(),
        stdout: String::from_utf8_lossy(&stdout).into_owned(),
        stderr: String::from_utf8_lossy(&stderr).into_owned(),
    })
}

fn spawn_error(program: &str, e: io::Error) -> CommandError {
    if e.kind() == io::ErrorKind::NotFound {
        CommandError::NotFound(program.to_string())
    } else {
        CommandError::Io {
            program: program.to_string(),
            message: e.to_string(),
        }
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    #[tokio::test]
    async fn captures_stdout_and_exit_code() {
        let spec = CommandSpec::new("sh", Duration::from_secs(5))
            .args(["-c", "echo hi; echo oops >&2; exit 3"]);
        let output = TokioCommandRunner::new().run(&spec).await.unwrap();
        assert_eq!(output.code, Some(3));
        assert_eq!(output.stdout.trim(), "hi");
        assert_eq!(output.stderr.trim(), "oops");
        assert!(!output.success());
    }

    #[tokio::test]
    async fn missing_binary_is_not_found() {
        let spec = CommandSpec::new("definitely-not-a-real-binary-4821", Duration::from_secs(1));
        let err = TokioCommandRunner::new().run(&spec).await.unwrap_err();
        assert!(matches!(err, CommandError::NotFound(_)));
    }

    #[tokio::test]
    async fn slow_command_times_out_promptly() {
        let spec = CommandSpec::new("sleep", Duration::from_millis(200)).arg("10");
        let start = Instant::now();
        let err = TokioCommandRunner::new().run(&spec).await.unwrap_err();
        assert!(matches!(err, CommandError::TimedOut { .. }));
        assert!(start.elapsed() < Duration::from_secs(5));
    }
}
