//! File-drop answer channel for the WSL choice handshake
//!
//! Each toast button runs a tiny batch script that writes its option number
//! into a well-known file. We clear the file before prompting and poll it
//! afterwards.

use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use tokio::fs;
use tokio::time::{sleep, Instant};
use tracing::trace;

use crate::domain::ChoiceRequest;

/// Name of the answer file inside the Windows temp directory
pub const ANSWER_FILE_NAME: &str = "notify_choice.txt";

/// The answer file of the choice handshake
#[derive(Debug, Clone)]
pub struct AnswerFile {
    path: PathBuf,
}

impl AnswerFile {
    /// Answer file inside `dir`
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(ANSWER_FILE_NAME),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Remove a stale answer. A missing file is not an error.
    pub async fn clear(&self) -> io::Result<()> {
        match fs::remove_file(&self.path).await {
            Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e),
            _ => Ok(()),
        }
    }

    /// Read the file once; `None` if absent or not (yet) a valid answer
    pub async fn read(&self, request: &ChoiceRequest) -> Option<usize> {
        let content = fs::read_to_string(&self.path).await.ok()?;
        match request.parse_answer(&content) {
            Ok(choice) => Some(choice),
            Err(e) => {
                trace!(error = %e, "answer file not usable yet");
                None
            }
        }
    }

    /// Poll every `interval` until a valid answer appears or the request's
    /// timeout elapses. The file is always checked at least once.
    ///
    /// A deadline past what the clock can represent means no deadline.
    pub async fn poll(&self, request: &ChoiceRequest, interval: Duration) -> Option<usize> {
        let deadline = Instant::now().checked_add(request.timeout());

        loop {
            if let Some(choice) = self.read(request).await {
                return Some(choice);
            }

            let wait = match deadline {
                Some(deadline) => {
                    let now = Instant::now();
                    if now >= deadline {
                        return None;
                    }
                    interval.min(deadline - now)
                }
                None => interval,
            };
            sleep(wait).await;
        }
    }
}
