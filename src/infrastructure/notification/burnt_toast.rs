//! BurntToast notification backend (WSL)
//!
//! Generates PowerShell for the BurntToast module and runs it through
//! `powershell.exe`. User text is embedded in single-quoted PowerShell
//! strings. Doubling `'` is the only escaping performed, so input is
//! assumed to come from the local user.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::application::ports::{CommandRunner, CommandSpec, NotificationBackend, NotifyError};
use crate::domain::{
    AppConfig, ChoiceOutcome, ChoiceRequest, ChoiceState, HostEnvironment, NotificationRequest,
    ProgressRequest,
};

use super::answer_file::{AnswerFile, ANSWER_FILE_NAME};

const POWERSHELL_EXE: &str = "powershell.exe";
const POWERSHELL_FALLBACK: &str = "/mnt/c/Windows/System32/WindowsPowerShell/v1.0/powershell.exe";
const CMD_EXE: &str = "cmd.exe";
const CMD_FALLBACK: &str = "/mnt/c/Windows/System32/cmd.exe";

/// Timeout for toast and prompt scripts
const SCRIPT_TIMEOUT: Duration = Duration::from_secs(15);
/// Timeout for creating the per-option response scripts
const SETUP_TIMEOUT: Duration = Duration::from_secs(10);
/// Timeout for querying `%TEMP%`
const QUERY_TIMEOUT: Duration = Duration::from_secs(5);

/// Double single quotes for a PowerShell single-quoted string
fn ps_quote(text: &str) -> String {
    text.replace('\'', "''")
}

/// Map `C:\Users\me\AppData\Local\Temp` to `/mnt/c/Users/me/AppData/Local/Temp`
fn windows_path_to_wsl(raw: &str) -> Option<PathBuf> {
    let raw = raw.trim();
    let mut chars = raw.chars();
    let drive = chars.next().filter(char::is_ascii_alphabetic)?;
    if chars.next() != Some(':') {
        return None;
    }

    let rest = raw[2..].replace('\\', "/");
    Some(PathBuf::from(format!(
        "/mnt/{}{}",
        drive.to_ascii_lowercase(),
        rest
    )))
}

/// Find a Windows executable on PATH, falling back to its usual mount path
fn locate(exe: &str, fallback: &str) -> String {
    which::which(exe)
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_else(|_| fallback.to_string())
}

fn toast_script(request: &NotificationRequest) -> String {
    let mut text = format!(
        "'{}', '{}'",
        ps_quote(&request.title),
        ps_quote(&request.body)
    );
    if let Some(line) = &request.extra_line {
        text.push_str(&format!(", '{}'", ps_quote(line)));
    }

    let sound = if request.urgent {
        "-Sound Alarm".to_string()
    } else if let Some(name) = &request.sound_name {
        format!("-Sound {}", name)
    } else {
        "-Silent".to_string()
    };

    format!(
        "\nImport-Module BurntToast\nNew-BurntToastNotification `\n    -Text {} `\n    {}\n",
        text, sound
    )
}

/// Create `notify_choice_<n>.bat` for n in 1..=count unless already present
fn response_scripts_script(count: usize) -> String {
    format!(
        r#"
$tempDir = $env:TEMP
1..{count} | ForEach-Object {{
    $content = "@echo off`r`necho $_ > $tempDir\{answer}"
    $path = "$tempDir\notify_choice_$_.bat"
    if (-not (Test-Path $path)) {{
        $content | Out-File -FilePath $path -Encoding ASCII -NoNewline
    }}
}}
"#,
        count = count,
        answer = ANSWER_FILE_NAME,
    )
}

fn choice_script(app_name: &str, request: &ChoiceRequest) -> String {
    let buttons: Vec<String> = request
        .numbered_options()
        .map(|(i, option)| {
            format!(
                "$btn{i} = New-BTButton -Content '{i}. {label}' -Arguments \"$env:TEMP\\notify_choice_{i}.bat\"",
                i = i,
                label = ps_quote(option)
            )
        })
        .collect();
    let button_vars: Vec<String> = (1..=request.options().len())
        .map(|i| format!("$btn{}", i))
        .collect();

    let urgent = if request.urgent { "-Urgent" } else { "" };
    let sound = if request.sound_on { "-Sound Alarm" } else { "" };

    format!(
        "\nImport-Module BurntToast\n\n{buttons}\n\n$Expire = (Get-Date).AddHours(1)\n\n\
         New-BurntToastNotification `\n    -Text '{app}', '{question}' `\n    -Button {vars} `\n    \
         {urgent} {sound} `\n    -ExpirationTime $Expire\n",
        buttons = buttons.join("\n"),
        app = ps_quote(app_name),
        question = ps_quote(&request.question),
        vars = button_vars.join(", "),
        urgent = urgent,
        sound = sound,
    )
}

fn progress_script(request: &ProgressRequest) -> String {
    format!(
        "\nImport-Module BurntToast\n$Progress = New-BTProgressBar -Status '{}' -Value {}\n\
         New-BurntToastNotification `\n    -Text '{}' `\n    -ProgressBar $Progress\n",
        ps_quote(&request.status),
        request.value(),
        ps_quote(&request.title)
    )
}

/// BurntToast notification backend
pub struct BurntToastBackend {
    runner: Arc<dyn CommandRunner>,
    powershell: String,
    answer_file: AnswerFile,
    app_name: String,
    poll_interval: Duration,
}

impl BurntToastBackend {
    /// Create a backend with explicit paths
    pub fn new(
        runner: Arc<dyn CommandRunner>,
        powershell: impl Into<String>,
        temp_dir: impl AsRef<Path>,
        app_name: impl Into<String>,
        poll_interval: Duration,
    ) -> Self {
        Self {
            runner,
            powershell: powershell.into(),
            answer_file: AnswerFile::in_dir(temp_dir),
            app_name: app_name.into(),
            poll_interval,
        }
    }

    /// Create a backend, locating powershell.exe and the Windows temp dir.
    ///
    /// Configured paths win; otherwise the temp dir is asked from `cmd.exe`
    /// and falls back to `/tmp`.
    pub async fn resolve(runner: Arc<dyn CommandRunner>, config: &AppConfig) -> Self {
        let powershell = config
            .powershell_path()
            .map(str::to_string)
            .unwrap_or_else(|| locate(POWERSHELL_EXE, POWERSHELL_FALLBACK));

        let temp_dir = match config.wsl_temp_dir() {
            Some(dir) => PathBuf::from(dir),
            None => query_windows_temp(runner.as_ref()).await,
        };
        debug!(%powershell, temp_dir = %temp_dir.display(), "resolved WSL paths");

        Self::new(
            runner,
            powershell,
            temp_dir,
            config.app_name_or_default(),
            config.poll_interval_or_default(),
        )
    }

    /// Path of the answer file polled during a choice
    pub fn answer_file(&self) -> &AnswerFile {
        &self.answer_file
    }

    async fn run_script(&self, script: String, timeout: Duration) -> Result<(), NotifyError> {
        let spec = CommandSpec::new(self.powershell.as_str(), timeout)
            .arg("-Command")
            .arg(script);

        let output = self.runner.run(&spec).await?;
        if !output.success() {
            return Err(NotifyError::rejected(POWERSHELL_EXE, &output));
        }

        Ok(())
    }
}

/// Ask Windows for `%TEMP%`, as seen from the WSL side
async fn query_windows_temp(runner: &dyn CommandRunner) -> PathBuf {
    let spec = CommandSpec::new(locate(CMD_EXE, CMD_FALLBACK), QUERY_TIMEOUT)
        .args(["/c", "echo %TEMP%"]);

    match runner.run(&spec).await {
        Ok(output) if output.success() => {
            if let Some(path) = windows_path_to_wsl(&output.stdout) {
                return path;
            }
            debug!(stdout = %output.stdout.trim(), "unrecognised %TEMP%");
        }
        Ok(output) => debug!(status = %output.status_text(), "cmd.exe failed"),
        Err(e) => debug!(error = %e, "cmd.exe unavailable"),
    }

    PathBuf::from("/tmp")
}

#[async_trait]
impl NotificationBackend for BurntToastBackend {
    fn environment(&self) -> HostEnvironment {
        HostEnvironment::WindowsSubsystem
    }

    async fn send_toast(&self, request: &NotificationRequest) -> Result<(), NotifyError> {
        self.run_script(toast_script(request), SCRIPT_TIMEOUT).await
    }

    async fn ask_choice(&self, request: &ChoiceRequest) -> Result<ChoiceOutcome, NotifyError> {
        let count = request.options().len();

        // Best effort: a missing script only breaks its own button
        if let Err(e) = self
            .run_script(response_scripts_script(count), SETUP_TIMEOUT)
            .await
        {
            warn!(error = %e, "Failed to create choice response scripts");
        }

        // A click from an earlier, timed-out prompt that lands between here
        // and the new prompt is still read as this prompt's answer
        if let Err(e) = self.answer_file.clear().await {
            warn!(path = %self.answer_file.path().display(), error = %e, "Failed to clear stale answer");
        }

        self.run_script(choice_script(&self.app_name, request), SCRIPT_TIMEOUT)
            .await?;
        let state = ChoiceState::Idle.prompt();

        let state = match self.answer_file.poll(request, self.poll_interval).await {
            Some(choice) => state.answer(choice),
            None => state.time_out(),
        };

        Ok(state.finish())
    }

    async fn send_progress(&self, request: &ProgressRequest) -> Result<(), NotifyError> {
        // BurntToast cannot update a bar in place; each call is a new toast
        self.run_script(progress_script(request), SCRIPT_TIMEOUT)
            .await
    }
}
