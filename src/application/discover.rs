//! Environment detection and capability probing use case

use std::time::Duration;

use tracing::debug;

use crate::domain::{CapabilitySet, HostEnvironment, NotifyContext};

use super::ports::{CommandRunner, CommandSpec, EnvironmentSignals};

/// Linux native notifier binary
pub const NOTIFY_SEND: &str = "notify-send";

/// Timeout for the `--help` probe
pub const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// Variables that indicate a graphical session
const DISPLAY_VARS: [&str; 2] = ["DISPLAY", "WAYLAND_DISPLAY"];

/// Determine the host environment.
///
/// Checked in priority order, first match wins: a WSL kernel (which may
/// also export display variables under WSLg), then a graphical session,
/// then a Darwin kernel.
pub fn detect_environment(signals: &dyn EnvironmentSignals) -> HostEnvironment {
    if is_wsl_kernel(signals) {
        return HostEnvironment::WindowsSubsystem;
    }

    let has_display = DISPLAY_VARS
        .iter()
        .any(|var| signals.env_var(var).is_some_and(|v| !v.is_empty()));
    if has_display {
        return HostEnvironment::LinuxDesktop;
    }

    if signals.kernel_name().as_deref() == Some("Darwin") {
        return HostEnvironment::MacOS;
    }

    HostEnvironment::Unsupported
}

fn is_wsl_kernel(signals: &dyn EnvironmentSignals) -> bool {
    signals
        .kernel_version()
        .map(|v| v.to_lowercase())
        .is_some_and(|v| v.contains("microsoft") || v.contains("wsl"))
}

/// Ask `notify-send --help` which optional features it supports.
///
/// A missing binary or a timeout yields [`CapabilitySet::unavailable`].
/// The exit status is ignored: some builds print usage and exit non-zero.
pub async fn probe_capabilities(runner: &dyn CommandRunner) -> CapabilitySet {
    let spec = CommandSpec::new(NOTIFY_SEND, PROBE_TIMEOUT).arg("--help");

    match runner.run(&spec).await {
        Ok(output) => {
            let help = format!("{}{}", output.stdout, output.stderr);
            CapabilitySet::from_help_text(&help)
        }
        Err(e) => {
            debug!(error = %e, "capability probe failed");
            CapabilitySet::unavailable()
        }
    }
}

/// Build the process-wide context: detect once, probe once if needed.
pub async fn discover_context(
    signals: &dyn EnvironmentSignals,
    runner: &dyn CommandRunner,
) -> NotifyContext {
    let environment = detect_environment(signals);
    debug!(%environment, "detected host environment");

    let capabilities = if environment.needs_probe() {
        let caps = probe_capabilities(runner).await;
        debug!(?caps, "probed notifier capabilities");
        Some(caps)
    } else {
        None
    };

    NotifyContext::new(environment, capabilities)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{CommandError, CommandOutput};
    use crate::application::testing::{FakeRunner, FakeSignals};

    #[test]
    fn detects_wsl() {
        assert_eq!(
            detect_environment(&FakeSignals::wsl()),
            HostEnvironment::WindowsSubsystem
        );
    }

    #[test]
    fn wsl_wins_over_display_variables() {
        let signals = FakeSignals::wsl().with_env("DISPLAY", ":0");
        assert_eq!(detect_environment(&signals), HostEnvironment::WindowsSubsystem);
    }

    #[test]
    fn detects_linux_desktop_from_either_variable() {
        for var in DISPLAY_VARS {
            assert_eq!(
                detect_environment(&FakeSignals::linux_desktop(var)),
                HostEnvironment::LinuxDesktop
            );
        }
    }

    #[test]
    fn empty_display_variable_is_absent() {
        let signals = FakeSignals::default().with_env("DISPLAY", "");
        assert_eq!(detect_environment(&signals), HostEnvironment::Unsupported);
    }

    #[test]
    fn detects_macos() {
        assert_eq!(detect_environment(&FakeSignals::macos()), HostEnvironment::MacOS);
    }

    #[test]
    fn headless_linux_is_unsupported() {
        let signals = FakeSignals {
            kernel_version: Some("Linux version 6.1.0".into()),
            kernel_name: Some("Linux".into()),
            ..Default::default()
        };
        assert_eq!(detect_environment(&signals), HostEnvironment::Unsupported);
    }

    #[test]
    fn unreadable_signals_are_unsupported() {
        assert_eq!(
            detect_environment(&FakeSignals::default()),
            HostEnvironment::Unsupported
        );
    }

    #[test]
    fn detection_is_stable() {
        let signals = FakeSignals::linux_desktop("WAYLAND_DISPLAY");
        let first = detect_environment(&signals);
        for _ in 0..5 {
            assert_eq!(detect_environment(&signals), first);
        }
    }

    #[tokio::test]
    async fn probe_reads_stdout_and_stderr() {
        let runner = FakeRunner::new().then(Ok(CommandOutput {
            code: Some(1),
            stdout: "  -i, --icon=ICON\n".into(),
            stderr: "  -A, --action=TEXT\n".into(),
        }));

        let caps = probe_capabilities(&runner).await;
        assert!(caps.available);
        assert!(caps.icons);
        assert!(caps.actions);
        assert_eq!(runner.last_call().args, vec!["--help"]);
    }

    #[tokio::test]
    async fn probe_with_missing_tool_is_unavailable() {
        let runner = FakeRunner::failing(CommandError::NotFound(NOTIFY_SEND.into()));
        assert_eq!(
            probe_capabilities(&runner).await,
            CapabilitySet::unavailable()
        );
    }

    #[tokio::test]
    async fn probe_timeout_is_unavailable() {
        let runner = FakeRunner::failing(CommandError::TimedOut {
            program: NOTIFY_SEND.into(),
            timeout: PROBE_TIMEOUT,
        });
        assert!(!probe_capabilities(&runner).await.available);
    }

    #[tokio::test]
    async fn context_probes_only_on_linux() {
        let runner = FakeRunner::new();
        let ctx = discover_context(&FakeSignals::macos(), &runner).await;
        assert_eq!(ctx.environment(), HostEnvironment::MacOS);
        assert!(ctx.capabilities().is_none());
        assert!(runner.calls().is_empty());

        let ctx = discover_context(&FakeSignals::linux_desktop("DISPLAY"), &runner).await;
        assert_eq!(ctx.environment(), HostEnvironment::LinuxDesktop);
        assert!(ctx.capabilities().is_some());
        assert_eq!(runner.calls().len(), 1);
    }
}
