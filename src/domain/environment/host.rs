//! Host environment value object

use std::fmt;

/// The host environment the process is running in.
///
/// Exactly one variant applies for the lifetime of a process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HostEnvironment {
    /// Windows Subsystem for Linux (toasts go through BurntToast)
    WindowsSubsystem,
    /// Linux with a graphical session (toasts go through notify-send)
    LinuxDesktop,
    /// macOS (toasts go through osascript)
    MacOS,
    /// None of the above; every request degrades to a no-op
    #[default]
    Unsupported,
}

impl HostEnvironment {
    /// Get the string representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::WindowsSubsystem => "wsl",
            Self::LinuxDesktop => "linux",
            Self::MacOS => "macos",
            Self::Unsupported => "unsupported",
        }
    }

    /// Whether the native tool for this environment needs a capability probe
    pub const fn needs_probe(&self) -> bool {
        matches!(self, Self::LinuxDesktop)
    }
}

impl fmt::Display for HostEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
