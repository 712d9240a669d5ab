//! Application configuration value object

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default application name shown by the notifier
pub const DEFAULT_APP_NAME: &str = "NOTIFY";

/// Default seconds to wait for a choice
pub const DEFAULT_CHOICE_TIMEOUT_SECS: f64 = 60.0;

/// Default interval between answer-file polls
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 200;

/// Default freedesktop icon for hero notifications
pub const DEFAULT_LINUX_ICON: &str = "dialog-information";

/// Linux-specific configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LinuxConfig {
    pub icon: Option<String>,
}

/// WSL-specific configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WslConfig {
    /// Explicit path to powershell.exe
    pub powershell_path: Option<String>,
    /// Linux-side path of the Windows temp directory
    pub temp_dir: Option<String>,
}

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub app_name: Option<String>,
    pub choice_timeout: Option<f64>,
    pub poll_interval_ms: Option<u64>,
    pub log_level: Option<String>,
    pub linux: Option<LinuxConfig>,
    pub wsl: Option<WslConfig>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            app_name: Some(DEFAULT_APP_NAME.to_string()),
            choice_timeout: Some(DEFAULT_CHOICE_TIMEOUT_SECS),
            poll_interval_ms: Some(DEFAULT_POLL_INTERVAL_MS),
            log_level: Some("warn".to_string()),
            linux: Some(LinuxConfig {
                icon: Some(DEFAULT_LINUX_ICON.to_string()),
            }),
            wsl: Some(WslConfig::default()),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            app_name: other.app_name.or(self.app_name),
            choice_timeout: other.choice_timeout.or(self.choice_timeout),
            poll_interval_ms: other.poll_interval_ms.or(self.poll_interval_ms),
            log_level: other.log_level.or(self.log_level),
            linux: match (self.linux, other.linux) {
                (Some(b), Some(o)) => Some(LinuxConfig {
                    icon: o.icon.or(b.icon),
                }),
                (b, o) => o.or(b),
            },
            wsl: match (self.wsl, other.wsl) {
                (Some(b), Some(o)) => Some(WslConfig {
                    powershell_path: o.powershell_path.or(b.powershell_path),
                    temp_dir: o.temp_dir.or(b.temp_dir),
                }),
                (b, o) => o.or(b),
            },
        }
    }

    /// Get the app name, or "NOTIFY" if not set
    pub fn app_name_or_default(&self) -> &str {
        self.app_name
            .as_deref()
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_APP_NAME)
    }

    /// Get the choice timeout in seconds, or 60 if not set/invalid.
    /// Infinite values pass through and are capped by the choice request.
    pub fn choice_timeout_or_default(&self) -> f64 {
        self.choice_timeout
            .filter(|t| !t.is_nan() && *t >= 0.0)
            .unwrap_or(DEFAULT_CHOICE_TIMEOUT_SECS)
    }

    /// Get the answer-file poll interval, or 200ms if not set/zero
    pub fn poll_interval_or_default(&self) -> Duration {
        Duration::from_millis(
            self.poll_interval_ms
                .filter(|ms| *ms > 0)
                .unwrap_or(DEFAULT_POLL_INTERVAL_MS),
        )
    }

    /// Get the log filter directive, or "warn" if not set
    pub fn log_level_or_default(&self) -> &str {
        self.log_level.as_deref().unwrap_or("warn")
    }

    /// Get the Linux hero icon, or "dialog-information" if not set
    pub fn linux_icon_or_default(&self) -> &str {
        self.linux
            .as_ref()
            .and_then(|l| l.icon.as_deref())
            .unwrap_or(DEFAULT_LINUX_ICON)
    }

    /// Explicit powershell.exe path, if configured
    pub fn powershell_path(&self) -> Option<&str> {
        self.wsl.as_ref().and_then(|w| w.powershell_path.as_deref())
    }

    /// Explicit Windows temp directory, if configured
    pub fn wsl_temp_dir(&self) -> Option<&str> {
        self.wsl.as_ref().and_then(|w| w.temp_dir.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_have_expected_values() {
        let config = AppConfig::defaults();
        assert_eq!(config.app_name, Some("NOTIFY".to_string()));
        assert_eq!(config.choice_timeout, Some(60.0));
        assert_eq!(config.poll_interval_ms, Some(200));
        assert_eq!(config.linux_icon_or_default(), "dialog-information");
        assert!(config.powershell_path().is_none());
        assert!(config.wsl_temp_dir().is_none());
    }

    #[test]
    fn empty_has_all_none() {
        let config = AppConfig::empty();
        assert!(config.app_name.is_none());
        assert!(config.choice_timeout.is_none());
        assert!(config.linux.is_none());
        assert!(config.wsl.is_none());
    }

    #[test]
    fn merge_other_takes_precedence() {
        let base = AppConfig {
            app_name: Some("base".to_string()),
            choice_timeout: Some(10.0),
            ..Default::default()
        };

        let other = AppConfig {
            app_name: Some("other".to_string()),
            choice_timeout: None,
            ..Default::default()
        };

        let merged = base.merge(other);
        assert_eq!(merged.app_name, Some("other".to_string()));
        assert_eq!(merged.choice_timeout, Some(10.0));
    }

    #[test]
    fn merge_nested_sections() {
        let base = AppConfig {
            wsl: Some(WslConfig {
                powershell_path: Some("/base/powershell.exe".to_string()),
                temp_dir: Some("/mnt/c/Temp".to_string()),
            }),
            ..Default::default()
        };
        let other = AppConfig {
            wsl: Some(WslConfig {
                powershell_path: Some("/other/powershell.exe".to_string()),
                temp_dir: None,
            }),
            ..Default::default()
        };

        let merged = base.merge(other);
        assert_eq!(merged.powershell_path(), Some("/other/powershell.exe"));
        assert_eq!(merged.wsl_temp_dir(), Some("/mnt/c/Temp"));
    }

    #[test]
    fn merge_preserves_base_when_other_is_none() {
        let base = AppConfig::defaults();
        let merged = base.merge(AppConfig::empty());
        assert_eq!(merged.app_name_or_default(), "NOTIFY");
        assert_eq!(merged.linux_icon_or_default(), "dialog-information");
    }

    #[test]
    fn invalid_values_fall_back_to_defaults() {
        let config = AppConfig {
            app_name: Some(String::new()),
            choice_timeout: Some(-3.0),
            poll_interval_ms: Some(0),
            ..Default::default()
        };
        assert_eq!(config.app_name_or_default(), "NOTIFY");
        assert_eq!(config.choice_timeout_or_default(), 60.0);
        assert_eq!(config.poll_interval_or_default(), Duration::from_millis(200));
    }

    #[test]
    fn infinite_choice_timeout_is_kept() {
        let config = AppConfig {
            choice_timeout: Some(f64::INFINITY),
            ..Default::default()
        };
        assert_eq!(config.choice_timeout_or_default(), f64::INFINITY);

        let config = AppConfig {
            choice_timeout: Some(f64::NAN),
            ..Default::default()
        };
        assert_eq!(config.choice_timeout_or_default(), 60.0);
    }
}
