//! Configuration domain module

mod app_config;

pub use app_config::{
    AppConfig, LinuxConfig, WslConfig, DEFAULT_APP_NAME, DEFAULT_CHOICE_TIMEOUT_SECS,
    DEFAULT_LINUX_ICON, DEFAULT_POLL_INTERVAL_MS,
};
