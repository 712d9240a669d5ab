//! Backend factory keyed on the detected host environment

use std::sync::Arc;

use crate::application::ports::{CommandRunner, NotificationBackend};
use crate::domain::{AppConfig, CapabilitySet, HostEnvironment, NotifyContext};

use super::burnt_toast::BurntToastBackend;
use super::noop::NoOpBackend;
use super::notify_send::NotifySendBackend;
use super::osascript::OsascriptBackend;

/// Create the backend for the environment recorded in `context`.
pub async fn create_backend(
    context: &NotifyContext,
    runner: Arc<dyn CommandRunner>,
    config: &AppConfig,
) -> Box<dyn NotificationBackend> {
    let app_name = config.app_name_or_default();

    match context.environment() {
        HostEnvironment::LinuxDesktop => Box::new(NotifySendBackend::new(
            runner,
            context
                .capabilities()
                .unwrap_or_else(CapabilitySet::unavailable),
            app_name,
            config.linux_icon_or_default(),
        )),
        HostEnvironment::MacOS => Box::new(OsascriptBackend::new(runner, app_name)),
        HostEnvironment::WindowsSubsystem => {
            Box::new(BurntToastBackend::resolve(runner, config).await)
        }
        HostEnvironment::Unsupported => Box::new(NoOpBackend::new()),
    }
}
