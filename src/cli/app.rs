//! Main app runner

use std::env;
use std::process::ExitCode;
use std::sync::Arc;

use clap::CommandFactory;
use tracing::debug;

use crate::application::ports::{CommandRunner, ConfigStore};
use crate::application::{discover_context, NotifyService};
use crate::domain::config::AppConfig;
use crate::domain::error::ConfigError;
use crate::infrastructure::{create_backend, SystemSignals, TokioCommandRunner, XdgConfigStore};

use super::args::{Action, Cli};
use super::logging::init_logging;
use super::presenter::Presenter;

/// Environment variable overriding the configured app name
pub const APP_NAME_ENV: &str = "TOAST_NOTIFY_APP_NAME";

/// Run the CLI. Always exits 0: failures are reported on stdout, not
/// through the exit status.
pub async fn run(cli: Cli) -> ExitCode {
    let (config, load_error) = load_merged_config(cli_config(&cli)).await;
    init_logging(cli.verbose, config.log_level_or_default());

    let mut presenter = Presenter::new(cli.json);
    if let Some(e) = load_error {
        presenter.warn(&format!("Ignoring config file: {}", e));
    }

    let Some(action) = cli.action(
        config.app_name_or_default(),
        config.choice_timeout_or_default(),
    ) else {
        let _ = Cli::command().print_help();
        return ExitCode::SUCCESS;
    };

    let runner: Arc<dyn CommandRunner> = Arc::new(TokioCommandRunner::new());
    let context = discover_context(&SystemSignals::new(), runner.as_ref()).await;
    let backend = create_backend(&context, runner, &config).await;
    let service = NotifyService::new(backend);

    match action {
        Action::Choice(request) => {
            debug!(options = request.options().len(), "asking choice");
            presenter.start_spinner(&format!(
                "Waiting for a choice ({}s)...",
                request.timeout_secs
            ));
            let answer = service.ask_choice(&request).await;
            presenter.stop_spinner();
            presenter.choice_result(answer.as_ref());
        }
        Action::Progress(request) => {
            let sent = service.send_progress(&request).await;
            presenter.progress_result(sent);
        }
        Action::Toast(request) => {
            let sent = service.send_toast(&request).await;
            presenter.toast_result(sent);
        }
    }

    ExitCode::SUCCESS
}

/// Config values carried by command-line flags
fn cli_config(cli: &Cli) -> AppConfig {
    AppConfig {
        choice_timeout: cli.timeout,
        ..AppConfig::empty()
    }
}

/// Config values carried by the environment
fn env_config(app_name: Option<String>) -> AppConfig {
    AppConfig {
        app_name: app_name.filter(|s| !s.is_empty()),
        ..AppConfig::empty()
    }
}

/// Load and merge config: defaults < file < env < cli.
///
/// A broken config file is not fatal. Its error is handed back so the caller
/// can log it once logging is set up.
pub async fn load_merged_config(cli_config: AppConfig) -> (AppConfig, Option<ConfigError>) {
    let store = XdgConfigStore::new();
    merge_with_store(&store, env::var(APP_NAME_ENV).ok(), cli_config).await
}

async fn merge_with_store(
    store: &dyn ConfigStore,
    env_app_name: Option<String>,
    cli_config: AppConfig,
) -> (AppConfig, Option<ConfigError>) {
    let (file_config, load_error) = match store.load().await {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::empty(), Some(e)),
    };

    let config = AppConfig::defaults()
        .merge(file_config)
        .merge(env_config(env_app_name))
        .merge(cli_config);

    (config, load_error)
}
