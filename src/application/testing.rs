//! Test doubles for the application ports

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use async_trait::async_trait;

use super::ports::{CommandError, CommandOutput, CommandRunner, CommandSpec, EnvironmentSignals};

type Hook = Box<dyn Fn(&CommandSpec) + Send + Sync>;

/// Records every command and replays scripted results in order.
///
/// Once the script is exhausted every further call gets the fallback.
pub struct FakeRunner {
    calls: Mutex<Vec<CommandSpec>>,
    script: Mutex<VecDeque<Result<CommandOutput, CommandError>>>,
    fallback: Result<CommandOutput, CommandError>,
    hook: Option<Hook>,
}

impl FakeRunner {
    /// Every command succeeds silently
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            script: Mutex::new(VecDeque::new()),
            fallback: Ok(CommandOutput::ok()),
            hook: None,
        }
    }

    /// Every command fails with `err`
    pub fn failing(err: CommandError) -> Self {
        Self {
            fallback: Err(err),
            ..Self::new()
        }
    }

    /// Queue the result of the next unscripted call
    pub fn then(self, result: Result<CommandOutput, CommandError>) -> Self {
        self.script.lock().unwrap().push_back(result);
        self
    }

    /// Run `hook` on every command before answering
    pub fn on_run(mut self, hook: impl Fn(&CommandSpec) + Send + Sync + 'static) -> Self {
        self.hook = Some(Box::new(hook));
        self
    }

    /// Commands run so far
    pub fn calls(&self) -> Vec<CommandSpec> {
        self.calls.lock().unwrap().clone()
    }

    /// The most recent command
    pub fn last_call(&self) -> CommandSpec {
        self.calls().pop().expect("no command was run")
    }
}

#[async_trait]
impl CommandRunner for FakeRunner {
    async fn run(&self, spec: &CommandSpec) -> Result<CommandOutput, CommandError> {
        self.calls.lock().unwrap().push(spec.clone());
        if let Some(hook) = &self.hook {
            hook(spec);
        }
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| self.fallback.clone())
    }
}

/// Signals backed by fixed values
#[derive(Default)]
pub struct FakeSignals {
    pub kernel_version: Option<String>,
    pub env: HashMap<String, String>,
    pub kernel_name: Option<String>,
}

impl FakeSignals {
    pub fn wsl() -> Self {
        Self {
            kernel_version: Some(
                "Linux version 5.15.153.1-microsoft-standard-WSL2 (root@65c7) (gcc 11.2.0)".into(),
            ),
            kernel_name: Some("Linux".into()),
            ..Default::default()
        }
    }

    pub fn linux_desktop(var: &str) -> Self {
        Self {
            kernel_version: Some("Linux version 6.8.0-45-generic (buildd@lcy02)".into()),
            env: HashMap::from([(var.to_string(), ":0".to_string())]),
            kernel_name: Some("Linux".into()),
        }
    }

    pub fn macos() -> Self {
        Self {
            kernel_name: Some("Darwin".into()),
            ..Default::default()
        }
    }

    pub fn with_env(mut self, name: &str, value: &str) -> Self {
        self.env.insert(name.to_string(), value.to_string());
        self
    }
}

impl EnvironmentSignals for FakeSignals {
    fn kernel_version(&self) -> Option<String> {
        self.kernel_version.clone()
    }

    fn env_var(&self, name: &str) -> Option<String> {
        self.env.get(name).cloned()
    }

    fn kernel_name(&self) -> Option<String> {
        self.kernel_name.clone()
    }
}
