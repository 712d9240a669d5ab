//! Live environment signals read from the running system

use std::env;
use std::fs;

use crate::application::ports::EnvironmentSignals;

/// Kernel identification file consulted for the WSL marker
const PROC_VERSION: &str = "/proc/version";

/// Signals read from `/proc/version`, the process environment and `uname`
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemSignals;

impl SystemSignals {
    pub fn new() -> Self {
        Self
    }
}

impl EnvironmentSignals for SystemSignals {
    fn kernel_version(&self) -> Option<String> {
        fs::read_to_string(PROC_VERSION).ok()
    }

    fn env_var(&self, name: &str) -> Option<String> {
        env::var(name).ok()
    }

    #[cfg(unix)]
    fn kernel_name(&self) -> Option<String> {
        nix::sys::utsname::uname()
            .ok()
            .map(|uts| uts.sysname().to_string_lossy().into_owned())
    }

    #[cfg(not(unix))]
    fn kernel_name(&self) -> Option<String> {
        None
    }
}
