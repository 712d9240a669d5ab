//! Process-wide notification context

use super::{CapabilitySet, HostEnvironment};

/// Immutable snapshot of the host environment and its notifier capabilities.
///
/// Built once at startup and handed to the backend factory, so dispatch
/// never consults hidden global state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NotifyContext {
    environment: HostEnvironment,
    capabilities: Option<CapabilitySet>,
}

impl NotifyContext {
    /// Create a context.
    ///
    /// Capabilities are dropped for environments that do not probe.
    pub fn new(environment: HostEnvironment, capabilities: Option<CapabilitySet>) -> Self {
        let capabilities = if environment.needs_probe() {
            Some(capabilities.unwrap_or_else(CapabilitySet::unavailable))
        } else {
            None
        };

        Self {
            environment,
            capabilities,
        }
    }

    /// The detected host environment
    pub fn environment(&self) -> HostEnvironment {
        self.environment
    }

    /// Probe result, present only for environments that need one
    pub fn capabilities(&self) -> Option<CapabilitySet> {
        self.capabilities
    }
}
