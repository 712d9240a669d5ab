//! Host environment domain module

mod capability;
mod context;
mod host;

pub use capability::CapabilitySet;
pub use context::NotifyContext;
pub use host::HostEnvironment;
