//! Environment signal port interface

/// Read-only sources used to tell host environments apart.
///
/// Every method returns `None` when the signal cannot be read; a read
/// failure is never fatal.
pub trait EnvironmentSignals: Send + Sync {
    /// Contents of the kernel identification file (`/proc/version`)
    fn kernel_version(&self) -> Option<String>;

    /// Value of an environment variable
    fn env_var(&self, name: &str) -> Option<String>;

    /// Reported kernel name, e.g. "Linux" or "Darwin"
    fn kernel_name(&self) -> Option<String>;
}
