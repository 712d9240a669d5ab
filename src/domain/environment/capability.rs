//! Native notifier capability set

/// Optional features supported by the native Linux notifier.
///
/// Derived from the tool's `--help` output, so this is a heuristic: a
/// version whose help text wording changes may be misclassified. Callers
/// must treat a missing flag as "degrade quietly", never as an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CapabilitySet {
    /// The tool could be executed at all
    pub available: bool,
    /// Action buttons (`--action` / `-A`)
    pub actions: bool,
    /// Custom icons (`--icon` / `-i`)
    pub icons: bool,
    /// Notification hints (`--hint` / `-h`)
    pub hints: bool,
    /// In-place replacement (`--replace-id` / `-r`)
    pub replace: bool,
}

impl CapabilitySet {
    /// A set with every flag off, used when the tool cannot be run
    pub const fn unavailable() -> Self {
        Self {
            available: false,
            actions: false,
            icons: false,
            hints: false,
            replace: false,
        }
    }

    /// Derive capabilities from the combined stdout/stderr of `--help`
    pub fn from_help_text(help: &str) -> Self {
        let has = |long: &str, short: &str| help.contains(long) || help.contains(short);

        Self {
            available: true,
            actions: has("--action", "-A"),
            icons: has("--icon", "-i"),
            hints: has("--hint", "-h"),
            replace: has("--replace-id", "-r"),
        }
    }
}
