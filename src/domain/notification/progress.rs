//! Progress request value object

/// Replace token shared by every progress notification in a process, so
/// successive updates overwrite each other instead of stacking.
pub const PROGRESS_REPLACE_ID: u32 = 9999;

/// Number of cells in the rendered text bar
pub const PROGRESS_BAR_WIDTH: usize = 20;

/// A progress update. `value` is always within `[0, 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressRequest {
    pub title: String,
    pub status: String,
    value: f64,
    /// Include the app icon where supported
    pub hero: bool,
}

impl ProgressRequest {
    /// Create a progress request, clamping `value` to `[0, 1]`.
    ///
    /// NaN is treated as no progress.
    pub fn new(title: impl Into<String>, status: impl Into<String>, value: f64) -> Self {
        let value = if value.is_nan() {
            0.0
        } else {
            value.clamp(0.0, 1.0)
        };

        Self {
            title: title.into(),
            status: status.into(),
            value,
            hero: false,
        }
    }

    pub fn hero(mut self, hero: bool) -> Self {
        self.hero = hero;
        self
    }

    /// Clamped progress value
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Whole percentage, truncated (never rounded up)
    pub fn percent(&self) -> u8 {
        (self.value * 100.0) as u8
    }

    /// Fixed-width block bar, e.g. `█████░░░░░░░░░░░░░░░`
    pub fn bar(&self) -> String {
        let filled = ((PROGRESS_BAR_WIDTH as f64) * self.value) as usize;
        let empty = PROGRESS_BAR_WIDTH - filled;
        format!("{}{}", "█".repeat(filled), "░".repeat(empty))
    }
}
