//! Notification request domain module

mod choice;
mod progress;
mod toast;

pub use choice::{
    ChoiceOutcome, ChoiceRequest, ChoiceState, MAX_CHOICE_OPTIONS, MAX_CHOICE_TIMEOUT_SECS,
};
pub use progress::{ProgressRequest, PROGRESS_BAR_WIDTH, PROGRESS_REPLACE_ID};
pub use toast::NotificationRequest;
