//! Account lifecycle: statuses, moderation actions and the transition rules

mod action;
mod machine;
mod status;

pub use action::ModerationAction;
pub use machine::{ActionOutcome, DELETION_GRACE_PERIOD_DAYS, Transition};
pub use status::AccountStatus;
