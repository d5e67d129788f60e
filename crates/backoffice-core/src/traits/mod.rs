//! Ports implemented by infrastructure crates

mod access;
mod clock;
mod notifications;
mod repositories;

pub use access::{DefaultNoteAccessPolicy, NoteAccessPolicy};
pub use clock::{Clock, ManualClock, SystemClock};
pub use notifications::NotificationDispatcher;
pub use repositories::{AccountRepository, RepoResult};
