//! # backoffice-core
//!
//! Domain layer containing the account aggregate, the lifecycle state machine,
//! domain events, and the ports infrastructure crates implement.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod events;
pub mod lifecycle;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    AuditAction, AuditLogEntry, Badge, Notification, RESERVED_PROFILE_KEYS, StaffNote,
    SuspensionWindow, UserAccount, UserType,
};
pub use error::DomainError;
pub use events::AccountEvent;
pub use lifecycle::{
    AccountStatus, ActionOutcome, DELETION_GRACE_PERIOD_DAYS, ModerationAction, Transition,
};
pub use traits::{
    AccountRepository, Clock, DefaultNoteAccessPolicy, ManualClock, NoteAccessPolicy,
    NotificationDispatcher, RepoResult, SystemClock,
};
pub use value_objects::{Actor, MAX_USER_ID_LEN, StaffRole, SYSTEM_ACTOR_ID, UserId, UserIdParseError};
