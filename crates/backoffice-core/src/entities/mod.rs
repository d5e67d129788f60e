//! Domain entities - core business objects

mod account;
mod audit;
mod badge;
mod note;
mod notification;

pub use account::{RESERVED_PROFILE_KEYS, SuspensionWindow, UserAccount, UserType};
pub use audit::{AuditAction, AuditLogEntry};
pub use badge::Badge;
pub use note::StaffNote;
pub use notification::Notification;
