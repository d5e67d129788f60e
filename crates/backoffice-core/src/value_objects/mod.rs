//! Value objects - immutable types that represent domain concepts

mod actor;
mod user_id;

pub use actor::{Actor, StaffRole, SYSTEM_ACTOR_ID};
pub use user_id::{UserId, UserIdParseError, MAX_USER_ID_LEN};
