//! Route handlers
//!
//! All HTTP request handlers organized by resource.

pub mod badges;
pub mod health;
pub mod notes;
pub mod profile;
pub mod status;
pub mod users;
