//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use backoffice_core::{SuspensionWindow, UserAccount};

use crate::services::ModerationOutcome;

use super::responses::{ActionResponse, ProfileResponse, StatusChangeData, SuspensionResponse};

impl From<SuspensionWindow> for SuspensionResponse {
    fn from(window: SuspensionWindow) -> Self {
        Self {
            start_date: window.start,
            end_date: window.end,
        }
    }
}

impl From<&UserAccount> for ProfileResponse {
    fn from(account: &UserAccount) -> Self {
        Self {
            id: account.id.to_string(),
            user_type: account.user_type,
            status: account.status,
            suspension: account.suspension.map(SuspensionResponse::from),
            deletion_scheduled_at: account.deletion_scheduled_at,
            badges: account.badges.clone(),
            created_at: account.created_at,
            updated_at: account.updated_at,
            profile: account.profile.clone(),
        }
    }
}

impl From<UserAccount> for ProfileResponse {
    fn from(account: UserAccount) -> Self {
        Self::from(&account)
    }
}

impl From<&ModerationOutcome> for ActionResponse {
    fn from(outcome: &ModerationOutcome) -> Self {
        Self {
            success: true,
            message: outcome.message(),
            new_status: outcome.status,
            notified: outcome.notified,
        }
    }
}

impl From<&ModerationOutcome> for StatusChangeData {
    fn from(outcome: &ModerationOutcome) -> Self {
        Self {
            user_id: outcome.user_id.to_string(),
            status: outcome.status,
            reason: outcome.reason().map(str::to_string),
            deletion_date: outcome.deletion_scheduled_at,
            start_date: outcome.suspension.map(|window| window.start),
            end_date: outcome.suspension.map(|window| window.end),
            notified: outcome.notified,
        }
    }
}
