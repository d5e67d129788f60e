//! Account entity <-> model mapper

use backoffice_core::entities::{Badge, StaffNote, SuspensionWindow, UserAccount, UserType};
use backoffice_core::error::DomainError;
use backoffice_core::lifecycle::AccountStatus;
use backoffice_core::value_objects::UserId;
use chrono::{DateTime, NaiveDate, Utc};
use serde_json::Value as JsonValue;

use crate::models::AccountModel;

fn corrupt(field: &str, detail: impl std::fmt::Display) -> DomainError {
    DomainError::DatabaseError(format!("invalid {field} in user_accounts row: {detail}"))
}

/// Convert AccountModel to UserAccount entity
impl TryFrom<AccountModel> for UserAccount {
    type Error = DomainError;

    fn try_from(model: AccountModel) -> Result<Self, Self::Error> {
        let id = UserId::parse(&model.id).map_err(|e| corrupt("id", e))?;
        let user_type = UserType::parse(&model.user_type)?;
        let status =
            AccountStatus::parse(&model.status).ok_or_else(|| corrupt("status", &model.status))?;

        let suspension = match (model.suspension_start, model.suspension_end) {
            (Some(start), Some(end)) => Some(SuspensionWindow { start, end }),
            _ => None,
        };

        let badges: Vec<Badge> =
            serde_json::from_value(model.badges).map_err(|e| corrupt("badges", e))?;
        let notes: Vec<StaffNote> =
            serde_json::from_value(model.notes).map_err(|e| corrupt("notes", e))?;
        let profile = match model.profile {
            JsonValue::Object(map) => map,
            other => return Err(corrupt("profile", other)),
        };

        Ok(UserAccount {
            id,
            user_type,
            status,
            suspension,
            deletion_scheduled_at: model.deletion_scheduled_at,
            badges,
            notes,
            profile,
            revision: model.revision,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}

/// Column values for inserting or updating an account
pub struct AccountWrite<'a> {
    pub id: &'a str,
    pub user_type: &'static str,
    pub status: &'static str,
    pub suspension_start: Option<NaiveDate>,
    pub suspension_end: Option<NaiveDate>,
    pub deletion_scheduled_at: Option<DateTime<Utc>>,
    pub badges: JsonValue,
    pub notes: JsonValue,
    pub profile: JsonValue,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl<'a> AccountWrite<'a> {
    pub fn new(account: &'a UserAccount) -> Result<Self, DomainError> {
        let to_json = |field: &str, value: serde_json::Result<JsonValue>| {
            value.map_err(|e| DomainError::InternalError(format!("failed to encode {field}: {e}")))
        };

        Ok(Self {
            id: account.id.as_str(),
            user_type: account.user_type.as_str(),
            status: account.status.as_str(),
            suspension_start: account.suspension.map(|s| s.start),
            suspension_end: account.suspension.map(|s| s.end),
            deletion_scheduled_at: account.deletion_scheduled_at,
            badges: to_json("badges", serde_json::to_value(&account.badges))?,
            notes: to_json("notes", serde_json::to_value(&account.notes))?,
            profile: JsonValue::Object(account.profile.clone()),
            created_at: account.created_at,
            updated_at: account.updated_at,
        })
    }
}
