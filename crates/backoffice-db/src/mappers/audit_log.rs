//! Audit log entity <-> model mapper

use backoffice_core::entities::{AuditAction, AuditLogEntry};
use backoffice_core::error::DomainError;
use backoffice_core::value_objects::{StaffRole, UserId};

use crate::models::AuditLogModel;

impl TryFrom<AuditLogModel> for AuditLogEntry {
    type Error = DomainError;

    fn try_from(model: AuditLogModel) -> Result<Self, Self::Error> {
        let action: AuditAction = model.action.parse().map_err(DomainError::DatabaseError)?;
        let actor_role = StaffRole::parse(&model.actor_role).ok_or_else(|| {
            DomainError::DatabaseError(format!("invalid actor_role: {}", model.actor_role))
        })?;
        let target_user_id = UserId::parse(&model.target_user_id)
            .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        Ok(AuditLogEntry {
            id: model.id,
            actor_id: model.actor_id,
            actor_role,
            action,
            target_user_id,
            timestamp: model.created_at,
            details: model.details,
        })
    }
}
