//! Staff note service

use serde_json::json;
use tracing::{info, instrument};

use backoffice_core::{Actor, AuditAction, AuditLogEntry, StaffNote, UserId};

use crate::dto::AddNoteRequest;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Staff note service
pub struct NoteService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> NoteService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Append a note to an account
    #[instrument(skip(self, actor, request), fields(actor_id = %actor.id, user_id = %request.user_id))]
    pub async fn add_note(&self, actor: &Actor, request: AddNoteRequest) -> ServiceResult<StaffNote> {
        let user_id = UserId::parse(&request.user_id)?;
        let now = self.ctx.now();

        let note = StaffNote::new(
            &request.content,
            &request.category,
            request.is_private,
            actor,
            now,
        )?;
        let mut account = self.ctx.load_account(&user_id).await?;
        account.add_note(note.clone(), now)?;

        // Note content is not copied into the audit trail
        let entry = AuditLogEntry::new(
            actor,
            AuditAction::NoteAdded,
            user_id.clone(),
            json!({
                "noteId": note.id,
                "category": note.category,
                "isPrivate": note.is_private,
            }),
            now,
        );
        self.ctx.account_repo().commit(&account, &entry).await?;

        info!(user_id = %user_id, note_id = %note.id, "Staff note added");
        Ok(note)
    }

    /// Notes on an account the viewer may read, oldest first
    #[instrument(skip(self, viewer), fields(viewer_id = %viewer.id))]
    pub async fn list_notes(&self, viewer: &Actor, user_id: &str) -> ServiceResult<Vec<StaffNote>> {
        let user_id = UserId::parse(user_id)?;
        let account = self.ctx.load_account(&user_id).await?;

        let policy = self.ctx.note_policy();
        Ok(account
            .notes
            .into_iter()
            .filter(|note| policy.can_view(viewer, note))
            .collect())
    }
}
