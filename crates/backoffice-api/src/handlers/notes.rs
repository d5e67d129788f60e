//! Staff note handlers

use axum::{extract::State, Json};
use backoffice_service::dto::{AddNoteRequest, ListNotesQuery, NoteCreatedResponse, NotesResponse};
use backoffice_service::{NoteService, ServiceError};

use crate::extractors::{AuthUser, ValidatedJson, ValidatedQuery};
use crate::response::ApiResult;
use crate::state::AppState;

/// Append a note to a user
///
/// POST /profile/notes
pub async fn add_note(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<AddNoteRequest>,
) -> ApiResult<Json<NoteCreatedResponse>> {
    let service = NoteService::new(state.service_context());
    let note = service.add_note(&auth.actor, request).await?;
    Ok(Json(NoteCreatedResponse { success: true, note }))
}

/// List the notes on a user visible to the caller
///
/// GET /profile/notes?userId=..
pub async fn list_notes(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedQuery(query): ValidatedQuery<ListNotesQuery>,
) -> ApiResult<Json<NotesResponse>> {
    let user_id = query
        .user_id
        .filter(|id| !id.trim().is_empty())
        .ok_or_else(|| ServiceError::validation("User ID is required"))?;

    let service = NoteService::new(state.service_context());
    let notes = service.list_notes(&auth.actor, &user_id).await?;
    Ok(Json(NotesResponse { notes }))
}
