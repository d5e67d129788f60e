//! Note visibility policy

use crate::entities::StaffNote;
use crate::value_objects::Actor;

/// Decides which staff notes a viewer may read
pub trait NoteAccessPolicy: Send + Sync {
    fn can_view(&self, viewer: &Actor, note: &StaffNote) -> bool;
}

/// Public notes are visible to all staff; private notes to their author and super-admins
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultNoteAccessPolicy;

impl NoteAccessPolicy for DefaultNoteAccessPolicy {
    fn can_view(&self, viewer: &Actor, note: &StaffNote) -> bool {
        !note.is_private || note.is_authored_by(&viewer.id) || viewer.role.is_super_admin()
    }
}
