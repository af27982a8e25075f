use crate::auth::application::domain::entities::UserId;

/// Raised when a record is missing or belongs to someone else.
/// Missing and foreign records are indistinguishable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Record not found")]
pub struct RecordNotFound;

pub fn check_owner(resource_owner: &UserId, current_user: &UserId) -> Result<(), RecordNotFound> {
    if resource_owner == current_user {
        Ok(())
    } else {
        Err(RecordNotFound)
    }
}
