use crate::auth::application::domain::entities::UserId;

/// Outcome of a mutation attempt on an owned, soft-deletable row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OwnerAccess {
    Granted,
    /// The row belongs to someone else, deleted or not.
    Forbidden,
    /// The caller owns the row but it is already deleted.
    Gone,
}

/// Ownership is checked before lifecycle state, so a non-owner never learns
/// whether the row was deleted.
pub fn owner_access(author: UserId, current_user: UserId, is_delete: bool) -> OwnerAccess {
    if author != current_user {
        OwnerAccess::Forbidden
    } else if is_delete {
        OwnerAccess::Gone
    } else {
        OwnerAccess::Granted
    }
}
