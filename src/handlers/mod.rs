pub mod health;
pub mod journal;
pub mod quote;
pub mod schedule;
pub mod support;

use crate::error::AppError;

/// Client ids are opaque strings; the only requirement is that one was sent.
pub(crate) fn require_user_id(user_id: Option<String>) -> Result<String, AppError> {
    user_id
        .filter(|id| !id.trim().is_empty())
        .ok_or_else(|| AppError::Validation("userId is required".into()))
}
