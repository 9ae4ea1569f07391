use crate::domain::services::stores::SessionStore;
use crate::error::AppError;
use tracing::info;

/// Gate for protected views: a session that is present, deserializable, and
/// valid. Unauthenticated callers are expected to redirect to login.
pub fn is_authorized(sessions: &SessionStore) -> bool {
    sessions.get().is_some_and(|s| s.is_valid())
}

pub fn sign_out(sessions: &SessionStore) -> Result<(), AppError> {
    sessions.clear()?;
    info!("User signed out");
    Ok(())
}
