use actix_session::Session;

use crate::errors::AppError;

const VISIT_KEY: &str = "visit_id";

/// The visit id keying this browser's form in the store, created on first use.
pub fn get_or_create_visit(session: &Session) -> Result<String, AppError> {
    if let Some(id) = get_visit(session) {
        return Ok(id);
    }
    let id = super::generate_token();
    session
        .insert(VISIT_KEY, &id)
        .map_err(|e| AppError::Session(format!("Failed to store visit id: {e}")))?;
    log::debug!("New registration visit started");
    Ok(id)
}

pub fn get_visit(session: &Session) -> Option<String> {
    session.get::<String>(VISIT_KEY).unwrap_or(None)
}

/// Drop the visit id so the next page entry starts a fresh form.
pub fn end_visit(session: &Session) {
    session.remove(VISIT_KEY);
}
