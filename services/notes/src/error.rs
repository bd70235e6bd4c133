use notes_core::error::AppError;

/// Errors raised by the notes services and their gateways.
#[derive(Debug, thiserror::Error)]
pub enum NotesServiceError {
    #[error("password hashing failed: {0}")]
    PasswordHash(String),
    #[error("unknown role: {0}")]
    UnknownRole(String),
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl From<NotesServiceError> for AppError {
    fn from(error: NotesServiceError) -> Self {
        match error {
            NotesServiceError::Internal(e) => AppError::Internal(e),
            other => AppError::Internal(anyhow::Error::new(other)),
        }
    }
}
