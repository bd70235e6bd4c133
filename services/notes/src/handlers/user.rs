use axum::{Json, extract::State, http::StatusCode};
use serde::Deserialize;
use validator::Validate;

use notes_core::error::AppError;
use notes_core::extract::ValidatedJson;
use notes_core::validation::FieldErrors;

use crate::domain::types::{Note, User, UserDetails, not_blank};
use crate::state::AppState;

/// A note inside the composite user payload. Its owner is the user being
/// created, so only title and content are accepted.
#[derive(Debug, Deserialize, Validate)]
pub struct NoteDraft {
    #[validate(
        custom(function = not_blank, message = "title is required"),
        length(min = 3, max = 120, message = "title must be between 3 and 120 characters")
    )]
    pub title: String,
    #[validate(
        custom(function = not_blank, message = "content is required"),
        length(min = 3, max = 2400, message = "content must be between 3 and 2400 characters")
    )]
    pub content: String,
}

impl From<NoteDraft> for Note {
    fn from(draft: NoteDraft) -> Self {
        Note {
            id: None,
            title: draft.title,
            content: draft.content,
            creation_date: None,
            user_id: None,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UserWithDetailsPayload {
    #[validate(required(message = "user is required"), nested)]
    pub user: Option<User>,
    #[validate(required(message = "user details are required"), nested)]
    pub user_details: Option<UserDetails>,
    #[serde(default)]
    #[validate(nested)]
    pub notes: Option<Vec<NoteDraft>>,
}

// ── POST /api/users/full ─────────────────────────────────────────────────────

pub async fn create_with_details(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<UserWithDetailsPayload>,
) -> Result<(StatusCode, Json<User>), AppError> {
    // Validation already rejected missing parts; this only unwraps them.
    let (Some(user), Some(details)) = (payload.user, payload.user_details) else {
        return Err(AppError::Validation(FieldErrors::single(
            "user",
            "user and user details are required",
        )));
    };
    let notes = payload
        .notes
        .unwrap_or_default()
        .into_iter()
        .map(Note::from)
        .collect();

    let saved = state
        .user_service()
        .save_with_details(user, details, notes)
        .await?;
    Ok((StatusCode::CREATED, Json(saved)))
}
