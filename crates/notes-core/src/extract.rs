use axum::Json;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::AppError;
use crate::validation::FieldErrors;

/// JSON body that has been deserialized and passed its `validator` rules.
///
/// Malformed bodies are reported as a `body` field error so every rejection
/// goes through [`AppError`].
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::Validation(FieldErrors::single("body", rejection.body_text())))?;
        value.validate()?;
        Ok(Self(value))
    }
}

/// Single `{id}` path segment. An unparsable id is reported as an `id`
/// field error instead of axum's plain-text rejection.
#[derive(Debug, Clone, Copy)]
pub struct IdPath<T>(pub T);

impl<T, S> FromRequestParts<S> for IdPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::Validation(FieldErrors::single("id", rejection.body_text())))?;
        Ok(Self(id))
    }
}
