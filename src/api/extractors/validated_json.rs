//! Validated JSON extractor - Combines deserialization with validation.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;

use crate::domain::Validate;
use crate::errors::AppError;

/// Validated JSON extractor that runs the field rules before the handler.
///
/// A body that fails to parse is rejected with `AppError::BadRequest`;
/// a body that parses but violates field rules is rejected with
/// `AppError::Validation` carrying every violated field.
///
/// # Example
///
/// ```rust,ignore
/// use user_crud_api::api::extractors::ValidatedJson;
/// use user_crud_api::domain::UserPayload;
///
/// async fn create_user(ValidatedJson(payload): ValidatedJson<UserPayload>) {
///     // payload satisfies every field rule
/// }
/// ```
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::bad_request(e.body_text()))?;

        value.validate().map_err(|errors| {
            tracing::debug!(%errors, "Request rejected by field validation");
            AppError::Validation(errors)
        })?;

        Ok(ValidatedJson(value))
    }
}
