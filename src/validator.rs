//! Validating extractors.
//!
//! [`ValidatedJson`] and [`ValidatedQuery`] deserialize the request and run
//! the `validator` rules before the handler is called. Every failure is a
//! `400 Validation error` whose `errors` array carries the field detail.

use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Query, Request, rejection::JsonRejection},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use userhub_core::AppError;
use validator::{Validate, ValidationErrors};

pub const VALIDATION_ERROR: &str = "Validation error";

fn format_errors(errors: &ValidationErrors) -> Vec<String> {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|(a, _), (b, _)| a.cmp(b));

    fields
        .into_iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| {
                error
                    .message
                    .as_ref()
                    .map(|msg| msg.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field))
            })
        })
        .collect()
}

fn describe_json_rejection(rejection: &JsonRejection) -> String {
    if matches!(rejection, JsonRejection::MissingJsonContentType(_)) {
        return "Missing 'Content-Type: application/json' header".to_string();
    }

    let error_msg = rejection.body_text();

    if let Some(field) = error_msg
        .split("missing field `")
        .nth(1)
        .and_then(|s| s.split('`').next())
    {
        return format!("{} is required", field);
    }

    if error_msg.contains("Invalid email") {
        return "email must be a valid email address".to_string();
    }

    if error_msg.contains("invalid type") {
        return "Invalid field type in request".to_string();
    }

    "Invalid request body".to_string()
}

fn validation_failed(errors: Vec<String>) -> AppError {
    AppError::validation(VALIDATION_ERROR).with_errors(errors)
}

/// JSON body that has been deserialized and validated.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| validation_failed(vec![describe_json_rejection(&rejection)]))?;

        value
            .validate()
            .map_err(|errors| validation_failed(format_errors(&errors)))?;

        Ok(ValidatedJson(value))
    }
}

/// Query string that has been deserialized.
///
/// Malformed values (e.g. `?page=abc`) are reported the same way as body
/// validation failures instead of axum's plain-text rejection.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| validation_failed(vec![rejection.body_text()]))?;

        Ok(ValidatedQuery(value))
    }
}
