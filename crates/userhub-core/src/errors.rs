//! Application error type.
//!
//! Every fallible handler, service and store call returns [`AppError`]. The
//! error carries an explicit [`ErrorKind`] which alone decides the HTTP
//! status; the [`IntoResponse`] impl is the single place where an error is
//! turned into the wire envelope:
//!
//! ```json
//! { "success": false, "message": "Email already exists", "errors": [] }
//! ```
//!
//! Any error type convertible into [`anyhow::Error`] (sqlx, bcrypt, join
//! errors, ...) converts into an `Internal` `AppError`, so `?` works on them
//! directly. Internal causes are logged and never echoed to the client.

use anyhow::Error;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Failure classes understood by clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed or missing input. HTTP 400.
    Validation,
    /// Missing/invalid/expired token or bad credentials. HTTP 401.
    Unauthorized,
    /// Role or ownership violation. HTTP 403.
    Forbidden,
    /// Target resource does not exist. HTTP 404.
    NotFound,
    /// Uniqueness violation. HTTP 409.
    Conflict,
    /// Anything unexpected. HTTP 500.
    Internal,
}

impl ErrorKind {
    pub fn status_code(self) -> StatusCode {
        match self {
            ErrorKind::Validation => StatusCode::BAD_REQUEST,
            ErrorKind::Unauthorized => StatusCode::UNAUTHORIZED,
            ErrorKind::Forbidden => StatusCode::FORBIDDEN,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Conflict => StatusCode::CONFLICT,
            ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Debug)]
pub struct AppError {
    pub kind: ErrorKind,
    pub error: Error,
    /// Field-level detail; rendered as the envelope's `errors` array.
    pub errors: Vec<String>,
}

impl AppError {
    pub fn new<E>(kind: ErrorKind, err: E) -> Self
    where
        E: Into<Error>,
    {
        Self {
            kind,
            error: err.into(),
            errors: Vec::new(),
        }
    }

    fn with_message(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self::new(kind, Error::msg(message.into()))
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::with_message(ErrorKind::Validation, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::with_message(ErrorKind::Unauthorized, message)
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::with_message(ErrorKind::Forbidden, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::with_message(ErrorKind::NotFound, message)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::with_message(ErrorKind::Conflict, message)
    }

    pub fn internal<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(ErrorKind::Internal, err)
    }

    /// A failed store query. Rendered like any other internal error.
    pub fn database<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(ErrorKind::Internal, err)
    }

    /// Attaches field-level detail to the error.
    pub fn with_errors(mut self, errors: Vec<String>) -> Self {
        self.errors = errors;
        self
    }

    pub fn status(&self) -> StatusCode {
        self.kind.status_code()
    }

    /// The message the client will see.
    pub fn public_message(&self) -> String {
        match self.kind {
            ErrorKind::Internal => "Internal server error".to_string(),
            _ => self.error.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.kind == ErrorKind::Internal {
            tracing::error!(error = ?self.error, "Request failed with an internal error");
        }

        let body = Json(json!({
            "success": false,
            "message": self.public_message(),
            "errors": self.errors,
        }));

        (self.status(), body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<Error>,
{
    fn from(err: E) -> Self {
        AppError::internal(err)
    }
}
