//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` for automatic error handling in API endpoints.

pub mod auth;
pub mod config;
pub mod internal;
pub mod upload;

use std::sync::OnceLock;

use axum::{
    extract::{multipart::MultipartRejection, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::SqlErr;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        auth::AuthError, config::ConfigError, internal::InternalError, upload::UploadError,
    },
};

/// Whether 500 responses carry the internal error message. Set once at startup.
static EXPOSE_INTERNAL_DETAIL: OnceLock<bool> = OnceLock::new();

/// Enables or disables internal error detail in 500 responses.
///
/// Only the first call has an effect; later calls are ignored.
pub fn expose_internal_detail(expose: bool) {
    let _ = EXPOSE_INTERNAL_DETAIL.set(expose);
}

fn internal_detail_exposed() -> bool {
    EXPOSE_INTERNAL_DETAIL.get().copied().unwrap_or(false)
}

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Infrastructure errors use `#[from]` for
/// automatic conversion; the string variants carry the client-facing message.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// The acting user may not modify the resource.
    ///
    /// Delegates to `AuthError::into_response()`, which always answers 403 Forbidden.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Failure while receiving or storing an uploaded file.
    ///
    /// Delegates to `UploadError::into_response()` for status code mapping.
    #[error(transparent)]
    UploadErr(#[from] UploadError),

    /// Unexpected failure inside the application, such as password hashing.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Database operation error from SeaORM.
    ///
    /// Unique constraint violations become 409 Conflict; everything else is a
    /// 500 Internal Server Error with details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request error.
    ///
    /// Results in 400 Bad Request with the provided error message.
    #[error("{0}")]
    BadRequest(String),

    /// Unique value already taken.
    ///
    /// Results in 409 Conflict with the provided error message.
    #[error("{0}")]
    Conflict(String),

    /// Internal server error with custom message.
    ///
    /// Results in 500 Internal Server Error. The provided message is logged
    /// but a generic message is returned to the client.
    #[error("{0}")]
    InternalError(String),
}

/// A body that axum could not read as JSON is a client error, whatever the cause.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

/// A body that isn't `multipart/form-data` where a form is expected.
impl From<MultipartRejection> for AppError {
    fn from(rejection: MultipartRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

fn client_error(status: StatusCode, msg: String) -> Response {
    tracing::debug!(status = status.as_u16(), "{}", msg);

    (status, Json(ErrorDto::new(msg))).into_response()
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest` variant
/// - 404 Not Found - For `NotFound` variant
/// - 409 Conflict - For `Conflict` and unique constraint violations
/// - 403 Forbidden - For `AuthErr`
/// - Variable - For `UploadErr`, delegated to `UploadError::into_response()`
/// - 500 Internal Server Error - For all other error types
impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::UploadErr(err) => err.into_response(),
            Self::NotFound(msg) => client_error(StatusCode::NOT_FOUND, msg),
            Self::BadRequest(msg) => client_error(StatusCode::BAD_REQUEST, msg),
            Self::Conflict(msg) => client_error(StatusCode::CONFLICT, msg),
            Self::DbErr(err) => match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(detail)) => {
                    tracing::debug!("Unique constraint violation: {}", detail);
                    client_error(
                        StatusCode::CONFLICT,
                        "Registro já existe com este valor".to_string(),
                    )
                }
                _ => InternalServerError(err).into_response(),
            },
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// This struct logs the error message and returns a generic "Internal server error" message
/// to the client. When internal detail is exposed (development), the message is added to the
/// response body as `message`.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        let mut body = ErrorDto::new("Internal server error");
        if internal_detail_exposed() {
            body.message = Some(self.0.to_string());
        }

        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}
