//! Error types for the Veranda server application.
//!
//! Domain-specific error enums (authentication, booking, configuration) are
//! aggregated into a single [`Error`] type. All errors implement
//! `IntoResponse` for Axum and use `thiserror` for `Display`/`Error` impls.
//! No error is fatal to the process, only to the request that raised it.

pub mod auth;
pub mod booking;
pub mod config;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    error::{auth::AuthError, booking::BookingError, config::ConfigError},
    model::api::ErrorDto,
};

/// Main error type for the Veranda server application.
///
/// Aggregates domain-specific error types and external library errors into a
/// single unified type, with `#[from]` conversions for use with the `?`
/// operator. The `IntoResponse` implementation maps each error to the HTTP
/// response the client should see.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication or authorization error.
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Reservation or payment error.
    #[error(transparent)]
    BookingError(#[from] BookingError),
    /// Password hashing or verification failed at the hashing library level.
    #[error("Password hashing failed: {0}")]
    PasswordHash(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
}

/// Converts application errors into HTTP responses.
///
/// Domain errors carry their own response mappings; everything else is a 500
/// with a generic body and the full error logged server-side.
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::BookingError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal
/// Server Error response.
///
/// Logs the full error message and returns a generic body to the client to
/// avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

#[cfg(test)]
impl From<Error> for veranda_test_utils::TestError {
    fn from(err: Error) -> Self {
        veranda_test_utils::TestError::App(Box::new(err))
    }
}

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
