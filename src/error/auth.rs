//! Authentication and authorization errors.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Json,
};
use thiserror::Error;

use crate::model::{api::ErrorDto, auth::StaffRole};

/// Errors raised by signup, login, and role-gated routes.
#[derive(Error, Debug)]
pub enum AuthError {
    /// A signup field that must be unique is already taken.
    #[error("An account with this {0} already exists")]
    DuplicateIdentity(&'static str),
    /// Identifier/password pair matched neither a customer nor a staff account.
    #[error("Invalid credentials")]
    InvalidCredentials,
    /// A login-required route was visited without an authenticated session.
    #[error("No authenticated principal in session")]
    NotAuthenticated,
    /// The session principal does not hold the role the route requires.
    #[error("Principal does not hold the {0} role")]
    RoleMismatch(StaffRole),
    /// A staff row carries a role string outside the recognized set.
    #[error("Unknown staff role {0:?}")]
    UnknownStaffRole(String),
    /// An API route needing a principal found none in the session.
    #[error("Principal is not present in session")]
    PrincipalNotInSession,
    /// Session references a principal that no longer exists in the database.
    #[error("Principal ID {0:?} not found in database despite having an active session")]
    PrincipalNotInDatabase(i32),
}

impl AuthError {
    fn user_not_found() -> Response {
        (
            StatusCode::NOT_FOUND,
            Json(ErrorDto {
                error: "User not found".to_string(),
            }),
        )
            .into_response()
    }

    fn forbidden() -> Response {
        (
            StatusCode::FORBIDDEN,
            Json(ErrorDto {
                error: "Unauthorized".to_string(),
            }),
        )
            .into_response()
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::DuplicateIdentity(field) => {
                tracing::debug!(field = %field, "{}", self);

                (
                    StatusCode::CONFLICT,
                    Json(ErrorDto {
                        error: format!("An account with this {} already exists", field),
                    }),
                )
                    .into_response()
            }
            Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Invalid credentials".to_string(),
                }),
            )
                .into_response(),
            Self::NotAuthenticated => Redirect::temporary("/login").into_response(),
            Self::RoleMismatch(_) => {
                tracing::debug!("{}", self);

                Self::forbidden()
            }
            Self::UnknownStaffRole(ref role) => {
                tracing::warn!(role = %role, "staff row carries an unrecognized role");

                Self::forbidden()
            }
            Self::PrincipalNotInSession => {
                tracing::debug!("{}", self);

                Self::user_not_found()
            }
            Self::PrincipalNotInDatabase(principal_id) => {
                tracing::debug!(principal_id = %principal_id, "{}", self);

                Self::user_not_found()
            }
        }
    }
}
