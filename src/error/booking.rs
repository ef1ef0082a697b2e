//! Reservation and payment errors.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Errors raised while creating reservations or recording payments.
#[derive(Error, Debug)]
pub enum BookingError {
    /// Check-out date is not after the check-in date.
    #[error("Check-out must be after check-in")]
    InvalidDateRange,
    /// The requested room does not exist.
    #[error("Room ID {0} not found")]
    RoomNotFound(i32),
    /// The room already has a reservation overlapping the requested dates.
    #[error("Room ID {0} is already reserved for overlapping dates")]
    RoomAlreadyReserved(i32),
    /// The reservation does not exist or does not belong to the caller.
    #[error("Reservation ID {0} not found")]
    ReservationNotFound(i32),
}

impl IntoResponse for BookingError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::InvalidDateRange => StatusCode::BAD_REQUEST,
            Self::RoomNotFound(_) | Self::ReservationNotFound(_) => StatusCode::NOT_FOUND,
            Self::RoomAlreadyReserved(_) => StatusCode::CONFLICT,
        };

        tracing::debug!("{}", self);

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
