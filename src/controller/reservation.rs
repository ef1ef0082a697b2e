//! Reservation and payment API endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    data::reservation::{NewPayment, ReservationRepository},
    error::Error,
    model::{
        api::{ErrorDto, PaymentDto, ReservationDto},
        app::AppState,
        session::principal::Principal,
    },
    service::booking::BookingService,
};

/// OpenAPI tag for reservation endpoints.
pub static RESERVATIONS_TAG: &str = "reservations";

/// Request body for booking a stay.
#[derive(Deserialize, utoipa::ToSchema)]
pub struct CreateReservationRequest {
    /// Room unit to reserve; may be omitted for a walk-in booking assigned later.
    pub room_id: Option<i32>,
    /// Arrival date.
    pub check_in: NaiveDate,
    /// Departure date; must be after the arrival date.
    pub check_out: NaiveDate,
}

/// Request body for recording a payment.
#[derive(Deserialize, utoipa::ToSchema)]
pub struct CreatePaymentRequest {
    /// Amount paid.
    pub amount: f64,
    /// Payment method, e.g. "credit card".
    pub payment_method: Option<String>,
    /// Processor transaction reference.
    pub transaction_id: Option<String>,
    /// "success", "failed", or "refunded".
    pub status: Option<String>,
}

fn customers_only() -> axum::response::Response {
    (
        StatusCode::FORBIDDEN,
        Json(ErrorDto {
            error: "Customers only".to_string(),
        }),
    )
        .into_response()
}

/// List the calling customer's reservations with their payments
#[utoipa::path(
    get,
    path = "/api/reservations",
    tag = RESERVATIONS_TAG,
    responses(
        (status = 200, description = "The caller's reservations", body = Vec<ReservationDto>),
        (status = 403, description = "Caller is not a customer", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_reservations(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let principal = Principal::require(&session).await?;

    let Principal::Customer { id: customer_id } = principal else {
        return Ok(customers_only());
    };

    let reservation_repository = ReservationRepository::new(&state.db);

    let mut reservations = Vec::new();

    for reservation in reservation_repository
        .list_for_customer(customer_id)
        .await?
    {
        let payments = reservation_repository
            .payments(reservation.id)
            .await?
            .into_iter()
            .map(|p| PaymentDto {
                id: p.id,
                amount: p.amount,
                payment_method: p.payment_method,
                transaction_id: p.transaction_id,
                status: p.status,
                payment_date: p.payment_date,
            })
            .collect();

        reservations.push(ReservationDto {
            id: reservation.id,
            room_id: reservation.room_id,
            check_in: reservation.check_in,
            check_out: reservation.check_out,
            payments,
        });
    }

    Ok(Json(reservations).into_response())
}

/// Book a stay for the calling customer
#[utoipa::path(
    post,
    path = "/api/reservations",
    tag = RESERVATIONS_TAG,
    request_body = CreateReservationRequest,
    responses(
        (status = 201, description = "Reservation created", body = ReservationDto),
        (status = 400, description = "Check-out is not after check-in", body = ErrorDto),
        (status = 403, description = "Caller is not a customer", body = ErrorDto),
        (status = 404, description = "Room not found", body = ErrorDto),
        (status = 409, description = "Room already reserved for overlapping dates", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_reservation(
    State(state): State<AppState>,
    session: Session,
    Json(body): Json<CreateReservationRequest>,
) -> Result<impl IntoResponse, Error> {
    let principal = Principal::require(&session).await?;

    let Principal::Customer { id: customer_id } = principal else {
        return Ok(customers_only());
    };

    let reservation = BookingService::new(&state.db)
        .create_reservation(customer_id, body.room_id, body.check_in, body.check_out)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ReservationDto {
            id: reservation.id,
            room_id: reservation.room_id,
            check_in: reservation.check_in,
            check_out: reservation.check_out,
            payments: Vec::new(),
        }),
    )
        .into_response())
}

/// Record a payment against one of the caller's reservations
#[utoipa::path(
    post,
    path = "/api/reservations/{id}/payments",
    tag = RESERVATIONS_TAG,
    request_body = CreatePaymentRequest,
    params(("id" = i32, Path, description = "Reservation ID")),
    responses(
        (status = 201, description = "Payment recorded", body = PaymentDto),
        (status = 403, description = "Caller is not a customer", body = ErrorDto),
        (status = 404, description = "Reservation not found or not the caller's", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn record_payment(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(body): Json<CreatePaymentRequest>,
) -> Result<impl IntoResponse, Error> {
    let principal = Principal::require(&session).await?;

    let Principal::Customer { id: customer_id } = principal else {
        return Ok(customers_only());
    };

    let payment = BookingService::new(&state.db)
        .record_payment(
            customer_id,
            id,
            NewPayment {
                amount: body.amount,
                payment_method: body.payment_method,
                transaction_id: body.transaction_id,
                status: body.status,
            },
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(PaymentDto {
            id: payment.id,
            amount: payment.amount,
            payment_method: payment.payment_method,
            transaction_id: payment.transaction_id,
            status: payment.status,
            payment_date: payment.payment_date,
        }),
    )
        .into_response())
}
