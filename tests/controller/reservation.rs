//! Tests for the reservation and payment endpoints.

use axum::{extract::Path, extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::NaiveDate;
use veranda::{
    controller::reservation::{
        create_reservation, list_reservations, record_payment, CreatePaymentRequest,
        CreateReservationRequest,
    },
    model::{api::ReservationDto, auth::StaffRole, session::principal::Principal},
    service::booking::BookingService,
};
use veranda_test_utils::prelude::*;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

async fn setup() -> Result<(TestSetup, i32, i32), TestError> {
    let test = test_setup_with_tables!(
        entity::prelude::Customer,
        entity::prelude::MakeRoom,
        entity::prelude::Room,
        entity::prelude::Reservation,
        entity::prelude::Payment,
    )?;

    let customer = fixtures::seed_customer(&test.db, "janed", "jane@x.com", "5551234", "pw1").await?;
    let room_type = fixtures::seed_room_type(&test.db, "Deluxe King", 180.0).await?;
    let room = fixtures::seed_room(&test.db, room_type.id, "101").await?;

    Ok((test, customer.id, room.id))
}

#[tokio::test]
/// Expect 201 for a valid booking by an authenticated customer
async fn creates_reservation() -> Result<(), TestError> {
    let (test, customer_id, room_id) = setup().await?;
    Principal::insert(&test.session, &Principal::Customer { id: customer_id })
        .await
        .unwrap();

    let result = create_reservation(
        State(test.db.clone().into()),
        test.session.clone(),
        Json(CreateReservationRequest {
            room_id: Some(room_id),
            check_in: date(2026, 9, 1),
            check_out: date(2026, 9, 4),
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    Ok(())
}

#[tokio::test]
/// Expect 409 when the room is already reserved for overlapping dates
async fn rejects_overlapping_reservation() -> Result<(), TestError> {
    let (test, customer_id, room_id) = setup().await?;
    Principal::insert(&test.session, &Principal::Customer { id: customer_id })
        .await
        .unwrap();

    let first = create_reservation(
        State(test.db.clone().into()),
        test.session.clone(),
        Json(CreateReservationRequest {
            room_id: Some(room_id),
            check_in: date(2026, 9, 1),
            check_out: date(2026, 9, 4),
        }),
    )
    .await;
    assert!(first.is_ok());

    let second = create_reservation(
        State(test.db.clone().into()),
        test.session.clone(),
        Json(CreateReservationRequest {
            room_id: Some(room_id),
            check_in: date(2026, 9, 3),
            check_out: date(2026, 9, 6),
        }),
    )
    .await;

    assert!(second.is_err());
    let resp = second.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}

#[tokio::test]
/// Expect 400 when check-out is not after check-in
async fn rejects_inverted_date_range() -> Result<(), TestError> {
    let (test, customer_id, room_id) = setup().await?;
    Principal::insert(&test.session, &Principal::Customer { id: customer_id })
        .await
        .unwrap();

    let result = create_reservation(
        State(test.db.clone().into()),
        test.session.clone(),
        Json(CreateReservationRequest {
            room_id: Some(room_id),
            check_in: date(2026, 9, 4),
            check_out: date(2026, 9, 4),
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
/// Expect 403 for a staff principal on the customer booking endpoint
async fn rejects_staff_principal() -> Result<(), TestError> {
    let (test, _, room_id) = setup().await?;
    Principal::insert(
        &test.session,
        &Principal::Staff {
            id: 1,
            role: StaffRole::Receptionist,
        },
    )
    .await
    .unwrap();

    let result = create_reservation(
        State(test.db.clone().into()),
        test.session.clone(),
        Json(CreateReservationRequest {
            room_id: Some(room_id),
            check_in: date(2026, 9, 1),
            check_out: date(2026, 9, 4),
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}

#[tokio::test]
/// Expect the listing to hold the caller's reservations and nobody else's
async fn lists_only_own_reservations() -> Result<(), TestError> {
    let (test, customer_id, room_id) = setup().await?;
    let other = fixtures::seed_customer(&test.db, "mike", "mike@x.com", "5559999", "pw2").await?;

    let mine = BookingService::new(&test.db)
        .create_reservation(customer_id, Some(room_id), date(2026, 9, 1), date(2026, 9, 4))
        .await
        .unwrap();
    BookingService::new(&test.db)
        .create_reservation(other.id, Some(room_id), date(2026, 9, 10), date(2026, 9, 14))
        .await
        .unwrap();

    Principal::insert(&test.session, &Principal::Customer { id: customer_id })
        .await
        .unwrap();

    let result = list_reservations(State(test.db.clone().into()), test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    let listed: Vec<ReservationDto> = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, mine.id);

    Ok(())
}

#[tokio::test]
/// Expect 201 when paying for the caller's own reservation
async fn records_payment_for_own_reservation() -> Result<(), TestError> {
    let (test, customer_id, room_id) = setup().await?;
    Principal::insert(&test.session, &Principal::Customer { id: customer_id })
        .await
        .unwrap();

    let created = create_reservation(
        State(test.db.clone().into()),
        test.session.clone(),
        Json(CreateReservationRequest {
            room_id: Some(room_id),
            check_in: date(2026, 9, 1),
            check_out: date(2026, 9, 4),
        }),
    )
    .await;
    assert!(created.is_ok());

    // The first reservation in a fresh database has ID 1
    let result = record_payment(
        State(test.db.clone().into()),
        test.session.clone(),
        Path(1),
        Json(CreatePaymentRequest {
            amount: 540.0,
            payment_method: Some("credit card".to_string()),
            transaction_id: Some("txn-1".to_string()),
            status: Some("success".to_string()),
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    Ok(())
}

#[tokio::test]
/// Expect 404 when paying for another customer's reservation
async fn rejects_payment_for_foreign_reservation() -> Result<(), TestError> {
    let (test, customer_id, room_id) = setup().await?;
    let other = fixtures::seed_customer(&test.db, "mike", "mike@x.com", "5559999", "pw2").await?;

    Principal::insert(&test.session, &Principal::Customer { id: customer_id })
        .await
        .unwrap();

    create_reservation(
        State(test.db.clone().into()),
        test.session.clone(),
        Json(CreateReservationRequest {
            room_id: Some(room_id),
            check_in: date(2026, 9, 1),
            check_out: date(2026, 9, 4),
        }),
    )
    .await
    .unwrap();

    // Re-authenticate as the other customer and try to pay for reservation 1
    Principal::insert(&test.session, &Principal::Customer { id: other.id })
        .await
        .unwrap();

    let result = record_payment(
        State(test.db.clone().into()),
        test.session.clone(),
        Path(1),
        Json(CreatePaymentRequest {
            amount: 540.0,
            payment_method: None,
            transaction_id: None,
            status: None,
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
