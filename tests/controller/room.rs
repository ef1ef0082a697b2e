//! Tests for the room catalog endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use veranda::{
    controller::room::{
        create_room_type, create_room_unit, list_rooms, CreateRoomTypeRequest,
        CreateRoomUnitRequest,
    },
    model::{auth::StaffRole, session::principal::Principal},
};
use veranda_test_utils::prelude::*;

fn room_type_request(title: &str) -> Json<CreateRoomTypeRequest> {
    Json(CreateRoomTypeRequest {
        title: title.to_string(),
        description: None,
        price_per_night: 180.0,
        num_of_rooms: Some(4),
        adult_capacity: Some(2),
        child_capacity: Some(1),
    })
}

async fn setup() -> Result<TestSetup, TestError> {
    test_setup_with_tables!(
        entity::prelude::MakeRoom,
        entity::prelude::Room,
        entity::prelude::RoomImage,
        entity::prelude::Promo,
    )
}

async fn admin_session(test: &TestSetup) {
    Principal::insert(
        &test.session,
        &Principal::Staff {
            id: 1,
            role: StaffRole::Admin,
        },
    )
    .await
    .unwrap();
}

#[tokio::test]
/// Expect 200 from the public catalog endpoint
async fn lists_rooms_without_authentication() -> Result<(), TestError> {
    let test = setup().await?;
    let room_type = fixtures::seed_room_type(&test.db, "Deluxe King", 180.0).await?;
    fixtures::seed_room(&test.db, room_type.id, "101").await?;

    let result = list_rooms(State(test.db.clone().into())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
/// Expect 201 when an admin creates a room type
async fn admin_creates_room_type() -> Result<(), TestError> {
    let test = setup().await?;
    admin_session(&test).await;

    let result = create_room_type(
        State(test.db.clone().into()),
        test.session.clone(),
        room_type_request("Deluxe King"),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    Ok(())
}

#[tokio::test]
/// Expect 403 when a receptionist tries to create a room type
async fn receptionist_cannot_create_room_type() -> Result<(), TestError> {
    let test = setup().await?;
    Principal::insert(
        &test.session,
        &Principal::Staff {
            id: 1,
            role: StaffRole::Receptionist,
        },
    )
    .await
    .unwrap();

    let result = create_room_type(
        State(test.db.clone().into()),
        test.session.clone(),
        room_type_request("Deluxe King"),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}

#[tokio::test]
/// Expect 201 when an admin adds a unit under an existing room type
async fn admin_creates_room_unit() -> Result<(), TestError> {
    let test = setup().await?;
    let room_type = fixtures::seed_room_type(&test.db, "Deluxe King", 180.0).await?;
    admin_session(&test).await;

    let result = create_room_unit(
        State(test.db.clone().into()),
        test.session.clone(),
        Path(room_type.id),
        Json(CreateRoomUnitRequest {
            room_number: "101".to_string(),
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    Ok(())
}

#[tokio::test]
/// Expect 404 for a unit under a room type that does not exist
async fn rejects_unit_for_missing_room_type() -> Result<(), TestError> {
    let test = setup().await?;
    admin_session(&test).await;

    let result = create_room_unit(
        State(test.db.clone().into()),
        test.session.clone(),
        Path(42),
        Json(CreateRoomUnitRequest {
            room_number: "101".to_string(),
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
