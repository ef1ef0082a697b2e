//! Room catalog API endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    data::{
        room::RoomRepository,
        room_type::{NewRoomType, RoomTypeRepository},
    },
    error::Error,
    model::{
        api::{ErrorDto, PromoDto, RoomTypeDto, RoomUnitDto},
        app::AppState,
        auth::StaffRole,
        session::principal::Principal,
    },
};

/// OpenAPI tag for room catalog endpoints.
pub static ROOMS_TAG: &str = "rooms";

/// Request body for creating a room type.
#[derive(Deserialize, utoipa::ToSchema)]
pub struct CreateRoomTypeRequest {
    /// Marketing title.
    pub title: String,
    /// Longer description.
    pub description: Option<String>,
    /// Nightly rate before promotions.
    pub price_per_night: f64,
    /// Planned number of physical units.
    pub num_of_rooms: Option<i32>,
    /// Adult capacity.
    pub adult_capacity: Option<i32>,
    /// Child capacity.
    pub child_capacity: Option<i32>,
}

/// Request body for adding a physical unit to a room type.
#[derive(Deserialize, utoipa::ToSchema)]
pub struct CreateRoomUnitRequest {
    /// Door number.
    pub room_number: String,
}

/// List room types with their units, thumbnails, and active promos
#[utoipa::path(
    get,
    path = "/api/rooms",
    tag = ROOMS_TAG,
    responses(
        (status = 200, description = "Room catalog", body = Vec<RoomTypeDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_rooms(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let room_type_repository = RoomTypeRepository::new(&state.db);
    let room_repository = RoomRepository::new(&state.db);

    let today = Utc::now().date_naive();

    let mut catalog = Vec::new();

    for room_type in room_type_repository.list().await? {
        let rooms = room_repository
            .list_by_type(room_type.id)
            .await?
            .into_iter()
            .map(|r| RoomUnitDto {
                id: r.id,
                room_number: r.room_number,
                status: r.status,
            })
            .collect();

        let thumbnail = room_type_repository
            .thumbnail(room_type.id)
            .await?
            .map(|i| i.image_path);

        let promos = room_type_repository
            .active_promos(room_type.id, today)
            .await?
            .into_iter()
            .map(|p| PromoDto {
                id: p.id,
                title: p.title,
                discount: p.discount,
                date_start: p.date_start,
                date_end: p.date_end,
            })
            .collect();

        catalog.push(RoomTypeDto {
            id: room_type.id,
            title: room_type.title,
            description: room_type.description,
            price_per_night: room_type.price_per_night,
            adult_capacity: room_type.adult_capacity,
            child_capacity: room_type.child_capacity,
            thumbnail,
            rooms,
            promos,
        });
    }

    Ok(Json(catalog))
}

/// Create a room type (admin only)
#[utoipa::path(
    post,
    path = "/api/rooms",
    tag = ROOMS_TAG,
    request_body = CreateRoomTypeRequest,
    responses(
        (status = 201, description = "Room type created"),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_room_type(
    State(state): State<AppState>,
    session: Session,
    Json(body): Json<CreateRoomTypeRequest>,
) -> Result<impl IntoResponse, Error> {
    Principal::require_role(&session, StaffRole::Admin).await?;

    let room_type = RoomTypeRepository::new(&state.db)
        .create(NewRoomType {
            title: body.title,
            description: body.description,
            price_per_night: body.price_per_night,
            num_of_rooms: body.num_of_rooms,
            adult_capacity: body.adult_capacity,
            child_capacity: body.child_capacity,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(room_type)))
}

/// Add a physical unit to a room type (admin only)
#[utoipa::path(
    post,
    path = "/api/rooms/{id}/units",
    tag = ROOMS_TAG,
    request_body = CreateRoomUnitRequest,
    params(("id" = i32, Path, description = "Room type ID")),
    responses(
        (status = 201, description = "Room unit created"),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Room type not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_room_unit(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(body): Json<CreateRoomUnitRequest>,
) -> Result<impl IntoResponse, Error> {
    Principal::require_role(&session, StaffRole::Admin).await?;

    let room_type = RoomTypeRepository::new(&state.db).get_by_id(id).await?;

    if room_type.is_none() {
        return Ok((
            StatusCode::NOT_FOUND,
            Json(ErrorDto {
                error: format!("Room type ID {} not found", id),
            }),
        )
            .into_response());
    }

    let unit = RoomRepository::new(&state.db)
        .create(id, &body.room_number)
        .await?;

    Ok((StatusCode::CREATED, Json(unit)).into_response())
}
