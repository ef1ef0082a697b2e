//! Physical room unit repository, including the per-day availability calendar.

use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use entity::{room, room_availability};

/// Repository for physical room units.
pub struct RoomRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RoomRepository<'a> {
    /// Creates a new instance of [`RoomRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new room unit of the given type, starting as available
    pub async fn create(&self, makeroom_id: i32, room_number: &str) -> Result<room::Model, DbErr> {
        let row = room::ActiveModel {
            makeroom_id: ActiveValue::Set(makeroom_id),
            room_number: ActiveValue::Set(room_number.to_string()),
            status: ActiveValue::Set("available".to_string()),
            ..Default::default()
        };

        row.insert(self.db).await
    }

    /// Fetches a room unit by primary key
    pub async fn get_by_id(&self, id: i32) -> Result<Option<room::Model>, DbErr> {
        entity::prelude::Room::find_by_id(id).one(self.db).await
    }

    /// Lists the units of one room type
    pub async fn list_by_type(&self, makeroom_id: i32) -> Result<Vec<room::Model>, DbErr> {
        entity::prelude::Room::find()
            .filter(room::Column::MakeroomId.eq(makeroom_id))
            .order_by_asc(room::Column::RoomNumber)
            .all(self.db)
            .await
    }

    /// Records a calendar entry for a room unit on a specific day
    pub async fn set_availability(
        &self,
        room_id: i32,
        date: NaiveDate,
        is_available: bool,
    ) -> Result<room_availability::Model, DbErr> {
        let row = room_availability::ActiveModel {
            room_id: ActiveValue::Set(room_id),
            date: ActiveValue::Set(date),
            is_available: ActiveValue::Set(is_available),
            ..Default::default()
        };

        row.insert(self.db).await
    }

    /// Calendar entries recorded for a room unit, oldest first
    pub async fn availability(
        &self,
        room_id: i32,
    ) -> Result<Vec<room_availability::Model>, DbErr> {
        entity::prelude::RoomAvailability::find()
            .filter(room_availability::Column::RoomId.eq(room_id))
            .order_by_asc(room_availability::Column::Date)
            .all(self.db)
            .await
    }
}
