//! Physical room unit entity.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "rooms")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub makeroom_id: i32,
    pub room_number: String,
    /// Either "available" or "occupied".
    pub status: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::make_room::Entity",
        from = "Column::MakeroomId",
        to = "super::make_room::Column::Id"
    )]
    MakeRoom,
    #[sea_orm(has_many = "super::reservation::Entity")]
    Reservation,
    #[sea_orm(has_many = "super::room_availability::Entity")]
    RoomAvailability,
}

impl Related<super::make_room::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MakeRoom.def()
    }
}

impl Related<super::reservation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reservation.def()
    }
}

impl Related<super::room_availability::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RoomAvailability.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
