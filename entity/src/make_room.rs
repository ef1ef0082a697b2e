//! Room type entity (a bookable room template, not a physical unit).

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "makeroom")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub price_per_night: f64,
    pub num_of_rooms: Option<i32>,
    pub adult_capacity: Option<i32>,
    pub child_capacity: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::room::Entity")]
    Room,
    #[sea_orm(has_many = "super::room_image::Entity")]
    RoomImage,
    #[sea_orm(has_many = "super::promo::Entity")]
    Promo,
}

impl Related<super::room::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Room.def()
    }
}

impl Related<super::room_image::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RoomImage.def()
    }
}

impl Related<super::promo::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Promo.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
