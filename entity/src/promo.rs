//! Discount campaign entity, scoped to a room type.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "promo")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub makeroom_id: Option<i32>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub discount: Option<f64>,
    pub date_start: Option<Date>,
    pub date_end: Option<Date>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::make_room::Entity",
        from = "Column::MakeroomId",
        to = "super::make_room::Column::Id"
    )]
    MakeRoom,
}

impl Related<super::make_room::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MakeRoom.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
