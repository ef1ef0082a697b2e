//! Room type (template) repository: room types, their images, and promos.

use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

use entity::{make_room, promo, room_image};

/// Fields describing a new room type.
pub struct NewRoomType {
    /// Marketing title.
    pub title: String,
    /// Longer description.
    pub description: Option<String>,
    /// Nightly rate before promotions.
    pub price_per_night: f64,
    /// How many physical units the hotel plans for this type.
    pub num_of_rooms: Option<i32>,
    /// Adult capacity.
    pub adult_capacity: Option<i32>,
    /// Child capacity.
    pub child_capacity: Option<i32>,
}

/// Repository for room types, their photo assets, and discount campaigns.
pub struct RoomTypeRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RoomTypeRepository<'a> {
    /// Creates a new instance of [`RoomTypeRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new room type
    pub async fn create(&self, new: NewRoomType) -> Result<make_room::Model, DbErr> {
        let row = make_room::ActiveModel {
            title: ActiveValue::Set(new.title),
            description: ActiveValue::Set(new.description),
            price_per_night: ActiveValue::Set(new.price_per_night),
            num_of_rooms: ActiveValue::Set(new.num_of_rooms),
            adult_capacity: ActiveValue::Set(new.adult_capacity),
            child_capacity: ActiveValue::Set(new.child_capacity),
            ..Default::default()
        };

        row.insert(self.db).await
    }

    /// Fetches a room type by primary key
    pub async fn get_by_id(&self, id: i32) -> Result<Option<make_room::Model>, DbErr> {
        entity::prelude::MakeRoom::find_by_id(id).one(self.db).await
    }

    /// Lists every room type
    pub async fn list(&self) -> Result<Vec<make_room::Model>, DbErr> {
        entity::prelude::MakeRoom::find().all(self.db).await
    }

    /// Attaches a photo asset to a room type
    pub async fn add_image(
        &self,
        makeroom_id: i32,
        image_path: &str,
        is_thumbnail: bool,
    ) -> Result<room_image::Model, DbErr> {
        let row = room_image::ActiveModel {
            makeroom_id: ActiveValue::Set(Some(makeroom_id)),
            image_path: ActiveValue::Set(image_path.to_string()),
            is_thumbnail: ActiveValue::Set(is_thumbnail),
            ..Default::default()
        };

        row.insert(self.db).await
    }

    /// Returns the thumbnail image for a room type, when one is flagged
    pub async fn thumbnail(&self, makeroom_id: i32) -> Result<Option<room_image::Model>, DbErr> {
        entity::prelude::RoomImage::find()
            .filter(room_image::Column::MakeroomId.eq(makeroom_id))
            .filter(room_image::Column::IsThumbnail.eq(true))
            .one(self.db)
            .await
    }

    /// Creates a discount campaign for a room type
    pub async fn add_promo(
        &self,
        makeroom_id: i32,
        title: &str,
        discount: f64,
        date_start: NaiveDate,
        date_end: NaiveDate,
    ) -> Result<promo::Model, DbErr> {
        let row = promo::ActiveModel {
            makeroom_id: ActiveValue::Set(Some(makeroom_id)),
            title: ActiveValue::Set(Some(title.to_string())),
            discount: ActiveValue::Set(Some(discount)),
            date_start: ActiveValue::Set(Some(date_start)),
            date_end: ActiveValue::Set(Some(date_end)),
            ..Default::default()
        };

        row.insert(self.db).await
    }

    /// Promos for a room type whose date range covers `on` (open-ended ranges included)
    pub async fn active_promos(
        &self,
        makeroom_id: i32,
        on: NaiveDate,
    ) -> Result<Vec<promo::Model>, DbErr> {
        entity::prelude::Promo::find()
            .filter(promo::Column::MakeroomId.eq(makeroom_id))
            .filter(
                Condition::any()
                    .add(promo::Column::DateStart.is_null())
                    .add(promo::Column::DateStart.lte(on)),
            )
            .filter(
                Condition::any()
                    .add(promo::Column::DateEnd.is_null())
                    .add(promo::Column::DateEnd.gte(on)),
            )
            .all(self.db)
            .await
    }
}
