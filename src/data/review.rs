//! Customer review repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
    QuerySelect,
};

use entity::review;

/// Repository for customer reviews.
pub struct ReviewRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReviewRepository<'a> {
    /// Creates a new instance of [`ReviewRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a review from a customer, stamped with the current time
    pub async fn create(
        &self,
        customer_id: i32,
        rating: i32,
        comment: Option<String>,
    ) -> Result<review::Model, DbErr> {
        let row = review::ActiveModel {
            customer_id: ActiveValue::Set(customer_id),
            rating: ActiveValue::Set(rating),
            comment: ActiveValue::Set(comment),
            review_date: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        row.insert(self.db).await
    }

    /// Most recent reviews, newest first
    pub async fn list_recent(&self, limit: u64) -> Result<Vec<review::Model>, DbErr> {
        entity::prelude::Review::find()
            .order_by_desc(review::Column::ReviewDate)
            .limit(limit)
            .all(self.db)
            .await
    }
}
