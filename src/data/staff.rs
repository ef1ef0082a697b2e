//! Staff account repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

use entity::staff;

use crate::model::auth::StaffRole;

/// Repository for staff accounts.
pub struct StaffRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StaffRepository<'a> {
    /// Creates a new instance of [`StaffRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new staff row with the given role
    pub async fn create(
        &self,
        username: &str,
        password_hash: &str,
        role: StaffRole,
    ) -> Result<staff::Model, DbErr> {
        let row = staff::ActiveModel {
            username: ActiveValue::Set(username.to_string()),
            password: ActiveValue::Set(password_hash.to_string()),
            role: ActiveValue::Set(role.as_str().to_string()),
            ..Default::default()
        };

        row.insert(self.db).await
    }

    /// Fetches a staff member by primary key
    pub async fn get_by_id(&self, id: i32) -> Result<Option<staff::Model>, DbErr> {
        entity::prelude::Staff::find_by_id(id).one(self.db).await
    }

    /// Looks a staff member up by username
    pub async fn find_by_username(&self, username: &str) -> Result<Option<staff::Model>, DbErr> {
        entity::prelude::Staff::find()
            .filter(staff::Column::Username.eq(username))
            .one(self.db)
            .await
    }
}
