//! Customer account repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    ExprTrait, QueryFilter,
};

use entity::customer;

/// Fields a new customer signup provides.
pub struct NewCustomer {
    /// Legal or display name.
    pub full_name: String,
    /// Unique email address.
    pub email: String,
    /// Unique mobile number, when provided.
    pub mobile_number: Option<String>,
    /// Postal address.
    pub address: Option<String>,
    /// Unique login name.
    pub username: String,
    /// Argon2 hash of the password, never plaintext.
    pub password_hash: String,
}

/// Repository for customer accounts.
pub struct CustomerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CustomerRepository<'a> {
    /// Creates a new instance of [`CustomerRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new customer row
    pub async fn create(&self, new: NewCustomer) -> Result<customer::Model, DbErr> {
        let row = customer::ActiveModel {
            full_name: ActiveValue::Set(new.full_name),
            email: ActiveValue::Set(new.email),
            mobile_number: ActiveValue::Set(new.mobile_number),
            address: ActiveValue::Set(new.address),
            username: ActiveValue::Set(new.username),
            password: ActiveValue::Set(new.password_hash),
            ..Default::default()
        };

        row.insert(self.db).await
    }

    /// Fetches a customer by primary key
    pub async fn get_by_id(&self, id: i32) -> Result<Option<customer::Model>, DbErr> {
        entity::prelude::Customer::find_by_id(id).one(self.db).await
    }

    /// Looks a customer up by username or email, in that order of intent.
    ///
    /// Login accepts either identifier in the same form field.
    pub async fn find_by_identifier(
        &self,
        identifier: &str,
    ) -> Result<Option<customer::Model>, DbErr> {
        entity::prelude::Customer::find()
            .filter(
                customer::Column::Username
                    .eq(identifier)
                    .or(customer::Column::Email.eq(identifier)),
            )
            .one(self.db)
            .await
    }

    /// Returns the name of the first unique field already taken by another
    /// account, or `None` when the triple is fresh.
    ///
    /// Checked in the same order signup reports conflicts: email, mobile
    /// number, then username.
    pub async fn find_duplicate_identity(
        &self,
        email: &str,
        mobile_number: Option<&str>,
        username: &str,
    ) -> Result<Option<&'static str>, DbErr> {
        let email_taken = entity::prelude::Customer::find()
            .filter(customer::Column::Email.eq(email))
            .one(self.db)
            .await?
            .is_some();

        if email_taken {
            return Ok(Some("email"));
        }

        if let Some(mobile_number) = mobile_number {
            let mobile_taken = entity::prelude::Customer::find()
                .filter(customer::Column::MobileNumber.eq(mobile_number))
                .one(self.db)
                .await?
                .is_some();

            if mobile_taken {
                return Ok(Some("mobile number"));
            }
        }

        let username_taken = entity::prelude::Customer::find()
            .filter(customer::Column::Username.eq(username))
            .one(self.db)
            .await?
            .is_some();

        if username_taken {
            return Ok(Some("username"));
        }

        Ok(None)
    }
}
