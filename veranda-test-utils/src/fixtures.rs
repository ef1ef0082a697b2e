//! Seed functions for inserting test rows.
//!
//! Each function inserts one row with sensible defaults and returns the
//! created model. Passwords are hashed the same way the application hashes
//! them, so seeded accounts work with the real login path.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
    Argon2,
};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection};

use crate::error::TestError;

fn hash_password(plain: &str) -> Result<String, TestError> {
    let salt = SaltString::generate(&mut OsRng);

    let hash = Argon2::default()
        .hash_password(plain.as_bytes(), &salt)
        .map_err(|e| TestError::PasswordHash(e.to_string()))?;

    Ok(hash.to_string())
}

/// Insert a customer with the given credentials.
///
/// The password is argon2-hashed before storage.
pub async fn seed_customer(
    db: &DatabaseConnection,
    username: &str,
    email: &str,
    mobile_number: &str,
    password: &str,
) -> Result<entity::customer::Model, TestError> {
    let row = entity::customer::ActiveModel {
        full_name: ActiveValue::Set(format!("Test {}", username)),
        email: ActiveValue::Set(email.to_string()),
        mobile_number: ActiveValue::Set(Some(mobile_number.to_string())),
        address: ActiveValue::Set(None),
        username: ActiveValue::Set(username.to_string()),
        password: ActiveValue::Set(hash_password(password)?),
        ..Default::default()
    };

    Ok(row.insert(db).await?)
}

/// Insert a staff member with the given role string.
///
/// The role is stored verbatim, so tests can seed unrecognized roles.
pub async fn seed_staff(
    db: &DatabaseConnection,
    username: &str,
    password: &str,
    role: &str,
) -> Result<entity::staff::Model, TestError> {
    let row = entity::staff::ActiveModel {
        username: ActiveValue::Set(username.to_string()),
        password: ActiveValue::Set(hash_password(password)?),
        role: ActiveValue::Set(role.to_string()),
        ..Default::default()
    };

    Ok(row.insert(db).await?)
}

/// Insert a room type with the given title and nightly rate.
pub async fn seed_room_type(
    db: &DatabaseConnection,
    title: &str,
    price_per_night: f64,
) -> Result<entity::make_room::Model, TestError> {
    let row = entity::make_room::ActiveModel {
        title: ActiveValue::Set(title.to_string()),
        description: ActiveValue::Set(None),
        price_per_night: ActiveValue::Set(price_per_night),
        num_of_rooms: ActiveValue::Set(None),
        adult_capacity: ActiveValue::Set(Some(2)),
        child_capacity: ActiveValue::Set(Some(1)),
        ..Default::default()
    };

    Ok(row.insert(db).await?)
}

/// Insert an available room unit under the given room type.
pub async fn seed_room(
    db: &DatabaseConnection,
    makeroom_id: i32,
    room_number: &str,
) -> Result<entity::room::Model, TestError> {
    let row = entity::room::ActiveModel {
        makeroom_id: ActiveValue::Set(makeroom_id),
        room_number: ActiveValue::Set(room_number.to_string()),
        status: ActiveValue::Set("available".to_string()),
        ..Default::default()
    };

    Ok(row.insert(db).await?)
}
