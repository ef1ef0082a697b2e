//! Customer registration.

use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::{
    data::customer::{CustomerRepository, NewCustomer},
    error::{auth::AuthError, Error},
    model::session::principal::Principal,
    service::auth::password::hash_password,
};

/// What a signup form submits.
pub struct SignupRequest {
    /// Legal or display name.
    pub full_name: String,
    /// Email address; must be unused.
    pub email: String,
    /// Mobile number; must be unused when provided.
    pub mobile_number: Option<String>,
    /// Postal address.
    pub address: Option<String>,
    /// Login name; must be unused.
    pub username: String,
    /// Plaintext password, hashed before storage.
    pub password: String,
}

/// Registers a new customer and leaves them authenticated.
///
/// Fails with [`AuthError::DuplicateIdentity`] when the email, mobile number,
/// or username is already registered. On success any prior session is cleared
/// and the new customer's principal is stored in the session, so a staff
/// member signing up a customer does not keep their staff identity.
pub async fn signup_service(
    db: &DatabaseConnection,
    session: &Session,
    request: SignupRequest,
) -> Result<entity::customer::Model, Error> {
    let customer_repository = CustomerRepository::new(db);

    if let Some(field) = customer_repository
        .find_duplicate_identity(
            &request.email,
            request.mobile_number.as_deref(),
            &request.username,
        )
        .await?
    {
        return Err(AuthError::DuplicateIdentity(field).into());
    }

    let password_hash = hash_password(&request.password)?;

    let customer = customer_repository
        .create(NewCustomer {
            full_name: request.full_name,
            email: request.email,
            mobile_number: request.mobile_number,
            address: request.address,
            username: request.username,
            password_hash,
        })
        .await?;

    session.clear().await;
    Principal::insert(session, &Principal::Customer { id: customer.id }).await?;

    tracing::info!(customer_id = %customer.id, "new customer registered");

    Ok(customer)
}
