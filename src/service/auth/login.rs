//! Credential verification and session establishment.

use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::{
    data::{customer::CustomerRepository, staff::StaffRepository},
    error::{auth::AuthError, Error},
    model::session::principal::Principal,
    service::auth::password::verify_password,
};

/// Authenticates an identifier/password pair and establishes a session.
///
/// Customers are checked first, by username or email; staff second, by
/// username only. When both a customer and a staff account match the same
/// identifier the customer wins unconditionally. A staff row whose role
/// string is unrecognized fails before any session is established. On any
/// failure the session is left untouched; there is no partial authentication.
pub async fn login_service(
    db: &DatabaseConnection,
    session: &Session,
    identifier: &str,
    password: &str,
) -> Result<Principal, Error> {
    if let Some(customer) = CustomerRepository::new(db)
        .find_by_identifier(identifier)
        .await?
    {
        if verify_password(password, &customer.password)? {
            let principal = Principal::Customer { id: customer.id };

            establish(session, &principal).await?;

            return Ok(principal);
        }
    }

    if let Some(staff) = StaffRepository::new(db).find_by_username(identifier).await? {
        if verify_password(password, &staff.password)? {
            // Parse the role before touching the session so an unknown role
            // never authenticates.
            let role = staff.role.parse()?;

            let principal = Principal::Staff {
                id: staff.id,
                role,
            };

            establish(session, &principal).await?;

            return Ok(principal);
        }
    }

    Err(AuthError::InvalidCredentials.into())
}

async fn establish(session: &Session, principal: &Principal) -> Result<(), Error> {
    session.clear().await;
    Principal::insert(session, principal).await?;

    Ok(())
}
