//! Resolving the session principal into a user-facing summary.

use tower_sessions::Session;

use crate::{
    data::{customer::CustomerRepository, staff::StaffRepository},
    error::{auth::AuthError, Error},
    model::{api::PrincipalDto, app::AppState, session::principal::Principal},
};

/// Loads the session principal and resolves it against its own table.
///
/// The tagged principal tells us which table to query; no side-channel
/// discriminator is involved.
///
/// # Returns
/// - `Ok(PrincipalDto)` - Principal found; name is the customer's full name
///   or the staff username
/// - `Err(AuthError::PrincipalNotInSession)` - No principal in the session
/// - `Err(AuthError::PrincipalNotInDatabase)` - Principal row is gone; the
///   session is cleared so the stale cookie cannot loop
pub async fn get_principal_from_session(
    state: &AppState,
    session: &Session,
) -> Result<PrincipalDto, Error> {
    let Some(principal) = Principal::get(session).await? else {
        return Err(AuthError::PrincipalNotInSession.into());
    };

    let dto = match principal {
        Principal::Customer { id } => {
            let Some(customer) = CustomerRepository::new(&state.db).get_by_id(id).await? else {
                return stale_session(session, id).await;
            };

            PrincipalDto {
                id,
                name: customer.full_name,
                role: None,
            }
        }
        Principal::Staff { id, role } => {
            let Some(staff) = StaffRepository::new(&state.db).get_by_id(id).await? else {
                return stale_session(session, id).await;
            };

            PrincipalDto {
                id,
                name: staff.username,
                role: Some(role),
            }
        }
    };

    Ok(dto)
}

async fn stale_session(session: &Session, principal_id: i32) -> Result<PrincipalDto, Error> {
    session.clear().await;

    tracing::debug!(
        "Session cleared for principal ID {} with active session but no database row",
        principal_id
    );

    Err(AuthError::PrincipalNotInDatabase(principal_id).into())
}
