//! The authenticated principal stored in the session.
//!
//! Customers and staff live in disjoint tables, so the session stores one
//! tagged value carrying both the table discriminant and the row ID (plus the
//! role for staff). Loading the principal never needs a side-channel lookup
//! to know which table to query.

use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::{
    error::{auth::AuthError, Error},
    model::auth::StaffRole,
};

/// Session key the principal is stored under.
pub const SESSION_PRINCIPAL_KEY: &str = "veranda:principal";

/// An authenticated identity: a customer or a staff member with a role.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Principal {
    /// A customer account.
    Customer {
        /// Row ID in the `customers` table.
        id: i32,
    },
    /// A staff account with its parsed role.
    Staff {
        /// Row ID in the `staff` table.
        id: i32,
        /// The staff member's role.
        role: StaffRole,
    },
}

impl Principal {
    /// Row ID of the principal within its own table.
    pub fn id(&self) -> i32 {
        match self {
            Self::Customer { id } | Self::Staff { id, .. } => *id,
        }
    }

    /// Staff role, if the principal is a staff member.
    pub fn role(&self) -> Option<StaffRole> {
        match self {
            Self::Customer { .. } => None,
            Self::Staff { role, .. } => Some(*role),
        }
    }

    /// Insert the principal into the session
    pub async fn insert(session: &Session, principal: &Principal) -> Result<(), Error> {
        session.insert(SESSION_PRINCIPAL_KEY, principal).await?;

        Ok(())
    }

    /// Get the principal from the session, if one is present
    pub async fn get(session: &Session) -> Result<Option<Principal>, Error> {
        Ok(session.get::<Principal>(SESSION_PRINCIPAL_KEY).await?)
    }

    /// Get the principal or fail with [`AuthError::NotAuthenticated`].
    ///
    /// The error response redirects to `/login`, matching the behavior of a
    /// login-required page.
    pub async fn require(session: &Session) -> Result<Principal, Error> {
        match Self::get(session).await? {
            Some(principal) => Ok(principal),
            None => Err(AuthError::NotAuthenticated.into()),
        }
    }

    /// Get the principal and check it holds the given staff role.
    ///
    /// Unauthenticated sessions redirect to `/login`; authenticated principals
    /// without the exact role (customers included) get a 403.
    pub async fn require_role(session: &Session, role: StaffRole) -> Result<Principal, Error> {
        let principal = Self::require(session).await?;

        match principal.role() {
            Some(held) if held == role => Ok(principal),
            _ => Err(AuthError::RoleMismatch(role).into()),
        }
    }
}
