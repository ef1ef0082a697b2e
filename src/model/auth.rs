//! Staff role definitions.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::auth::AuthError;

/// Closed set of staff roles recognized by route dispatch.
///
/// The `staff.role` column is free-form in storage; parsing it through this
/// enum is what turns an unrecognized role value into a 403 at login.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum StaffRole {
    /// Full administrative access, routed to the admin dashboard.
    Admin,
    /// Front-desk access, routed to the receptionist dashboard.
    Receptionist,
}

impl StaffRole {
    /// Role name as stored in the `staff.role` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Receptionist => "receptionist",
        }
    }
}

impl fmt::Display for StaffRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StaffRole {
    type Err = AuthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Self::Admin),
            "receptionist" => Ok(Self::Receptionist),
            other => Err(AuthError::UnknownStaffRole(other.to_string())),
        }
    }
}
