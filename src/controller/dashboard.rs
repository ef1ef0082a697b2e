//! Role-gated dashboard pages.
//!
//! Every handler runs the same principal check; the admin and receptionist
//! dashboards additionally require an exact role match. Unauthenticated
//! visitors are redirected to `/login`; authenticated principals with the
//! wrong role get a 403.

use axum::response::{Html, IntoResponse};
use tower_sessions::Session;

use crate::{
    error::Error,
    model::{auth::StaffRole, session::principal::Principal},
};

/// Customer/staff landing page; any authenticated principal may view it
pub async fn dashboard(session: Session) -> Result<impl IntoResponse, Error> {
    Principal::require(&session).await?;

    Ok(Html(include_str!("../pages/dashboard.html")))
}

/// Admin dashboard; requires the admin role
pub async fn admin_dashboard(session: Session) -> Result<impl IntoResponse, Error> {
    Principal::require_role(&session, StaffRole::Admin).await?;

    Ok(Html(include_str!("../pages/admin_dashboard.html")))
}

/// Receptionist dashboard; requires the receptionist role
pub async fn receptionist_dashboard(session: Session) -> Result<impl IntoResponse, Error> {
    Principal::require_role(&session, StaffRole::Receptionist).await?;

    Ok(Html(include_str!("../pages/receptionist_dashboard.html")))
}
