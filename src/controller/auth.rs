//! Signup, login, logout, and the current-user endpoint.

use axum::{
    extract::State,
    response::{Html, IntoResponse, Redirect},
    Form, Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    controller::util::current_user::get_principal_from_session,
    error::Error,
    model::{
        app::AppState,
        auth::StaffRole,
        session::principal::Principal,
    },
    service::auth::{
        login::login_service,
        signup::{signup_service, SignupRequest},
    },
};

/// OpenAPI tag for authentication endpoints.
pub static AUTH_TAG: &str = "auth";

/// Signup form fields.
#[derive(Deserialize)]
pub struct SignupForm {
    /// Legal or display name.
    pub full_name: String,
    /// Email address.
    pub email: String,
    /// Mobile number.
    pub mobile_number: Option<String>,
    /// Postal address.
    pub address: Option<String>,
    /// Login name.
    pub username: String,
    /// Plaintext password.
    pub password: String,
}

/// Login form fields.
///
/// The `username` field accepts a username or an email address.
#[derive(Deserialize)]
pub struct LoginForm {
    /// Username or email.
    pub username: String,
    /// Plaintext password.
    pub password: String,
}

/// Renders the signup form
pub async fn signup_page() -> Html<&'static str> {
    Html(include_str!("../pages/signup.html"))
}

/// Registers a new customer account
///
/// # Responses
/// - 307 (Temporary Redirect): Account created and logged in, redirect to dashboard
/// - 409 (Conflict): Email, mobile number, or username already registered
pub async fn signup(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<SignupForm>,
) -> Result<impl IntoResponse, Error> {
    signup_service(
        &state.db,
        &session,
        SignupRequest {
            full_name: form.full_name,
            email: form.email,
            mobile_number: form.mobile_number,
            address: form.address,
            username: form.username,
            password: form.password,
        },
    )
    .await?;

    Ok(Redirect::temporary("/dashboard"))
}

/// Renders the login form
pub async fn login_page() -> Html<&'static str> {
    Html(include_str!("../pages/login.html"))
}

/// Authenticates a customer or staff member
///
/// Customers are dispatched to the customer dashboard; staff are dispatched
/// by role to the admin or receptionist dashboard.
///
/// # Responses
/// - 307 (Temporary Redirect): Authenticated, redirect to the role's dashboard
/// - 401 (Unauthorized): Identifier/password pair matched no account
/// - 403 (Forbidden): Staff account carries an unrecognized role
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Result<impl IntoResponse, Error> {
    let principal = login_service(&state.db, &session, &form.username, &form.password).await?;

    let target = match principal {
        Principal::Customer { .. } => "/dashboard",
        Principal::Staff {
            role: StaffRole::Admin,
            ..
        } => "/admin_dashboard",
        Principal::Staff {
            role: StaffRole::Receptionist,
            ..
        } => "/receptionist_dashboard",
    };

    Ok(Redirect::temporary(target))
}

/// Logs the user out by clearing their session
///
/// # Responses
/// - 307 (Temporary Redirect): Successfully logged out, redirect to login route
pub async fn logout(session: Session) -> Result<impl IntoResponse, Error> {
    let maybe_principal = Principal::get(&session).await?;

    // Only clear the session if there is actually a principal in it; clearing
    // a session that does not exist is a 500 in the session layer.
    if maybe_principal.is_some() {
        session.clear().await;
    }

    Ok(Redirect::temporary("/login"))
}

/// Get the currently authenticated principal
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Currently authenticated principal", body = crate::model::api::PrincipalDto),
        (status = 404, description = "No authenticated principal", body = crate::model::api::ErrorDto),
        (status = 500, description = "Internal server error", body = crate::model::api::ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let principal = get_principal_from_session(&state, &session).await?;

    Ok(Json(principal))
}
