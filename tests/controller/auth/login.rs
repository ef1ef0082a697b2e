use axum::{
    extract::State,
    http::{header::LOCATION, StatusCode},
    response::IntoResponse,
    Form,
};
use veranda::{
    controller::auth::{login, LoginForm},
    model::{auth::StaffRole, session::principal::Principal},
};
use veranda_test_utils::prelude::*;

fn form(username: &str, password: &str) -> Form<LoginForm> {
    Form(LoginForm {
        username: username.to_string(),
        password: password.to_string(),
    })
}

async fn setup() -> Result<TestSetup, TestError> {
    test_setup_with_tables!(entity::prelude::Customer, entity::prelude::Staff)
}

#[tokio::test]
/// Expect a customer login to redirect to the customer dashboard
async fn customer_redirects_to_dashboard() -> Result<(), TestError> {
    let test = setup().await?;
    let customer = fixtures::seed_customer(&test.db, "janed", "jane@x.com", "5551234", "pw1").await?;

    let result = login(
        State(test.db.clone().into()),
        test.session.clone(),
        form("janed", "pw1"),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(resp.headers().get(LOCATION).unwrap(), "/dashboard");

    let principal = Principal::get(&test.session).await.unwrap();
    assert_eq!(principal, Some(Principal::Customer { id: customer.id }));

    Ok(())
}

#[tokio::test]
/// Expect the login identifier to also match the customer's email
async fn customer_can_login_by_email() -> Result<(), TestError> {
    let test = setup().await?;
    fixtures::seed_customer(&test.db, "janed", "jane@x.com", "5551234", "pw1").await?;

    let result = login(
        State(test.db.clone().into()),
        test.session.clone(),
        form("jane@x.com", "pw1"),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.headers().get(LOCATION).unwrap(), "/dashboard");

    Ok(())
}

#[tokio::test]
/// Expect an admin login to redirect to the admin dashboard
async fn admin_redirects_to_admin_dashboard() -> Result<(), TestError> {
    let test = setup().await?;
    let staff = fixtures::seed_staff(&test.db, "finn", "pw1", "admin").await?;

    let result = login(
        State(test.db.clone().into()),
        test.session.clone(),
        form("finn", "pw1"),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(resp.headers().get(LOCATION).unwrap(), "/admin_dashboard");

    let principal = Principal::get(&test.session).await.unwrap();
    assert_eq!(
        principal,
        Some(Principal::Staff {
            id: staff.id,
            role: StaffRole::Admin
        })
    );

    Ok(())
}

#[tokio::test]
/// Expect a receptionist login to redirect to the receptionist dashboard
async fn receptionist_redirects_to_receptionist_dashboard() -> Result<(), TestError> {
    let test = setup().await?;
    fixtures::seed_staff(&test.db, "jake", "pw1", "receptionist").await?;

    let result = login(
        State(test.db.clone().into()),
        test.session.clone(),
        form("jake", "pw1"),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(
        resp.headers().get(LOCATION).unwrap(),
        "/receptionist_dashboard"
    );

    Ok(())
}

#[tokio::test]
/// Expect 401 for a wrong password
async fn rejects_wrong_password() -> Result<(), TestError> {
    let test = setup().await?;
    fixtures::seed_customer(&test.db, "janed", "jane@x.com", "5551234", "pw1").await?;

    let result = login(
        State(test.db.clone().into()),
        test.session.clone(),
        form("janed", "pw2"),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

#[tokio::test]
/// Expect 401 for an identifier matching no account
async fn rejects_unknown_identifier() -> Result<(), TestError> {
    let test = setup().await?;

    let result = login(
        State(test.db.clone().into()),
        test.session.clone(),
        form("ghost", "pw1"),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

#[tokio::test]
/// Expect 403 and no session principal for a staff row with an unknown role
async fn rejects_unknown_staff_role() -> Result<(), TestError> {
    let test = setup().await?;
    fixtures::seed_staff(&test.db, "finn", "pw1", "janitor").await?;

    let result = login(
        State(test.db.clone().into()),
        test.session.clone(),
        form("finn", "pw1"),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let principal = Principal::get(&test.session).await.unwrap();
    assert!(principal.is_none());

    Ok(())
}

#[tokio::test]
/// Expect a customer account to win when a staff account shares its username
async fn customer_takes_precedence_over_staff() -> Result<(), TestError> {
    let test = setup().await?;
    fixtures::seed_customer(&test.db, "sam", "sam@x.com", "5551234", "pw1").await?;
    fixtures::seed_staff(&test.db, "sam", "pw1", "admin").await?;

    let result = login(
        State(test.db.clone().into()),
        test.session.clone(),
        form("sam", "pw1"),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.headers().get(LOCATION).unwrap(), "/dashboard");

    Ok(())
}
