//! Tests for the role-gated dashboard pages.

use axum::{
    http::{header::LOCATION, StatusCode},
    response::IntoResponse,
};
use veranda::{
    controller::dashboard::{admin_dashboard, dashboard, receptionist_dashboard},
    model::{auth::StaffRole, session::principal::Principal},
};
use veranda_test_utils::prelude::*;

#[tokio::test]
/// Expect any authenticated principal to reach the shared dashboard
async fn dashboard_allows_authenticated_customer() -> Result<(), TestError> {
    let test = TestSetup::new().await?;
    Principal::insert(&test.session, &Principal::Customer { id: 1 })
        .await
        .unwrap();

    let result = dashboard(test.session).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
/// Expect an unauthenticated visitor to be redirected to /login
async fn dashboard_redirects_unauthenticated_to_login() -> Result<(), TestError> {
    let test = TestSetup::new().await?;

    let result = dashboard(test.session).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(resp.headers().get(LOCATION).unwrap(), "/login");

    Ok(())
}

#[tokio::test]
/// Expect the admin dashboard to render for an admin
async fn admin_dashboard_allows_admin() -> Result<(), TestError> {
    let test = TestSetup::new().await?;
    Principal::insert(
        &test.session,
        &Principal::Staff {
            id: 1,
            role: StaffRole::Admin,
        },
    )
    .await
    .unwrap();

    let result = admin_dashboard(test.session).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
/// Expect 403 for a receptionist on the admin dashboard
async fn admin_dashboard_rejects_receptionist() -> Result<(), TestError> {
    let test = TestSetup::new().await?;
    Principal::insert(
        &test.session,
        &Principal::Staff {
            id: 1,
            role: StaffRole::Receptionist,
        },
    )
    .await
    .unwrap();

    let result = admin_dashboard(test.session).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}

#[tokio::test]
/// Expect 403 for a customer on the admin dashboard
async fn admin_dashboard_rejects_customer() -> Result<(), TestError> {
    let test = TestSetup::new().await?;
    Principal::insert(&test.session, &Principal::Customer { id: 1 })
        .await
        .unwrap();

    let result = admin_dashboard(test.session).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}

#[tokio::test]
/// Expect 403 for an admin on the receptionist dashboard
async fn receptionist_dashboard_rejects_admin() -> Result<(), TestError> {
    let test = TestSetup::new().await?;
    Principal::insert(
        &test.session,
        &Principal::Staff {
            id: 1,
            role: StaffRole::Admin,
        },
    )
    .await
    .unwrap();

    let result = receptionist_dashboard(test.session).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}

#[tokio::test]
/// Expect the receptionist dashboard to render for a receptionist
async fn receptionist_dashboard_allows_receptionist() -> Result<(), TestError> {
    let test = TestSetup::new().await?;
    Principal::insert(
        &test.session,
        &Principal::Staff {
            id: 1,
            role: StaffRole::Receptionist,
        },
    )
    .await
    .unwrap();

    let result = receptionist_dashboard(test.session).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}
