use axum::{extract::State, http::StatusCode, response::IntoResponse};
use veranda::{
    controller::auth::get_user,
    model::{auth::StaffRole, session::principal::Principal},
};
use veranda_test_utils::prelude::*;

#[tokio::test]
/// Expect 200 with the customer's summary for an authenticated customer
async fn returns_success_for_customer_principal() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::Customer)?;
    let customer = fixtures::seed_customer(&test.db, "janed", "jane@x.com", "5551234", "pw1").await?;
    Principal::insert(&test.session, &Principal::Customer { id: customer.id })
        .await
        .unwrap();

    let result = get_user(State(test.db.clone().into()), test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
/// Expect 200 for an authenticated staff member
async fn returns_success_for_staff_principal() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::Staff)?;
    let staff = fixtures::seed_staff(&test.db, "finn", "pw1", "admin").await?;
    Principal::insert(
        &test.session,
        &Principal::Staff {
            id: staff.id,
            role: StaffRole::Admin,
        },
    )
    .await
    .unwrap();

    let result = get_user(State(test.db.clone().into()), test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
/// Expect 404 when no principal is in the session
async fn returns_not_found_without_principal() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::Customer)?;

    let result = get_user(State(test.db.clone().into()), test.session.clone()).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
/// Expect 404 and a cleared session when the principal's row is gone
async fn clears_stale_session_for_deleted_row() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::Customer)?;
    Principal::insert(&test.session, &Principal::Customer { id: 42 })
        .await
        .unwrap();

    let result = get_user(State(test.db.clone().into()), test.session.clone()).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let principal = Principal::get(&test.session).await.unwrap();
    assert!(principal.is_none());

    Ok(())
}
