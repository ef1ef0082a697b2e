use axum::{
    http::{header::LOCATION, StatusCode},
    response::IntoResponse,
};
use veranda::{controller::auth::logout, model::session::principal::Principal};
use veranda_test_utils::prelude::*;

#[tokio::test]
/// Expect 307 to /login and a cleared session for an authenticated caller
async fn clears_session_and_redirects() -> Result<(), TestError> {
    let test = TestSetup::new().await?;
    Principal::insert(&test.session, &Principal::Customer { id: 1 })
        .await
        .unwrap();

    let result = logout(test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(resp.headers().get(LOCATION).unwrap(), "/login");

    let principal = Principal::get(&test.session).await.unwrap();
    assert!(principal.is_none());

    Ok(())
}

#[tokio::test]
/// Expect 307 even without session data
///
/// Clearing a session with no data in it errors in the session layer, so the
/// endpoint only clears when a principal is actually present and redirects
/// either way.
async fn redirects_without_session_data() -> Result<(), TestError> {
    let test = TestSetup::new().await?;

    let result = logout(test.session).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);

    Ok(())
}
