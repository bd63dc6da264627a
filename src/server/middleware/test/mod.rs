use serenity::all::Http;
use test_utils::builder::TestBuilder;

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::{
        auth::{AuthGuard, Permission},
        session::{AuthSession, CsrfSession},
    },
};

/// Expected: The stored user id is read back unchanged, including values above 2^53
#[tokio::test]
async fn stores_and_reads_user_id() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let session = test.session().await.unwrap();

    let auth_session = AuthSession::new(session);
    auth_session.set_user_id(987_654_321_987_654_321).await?;

    assert_eq!(
        auth_session.get_user_id().await?,
        Some(987_654_321_987_654_321)
    );

    Ok(())
}

/// Expected: Ok(None) when nobody logged in
#[tokio::test]
async fn returns_none_without_login() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let session = test.session().await.unwrap();

    assert_eq!(AuthSession::new(session).get_user_id().await?, None);

    Ok(())
}

/// Expected: Clearing the session logs the user out
#[tokio::test]
async fn clear_removes_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let session = test.session().await.unwrap();

    let auth_session = AuthSession::new(session);
    auth_session.set_user_id(42).await?;
    auth_session.clear().await;

    assert_eq!(auth_session.get_user_id().await?, None);

    Ok(())
}

/// Expected: The CSRF token can only be taken once
#[tokio::test]
async fn csrf_token_is_single_use() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let session = test.session().await.unwrap();

    let csrf_session = CsrfSession::new(session);
    csrf_session.set_token("state-token".to_string()).await?;

    assert_eq!(
        csrf_session.take_token().await?,
        Some("state-token".to_string())
    );
    assert_eq!(csrf_session.take_token().await?, None);

    Ok(())
}

/// Expected: Err(UserNotInSession) when nobody logged in
#[tokio::test]
async fn require_user_fails_without_login() {
    let mut test = TestBuilder::new().build().await.unwrap();
    let session = test.session().await.unwrap();
    let http = Http::new("");

    let result = AuthGuard::new(&http, session).require_user().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));
}

#[tokio::test]
async fn require_user_returns_logged_in_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let session = test.session().await.unwrap();
    let http = Http::new("");

    AuthSession::new(session).set_user_id(42).await?;

    assert_eq!(AuthGuard::new(&http, session).require_user().await?, 42);

    Ok(())
}

/// Expected: Err(BadRequest) for guild id 0, before Discord is asked about it
#[tokio::test]
async fn require_rejects_zero_guild() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let session = test.session().await.unwrap();
    let http = Http::new("");

    AuthSession::new(session).set_user_id(42).await?;

    let result = AuthGuard::new(&http, session)
        .require(0, Permission::Moderate)
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
