use payloads::session::{
    self, AuthError, AuthState, MemorySessionStorage, SessionStorage,
};
use payloads::{CustomerId, requests};

use test_helpers::{demo_credentials, spawn_app, spawn_empty_app};

#[tokio::test]
async fn demo_login_persists_the_customer() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let (customer, storage) = app.sign_in_demo().await?;
    assert_eq!(customer.id, CustomerId(1));
    assert_eq!(storage.customer_id(), Some(CustomerId(1)));

    Ok(())
}

#[tokio::test]
async fn wrong_credentials_persist_nothing() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let storage = app.fresh_session();

    let credentials = requests::LoginCredentials {
        username: "x".into(),
        password: "y".into(),
    };
    let result = session::login(&app.client, &storage, &credentials).await;
    match result {
        Err(e @ AuthError::InvalidCredentials) => assert_eq!(
            e.to_string(),
            "Invalid credentials. Use username: demo, password: demo"
        ),
        other => panic!("Expected InvalidCredentials, got {other:?}"),
    }
    assert_eq!(storage.customer_id(), None);

    Ok(())
}

#[tokio::test]
async fn login_fails_when_the_demo_customer_is_missing() -> anyhow::Result<()>
{
    let app = spawn_empty_app().await;
    let storage = app.fresh_session();

    let result =
        session::login(&app.client, &storage, &demo_credentials()).await;
    assert!(matches!(
        result,
        Err(AuthError::Client(payloads::ClientError::NotFound("Customer")))
    ));
    assert_eq!(storage.customer_id(), None);

    Ok(())
}

#[tokio::test]
async fn restore_persisted_session() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let (_, storage) = app.sign_in_demo().await?;

    // a reload starts from the persisted id alone
    let state = session::restore(&app.client, &storage).await;
    let customer = state.customer().expect("session restored");
    assert_eq!(customer.name, "Demo User");

    Ok(())
}

#[tokio::test]
async fn restore_of_unknown_customer_clears_storage() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let storage = MemorySessionStorage::with_customer_id(CustomerId(9_999));

    let state = session::restore(&app.client, &storage).await;
    assert_eq!(state, AuthState::Unauthenticated);
    assert_eq!(storage.customer_id(), None);

    Ok(())
}

#[tokio::test]
async fn restore_without_a_session() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let state = session::restore(&app.client, &app.fresh_session()).await;
    assert_eq!(state, AuthState::Unauthenticated);

    Ok(())
}

#[tokio::test]
async fn logout_forgets_the_session() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let (_, storage) = app.sign_in_demo().await?;

    assert_eq!(session::logout(&storage), AuthState::Unauthenticated);
    assert_eq!(storage.customer_id(), None);
    assert_eq!(
        session::restore(&app.client, &storage).await,
        AuthState::Unauthenticated
    );

    Ok(())
}
