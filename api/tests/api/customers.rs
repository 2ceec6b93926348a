use payloads::{ClientError, CustomerId, requests};
use reqwest::StatusCode;

use test_helpers::{assert_status_code, spawn_app};

#[tokio::test]
async fn get_seeded_customer() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let customer = app.client.get_customer(CustomerId(1)).await?;
    assert_eq!(customer.id, CustomerId(1));
    assert_eq!(customer.name, "Demo User");
    assert_eq!(customer.initial(), "D");

    Ok(())
}

#[tokio::test]
async fn missing_customer_is_not_found() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let result = app.client.get_customer(CustomerId(999)).await;
    match result {
        Err(ClientError::NotFound(entity)) => assert_eq!(entity, "Customer"),
        other => panic!("Expected NotFound, got {other:?}"),
    }
    assert_eq!(
        app.client
            .get_customer(CustomerId(999))
            .await
            .unwrap_err()
            .to_string(),
        "Customer not found"
    );

    Ok(())
}

#[tokio::test]
async fn update_profile() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let update =
        requests::CustomerUpdate::from_form("  Budi Santoso ", "budi@example.com")
            .unwrap();
    let updated = app.client.update_customer(CustomerId(1), &update).await?;
    assert_eq!(updated.name, "Budi Santoso");
    assert_eq!(updated.email, "budi@example.com");

    // untouched fields survive the merge
    let fetched = app.client.get_customer(CustomerId(1)).await?;
    assert_eq!(fetched, updated);

    Ok(())
}

#[tokio::test]
async fn update_missing_customer() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let update = requests::CustomerUpdate {
        name: Some("Nobody".into()),
        email: None,
    };
    let result = app.client.update_customer(CustomerId(42), &update).await;
    assert_status_code(result, StatusCode::NOT_FOUND);

    Ok(())
}
