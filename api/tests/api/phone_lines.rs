use payloads::{CustomerId, PhoneLineId, PhoneLineStatus, requests};
use reqwest::StatusCode;

use test_helpers::{
    CUSTOMER_WITHOUT_LINES, DEMO_INACTIVE_LINE, assert_status_code, spawn_app,
};

#[tokio::test]
async fn lines_are_scoped_to_their_customer() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let lines = app.client.get_phone_lines(CustomerId(1)).await?;
    assert_eq!(lines.len(), 2);
    assert!(lines.iter().all(|l| l.customer_id == CustomerId(1)));

    let lines = app.client.get_phone_lines(CUSTOMER_WITHOUT_LINES).await?;
    assert!(lines.is_empty());

    Ok(())
}

#[tokio::test]
async fn add_line_for_customer_without_lines() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let details =
        requests::NewPhoneLine::active(CUSTOMER_WITHOUT_LINES, "0812-3456-7890");
    let created = app.client.add_phone_line(&details).await?;
    assert_eq!(created.phone_number, "081234567890");
    assert_eq!(created.status, PhoneLineStatus::Active);
    assert_eq!(created.last_purchase_date, None);
    // two lines are seeded, so the next id is 3
    assert_eq!(created.id, PhoneLineId(3));

    let lines = app.client.get_phone_lines(CUSTOMER_WITHOUT_LINES).await?;
    assert_eq!(lines, vec![created]);

    Ok(())
}

#[tokio::test]
async fn add_line_for_unknown_customer() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let details = requests::NewPhoneLine::active(CustomerId(77), "081234567890");
    match app.client.add_phone_line(&details).await {
        Err(payloads::ClientError::APIError(code, message)) => {
            assert_eq!(code, StatusCode::BAD_REQUEST);
            assert_eq!(message, "Customer 77 does not exist");
        }
        other => panic!("Expected APIError, got {other:?}"),
    }

    Ok(())
}

#[tokio::test]
async fn toggle_line_status() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let update = requests::PhoneLineUpdate::status(PhoneLineStatus::Active);
    let updated = app
        .client
        .update_phone_line(DEMO_INACTIVE_LINE, &update)
        .await?;
    assert_eq!(updated.status, PhoneLineStatus::Active);
    // the number is untouched by a status-only update
    assert_eq!(updated.phone_number, "+6285712345678");

    Ok(())
}

#[tokio::test]
async fn delete_line() -> anyhow::Result<()> {
    let app = spawn_app().await;

    app.client.delete_phone_line(DEMO_INACTIVE_LINE).await?;
    let lines = app.client.get_phone_lines(CustomerId(1)).await?;
    assert_eq!(lines.len(), 1);
    assert!(lines.iter().all(|l| l.id != DEMO_INACTIVE_LINE));

    let result = app.client.delete_phone_line(DEMO_INACTIVE_LINE).await;
    assert_status_code(result, StatusCode::NOT_FOUND);

    Ok(())
}
