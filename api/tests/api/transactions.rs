use api::store::Collection;
use payloads::{
    CustomerId, PackageId, TransactionId, TransactionStatus, requests,
};
use reqwest::StatusCode;

use test_helpers::{
    CUSTOMER_WITHOUT_LINES, DEMO_ACTIVE_LINE, DEMO_INACTIVE_LINE,
    assert_status_code, checkout_details_a, spawn_app,
};

#[tokio::test]
async fn history_is_scoped_to_the_customer() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let history = app.client.get_transactions(CustomerId(1)).await?;
    assert_eq!(history.len(), 3);
    assert!(history.iter().all(|t| t.customer_id == CustomerId(1)));

    let history = app.client.get_transactions(CUSTOMER_WITHOUT_LINES).await?;
    assert!(history.is_empty());

    Ok(())
}

#[tokio::test]
async fn purchase_appears_in_history() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let details = checkout_details_a();
    let body = requests::NewTransaction::completed(
        CustomerId(1),
        details.clone(),
        jiff::Timestamp::now(),
    );
    let created = app.client.create_transaction(&body).await?;
    assert_eq!(created.id, TransactionId(4));
    assert_eq!(created.status, TransactionStatus::Completed);
    assert_eq!(created.amount_paid, 50_000);
    assert_eq!(Some(created.purchase_date), details.purchase_date);

    let history = app.client.get_transactions(CustomerId(1)).await?;
    assert_eq!(history.len(), 4);
    assert!(history.contains(&created));

    let fetched = app.client.get_transaction(created.id).await?;
    assert_eq!(fetched, created);

    Ok(())
}

#[tokio::test]
async fn purchase_stamps_the_phone_line() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let details = checkout_details_a();
    let body = requests::NewTransaction::completed(
        CustomerId(1),
        details.clone(),
        jiff::Timestamp::now(),
    );
    app.client.create_transaction(&body).await?;

    let lines = app.client.get_phone_lines(CustomerId(1)).await?;
    let line = lines.iter().find(|l| l.id == DEMO_ACTIVE_LINE).unwrap();
    assert_eq!(line.last_purchase_date, details.purchase_date);

    // the other line is untouched
    let other = lines.iter().find(|l| l.id == DEMO_INACTIVE_LINE).unwrap();
    assert_ne!(other.last_purchase_date, details.purchase_date);

    let stored = app.store.list(Collection::PhoneLines, &[]).await;
    assert_eq!(stored.len(), 2);

    Ok(())
}

#[tokio::test]
async fn purchase_for_someone_elses_line_is_refused() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let body = requests::NewTransaction::completed(
        CUSTOMER_WITHOUT_LINES,
        checkout_details_a(),
        jiff::Timestamp::now(),
    );
    match app.client.create_transaction(&body).await {
        Err(payloads::ClientError::APIError(code, message)) => {
            assert_eq!(code, StatusCode::BAD_REQUEST);
            assert_eq!(
                message,
                "Phone line 1 does not belong to customer 2"
            );
        }
        other => panic!("Expected APIError, got {other:?}"),
    }

    // nothing was recorded
    let history = app.client.get_transactions(CUSTOMER_WITHOUT_LINES).await?;
    assert!(history.is_empty());

    Ok(())
}

#[tokio::test]
async fn purchase_of_unknown_package_is_refused() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let mut details = checkout_details_a();
    details.package_id = PackageId(500);
    let body = requests::NewTransaction::completed(
        CustomerId(1),
        details,
        jiff::Timestamp::now(),
    );
    let result = app.client.create_transaction(&body).await;
    assert_status_code(result, StatusCode::BAD_REQUEST);

    Ok(())
}
