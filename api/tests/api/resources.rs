//! Raw resource routes, below the typed client services.

use payloads::PhoneLine;
use reqwest::{Method, StatusCode};
use serde_json::{Value, json};

use test_helpers::{spawn_app, spawn_empty_app};

#[tokio::test]
async fn unknown_collection() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let result = app
        .client
        .request::<(), Value>(Method::GET, "/invoices", None)
        .await;
    match result {
        Err(payloads::ClientError::APIError(code, message)) => {
            assert_eq!(code, StatusCode::NOT_FOUND);
            assert_eq!(message, "Unknown collection: invoices");
        }
        other => panic!("Expected APIError, got {other:?}"),
    }

    Ok(())
}

#[tokio::test]
async fn reserved_parameters_are_ignored() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let lines: Vec<PhoneLine> = app
        .client
        .request::<(), _>(
            Method::GET,
            "/phoneLines?customerId=1&status=active&_sort=id",
            None,
        )
        .await?;
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].phone_number, "+6281298765432");

    Ok(())
}

#[tokio::test]
async fn malformed_body_answers_with_a_message() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let result = app
        .client
        .request::<_, Value>(Method::POST, "/customers", Some(&json!([1, 2])))
        .await;
    match result {
        Err(payloads::ClientError::APIError(code, message)) => {
            assert_eq!(code, StatusCode::BAD_REQUEST);
            assert_eq!(message, "Request body must be a JSON object");
        }
        other => panic!("Expected APIError, got {other:?}"),
    }

    Ok(())
}

#[tokio::test]
async fn ids_start_at_one_and_ignore_the_client() -> anyhow::Result<()> {
    let app = spawn_empty_app().await;

    let created: Value = app
        .client
        .request(
            Method::POST,
            "/customers",
            Some(&json!({"id": 50, "name": "First"})),
        )
        .await?;
    assert_eq!(created["id"], 1);

    let deleted: Value = app
        .client
        .request::<(), _>(Method::DELETE, "/customers/1", None)
        .await?;
    assert_eq!(deleted, json!({}));

    Ok(())
}
