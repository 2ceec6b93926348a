mod customers;
mod packages;
mod phone_lines;
mod resources;
mod session;
mod transactions;

use test_helpers::spawn_app;

#[tokio::test]
async fn health_check() -> anyhow::Result<()> {
    let app = spawn_app().await;

    app.client.health_check().await?;

    Ok(())
}
