use payloads::{PackageCategory, PackageId, catalog::PackageFilter};
use reqwest::StatusCode;

use test_helpers::{assert_status_code, spawn_app};

#[tokio::test]
async fn list_and_fetch_packages() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let packages = app.client.get_packages().await?;
    assert_eq!(packages.len(), 10);

    let package = app.client.get_package(PackageId(7)).await?;
    assert!(package.is_unlimited());
    assert_eq!(package.quota_label(), "Unlimited");

    Ok(())
}

#[tokio::test]
async fn packages_by_category() -> anyhow::Result<()> {
    let app = spawn_app().await;

    for category in PackageCategory::ALL {
        let packages = app.client.get_packages_by_category(category).await?;
        assert!(!packages.is_empty());
        assert!(packages.iter().all(|p| p.category == category));
    }

    let unlimited = app
        .client
        .get_packages_by_category(PackageCategory::Unlimited)
        .await?;
    let mut ids: Vec<_> = unlimited.iter().map(|p| p.id).collect();
    ids.sort();
    assert_eq!(ids, vec![PackageId(7), PackageId(8)]);

    Ok(())
}

#[tokio::test]
async fn missing_package() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let result = app.client.get_package(PackageId(404)).await;
    assert_status_code(result, StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
async fn default_filter_sorts_the_live_catalog_by_price() -> anyhow::Result<()>
{
    let app = spawn_app().await;

    let catalog = app.client.get_packages().await?;
    let sorted = PackageFilter::default().apply(&catalog);
    assert_eq!(sorted.len(), catalog.len());
    assert!(sorted.windows(2).all(|w| w[0].price <= w[1].price));

    Ok(())
}
