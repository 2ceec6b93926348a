use crate::{APIClient, ClientError, Package, PackageCategory, PackageId};

impl APIClient {
    /// The full catalog.
    pub async fn get_packages(&self) -> Result<Vec<Package>, ClientError> {
        self.get("/packages").await
    }

    pub async fn get_package(
        &self,
        package_id: PackageId,
    ) -> Result<Package, ClientError> {
        self.get(&format!("/packages/{package_id}")).await
    }

    pub async fn get_packages_by_category(
        &self,
        category: PackageCategory,
    ) -> Result<Vec<Package>, ClientError> {
        self.get(&format!("/packages?category={category}")).await
    }
}
