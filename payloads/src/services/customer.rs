use crate::{APIClient, ClientError, Customer, CustomerId, requests};

impl APIClient {
    /// Look up a customer by id.
    ///
    /// The resource API answers id queries with a collection, so an empty
    /// result is reported as [`ClientError::NotFound`].
    pub async fn get_customer(
        &self,
        customer_id: CustomerId,
    ) -> Result<Customer, ClientError> {
        let customers: Vec<Customer> =
            self.get(&format!("/customers?id={customer_id}")).await?;
        customers
            .into_iter()
            .next()
            .ok_or(ClientError::NotFound("Customer"))
    }

    pub async fn update_customer(
        &self,
        customer_id: CustomerId,
        details: &requests::CustomerUpdate,
    ) -> Result<Customer, ClientError> {
        self.patch(&format!("/customers/{customer_id}"), details)
            .await
    }
}
