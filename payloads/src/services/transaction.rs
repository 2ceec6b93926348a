use crate::{
    APIClient, ClientError, CustomerId, Transaction, TransactionId, requests,
};

impl APIClient {
    pub async fn get_transactions(
        &self,
        customer_id: CustomerId,
    ) -> Result<Vec<Transaction>, ClientError> {
        self.get(&format!("/transactions?customerId={customer_id}"))
            .await
    }

    pub async fn create_transaction(
        &self,
        details: &requests::NewTransaction,
    ) -> Result<Transaction, ClientError> {
        self.post("/transactions", details).await
    }

    pub async fn get_transaction(
        &self,
        transaction_id: TransactionId,
    ) -> Result<Transaction, ClientError> {
        self.get(&format!("/transactions/{transaction_id}")).await
    }
}
