use jiff::Timestamp;
use payloads::requests::{CheckoutDetails, NewTransaction};
use payloads::{CustomerId, Transaction, TransactionId};
use yew::prelude::*;

use super::{
    FetchHookReturn, FetchState, MutationState, Refetch, first_error,
    run_mutation, use_fetch, use_mutation_state,
};
use crate::get_api_client;

/// A customer's purchase history and the checkout action.
#[derive(Clone, PartialEq)]
pub struct TransactionsHandle {
    pub customer_id: CustomerId,
    pub transactions: FetchState<Vec<Transaction>>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub refetch: Refetch,
    creating: MutationState,
}

impl TransactionsHandle {
    /// Newest first.
    pub fn sorted(&self) -> Vec<Transaction> {
        let mut transactions =
            self.transactions.as_ref().cloned().unwrap_or_default();
        transactions.sort_by(|a, b| {
            b.purchase_date
                .cmp(&a.purchase_date)
                .then_with(|| b.id.cmp(&a.id))
        });
        transactions
    }

    pub fn is_creating(&self) -> bool {
        *self.creating.busy
    }

    /// Record a completed purchase for this customer. Resolves once the
    /// history has been fetched again, so it already contains the new
    /// transaction.
    pub async fn create(
        &self,
        details: CheckoutDetails,
    ) -> Result<Transaction, String> {
        let client = get_api_client();
        let body =
            NewTransaction::completed(self.customer_id, details, Timestamp::now());
        let request = Ok(async move { client.create_transaction(&body).await });
        let created =
            run_mutation(request, &self.refetch, self.creating.reporter())
                .await?;
        tracing::info!(id = %created.id, "purchase recorded");
        Ok(created)
    }
}

#[hook]
pub fn use_transactions(customer_id: CustomerId) -> TransactionsHandle {
    let transactions = use_fetch(customer_id, move || async move {
        get_api_client()
            .get_transactions(customer_id)
            .await
            .map_err(|e| e.to_string())
    });
    let creating = use_mutation_state();

    let error = first_error([
        (*creating.error).as_ref(),
        transactions.error.as_ref(),
    ]);

    TransactionsHandle {
        customer_id,
        transactions: transactions.data,
        is_loading: transactions.is_loading || *creating.busy,
        error,
        refetch: transactions.refetch,
        creating,
    }
}

/// A single transaction, for the confirmation page.
#[hook]
pub fn use_transaction(
    transaction_id: TransactionId,
) -> FetchHookReturn<Transaction> {
    use_fetch(transaction_id, move || async move {
        get_api_client()
            .get_transaction(transaction_id)
            .await
            .map_err(|e| e.to_string())
    })
}
