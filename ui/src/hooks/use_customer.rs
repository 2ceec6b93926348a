use payloads::requests::{CustomerUpdate, NewPhoneLine, PhoneLineUpdate};
use payloads::{Customer, CustomerId, PhoneLine, PhoneLineId, PhoneLineStatus};
use yew::prelude::*;

use super::{
    FetchState, MutationState, Refetch, first_error, run_mutation, use_fetch,
    use_mutation_state,
};
use crate::get_api_client;

/// A customer record and their phone lines, with the mutations the account
/// pages need. Each mutation resolves only after the affected data has
/// been fetched again.
#[derive(Clone, PartialEq)]
pub struct CustomerHandle {
    pub customer_id: CustomerId,
    pub customer: FetchState<Customer>,
    pub phone_lines: FetchState<Vec<PhoneLine>>,
    /// Either fetch or a mutation in progress.
    pub is_loading: bool,
    pub error: Option<String>,
    customer_refetch: Refetch,
    lines_refetch: Refetch,
    mutation: MutationState,
}

impl CustomerHandle {
    pub fn lines(&self) -> &[PhoneLine] {
        self.phone_lines.as_ref().map(Vec::as_slice).unwrap_or_default()
    }

    pub fn active_lines(&self) -> Vec<PhoneLine> {
        self.lines()
            .iter()
            .filter(|l| l.status == PhoneLineStatus::Active)
            .cloned()
            .collect()
    }

    /// Register a new, active line. The number is validated first and sent
    /// in normalized form.
    pub async fn add_phone_line(
        &self,
        phone_number: &str,
    ) -> Result<PhoneLine, String> {
        let client = get_api_client();
        let request = NewPhoneLine::checked(self.customer_id, phone_number)
            .map_err(str::to_string)
            .map(|body| async move { client.add_phone_line(&body).await });
        run_mutation(request, &self.lines_refetch, self.mutation.reporter())
            .await
    }

    pub async fn update_phone_line(
        &self,
        phone_line_id: PhoneLineId,
        status: PhoneLineStatus,
    ) -> Result<PhoneLine, String> {
        let client = get_api_client();
        let body = PhoneLineUpdate::status(status);
        let request = Ok(async move {
            client.update_phone_line(phone_line_id, &body).await
        });
        run_mutation(request, &self.lines_refetch, self.mutation.reporter())
            .await
    }

    pub async fn delete_phone_line(
        &self,
        phone_line_id: PhoneLineId,
    ) -> Result<(), String> {
        let client = get_api_client();
        let request =
            Ok(async move { client.delete_phone_line(phone_line_id).await });
        run_mutation(request, &self.lines_refetch, self.mutation.reporter())
            .await
    }

    /// Validate and save the edit-profile form.
    pub async fn update_customer(
        &self,
        name: &str,
        email: &str,
    ) -> Result<Customer, String> {
        let client = get_api_client();
        let customer_id = self.customer_id;
        let request = CustomerUpdate::from_form(name, email)
            .map_err(str::to_string)
            .map(|body| async move {
                client.update_customer(customer_id, &body).await
            });
        run_mutation(request, &self.customer_refetch, self.mutation.reporter())
            .await
    }
}

#[hook]
pub fn use_customer(customer_id: CustomerId) -> CustomerHandle {
    let customer = use_fetch(customer_id, move || async move {
        get_api_client()
            .get_customer(customer_id)
            .await
            .map_err(|e| e.to_string())
    });
    let phone_lines = use_fetch(customer_id, move || async move {
        get_api_client()
            .get_phone_lines(customer_id)
            .await
            .map_err(|e| e.to_string())
    });
    let mutation = use_mutation_state();

    let is_loading =
        customer.is_loading || phone_lines.is_loading || *mutation.busy;
    let error = first_error([
        (*mutation.error).as_ref(),
        customer.error.as_ref(),
        phone_lines.error.as_ref(),
    ]);

    CustomerHandle {
        customer_id,
        customer: customer.data,
        phone_lines: phone_lines.data,
        is_loading,
        error,
        customer_refetch: customer.refetch,
        lines_refetch: phone_lines.refetch,
        mutation,
    }
}
