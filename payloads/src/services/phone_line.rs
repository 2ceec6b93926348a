use crate::{
    APIClient, ClientError, CustomerId, PhoneLine, PhoneLineId, requests,
};

impl APIClient {
    pub async fn get_phone_lines(
        &self,
        customer_id: CustomerId,
    ) -> Result<Vec<PhoneLine>, ClientError> {
        self.get(&format!("/phoneLines?customerId={customer_id}"))
            .await
    }

    pub async fn add_phone_line(
        &self,
        details: &requests::NewPhoneLine,
    ) -> Result<PhoneLine, ClientError> {
        self.post("/phoneLines", details).await
    }

    pub async fn update_phone_line(
        &self,
        phone_line_id: PhoneLineId,
        details: &requests::PhoneLineUpdate,
    ) -> Result<PhoneLine, ClientError> {
        self.patch(&format!("/phoneLines/{phone_line_id}"), details)
            .await
    }

    pub async fn delete_phone_line(
        &self,
        phone_line_id: PhoneLineId,
    ) -> Result<(), ClientError> {
        self.delete(&format!("/phoneLines/{phone_line_id}")).await
    }
}
