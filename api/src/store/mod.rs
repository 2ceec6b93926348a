//! In-memory resource store for the storefront API.
//!
//! ## Design Decisions
//!
//! ### Generic records
//! - **JSON objects, not typed rows**: Records are kept as JSON objects so
//!   the store behaves like a generic REST resource server. Shape is owned
//!   by the client (`payloads`), the store only relies on `id` and the
//!   foreign key fields it checks.
//! - **Numeric ids**: New records get `max(id) + 1` within their
//!   collection. A client-supplied `id` is ignored on create and on patch.
//!
//! ### Query semantics
//! - **Equality filters**: Every query parameter is an equality filter on a
//!   top-level field, compared by string form (`?customerId=1` matches the
//!   number `1`). Parameters starting with `_` are reserved and ignored.
//!
//! ### Integrity
//! - **Checked on create**: Phone lines must reference an existing customer.
//!   Transactions must reference an existing customer, package, and a phone
//!   line owned by that customer. Deletes do not cascade.
//! - **Purchase bookkeeping**: Creating a transaction stamps the phone
//!   line's `lastPurchaseDate` with the transaction's `purchaseDate`.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tokio::sync::RwLock;

pub mod seed;

pub type Record = Map<String, Value>;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display,
)]
pub enum Collection {
    #[display("customers")]
    Customers,
    #[display("phoneLines")]
    PhoneLines,
    #[display("packages")]
    Packages,
    #[display("transactions")]
    Transactions,
}

impl Collection {
    pub const ALL: [Collection; 4] = [
        Self::Customers,
        Self::PhoneLines,
        Self::Packages,
        Self::Transactions,
    ];

    pub fn parse(name: &str) -> Result<Self, StoreError> {
        Self::ALL
            .into_iter()
            .find(|c| c.to_string() == name)
            .ok_or_else(|| StoreError::UnknownCollection(name.to_string()))
    }

    /// Singular, human-facing name used in error messages.
    fn noun(&self) -> &'static str {
        match self {
            Self::Customers => "Customer",
            Self::PhoneLines => "Phone line",
            Self::Packages => "Package",
            Self::Transactions => "Transaction",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Unknown collection: {0}")]
    UnknownCollection(String),
    #[error("{0} {1} not found")]
    RecordNotFound(&'static str, u64),
    #[error("Request body must be a JSON object")]
    NotAnObject,
    #[error("Field {0} must be a numeric id")]
    MissingReference(&'static str),
    #[error("{0} {1} does not exist")]
    DanglingReference(&'static str, u64),
    #[error("Phone line {phone_line} does not belong to customer {customer}")]
    ForeignPhoneLine { phone_line: u64, customer: u64 },
}

/// All collections, as they appear in a seed file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Database {
    #[serde(default)]
    pub customers: Vec<Record>,
    #[serde(default, rename = "phoneLines")]
    pub phone_lines: Vec<Record>,
    #[serde(default)]
    pub packages: Vec<Record>,
    #[serde(default)]
    pub transactions: Vec<Record>,
}

impl Database {
    fn records(&self, collection: Collection) -> &Vec<Record> {
        match collection {
            Collection::Customers => &self.customers,
            Collection::PhoneLines => &self.phone_lines,
            Collection::Packages => &self.packages,
            Collection::Transactions => &self.transactions,
        }
    }

    fn records_mut(&mut self, collection: Collection) -> &mut Vec<Record> {
        match collection {
            Collection::Customers => &mut self.customers,
            Collection::PhoneLines => &mut self.phone_lines,
            Collection::Packages => &mut self.packages,
            Collection::Transactions => &mut self.transactions,
        }
    }

    fn find(&self, collection: Collection, id: u64) -> Option<&Record> {
        self.records(collection)
            .iter()
            .find(|r| record_id(r) == Some(id))
    }

    fn find_mut(
        &mut self,
        collection: Collection,
        id: u64,
    ) -> Option<&mut Record> {
        self.records_mut(collection)
            .iter_mut()
            .find(|r| record_id(r) == Some(id))
    }

    fn next_id(&self, collection: Collection) -> u64 {
        self.records(collection)
            .iter()
            .filter_map(record_id)
            .max()
            .unwrap_or(0)
            + 1
    }

    /// Fetch a referenced record, reporting which reference was broken.
    fn referenced(
        &self,
        record: &Record,
        field: &'static str,
        collection: Collection,
    ) -> Result<&Record, StoreError> {
        let id = record
            .get(field)
            .and_then(Value::as_u64)
            .ok_or(StoreError::MissingReference(field))?;
        self.find(collection, id)
            .ok_or(StoreError::DanglingReference(collection.noun(), id))
    }

    fn check_references(
        &self,
        collection: Collection,
        record: &Record,
    ) -> Result<(), StoreError> {
        match collection {
            Collection::PhoneLines => {
                self.referenced(record, "customerId", Collection::Customers)?;
            }
            Collection::Transactions => {
                let customer = self.referenced(
                    record,
                    "customerId",
                    Collection::Customers,
                )?;
                let line = self.referenced(
                    record,
                    "phoneLineId",
                    Collection::PhoneLines,
                )?;
                self.referenced(record, "packageId", Collection::Packages)?;
                let owner = line.get("customerId").and_then(Value::as_u64);
                let customer = record_id(customer).unwrap_or_default();
                if owner != Some(customer) {
                    return Err(StoreError::ForeignPhoneLine {
                        phone_line: record_id(line).unwrap_or_default(),
                        customer,
                    });
                }
            }
            Collection::Customers | Collection::Packages => {}
        }
        Ok(())
    }
}

pub fn record_id(record: &Record) -> Option<u64> {
    record.get("id").and_then(Value::as_u64)
}

/// The string form a value is compared by when filtering.
fn query_form(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn matches_filters(record: &Record, filters: &[(String, String)]) -> bool {
    filters
        .iter()
        .filter(|(field, _)| !field.starts_with('_'))
        .all(|(field, expected)| {
            record
                .get(field)
                .is_some_and(|value| query_form(value) == *expected)
        })
}

fn into_object(value: Value) -> Result<Record, StoreError> {
    match value {
        Value::Object(record) => Ok(record),
        _ => Err(StoreError::NotAnObject),
    }
}

/// Shared handle to the store. Cloning is cheap; all clones see the same
/// data.
#[derive(Debug, Clone, Default)]
pub struct ResourceStore {
    inner: Arc<RwLock<Database>>,
}

impl ResourceStore {
    pub fn new(database: Database) -> Self {
        Self {
            inner: Arc::new(RwLock::new(database)),
        }
    }

    /// Load a seed file shaped like `{"customers": [...], ...}`.
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading seed file {}", path.display()))?;
        let database: Database = serde_json::from_str(&text)
            .with_context(|| format!("parsing seed file {}", path.display()))?;
        Ok(Self::new(database))
    }

    pub async fn snapshot(&self) -> Database {
        self.inner.read().await.clone()
    }

    pub async fn list(
        &self,
        collection: Collection,
        filters: &[(String, String)],
    ) -> Vec<Record> {
        let db = self.inner.read().await;
        db.records(collection)
            .iter()
            .filter(|r| matches_filters(r, filters))
            .cloned()
            .collect()
    }

    pub async fn get(
        &self,
        collection: Collection,
        id: u64,
    ) -> Result<Record, StoreError> {
        let db = self.inner.read().await;
        db.find(collection, id)
            .cloned()
            .ok_or(StoreError::RecordNotFound(collection.noun(), id))
    }

    pub async fn create(
        &self,
        collection: Collection,
        body: Value,
    ) -> Result<Record, StoreError> {
        let mut record = into_object(body)?;
        let mut db = self.inner.write().await;
        db.check_references(collection, &record)?;

        let id = db.next_id(collection);
        record.insert("id".into(), Value::from(id));

        if collection == Collection::Transactions {
            stamp_last_purchase(&mut db, &record);
        }

        db.records_mut(collection).push(record.clone());
        tracing::debug!(%collection, id, "created record");
        Ok(record)
    }

    /// Shallow merge of `body` into the stored record.
    pub async fn patch(
        &self,
        collection: Collection,
        id: u64,
        body: Value,
    ) -> Result<Record, StoreError> {
        let mut changes = into_object(body)?;
        changes.remove("id");
        let mut db = self.inner.write().await;
        let record = db
            .find_mut(collection, id)
            .ok_or(StoreError::RecordNotFound(collection.noun(), id))?;
        record.extend(changes);
        Ok(record.clone())
    }

    pub async fn delete(
        &self,
        collection: Collection,
        id: u64,
    ) -> Result<(), StoreError> {
        let mut db = self.inner.write().await;
        let records = db.records_mut(collection);
        let before = records.len();
        records.retain(|r| record_id(r) != Some(id));
        if records.len() == before {
            return Err(StoreError::RecordNotFound(collection.noun(), id));
        }
        tracing::debug!(%collection, id, "deleted record");
        Ok(())
    }
}

fn stamp_last_purchase(db: &mut Database, transaction: &Record) {
    let (Some(line_id), Some(date)) = (
        transaction.get("phoneLineId").and_then(Value::as_u64),
        transaction.get("purchaseDate").cloned(),
    ) else {
        return;
    };
    if let Some(line) = db.find_mut(Collection::PhoneLines, line_id) {
        line.insert("lastPurchaseDate".into(), date);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn store() -> ResourceStore {
        let database: Database = serde_json::from_value(json!({
            "customers": [{ "id": 1, "name": "A" }, { "id": 2, "name": "B" }],
            "phoneLines": [
                { "id": 1, "customerId": 1, "phoneNumber": "+6281", "status": "active" }
            ],
            "packages": [{ "id": 10, "category": "starter" }],
        }))
        .unwrap();
        ResourceStore::new(database)
    }

    #[tokio::test]
    async fn filters_compare_by_string_form() {
        let store = store();
        let filters = vec![("customerId".to_string(), "1".to_string())];
        assert_eq!(store.list(Collection::PhoneLines, &filters).await.len(), 1);

        let filters = vec![("customerId".to_string(), "2".to_string())];
        assert!(store.list(Collection::PhoneLines, &filters).await.is_empty());

        let filters = vec![
            ("category".to_string(), "starter".to_string()),
            ("_sort".to_string(), "price".to_string()),
        ];
        assert_eq!(store.list(Collection::Packages, &filters).await.len(), 1);
    }

    #[tokio::test]
    async fn create_assigns_next_id_and_ignores_client_id() {
        let store = store();
        let line = store
            .create(
                Collection::PhoneLines,
                json!({ "id": 99, "customerId": 2, "phoneNumber": "+6282" }),
            )
            .await
            .unwrap();
        assert_eq!(record_id(&line), Some(2));
    }

    #[tokio::test]
    async fn create_checks_references() {
        let store = store();
        let err = store
            .create(Collection::PhoneLines, json!({ "customerId": 7 }))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Customer 7 does not exist");

        let err = store
            .create(
                Collection::Transactions,
                json!({ "customerId": 2, "phoneLineId": 1, "packageId": 10 }),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::ForeignPhoneLine { .. }));

        let err = store
            .create(Collection::Transactions, json!({ "customerId": 1 }))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::MissingReference("phoneLineId")));
    }

    #[tokio::test]
    async fn transactions_stamp_last_purchase() {
        let store = store();
        store
            .create(
                Collection::Transactions,
                json!({
                    "customerId": 1,
                    "phoneLineId": 1,
                    "packageId": 10,
                    "purchaseDate": "2025-01-01T00:00:00Z"
                }),
            )
            .await
            .unwrap();
        let line = store.get(Collection::PhoneLines, 1).await.unwrap();
        assert_eq!(line["lastPurchaseDate"], "2025-01-01T00:00:00Z");
    }

    #[tokio::test]
    async fn patch_merges_and_keeps_id() {
        let store = store();
        let customer = store
            .patch(
                Collection::Customers,
                1,
                json!({ "id": 5, "email": "a@example.com" }),
            )
            .await
            .unwrap();
        assert_eq!(customer["id"], 1);
        assert_eq!(customer["name"], "A");
        assert_eq!(customer["email"], "a@example.com");
    }

    #[tokio::test]
    async fn delete_missing_record_is_not_found() {
        let store = store();
        store.delete(Collection::PhoneLines, 1).await.unwrap();
        let err = store.delete(Collection::PhoneLines, 1).await.unwrap_err();
        assert!(matches!(err, StoreError::RecordNotFound("Phone line", 1)));
    }

    #[test]
    fn collections_parse_by_wire_name() {
        assert_eq!(
            Collection::parse("phoneLines").unwrap(),
            Collection::PhoneLines
        );
        assert!(Collection::parse("users").is_err());
    }

    #[test]
    fn non_objects_are_rejected() {
        assert!(matches!(
            into_object(json!([1, 2])),
            Err(StoreError::NotAnObject)
        ));
    }
}
