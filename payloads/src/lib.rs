pub mod api_client;
pub mod catalog;
pub mod currency;
pub mod requests;
mod services;
pub mod session;

pub use api_client::{APIClient, ClientError};

use derive_more::Display;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Id type wrappers help ensure we don't mix up ids for different
/// collections. They serialize as bare numbers, matching the resource API.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    Serialize,
    Deserialize,
)]
#[serde(transparent)]
pub struct CustomerId(pub u64);

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    Serialize,
    Deserialize,
)]
#[serde(transparent)]
pub struct PhoneLineId(pub u64);

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    Serialize,
    Deserialize,
)]
#[serde(transparent)]
pub struct PackageId(pub u64);

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    Serialize,
    Deserialize,
)]
#[serde(transparent)]
pub struct TransactionId(pub u64);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub email: String,
    pub registration_date: Timestamp,
}

impl Customer {
    /// Uppercased first letter of the name, for avatar placeholders.
    pub fn initial(&self) -> String {
        self.name
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Display,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum PhoneLineStatus {
    #[default]
    #[display("active")]
    Active,
    #[display("inactive")]
    Inactive,
    #[display("suspended")]
    Suspended,
}

impl PhoneLineStatus {
    pub const ALL: [PhoneLineStatus; 3] =
        [Self::Active, Self::Inactive, Self::Suspended];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
            Self::Suspended => "Suspended",
        }
    }

    /// Parse the wire value, as used by `<select>` elements.
    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.to_string() == value)
    }
}

/// A customer's registered phone number that can receive data packages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhoneLine {
    pub id: PhoneLineId,
    pub customer_id: CustomerId,
    pub phone_number: String,
    pub status: PhoneLineStatus,
    #[serde(default)]
    pub last_purchase_date: Option<Timestamp>,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum PackageCategory {
    #[display("starter")]
    Starter,
    #[display("regular")]
    Regular,
    #[display("premium")]
    Premium,
    #[display("unlimited")]
    Unlimited,
    #[display("special")]
    Special,
}

impl PackageCategory {
    pub const ALL: [PackageCategory; 5] = [
        Self::Starter,
        Self::Regular,
        Self::Premium,
        Self::Unlimited,
        Self::Special,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Starter => "Starter",
            Self::Regular => "Regular",
            Self::Premium => "Premium",
            Self::Unlimited => "Unlimited",
            Self::Special => "Special",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.to_string() == value)
    }
}

/// A purchasable data plan. Read-only from the storefront's perspective.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Package {
    pub id: PackageId,
    pub name: String,
    pub description: String,
    pub category: PackageCategory,
    /// Whole rupiah.
    pub price: u64,
    /// Gigabytes of data, or None for unlimited.
    pub data_quota: Option<u32>,
    pub validity_days: u32,
    #[serde(default)]
    pub features: Vec<String>,
}

impl Package {
    pub fn is_unlimited(&self) -> bool {
        self.data_quota.is_none()
    }

    pub fn quota_label(&self) -> String {
        match self.data_quota {
            Some(gb) => format!("{gb}GB"),
            None => "Unlimited".into(),
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    #[display("completed")]
    Completed,
    #[display("pending")]
    Pending,
    #[display("failed")]
    Failed,
    #[display("refunded")]
    Refunded,
}

impl TransactionStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Completed => "Completed",
            Self::Pending => "Pending",
            Self::Failed => "Failed",
            Self::Refunded => "Refunded",
        }
    }
}

/// A record of a package purchase against a phone line. Immutable once
/// created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: TransactionId,
    pub customer_id: CustomerId,
    pub phone_line_id: PhoneLineId,
    pub package_id: PackageId,
    pub amount_paid: u64,
    pub purchase_date: Timestamp,
    pub status: TransactionStatus,
}
