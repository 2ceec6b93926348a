//! The demo dataset the store starts with when no seed file is given.
//!
//! Records are built from the `payloads` types so the stored JSON always has
//! the shape the storefront expects.

use jiff::Timestamp;
use payloads::{
    Customer, CustomerId, Package, PackageCategory, PackageId, PhoneLine,
    PhoneLineId, PhoneLineStatus, Transaction, TransactionId,
    TransactionStatus,
};
use serde::Serialize;

use super::{Database, Record, into_object};

// 2024-01-15T00:00:00Z
const REGISTERED_DEMO: Timestamp = Timestamp::constant(1_705_276_800, 0);
// 2024-06-01T00:00:00Z
const REGISTERED_SECOND: Timestamp = Timestamp::constant(1_717_200_000, 0);
// 2025-01-10T09:30:00Z
const PURCHASED_FIRST: Timestamp = Timestamp::constant(1_736_501_400, 0);
// 2025-02-03T14:00:00Z
const PURCHASED_SECOND: Timestamp = Timestamp::constant(1_738_591_200, 0);
// 2025-02-20T08:15:00Z
const PURCHASED_THIRD: Timestamp = Timestamp::constant(1_740_039_300, 0);

fn record(value: impl Serialize) -> anyhow::Result<Record> {
    Ok(into_object(serde_json::to_value(value)?)?)
}

fn records<T: Serialize>(
    values: impl IntoIterator<Item = T>,
) -> anyhow::Result<Vec<Record>> {
    values.into_iter().map(record).collect()
}

pub fn demo_customers() -> Vec<Customer> {
    vec![
        Customer {
            id: CustomerId(1),
            name: "Demo User".into(),
            email: "demo@example.com".into(),
            registration_date: REGISTERED_DEMO,
        },
        Customer {
            id: CustomerId(2),
            name: "Siti Rahma".into(),
            email: "siti@example.com".into(),
            registration_date: REGISTERED_SECOND,
        },
    ]
}

pub fn demo_phone_lines() -> Vec<PhoneLine> {
    vec![
        PhoneLine {
            id: PhoneLineId(1),
            customer_id: CustomerId(1),
            phone_number: "+6281298765432".into(),
            status: PhoneLineStatus::Active,
            last_purchase_date: Some(PURCHASED_THIRD),
        },
        PhoneLine {
            id: PhoneLineId(2),
            customer_id: CustomerId(1),
            phone_number: "+6285712345678".into(),
            status: PhoneLineStatus::Inactive,
            last_purchase_date: Some(PURCHASED_SECOND),
        },
    ]
}

fn package(
    id: u64,
    name: &str,
    description: &str,
    category: PackageCategory,
    price: u64,
    data_quota: Option<u32>,
    validity_days: u32,
    features: &[&str],
) -> Package {
    Package {
        id: PackageId(id),
        name: name.into(),
        description: description.into(),
        category,
        price,
        data_quota,
        validity_days,
        features: features.iter().map(|f| f.to_string()).collect(),
    }
}

pub fn demo_packages() -> Vec<Package> {
    use PackageCategory::*;
    vec![
        package(
            1,
            "Starter 2GB",
            "A small top-up for light browsing and chat",
            Starter,
            15_000,
            Some(2),
            7,
            &["4G/5G access", "Chat apps included"],
        ),
        package(
            2,
            "Starter 5GB",
            "Enough data for a week of social media",
            Starter,
            25_000,
            Some(5),
            14,
            &["4G/5G access", "Chat apps included"],
        ),
        package(
            3,
            "Regular 15GB",
            "Everyday data for work and study",
            Regular,
            50_000,
            Some(15),
            30,
            &["4G/5G access", "Hotspot allowed"],
        ),
        package(
            4,
            "Regular 25GB",
            "More room for video calls and music streaming",
            Regular,
            75_000,
            Some(25),
            30,
            &["4G/5G access", "Hotspot allowed", "Music streaming bonus"],
        ),
        package(
            5,
            "Premium 50GB",
            "Large quota with priority network access",
            Premium,
            120_000,
            Some(50),
            30,
            &["Priority network", "Hotspot allowed", "Video streaming bonus"],
        ),
        package(
            6,
            "Premium 100GB",
            "For heavy users who stream and game daily",
            Premium,
            200_000,
            Some(100),
            30,
            &["Priority network", "Gaming boost", "Video streaming bonus"],
        ),
        package(
            7,
            "Unlimited Monthly",
            "No quota worries for a whole month",
            Unlimited,
            150_000,
            None,
            30,
            &["Unlimited data", "Fair usage policy applies"],
        ),
        package(
            8,
            "Unlimited Weekly",
            "Unlimited data for a busy week",
            Unlimited,
            60_000,
            None,
            7,
            &["Unlimited data", "Fair usage policy applies"],
        ),
        package(
            9,
            "Night Owl 20GB",
            "Special quota usable between midnight and 7am",
            Special,
            20_000,
            Some(20),
            30,
            &["Night-time only", "Streaming friendly"],
        ),
        package(
            10,
            "Weekend Pass 10GB",
            "Special weekend bundle for Saturday and Sunday",
            Special,
            30_000,
            Some(10),
            60,
            &["Weekends only"],
        ),
    ]
}

pub fn demo_transactions() -> Vec<Transaction> {
    vec![
        Transaction {
            id: TransactionId(1),
            customer_id: CustomerId(1),
            phone_line_id: PhoneLineId(1),
            package_id: PackageId(3),
            amount_paid: 50_000,
            purchase_date: PURCHASED_FIRST,
            status: TransactionStatus::Completed,
        },
        Transaction {
            id: TransactionId(2),
            customer_id: CustomerId(1),
            phone_line_id: PhoneLineId(2),
            package_id: PackageId(1),
            amount_paid: 15_000,
            purchase_date: PURCHASED_SECOND,
            status: TransactionStatus::Refunded,
        },
        Transaction {
            id: TransactionId(3),
            customer_id: CustomerId(1),
            phone_line_id: PhoneLineId(1),
            package_id: PackageId(7),
            amount_paid: 150_000,
            purchase_date: PURCHASED_THIRD,
            status: TransactionStatus::Completed,
        },
    ]
}

/// Two customers (the demo customer with two lines, a second one with
/// none), ten packages across every category, and some purchase history.
pub fn demo_database() -> anyhow::Result<Database> {
    Ok(Database {
        customers: records(demo_customers())?,
        phone_lines: records(demo_phone_lines())?,
        packages: records(demo_packages())?,
        transactions: records(demo_transactions())?,
    })
}
