use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::{
    CustomerId, PackageId, PhoneLineId, PhoneLineStatus, TransactionStatus,
};

pub const PHONE_DIGITS_MIN: usize = 10;
pub const PHONE_DIGITS_MAX: usize = 15;
pub const NAME_MIN_LEN: usize = 2;
pub const NAME_MAX_LEN: usize = 50;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginCredentials {
    pub username: String,
    pub password: String,
}

/// Body for registering a phone line to a customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPhoneLine {
    pub customer_id: CustomerId,
    pub phone_number: String,
    pub status: PhoneLineStatus,
    pub last_purchase_date: Option<Timestamp>,
}

impl NewPhoneLine {
    /// A freshly added line starts active and has never been topped up.
    pub fn active(customer_id: CustomerId, phone_number: &str) -> Self {
        Self {
            customer_id,
            phone_number: normalize_phone_number(phone_number),
            status: PhoneLineStatus::Active,
            last_purchase_date: None,
        }
    }

    /// Like [`NewPhoneLine::active`], but only for a number that passes
    /// [`validate_phone_number`].
    pub fn checked(
        customer_id: CustomerId,
        phone_number: &str,
    ) -> Result<Self, &'static str> {
        match validate_phone_number(phone_number).error_message() {
            Some(message) => Err(message),
            None => Ok(Self::active(customer_id, phone_number)),
        }
    }
}

/// Partial update for a phone line. Unset fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhoneLineUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PhoneLineStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_purchase_date: Option<Timestamp>,
}

impl PhoneLineUpdate {
    pub fn status(status: PhoneLineStatus) -> Self {
        Self {
            status: Some(status),
            ..Default::default()
        }
    }
}

/// Partial update for the customer profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl CustomerUpdate {
    /// Validate the edit-profile form, returning the trimmed update or the
    /// first problem found.
    pub fn from_form(name: &str, email: &str) -> Result<Self, &'static str> {
        if let Some(msg) = validate_name(name).error_message() {
            return Err(msg);
        }
        if let Some(msg) = validate_email(email).error_message() {
            return Err(msg);
        }
        Ok(Self {
            name: Some(name.trim().to_string()),
            email: Some(email.trim().to_string()),
        })
    }
}

/// What the checkout page knows about a purchase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutDetails {
    pub phone_line_id: PhoneLineId,
    pub package_id: PackageId,
    pub amount_paid: u64,
    #[serde(default)]
    pub purchase_date: Option<Timestamp>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTransaction {
    pub customer_id: CustomerId,
    pub phone_line_id: PhoneLineId,
    pub package_id: PackageId,
    pub amount_paid: u64,
    pub purchase_date: Timestamp,
    pub status: TransactionStatus,
}

impl NewTransaction {
    /// Checkouts are recorded as completed immediately; there is no payment
    /// processing step.
    pub fn completed(
        customer_id: CustomerId,
        details: CheckoutDetails,
        now: Timestamp,
    ) -> Self {
        Self {
            customer_id,
            phone_line_id: details.phone_line_id,
            package_id: details.package_id,
            amount_paid: details.amount_paid,
            purchase_date: details.purchase_date.unwrap_or(now),
            status: TransactionStatus::Completed,
        }
    }
}

/// Validation result for phone numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhoneNumberValidation {
    Valid,
    Empty,
    InvalidFormat,
}

impl PhoneNumberValidation {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    pub fn error_message(&self) -> Option<&'static str> {
        match self {
            Self::Valid => None,
            Self::Empty => Some("Phone number is required"),
            Self::InvalidFormat => Some(
                "Phone number must be 10-15 digits, optionally starting with +",
            ),
        }
    }
}

/// Strip the separators people commonly type into phone numbers.
pub fn normalize_phone_number(phone: &str) -> String {
    phone
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect()
}

/// Validate a phone number.
///
/// Rules (after removing spaces and dashes):
/// - optional leading `+`
/// - 10-15 ASCII digits, nothing else
pub fn validate_phone_number(phone: &str) -> PhoneNumberValidation {
    let normalized = normalize_phone_number(phone);
    if normalized.is_empty() {
        return PhoneNumberValidation::Empty;
    }

    let digits = normalized.strip_prefix('+').unwrap_or(&normalized);
    if !(PHONE_DIGITS_MIN..=PHONE_DIGITS_MAX).contains(&digits.len())
        || !digits.chars().all(|c| c.is_ascii_digit())
    {
        return PhoneNumberValidation::InvalidFormat;
    }

    PhoneNumberValidation::Valid
}

/// Validation result for customer display names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameValidation {
    Valid,
    Empty,
    TooShort,
    TooLong,
}

impl NameValidation {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    pub fn error_message(&self) -> Option<&'static str> {
        match self {
            Self::Valid => None,
            Self::Empty => Some("Name is required"),
            Self::TooShort => Some("Name must be at least 2 characters"),
            Self::TooLong => Some("Name must be at most 50 characters"),
        }
    }
}

pub fn validate_name(name: &str) -> NameValidation {
    let name = name.trim();
    let len = name.chars().count();
    if len == 0 {
        NameValidation::Empty
    } else if len < NAME_MIN_LEN {
        NameValidation::TooShort
    } else if len > NAME_MAX_LEN {
        NameValidation::TooLong
    } else {
        NameValidation::Valid
    }
}

/// Validation result for email addresses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmailValidation {
    Valid,
    Empty,
    InvalidFormat,
}

impl EmailValidation {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    pub fn error_message(&self) -> Option<&'static str> {
        match self {
            Self::Valid => None,
            Self::Empty => Some("Email is required"),
            Self::InvalidFormat => Some("Email address is not valid"),
        }
    }
}

/// Validate an email address.
///
/// Only the shape is checked: `local@domain.tld`, no whitespace, exactly one
/// `@`, and a dot in the domain with something on both sides of it.
pub fn validate_email(email: &str) -> EmailValidation {
    let email = email.trim();
    if email.is_empty() {
        return EmailValidation::Empty;
    }
    if email.chars().any(char::is_whitespace) {
        return EmailValidation::InvalidFormat;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return EmailValidation::InvalidFormat;
    };
    if local.is_empty() || domain.contains('@') {
        return EmailValidation::InvalidFormat;
    }

    let has_dotted_domain = domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len());
    if !has_dotted_domain {
        return EmailValidation::InvalidFormat;
    }

    EmailValidation::Valid
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_numbers() {
        assert!(validate_phone_number("+6281234567890").is_valid());
        assert!(validate_phone_number("0812-3456-7890").is_valid());
        assert!(validate_phone_number("0812 3456 7890").is_valid());
        assert_eq!(validate_phone_number("  "), PhoneNumberValidation::Empty);
        assert_eq!(
            validate_phone_number("+62812"),
            PhoneNumberValidation::InvalidFormat
        );
        assert_eq!(
            validate_phone_number("+62812345678901234"),
            PhoneNumberValidation::InvalidFormat
        );
        assert_eq!(
            validate_phone_number("08123abc7890"),
            PhoneNumberValidation::InvalidFormat
        );
        assert_eq!(
            validate_phone_number("++6281234567890"),
            PhoneNumberValidation::InvalidFormat
        );
    }

    #[test]
    fn new_phone_line_is_active_and_normalized() {
        let line = NewPhoneLine::active(CustomerId(4), "0812-3456 7890");
        assert_eq!(line.phone_number, "081234567890");
        assert_eq!(line.status, PhoneLineStatus::Active);
        assert_eq!(line.last_purchase_date, None);

        let value = serde_json::to_value(&line).unwrap();
        assert_eq!(value["customerId"], 4);
        assert_eq!(value["status"], "active");
        assert!(value["lastPurchaseDate"].is_null());
    }

    #[test]
    fn checked_phone_line_rejects_bad_numbers() {
        assert_eq!(
            NewPhoneLine::checked(CustomerId(4), "0812"),
            Err("Phone number must be 10-15 digits, optionally starting with +")
        );
        assert_eq!(
            NewPhoneLine::checked(CustomerId(4), ""),
            Err("Phone number is required")
        );
        let line = NewPhoneLine::checked(CustomerId(4), "0812 3456 7890")
            .unwrap();
        assert_eq!(line.phone_number, "081234567890");
    }

    #[test]
    fn names() {
        assert_eq!(validate_name("   "), NameValidation::Empty);
        assert_eq!(validate_name(" A "), NameValidation::TooShort);
        assert_eq!(validate_name("Al"), NameValidation::Valid);
        assert_eq!(validate_name(&"x".repeat(50)), NameValidation::Valid);
        assert_eq!(validate_name(&"x".repeat(51)), NameValidation::TooLong);
    }

    #[test]
    fn emails() {
        assert!(validate_email("demo@example.com").is_valid());
        assert!(validate_email(" demo@mail.example.co.id ").is_valid());
        assert_eq!(validate_email(""), EmailValidation::Empty);
        assert_eq!(validate_email("demo"), EmailValidation::InvalidFormat);
        assert_eq!(
            validate_email("demo@example"),
            EmailValidation::InvalidFormat
        );
        assert_eq!(
            validate_email("demo@.com"),
            EmailValidation::InvalidFormat
        );
        assert_eq!(
            validate_email("demo@example."),
            EmailValidation::InvalidFormat
        );
        assert_eq!(
            validate_email("de mo@example.com"),
            EmailValidation::InvalidFormat
        );
        assert_eq!(
            validate_email("a@b@example.com"),
            EmailValidation::InvalidFormat
        );
    }

    #[test]
    fn profile_form_reports_first_error() {
        assert_eq!(
            CustomerUpdate::from_form("", "not-an-email"),
            Err("Name is required")
        );
        assert_eq!(
            CustomerUpdate::from_form("Budi", "not-an-email"),
            Err("Email address is not valid")
        );
        let update =
            CustomerUpdate::from_form("  Budi  ", " budi@example.com ")
                .unwrap();
        assert_eq!(update.name.as_deref(), Some("Budi"));
        assert_eq!(update.email.as_deref(), Some("budi@example.com"));
    }

    #[test]
    fn partial_updates_omit_unset_fields() {
        let body = PhoneLineUpdate::status(PhoneLineStatus::Inactive);
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value, serde_json::json!({ "status": "inactive" }));
    }

    #[test]
    fn checkout_defaults_purchase_date_to_now() {
        let now: Timestamp = "2025-03-01T10:00:00Z".parse().unwrap();
        let details = CheckoutDetails {
            phone_line_id: PhoneLineId(2),
            package_id: PackageId(5),
            amount_paid: 25_000,
            purchase_date: None,
        };
        let tx = NewTransaction::completed(CustomerId(1), details.clone(), now);
        assert_eq!(tx.purchase_date, now);
        assert_eq!(tx.status, TransactionStatus::Completed);
        assert_eq!(tx.customer_id, CustomerId(1));

        let earlier: Timestamp = "2025-02-01T10:00:00Z".parse().unwrap();
        let tx = NewTransaction::completed(
            CustomerId(1),
            CheckoutDetails {
                purchase_date: Some(earlier),
                ..details
            },
            now,
        );
        assert_eq!(tx.purchase_date, earlier);
    }
}
