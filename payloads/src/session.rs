//! Authentication state for the storefront.
//!
//! This is a demo-grade placeholder, not a security boundary: a single fixed
//! credential pair maps to a known customer, and the only thing persisted is
//! that customer's id. There is no password hashing, token, or expiry.
//!
//! The state machine has three states:
//!
//! ```text
//!                 Restoring
//!  Unauthenticated ────────► Loading
//!        ▲   │                 │ SignedIn(customer)
//!        │   │ SignedIn        ▼
//!        │   └──────────► Authenticated
//!        └──────────────────────┘
//!                SignedOut
//! ```
//!
//! A failed re-hydration from `Loading` also lands in `Unauthenticated`.
//! The outcome of a re-hydration (`Restored`) is ignored once the state has
//! left `Loading`.

use std::sync::Mutex;

use crate::{APIClient, ClientError, Customer, CustomerId, requests};

pub const DEMO_USERNAME: &str = "demo";
pub const DEMO_PASSWORD: &str = "demo";
/// The customer the demo credentials sign in as.
pub const DEMO_CUSTOMER_ID: CustomerId = CustomerId(1);
/// Key under which the signed-in customer id is persisted.
pub const CUSTOMER_ID_KEY: &str = "customerId";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AuthState {
    #[default]
    Unauthenticated,
    /// Re-hydrating a persisted session.
    Loading,
    Authenticated(Customer),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthAction {
    Restoring,
    /// Outcome of a re-hydration. Only applies while still `Loading`, so a
    /// slow restore cannot overwrite a sign-in or sign-out that beat it.
    Restored(Option<Customer>),
    SignedIn(Customer),
    SignedOut,
}

impl AuthState {
    /// Apply an action. Transitions not in the machine leave the state
    /// unchanged; `SignedOut` is accepted from anywhere.
    pub fn transition(&self, action: AuthAction) -> AuthState {
        match (self, action) {
            (_, AuthAction::SignedOut) => Self::Unauthenticated,
            (Self::Unauthenticated, AuthAction::Restoring) => Self::Loading,
            (Self::Unauthenticated | Self::Loading, AuthAction::SignedIn(c)) => {
                Self::Authenticated(c)
            }
            (Self::Authenticated(_), AuthAction::SignedIn(c)) => {
                Self::Authenticated(c)
            }
            (Self::Loading, AuthAction::Restored(Some(c))) => {
                Self::Authenticated(c)
            }
            (Self::Loading, AuthAction::Restored(None)) => Self::Unauthenticated,
            (state, AuthAction::Restoring | AuthAction::Restored(_)) => {
                state.clone()
            }
        }
    }

    pub fn customer(&self) -> Option<&Customer> {
        match self {
            Self::Authenticated(customer) => Some(customer),
            _ => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Invalid credentials. Use username: demo, password: demo")]
    InvalidCredentials,
    #[error(transparent)]
    Client(#[from] ClientError),
}

/// Where the signed-in customer id survives page reloads.
pub trait SessionStorage {
    fn customer_id(&self) -> Option<CustomerId>;
    fn set_customer_id(&self, customer_id: CustomerId);
    fn clear(&self);
}

/// Process-local storage, for native clients and tests.
#[derive(Debug, Default)]
pub struct MemorySessionStorage {
    customer_id: Mutex<Option<CustomerId>>,
}

impl MemorySessionStorage {
    pub fn with_customer_id(customer_id: CustomerId) -> Self {
        Self {
            customer_id: Mutex::new(Some(customer_id)),
        }
    }
}

impl SessionStorage for MemorySessionStorage {
    fn customer_id(&self) -> Option<CustomerId> {
        *self.customer_id.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn set_customer_id(&self, customer_id: CustomerId) {
        *self.customer_id.lock().unwrap_or_else(|e| e.into_inner()) =
            Some(customer_id);
    }

    fn clear(&self) {
        *self.customer_id.lock().unwrap_or_else(|e| e.into_inner()) = None;
    }
}

/// Parse a persisted id. Anything unparseable is treated as absent.
pub fn parse_customer_id(raw: &str) -> Option<CustomerId> {
    raw.trim().parse().ok().map(CustomerId)
}

/// Check credentials and resolve the customer they sign in as.
fn resolve_credentials(
    credentials: &requests::LoginCredentials,
) -> Result<CustomerId, AuthError> {
    if credentials.username == DEMO_USERNAME
        && credentials.password == DEMO_PASSWORD
    {
        Ok(DEMO_CUSTOMER_ID)
    } else {
        Err(AuthError::InvalidCredentials)
    }
}

/// Sign in, persisting the customer id on success. Nothing is persisted on
/// failure.
#[tracing::instrument(skip_all, fields(username = %credentials.username))]
pub async fn login(
    client: &APIClient,
    storage: &impl SessionStorage,
    credentials: &requests::LoginCredentials,
) -> Result<Customer, AuthError> {
    let customer_id = resolve_credentials(credentials)?;
    let customer = client.get_customer(customer_id).await?;
    storage.set_customer_id(customer.id);
    tracing::info!(customer_id = %customer.id, "signed in");
    Ok(customer)
}

/// Re-hydrate a persisted session.
///
/// With no persisted id this is `Unauthenticated` straight away. Otherwise
/// the customer is fetched; any failure clears the persisted id.
#[tracing::instrument(skip_all)]
pub async fn restore(
    client: &APIClient,
    storage: &impl SessionStorage,
) -> AuthState {
    let Some(customer_id) = storage.customer_id() else {
        return AuthState::Unauthenticated;
    };
    match client.get_customer(customer_id).await {
        Ok(customer) => AuthState::Authenticated(customer),
        Err(e) => {
            tracing::warn!(%customer_id, "session restore failed: {e}");
            storage.clear();
            AuthState::Unauthenticated
        }
    }
}

/// Forget the session. Always succeeds.
pub fn logout(storage: &impl SessionStorage) -> AuthState {
    storage.clear();
    AuthState::Unauthenticated
}
