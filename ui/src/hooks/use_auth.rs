use payloads::Customer;
use payloads::requests::LoginCredentials;
use payloads::session::{self, AuthAction};
use yew::prelude::*;

use crate::contexts::{AuthContext, LocalSessionStorage};
use crate::get_api_client;

const RESTORING_MESSAGE: &str = "Still restoring your previous session";

/// The auth context plus per-call state for the login action.
#[derive(Clone, PartialEq)]
pub struct AuthHandle {
    context: AuthContext,
    login_loading: UseStateHandle<bool>,
    error: UseStateHandle<Option<String>>,
}

impl AuthHandle {
    pub fn customer(&self) -> Option<&Customer> {
        self.context.0.customer()
    }

    pub fn is_authenticated(&self) -> bool {
        self.context.0.is_authenticated()
    }

    /// True while a persisted session is being re-hydrated.
    pub fn is_loading(&self) -> bool {
        self.context.0.is_loading()
    }

    pub fn login_loading(&self) -> bool {
        *self.login_loading
    }

    pub fn error(&self) -> Option<&String> {
        (*self.error).as_ref()
    }

    pub async fn login(
        &self,
        credentials: LoginCredentials,
    ) -> Result<Customer, String> {
        // a restore in flight would clear the session this login stores
        if self.is_loading() {
            return Err(RESTORING_MESSAGE.to_string());
        }
        self.login_loading.set(true);
        self.error.set(None);

        let result = session::login(
            &get_api_client(),
            &LocalSessionStorage,
            &credentials,
        )
        .await;

        self.login_loading.set(false);
        match result {
            Ok(customer) => {
                self.context.dispatch(AuthAction::SignedIn(customer.clone()));
                Ok(customer)
            }
            Err(e) => {
                let message = e.to_string();
                self.error.set(Some(message.clone()));
                Err(message)
            }
        }
    }

    pub fn logout(&self) {
        session::logout(&LocalSessionStorage);
        self.error.set(None);
        self.context.dispatch(AuthAction::SignedOut);
    }

    /// Swap in a fresher copy of the signed-in customer, e.g. after a
    /// profile edit.
    pub fn replace_customer(&self, customer: Customer) {
        if self.is_authenticated() {
            self.context.dispatch(AuthAction::SignedIn(customer));
        }
    }
}

#[hook]
pub fn use_auth() -> AuthHandle {
    let context = use_context::<AuthContext>()
        .expect("use_auth must be used within an AuthProvider");
    let login_loading = use_state(|| false);
    let error = use_state(|| None::<String>);

    AuthHandle {
        context,
        login_loading,
        error,
    }
}
