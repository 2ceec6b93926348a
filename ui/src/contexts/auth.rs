//! Session-wide authentication state, provided to the component tree as a
//! reducer-backed context.

use std::rc::Rc;

use payloads::CustomerId;
use payloads::session::{
    self, AuthAction, AuthState, CUSTOMER_ID_KEY, SessionStorage,
    parse_customer_id,
};
use yew::prelude::*;

use crate::get_api_client;

/// The auth state machine as a Yew reducer.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AuthStore(pub AuthState);

impl AuthStore {
    /// Start in `Loading` when there is a session to re-hydrate, so guarded
    /// pages wait instead of bouncing to the login page.
    pub fn initial(storage: &impl SessionStorage) -> Self {
        let state = AuthState::default();
        match storage.customer_id() {
            Some(_) => Self(state.transition(AuthAction::Restoring)),
            None => Self(state),
        }
    }
}

impl Reducible for AuthStore {
    type Action = AuthAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(Self(self.0.transition(action)))
    }
}

pub type AuthContext = UseReducerHandle<AuthStore>;

/// Browser `localStorage`. Storage being unavailable (private mode,
/// disabled by policy) reads as no session and drops writes.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalSessionStorage;

impl LocalSessionStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl SessionStorage for LocalSessionStorage {
    fn customer_id(&self) -> Option<CustomerId> {
        let raw = Self::storage()?.get_item(CUSTOMER_ID_KEY).ok().flatten()?;
        parse_customer_id(&raw)
    }

    fn set_customer_id(&self, customer_id: CustomerId) {
        if let Some(storage) = Self::storage()
            && let Err(e) =
                storage.set_item(CUSTOMER_ID_KEY, &customer_id.to_string())
        {
            tracing::warn!("could not persist session: {e:?}");
        }
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage()
            && let Err(e) = storage.remove_item(CUSTOMER_ID_KEY)
        {
            tracing::warn!("could not clear session: {e:?}");
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct AuthProviderProps {
    pub children: Children,
}

#[function_component]
pub fn AuthProvider(props: &AuthProviderProps) -> Html {
    let auth = use_reducer(|| AuthStore::initial(&LocalSessionStorage));

    // Re-hydrate a persisted session once, on startup
    {
        let auth = auth.clone();
        use_effect_with((), move |_| {
            if auth.0.is_loading() {
                yew::platform::spawn_local(async move {
                    let restored =
                        session::restore(&get_api_client(), &LocalSessionStorage)
                            .await;
                    auth.dispatch(AuthAction::Restored(
                        restored.customer().cloned(),
                    ));
                });
            }
        });
    }

    html! {
        <ContextProvider<AuthContext> context={auth}>
            {props.children.clone()}
        </ContextProvider<AuthContext>>
    }
}
