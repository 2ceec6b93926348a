use payloads::Customer;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::hooks::use_auth;

/// Renders `render` with the signed-in customer. Shows a spinner while a
/// saved session is being restored and sends everyone else to the login
/// page.
///
/// Pages behind this guard can call their data hooks unconditionally,
/// since they only mount once a customer is known.
#[derive(Properties, PartialEq)]
pub struct RequireAuthProps {
    pub render: Callback<Customer, Html>,
}

#[function_component]
pub fn RequireAuth(props: &RequireAuthProps) -> Html {
    let auth = use_auth();

    if auth.is_loading() {
        return html! {
            <div class="text-center py-8">
                <div class="inline-block animate-spin rounded-full h-8 w-8 border-2 border-neutral-900 dark:border-neutral-100 border-t-transparent dark:border-t-transparent"></div>
            </div>
        };
    }

    match auth.customer() {
        Some(customer) => props.render.emit(customer.clone()),
        None => html! { <Redirect<Route> to={Route::Login} /> },
    }
}
