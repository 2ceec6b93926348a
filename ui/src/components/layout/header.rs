use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::hooks::use_auth;

const LINK_CLASS: &str = "text-sm font-medium text-neutral-600 \
    dark:text-neutral-300 hover:text-neutral-900 dark:hover:text-white";

#[function_component]
pub fn Header() -> Html {
    let auth = use_auth();
    let navigator = use_navigator();

    let on_logout = {
        let auth = auth.clone();
        Callback::from(move |_: MouseEvent| {
            auth.logout();
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Login);
            }
        })
    };

    html! {
        <header class="bg-white dark:bg-neutral-800 border-b border-neutral-200 dark:border-neutral-700">
            <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <Link<Route> to={Route::Catalog} classes="text-xl font-semibold text-neutral-900 dark:text-white">
                        {"Data Packages"}
                    </Link<Route>>
                    if let Some(customer) = auth.customer() {
                        <nav class="flex items-center gap-6">
                            <Link<Route> to={Route::Catalog} classes={LINK_CLASS}>
                                {"Packages"}
                            </Link<Route>>
                            <Link<Route> to={Route::Transactions} classes={LINK_CLASS}>
                                {"History"}
                            </Link<Route>>
                            <Link<Route> to={Route::Account} classes={LINK_CLASS}>
                                <span class="inline-flex items-center gap-2">
                                    <span class="w-7 h-7 rounded-full bg-neutral-900 dark:bg-neutral-100 text-white dark:text-neutral-900 flex items-center justify-center text-xs font-semibold">
                                        {customer.initial()}
                                    </span>
                                    {customer.name.clone()}
                                </span>
                            </Link<Route>>
                            <button
                                onclick={on_logout}
                                class="text-sm font-medium text-red-600 dark:text-red-400 hover:text-red-700"
                            >
                                {"Sign out"}
                            </button>
                        </nav>
                    }
                </div>
            </div>
        </header>
    }
}
