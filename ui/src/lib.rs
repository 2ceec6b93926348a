use payloads::{APIClient, Customer, PackageId, TransactionId};
use yew::prelude::*;
use yew_router::prelude::*;

mod components;
mod contexts;
mod hooks;
pub mod logs;
mod pages;
mod utils;

use components::{RequireAuth, layout::MainLayout};
use contexts::AuthProvider;

// Global API client - configurable via environment or same-origin fallback
pub fn get_api_client() -> APIClient {
    // Try environment variable first (set at build time)
    let address = option_env!("BACKEND_URL")
        .map(str::to_string)
        .unwrap_or_else(|| {
            web_sys::window()
                .and_then(|w| w.location().origin().ok())
                .unwrap_or_default()
        });
    APIClient::new(address)
}

#[function_component]
pub fn App() -> Html {
    html! {
        <BrowserRouter>
            <AuthProvider>
                <div class="min-h-screen bg-neutral-50 dark:bg-neutral-900 text-neutral-900 dark:text-neutral-100 transition-colors">
                    <Switch<Route> render={switch} />
                </div>
            </AuthProvider>
        </BrowserRouter>
    }
}

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/login")]
    Login,
    #[at("/")]
    Home,
    #[at("/catalog")]
    Catalog,
    #[at("/packages/:id")]
    PackageDetail { id: u64 },
    #[at("/checkout/:package_id")]
    Checkout { package_id: u64 },
    #[at("/confirmation/:transaction_id")]
    Confirmation { transaction_id: u64 },
    #[at("/account")]
    Account,
    #[at("/transactions")]
    Transactions,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Everything but the login page needs a signed-in customer.
fn guarded(page: impl Fn(Customer) -> Html + 'static) -> Html {
    html! {
        <MainLayout>
            <RequireAuth render={Callback::from(page)} />
        </MainLayout>
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Login => html! { <pages::LoginPage /> },
        Route::Home => html! { <Redirect<Route> to={Route::Catalog} /> },
        Route::Catalog => guarded(|_| html! { <pages::CatalogPage /> }),
        Route::PackageDetail { id } => guarded(move |_| {
            html! { <pages::PackageDetailPage package_id={PackageId(id)} /> }
        }),
        Route::Checkout { package_id } => guarded(move |customer| {
            html! {
                <pages::CheckoutPage
                    customer_id={customer.id}
                    package_id={PackageId(package_id)}
                />
            }
        }),
        Route::Confirmation { transaction_id } => guarded(move |_| {
            html! {
                <pages::ConfirmationPage
                    transaction_id={TransactionId(transaction_id)}
                />
            }
        }),
        Route::Account => guarded(|customer| {
            html! { <pages::AccountPage customer_id={customer.id} /> }
        }),
        Route::Transactions => guarded(|customer| {
            html! { <pages::TransactionHistoryPage customer_id={customer.id} /> }
        }),
        Route::NotFound => guarded(|_| html! { <pages::NotFoundPage /> }),
    }
}
