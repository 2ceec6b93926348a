use payloads::Package;
use payloads::catalog::PackageFilter;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::components::{ErrorAlert, PackageCard, PackageFilterBar};
use crate::hooks::{use_packages, use_title};

#[function_component]
pub fn CatalogPage() -> Html {
    use_title("Packages");
    let navigator = use_navigator().unwrap();
    let packages = use_packages();

    let on_select = Callback::from(move |package: Package| {
        navigator.push(&Route::PackageDetail { id: package.id.0 });
    });

    let on_reset = {
        let set_filter = packages.set_filter.clone();
        Callback::from(move |_: MouseEvent| {
            set_filter.emit(PackageFilter::default())
        })
    };

    let body = match packages.catalog.as_ref() {
        None if packages.error.is_some() && !packages.is_loading => html! {
            <ErrorAlert
                message={format!(
                    "Error loading packages: {}",
                    packages.error.clone().unwrap_or_default()
                )}
                on_retry={packages.refetch.callback::<()>()}
            />
        },
        None => html! {
            <div class="text-center py-12">
                <p class="text-neutral-600 dark:text-neutral-400">{"Loading packages..."}</p>
            </div>
        },
        Some(catalog) if packages.packages.is_empty() => html! {
            <div class="text-center py-12 space-y-3">
                <p class="text-neutral-600 dark:text-neutral-400">
                    {if catalog.is_empty() {
                        "No packages are available right now"
                    } else {
                        "No packages match your filters"
                    }}
                </p>
                if !packages.filter.is_default() {
                    <button onclick={on_reset} class="text-sm font-medium underline">
                        {"Clear filters"}
                    </button>
                }
            </div>
        },
        Some(catalog) => html! {
            <>
                <p class="text-sm text-neutral-600 dark:text-neutral-400 mb-4">
                    {format!("Showing {} of {} packages", packages.packages.len(), catalog.len())}
                </p>
                <div class="grid gap-4 sm:grid-cols-2 lg:grid-cols-3">
                    {for packages.packages.iter().map(|package| html! {
                        <PackageCard
                            key={package.id.0}
                            package={package.clone()}
                            on_select={on_select.clone()}
                        />
                    })}
                </div>
            </>
        },
    };

    html! {
        <div>
            <h1 class="text-2xl font-bold mb-6">{"Data packages"}</h1>
            <PackageFilterBar
                filter={packages.filter.clone()}
                on_change={packages.set_filter.clone()}
            />
            {body}
        </div>
    }
}
