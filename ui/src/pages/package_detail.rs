use payloads::{Package, PackageId};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::components::{CategoryBadge, PriceDisplay};
use crate::hooks::{use_package, use_title};

#[derive(Properties, PartialEq)]
pub struct PackageDetailPageProps {
    pub package_id: PackageId,
}

#[function_component]
pub fn PackageDetailPage(props: &PackageDetailPageProps) -> Html {
    use_title("Package");
    let package = use_package(props.package_id);

    package.render("package", |package, _, _| {
        html! { <PackageDetail package={package.clone()} /> }
    })
}

#[derive(Properties, PartialEq)]
struct PackageDetailProps {
    package: Package,
}

#[function_component]
fn PackageDetail(props: &PackageDetailProps) -> Html {
    let package = &props.package;
    use_title(&package.name);
    let navigator = use_navigator().unwrap();

    let on_buy = {
        let package_id = package.id;
        Callback::from(move |_: MouseEvent| {
            navigator.push(&Route::Checkout {
                package_id: package_id.0,
            });
        })
    };

    html! {
        <div class="max-w-2xl mx-auto bg-white dark:bg-neutral-800 rounded-lg border border-neutral-200 dark:border-neutral-700 p-8 space-y-6">
            <Link<Route> to={Route::Catalog} classes="text-sm underline">
                {"← All packages"}
            </Link<Route>>
            <div class="flex items-start justify-between gap-4">
                <div>
                    <h1 class="text-2xl font-bold">{package.name.clone()}</h1>
                    <p class="text-neutral-600 dark:text-neutral-400 mt-1">
                        {package.description.clone()}
                    </p>
                </div>
                <CategoryBadge category={package.category} />
            </div>

            <dl class="grid grid-cols-3 gap-4 text-center">
                <div class="p-4 rounded-md bg-neutral-50 dark:bg-neutral-700">
                    <dt class="text-xs text-neutral-500 dark:text-neutral-400">{"Data"}</dt>
                    <dd class="text-xl font-semibold">{package.quota_label()}</dd>
                </div>
                <div class="p-4 rounded-md bg-neutral-50 dark:bg-neutral-700">
                    <dt class="text-xs text-neutral-500 dark:text-neutral-400">{"Validity"}</dt>
                    <dd class="text-xl font-semibold">{format!("{} days", package.validity_days)}</dd>
                </div>
                <div class="p-4 rounded-md bg-neutral-50 dark:bg-neutral-700">
                    <dt class="text-xs text-neutral-500 dark:text-neutral-400">{"Price"}</dt>
                    <dd><PriceDisplay amount={package.price} class="text-xl font-semibold" /></dd>
                </div>
            </dl>

            if !package.features.is_empty() {
                <div>
                    <h2 class="font-semibold mb-2">{"Included"}</h2>
                    <ul class="list-disc list-inside space-y-1 text-sm text-neutral-700 dark:text-neutral-300">
                        {for package.features.iter().map(|feature| html! {
                            <li>{feature.clone()}</li>
                        })}
                    </ul>
                </div>
            }

            <button
                onclick={on_buy}
                class="w-full py-3 px-4 rounded-md text-sm font-medium text-white
                       bg-neutral-900 hover:bg-neutral-800
                       dark:bg-neutral-100 dark:text-neutral-900 dark:hover:bg-neutral-200"
            >
                {"Buy this package"}
            </button>
        </div>
    }
}
