use payloads::Package;
use yew::prelude::*;

use crate::components::{CategoryBadge, PriceDisplay};

#[derive(Properties, PartialEq)]
pub struct PackageCardProps {
    pub package: Package,
    pub on_select: Callback<Package>,
}

#[function_component]
pub fn PackageCard(props: &PackageCardProps) -> Html {
    let package = &props.package;
    let onclick = {
        let package = package.clone();
        props.on_select.reform(move |_: MouseEvent| package.clone())
    };

    html! {
        <button
            {onclick}
            class="text-left w-full bg-white dark:bg-neutral-800 rounded-lg border border-neutral-200 dark:border-neutral-700 p-5 hover:shadow-md transition-shadow"
        >
            <div class="flex items-start justify-between gap-2 mb-2">
                <h3 class="font-semibold text-neutral-900 dark:text-neutral-100">
                    {package.name.clone()}
                </h3>
                <CategoryBadge category={package.category} />
            </div>
            <p class="text-sm text-neutral-600 dark:text-neutral-400 mb-4 line-clamp-2">
                {package.description.clone()}
            </p>
            <div class="flex items-end justify-between">
                <div class="text-sm text-neutral-700 dark:text-neutral-300">
                    <div class="text-2xl font-bold">{package.quota_label()}</div>
                    <div>{format!("{} days", package.validity_days)}</div>
                </div>
                <PriceDisplay amount={package.price} class="text-lg font-semibold text-neutral-900 dark:text-white" />
            </div>
        </button>
    }
}
