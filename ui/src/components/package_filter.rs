use payloads::catalog::{CategoryFilter, PackageFilter, SortBy};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PackageFilterBarProps {
    pub filter: PackageFilter,
    pub on_change: Callback<PackageFilter>,
}

const CONTROL: &str = "px-3 py-2 text-sm border border-neutral-300 dark:border-neutral-600 \
    rounded-md bg-white dark:bg-neutral-700 text-neutral-900 dark:text-neutral-100 \
    focus:outline-none focus:ring-2 focus:ring-neutral-500";

/// Category, search and sort controls for the catalog. Each change emits
/// the complete new filter.
#[function_component]
pub fn PackageFilterBar(props: &PackageFilterBarProps) -> Html {
    let on_search = {
        let filter = props.filter.clone();
        props.on_change.reform(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            PackageFilter {
                search: input.value(),
                ..filter.clone()
            }
        })
    };

    let on_category = {
        let filter = props.filter.clone();
        props.on_change.reform(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            PackageFilter {
                category: CategoryFilter::from_value(&select.value())
                    .unwrap_or_default(),
                ..filter.clone()
            }
        })
    };

    let on_sort = {
        let filter = props.filter.clone();
        props.on_change.reform(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            PackageFilter {
                sort_by: SortBy::from_value(&select.value()).unwrap_or_default(),
                ..filter.clone()
            }
        })
    };

    let selected_category = props.filter.category.value();

    html! {
        <div class="flex flex-col sm:flex-row gap-3 mb-6">
            <input
                type="search"
                placeholder="Search packages"
                value={props.filter.search.clone()}
                oninput={on_search}
                class={classes!(CONTROL, "flex-1")}
            />
            <select onchange={on_category} class={CONTROL} aria-label="Category">
                {for CategoryFilter::options().into_iter().map(|option| {
                    let value = option.value();
                    let selected = value == selected_category;
                    html! {
                        <option {selected} {value}>
                            {option.label()}
                        </option>
                    }
                })}
            </select>
            <select onchange={on_sort} class={CONTROL} aria-label="Sort by">
                {for SortBy::ALL.into_iter().map(|sort_by| html! {
                    <option
                        selected={sort_by == props.filter.sort_by}
                        value={sort_by.value()}
                    >
                        {sort_by.label()}
                    </option>
                })}
            </select>
        </div>
    }
}
