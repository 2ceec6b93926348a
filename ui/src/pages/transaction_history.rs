use payloads::{CustomerId, PhoneLineId, Transaction};
use web_sys::HtmlSelectElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::components::{ErrorAlert, TransactionRow};
use crate::hooks::{use_customer, use_packages, use_title, use_transactions};

#[derive(Properties, PartialEq)]
pub struct TransactionHistoryPageProps {
    pub customer_id: CustomerId,
}

#[function_component]
pub fn TransactionHistoryPage(props: &TransactionHistoryPageProps) -> Html {
    use_title("Purchase history");
    let transactions = use_transactions(props.customer_id);
    let customer = use_customer(props.customer_id);
    let packages = use_packages();
    let line_filter = use_state(|| None::<PhoneLineId>);

    let on_line_change = {
        let line_filter = line_filter.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let line = select.value().parse().ok().map(PhoneLineId);
            line_filter.set(line);
        })
    };

    let visible = on_line(transactions.sorted(), *line_filter);

    let body = if !transactions.transactions.is_fetched() {
        html! {
            <p class="text-center py-12 text-neutral-600 dark:text-neutral-400">
                {"Loading purchase history..."}
            </p>
        }
    } else if visible.is_empty() {
        html! {
            <div class="text-center py-12 space-y-3">
                <p class="text-neutral-600 dark:text-neutral-400">
                    {if line_filter.is_some() {
                        "No purchases for this line yet."
                    } else {
                        "You haven't bought any packages yet."
                    }}
                </p>
                <Link<Route> to={Route::Catalog} classes="text-sm font-medium underline">
                    {"Browse packages"}
                </Link<Route>>
            </div>
        }
    } else {
        html! {
            <div class="overflow-x-auto">
                <table class="w-full text-left">
                    <thead>
                        <tr class="border-b border-neutral-300 dark:border-neutral-600 text-xs uppercase text-neutral-500">
                            <th class="py-2 pr-4">{"Date"}</th>
                            <th class="py-2 pr-4">{"Package"}</th>
                            <th class="py-2 pr-4">{"Phone line"}</th>
                            <th class="py-2 pr-4 text-right">{"Paid"}</th>
                            <th class="py-2">{"Status"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {for visible.into_iter().map(|transaction| {
                            let package_name = packages
                                .find(transaction.package_id)
                                .map(|p| AttrValue::from(p.name.clone()));
                            let phone_number = customer
                                .lines()
                                .iter()
                                .find(|l| l.id == transaction.phone_line_id)
                                .map(|l| AttrValue::from(l.phone_number.clone()));
                            let key = transaction.id.0;
                            html! {
                                <TransactionRow
                                    key={key}
                                    {transaction}
                                    {package_name}
                                    {phone_number}
                                />
                            }
                        })}
                    </tbody>
                </table>
            </div>
        }
    };

    html! {
        <div class="space-y-6">
            <div class="flex items-center justify-between gap-4">
                <h1 class="text-2xl font-bold">{"Purchase history"}</h1>
                <div class="flex items-center gap-3">
                    <select
                        aria-label="Phone line"
                        onchange={on_line_change}
                        class="text-sm border border-neutral-300 dark:border-neutral-600 rounded-md px-2 py-1.5 bg-white dark:bg-neutral-700"
                    >
                        <option value="" selected={line_filter.is_none()}>{"All lines"}</option>
                        {for customer.lines().iter().map(|line| html! {
                            <option
                                value={line.id.0.to_string()}
                                selected={*line_filter == Some(line.id)}
                            >
                                {line.phone_number.clone()}
                            </option>
                        })}
                    </select>
                    <button
                        onclick={transactions.refetch.callback::<MouseEvent>()}
                        disabled={transactions.is_loading}
                        class="text-sm font-medium px-3 py-1.5 border border-neutral-300 dark:border-neutral-600 rounded-md disabled:opacity-50"
                    >
                        {if transactions.is_loading { "Refreshing..." } else { "Refresh" }}
                    </button>
                </div>
            </div>

            if let Some(error) = transactions.error.clone() {
                <ErrorAlert
                    message={error}
                    on_retry={transactions.refetch.callback::<()>()}
                />
            }

            {body}
        </div>
    }
}

/// Keep only purchases for `line`, or everything when no line is chosen.
fn on_line(
    transactions: Vec<Transaction>,
    line: Option<PhoneLineId>,
) -> Vec<Transaction> {
    transactions
        .into_iter()
        .filter(|t| line.is_none_or(|id| t.phone_line_id == id))
        .collect()
}
