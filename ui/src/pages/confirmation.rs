use payloads::{Transaction, TransactionId};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::components::{PriceDisplay, TransactionStatusBadge};
use crate::hooks::{use_package, use_title, use_transaction};
use crate::utils::format_datetime;

#[derive(Properties, PartialEq)]
pub struct ConfirmationPageProps {
    pub transaction_id: TransactionId,
}

#[function_component]
pub fn ConfirmationPage(props: &ConfirmationPageProps) -> Html {
    use_title("Purchase complete");
    let transaction = use_transaction(props.transaction_id);

    transaction.render("purchase", |transaction, _, _| {
        html! { <Receipt transaction={transaction.clone()} /> }
    })
}

#[derive(Properties, PartialEq)]
struct ReceiptProps {
    transaction: Transaction,
}

#[function_component]
fn Receipt(props: &ReceiptProps) -> Html {
    let transaction = &props.transaction;
    let package = use_package(transaction.package_id);
    let package_name = package
        .data
        .as_ref()
        .map(|p| format!("{} ({})", p.name, p.quota_label()))
        .unwrap_or_else(|| format!("Package #{}", transaction.package_id));

    html! {
        <div class="max-w-lg mx-auto text-center space-y-6">
            <div class="mx-auto w-14 h-14 rounded-full bg-green-100 text-green-700 flex items-center justify-center text-2xl">
                {"✓"}
            </div>
            <h1 class="text-2xl font-bold">{"Purchase complete"}</h1>
            <dl class="bg-white dark:bg-neutral-800 rounded-lg border border-neutral-200 dark:border-neutral-700 p-6 text-left text-sm space-y-3">
                <div class="flex justify-between">
                    <dt class="text-neutral-500">{"Transaction"}</dt>
                    <dd class="font-mono">{format!("#{}", transaction.id)}</dd>
                </div>
                <div class="flex justify-between">
                    <dt class="text-neutral-500">{"Package"}</dt>
                    <dd>{package_name}</dd>
                </div>
                <div class="flex justify-between">
                    <dt class="text-neutral-500">{"Amount"}</dt>
                    <dd><PriceDisplay amount={transaction.amount_paid} /></dd>
                </div>
                <div class="flex justify-between">
                    <dt class="text-neutral-500">{"Date"}</dt>
                    <dd>{format_datetime(transaction.purchase_date)}</dd>
                </div>
                <div class="flex justify-between">
                    <dt class="text-neutral-500">{"Status"}</dt>
                    <dd><TransactionStatusBadge status={transaction.status} /></dd>
                </div>
            </dl>
            <div class="flex justify-center gap-4">
                <Link<Route> to={Route::Catalog} classes="px-4 py-2 rounded-md border text-sm font-medium">
                    {"Buy another"}
                </Link<Route>>
                <Link<Route> to={Route::Transactions} classes="px-4 py-2 rounded-md bg-neutral-900 text-white text-sm font-medium">
                    {"View history"}
                </Link<Route>>
            </div>
        </div>
    }
}
