use payloads::Transaction;
use yew::prelude::*;

use crate::components::{PriceDisplay, TransactionStatusBadge};
use crate::utils::format_datetime;

#[derive(Properties, PartialEq)]
pub struct TransactionRowProps {
    pub transaction: Transaction,
    /// Resolved from the catalog; `None` while it loads or if the package
    /// is gone.
    #[prop_or_default]
    pub package_name: Option<AttrValue>,
    #[prop_or_default]
    pub phone_number: Option<AttrValue>,
}

#[function_component]
pub fn TransactionRow(props: &TransactionRowProps) -> Html {
    let transaction = &props.transaction;
    let package_name = props
        .package_name
        .clone()
        .unwrap_or_else(|| format!("Package #{}", transaction.package_id).into());
    let phone_number = props
        .phone_number
        .clone()
        .unwrap_or_else(|| format!("Line #{}", transaction.phone_line_id).into());

    html! {
        <tr class="border-b border-neutral-200 dark:border-neutral-700">
            <td class="py-3 pr-4 text-sm">{format_datetime(transaction.purchase_date)}</td>
            <td class="py-3 pr-4 text-sm font-medium">{package_name}</td>
            <td class="py-3 pr-4 text-sm font-mono">{phone_number}</td>
            <td class="py-3 pr-4 text-sm text-right">
                <PriceDisplay amount={transaction.amount_paid} />
            </td>
            <td class="py-3 text-sm">
                <TransactionStatusBadge status={transaction.status} />
            </td>
        </tr>
    }
}
