use payloads::{PackageCategory, PhoneLineStatus, TransactionStatus};
use yew::prelude::*;

const BADGE: &str = "inline-flex items-center px-2 py-0.5 rounded-full text-xs font-medium";

fn badge(label: &str, colors: &'static str) -> Html {
    html! {
        <span class={classes!(BADGE, colors)}>{label.to_string()}</span>
    }
}

#[derive(Properties, PartialEq)]
pub struct PhoneLineStatusBadgeProps {
    pub status: PhoneLineStatus,
}

#[function_component]
pub fn PhoneLineStatusBadge(props: &PhoneLineStatusBadgeProps) -> Html {
    let colors = match props.status {
        PhoneLineStatus::Active => {
            "bg-green-100 text-green-800 dark:bg-green-900/30 dark:text-green-300"
        }
        PhoneLineStatus::Inactive => {
            "bg-neutral-100 text-neutral-700 dark:bg-neutral-700 dark:text-neutral-300"
        }
        PhoneLineStatus::Suspended => {
            "bg-red-100 text-red-800 dark:bg-red-900/30 dark:text-red-300"
        }
    };
    badge(props.status.label(), colors)
}

#[derive(Properties, PartialEq)]
pub struct TransactionStatusBadgeProps {
    pub status: TransactionStatus,
}

#[function_component]
pub fn TransactionStatusBadge(props: &TransactionStatusBadgeProps) -> Html {
    let colors = match props.status {
        TransactionStatus::Completed => {
            "bg-green-100 text-green-800 dark:bg-green-900/30 dark:text-green-300"
        }
        TransactionStatus::Pending => {
            "bg-yellow-100 text-yellow-800 dark:bg-yellow-900/30 dark:text-yellow-300"
        }
        TransactionStatus::Failed => {
            "bg-red-100 text-red-800 dark:bg-red-900/30 dark:text-red-300"
        }
        TransactionStatus::Refunded => {
            "bg-blue-100 text-blue-800 dark:bg-blue-900/30 dark:text-blue-300"
        }
    };
    badge(props.status.label(), colors)
}

#[derive(Properties, PartialEq)]
pub struct CategoryBadgeProps {
    pub category: PackageCategory,
}

#[function_component]
pub fn CategoryBadge(props: &CategoryBadgeProps) -> Html {
    let colors = match props.category {
        PackageCategory::Starter => "bg-sky-100 text-sky-800",
        PackageCategory::Regular => "bg-indigo-100 text-indigo-800",
        PackageCategory::Premium => "bg-amber-100 text-amber-800",
        PackageCategory::Unlimited => "bg-purple-100 text-purple-800",
        PackageCategory::Special => "bg-pink-100 text-pink-800",
    };
    badge(props.category.label(), colors)
}
