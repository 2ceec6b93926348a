use payloads::requests::CheckoutDetails;
use payloads::{CustomerId, Package, PackageId, PhoneLineId};
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::components::{ErrorAlert, PhoneLineSelector, PriceDisplay};
use crate::hooks::{use_customer, use_package, use_title, use_transactions};

#[derive(Properties, PartialEq)]
pub struct CheckoutPageProps {
    pub customer_id: CustomerId,
    pub package_id: PackageId,
}

#[function_component]
pub fn CheckoutPage(props: &CheckoutPageProps) -> Html {
    use_title("Checkout");
    let package = use_package(props.package_id);

    package.render("package", |package, _, _| {
        html! {
            <CheckoutForm
                customer_id={props.customer_id}
                package={package.clone()}
            />
        }
    })
}

#[derive(Properties, PartialEq)]
struct CheckoutFormProps {
    customer_id: CustomerId,
    package: Package,
}

#[function_component]
fn CheckoutForm(props: &CheckoutFormProps) -> Html {
    let navigator = use_navigator().unwrap();
    let customer = use_customer(props.customer_id);
    let transactions = use_transactions(props.customer_id);
    let selected = use_state(|| None::<PhoneLineId>);
    let confirmed = use_state(|| false);
    let form_error = use_state(|| None::<String>);

    // Preselect when there is exactly one line to choose
    {
        let selected = selected.clone();
        let active = customer.active_lines();
        use_effect_with(active, move |active| {
            if selected.is_none() && active.len() == 1 {
                selected.set(Some(active[0].id));
            }
        });
    }

    let on_select = {
        let selected = selected.clone();
        Callback::from(move |id: PhoneLineId| selected.set(Some(id)))
    };

    let on_confirm_toggle = {
        let confirmed = confirmed.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            confirmed.set(input.checked());
        })
    };

    let on_submit = {
        let selected = selected.clone();
        let confirmed = confirmed.clone();
        let form_error = form_error.clone();
        let transactions = transactions.clone();
        let package = props.package.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(phone_line_id) = *selected else {
                form_error.set(Some("Choose a phone line".to_string()));
                return;
            };
            if !*confirmed {
                form_error.set(Some("Please confirm your purchase".to_string()));
                return;
            }
            form_error.set(None);

            let details = CheckoutDetails {
                phone_line_id,
                package_id: package.id,
                amount_paid: package.price,
                purchase_date: None,
            };
            let transactions = transactions.clone();
            let navigator = navigator.clone();
            yew::platform::spawn_local(async move {
                if let Ok(transaction) = transactions.create(details).await {
                    navigator.push(&Route::Confirmation {
                        transaction_id: transaction.id.0,
                    });
                }
            });
        })
    };

    let package = &props.package;
    let submitting = transactions.is_creating();
    let error = (*form_error)
        .clone()
        .or_else(|| transactions.error.clone())
        .or_else(|| customer.error.clone());
    let selected_line = (*selected).and_then(|id| {
        customer.lines().iter().find(|l| l.id == id).cloned()
    });

    html! {
        <form onsubmit={on_submit} class="max-w-2xl mx-auto space-y-6">
            <h1 class="text-2xl font-bold">{"Checkout"}</h1>

            if let Some(error) = error {
                <ErrorAlert message={error} />
            }

            <section class="bg-white dark:bg-neutral-800 rounded-lg border border-neutral-200 dark:border-neutral-700 p-6">
                <h2 class="font-semibold mb-4">{"Send to"}</h2>
                if customer.phone_lines.is_fetched() {
                    <PhoneLineSelector
                        lines={customer.lines().to_vec()}
                        selected={*selected}
                        {on_select}
                        disabled={submitting}
                    />
                } else {
                    <p class="text-sm text-neutral-600 dark:text-neutral-400">{"Loading phone lines..."}</p>
                }
            </section>

            <section class="bg-white dark:bg-neutral-800 rounded-lg border border-neutral-200 dark:border-neutral-700 p-6 space-y-3">
                <h2 class="font-semibold">{"Order summary"}</h2>
                <div class="flex justify-between text-sm">
                    <span>{package.name.clone()}</span>
                    <PriceDisplay amount={package.price} />
                </div>
                <div class="flex justify-between text-sm text-neutral-600 dark:text-neutral-400">
                    <span>{format!("{} for {} days", package.quota_label(), package.validity_days)}</span>
                    <span>
                        {selected_line.map(|l| l.phone_number).unwrap_or_else(|| "No line selected".into())}
                    </span>
                </div>
                <div class="flex justify-between border-t border-neutral-200 dark:border-neutral-700 pt-3 font-semibold">
                    <span>{"Total"}</span>
                    <PriceDisplay amount={package.price} />
                </div>
            </section>

            <label class="flex items-center gap-2 text-sm">
                <input
                    type="checkbox"
                    checked={*confirmed}
                    onchange={on_confirm_toggle}
                    disabled={submitting}
                />
                {"I confirm this purchase. Payment is simulated."}
            </label>

            <button
                type="submit"
                disabled={submitting}
                class="w-full py-3 px-4 rounded-md text-sm font-medium text-white
                       bg-neutral-900 hover:bg-neutral-800
                       dark:bg-neutral-100 dark:text-neutral-900 dark:hover:bg-neutral-200
                       disabled:opacity-50 disabled:cursor-not-allowed"
            >
                {if submitting { "Processing..." } else { "Pay now" }}
            </button>
        </form>
    }
}
