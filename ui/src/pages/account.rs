use payloads::requests::{validate_email, validate_name, validate_phone_number};
use payloads::{Customer, CustomerId, PhoneLine, PhoneLineId, PhoneLineStatus};
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::components::{
    ConfirmationModal, ErrorAlert, FormInput, Modal, PhoneLineStatusBadge,
};
use crate::hooks::{CustomerHandle, use_auth, use_customer, use_title};
use crate::utils::format_date;

#[derive(Properties, PartialEq)]
pub struct AccountPageProps {
    pub customer_id: CustomerId,
}

#[derive(Clone, PartialEq)]
enum Dialog {
    EditProfile,
    AddLine,
    RemoveLine(PhoneLine),
}

#[function_component]
pub fn AccountPage(props: &AccountPageProps) -> Html {
    use_title("Account");
    let customer = use_customer(props.customer_id);
    let dialog = use_state(|| None::<Dialog>);

    let open = |which: Dialog| {
        let dialog = dialog.clone();
        Callback::from(move |_: MouseEvent| dialog.set(Some(which.clone())))
    };
    let close = {
        let dialog = dialog.clone();
        Callback::from(move |_: ()| dialog.set(None))
    };
    let on_remove = {
        let dialog = dialog.clone();
        Callback::from(move |line: PhoneLine| {
            dialog.set(Some(Dialog::RemoveLine(line)))
        })
    };

    let profile = match customer.customer.as_ref() {
        Some(record) => html! {
            <ProfileCard
                customer={record.clone()}
                on_edit={open(Dialog::EditProfile)}
            />
        },
        None if customer.is_loading => html! {
            <p class="text-sm text-neutral-600 dark:text-neutral-400">{"Loading profile..."}</p>
        },
        None => html! {},
    };

    html! {
        <div class="space-y-8">
            <h1 class="text-2xl font-bold">{"Account"}</h1>

            if let Some(error) = customer.error.clone() {
                <ErrorAlert message={error} />
            }

            {profile}

            <section class="bg-white dark:bg-neutral-800 rounded-lg border border-neutral-200 dark:border-neutral-700 p-6">
                <div class="flex items-center justify-between mb-4">
                    <h2 class="font-semibold">{"Phone lines"}</h2>
                    <button
                        onclick={open(Dialog::AddLine)}
                        class="text-sm font-medium px-3 py-1.5 rounded-md bg-neutral-900 text-white dark:bg-neutral-100 dark:text-neutral-900"
                    >
                        {"Add line"}
                    </button>
                </div>
                <PhoneLineList customer={customer.clone()} {on_remove} />
            </section>

            {match (*dialog).clone() {
                Some(Dialog::EditProfile) => html! {
                    <EditProfileModal customer={customer.clone()} on_close={close.clone()} />
                },
                Some(Dialog::AddLine) => html! {
                    <AddLineModal customer={customer.clone()} on_close={close.clone()} />
                },
                Some(Dialog::RemoveLine(line)) => html! {
                    <RemoveLineModal customer={customer.clone()} {line} on_close={close.clone()} />
                },
                None => html! {},
            }}
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ProfileCardProps {
    customer: Customer,
    on_edit: Callback<MouseEvent>,
}

#[function_component]
fn ProfileCard(props: &ProfileCardProps) -> Html {
    let customer = &props.customer;
    html! {
        <section class="bg-white dark:bg-neutral-800 rounded-lg border border-neutral-200 dark:border-neutral-700 p-6 flex items-center gap-4">
            <div class="w-14 h-14 rounded-full bg-neutral-900 dark:bg-neutral-100 text-white dark:text-neutral-900 flex items-center justify-center text-xl font-semibold">
                {customer.initial()}
            </div>
            <div class="flex-1">
                <p class="font-semibold">{customer.name.clone()}</p>
                <p class="text-sm text-neutral-600 dark:text-neutral-400">{customer.email.clone()}</p>
                <p class="text-xs text-neutral-500 mt-1">
                    {format!("Member since {}", format_date(customer.registration_date))}
                </p>
            </div>
            <button onclick={props.on_edit.clone()} class="text-sm font-medium underline">
                {"Edit profile"}
            </button>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct PhoneLineListProps {
    customer: CustomerHandle,
    on_remove: Callback<PhoneLine>,
}

#[function_component]
fn PhoneLineList(props: &PhoneLineListProps) -> Html {
    let customer = &props.customer;
    if !customer.phone_lines.is_fetched() {
        return html! {
            <p class="text-sm text-neutral-600 dark:text-neutral-400">{"Loading phone lines..."}</p>
        };
    }
    if customer.lines().is_empty() {
        return html! {
            <p class="text-sm text-neutral-600 dark:text-neutral-400">
                {"No phone lines yet. Add one to start buying packages."}
            </p>
        };
    }

    let on_status = |id: PhoneLineId| {
        let customer = customer.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let Some(status) = PhoneLineStatus::from_value(&select.value())
            else {
                return;
            };
            let customer = customer.clone();
            yew::platform::spawn_local(async move {
                // failures surface through the handle's error
                let _ = customer.update_phone_line(id, status).await;
            });
        })
    };

    html! {
        <ul class="divide-y divide-neutral-200 dark:divide-neutral-700">
            {for customer.lines().iter().map(|line| {
                let on_remove = {
                    let line = line.clone();
                    props.on_remove.reform(move |_: MouseEvent| line.clone())
                };
                html! {
                    <li key={line.id.0} class="py-3 flex items-center justify-between gap-4">
                        <div>
                            <p class="font-mono">{line.phone_number.clone()}</p>
                            <p class="text-xs text-neutral-500">
                                {match line.last_purchase_date {
                                    Some(date) => format!("Last top-up {}", format_date(date)),
                                    None => "Never topped up".to_string(),
                                }}
                            </p>
                        </div>
                        <div class="flex items-center gap-3">
                            <PhoneLineStatusBadge status={line.status} />
                            <select
                                aria-label="Status"
                                onchange={on_status(line.id)}
                                disabled={customer.is_loading}
                                class="text-sm border border-neutral-300 dark:border-neutral-600 rounded-md px-2 py-1 bg-white dark:bg-neutral-700"
                            >
                                {for PhoneLineStatus::ALL.into_iter().map(|status| html! {
                                    <option
                                        value={status.to_string()}
                                        selected={status == line.status}
                                    >
                                        {status.label()}
                                    </option>
                                })}
                            </select>
                            <button
                                onclick={on_remove}
                                disabled={customer.is_loading}
                                class="text-sm text-red-600 dark:text-red-400 hover:underline disabled:opacity-50"
                            >
                                {"Remove"}
                            </button>
                        </div>
                    </li>
                }
            })}
        </ul>
    }
}

#[derive(Properties, PartialEq)]
struct DialogProps {
    customer: CustomerHandle,
    on_close: Callback<()>,
}

#[function_component]
fn EditProfileModal(props: &DialogProps) -> Html {
    let auth = use_auth();
    let current = props.customer.customer.as_ref();
    let name = use_state(|| current.map(|c| c.name.clone()).unwrap_or_default());
    let email =
        use_state(|| current.map(|c| c.email.clone()).unwrap_or_default());
    let touched = use_state(|| false);
    let saving = use_state(|| false);
    let error = use_state(|| None::<String>);

    let name_error = touched
        .then(|| validate_name(&name).error_message())
        .flatten()
        .map(AttrValue::from);
    let email_error = touched
        .then(|| validate_email(&email).error_message())
        .flatten()
        .map(AttrValue::from);

    let on_save = {
        let customer = props.customer.clone();
        let on_close = props.on_close.clone();
        let name = name.clone();
        let email = email.clone();
        let touched = touched.clone();
        let saving = saving.clone();
        let error = error.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            touched.set(true);
            let customer = customer.clone();
            let on_close = on_close.clone();
            let auth = auth.clone();
            let (name, email) = ((*name).clone(), (*email).clone());
            let saving = saving.clone();
            let error = error.clone();
            yew::platform::spawn_local(async move {
                saving.set(true);
                match customer.update_customer(&name, &email).await {
                    Ok(updated) => {
                        auth.replace_customer(updated);
                        on_close.emit(());
                    }
                    Err(e) => {
                        error.set(Some(e));
                        saving.set(false);
                    }
                }
            });
        })
    };

    let setter = |state: &UseStateHandle<String>| {
        let state = state.clone();
        Callback::from(move |value: String| state.set(value))
    };

    html! {
        <Modal title="Edit profile" on_close={props.on_close.clone()}>
            <form onsubmit={on_save} class="space-y-4">
                if let Some(message) = (*error).clone() {
                    <ErrorAlert {message} />
                }
                <FormInput
                    id="name"
                    label="Name"
                    value={(*name).clone()}
                    on_input={setter(&name)}
                    error={name_error}
                    disabled={*saving}
                />
                <FormInput
                    id="email"
                    label="Email"
                    input_type="email"
                    value={(*email).clone()}
                    on_input={setter(&email)}
                    error={email_error}
                    disabled={*saving}
                />
                <DialogButtons
                    on_cancel={props.on_close.clone()}
                    busy={*saving}
                    submit_text="Save"
                />
            </form>
        </Modal>
    }
}

#[function_component]
fn AddLineModal(props: &DialogProps) -> Html {
    let number = use_state(String::new);
    let touched = use_state(|| false);
    let saving = use_state(|| false);
    let error = use_state(|| None::<String>);

    let validation_error = touched
        .then(|| validate_phone_number(&number).error_message())
        .flatten()
        .map(AttrValue::from);

    let on_save = {
        let customer = props.customer.clone();
        let on_close = props.on_close.clone();
        let number = number.clone();
        let touched = touched.clone();
        let saving = saving.clone();
        let error = error.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            touched.set(true);
            if !validate_phone_number(&number).is_valid() {
                return;
            }
            let customer = customer.clone();
            let on_close = on_close.clone();
            let number = (*number).clone();
            let saving = saving.clone();
            let error = error.clone();
            yew::platform::spawn_local(async move {
                saving.set(true);
                match customer.add_phone_line(&number).await {
                    Ok(_) => on_close.emit(()),
                    Err(e) => {
                        error.set(Some(e));
                        saving.set(false);
                    }
                }
            });
        })
    };

    let on_input = {
        let number = number.clone();
        Callback::from(move |value: String| number.set(value))
    };

    html! {
        <Modal title="Add phone line" on_close={props.on_close.clone()}>
            <form onsubmit={on_save} class="space-y-4">
                if let Some(message) = (*error).clone() {
                    <ErrorAlert {message} />
                }
                <FormInput
                    id="phone-number"
                    label="Phone number"
                    input_type="tel"
                    value={(*number).clone()}
                    {on_input}
                    placeholder="+6281234567890"
                    error={validation_error}
                    disabled={*saving}
                />
                <DialogButtons
                    on_cancel={props.on_close.clone()}
                    busy={*saving}
                    submit_text="Add line"
                />
            </form>
        </Modal>
    }
}

#[derive(Properties, PartialEq)]
struct RemoveLineModalProps {
    customer: CustomerHandle,
    line: PhoneLine,
    on_close: Callback<()>,
}

#[function_component]
fn RemoveLineModal(props: &RemoveLineModalProps) -> Html {
    let removing = use_state(|| false);
    let error = use_state(|| None::<String>);

    let on_confirm = {
        let customer = props.customer.clone();
        let on_close = props.on_close.clone();
        let line_id = props.line.id;
        let removing = removing.clone();
        let error = error.clone();
        Callback::from(move |_: ()| {
            let customer = customer.clone();
            let on_close = on_close.clone();
            let removing = removing.clone();
            let error = error.clone();
            yew::platform::spawn_local(async move {
                removing.set(true);
                match customer.delete_phone_line(line_id).await {
                    Ok(()) => on_close.emit(()),
                    Err(e) => {
                        error.set(Some(e));
                        removing.set(false);
                    }
                }
            });
        })
    };

    html! {
        <ConfirmationModal
            title="Remove phone line"
            message={format!(
                "{} will be removed from your account. Its purchase history is kept.",
                props.line.phone_number
            )}
            confirm_text="Remove"
            {on_confirm}
            on_close={props.on_close.clone()}
            is_loading={*removing}
            error_message={(*error).clone().map(AttrValue::from)}
        />
    }
}

#[derive(Properties, PartialEq)]
struct DialogButtonsProps {
    on_cancel: Callback<()>,
    busy: bool,
    submit_text: AttrValue,
}

#[function_component]
fn DialogButtons(props: &DialogButtonsProps) -> Html {
    html! {
        <div class="flex justify-end gap-3 pt-2">
            <button
                type="button"
                onclick={props.on_cancel.reform(|_: MouseEvent| ())}
                disabled={props.busy}
                class="px-4 py-2 text-sm font-medium border border-neutral-300 dark:border-neutral-600 rounded-md disabled:opacity-50"
            >
                {"Cancel"}
            </button>
            <button
                type="submit"
                disabled={props.busy}
                class="px-4 py-2 text-sm font-medium text-white bg-neutral-900 dark:bg-neutral-100 dark:text-neutral-900 rounded-md disabled:opacity-50"
            >
                {if props.busy { "Saving..." } else { props.submit_text.as_str() }}
            </button>
        </div>
    }
}
