use yew::prelude::*;

use crate::components::{ErrorAlert, Modal};

#[derive(Properties, PartialEq)]
pub struct ConfirmationModalProps {
    /// e.g. "Remove phone line"
    pub title: AttrValue,
    pub message: AttrValue,
    pub confirm_text: AttrValue,
    pub on_confirm: Callback<()>,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub is_loading: bool,
    #[prop_or_default]
    pub error_message: Option<AttrValue>,
}

/// Asks before a destructive action.
#[function_component]
pub fn ConfirmationModal(props: &ConfirmationModalProps) -> Html {
    let on_confirm = props.on_confirm.reform(|_: MouseEvent| ());
    let on_cancel = props.on_close.reform(|_: MouseEvent| ());
    let on_close = if props.is_loading {
        Callback::noop()
    } else {
        props.on_close.clone()
    };

    html! {
        <Modal title={props.title.clone()} {on_close}>
            <div class="space-y-4">
                <p class="text-sm text-neutral-600 dark:text-neutral-400">
                    {&props.message}
                </p>
                if let Some(error) = &props.error_message {
                    <ErrorAlert message={error.clone()} />
                }
            </div>
            <div class="flex justify-end gap-3 mt-6">
                <button
                    onclick={on_cancel}
                    disabled={props.is_loading}
                    class="px-4 py-2 text-sm font-medium text-neutral-700 dark:text-neutral-300
                           bg-white dark:bg-neutral-700 border border-neutral-300 dark:border-neutral-600
                           rounded-md hover:bg-neutral-50 dark:hover:bg-neutral-600
                           disabled:opacity-50 disabled:cursor-not-allowed transition-colors"
                >
                    {"Cancel"}
                </button>
                <button
                    onclick={on_confirm}
                    disabled={props.is_loading}
                    class="px-4 py-2 text-sm font-medium text-white
                           bg-red-600 hover:bg-red-700 dark:bg-red-700 dark:hover:bg-red-600
                           rounded-md disabled:opacity-50 disabled:cursor-not-allowed transition-colors"
                >
                    {if props.is_loading { "Working..." } else { props.confirm_text.as_str() }}
                </button>
            </div>
        </Modal>
    }
}
