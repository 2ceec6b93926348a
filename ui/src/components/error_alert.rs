use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ErrorAlertProps {
    pub message: AttrValue,
    /// Shows a "Try again" button when set.
    #[prop_or_default]
    pub on_retry: Option<Callback<()>>,
}

#[function_component]
pub fn ErrorAlert(props: &ErrorAlertProps) -> Html {
    html! {
        <div class="p-4 rounded-md bg-red-50 dark:bg-red-900/20 border border-red-200 dark:border-red-800 flex items-start justify-between gap-4">
            <p class="text-sm text-red-700 dark:text-red-400">{&props.message}</p>
            if let Some(on_retry) = &props.on_retry {
                <button
                    onclick={on_retry.reform(|_: MouseEvent| ())}
                    class="text-sm font-medium text-red-700 dark:text-red-400 underline whitespace-nowrap"
                >
                    {"Try again"}
                </button>
            }
        </div>
    }
}
