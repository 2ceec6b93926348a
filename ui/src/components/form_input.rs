use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FormInputProps {
    pub id: AttrValue,
    pub label: AttrValue,
    pub value: AttrValue,
    pub on_input: Callback<String>,
    #[prop_or(AttrValue::from("text"))]
    pub input_type: AttrValue,
    #[prop_or_default]
    pub placeholder: AttrValue,
    #[prop_or_default]
    pub autocomplete: Option<AttrValue>,
    /// Validation message shown under the field.
    #[prop_or_default]
    pub error: Option<AttrValue>,
    #[prop_or_default]
    pub disabled: bool,
}

/// A labelled text input reporting its value on every keystroke.
#[function_component]
pub fn FormInput(props: &FormInputProps) -> Html {
    let oninput = props.on_input.reform(|e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        input.value()
    });

    let border = if props.error.is_some() {
        "border-red-400 dark:border-red-500 focus:ring-red-500"
    } else {
        "border-neutral-300 dark:border-neutral-600 focus:ring-neutral-500"
    };

    html! {
        <div>
            <label for={props.id.clone()} class="block text-sm font-medium text-neutral-700 dark:text-neutral-300 mb-2">
                {&props.label}
            </label>
            <input
                id={props.id.clone()}
                name={props.id.clone()}
                type={props.input_type.clone()}
                value={props.value.clone()}
                placeholder={props.placeholder.clone()}
                autocomplete={props.autocomplete.clone()}
                disabled={props.disabled}
                {oninput}
                class={classes!(
                    "w-full", "px-3", "py-2", "border", "rounded-md", "shadow-sm",
                    "bg-white", "dark:bg-neutral-700", "text-neutral-900",
                    "dark:text-neutral-100", "focus:outline-none", "focus:ring-2",
                    "disabled:opacity-50", border
                )}
            />
            if let Some(error) = &props.error {
                <p class="mt-1 text-sm text-red-600 dark:text-red-400">{error}</p>
            }
        </div>
    }
}
