use payloads::{PhoneLine, PhoneLineId, PhoneLineStatus};
use yew::prelude::*;

use crate::components::PhoneLineStatusBadge;

#[derive(Properties, PartialEq)]
pub struct PhoneLineSelectorProps {
    pub lines: Vec<PhoneLine>,
    pub selected: Option<PhoneLineId>,
    pub on_select: Callback<PhoneLineId>,
    #[prop_or_default]
    pub disabled: bool,
}

/// Radio list of the customer's lines. Only active lines can receive a
/// package, so the others are shown but not selectable.
#[function_component]
pub fn PhoneLineSelector(props: &PhoneLineSelectorProps) -> Html {
    if props.lines.is_empty() {
        return html! {
            <p class="text-sm text-neutral-600 dark:text-neutral-400">
                {"You have no phone lines yet. Add one from your account page."}
            </p>
        };
    }

    html! {
        <div class="space-y-2">
            {for props.lines.iter().map(|line| {
                let selectable =
                    line.status == PhoneLineStatus::Active && !props.disabled;
                let checked = props.selected == Some(line.id);
                let onchange = {
                    let id = line.id;
                    props.on_select.reform(move |_: Event| id)
                };
                html! {
                    <label
                        key={line.id.0}
                        class={classes!(
                            "flex", "items-center", "justify-between", "gap-3",
                            "p-3", "rounded-md", "border",
                            if checked { "border-neutral-900 dark:border-neutral-100" }
                            else { "border-neutral-200 dark:border-neutral-700" },
                            (!selectable).then_some("opacity-50"),
                        )}
                    >
                        <span class="flex items-center gap-3">
                            <input
                                type="radio"
                                name="phone-line"
                                {checked}
                                disabled={!selectable}
                                {onchange}
                            />
                            <span class="font-mono">{line.phone_number.clone()}</span>
                        </span>
                        <PhoneLineStatusBadge status={line.status} />
                    </label>
                }
            })}
        </div>
    }
}
