use payloads::currency::format_idr;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PriceDisplayProps {
    pub amount: u64,
    #[prop_or(AttrValue::from("font-semibold"))]
    pub class: AttrValue,
}

/// An amount of rupiah, e.g. "Rp 50.000".
#[function_component]
pub fn PriceDisplay(props: &PriceDisplayProps) -> Html {
    html! {
        <span class={props.class.clone()}>{format_idr(props.amount)}</span>
    }
}
