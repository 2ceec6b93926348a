use wasm_bindgen::JsCast;
use yew::prelude::*;

/// A dialog over a dimmed backdrop. Clicking the backdrop itself (not the
/// dialog) closes it, unless `close_on_backdrop` is off.
#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub title: AttrValue,
    pub children: Html,
    pub on_close: Callback<()>,
    #[prop_or(true)]
    pub close_on_backdrop: bool,
}

#[function_component]
pub fn Modal(props: &ModalProps) -> Html {
    let backdrop_ref = use_node_ref();

    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        let backdrop_ref = backdrop_ref.clone();
        let close_on_backdrop = props.close_on_backdrop;

        Callback::from(move |e: MouseEvent| {
            if close_on_backdrop
                && let Some(backdrop) = backdrop_ref.cast::<web_sys::Element>()
                && let Some(target) = e.target()
                && target.dyn_ref::<web_sys::Element>() == Some(&backdrop)
            {
                on_close.emit(());
            }
        })
    };

    html! {
        <div
            ref={backdrop_ref}
            onclick={on_backdrop_click}
            class="fixed inset-0 bg-black bg-opacity-50 z-50 flex items-center justify-center p-4"
        >
            <div class="bg-white dark:bg-neutral-800 rounded-lg shadow-xl w-full max-w-md p-6">
                <h3 class="text-lg font-semibold text-neutral-900 dark:text-neutral-100 mb-4">
                    {&props.title}
                </h3>
                {props.children.clone()}
            </div>
        </div>
    }
}
