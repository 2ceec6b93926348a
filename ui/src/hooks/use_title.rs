use yew::prelude::*;

const SITE_NAME: &str = "Data Packages";

/// Sets the document title to "{title} | Data Packages". No cleanup on
/// unmount since every page sets its own.
#[hook]
pub fn use_title(title: &str) {
    let title = format!("{title} | {SITE_NAME}");
    use_effect_with(title, |title| {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            doc.set_title(title);
        }
    });
}
