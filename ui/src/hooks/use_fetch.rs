use std::future::Future;
use std::rc::Rc;
use yew::prelude::*;

use super::{FetchSnapshot, FetchState, Refetch, RequestSequence, drive_fetch};
use crate::components::ErrorAlert;

/// Generic fetch hook return type
pub struct FetchHookReturn<T> {
    pub data: FetchState<T>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub refetch: Refetch,
}

impl<T: Clone> FetchHookReturn<T> {
    /// Render based on fetch state with contextual loading/error messages.
    ///
    /// Before the first successful fetch this shows "Loading {context}..."
    /// or the error with a retry button. Once data exists `render_fn` gets
    /// it along with whether a refetch is running and any refetch error;
    /// stale data stays on screen while a refetch fails.
    pub fn render<F>(&self, context: &str, render_fn: F) -> Html
    where
        F: Fn(&T, bool, Option<&String>) -> Html,
    {
        match self.data.as_ref() {
            Some(data) => render_fn(data, self.is_loading, self.error.as_ref()),
            None => match &self.error {
                Some(error) if !self.is_loading => html! {
                    <ErrorAlert
                        message={format!("Error loading {context}: {error}")}
                        on_retry={self.refetch.callback::<()>()}
                    />
                },
                _ => html! {
                    <div class="text-center py-12">
                        <p class="text-neutral-600 dark:text-neutral-400">
                            {format!("Loading {context}...")}
                        </p>
                    </div>
                },
            },
        }
    }
}

/// Generic fetch hook composer.
///
/// Fetches on mount and whenever `deps` changes. The fetch function
/// captures its inputs from the closure; `deps` only decides when the
/// closure is replaced and re-run. A fetch started for new deps supersedes
/// any fetch still in flight, whose result is then dropped.
///
/// # Example
///
/// ```rust,ignore
/// #[hook]
/// pub fn use_package(package_id: PackageId) -> FetchHookReturn<Package> {
///     use_fetch(package_id, move || async move {
///         get_api_client()
///             .get_package(package_id)
///             .await
///             .map_err(|e| e.to_string())
///     })
/// }
/// ```
#[hook]
pub fn use_fetch<T, D, F, Fut>(deps: D, fetch_fn: F) -> FetchHookReturn<T>
where
    T: Clone + 'static,
    D: PartialEq + Clone + 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<T, String>> + 'static,
{
    let snapshot = use_reducer(FetchSnapshot::<T>::default);
    let sequence = use_memo((), |_| RequestSequence::default());

    let refetch = {
        let dispatcher = snapshot.dispatcher();
        let sequence = (*sequence).clone();
        let fetch_fn = Rc::new(fetch_fn);

        use_memo(deps.clone(), move |_| {
            Refetch::new(move || {
                let ticket = sequence.issue();
                let dispatcher = dispatcher.clone();
                let fetch = fetch_fn();
                async move {
                    drive_fetch(ticket, fetch, move |event| {
                        dispatcher.dispatch(event)
                    })
                    .await;
                }
            })
        })
    };

    // Auto-fetch on mount and when deps change
    {
        let refetch = (*refetch).clone();
        use_effect_with(deps, move |_| refetch.emit());
    }

    // Nothing may commit after unmount
    {
        let sequence = (*sequence).clone();
        use_effect_with((), move |_| move || sequence.invalidate());
    }

    FetchHookReturn {
        data: snapshot.data.clone(),
        is_loading: snapshot.is_loading,
        error: snapshot.error.clone(),
        refetch: (*refetch).clone(),
    }
}
