//! Data hooks.
//!
//! Every server read goes through [`use_fetch`], which keeps a
//! [`FetchSnapshot`] per hook instance. Only the most recently started fetch
//! of an instance may commit to that snapshot: each fetch holds a
//! [`RequestTicket`] and its result is dropped if a newer ticket has been
//! issued in the meantime, or the component has unmounted.

use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;

use futures::FutureExt;
use futures::future::LocalBoxFuture;
use yew::prelude::*;

pub mod use_auth;
pub mod use_customer;
pub mod use_fetch;
pub mod use_packages;
pub mod use_title;
pub mod use_transactions;

pub use use_auth::use_auth;
pub use use_customer::{CustomerHandle, use_customer};
pub use use_fetch::{FetchHookReturn, use_fetch};
pub use use_packages::{use_package, use_packages};
pub use use_title::use_title;
pub use use_transactions::{use_transaction, use_transactions};

/// Distinguishes "not loaded yet" from "loaded, possibly empty".
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    NotFetched,
    Fetched(T),
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self::NotFetched
    }
}

impl<T> FetchState<T> {
    pub fn is_fetched(&self) -> bool {
        matches!(self, Self::Fetched(_))
    }

    pub fn as_ref(&self) -> Option<&T> {
        match self {
            Self::Fetched(data) => Some(data),
            Self::NotFetched => None,
        }
    }
}

/// Everything a fetch hook exposes about its producer.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchSnapshot<T> {
    pub data: FetchState<T>,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl<T> Default for FetchSnapshot<T> {
    fn default() -> Self {
        Self {
            data: FetchState::NotFetched,
            is_loading: false,
            error: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FetchEvent<T> {
    Started,
    Succeeded(T),
    Failed(String),
}

impl<T: Clone> FetchSnapshot<T> {
    /// A failure keeps whatever data was already there.
    pub fn apply(&self, event: FetchEvent<T>) -> Self {
        match event {
            FetchEvent::Started => Self {
                data: self.data.clone(),
                is_loading: true,
                error: None,
            },
            FetchEvent::Succeeded(data) => Self {
                data: FetchState::Fetched(data),
                is_loading: false,
                error: None,
            },
            FetchEvent::Failed(error) => Self {
                data: self.data.clone(),
                is_loading: false,
                error: Some(error),
            },
        }
    }
}

impl<T: Clone> Reducible for FetchSnapshot<T> {
    type Action = FetchEvent<T>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(self.apply(action))
    }
}

/// Per-instance generation counter. Cloning shares the counter.
#[derive(Debug, Clone, Default)]
pub struct RequestSequence {
    latest: Rc<Cell<u64>>,
}

/// Proof that a fetch was started at a given generation.
#[derive(Debug)]
pub struct RequestTicket {
    sequence: RequestSequence,
    generation: u64,
}

impl RequestSequence {
    /// Start a new request, superseding every earlier ticket.
    pub fn issue(&self) -> RequestTicket {
        let generation = self.latest.get() + 1;
        self.latest.set(generation);
        RequestTicket {
            sequence: self.clone(),
            generation,
        }
    }

    /// Supersede every outstanding ticket without starting a request.
    pub fn invalidate(&self) {
        self.latest.set(self.latest.get() + 1);
    }
}

impl RequestTicket {
    pub fn is_current(&self) -> bool {
        self.sequence.latest.get() == self.generation
    }
}

/// Run one fetch cycle, reporting through `commit`.
///
/// `Started` is always reported. The outcome is reported only if `ticket` is
/// still current when `fetch` resolves. Returns whether it was.
pub async fn drive_fetch<T, Fut>(
    ticket: RequestTicket,
    fetch: Fut,
    commit: impl Fn(FetchEvent<T>),
) -> bool
where
    Fut: Future<Output = Result<T, String>>,
{
    commit(FetchEvent::Started);
    let result = fetch.await;
    if !ticket.is_current() {
        tracing::debug!(
            generation = ticket.generation,
            "discarding superseded fetch"
        );
        return false;
    }
    commit(match result {
        Ok(data) => FetchEvent::Succeeded(data),
        Err(e) => FetchEvent::Failed(e),
    });
    true
}

/// Re-runs a hook's fetch outside of its dependency-triggered path.
#[derive(Clone)]
pub struct Refetch {
    cycle: Rc<dyn Fn() -> LocalBoxFuture<'static, ()>>,
}

impl Refetch {
    pub fn new<Fut>(cycle: impl Fn() -> Fut + 'static) -> Self
    where
        Fut: Future<Output = ()> + 'static,
    {
        Self {
            cycle: Rc::new(move || cycle().boxed_local()),
        }
    }

    /// Start a fetch and return immediately.
    pub fn emit(&self) {
        yew::platform::spawn_local((self.cycle)());
    }

    /// Start a fetch and wait until its outcome has been committed (or
    /// discarded, if something newer started meanwhile).
    pub async fn run(&self) {
        (self.cycle)().await
    }

    pub fn callback<IN>(&self) -> Callback<IN> {
        let refetch = self.clone();
        Callback::from(move |_| refetch.emit())
    }
}

impl PartialEq for Refetch {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.cycle, &other.cycle)
    }
}

/// Progress of a mutation, for the hook state that mirrors it.
#[derive(Debug, Clone, PartialEq)]
pub enum MutationEvent {
    Started,
    Failed(String),
    Finished,
}

/// Send a mutation, then re-fetch what it changed.
///
/// `request` is `Err` when the input was rejected locally; nothing is sent
/// and `refetch` is skipped. On success this resolves only after `refetch`
/// has committed, so callers observe fresh data. A failed request is not
/// followed by a refetch.
pub async fn run_mutation<T, E, Fut>(
    request: Result<Fut, String>,
    refetch: &Refetch,
    report: impl Fn(MutationEvent),
) -> Result<T, String>
where
    Fut: Future<Output = Result<T, E>>,
    E: std::fmt::Display,
{
    report(MutationEvent::Started);
    let outcome = match request {
        Ok(request) => request.await.map_err(|e| e.to_string()),
        Err(message) => Err(message),
    };
    let result = match outcome {
        Ok(value) => {
            refetch.run().await;
            Ok(value)
        }
        Err(message) => {
            report(MutationEvent::Failed(message.clone()));
            Err(message)
        }
    };
    report(MutationEvent::Finished);
    result
}

/// Hook state for a mutation in flight and its last error.
#[derive(Clone, PartialEq)]
pub struct MutationState {
    pub busy: UseStateHandle<bool>,
    pub error: UseStateHandle<Option<String>>,
}

impl MutationState {
    pub fn reporter(&self) -> impl Fn(MutationEvent) + use<> {
        let state = self.clone();
        move |event| match event {
            MutationEvent::Started => {
                state.busy.set(true);
                state.error.set(None);
            }
            MutationEvent::Failed(message) => state.error.set(Some(message)),
            MutationEvent::Finished => state.busy.set(false),
        }
    }
}

#[hook]
pub fn use_mutation_state() -> MutationState {
    MutationState {
        busy: use_state(|| false),
        error: use_state(|| None::<String>),
    }
}

/// Folds several optional errors into the first one present.
pub fn first_error<'a>(
    errors: impl IntoIterator<Item = Option<&'a String>>,
) -> Option<String> {
    errors.into_iter().flatten().next().cloned()
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use futures::channel::oneshot;
    use futures::executor::LocalPool;
    use futures::task::LocalSpawnExt;

    use super::*;

    /// A snapshot driven the same way the reducer would drive it.
    #[derive(Clone, Default)]
    struct Harness {
        snapshot: Rc<RefCell<FetchSnapshot<&'static str>>>,
    }

    impl Harness {
        fn commit(&self) -> impl Fn(FetchEvent<&'static str>) + use<> {
            let snapshot = self.snapshot.clone();
            move |event| {
                let next = snapshot.borrow().apply(event);
                *snapshot.borrow_mut() = next;
            }
        }

        fn get(&self) -> FetchSnapshot<&'static str> {
            self.snapshot.borrow().clone()
        }
    }

    /// A fetch whose result is supplied later through the sender.
    fn pending() -> (
        oneshot::Sender<Result<&'static str, String>>,
        impl Future<Output = Result<&'static str, String>>,
    ) {
        let (tx, rx) = oneshot::channel();
        let fut = async move { rx.await.unwrap_or(Err("dropped".into())) };
        (tx, fut)
    }

    #[test]
    fn success_then_failure_keeps_data() {
        let mut pool = LocalPool::new();
        let harness = Harness::default();
        let sequence = RequestSequence::default();

        let ok = drive_fetch(
            sequence.issue(),
            async { Ok("first") },
            harness.commit(),
        );
        assert!(pool.run_until(ok));
        assert_eq!(
            harness.get(),
            FetchSnapshot {
                data: FetchState::Fetched("first"),
                is_loading: false,
                error: None,
            }
        );

        let failed = drive_fetch(
            sequence.issue(),
            async { Err("HTTP 500".to_string()) },
            harness.commit(),
        );
        assert!(pool.run_until(failed));
        let snapshot = harness.get();
        assert_eq!(snapshot.data, FetchState::Fetched("first"));
        assert_eq!(snapshot.error.as_deref(), Some("HTTP 500"));
        assert!(!snapshot.is_loading);
    }

    #[test]
    fn late_stale_response_is_discarded() {
        let mut pool = LocalPool::new();
        let spawner = pool.spawner();
        let harness = Harness::default();
        let sequence = RequestSequence::default();

        let (resolve_a, fetch_a) = pending();
        let (resolve_b, fetch_b) = pending();
        let a = drive_fetch(sequence.issue(), fetch_a, harness.commit());
        let b = drive_fetch(sequence.issue(), fetch_b, harness.commit());
        let a_committed = Rc::new(Cell::new(None));
        {
            let a_committed = a_committed.clone();
            spawner
                .spawn_local(async move { a_committed.set(Some(a.await)) })
                .unwrap();
        }
        spawner.spawn_local(async move { b.await; }).unwrap();
        pool.run_until_stalled();
        assert!(harness.get().is_loading);

        // B finishes first, then the older A arrives
        resolve_b.send(Ok("newer")).unwrap();
        pool.run_until_stalled();
        resolve_a.send(Ok("older")).unwrap();
        pool.run_until_stalled();

        assert_eq!(a_committed.get(), Some(false));
        assert_eq!(
            harness.get(),
            FetchSnapshot {
                data: FetchState::Fetched("newer"),
                is_loading: false,
                error: None,
            }
        );
    }

    #[test]
    fn stale_response_does_not_end_newer_loading() {
        let mut pool = LocalPool::new();
        let spawner = pool.spawner();
        let harness = Harness::default();
        let sequence = RequestSequence::default();

        let (resolve_a, fetch_a) = pending();
        let (resolve_b, fetch_b) = pending();
        let a = drive_fetch(sequence.issue(), fetch_a, harness.commit());
        let b = drive_fetch(sequence.issue(), fetch_b, harness.commit());
        spawner.spawn_local(async move { a.await; }).unwrap();
        spawner.spawn_local(async move { b.await; }).unwrap();
        pool.run_until_stalled();

        resolve_a.send(Err("old failure".into())).unwrap();
        pool.run_until_stalled();
        let snapshot = harness.get();
        assert!(snapshot.is_loading);
        assert_eq!(snapshot.error, None);

        resolve_b.send(Ok("latest")).unwrap();
        pool.run_until_stalled();
        assert_eq!(harness.get().data, FetchState::Fetched("latest"));
    }

    #[test]
    fn invalidation_drops_in_flight_results() {
        let mut pool = LocalPool::new();
        let spawner = pool.spawner();
        let harness = Harness::default();
        let sequence = RequestSequence::default();

        let (resolve, fetch) = pending();
        let fut = drive_fetch(sequence.issue(), fetch, harness.commit());
        spawner.spawn_local(async move { fut.await; }).unwrap();
        pool.run_until_stalled();

        // unmount
        sequence.invalidate();
        resolve.send(Ok("too late")).unwrap();
        pool.run_until_stalled();
        assert_eq!(harness.get().data, FetchState::NotFetched);
    }

    #[test]
    fn refetch_run_waits_for_the_cycle() {
        let mut pool = LocalPool::new();
        let harness = Harness::default();
        let sequence = RequestSequence::default();

        let refetch = {
            let harness = harness.clone();
            Refetch::new(move || {
                let ticket = sequence.issue();
                let commit = harness.commit();
                async move {
                    drive_fetch(ticket, async { Ok("fresh") }, commit).await;
                }
            })
        };
        pool.run_until(refetch.run());
        assert_eq!(harness.get().data, FetchState::Fetched("fresh"));
        assert!(refetch == refetch.clone());
    }

    #[test]
    fn tickets_supersede_each_other() {
        let sequence = RequestSequence::default();
        let first = sequence.issue();
        assert!(first.is_current());
        let second = sequence.issue();
        assert!(!first.is_current());
        assert!(second.is_current());
        sequence.invalidate();
        assert!(!second.is_current());
    }

    #[test]
    fn first_error_wins() {
        let a = "a".to_string();
        let b = "b".to_string();
        assert_eq!(first_error([None, Some(&a), Some(&b)]), Some(a.clone()));
        assert_eq!(first_error([None, None]), None);
    }

    /// A refetch whose one fetch stays pending until the sender is used.
    /// Also counts how many cycles were started.
    fn held_refetch(
        harness: &Harness,
    ) -> (
        oneshot::Sender<Result<&'static str, String>>,
        Refetch,
        Rc<Cell<u32>>,
    ) {
        let (release, fetch) = pending();
        let fetch = Rc::new(RefCell::new(Some(fetch)));
        let runs = Rc::new(Cell::new(0));
        let sequence = RequestSequence::default();
        let refetch = {
            let harness = harness.clone();
            let runs = runs.clone();
            Refetch::new(move || {
                runs.set(runs.get() + 1);
                let ticket = sequence.issue();
                let commit = harness.commit();
                let fetch = fetch.borrow_mut().take();
                async move {
                    if let Some(fetch) = fetch {
                        drive_fetch(ticket, fetch, commit).await;
                    }
                }
            })
        };
        (release, refetch, runs)
    }

    fn recorder() -> (
        Rc<RefCell<Vec<MutationEvent>>>,
        impl Fn(MutationEvent) + 'static,
    ) {
        let events = Rc::new(RefCell::new(Vec::new()));
        let record = {
            let events = events.clone();
            move |event: MutationEvent| events.borrow_mut().push(event)
        };
        (events, record)
    }

    #[test]
    fn mutation_resolves_after_refetch_commits() {
        let mut pool = LocalPool::new();
        let spawner = pool.spawner();
        let harness = Harness::default();
        let (release_refetch, refetch, runs) = held_refetch(&harness);
        let (events, record) = recorder();

        let (respond, response) = oneshot::channel::<Result<u64, String>>();
        let request =
            Ok(async move { response.await.unwrap_or(Err("dropped".into())) });
        let outcome = Rc::new(RefCell::new(None));
        {
            let outcome = outcome.clone();
            spawner
                .spawn_local(async move {
                    let result = run_mutation(request, &refetch, record).await;
                    *outcome.borrow_mut() = Some(result);
                })
                .unwrap();
        }
        pool.run_until_stalled();
        assert_eq!(*events.borrow(), vec![MutationEvent::Started]);
        assert_eq!(runs.get(), 0);

        // the write succeeded; the history is being fetched again
        respond.send(Ok(4)).unwrap();
        pool.run_until_stalled();
        assert_eq!(runs.get(), 1);
        assert!(harness.get().is_loading);
        assert_eq!(*outcome.borrow(), None);

        release_refetch.send(Ok("with new row")).unwrap();
        pool.run_until_stalled();
        assert_eq!(*outcome.borrow(), Some(Ok(4)));
        assert_eq!(harness.get().data, FetchState::Fetched("with new row"));
        assert_eq!(
            *events.borrow(),
            vec![MutationEvent::Started, MutationEvent::Finished]
        );
    }

    #[test]
    fn failed_mutation_reports_and_skips_refetch() {
        let mut pool = LocalPool::new();
        let harness = Harness::default();
        let (_release, refetch, runs) = held_refetch(&harness);
        let (events, record) = recorder();

        let message = "Phone line 1 does not belong to customer 2";
        let request = Ok(async move { Err::<u64, _>(message.to_string()) });
        let result = pool.run_until(run_mutation(request, &refetch, record));

        assert_eq!(result, Err(message.to_string()));
        assert_eq!(runs.get(), 0);
        assert_eq!(harness.get().data, FetchState::NotFetched);
        assert_eq!(
            *events.borrow(),
            vec![
                MutationEvent::Started,
                MutationEvent::Failed(message.to_string()),
                MutationEvent::Finished,
            ]
        );
    }

    #[test]
    fn rejected_input_is_never_sent() {
        let mut pool = LocalPool::new();
        let harness = Harness::default();
        let (_release, refetch, runs) = held_refetch(&harness);
        let (events, record) = recorder();

        let request: Result<std::future::Ready<Result<u64, String>>, String> =
            Err("Phone number is required".into());
        let result = pool.run_until(run_mutation(request, &refetch, record));

        assert_eq!(result, Err("Phone number is required".to_string()));
        assert_eq!(runs.get(), 0);
        assert_eq!(
            events.borrow().last(),
            Some(&MutationEvent::Finished)
        );
        assert!(
            events
                .borrow()
                .contains(&MutationEvent::Failed("Phone number is required".into()))
        );
    }
}
