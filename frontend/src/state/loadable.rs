use crate::api::ApiError;
use leptos::*;
use std::future::Future;

/// Fetch lifecycle for a view's data: `Idle -> Loading -> Ready | Failed`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Loadable<T> {
    Idle,
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> Default for Loadable<T> {
    fn default() -> Self {
        Loadable::Idle
    }
}

impl<T> Loadable<T> {
    pub fn from_result(result: Result<T, ApiError>, fallback: &str) -> Self {
        match result {
            Ok(value) => Loadable::Ready(value),
            Err(err) => Loadable::Failed(err.message_or(fallback)),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Loadable::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Loadable::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Loadable::Failed(message) => Some(message),
            _ => None,
        }
    }
}

impl<T: Clone> Loadable<T> {
    pub fn ready_cloned(&self) -> Option<T> {
        self.ready().cloned()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestToken(u64);

/// Hands out increasing tokens per fetch slot. Only the latest token may
/// write its response back, so overlapping fetches settle on the most
/// recently issued request regardless of completion order.
#[derive(Clone, Copy)]
pub struct RequestTracker {
    latest: StoredValue<u64>,
}

impl Default for RequestTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl RequestTracker {
    pub fn new() -> Self {
        Self {
            latest: store_value(0),
        }
    }

    pub fn issue(&self) -> RequestToken {
        let next = self.latest.get_value().wrapping_add(1);
        self.latest.set_value(next);
        RequestToken(next)
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        self.latest.get_value() == token.0
    }
}

/// Issues a token immediately and returns a future that writes the outcome
/// of `request` into `target` unless a newer request was issued meanwhile.
pub fn load_latest<T, Fut>(
    tracker: RequestTracker,
    target: RwSignal<Loadable<T>>,
    fallback: &'static str,
    request: Fut,
) -> impl Future<Output = ()>
where
    T: 'static,
    Fut: Future<Output = Result<T, ApiError>>,
{
    let token = tracker.issue();
    target.set(Loadable::Loading);
    async move {
        let result = request.await;
        if tracker.is_current(token) {
            target.set(Loadable::from_result(result, fallback));
        } else {
            log::debug!("Discarding stale response for request {:?}", token);
        }
    }
}

pub fn spawn_load_latest<T, Fut>(
    tracker: RequestTracker,
    target: RwSignal<Loadable<T>>,
    fallback: &'static str,
    request: Fut,
) where
    T: 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    spawn_local(load_latest(tracker, target, fallback, request));
}
