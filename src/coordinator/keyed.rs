//! Generic keyed fetch coordinator.

use super::fetch_state::FetchState;
use crate::domain::Result;
use futures_util::future::BoxFuture;
use std::fmt;
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Produces the future that fetches data for one key.
pub type Fetcher<K, T> = Arc<dyn Fn(K) -> BoxFuture<'static, Result<T>> + Send + Sync>;

/// Answers a key immediately, without a fetch, when it returns `Some`.
pub type Shortcut<K, T> = Arc<dyn Fn(&K) -> Option<T> + Send + Sync>;

/// Turns a key into exactly one fetch and exposes the outcome as
/// [`FetchState`].
///
/// Requests may complete out of order. Each request takes the next
/// `request_id` and its response is written back only if that id is still
/// current, so a superseded response is dropped instead of overwriting newer
/// data.
pub struct Coordinator<K, T> {
    name: &'static str,
    fetcher: Fetcher<K, T>,
    shortcut: Option<Shortcut<K, T>>,
    last_key: Option<K>,
    state: Arc<watch::Sender<FetchState<T>>>,
}

impl<K, T> Coordinator<K, T>
where
    K: Clone + PartialEq + fmt::Debug + Send + 'static,
    T: Clone + Send + Sync + 'static,
{
    pub fn new(name: &'static str, fetcher: Fetcher<K, T>) -> Self {
        let (state, _) = watch::channel(FetchState::default());
        Self {
            name,
            fetcher,
            shortcut: None,
            last_key: None,
            state: Arc::new(state),
        }
    }

    /// Installs a shortcut consulted before every fetch.
    #[must_use]
    pub fn with_shortcut(mut self, shortcut: Shortcut<K, T>) -> Self {
        self.shortcut = Some(shortcut);
        self
    }

    /// Requests data for `key`.
    ///
    /// Does nothing if `key` equals the last requested key. Returns the handle
    /// of the spawned fetch, or `None` when no fetch was issued.
    ///
    /// Fetches are spawned on the ambient tokio runtime. Outside a runtime the
    /// request fails immediately and the error is exposed in the state.
    pub fn request(&mut self, key: K) -> Option<JoinHandle<()>> {
        if self.last_key.as_ref() == Some(&key) {
            tracing::trace!(coordinator = self.name, ?key, "key unchanged, skipping fetch");
            return None;
        }
        self.issue(key)
    }

    /// Reissues the last requested key, even if nothing changed.
    pub fn refetch(&mut self) -> Option<JoinHandle<()>> {
        let key = self.last_key.clone()?;
        self.issue(key)
    }

    /// Returns a receiver that observes every state change.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<FetchState<T>> {
        self.state.subscribe()
    }

    /// Returns a copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> FetchState<T> {
        self.state.borrow().clone()
    }

    /// Reads the current state in place, without cloning the data.
    pub fn with_state<R>(&self, read: impl FnOnce(&FetchState<T>) -> R) -> R {
        read(&self.state.borrow())
    }

    #[must_use]
    pub fn last_key(&self) -> Option<&K> {
        self.last_key.as_ref()
    }

    fn issue(&mut self, key: K) -> Option<JoinHandle<()>> {
        let _span = tracing::debug_span!("coordinator_request", coordinator = self.name, ?key).entered();
        self.last_key = Some(key.clone());

        if let Some(data) = self.shortcut.as_ref().and_then(|shortcut| shortcut(&key)) {
            self.state.send_modify(|state| {
                state.begin();
                state.resolve(data);
            });
            tracing::debug!("answered without fetching");
            return None;
        }

        let mut request_id = 0;
        self.state.send_modify(|state| request_id = state.begin());

        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            tracing::warn!(request_id, "no async runtime available, request not sent");
            self.state.send_if_modified(|state| {
                if state.request_id != request_id {
                    return false;
                }
                state.fail("Network Error: no async runtime available".to_string());
                true
            });
            return None;
        };

        let future = (self.fetcher)(key);
        let state = Arc::clone(&self.state);
        let name = self.name;

        tracing::debug!(request_id, "fetch issued");
        Some(runtime.spawn(async move {
            let result = future.await;
            let applied = state.send_if_modified(|current| {
                if current.request_id != request_id {
                    return false;
                }
                match result {
                    Ok(data) => current.resolve(data),
                    Err(e) => current.fail(e.user_message()),
                }
                true
            });

            if applied {
                tracing::debug!(coordinator = name, request_id, "response applied");
            } else {
                tracing::debug!(coordinator = name, request_id, "discarding superseded response");
            }
        }))
    }
}

impl<K: fmt::Debug, T> fmt::Debug for Coordinator<K, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Coordinator")
            .field("name", &self.name)
            .field("last_key", &self.last_key)
            .field("request_id", &self.state.borrow().request_id)
            .finish_non_exhaustive()
    }
}
