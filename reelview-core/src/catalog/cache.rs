//! Keyed result cache with in-flight request coalescing.

use std::collections::HashMap;
use std::fmt;
use std::future::Future;
use std::hash::Hash;
use std::sync::Arc;

use futures::FutureExt;
use futures::future::{BoxFuture, Shared};
use parking_lot::Mutex;
use tracing::{debug, warn};

use super::state::QueryState;
use crate::error::{CatalogError, Result};

type SharedFetch<V> = Shared<BoxFuture<'static, Result<V>>>;

enum Slot<V> {
    Pending { generation: u64, fetch: SharedFetch<V> },
    Ready(V),
    Failed(CatalogError),
}

struct Slots<K, V> {
    entries: HashMap<K, Slot<V>>,
    next_generation: u64,
}

/// Caches successful results per key and lets concurrent callers for the
/// same key share one in-flight request.
///
/// Failures are remembered for [`state`](Self::state) reporting but are not
/// served from cache: the next [`get_or_fetch`](Self::get_or_fetch) for a
/// failed key issues a new request.
pub struct QueryCache<K, V> {
    name: &'static str,
    slots: Arc<Mutex<Slots<K, V>>>,
}

impl<K, V> fmt::Debug for QueryCache<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (entries, pending) = self
            .slots
            .try_lock()
            .map(|slots| {
                let pending = slots
                    .entries
                    .values()
                    .filter(|slot| matches!(slot, Slot::Pending { .. }))
                    .count();
                (slots.entries.len(), pending)
            })
            .unwrap_or((0, 0));

        f.debug_struct("QueryCache")
            .field("name", &self.name)
            .field("entries", &entries)
            .field("in_flight", &pending)
            .finish()
    }
}

impl<K, V> QueryCache<K, V>
where
    K: Eq + Hash + Clone + fmt::Display + Send + 'static,
    V: Clone + Send + Sync + 'static,
{
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            slots: Arc::new(Mutex::new(Slots {
                entries: HashMap::new(),
                next_generation: 0,
            })),
        }
    }

    /// Return the cached value for `key`, join an in-flight request for it,
    /// or start one with `fetch`. `fetch` is only invoked when no request is
    /// in flight and no value is cached.
    pub async fn get_or_fetch<F, Fut>(&self, key: K, fetch: F) -> Result<V>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V>> + Send + 'static,
    {
        let shared = {
            let mut slots = self.slots.lock();
            let existing = match slots.entries.get(&key) {
                Some(Slot::Ready(value)) => {
                    debug!(cache = self.name, %key, "cache hit");
                    return Ok(value.clone());
                }
                Some(Slot::Pending { fetch, .. }) => Some(fetch.clone()),
                Some(Slot::Failed(_)) | None => None,
            };

            match existing {
                Some(in_flight) => {
                    debug!(cache = self.name, %key, "joining in-flight request");
                    in_flight
                }
                None => {
                    debug!(cache = self.name, %key, "cache miss");
                    let generation = slots.next_generation;
                    slots.next_generation += 1;

                    let shared = self.settle(key.clone(), generation, fetch());
                    slots.entries.insert(
                        key,
                        Slot::Pending {
                            generation,
                            fetch: shared.clone(),
                        },
                    );
                    shared
                }
            }
        };

        shared.await
    }

    /// Wrap a request so that whichever caller drives it to completion
    /// records the outcome exactly once.
    fn settle<Fut>(
        &self,
        key: K,
        generation: u64,
        request: Fut,
    ) -> SharedFetch<V>
    where
        Fut: Future<Output = Result<V>> + Send + 'static,
    {
        let slots = Arc::clone(&self.slots);
        let name = self.name;
        async move {
            let result = request.await;
            let mut guard = slots.lock();
            let still_current = matches!(
                guard.entries.get(&key),
                Some(Slot::Pending { generation: g, .. }) if *g == generation
            );
            if still_current {
                let slot = match &result {
                    Ok(value) => Slot::Ready(value.clone()),
                    Err(err) => {
                        warn!(cache = name, %key, error = %err, "request failed");
                        Slot::Failed(err.clone())
                    }
                };
                guard.entries.insert(key, slot);
            } else {
                debug!(cache = name, %key, "discarding result of invalidated request");
            }
            result
        }
        .boxed()
        .shared()
    }

    pub fn state(&self, key: &K) -> QueryState<V> {
        match self.slots.lock().entries.get(key) {
            None => QueryState::Idle,
            Some(Slot::Pending { .. }) => QueryState::Loading,
            Some(Slot::Ready(value)) => QueryState::Ready(value.clone()),
            Some(Slot::Failed(err)) => QueryState::Failed(err.clone()),
        }
    }

    /// Forget `key`. Callers already awaiting an in-flight request still
    /// receive its result, but it is not stored.
    pub fn invalidate(&self, key: &K) -> bool {
        self.slots.lock().entries.remove(key).is_some()
    }

    pub fn clear(&self) {
        self.slots.lock().entries.clear();
    }

    pub fn len(&self) -> usize {
        self.slots.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
