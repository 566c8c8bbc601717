//! Keyed request cache with deduplication and stale-while-revalidate reads
//!
//! The store maps a [`CacheKey`] to one slot holding the last resolution
//! (data or error), the in-flight request if one is running, and the number
//! of live subscribers. Pages read their `(data, error, is_loading)` view
//! through [`Store::lookup`] and drive fetches through [`Store::fetch`] or
//! [`Store::revalidate`]. The store is an explicit value owned by the app,
//! not a process-wide singleton, so tests get an isolated cache each.

use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::future::Future;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use futures::future::{BoxFuture, Shared};
use futures::FutureExt;

use crate::api::ApiError;

/// Identity under which a fetch result is deduplicated and stored
///
/// A key is a resource name plus an optional variant: an entity id for
/// detail fetches, or a refresh counter when the page forces a fresh entry
/// (the "new quote" action folds its counter into the key).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    resource: &'static str,
    variant: Option<String>,
}

impl CacheKey {
    /// Key for a whole-resource fetch, e.g. `CacheKey::new("quotes")`
    pub fn new(resource: &'static str) -> Self {
        Self {
            resource,
            variant: None,
        }
    }

    /// Key for a parameterized fetch, e.g. an id or a refresh counter
    pub fn with_variant(resource: &'static str, variant: impl ToString) -> Self {
        Self {
            resource,
            variant: Some(variant.to_string()),
        }
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.variant {
            Some(v) => write!(f, "{}:{}", self.resource, v),
            None => write!(f, "{}", self.resource),
        }
    }
}

type SharedValue = Arc<dyn Any + Send + Sync>;
type Inflight = Shared<BoxFuture<'static, Result<SharedValue, ApiError>>>;

/// One cache slot: last resolution plus request state
#[derive(Default)]
struct Slot {
    data: Option<SharedValue>,
    error: Option<ApiError>,
    inflight: Option<Inflight>,
    fetched_at: Option<DateTime<Utc>>,
    subscribers: usize,
}

/// Snapshot of a key's state for rendering
///
/// `is_loading` is true only before the first resolution for the key;
/// once data exists it keeps being served even while a background
/// revalidation (`is_validating`) is running.
#[derive(Debug, Clone)]
pub struct BindingView<T> {
    /// Last successfully fetched value, if any
    pub data: Option<Arc<T>>,
    /// Last fetch error, if the most recent resolution failed
    pub error: Option<ApiError>,
    /// Whether a request for this key is currently in flight
    pub is_validating: bool,
}

impl<T> BindingView<T> {
    /// True until the key has resolved at least once
    pub fn is_loading(&self) -> bool {
        self.data.is_none() && self.error.is_none()
    }
}

/// Keyed request cache shared by all pages
#[derive(Clone, Default)]
pub struct Store {
    slots: Arc<Mutex<HashMap<CacheKey, Slot>>>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached value for `key`, refetching only on a miss.
    ///
    /// A concurrent call with the same key joins the in-flight request
    /// instead of issuing a second one; the fetcher runs at most once per
    /// network round trip regardless of how many callers are waiting.
    pub async fn fetch<T, F, Fut>(&self, key: &CacheKey, fetcher: F) -> Result<Arc<T>, ApiError>
    where
        T: Any + Send + Sync,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, ApiError>> + Send + 'static,
    {
        if let Some(data) = self.cached::<T>(key) {
            return Ok(data);
        }
        self.revalidate(key, fetcher).await
    }

    /// Refetches `key` even on a cache hit.
    ///
    /// The stale value stays visible through [`Store::lookup`] until the
    /// new resolution lands (stale-while-revalidate). Joins an already
    /// in-flight request rather than starting another.
    pub async fn revalidate<T, F, Fut>(&self, key: &CacheKey, fetcher: F) -> Result<Arc<T>, ApiError>
    where
        T: Any + Send + Sync,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, ApiError>> + Send + 'static,
    {
        let inflight = {
            let mut slots = self.slots.lock().expect("cache lock poisoned");
            let slot = slots.entry(key.clone()).or_default();
            match &slot.inflight {
                Some(existing) => existing.clone(),
                None => {
                    let fut: Inflight = fetcher()
                        .map(|result| result.map(|value| Arc::new(value) as SharedValue))
                        .boxed()
                        .shared();
                    slot.inflight = Some(fut.clone());
                    fut
                }
            }
        };

        let result = inflight.clone().await;

        {
            let mut slots = self.slots.lock().expect("cache lock poisoned");
            if let Some(slot) = slots.get_mut(key) {
                // Don't clobber a newer request started after this one resolved.
                if slot
                    .inflight
                    .as_ref()
                    .is_some_and(|current| Inflight::ptr_eq(current, &inflight))
                {
                    slot.inflight = None;
                }
                match &result {
                    Ok(value) => {
                        slot.data = Some(value.clone());
                        slot.error = None;
                        slot.fetched_at = Some(Utc::now());
                    }
                    Err(error) => {
                        slot.error = Some(error.clone());
                    }
                }
            }
        }

        result.and_then(|value| Self::downcast(key, value))
    }

    /// Snapshot of a key's state for rendering
    pub fn lookup<T: Any + Send + Sync>(&self, key: &CacheKey) -> BindingView<T> {
        let slots = self.slots.lock().expect("cache lock poisoned");
        match slots.get(key) {
            None => BindingView {
                data: None,
                error: None,
                is_validating: false,
            },
            Some(slot) => BindingView {
                data: slot
                    .data
                    .clone()
                    .and_then(|value| value.downcast::<T>().ok()),
                error: slot.error.clone(),
                is_validating: slot.inflight.is_some(),
            },
        }
    }

    /// Returns the cached value for `key` without touching the network
    pub fn cached<T: Any + Send + Sync>(&self, key: &CacheKey) -> Option<Arc<T>> {
        let slots = self.slots.lock().expect("cache lock poisoned");
        slots
            .get(key)?
            .data
            .clone()
            .and_then(|value| value.downcast::<T>().ok())
    }

    /// When the key last resolved successfully
    pub fn fetched_at(&self, key: &CacheKey) -> Option<DateTime<Utc>> {
        let slots = self.slots.lock().expect("cache lock poisoned");
        slots.get(key).and_then(|slot| slot.fetched_at)
    }

    /// Clears the key's data and error so the next fetch hits the network.
    ///
    /// Does not cancel an in-flight request; its resolution will still land
    /// in the slot (last-resolution-wins).
    pub fn invalidate(&self, key: &CacheKey) {
        let mut slots = self.slots.lock().expect("cache lock poisoned");
        if let Some(slot) = slots.get_mut(key) {
            slot.data = None;
            slot.error = None;
            slot.fetched_at = None;
        }
    }

    /// Registers a reader of `key`; the returned guard unregisters on drop
    pub fn subscribe(&self, key: CacheKey) -> Subscription {
        {
            let mut slots = self.slots.lock().expect("cache lock poisoned");
            slots.entry(key.clone()).or_default().subscribers += 1;
        }
        Subscription {
            store: self.clone(),
            key,
        }
    }

    /// Number of live subscriptions for `key`
    pub fn subscriber_count(&self, key: &CacheKey) -> usize {
        let slots = self.slots.lock().expect("cache lock poisoned");
        slots.get(key).map_or(0, |slot| slot.subscribers)
    }

    /// Drops resolved slots nobody is subscribed to
    pub fn evict_idle(&self) {
        let mut slots = self.slots.lock().expect("cache lock poisoned");
        slots.retain(|_, slot| slot.subscribers > 0 || slot.inflight.is_some());
    }

    fn downcast<T: Any + Send + Sync>(
        key: &CacheKey,
        value: SharedValue,
    ) -> Result<Arc<T>, ApiError> {
        value.downcast::<T>().map_err(|_| ApiError::Decode {
            endpoint: key.to_string(),
            message: "cached value has a different type than requested".to_string(),
        })
    }
}

/// RAII guard tying a reader's lifetime to a key's subscriber count
pub struct Subscription {
    store: Store,
    key: CacheKey,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let mut slots = self.store.slots.lock().expect("cache lock poisoned");
        if let Some(slot) = slots.get_mut(&self.key) {
            slot.subscribers = slot.subscribers.saturating_sub(1);
        }
    }
}
