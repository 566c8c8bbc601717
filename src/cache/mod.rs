//! Keyed fetch cache for API responses
//!
//! This module provides the store that sits between the pages and the API
//! client: each page addresses its data by a cache key, concurrent requests
//! for the same key share one network call, and resolved data keeps being
//! served while a background revalidation is in flight.

mod store;

pub use store::{BindingView, CacheKey, Store, Subscription};
