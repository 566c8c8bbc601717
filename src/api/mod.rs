//! API client module for the Stoic Wisdom backend
//!
//! Provides a typed client over the backend's REST surface. Every request
//! is an unauthenticated GET returning JSON; all failures collapse into a
//! single uniform [`ApiError`] carrying the endpoint and cause.

mod client;

pub use client::{ApiClient, ApiError, DEFAULT_BASE_URL};
