//! Typed HTTP client for the Stoic Wisdom API
//!
//! One generic fetch-and-decode routine plus a thin parameter-to-path
//! mapping per resource operation. The client never retries; it logs the
//! failure and re-raises it to the caller.

use reqwest::Client;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::data::{
    HealthStatus, Incident, Philosopher, PhilosopherWithQuotes, Quote, Theme, TimelineEvent,
};

/// Base URL used when neither the CLI flag nor the environment supplies one
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Uniform error signal for all fetch failures
///
/// Transport failures, non-2xx statuses, and JSON decode failures all end
/// up here. The variants are cloneable so the cache layer can replay one
/// resolution to any number of subscribers.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// Network-level failure (unreachable host, timeout, connection reset)
    #[error("request to {endpoint} failed: {message}")]
    Transport { endpoint: String, message: String },

    /// Backend answered with a non-2xx status
    #[error("{endpoint} returned HTTP {status}")]
    Status { endpoint: String, status: u16 },

    /// Response body was not valid JSON for the expected shape
    #[error("failed to decode response from {endpoint}: {message}")]
    Decode { endpoint: String, message: String },
}

/// Client for the Stoic Wisdom REST API
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl ApiClient {
    /// Creates a client against the given base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            http: Client::new(),
            base_url,
        }
    }

    /// Creates a client with a custom reqwest client (for timeouts etc.)
    #[allow(dead_code)]
    pub fn with_client(http: Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            ..Self::new(base_url)
        }
    }

    /// The configured base URL, without a trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Performs a GET against `path`, decoding the JSON body into `T`.
    ///
    /// `query` pairs are URL-encoded by reqwest. Any failure is logged and
    /// mapped into the uniform [`ApiError`].
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);

        let response = self
            .http
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(endpoint = path, error = %e, "request failed");
                ApiError::Transport {
                    endpoint: path.to_string(),
                    message: e.to_string(),
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let err = ApiError::Status {
                endpoint: path.to_string(),
                status: status.as_u16(),
            };
            tracing::warn!(endpoint = path, status = status.as_u16(), "API error");
            return Err(err);
        }

        let body = response.text().await.map_err(|e| {
            tracing::warn!(endpoint = path, error = %e, "failed to read response body");
            ApiError::Transport {
                endpoint: path.to_string(),
                message: e.to_string(),
            }
        })?;

        serde_json::from_str(&body).map_err(|e| {
            tracing::warn!(endpoint = path, error = %e, "failed to decode response");
            ApiError::Decode {
                endpoint: path.to_string(),
                message: e.to_string(),
            }
        })
    }

    /// GET /philosophers
    pub async fn philosophers(&self) -> Result<Vec<Philosopher>, ApiError> {
        self.get_json("/philosophers", &[]).await
    }

    /// GET /philosophers/{id}
    pub async fn philosopher(&self, id: i64) -> Result<Philosopher, ApiError> {
        self.get_json(&format!("/philosophers/{id}"), &[]).await
    }

    /// GET /philosophers/{id}/quotes
    pub async fn philosopher_with_quotes(&self, id: i64) -> Result<PhilosopherWithQuotes, ApiError> {
        self.get_json(&format!("/philosophers/{id}/quotes"), &[])
            .await
    }

    /// GET /quotes
    pub async fn quotes(&self) -> Result<Vec<Quote>, ApiError> {
        self.get_json("/quotes", &[]).await
    }

    /// GET /quotes/random
    pub async fn random_quote(&self) -> Result<Quote, ApiError> {
        self.get_json("/quotes/random", &[]).await
    }

    /// GET /quotes/daily
    pub async fn daily_quote(&self) -> Result<Quote, ApiError> {
        self.get_json("/quotes/daily", &[]).await
    }

    /// GET /quotes?philosopher={name}
    pub async fn quotes_by_philosopher(&self, name: &str) -> Result<Vec<Quote>, ApiError> {
        self.get_json("/quotes", &[("philosopher", name)]).await
    }

    /// GET /quotes?theme={theme}
    pub async fn quotes_by_theme(&self, theme: &str) -> Result<Vec<Quote>, ApiError> {
        self.get_json("/quotes", &[("theme", theme)]).await
    }

    /// GET /quotes?search={term}
    pub async fn search_quotes(&self, term: &str) -> Result<Vec<Quote>, ApiError> {
        self.get_json("/quotes", &[("search", term)]).await
    }

    /// GET /themes
    pub async fn themes(&self) -> Result<Vec<Theme>, ApiError> {
        self.get_json("/themes", &[]).await
    }

    /// GET /themes/{id}
    pub async fn theme(&self, id: i64) -> Result<Theme, ApiError> {
        self.get_json(&format!("/themes/{id}"), &[]).await
    }

    /// GET /timeline
    pub async fn timeline(&self) -> Result<Vec<TimelineEvent>, ApiError> {
        self.get_json("/timeline", &[]).await
    }

    /// GET /incidents
    pub async fn incidents(&self) -> Result<Vec<Incident>, ApiError> {
        self.get_json("/incidents", &[]).await
    }

    /// GET /incidents/{id}
    pub async fn incident(&self, id: i64) -> Result<Incident, ApiError> {
        self.get_json(&format!("/incidents/{id}"), &[]).await
    }

    /// GET /health
    pub async fn health(&self) -> Result<HealthStatus, ApiError> {
        self.get_json("/health", &[]).await
    }

    /// GET /ready
    pub async fn ready(&self) -> Result<String, ApiError> {
        self.get_json("/ready", &[]).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = ApiClient::new("http://localhost:3000/");
        assert_eq!(client.base_url(), "http://localhost:3000");

        let client = ApiClient::new("http://api.example.com//");
        assert_eq!(client.base_url(), "http://api.example.com");
    }

    #[test]
    fn test_default_client_uses_localhost() {
        let client = ApiClient::default();
        assert_eq!(client.base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_api_error_display_includes_endpoint() {
        let err = ApiError::Status {
            endpoint: "/quotes/random".to_string(),
            status: 500,
        };
        let message = err.to_string();
        assert!(message.contains("/quotes/random"));
        assert!(message.contains("500"));
    }

    #[test]
    fn test_api_error_is_cloneable_and_comparable() {
        let err = ApiError::Transport {
            endpoint: "/health".to_string(),
            message: "connection refused".to_string(),
        };
        assert_eq!(err.clone(), err);
    }
}
