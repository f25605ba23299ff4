//! HTTP transport adapter for the GoetGevonden API.
//!
//! One reusable [`reqwest::Client`] built at construction, carrying the JSON
//! default headers and the client-wide timeout. Every public operation in the
//! facade goes through [`HttpTransport::send`] (or [`HttpTransport::get_text`]
//! for the homepage), so the status/error mapping is uniform.

use goetgevonden_core::{GoetGevondenError, GoetGevondenResult};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Method, StatusCode};
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

use crate::config::{ClientConfig, ConfigError};

/// Thin adapter over one persistent connection pool.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    /// Build the transport from a validated configuration.
    pub fn new(config: &ClientConfig) -> Result<Self, ConfigError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers(headers)
            .build()
            .map_err(|e| ConfigError::ClientBuild {
                reason: e.to_string(),
            })?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Base URL with any trailing slash trimmed.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issue one request and normalize the response body.
    ///
    /// Returns `Ok(None)` on 204 or an empty body, the parsed JSON on
    /// success, or the raw text wrapped as a JSON string when a success body
    /// is not valid JSON.
    pub async fn send<Q, B>(
        &self,
        method: Method,
        path: &str,
        query: Option<&Q>,
        body: Option<&B>,
    ) -> GoetGevondenResult<Option<Value>>
    where
        Q: Serialize + ?Sized,
        B: Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(method = %method, url = %url, "sending API request");

        let mut request = self.client.request(method, &url);
        if let Some(query) = query {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| transport_error(e, &url))?;
        let response = self.check_status(response, path, &url).await?;

        if response.status() == StatusCode::NO_CONTENT {
            return Ok(None);
        }
        let text = response
            .text()
            .await
            .map_err(|e| transport_error(e, &url))?;
        if text.is_empty() {
            return Ok(None);
        }
        Ok(Some(match serde_json::from_str(&text) {
            Ok(value) => value,
            Err(_) => Value::String(text),
        }))
    }

    /// Fetch a path as plain text, bypassing JSON handling entirely.
    ///
    /// The status/error mapping is the same as [`send`](Self::send).
    pub async fn get_text(&self, path: &str) -> GoetGevondenResult<String> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(url = %url, "sending API request for text");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| transport_error(e, &url))?;
        let response = self.check_status(response, path, &url).await?;
        response.text().await.map_err(|e| transport_error(e, &url))
    }

    /// Map received error statuses; pass successful responses through.
    async fn check_status(
        &self,
        response: reqwest::Response,
        path: &str,
        url: &str,
    ) -> GoetGevondenResult<reqwest::Response> {
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            tracing::warn!(url = %url, "resource not found");
            return Err(GoetGevondenError::NotFound {
                path: path.to_string(),
            });
        }
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let body = serde_json::from_str(&text)
                .unwrap_or_else(|_| serde_json::json!({ "message": text }));
            tracing::warn!(status = status.as_u16(), url = %url, "API returned error status");
            return Err(GoetGevondenError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }
}

/// Classify a transport-level failure: timeouts are distinct from everything
/// else, which surfaces as a connection failure.
fn transport_error(error: reqwest::Error, url: &str) -> GoetGevondenError {
    if error.is_timeout() {
        GoetGevondenError::Timeout {
            url: url.to_string(),
        }
    } else {
        GoetGevondenError::Connection {
            url: url.to_string(),
            reason: error.to_string(),
        }
    }
}
