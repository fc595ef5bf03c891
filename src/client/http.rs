//! Low-level HTTP plumbing shared by every resource operation.
//!
//! A thin wrapper over reqwest: joins paths against the base URL, sends
//! JSON, maps transport and status failures onto [`Error`], and counts
//! requests. There is deliberately no retry logic anywhere in this layer;
//! a failed request surfaces to the caller, and retry is a manual user
//! action.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::RwLock;
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, warn};
use url::Url;

use crate::error::{Error, ErrorKind, Result};

/// Counters for requests issued through a client.
#[derive(Debug, Clone, Default)]
pub struct RequestStats {
    /// Total requests sent.
    pub requests_sent: u64,
    /// Requests that ended in a transport failure or error status.
    pub requests_failed: u64,
}

/// Shared HTTP core behind [`Client`](crate::Client).
pub(crate) struct HttpClient {
    client: reqwest::Client,
    base_url: Url,
    stats: Arc<RwLock<RequestStats>>,
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

impl HttpClient {
    /// Creates the HTTP core with the given configuration.
    pub(crate) fn new(
        base_url: Url,
        timeout: Duration,
        connect_timeout: Duration,
        user_agent: &str,
    ) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(connect_timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|e| {
                Error::configuration(format!("failed to create HTTP client: {}", e)).with_source(e)
            })?;

        Ok(Self {
            client,
            base_url,
            stats: Arc::new(RwLock::new(RequestStats::default())),
        })
    }

    /// Returns the configured base URL.
    pub(crate) fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Returns a snapshot of the request counters.
    pub(crate) fn stats(&self) -> RequestStats {
        self.stats.read().clone()
    }

    fn join(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| Error::configuration(format!("invalid URL path {:?}: {}", path, e)))
    }

    fn default_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers
    }

    fn record(&self, failed: bool) {
        let mut stats = self.stats.write();
        stats.requests_sent += 1;
        if failed {
            stats.requests_failed += 1;
        }
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<reqwest::Response> {
        match request.headers(Self::default_headers()).send().await {
            Ok(response) => {
                let failed = !response.status().is_success();
                self.record(failed);
                if failed {
                    warn!(status = %response.status(), "request failed");
                }
                Ok(response)
            }
            Err(e) => {
                self.record(true);
                warn!(error = %e, "request could not be sent");
                Err(map_reqwest_error(e))
            }
        }
    }

    /// GET returning the parsed JSON body.
    pub(crate) async fn get_json<R>(&self, path: &str, params: &[(&str, String)]) -> Result<R>
    where
        R: DeserializeOwned,
    {
        let url = self.join(path)?;
        debug!(%url, "GET");
        let response = self.send(self.client.get(url).query(params)).await?;
        parse_body(response).await
    }

    /// GET returning the parsed JSON body plus the response headers.
    ///
    /// List requests need the headers for the total-count value.
    pub(crate) async fn get_with_headers<R>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<(R, HeaderMap)>
    where
        R: DeserializeOwned,
    {
        let url = self.join(path)?;
        debug!(%url, "GET");
        let response = self.send(self.client.get(url).query(params)).await?;

        let status = response.status();
        let headers = response.headers().clone();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(map_status_error(status.as_u16(), &body));
        }

        let body = response.json::<R>().await.map_err(|e| {
            Error::invalid_response(format!("failed to parse response: {}", e)).with_source(e)
        })?;
        Ok((body, headers))
    }

    /// POST with a JSON body, returning the parsed JSON response.
    pub(crate) async fn post_json<T, R>(&self, path: &str, body: &T) -> Result<R>
    where
        T: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = self.join(path)?;
        debug!(%url, "POST");
        let response = self.send(self.client.post(url).json(body)).await?;
        parse_body(response).await
    }

    /// PUT with a JSON body, returning the parsed JSON response.
    pub(crate) async fn put_json<T, R>(&self, path: &str, body: &T) -> Result<R>
    where
        T: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = self.join(path)?;
        debug!(%url, "PUT");
        let response = self.send(self.client.put(url).json(body)).await?;
        parse_body(response).await
    }

    /// DELETE, discarding any response body.
    pub(crate) async fn delete(&self, path: &str) -> Result<()> {
        let url = self.join(path)?;
        debug!(%url, "DELETE");
        let response = self.send(self.client.delete(url)).await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(map_status_error(status.as_u16(), &body));
        }
        Ok(())
    }
}

async fn parse_body<R>(response: reqwest::Response) -> Result<R>
where
    R: DeserializeOwned,
{
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(map_status_error(status.as_u16(), &body));
    }

    response.json::<R>().await.map_err(|e| {
        Error::invalid_response(format!("failed to parse response: {}", e)).with_source(e)
    })
}

/// Maps reqwest errors to SDK errors.
pub(crate) fn map_reqwest_error(e: reqwest::Error) -> Error {
    if e.is_timeout() {
        Error::timeout(format!("request timed out: {}", e)).with_source(e)
    } else if e.is_connect() {
        Error::connection(format!("connection failed: {}", e)).with_source(e)
    } else if e.is_request() {
        Error::invalid_argument(format!("invalid request: {}", e)).with_source(e)
    } else {
        Error::transport(format!("HTTP error: {}", e)).with_source(e)
    }
}

/// Maps HTTP status codes to SDK errors.
pub(crate) fn map_status_error(status: u16, body: &str) -> Error {
    let message = if body.is_empty() {
        format!("HTTP {}", status)
    } else {
        // json-server error bodies are either plain text or {"error": "..."}
        if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
            value
                .get("error")
                .and_then(|e| e.as_str())
                .unwrap_or(body)
                .to_string()
        } else {
            body.to_string()
        }
    };

    match status {
        400 => Error::new(ErrorKind::InvalidArgument, message),
        404 => Error::new(ErrorKind::NotFound, message),
        409 => Error::new(ErrorKind::Conflict, message),
        504 => Error::new(ErrorKind::Timeout, message),
        500..=599 => Error::new(ErrorKind::Unavailable, message),
        _ => Error::new(ErrorKind::Transport, message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_status_error() {
        let err = map_status_error(400, "bad request");
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);

        let err = map_status_error(404, "{\"error\":\"Not found\"}");
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert!(err.to_string().contains("Not found"));

        let err = map_status_error(409, "duplicate");
        assert_eq!(err.kind(), ErrorKind::Conflict);

        let err = map_status_error(504, "gateway timeout");
        assert_eq!(err.kind(), ErrorKind::Timeout);

        let err = map_status_error(418, "teapot");
        assert_eq!(err.kind(), ErrorKind::Transport);
    }

    #[test]
    fn test_map_status_error_500_range() {
        for status in [500u16, 502, 503] {
            let err = map_status_error(status, "server error");
            assert_eq!(err.kind(), ErrorKind::Unavailable);
        }
    }

    #[test]
    fn test_map_status_error_empty_body() {
        let err = map_status_error(503, "");
        assert!(err.to_string().contains("HTTP 503"));
    }
}
