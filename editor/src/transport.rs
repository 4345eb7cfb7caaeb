//! Executes the core's plain-data requests over the network.
//!
//! # Design
//! `Transport` is the I/O seam of the editor: it takes an `HttpRequest`
//! built by `PostClient` and hands back the `HttpResponse` for the matching
//! `parse_*` call. Non-2xx statuses are returned as data, never as errors,
//! so status interpretation stays in the core.

use std::time::Duration;

use async_trait::async_trait;
use post_core::{HttpMethod, HttpRequest, HttpResponse};
use reqwest::{Client, Method};
use thiserror::Error;
use tracing::debug;

/// Failure to obtain a response at all.
#[derive(Debug, Error)]
pub enum TransportError {
    /// No response within the requested time bound.
    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    /// The request never produced a response.
    #[error("no response received: {0}")]
    NoResponse(String),

    /// A response started arriving but its body could not be read.
    #[error("failed to read HTTP {status} response: {message}")]
    Other { status: u16, message: String },
}

impl TransportError {
    pub fn timed_out(&self) -> bool {
        matches!(self, TransportError::Timeout(_))
    }

    /// Status of the response, when one arrived before the failure.
    pub fn status(&self) -> Option<u16> {
        match self {
            TransportError::Other { status, .. } => Some(*status),
            TransportError::Timeout(_) | TransportError::NoResponse(_) => None,
        }
    }
}

#[async_trait]
pub trait Transport: Send + Sync {
    /// Perform the round-trip, giving up after `timeout` when one is set.
    async fn execute(
        &self,
        request: HttpRequest,
        timeout: Option<Duration>,
    ) -> Result<HttpResponse, TransportError>;
}

/// `reqwest`-backed transport.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

fn method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Delete => Method::DELETE,
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(
        &self,
        request: HttpRequest,
        timeout: Option<Duration>,
    ) -> Result<HttpResponse, TransportError> {
        debug!(method = request.method.as_str(), path = %request.path, "sending request");

        let mut builder = self.client.request(method(request.method), &request.path);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let classify = |err: reqwest::Error| match timeout {
            Some(bound) if err.is_timeout() => TransportError::Timeout(bound),
            _ => TransportError::NoResponse(err.to_string()),
        };

        let response = builder.send().await.map_err(classify)?;
        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|value| (name.as_str().to_string(), value.to_string()))
            })
            .collect();
        let body = response.text().await.map_err(|err| match timeout {
            Some(bound) if err.is_timeout() => TransportError::Timeout(bound),
            _ => TransportError::Other {
                status,
                message: err.to_string(),
            },
        })?;

        debug!(status, "received response");
        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}
