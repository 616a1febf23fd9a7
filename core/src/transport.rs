//! The request-issuing collaborator injected into every API client.
//!
//! # Design
//! Clients only ever see the `Transport` trait, so tests can swap in a
//! canned-response double and the suite can target either the mock server
//! or the live site with the same client code. `UreqTransport` is the
//! blocking implementation used by the integration suites.

use std::time::Duration;

use tracing::debug;

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// Executes one HTTP round-trip.
///
/// Implementations must return non-2xx replies as data: status
/// interpretation belongs to the clients. Only failures that produce no
/// response at all map to `ApiError::Transport`.
pub trait Transport {
    fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        (**self).send(request)
    }
}

/// Blocking transport backed by a shared `ureq::Agent`.
#[derive(Debug, Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new(timeout: Option<Duration>) -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(timeout)
            .build()
            .new_agent();
        Self { agent }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.timeout)
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new(None)
    }
}

impl Transport for UreqTransport {
    fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let HttpRequest {
            method,
            path,
            headers,
            body,
        } = request;

        let result = match (method, body) {
            (HttpMethod::Get, _) => {
                let mut builder = self.agent.get(&path);
                for (name, value) in &headers {
                    builder = builder.header(name, value);
                }
                builder.call()
            }
            (HttpMethod::Post, None) => {
                let mut builder = self.agent.post(&path);
                for (name, value) in &headers {
                    builder = builder.header(name, value);
                }
                builder.send_empty()
            }
            (HttpMethod::Post, Some(body)) => {
                let mut builder = self.agent.post(&path);
                for (name, value) in &headers {
                    builder = builder.header(name, value);
                }
                builder.send(body.as_bytes())
            }
            (HttpMethod::Put, None) => {
                let mut builder = self.agent.put(&path);
                for (name, value) in &headers {
                    builder = builder.header(name, value);
                }
                builder.send_empty()
            }
            (HttpMethod::Put, Some(body)) => {
                let mut builder = self.agent.put(&path);
                for (name, value) in &headers {
                    builder = builder.header(name, value);
                }
                builder.send(body.as_bytes())
            }
            (HttpMethod::Delete, None) => {
                let mut builder = self.agent.delete(&path);
                for (name, value) in &headers {
                    builder = builder.header(name, value);
                }
                builder.call()
            }
            // DELETE normally has no body; the account endpoint expects a form.
            (HttpMethod::Delete, Some(body)) => {
                let mut builder = self.agent.delete(&path).force_send_body();
                for (name, value) in &headers {
                    builder = builder.header(name, value);
                }
                builder.send(body.as_bytes())
            }
        };

        let mut response = result.map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        debug!(method = method.as_str(), url = %path, status, "received response");

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}
