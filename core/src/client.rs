//! Base API client shared by the resource clients.
//!
//! # Design
//! `ApiClient` owns a transport and a base URL and nothing else. Resource
//! clients compose it rather than extend it: they build requests against
//! `url()`, hand them to `execute`, and turn the reply into a typed result
//! with `decode`. The HTTP status is logged but not interpreted, since the
//! shop reports outcomes through the JSON `responseCode`.

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::transport::Transport;
use crate::types::Normalized;

#[derive(Debug, Clone)]
pub struct ApiClient<T> {
    transport: T,
    base_url: String,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T, base_url: &str) -> Self {
        Self {
            transport,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Absolute URL for an endpoint path such as `/api/productsList`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Run one request through the transport. Failures are not retried.
    pub fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        debug!(method = request.method.as_str(), url = %request.path, "sending request");
        self.transport.send(request)
    }

    /// Decode the body into `R`, separating "not JSON" from "wrong shape".
    pub fn decode<R: DeserializeOwned>(&self, response: HttpResponse) -> Result<R, ApiError> {
        let value = parse_response(response)?;
        serde_json::from_value(value).map_err(|e| ApiError::Schema(e.to_string()))
    }
}

/// Decode the body as JSON without imposing a shape.
pub fn parse_response(response: HttpResponse) -> Result<serde_json::Value, ApiError> {
    serde_json::from_str(&response.body).map_err(|e| {
        warn!(status = response.status, error = %e, "response body is not JSON");
        ApiError::Parse(e.to_string())
    })
}

/// Fail with `UnexpectedResponseCode` unless `body` carries `expected`.
///
/// Never called by the clients themselves: business errors are normal
/// responses and callers choose whether a mismatch is fatal.
pub fn validate_response_code<R: Normalized>(body: &R, expected: u16) -> Result<(), ApiError> {
    let actual = body.response_code();
    if actual == expected {
        return Ok(());
    }
    Err(ApiError::UnexpectedResponseCode {
        expected,
        actual,
        message: body.message().map(str::to_string),
    })
}
