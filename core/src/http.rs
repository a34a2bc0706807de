//! HTTP transport types and the blocking transport seam.
//!
//! # Design
//! Requests and responses are plain data. `CepClient` builds `HttpRequest`
//! values and parses `HttpResponse` values without touching the network; the
//! `Transport` trait is the only place I/O happens. `UreqTransport` is the
//! default, but a host can plug in its own (or a canned one in tests).
//!
//! Transports must not turn 4xx/5xx into errors: status interpretation belongs
//! to the response validator. Only failures that never produced a status
//! (DNS, connect, timeout, body read) are reported as `TransportError`.

use std::fmt;
use std::time::Duration;

use log::debug;

use crate::config::ClientConfig;
use crate::error::TransportError;

/// HTTP method for a request. The provider is read-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
}

/// An HTTP request described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
}

/// An HTTP response described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: body.into(),
        }
    }
}

/// Executes one blocking HTTP round-trip.
pub trait Transport: Send + Sync {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        (**self).execute(request)
    }
}

/// `Transport` backed by a shared `ureq` agent.
///
/// The agent pools connections and is safe to use from several threads;
/// every response body is read to the end before `execute` returns, so the
/// connection is released on every path.
#[derive(Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl fmt::Debug for UreqTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UreqTransport").finish_non_exhaustive()
    }
}

impl UreqTransport {
    pub fn new(config: &ClientConfig) -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(config.timeout())
            .build()
            .new_agent();
        Self { agent }
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self::new(&ClientConfig::default().with_timeout(timeout))
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new(&ClientConfig::default())
    }
}

impl Transport for UreqTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        let builder = match request.method {
            HttpMethod::Get => self.agent.get(&request.url),
        };
        let builder = request
            .headers
            .iter()
            .fold(builder, |b, (name, value)| b.header(name.as_str(), value.as_str()));

        let mut response = builder
            .call()
            .map_err(|e| TransportError(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| TransportError(e.to_string()))?;

        debug!("GET {} -> {status} ({} bytes)", request.url, body.len());
        Ok(HttpResponse {
            status,
            headers: Vec::new(),
            body,
        })
    }
}
