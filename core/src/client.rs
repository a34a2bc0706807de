//! Request builder and response parser for the provider's two endpoints.
//!
//! # Design
//! `CepClient` holds the parsed base URL, the user agent and a transport, and
//! carries no mutable state between calls. Each lookup is split into a
//! `build_*` method that produces an `HttpRequest` and a `parse_*` method that
//! consumes an `HttpResponse`; `execute` sits between them. Hosts that do
//! their own I/O can skip `execute` and feed responses to `parse_*` directly.

use log::debug;
use url::Url;

use crate::config::{ClientConfig, ConfigError};
use crate::error::LookupError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse, Transport, UreqTransport};
use crate::output::OutputSink;
use crate::types::{Address, AddressQuery, PostalCode, SearchKind};
use crate::validator::validate_response;

/// Synchronous client for the postal-code provider.
#[derive(Debug, Clone)]
pub struct CepClient<T: Transport = UreqTransport> {
    base: Url,
    user_agent: String,
    transport: T,
}

impl CepClient<UreqTransport> {
    /// Client over a `ureq` transport configured from `config`.
    pub fn new(config: &ClientConfig) -> Result<Self, ConfigError> {
        Self::with_transport(config, UreqTransport::new(config))
    }
}

impl<T: Transport> CepClient<T> {
    pub fn with_transport(config: &ClientConfig, transport: T) -> Result<Self, ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidBaseUrl {
            url: config.base_url.clone(),
            reason,
        };
        let base = Url::parse(config.base_url()).map_err(|e| invalid(e.to_string()))?;
        if base.cannot_be_a_base() {
            return Err(invalid("URL cannot carry a path".to_string()));
        }
        Ok(Self {
            base,
            user_agent: config.user_agent.clone(),
            transport,
        })
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// `GET {base}/{cep}/json/`
    pub fn build_postal_code_request(&self, cep: &PostalCode) -> HttpRequest {
        self.get([cep.as_str()])
    }

    /// `GET {base}/{state}/{city}/{street}/json/`, each part percent-encoded
    /// as one path segment.
    ///
    /// A part that is exactly `.` or `..` fails with `InvalidAddressField`:
    /// no URL can carry it as a segment, so the request would silently lose
    /// a path level.
    pub fn build_address_request(&self, query: &AddressQuery) -> Result<HttpRequest, LookupError> {
        let parts = [
            ("uf", query.state.as_str()),
            ("cidade", query.city.as_str()),
            ("logradouro", query.street.as_str()),
        ];
        if let Some(&(field, _)) = parts.iter().find(|(_, value)| matches!(*value, "." | "..")) {
            return Err(LookupError::InvalidAddressField { field });
        }
        Ok(self.get(parts.map(|(_, value)| value)))
    }

    /// Run `request` through the transport. Failures that produced no HTTP
    /// status become `RequestFailure`.
    pub fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, LookupError> {
        debug!("requesting {}", request.url);
        self.transport.execute(request).map_err(|e| {
            debug!("request to {} failed: {e}", request.url);
            LookupError::from(e)
        })
    }

    /// Validate status, decode the record and reject the provider's
    /// "does not exist" marker.
    pub fn parse_postal_code_response(
        &self,
        response: HttpResponse,
        sink: &mut dyn OutputSink,
    ) -> Result<Address, LookupError> {
        validate_response(&response, SearchKind::PostalCode, sink)?;
        let address: Address = serde_json::from_str(&response.body)
            .map_err(|e| LookupError::InvalidResponse(e.to_string()))?;
        if address.is_error_marker() {
            return Err(LookupError::NotFound {
                kind: SearchKind::PostalCode,
            });
        }
        Ok(address)
    }

    /// Validate status, decode the candidate list and reject an empty one.
    pub fn parse_address_response(
        &self,
        response: HttpResponse,
        sink: &mut dyn OutputSink,
    ) -> Result<Vec<Address>, LookupError> {
        validate_response(&response, SearchKind::Address, sink)?;
        let addresses: Vec<Address> = serde_json::from_str(&response.body)
            .map_err(|e| LookupError::InvalidResponse(e.to_string()))?;
        if addresses.is_empty() {
            return Err(LookupError::NotFound {
                kind: SearchKind::Address,
            });
        }
        Ok(addresses)
    }

    fn get<'a>(&self, segments: impl IntoIterator<Item = &'a str>) -> HttpRequest {
        let mut url = self.base.clone();
        // Checked in `with_transport`: the base can always carry a path.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments).push("json").push("");
        }
        HttpRequest {
            method: HttpMethod::Get,
            url: url.into(),
            headers: vec![
                ("accept".to_string(), "application/json".to_string()),
                ("user-agent".to_string(), self.user_agent.clone()),
            ],
        }
    }
}
