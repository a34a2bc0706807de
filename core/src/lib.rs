//! Synchronous client for the ViaCEP postal-code service.
//!
//! # Overview
//! Resolves a Brazilian postal code (CEP) to an address, or a
//! state/city/street triple to the list of matching addresses. Each lookup
//! normalizes its input, performs exactly one blocking GET, classifies the
//! status and validates the body before handing back data.
//!
//! # Design
//! - `CepClient` splits every lookup into `build_*` (request as plain data)
//!   and `parse_*` (response as plain data); the `Transport` trait is the only
//!   seam that does I/O, with `UreqTransport` as the default.
//! - `PostalCodeLookup` / `AddressLookup` are the one-call entry points: a
//!   value exists only if every step succeeded.
//! - Notices and summaries go through an `OutputSink` supplied by the caller.
//! - Every failure is a distinct `LookupError` variant; nothing is retried.
//!
//! ```no_run
//! use cep_core::{CepClient, ClientConfig, PostalCodeLookup, StdoutSink};
//!
//! let client = CepClient::new(&ClientConfig::default())?;
//! let lookup = PostalCodeLookup::new(&client, "01001-000", &mut StdoutSink)?;
//! println!("{:?}", lookup.data().city());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod lookup;
pub mod output;
pub mod types;
pub mod validator;

pub use client::CepClient;
pub use config::{ClientConfig, ConfigError};
pub use error::{LookupError, TransportError};
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport, UreqTransport};
pub use lookup::{AddressLookup, PostalCodeLookup};
pub use output::{LogSink, NullSink, OutputSink, StdoutSink};
pub use types::{Address, AddressQuery, PostalCode, PostalCodeInput, SearchKind};
pub use validator::validate_response;
