//! One-shot lookups: construct with input, get validated data or an error.
//!
//! A lookup value only exists once its request succeeded and the body passed
//! validation, so there is never a half-filled result to inspect.

use crate::client::CepClient;
use crate::error::LookupError;
use crate::http::Transport;
use crate::output::OutputSink;
use crate::types::{Address, AddressQuery, PostalCode, PostalCodeInput};

/// Address data for a single postal code.
#[derive(Debug, Clone, PartialEq)]
pub struct PostalCodeLookup {
    postal_code: PostalCode,
    data: Address,
}

impl PostalCodeLookup {
    /// Normalize `input`, query the provider once and validate the answer.
    ///
    /// The success notice is written to `sink`. Any failure is terminal;
    /// there is no retry.
    pub fn new<T: Transport>(
        client: &CepClient<T>,
        input: impl Into<PostalCodeInput>,
        sink: &mut dyn OutputSink,
    ) -> Result<Self, LookupError> {
        let postal_code = PostalCode::parse(input)?;
        let request = client.build_postal_code_request(&postal_code);
        let response = client.execute(&request)?;
        let data = client.parse_postal_code_response(response, sink)?;
        Ok(Self { postal_code, data })
    }

    pub fn postal_code(&self) -> &PostalCode {
        &self.postal_code
    }

    pub fn data(&self) -> &Address {
        &self.data
    }

    pub fn into_data(self) -> Address {
        self.data
    }
}

/// Candidate addresses matching a state/city/street search.
#[derive(Debug, Clone, PartialEq)]
pub struct AddressLookup {
    query: AddressQuery,
    data: Vec<Address>,
}

impl AddressLookup {
    /// Query the provider once with `query` as given and validate the answer.
    pub fn new<T: Transport>(
        client: &CepClient<T>,
        query: AddressQuery,
        sink: &mut dyn OutputSink,
    ) -> Result<Self, LookupError> {
        let request = client.build_address_request(&query)?;
        let response = client.execute(&request)?;
        let data = client.parse_address_response(response, sink)?;
        Ok(Self { query, data })
    }

    pub fn query(&self) -> &AddressQuery {
        &self.query
    }

    /// Never empty.
    pub fn data(&self) -> &[Address] {
        &self.data
    }

    pub fn into_data(self) -> Vec<Address> {
        self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Count line followed by one 1-indexed line per candidate.
    pub fn summary_lines(&self) -> Vec<String> {
        let count = self.data.len();
        let noun = if count == 1 { "endereço" } else { "endereços" };

        let mut lines = Vec::with_capacity(count + 1);
        lines.push(format!("{count} {noun} encontrado(s)"));
        for (index, address) in self.data.iter().enumerate() {
            lines.push(format!("Endereço {}: {address}", index + 1));
        }
        lines
    }

    /// Write `summary_lines` to `sink`. Reads stored data only.
    pub fn print_summary(&self, sink: &mut dyn OutputSink) {
        for line in self.summary_lines() {
            sink.write_line(&line);
        }
    }
}
