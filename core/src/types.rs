//! Domain types for postal-code and address lookups.
//!
//! # Design
//! Inputs are normalized at the boundary: `PostalCodeInput` accepts either a
//! number or text and `PostalCode::parse` turns it into the one canonical
//! 8-digit form. Provider records are kept as an order-preserving JSON map
//! rather than a fixed struct, since the provider adds fields over time and
//! the summary renders whatever it returned.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::LookupError;

const POSTAL_CODE_LEN: usize = 8;

/// Raw postal code as supplied by a caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostalCodeInput {
    Number(u64),
    Text(String),
}

impl PostalCodeInput {
    fn into_text(self) -> String {
        match self {
            PostalCodeInput::Number(n) => n.to_string(),
            PostalCodeInput::Text(s) => s,
        }
    }
}

impl From<u32> for PostalCodeInput {
    fn from(n: u32) -> Self {
        PostalCodeInput::Number(u64::from(n))
    }
}

impl From<u64> for PostalCodeInput {
    fn from(n: u64) -> Self {
        PostalCodeInput::Number(n)
    }
}

impl From<&str> for PostalCodeInput {
    fn from(s: &str) -> Self {
        PostalCodeInput::Text(s.to_string())
    }
}

impl From<String> for PostalCodeInput {
    fn from(s: String) -> Self {
        PostalCodeInput::Text(s)
    }
}

/// A normalized postal code (CEP): exactly 8 ASCII digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PostalCode(String);

impl PostalCode {
    /// Strip spaces and hyphens, then validate.
    pub fn parse(input: impl Into<PostalCodeInput>) -> Result<Self, LookupError> {
        let normalized: String = input
            .into()
            .into_text()
            .chars()
            .filter(|c| *c != ' ' && *c != '-')
            .collect();

        if normalized.is_empty() {
            return Err(LookupError::EmptyInput);
        }
        if normalized.len() != POSTAL_CODE_LEN || !normalized.bytes().all(|b| b.is_ascii_digit()) {
            return Err(LookupError::InvalidPostalCode);
        }
        Ok(PostalCode(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PostalCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PostalCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for PostalCode {
    type Err = LookupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PostalCode::parse(s)
    }
}

/// State, city and street for an address search. Used verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressQuery {
    pub state: String,
    pub city: String,
    pub street: String,
}

impl AddressQuery {
    pub fn new(state: impl Into<String>, city: impl Into<String>, street: impl Into<String>) -> Self {
        Self {
            state: state.into(),
            city: city.into(),
            street: street.into(),
        }
    }
}

/// Which endpoint a response came from; drives notice and error wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchKind {
    PostalCode,
    Address,
}

impl SearchKind {
    /// Label used mid-sentence ("Busca de CEP realizada").
    pub fn label(self) -> &'static str {
        match self {
            SearchKind::PostalCode => "CEP",
            SearchKind::Address => "endereço",
        }
    }

    /// Label used at the start of a sentence.
    pub fn title(self) -> &'static str {
        match self {
            SearchKind::PostalCode => "CEP",
            SearchKind::Address => "Endereço",
        }
    }
}

impl fmt::Display for SearchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One address record as returned by the provider.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Address(Map<String, Value>);

impl Address {
    /// Key the provider sets when a well-formed postal code does not exist.
    pub const ERROR_MARKER: &'static str = "erro";

    pub fn from_map(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_fields(self) -> Map<String, Value> {
        self.0
    }

    /// String value of `field`, if present and a string.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).and_then(Value::as_str)
    }

    pub fn is_error_marker(&self) -> bool {
        self.0.contains_key(Self::ERROR_MARKER)
    }

    pub fn postal_code(&self) -> Option<&str> {
        self.get("cep")
    }

    pub fn street(&self) -> Option<&str> {
        self.get("logradouro")
    }

    pub fn complement(&self) -> Option<&str> {
        self.get("complemento")
    }

    pub fn neighborhood(&self) -> Option<&str> {
        self.get("bairro")
    }

    pub fn city(&self) -> Option<&str> {
        self.get("localidade")
    }

    pub fn state(&self) -> Option<&str> {
        self.get("uf")
    }

    pub fn ibge(&self) -> Option<&str> {
        self.get("ibge")
    }

    pub fn ddd(&self) -> Option<&str> {
        self.get("ddd")
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = serde_json::to_string(&self.0).map_err(|_| fmt::Error)?;
        f.write_str(&rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn separators_are_stripped() {
        for raw in ["01001-000", "01001 000", " 01001000 ", "0-1-0-0-1-0-0-0", "01001000"] {
            let cep = PostalCode::parse(raw).unwrap();
            assert_eq!(cep.as_str(), "01001000", "input {raw:?}");
        }
    }

    #[test]
    fn empty_after_normalization_is_empty_input() {
        for raw in ["", "   ", "-", " - - "] {
            assert_eq!(PostalCode::parse(raw).unwrap_err(), LookupError::EmptyInput, "input {raw:?}");
        }
    }

    #[test]
    fn wrong_length_or_non_digit_is_invalid() {
        for raw in ["123", "1234567A", "123456789", "0100.1000", "01001\t000", "０１００１０００"] {
            assert_eq!(
                PostalCode::parse(raw).unwrap_err(),
                LookupError::InvalidPostalCode,
                "input {raw:?}"
            );
        }
    }

    #[test]
    fn numeric_input_uses_decimal_rendering() {
        let cep = PostalCode::parse(30130010u32).unwrap();
        assert_eq!(cep.as_str(), "30130010");

        // Leading zeros cannot survive a numeric input.
        assert_eq!(PostalCode::parse(1001000u64).unwrap_err(), LookupError::InvalidPostalCode);
    }

    #[test]
    fn numeric_conversions_are_unsigned() {
        assert_eq!(PostalCodeInput::from(12345678u32), PostalCodeInput::Number(12345678));
        assert_eq!(PostalCodeInput::from(12345678u64), PostalCodeInput::Number(12345678));
        assert_eq!(PostalCodeInput::from("-12345678"), PostalCodeInput::Text("-12345678".to_string()));
    }

    #[test]
    fn from_str_matches_parse() {
        let cep: PostalCode = "01001-000".parse().unwrap();
        assert_eq!(cep.to_string(), "01001000");
    }

    #[test]
    fn address_accessors_read_provider_fields() {
        let address: Address = serde_json::from_str(
            r#"{"cep":"01001-000","logradouro":"Praça da Sé","bairro":"Sé","localidade":"São Paulo","uf":"SP","ddd":"11"}"#,
        )
        .unwrap();
        assert_eq!(address.postal_code(), Some("01001-000"));
        assert_eq!(address.street(), Some("Praça da Sé"));
        assert_eq!(address.neighborhood(), Some("Sé"));
        assert_eq!(address.city(), Some("São Paulo"));
        assert_eq!(address.state(), Some("SP"));
        assert_eq!(address.ddd(), Some("11"));
        assert_eq!(address.complement(), None);
        assert!(!address.is_error_marker());
    }

    #[test]
    fn error_marker_is_detected_by_key() {
        let as_bool: Address = serde_json::from_str(r#"{"erro":true}"#).unwrap();
        let as_text: Address = serde_json::from_str(r#"{"erro":"true"}"#).unwrap();
        assert!(as_bool.is_error_marker());
        assert!(as_text.is_error_marker());
    }

    #[test]
    fn display_keeps_provider_field_order() {
        let address: Address = serde_json::from_str(r#"{"uf":"MG","cep":"38400-000"}"#).unwrap();
        assert_eq!(address.to_string(), r#"{"uf":"MG","cep":"38400-000"}"#);
    }

    #[test]
    fn map_conversions_keep_every_field() {
        let mut fields = Map::new();
        fields.insert("cep".to_string(), Value::from("38400-100"));
        fields.insert("siafi".to_string(), Value::from("5403"));

        let address = Address::from_map(fields.clone());
        assert_eq!(address.postal_code(), Some("38400-100"));
        assert_eq!(address.get("siafi"), Some("5403"));
        assert_eq!(address.into_fields(), fields);
    }
}
