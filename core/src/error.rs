//! Error types for the postal-code client.
//!
//! # Design
//! Every failure a lookup can hit has its own `LookupError` variant so callers
//! match on the variant instead of the message. Messages are written in the
//! provider's language because they are shown to end users as-is.
//!
//! `TransportError` is kept separate: it is what a `Transport` implementation
//! reports, and the client folds it into `LookupError::RequestFailure`.

use thiserror::Error;

use crate::types::SearchKind;

/// Errors returned by lookups and by `CepClient` parse methods.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// The postal code was empty after stripping spaces and hyphens.
    #[error("Campo vazio")]
    EmptyInput,

    /// The normalized postal code is not exactly 8 ASCII digits.
    #[error("CEP inválido")]
    InvalidPostalCode,

    /// An address part cannot be sent as a single path segment (`.` and `..`
    /// would be collapsed by URL normalization).
    #[error("Campo de endereço inválido: {field}")]
    InvalidAddressField { field: &'static str },

    /// The provider answered 400: the request shape was rejected.
    #[error("Formato de {} inválido", .kind.label())]
    InvalidFormat { kind: SearchKind },

    /// The request was valid but matched no record.
    #[error("{} não encontrado", .kind.title())]
    NotFound { kind: SearchKind },

    /// The provider answered with a status other than 200 or 400.
    #[error("Erro desconhecido (HTTP {status})")]
    UnknownError { status: u16 },

    /// The request never produced a response (DNS, connect, timeout...).
    #[error("Erro na requisição: {0}")]
    RequestFailure(String),

    /// A 200 response whose body is not the JSON shape the endpoint promises.
    #[error("Resposta inválida do provedor: {0}")]
    InvalidResponse(String),
}

/// Failure reported by a `Transport` before any HTTP status was received.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct TransportError(pub String);

impl From<TransportError> for LookupError {
    fn from(err: TransportError) -> Self {
        LookupError::RequestFailure(err.0)
    }
}
