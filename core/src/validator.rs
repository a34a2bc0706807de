//! Status classification for provider responses.
//!
//! Only the status code is inspected here; body-level checks (error marker,
//! empty result list) belong to the caller that knows the body's shape.

use log::warn;

use crate::error::LookupError;
use crate::http::HttpResponse;
use crate::output::OutputSink;
use crate::types::SearchKind;

/// Classify `response`: 200 succeeds and writes the notice to `sink`,
/// 400 is `InvalidFormat`, anything else is `UnknownError`.
pub fn validate_response(
    response: &HttpResponse,
    kind: SearchKind,
    sink: &mut dyn OutputSink,
) -> Result<(), LookupError> {
    match response.status {
        200 => {
            sink.write_line(&format!("Busca de {} realizada", kind.label()));
            Ok(())
        }
        400 => {
            warn!("provider rejected {kind} request as malformed");
            Err(LookupError::InvalidFormat { kind })
        }
        status => {
            warn!("provider returned unexpected status {status} for {kind} request");
            Err(LookupError::UnknownError { status })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_emits_notice_without_reading_body() {
        let mut lines: Vec<String> = Vec::new();
        let response = HttpResponse::new(200, "not even json");
        validate_response(&response, SearchKind::PostalCode, &mut lines).unwrap();
        assert_eq!(lines, ["Busca de CEP realizada"]);

        let mut lines: Vec<String> = Vec::new();
        validate_response(&response, SearchKind::Address, &mut lines).unwrap();
        assert_eq!(lines, ["Busca de endereço realizada"]);
    }

    #[test]
    fn bad_request_is_invalid_format_for_both_kinds() {
        for kind in [SearchKind::PostalCode, SearchKind::Address] {
            let mut lines: Vec<String> = Vec::new();
            let err = validate_response(&HttpResponse::new(400, ""), kind, &mut lines).unwrap_err();
            assert_eq!(err, LookupError::InvalidFormat { kind });
            assert!(lines.is_empty());
        }
    }

    #[test]
    fn other_statuses_are_unknown() {
        for status in [201, 204, 301, 404, 429, 500, 503] {
            let mut lines: Vec<String> = Vec::new();
            let err = validate_response(&HttpResponse::new(status, ""), SearchKind::PostalCode, &mut lines)
                .unwrap_err();
            assert_eq!(err, LookupError::UnknownError { status });
            assert!(lines.is_empty());
        }
    }
}
