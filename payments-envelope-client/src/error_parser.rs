//! Error response parsing.
//!
//! Parses the JSON body of an error-status [`ResponseEnvelope`] into an
//! [`ApiError`].

use payments_envelope_core::{ParseError, ResponseEnvelope};
use serde_json::{Map, Value};

use crate::config::MappingOptions;
use crate::error::{ApiError, ErrorBody, ErrorKind};
use crate::handler::body_object;

/// Parse an error response from the server.
///
/// Error responses have the format:
/// ```json
/// {
///   "error": {
///     "type": "card_error",
///     "message": "Your card was declined.",
///     "code": "card_declined",
///     "decline_code": "generic_decline",
///     "param": "number",
///     "charge": "ch_123",
///     "doc_url": "https://example.com/docs/error-codes/card-declined"
///   }
/// }
/// ```
///
/// The kind always comes from the HTTP status. A body without an `error`
/// object yields an empty [`ErrorBody`]. A body that is not a JSON object is
/// tolerated or returned as [`ParseError`] depending on
/// [`MappingOptions::lenient_error_bodies`].
pub fn parse_error_response(
    envelope: &ResponseEnvelope,
    options: &MappingOptions,
) -> Result<ApiError, ParseError> {
    let body = match body_object(envelope, options) {
        Ok(body) => body,
        Err(_err) if options.lenient_error_bodies => {
            #[cfg(feature = "tracing")]
            tracing::warn!(
                status = envelope.status_code(),
                request_id = envelope.request_id(),
                error = %_err,
                "malformed error response body, using empty error object"
            );
            Map::new()
        }
        Err(err) => return Err(err),
    };

    Ok(ApiError::new(
        http_status_to_kind(envelope.status_code()),
        envelope.status_code(),
        envelope.request_id().map(str::to_owned),
        parse_error_body(&body),
    ))
}

/// Extract the `error` object from a parsed body.
///
/// Fields that are present but not strings are ignored rather than failing
/// the whole object.
pub fn parse_error_body(body: &Map<String, Value>) -> ErrorBody {
    let Some(Value::Object(error)) = body.get("error") else {
        return ErrorBody::default();
    };

    ErrorBody {
        error_type: string_field(error, "type"),
        message: string_field(error, "message"),
        code: string_field(error, "code"),
        param: string_field(error, "param"),
        decline_code: string_field(error, "decline_code"),
        charge: string_field(error, "charge"),
        doc_url: string_field(error, "doc_url"),
    }
}

fn string_field(object: &Map<String, Value>, key: &str) -> Option<String> {
    object
        .get(key)
        .and_then(Value::as_str)
        .map(str::to_owned)
}

/// Map an HTTP status code to an [`ErrorKind`].
///
/// Only meaningful for error statuses; every unlisted code is [`ErrorKind::Api`].
pub fn http_status_to_kind(status_code: i32) -> ErrorKind {
    match status_code {
        400 | 404 => ErrorKind::InvalidRequest,
        401 => ErrorKind::Authentication,
        402 => ErrorKind::Card,
        403 => ErrorKind::Permission,
        429 => ErrorKind::RateLimit,
        _ => ErrorKind::Api,
    }
}
