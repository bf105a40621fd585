//! Envelope to result mapping.

use payments_envelope_core::{ParseError, ResponseEnvelope};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::config::MappingOptions;
use crate::error::ClientError;
use crate::error_parser::parse_error_response;
use crate::response::ApiResponse;

/// Turns completed [`ResponseEnvelope`]s into parsed bodies or typed errors.
///
/// A response with an error status (outside `200..300`) becomes
/// [`ClientError::Api`]. Anything else is parsed as a JSON object; a body
/// that fails to parse becomes [`ClientError::Body`].
#[derive(Debug, Clone, Default)]
pub struct ResponseHandler {
    options: MappingOptions,
}

impl ResponseHandler {
    /// Create a handler with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a handler with the given options.
    pub fn with_options(options: MappingOptions) -> Self {
        Self { options }
    }

    /// Get the handler's options.
    pub fn options(&self) -> &MappingOptions {
        &self.options
    }

    /// Map an envelope to its body as a JSON object.
    pub fn handle(
        &self,
        envelope: &ResponseEnvelope,
    ) -> Result<ApiResponse<Map<String, Value>>, ClientError> {
        self.check_status(envelope)?;
        let body = body_object(envelope, &self.options)?;
        Ok(respond(envelope, body))
    }

    /// Map an envelope to its body deserialized as `T`.
    pub fn handle_as<T: DeserializeOwned>(
        &self,
        envelope: &ResponseEnvelope,
    ) -> Result<ApiResponse<T>, ClientError> {
        self.check_status(envelope)?;
        let body: T = if is_blank(envelope, &self.options) {
            serde_json::from_value(Value::Object(Map::new())).map_err(ParseError::from)?
        } else {
            envelope.deserialize_body()?
        };
        Ok(respond(envelope, body))
    }

    fn check_status(&self, envelope: &ResponseEnvelope) -> Result<(), ClientError> {
        if !envelope.has_error_status() {
            return Ok(());
        }

        let err = parse_error_response(envelope, &self.options)?;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            status = err.status_code(),
            request_id = err.request_id(),
            kind = err.kind().as_str(),
            "error response"
        );

        Err(err.into())
    }
}

fn respond<T>(envelope: &ResponseEnvelope, body: T) -> ApiResponse<T> {
    #[cfg(feature = "tracing")]
    tracing::trace!(response = %envelope, "response mapped");

    ApiResponse::new(
        body,
        envelope.status_code(),
        envelope.request_id().map(str::to_owned),
    )
}

fn is_blank(envelope: &ResponseEnvelope, options: &MappingOptions) -> bool {
    options.blank_body_as_absent && envelope.body().is_some_and(|body| body.trim().is_empty())
}

/// The envelope's body as a JSON object, honoring the blank-body option.
pub(crate) fn body_object(
    envelope: &ResponseEnvelope,
    options: &MappingOptions,
) -> Result<Map<String, Value>, ParseError> {
    if is_blank(envelope, options) {
        return Ok(Map::new());
    }
    envelope.parsed_body()
}
