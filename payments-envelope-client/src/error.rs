//! Client-side API error types.
//!
//! This module provides [`ClientError`], the error type returned when mapping
//! a [`ResponseEnvelope`](payments_envelope_core::ResponseEnvelope), and
//! [`ApiError`], the typed form of an error response from the remote service.

use std::fmt;

use payments_envelope_core::{ABSENT_REQUEST_ID, ParseError};
use serde::{Deserialize, Serialize};

/// Category of an error response, derived from its HTTP status.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// 400 or 404: the request had invalid parameters or named a missing object.
    InvalidRequest,
    /// 401: no valid API key was provided.
    Authentication,
    /// 402: the card could not be charged.
    Card,
    /// 403: the key lacks permission for the request.
    Permission,
    /// 429: too many requests.
    RateLimit,
    /// Any other error status.
    Api,
}

impl ErrorKind {
    /// Get the string representation of this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidRequest => "invalid_request",
            ErrorKind::Authentication => "authentication",
            ErrorKind::Card => "card",
            ErrorKind::Permission => "permission",
            ErrorKind::RateLimit => "rate_limit",
            ErrorKind::Api => "api",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The `error` object of an error response body.
///
/// Every field is optional; servers omit whatever does not apply.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub error_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub param: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decline_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub charge: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc_url: Option<String>,
}

impl ErrorBody {
    /// Returns true if no field is set.
    pub fn is_empty(&self) -> bool {
        *self == ErrorBody::default()
    }
}

/// An error response from the remote service.
#[derive(Clone, Debug)]
pub struct ApiError {
    kind: ErrorKind,
    status_code: i32,
    request_id: Option<String>,
    error: ErrorBody,
}

impl ApiError {
    /// Create a new API error.
    pub fn new(
        kind: ErrorKind,
        status_code: i32,
        request_id: Option<String>,
        error: ErrorBody,
    ) -> Self {
        Self {
            kind,
            status_code,
            request_id,
            error,
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Get the HTTP status of the response.
    pub fn status_code(&self) -> i32 {
        self.status_code
    }

    /// Get the `Request-Id` of the response, for correlation with the server.
    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }

    /// Get the parsed `error` object.
    ///
    /// Empty when the body had none, or when a malformed body was tolerated.
    pub fn error(&self) -> &ErrorBody {
        &self.error
    }

    /// Get the server's error message.
    pub fn message(&self) -> Option<&str> {
        self.error.message.as_deref()
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        if let Some(message) = self.message() {
            write!(f, ": {}", message)?;
        }
        write!(
            f,
            " (Request-Id: {}, Status Code: {})",
            self.request_id().unwrap_or(ABSENT_REQUEST_ID),
            self.status_code
        )
    }
}

impl std::error::Error for ApiError {}

/// Errors returned by [`ResponseHandler`](crate::ResponseHandler).
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The response carried an error status.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The response body could not be parsed.
    #[error("malformed response body: {0}")]
    Body(#[from] ParseError),
}

impl ClientError {
    /// Get the API error, if this is one.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            ClientError::Api(err) => Some(err),
            ClientError::Body(_) => None,
        }
    }

    /// Get the error kind (only for the Api variant).
    pub fn kind(&self) -> Option<ErrorKind> {
        self.api_error().map(ApiError::kind)
    }
}
