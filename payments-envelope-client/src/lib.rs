//! Response mapping for the payments SDK.
//!
//! This crate sits between the HTTP transport and the rest of the SDK. The
//! transport hands over a [`ResponseEnvelope`]; this crate decides whether it
//! is a success or an API error and parses the body accordingly. It performs
//! no I/O and no retries.
//!
//! ## Example
//!
//! ```
//! use payments_envelope_client::{ClientError, ErrorKind, ResponseHandler};
//! use payments_envelope_core::ResponseEnvelope;
//!
//! let handler = ResponseHandler::new();
//!
//! let ok = ResponseEnvelope::builder(200)
//!     .header("Request-Id", "req_123")
//!     .body(r#"{"id":"pm_1"}"#)
//!     .build();
//! let response = handler.handle(&ok)?;
//! assert_eq!(response["id"], "pm_1");
//!
//! let declined = ResponseEnvelope::builder(402)
//!     .header("Request-Id", "req_456")
//!     .body(r#"{"error":{"type":"card_error","message":"Your card was declined."}}"#)
//!     .build();
//! let err = handler.handle(&declined).unwrap_err();
//! assert_eq!(err.kind(), Some(ErrorKind::Card));
//! assert_eq!(err.api_error().and_then(|e| e.request_id()), Some("req_456"));
//! # Ok::<(), ClientError>(())
//! ```
//!
//! ## Status Classification
//!
//! | Status | `is_successful()` | `has_error_status()` | Handler result |
//! |--------|-------------------|----------------------|----------------|
//! | 200 | true | false | `Ok` |
//! | 201..=299 | false | false | `Ok` |
//! | anything else | false | true | `Err(ClientError::Api)` |
//!
//! Error statuses map to an [`ErrorKind`]:
//! - 400, 404: [`ErrorKind::InvalidRequest`]
//! - 401: [`ErrorKind::Authentication`]
//! - 402: [`ErrorKind::Card`]
//! - 403: [`ErrorKind::Permission`]
//! - 429: [`ErrorKind::RateLimit`]
//! - everything else: [`ErrorKind::Api`]
//!
//! ## Malformed Bodies
//!
//! By default a malformed body on an error response is tolerated and the
//! [`ApiError`] carries an empty [`ErrorBody`]. Disable this with
//! [`MappingOptions::lenient_error_bodies`]. A malformed body on a success
//! response is always [`ClientError::Body`].
//!
//! ## Feature Flags
//!
//! | Feature | Description | Dependencies |
//! |---------|-------------|--------------|
//! | `tracing` | Events for mapped error responses | `tracing` |

pub mod config;
mod error;
pub mod error_parser;
mod handler;
pub mod response;

pub use config::MappingOptions;
pub use error::{ApiError, ClientError, ErrorBody, ErrorKind};
pub use error_parser::{http_status_to_kind, parse_error_response};
pub use handler::ResponseHandler;
pub use response::ApiResponse;

// Re-export core types that users need
pub use payments_envelope_core::{Headers, ParseError, ResponseEnvelope};
