//! Core response types for the payments SDK.
//!
//! This crate provides the value types shared by every layer that touches a
//! completed HTTP exchange: the transport that produces them and the
//! error-mapping layer (`payments-envelope-client`) that consumes them.
//!
//! ## Modules
//!
//! - [`envelope`]: The immutable [`ResponseEnvelope`] and its derived fields
//! - [`headers`]: Case-insensitive, order-preserving multi-value [`Headers`]
//! - [`error`]: [`ParseError`], raised when a body is not a JSON object

mod envelope;
mod error;
mod headers;

pub use envelope::*;
pub use error::*;
pub use headers::*;
