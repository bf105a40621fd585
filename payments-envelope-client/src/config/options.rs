//! Mapping options.
//!
//! The envelope itself never recovers from a bad body. Whether a malformed
//! body is fatal is the caller's policy, and [`MappingOptions`] is where the
//! caller states it.

/// Options for mapping envelopes to results.
///
/// # Example
///
/// ```
/// use payments_envelope_client::{MappingOptions, ResponseHandler};
///
/// let options = MappingOptions::new()
///     .lenient_error_bodies(false)
///     .blank_body_as_absent(true);
///
/// let handler = ResponseHandler::with_options(options);
/// assert!(!handler.options().is_lenient_error_bodies());
/// ```
#[derive(Debug, Clone)]
pub struct MappingOptions {
    /// Degrade a malformed error-status body to an empty error object.
    pub(crate) lenient_error_bodies: bool,
    /// Treat a body of only whitespace like an absent body.
    pub(crate) blank_body_as_absent: bool,
}

impl Default for MappingOptions {
    fn default() -> Self {
        Self {
            lenient_error_bodies: true,
            blank_body_as_absent: true,
        }
    }
}

impl MappingOptions {
    /// Create new default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether a malformed body on an error response is tolerated.
    ///
    /// When true (the default) the resulting [`ApiError`](crate::ApiError)
    /// carries an empty error object. When false the parse failure is
    /// returned as [`ClientError::Body`](crate::ClientError::Body).
    pub fn lenient_error_bodies(mut self, lenient: bool) -> Self {
        self.lenient_error_bodies = lenient;
        self
    }

    /// Get whether malformed error bodies are tolerated.
    pub fn is_lenient_error_bodies(&self) -> bool {
        self.lenient_error_bodies
    }

    /// Set whether an empty or whitespace-only body counts as no body.
    ///
    /// Some transports report `Some("")` for a `204 No Content`.
    pub fn blank_body_as_absent(mut self, enabled: bool) -> Self {
        self.blank_body_as_absent = enabled;
        self
    }

    /// Get whether blank bodies count as absent.
    pub fn is_blank_body_as_absent(&self) -> bool {
        self.blank_body_as_absent
    }
}
