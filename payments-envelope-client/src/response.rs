//! Response types for mapped envelopes.
//!
//! This module provides the [`ApiResponse`] type which wraps a successfully
//! parsed body along with the request id and status it arrived with.

use std::ops::Deref;

/// A successfully mapped response.
///
/// # Example
///
/// ```
/// use payments_envelope_client::ResponseHandler;
/// use payments_envelope_core::ResponseEnvelope;
///
/// let envelope = ResponseEnvelope::builder(200)
///     .header("Request-Id", "req_1")
///     .body(r#"{"id":"pm_1"}"#)
///     .build();
///
/// let response = ResponseHandler::new().handle(&envelope)?;
///
/// // Access the body directly via Deref
/// assert_eq!(response["id"], "pm_1");
/// assert_eq!(response.request_id(), Some("req_1"));
/// # Ok::<(), payments_envelope_client::ClientError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ApiResponse<T> {
    /// The parsed body.
    inner: T,
    /// HTTP status of the response.
    status_code: i32,
    /// Value of the `Request-Id` header.
    request_id: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Create a new ApiResponse.
    pub fn new(inner: T, status_code: i32, request_id: Option<String>) -> Self {
        Self {
            inner,
            status_code,
            request_id,
        }
    }

    /// Extract the inner value, discarding metadata.
    pub fn into_inner(self) -> T {
        self.inner
    }

    /// Get a reference to the inner value.
    pub fn get_ref(&self) -> &T {
        &self.inner
    }

    /// Get the HTTP status.
    pub fn status_code(&self) -> i32 {
        self.status_code
    }

    /// Get the `Request-Id` header value.
    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }

    /// Transform the inner value, preserving metadata.
    pub fn map<U, F>(self, f: F) -> ApiResponse<U>
    where
        F: FnOnce(T) -> U,
    {
        ApiResponse {
            inner: f(self.inner),
            status_code: self.status_code,
            request_id: self.request_id,
        }
    }
}

impl<T> Deref for ApiResponse<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl<T> AsRef<T> for ApiResponse<T> {
    fn as_ref(&self) -> &T {
        &self.inner
    }
}
