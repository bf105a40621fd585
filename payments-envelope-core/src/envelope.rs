//! Immutable response envelope.
//!
//! A [`ResponseEnvelope`] is built once by the transport when an HTTP exchange
//! completes and is read-only afterwards. Everything it exposes beyond the raw
//! status, body and headers is derived on demand:
//!
//! ```text
//! is_successful     status == 200
//! has_error_status  status < 200 || status >= 300
//! request_id        first value of the `Request-Id` header
//! parsed_body       body as a JSON object, `{}` when there is no body
//! ```
//!
//! Statuses 201..=299 are neither successful nor errors.

use std::fmt;

use bytes::Bytes;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{ParseError, json_type_name};
use crate::headers::Headers;

/// Name of the header carrying the remote service's correlation id.
pub const REQUEST_ID_HEADER: &str = "Request-Id";

/// Marker printed by [`ResponseEnvelope::describe`] when there is no request id.
pub const ABSENT_REQUEST_ID: &str = "null";

/// A completed HTTP exchange as seen by the SDK.
///
/// The envelope performs no validation: any status and any body text are
/// carried as-is.
///
/// # Example
///
/// ```
/// use payments_envelope_core::ResponseEnvelope;
///
/// let response = ResponseEnvelope::builder(200)
///     .header("Request-Id", "req_123")
///     .body(r#"{"id":"pm_1"}"#)
///     .build();
///
/// assert!(response.is_successful());
/// assert_eq!(response.request_id(), Some("req_123"));
/// assert_eq!(response.parsed_body().unwrap()["id"], "pm_1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    status_code: i32,
    #[serde(default)]
    body: Option<String>,
    #[serde(default)]
    headers: Headers,
}

impl ResponseEnvelope {
    /// Create an envelope from its raw parts.
    pub fn new(status_code: i32, body: Option<String>, headers: Headers) -> Self {
        Self {
            status_code,
            body,
            headers,
        }
    }

    /// Start building an envelope with the given status code.
    pub fn builder(status_code: i32) -> ResponseEnvelopeBuilder {
        ResponseEnvelopeBuilder::new(status_code)
    }

    /// Build an envelope from an [`http::Response`] whose body may be absent.
    ///
    /// The body is carried as-is, so `Some("")` stays present. The
    /// `From<http::Response<String>>` and byte adapters instead treat an
    /// empty body as absent.
    pub fn from_http(response: http::Response<Option<String>>) -> Self {
        let (parts, body) = response.into_parts();
        Self::new(
            i32::from(parts.status.as_u16()),
            body,
            Headers::from(&parts.headers),
        )
    }

    /// Build an envelope from an [`http::Response`] with a raw byte body.
    ///
    /// An empty body is treated as absent. Non UTF-8 bytes are replaced
    /// with U+FFFD.
    pub fn from_http_bytes(response: http::Response<Bytes>) -> Self {
        let (parts, body) = response.into_parts();
        let body = (!body.is_empty()).then(|| String::from_utf8_lossy(&body).into_owned());
        Self::new(
            i32::from(parts.status.as_u16()),
            body,
            Headers::from(&parts.headers),
        )
    }

    /// The transport-level HTTP status.
    pub fn status_code(&self) -> i32 {
        self.status_code
    }

    /// The raw body text, if any was returned.
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    /// The response headers.
    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    /// Returns true only for status 200.
    ///
    /// This is deliberately narrower than `!has_error_status()`.
    pub fn is_successful(&self) -> bool {
        self.status_code == i32::from(http::StatusCode::OK.as_u16())
    }

    /// Returns true for any status outside `200..300`.
    pub fn has_error_status(&self) -> bool {
        !(200..300).contains(&self.status_code)
    }

    /// All values of the first header whose name matches `name`, ignoring case.
    pub fn header_values(&self, name: &str) -> Option<&[String]> {
        self.headers.get(name)
    }

    /// The first value of the `Request-Id` header.
    pub fn request_id(&self) -> Option<&str> {
        self.header_values(REQUEST_ID_HEADER)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Parse the body as a JSON object.
    ///
    /// An absent body yields an empty object. A present body must be valid
    /// JSON with an object at the top level; an empty string is not.
    pub fn parsed_body(&self) -> Result<Map<String, Value>, ParseError> {
        let Some(body) = self.body.as_deref() else {
            return Ok(Map::new());
        };

        match serde_json::from_str::<Value>(body)? {
            Value::Object(map) => Ok(map),
            other => Err(ParseError::NotAnObject {
                found: json_type_name(&other),
            }),
        }
    }

    /// Deserialize the body into `T`.
    ///
    /// An absent body is deserialized as an empty JSON object, so types whose
    /// fields all have defaults still succeed.
    pub fn deserialize_body<T: DeserializeOwned>(&self) -> Result<T, ParseError> {
        let value = match self.body.as_deref() {
            Some(body) => serde_json::from_str(body)?,
            None => serde_json::from_value(Value::Object(Map::new()))?,
        };
        Ok(value)
    }

    /// Diagnostic line with the request id and status code.
    ///
    /// Intended for logs only; the format is not a wire contract.
    pub fn describe(&self) -> String {
        self.to_string()
    }

    /// Decompose into status code, body and headers.
    pub fn into_parts(self) -> (i32, Option<String>, Headers) {
        (self.status_code, self.body, self.headers)
    }
}

impl fmt::Display for ResponseEnvelope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Request-Id: {}, Status Code: {}",
            self.request_id().unwrap_or(ABSENT_REQUEST_ID),
            self.status_code
        )
    }
}

impl From<http::Response<String>> for ResponseEnvelope {
    fn from(response: http::Response<String>) -> Self {
        Self::from_http(response.map(|body| (!body.is_empty()).then_some(body)))
    }
}

impl From<http::Response<Option<String>>> for ResponseEnvelope {
    fn from(response: http::Response<Option<String>>) -> Self {
        Self::from_http(response)
    }
}

impl From<http::Response<Bytes>> for ResponseEnvelope {
    fn from(response: http::Response<Bytes>) -> Self {
        Self::from_http_bytes(response)
    }
}

/// Builder for [`ResponseEnvelope`].
#[derive(Debug, Clone)]
pub struct ResponseEnvelopeBuilder {
    status_code: i32,
    body: Option<String>,
    headers: Headers,
}

impl ResponseEnvelopeBuilder {
    /// Create a builder with no body and no headers.
    pub fn new(status_code: i32) -> Self {
        Self {
            status_code,
            body: None,
            headers: Headers::new(),
        }
    }

    /// Set the body text.
    pub fn body<S: Into<String>>(mut self, body: S) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Append a header value.
    pub fn header<K: Into<String>, V: Into<String>>(mut self, name: K, value: V) -> Self {
        self.headers.append(name, value);
        self
    }

    /// Replace all headers.
    pub fn headers(mut self, headers: Headers) -> Self {
        self.headers = headers;
        self
    }

    /// Finish building the envelope.
    pub fn build(self) -> ResponseEnvelope {
        ResponseEnvelope::new(self.status_code, self.body, self.headers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_status(status_code: i32) -> ResponseEnvelope {
        ResponseEnvelope::new(status_code, None, Headers::new())
    }

    #[test]
    fn test_status_200_is_successful() {
        let response = with_status(200);
        assert!(response.is_successful());
        assert!(!response.has_error_status());
    }

    #[test]
    fn test_other_2xx_is_neither() {
        for code in [201, 202, 204, 250, 299] {
            let response = with_status(code);
            assert!(!response.is_successful(), "{code} should not be successful");
            assert!(!response.has_error_status(), "{code} should not be an error");
        }
    }

    #[test]
    fn test_error_statuses() {
        for code in [-1, 0, 100, 199, 300, 301, 400, 402, 404, 429, 500, 503] {
            let response = with_status(code);
            assert!(response.has_error_status(), "{code} should be an error");
            assert!(!response.is_successful());
        }
    }

    #[test]
    fn test_request_id_first_value() {
        let response = ResponseEnvelope::builder(200)
            .header("Request-Id", "req_123")
            .header("Request-Id", "req_456")
            .build();
        assert_eq!(response.request_id(), Some("req_123"));
    }

    #[test]
    fn test_request_id_case_insensitive() {
        let response = ResponseEnvelope::builder(200)
            .header("request-id", "req_lower")
            .build();
        assert_eq!(response.request_id(), Some("req_lower"));
        assert_eq!(
            response.header_values("REQUEST-ID"),
            Some(&["req_lower".to_string()][..])
        );
    }

    #[test]
    fn test_request_id_absent() {
        assert_eq!(with_status(200).request_id(), None);

        let headers: Headers = [("Request-Id", Vec::<String>::new())].into_iter().collect();
        let response = ResponseEnvelope::new(200, None, headers);
        assert_eq!(response.request_id(), None);
    }

    #[test]
    fn test_parsed_body_absent_is_empty_object() {
        let parsed = with_status(204).parsed_body().unwrap();
        assert!(parsed.is_empty());
    }

    #[test]
    fn test_parsed_body_object() {
        let response = ResponseEnvelope::builder(200).body(r#"{"id":"pm_1"}"#).build();
        let parsed = response.parsed_body().unwrap();
        assert_eq!(parsed.get("id"), Some(&Value::String("pm_1".into())));
    }

    #[test]
    fn test_parsed_body_invalid_json() {
        let response = ResponseEnvelope::builder(200).body("not json").build();
        let err = response.parsed_body().unwrap_err();
        assert!(err.is_syntax());
    }

    #[test]
    fn test_parsed_body_empty_string_fails() {
        let response = ResponseEnvelope::builder(200).body("").build();
        assert!(response.parsed_body().is_err());
    }

    #[test]
    fn test_parsed_body_non_object() {
        let response = ResponseEnvelope::builder(200).body("[1, 2]").build();
        assert!(matches!(
            response.parsed_body(),
            Err(ParseError::NotAnObject { found: "array" })
        ));
    }

    #[test]
    fn test_parsed_body_is_deterministic() {
        let response = ResponseEnvelope::builder(200)
            .body(r#"{"b":1,"a":{"c":[true,null]}}"#)
            .build();
        assert_eq!(response.parsed_body().unwrap(), response.parsed_body().unwrap());
    }

    #[test]
    fn test_deserialize_body() {
        #[derive(Deserialize)]
        struct PaymentMethod {
            id: String,
        }

        #[derive(Deserialize, Default)]
        struct Empty {
            #[serde(default)]
            id: Option<String>,
        }

        let response = ResponseEnvelope::builder(200).body(r#"{"id":"pm_1"}"#).build();
        let pm: PaymentMethod = response.deserialize_body().unwrap();
        assert_eq!(pm.id, "pm_1");

        let empty: Empty = with_status(200).deserialize_body().unwrap();
        assert!(empty.id.is_none());

        assert!(with_status(200).deserialize_body::<PaymentMethod>().is_err());
    }

    #[test]
    fn test_describe_without_request_id() {
        let text = with_status(404).describe();
        assert_eq!(text, "Request-Id: null, Status Code: 404");
        assert!(text.contains("Status Code: 404"));
    }

    #[test]
    fn test_describe_with_request_id() {
        let response = ResponseEnvelope::builder(402)
            .header("Request-Id", "req_abc")
            .build();
        assert_eq!(response.to_string(), "Request-Id: req_abc, Status Code: 402");
    }

    #[test]
    fn test_from_http_response() {
        let response = http::Response::builder()
            .status(201)
            .header("Request-Id", "req_9")
            .body(r#"{"object":"customer"}"#.to_string())
            .unwrap();

        let envelope = ResponseEnvelope::from(response);
        assert_eq!(envelope.status_code(), 201);
        assert_eq!(envelope.request_id(), Some("req_9"));
        assert_eq!(envelope.body(), Some(r#"{"object":"customer"}"#));
    }

    #[test]
    fn test_from_http_bytes_empty_body_is_absent() {
        let response = http::Response::builder()
            .status(500)
            .body(Bytes::new())
            .unwrap();

        let envelope = ResponseEnvelope::from_http_bytes(response);
        assert_eq!(envelope.body(), None);
        assert!(envelope.parsed_body().unwrap().is_empty());
    }

    #[test]
    fn test_empty_body_adapters_agree() {
        let text = ResponseEnvelope::from(
            http::Response::builder().status(204).body(String::new()).unwrap(),
        );
        let bytes = ResponseEnvelope::from(
            http::Response::builder().status(204).body(Bytes::new()).unwrap(),
        );

        assert_eq!(text.body(), None);
        assert_eq!(text, bytes);
        assert!(text.parsed_body().unwrap().is_empty());

        let explicit = ResponseEnvelope::from_http(
            http::Response::builder().status(204).body(Some(String::new())).unwrap(),
        );
        assert_eq!(explicit.body(), Some(""));
    }

    #[test]
    fn test_from_http_bytes_lossy() {
        let response = http::Response::builder()
            .status(200)
            .body(Bytes::from_static(b"ab\xffc"))
            .unwrap();

        let envelope = ResponseEnvelope::from_http_bytes(response);
        assert_eq!(envelope.body(), Some("ab\u{fffd}c"));
    }

    #[test]
    fn test_into_parts() {
        let (status, body, headers) = ResponseEnvelope::builder(200)
            .header("X-A", "1")
            .body("{}")
            .build()
            .into_parts();
        assert_eq!(status, 200);
        assert_eq!(body.as_deref(), Some("{}"));
        assert_eq!(headers.first("x-a"), Some("1"));
    }

    #[test]
    fn test_envelope_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ResponseEnvelope>();
    }

    #[test]
    fn test_serde_fixture() {
        let envelope: ResponseEnvelope =
            serde_json::from_str(r#"{"status_code":404}"#).unwrap();
        assert_eq!(envelope.status_code(), 404);
        assert_eq!(envelope.body(), None);
        assert!(envelope.headers().is_empty());
    }
}
