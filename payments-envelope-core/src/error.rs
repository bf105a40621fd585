//! Body parsing errors.

/// Error returned when a response body cannot be read as a JSON object.
///
/// This is the only failure a [`ResponseEnvelope`](crate::ResponseEnvelope)
/// can produce. Status classification and header lookup are total.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// The body is not syntactically valid JSON, or does not match the
    /// requested type.
    #[error("invalid JSON body: {0}")]
    Syntax(#[from] serde_json::Error),

    /// The body is valid JSON but its top-level value is not an object.
    #[error("expected a JSON object, found {found}")]
    NotAnObject { found: &'static str },
}

impl ParseError {
    /// Returns true if the body was not valid JSON at all.
    pub fn is_syntax(&self) -> bool {
        matches!(self, ParseError::Syntax(_))
    }
}

/// Name of a JSON value's type, used in [`ParseError::NotAnObject`].
pub(crate) fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
