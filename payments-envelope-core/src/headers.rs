//! Response header map.
//!
//! [`Headers`] keeps header names exactly as the transport delivered them and
//! matches them case-insensitively on lookup. Unlike [`http::HeaderMap`] it
//! does not normalize names, and it keeps distinct names in insertion order so
//! lookups are deterministic even for malformed input.

use http::HeaderMap;
use serde::{Deserialize, Serialize};

/// Multi-value header map with case-insensitive lookup.
///
/// # Example
///
/// ```
/// use payments_envelope_core::Headers;
///
/// let mut headers = Headers::new();
/// headers.append("Request-Id", "req_123");
/// headers.append("Request-Id", "req_456");
///
/// assert_eq!(headers.get("request-id"), Some(&["req_123".to_string(), "req_456".to_string()][..]));
/// assert_eq!(headers.first("REQUEST-ID"), Some("req_123"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Headers {
    entries: Vec<(String, Vec<String>)>,
}

impl Headers {
    /// Create an empty header map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a value under `name`.
    ///
    /// The value joins an existing entry only when its name matches exactly;
    /// names that differ in case are stored as separate entries.
    pub fn append<K, V>(&mut self, name: K, value: V)
    where
        K: Into<String>,
        V: Into<String>,
    {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == name) {
            Some((_, values)) => values.push(value),
            None => self.entries.push((name, vec![value])),
        }
    }

    /// Set all values of `name`, replacing the first entry whose name matches
    /// ignoring case. The stored name is kept.
    pub fn insert<K, I, V>(&mut self, name: K, values: I)
    where
        K: Into<String>,
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        let name = name.into();
        let values: Vec<String> = values.into_iter().map(Into::into).collect();
        match self
            .entries
            .iter_mut()
            .find(|(k, _)| k.eq_ignore_ascii_case(&name))
        {
            Some((_, existing)) => *existing = values,
            None => self.entries.push((name, values)),
        }
    }

    /// Get all values for a header, ignoring the case of `name`.
    ///
    /// If several stored names match, the first one inserted wins.
    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, values)| values.as_slice())
    }

    /// Get the first value for a header, ignoring the case of `name`.
    ///
    /// Returns `None` when the header is missing or has no values.
    pub fn first(&self, name: &str) -> Option<&str> {
        self.get(name)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Check if a header exists.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Iterate over header names as stored, with their values.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(k, values)| (k.as_str(), values.as_slice()))
    }

    /// Returns true if there are no headers.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of distinct stored names.
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl<K, I, V> FromIterator<(K, I)> for Headers
where
    K: Into<String>,
    I: IntoIterator<Item = V>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, I)>>(iter: T) -> Self {
        let mut headers = Headers::new();
        for (name, values) in iter {
            let name = name.into();
            for value in values {
                headers.append(name.clone(), value);
            }
            // Keep names that arrived without values.
            if !headers.entries.iter().any(|(k, _)| *k == name) {
                headers.entries.push((name, Vec::new()));
            }
        }
        headers
    }
}

impl From<&HeaderMap> for Headers {
    fn from(map: &HeaderMap) -> Self {
        let mut headers = Headers::new();
        for (name, value) in map.iter() {
            headers.append(
                name.as_str(),
                String::from_utf8_lossy(value.as_bytes()).into_owned(),
            );
        }
        headers
    }
}

impl From<HeaderMap> for Headers {
    fn from(map: HeaderMap) -> Self {
        Self::from(&map)
    }
}
