//! Inbound request metadata.
//!
//! Tools read credentials from the headers of the request that carried the
//! tool call. Over STDIO there are none. The axum transport builds them from
//! the request `HeaderMap`. A host serving the server through rmcp's own HTTP
//! service stores the request `Parts` in the context extensions, which the
//! tool routes read.

use std::collections::HashMap;

/// Name of the standard authorization header.
pub const AUTHORIZATION: &str = "Authorization";

/// Header mapping for a single tool invocation.
///
/// Names are stored lowercased, so lookups ignore case and two spellings of
/// one header name share a single entry (the last one inserted). Values are
/// kept exactly as received.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestHeaders {
    entries: HashMap<String, String>,
}

impl RequestHeaders {
    /// Create an empty header mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a header value, comparing names case-insensitively.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// Insert a header, replacing any value stored under the same name in
    /// any case.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let mut name = name.into();
        name.make_ascii_lowercase();
        self.entries.insert(name, value.into());
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Build from an `http::HeaderMap`, skipping values that are not valid UTF-8.
    #[cfg(feature = "http")]
    pub fn from_header_map(map: &http::HeaderMap) -> Self {
        map.iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect()
    }

    /// Extract headers from an rmcp request context.
    ///
    /// The streamable HTTP service stores the originating request `Parts` in
    /// the context extensions. Other transports leave them empty.
    #[cfg(feature = "http")]
    pub fn from_extensions(extensions: &rmcp::model::Extensions) -> Self {
        extensions
            .get::<http::request::Parts>()
            .map(|parts| Self::from_header_map(&parts.headers))
            .unwrap_or_default()
    }

    #[cfg(not(feature = "http"))]
    pub fn from_extensions(_extensions: &rmcp::model::Extensions) -> Self {
        Self::default()
    }
}

impl<K, V> FromIterator<(K, V)> for RequestHeaders
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut headers = Self::new();
        for (name, value) in iter {
            headers.insert(name, value);
        }
        headers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_ignores_name_case() {
        let headers: RequestHeaders = [("X-Sdc-Api-Key", "secret")].into_iter().collect();
        assert_eq!(headers.get("x-sdc-api-key"), Some("secret"));
        assert_eq!(headers.get("X-SDC-API-KEY"), Some("secret"));
    }

    #[test]
    fn test_value_case_preserved() {
        let headers: RequestHeaders = [("authorization", "Bearer AbC")].into_iter().collect();
        assert_eq!(headers.get(AUTHORIZATION), Some("Bearer AbC"));
    }

    #[test]
    fn test_empty_mapping_returns_none() {
        let headers = RequestHeaders::new();
        assert!(headers.is_empty());
        assert_eq!(headers.get("x-sdc-api-key"), None);
    }

    #[test]
    fn test_case_variants_share_one_entry() {
        let headers: RequestHeaders = [("X-SDC-API-KEY", "first"), ("x-sdc-api-key", "second")]
            .into_iter()
            .collect();
        assert_eq!(headers.len(), 1);
        assert_eq!(headers.get("X-Sdc-Api-Key"), Some("second"));

        let mut headers = RequestHeaders::new();
        headers.insert("x-sdc-client-id", "a");
        headers.insert("X-SDC-Client-Id", "b");
        assert_eq!(headers.len(), 1);
        assert_eq!(headers.get("x-sdc-client-id"), Some("b"));
    }

    #[test]
    fn test_missing_name_returns_none() {
        let mut headers = RequestHeaders::new();
        headers.insert("x-sdc-client-id", "client");
        assert_eq!(headers.len(), 1);
        assert_eq!(headers.get("x-sdc-api-key"), None);
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_from_header_map() {
        let mut map = http::HeaderMap::new();
        map.insert("x-sdc-api-key", http::HeaderValue::from_static("header-token"));
        map.insert(
            http::header::AUTHORIZATION,
            http::HeaderValue::from_static("Bearer abc"),
        );
        let headers = RequestHeaders::from_header_map(&map);
        assert_eq!(headers.get("X-Sdc-Api-Key"), Some("header-token"));
        assert_eq!(headers.get(AUTHORIZATION), Some("Bearer abc"));
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_from_extensions_with_parts() {
        let (mut parts, _body) = http::Request::new(()).into_parts();
        parts
            .headers
            .insert("x-sdc-client-id", http::HeaderValue::from_static("from-parts"));
        let mut extensions = rmcp::model::Extensions::new();
        extensions.insert(parts);

        let headers = RequestHeaders::from_extensions(&extensions);
        assert_eq!(headers.get("x-sdc-client-id"), Some("from-parts"));
    }

    #[test]
    fn test_from_extensions_without_parts() {
        let extensions = rmcp::model::Extensions::new();
        assert!(RequestHeaders::from_extensions(&extensions).is_empty());
    }
}
