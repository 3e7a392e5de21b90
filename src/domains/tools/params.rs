//! Credential resolution for tool calls.
//!
//! Each credential can arrive as a custom request header or fall back to
//! the value the server was started with. Headers always win over the
//! fallback. The API token can also come from an `Authorization: Bearer`
//! header when its custom header is absent.
//!
//! Values are resolved on every invocation and never cached.

use crate::core::headers::{AUTHORIZATION, RequestHeaders};

use super::error::ToolError;

/// Header carrying the Voicebox app API token.
pub const API_KEY_HEADER: &str = "x-sdc-api-key";

/// Header carrying the Voicebox client id.
pub const CLIENT_ID_HEADER: &str = "x-sdc-client-id";

/// Header carrying a Stardog auth token override.
pub const AUTH_TOKEN_OVERRIDE_HEADER: &str = "x-sd-auth-token";

const BEARER_PREFIX: &str = "Bearer ";

/// Credential parameters a tool may need.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Credential {
    ApiToken,
    ClientId,
    AuthTokenOverride,
}

impl Credential {
    /// Header the credential is read from.
    pub fn header_name(&self) -> &'static str {
        match self {
            Self::ApiToken => API_KEY_HEADER,
            Self::ClientId => CLIENT_ID_HEADER,
            Self::AuthTokenOverride => AUTH_TOKEN_OVERRIDE_HEADER,
        }
    }

    pub fn is_required(&self) -> bool {
        matches!(self, Self::ApiToken)
    }

    /// Message of the error raised when a required credential is missing.
    pub fn error_message(&self) -> &'static str {
        match self {
            Self::ApiToken => "API token is required",
            Self::ClientId => "Client ID is required",
            Self::AuthTokenOverride => "Auth token override is required",
        }
    }
}

/// Resolve a parameter from the request headers or a fallback value.
///
/// Precedence, highest first:
/// 1. the `header_name` header,
/// 2. for the API key header only, a bearer token in `Authorization`,
/// 3. `fallback`.
///
/// Empty values count as absent. Fails with
/// [`ToolError::MissingParameter`] carrying `error_message` when `required`
/// is set and nothing was found.
pub fn resolve_param(
    headers: &RequestHeaders,
    header_name: &str,
    fallback: Option<&str>,
    required: bool,
    error_message: &str,
) -> Result<Option<String>, ToolError> {
    let mut header_value = non_empty(headers.get(header_name));

    if header_value.is_none() && header_name.eq_ignore_ascii_case(API_KEY_HEADER) {
        header_value = headers.get(AUTHORIZATION).and_then(extract_bearer_token);
    }

    let resolved = header_value.or_else(|| non_empty(fallback));

    if required && resolved.is_none() {
        return Err(ToolError::missing_parameter(error_message));
    }

    Ok(resolved.map(str::to_string))
}

/// Resolve a credential with its own header, required flag and message.
pub fn resolve_credential(
    headers: &RequestHeaders,
    credential: Credential,
    fallback: Option<&str>,
) -> Result<Option<String>, ToolError> {
    resolve_param(
        headers,
        credential.header_name(),
        fallback,
        credential.is_required(),
        credential.error_message(),
    )
}

/// Extract the token from a `Bearer <token>` value.
///
/// The token is the run of non-whitespace characters right after the
/// prefix. Values without the trailing space or with no token yield `None`.
pub fn extract_bearer_token(value: &str) -> Option<&str> {
    let rest = value.strip_prefix(BEARER_PREFIX)?;
    let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
    non_empty(Some(&rest[..end]))
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(pairs: &[(&str, &str)]) -> RequestHeaders {
        pairs.iter().map(|(k, v)| (*k, *v)).collect()
    }

    fn resolve_token(headers: &RequestHeaders, fallback: Option<&str>) -> Option<String> {
        resolve_param(headers, API_KEY_HEADER, fallback, false, "API token is required").unwrap()
    }

    #[test]
    fn test_header_beats_fallback() {
        let h = headers(&[("x-sdc-api-key", "header-token")]);
        assert_eq!(
            resolve_token(&h, Some("arg-token")).as_deref(),
            Some("header-token")
        );
    }

    #[test]
    fn test_header_lookup_case_insensitive() {
        let h = headers(&[("X-Sdc-Api-Key", "header-token")]);
        assert_eq!(resolve_token(&h, None).as_deref(), Some("header-token"));
    }

    #[test]
    fn test_fallback_used_without_header() {
        let h = RequestHeaders::new();
        assert_eq!(resolve_token(&h, Some("arg-token")).as_deref(), Some("arg-token"));
    }

    #[test]
    fn test_bearer_token_extracted() {
        let h = headers(&[("Authorization", "Bearer abc123")]);
        assert_eq!(resolve_token(&h, None).as_deref(), Some("abc123"));
    }

    #[test]
    fn test_bearer_beats_fallback() {
        let h = headers(&[("authorization", "Bearer abc123")]);
        assert_eq!(resolve_token(&h, Some("arg-token")).as_deref(), Some("abc123"));
    }

    #[test]
    fn test_custom_header_beats_bearer() {
        let h = headers(&[
            ("x-sdc-api-key", "header-token"),
            ("Authorization", "Bearer abc123"),
        ]);
        assert_eq!(resolve_token(&h, None).as_deref(), Some("header-token"));
    }

    #[test]
    fn test_malformed_bearer_values_ignored() {
        for value in ["Bearer", "Bearer ", "Bearertoken", "InvalidBearer token", "bearer abc"] {
            let h = headers(&[("Authorization", value)]);
            assert_eq!(resolve_token(&h, None), None, "value {:?}", value);
        }
    }

    #[test]
    fn test_bearer_token_stops_at_whitespace() {
        assert_eq!(extract_bearer_token("Bearer abc def"), Some("abc"));
        assert_eq!(extract_bearer_token("Bearer  abc"), None);
    }

    #[test]
    fn test_bearer_only_for_api_key() {
        let h = headers(&[("Authorization", "Bearer abc123")]);
        let client_id = resolve_credential(&h, Credential::ClientId, None).unwrap();
        assert_eq!(client_id, None);
    }

    #[test]
    fn test_required_missing_fails_with_message() {
        let h = RequestHeaders::new();
        let err = resolve_param(&h, API_KEY_HEADER, None, true, "API token is required")
            .unwrap_err();
        assert!(matches!(err, ToolError::MissingParameter(_)));
        assert!(err.to_string().contains("API token is required"));
    }

    #[test]
    fn test_required_empty_fallback_fails() {
        let h = headers(&[("x-sdc-api-key", "")]);
        let err = resolve_credential(&h, Credential::ApiToken, Some("")).unwrap_err();
        assert_eq!(err.to_string(), "API token is required");
    }

    #[test]
    fn test_optional_missing_returns_none() {
        let h = RequestHeaders::new();
        assert_eq!(
            resolve_credential(&h, Credential::AuthTokenOverride, None).unwrap(),
            None
        );
    }

    #[test]
    fn test_resolution_is_repeatable() {
        let h = headers(&[("x-sdc-client-id", "header-client")]);
        let first = resolve_credential(&h, Credential::ClientId, Some("arg-client")).unwrap();
        let second = resolve_credential(&h, Credential::ClientId, Some("arg-client")).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.as_deref(), Some("header-client"));
    }

    #[test]
    fn test_credential_table() {
        assert!(Credential::ApiToken.is_required());
        assert!(!Credential::ClientId.is_required());
        assert!(!Credential::AuthTokenOverride.is_required());
        assert_eq!(Credential::AuthTokenOverride.header_name(), "x-sd-auth-token");
    }
}
