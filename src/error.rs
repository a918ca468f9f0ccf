//! Error types for Superthread API operations.
//!
//! Failed HTTP responses are turned into an [`ApiError`] by [`classify`],
//! a pure function of status code, response body and headers.

use std::time::Duration;

use reqwest::header::HeaderMap;
use serde_json::Value;
use thiserror::Error;

/// Body fields checked, in order, for a human readable error message.
const MESSAGE_FIELDS: [&str; 3] = ["message", "error", "error_description"];

const UNKNOWN_ERROR: &str = "Unknown error";

/// Errors that can occur during Superthread API operations.
#[derive(Debug, Error)]
pub enum SuperthreadError {
    /// Configuration is missing or incomplete.
    #[error("Superthread configuration required: {0}")]
    ConfigMissing(String),

    /// An identifier could not be used in a request path.
    ///
    /// Raised locally, before any request is sent.
    #[error("Invalid path parameter: {0}")]
    PathValidation(String),

    /// A combination of arguments the API would reject.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The API answered with a non-success status.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The API answered with a payload the caller cannot represent.
    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// JSON parsing error.
    #[error("Failed to parse response: {0}")]
    ParseError(#[from] serde_json::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    /// Query string encoding error.
    #[error("Failed to encode query: {0}")]
    QueryError(#[from] serde_qs::Error),
}

impl SuperthreadError {
    /// The classified kind, for errors that came back from the API.
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Api(err) => Some(err.kind),
            _ => None,
        }
    }

    /// HTTP status of the failed response, if there was one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api(err) => err.status,
            _ => None,
        }
    }

    /// Server-suggested wait before retrying a rate limited call.
    pub fn retry_after(&self) -> Option<Duration> {
        match self {
            Self::Api(err) => err.retry_after,
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.kind() == Some(ErrorKind::NotFound)
    }

    pub fn is_rate_limited(&self) -> bool {
        self.kind() == Some(ErrorKind::RateLimit)
    }
}

/// Result type alias for Superthread operations.
pub type Result<T> = core::result::Result<T, SuperthreadError>;

/// Classification of a failed API response.
///
/// `Validation`, `Authentication`, `Forbidden`, `NotFound` and `RateLimit`
/// are refinements of a client error; `Client` covers any other 4xx.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// HTTP 400 or 422.
    Validation,
    /// HTTP 401.
    Authentication,
    /// HTTP 403 that does not look like rate limiting.
    Forbidden,
    /// HTTP 404.
    NotFound,
    /// HTTP 429, or a 403 whose message mentions a rate limit.
    RateLimit,
    /// Any other 4xx.
    Client,
    /// Any 5xx.
    Server,
    /// Anything outside the 4xx/5xx ranges.
    Api,
}

impl ErrorKind {
    /// Returns true for every kind in the 4xx family.
    pub fn is_client_error(self) -> bool {
        matches!(
            self,
            Self::Validation
                | Self::Authentication
                | Self::Forbidden
                | Self::NotFound
                | Self::RateLimit
                | Self::Client
        )
    }

    pub fn is_server_error(self) -> bool {
        self == Self::Server
    }

    /// Short stable name, used in logs.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Authentication => "authentication",
            Self::Forbidden => "forbidden",
            Self::NotFound => "not_found",
            Self::RateLimit => "rate_limit",
            Self::Client => "client",
            Self::Server => "server",
            Self::Api => "api",
        }
    }
}

/// A failed API response.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct ApiError {
    /// What went wrong.
    pub kind: ErrorKind,
    /// HTTP status code, when the error came from a response.
    pub status: Option<u16>,
    /// Display message, `"HTTP {status}: {detail}"` when the status is known.
    pub message: String,
    /// The parsed response body, or the raw text as a JSON string.
    pub body: Value,
    /// Parsed `retry-after` header. Only set for [`ErrorKind::RateLimit`].
    pub retry_after: Option<Duration>,
}

impl ApiError {
    /// Create an error, composing the display message from `detail`.
    pub fn new(kind: ErrorKind, status: Option<u16>, detail: &str, body: Value) -> Self {
        let message = match status {
            Some(code) => format!("HTTP {code}: {detail}"),
            None => detail.to_string(),
        };
        Self {
            kind,
            status,
            message,
            body,
            retry_after: None,
        }
    }

    #[must_use]
    pub fn with_retry_after(mut self, retry_after: Option<Duration>) -> Self {
        self.retry_after = retry_after;
        self
    }
}

/// Classify a failed response.
///
/// Never fails: an unparseable body is kept as the raw string and an
/// unrecognised status falls back to a generic kind.
pub fn classify(status: u16, raw_body: &str, headers: &HeaderMap) -> ApiError {
    let body = serde_json::from_str::<Value>(raw_body)
        .unwrap_or_else(|_| Value::String(raw_body.to_string()));
    let detail = extract_message(&body, raw_body);

    let kind = match status {
        400 | 422 => ErrorKind::Validation,
        401 => ErrorKind::Authentication,
        403 => forbidden_kind(&detail),
        404 => ErrorKind::NotFound,
        429 => ErrorKind::RateLimit,
        400..=499 => ErrorKind::Client,
        500..=599 => ErrorKind::Server,
        _ => ErrorKind::Api,
    };

    let retry_after = match kind {
        ErrorKind::RateLimit => parse_retry_after(headers),
        _ => None,
    };

    tracing::warn!(status, kind = kind.as_str(), message = %detail, "API request failed");

    ApiError::new(kind, Some(status), &detail, body).with_retry_after(retry_after)
}

/// The API reports some throttling as a plain 403.
fn forbidden_kind(message: &str) -> ErrorKind {
    if message.to_lowercase().contains("rate limit") {
        ErrorKind::RateLimit
    } else {
        ErrorKind::Forbidden
    }
}

fn extract_message(body: &Value, raw_body: &str) -> String {
    if let Some(map) = body.as_object() {
        let found = MESSAGE_FIELDS
            .iter()
            .filter_map(|field| map.get(*field).and_then(Value::as_str))
            .find(|text| !text.trim().is_empty());
        return found.map_or_else(|| UNKNOWN_ERROR.to_string(), str::to_string);
    }

    let text = match body {
        Value::String(s) => s.trim(),
        _ => raw_body.trim(),
    };
    if text.is_empty() {
        UNKNOWN_ERROR.to_string()
    } else {
        text.to_string()
    }
}

fn parse_retry_after(headers: &HeaderMap) -> Option<Duration> {
    headers
        .get("retry-after")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<u64>().ok())
        .map(Duration::from_secs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;

    fn no_headers() -> HeaderMap {
        HeaderMap::new()
    }

    #[test]
    fn test_not_found_message() {
        let err = classify(404, r#"{"message":"Card not found"}"#, &no_headers());
        assert_eq!(err.kind, ErrorKind::NotFound);
        assert_eq!(err.status, Some(404));
        assert_eq!(err.message, "HTTP 404: Card not found");
        assert_eq!(err.to_string(), "HTTP 404: Card not found");
        assert_eq!(err.body["message"], "Card not found");
    }

    #[test]
    fn test_rate_limit_reads_retry_after() {
        let mut headers = HeaderMap::new();
        headers.insert("retry-after", HeaderValue::from_static("30"));

        let err = classify(429, "{}", &headers);
        assert_eq!(err.kind, ErrorKind::RateLimit);
        assert_eq!(err.retry_after, Some(Duration::from_secs(30)));
    }

    #[test]
    fn test_rate_limit_without_header() {
        let err = classify(429, "", &no_headers());
        assert_eq!(err.kind, ErrorKind::RateLimit);
        assert_eq!(err.retry_after, None);
        assert_eq!(err.message, "HTTP 429: Unknown error");
    }

    #[test]
    fn test_forbidden_rate_limit_heuristic() {
        let err = classify(403, r#"{"message":"Rate limit hit"}"#, &no_headers());
        assert_eq!(err.kind, ErrorKind::RateLimit);

        let err = classify(403, r#"{"message":"Access denied to board"}"#, &no_headers());
        assert_eq!(err.kind, ErrorKind::Forbidden);

        let err = classify(403, "", &no_headers());
        assert_eq!(err.kind, ErrorKind::Forbidden);
    }

    #[test]
    fn test_retry_after_only_for_rate_limit() {
        let mut headers = HeaderMap::new();
        headers.insert("retry-after", HeaderValue::from_static("12"));

        let err = classify(500, "boom", &headers);
        assert_eq!(err.kind, ErrorKind::Server);
        assert_eq!(err.retry_after, None);
    }

    #[test]
    fn test_status_mapping() {
        let cases = [
            (400, ErrorKind::Validation),
            (422, ErrorKind::Validation),
            (401, ErrorKind::Authentication),
            (409, ErrorKind::Client),
            (502, ErrorKind::Server),
            (302, ErrorKind::Api),
        ];
        for (status, expected) in cases {
            assert_eq!(classify(status, "", &no_headers()).kind, expected, "status {status}");
        }
    }

    #[test]
    fn test_message_field_precedence() {
        let err = classify(
            400,
            r#"{"error_description":"third","error":"second"}"#,
            &no_headers(),
        );
        assert_eq!(err.message, "HTTP 400: second");

        let err = classify(400, r#"{"error_description":"only"}"#, &no_headers());
        assert_eq!(err.message, "HTTP 400: only");
    }

    #[test]
    fn test_object_body_without_message_is_unknown() {
        assert_eq!(classify(429, "{}", &no_headers()).message, "HTTP 429: Unknown error");

        let err = classify(400, r#"{"message":"","code":7}"#, &no_headers());
        assert_eq!(err.message, "HTTP 400: Unknown error");
        assert_eq!(err.body["code"], 7);
    }

    #[test]
    fn test_unparseable_body_kept_as_string() {
        let err = classify(502, "<html>Bad Gateway</html>", &no_headers());
        assert_eq!(err.body, Value::String("<html>Bad Gateway</html>".to_string()));
        assert_eq!(err.message, "HTTP 502: <html>Bad Gateway</html>");
    }

    #[test]
    fn test_kind_families() {
        assert!(ErrorKind::RateLimit.is_client_error());
        assert!(ErrorKind::Client.is_client_error());
        assert!(!ErrorKind::Server.is_client_error());
        assert!(ErrorKind::Server.is_server_error());
        assert!(!ErrorKind::Api.is_client_error());
    }

    #[test]
    fn test_message_without_status() {
        let err = ApiError::new(ErrorKind::Api, None, "offline", Value::Null);
        assert_eq!(err.message, "offline");
    }

    #[test]
    fn test_superthread_error_accessors() {
        let err: SuperthreadError = classify(404, "", &no_headers()).into();
        assert!(err.is_not_found());
        assert_eq!(err.status(), Some(404));
        assert!(!err.is_rate_limited());

        let local = SuperthreadError::PathValidation("card_id".to_string());
        assert_eq!(local.status(), None);
        assert_eq!(local.kind(), None);
    }
}
