//! HTTP response types for the Trello API client.
//!
//! This module provides the [`HttpResponse`] type and the [`RateLimit`]
//! information Trello reports in response headers.

use std::collections::HashMap;

/// Rate limit state parsed from the `X-Rate-Limit-Api-*` headers.
///
/// Trello reports one window per API key and one per token:
///
/// ```text
/// x-rate-limit-api-token-interval-ms: 10000
/// x-rate-limit-api-token-max: 100
/// x-rate-limit-api-token-remaining: 97
/// ```
///
/// # Example
///
/// ```rust
/// use std::collections::HashMap;
/// use trello_api::clients::RateLimit;
///
/// let mut headers = HashMap::new();
/// headers.insert("x-rate-limit-api-token-max".to_string(), vec!["100".to_string()]);
/// headers.insert("x-rate-limit-api-token-remaining".to_string(), vec!["97".to_string()]);
///
/// let limit = RateLimit::from_headers(&headers, "token").unwrap();
/// assert_eq!(limit.max, 100);
/// assert_eq!(limit.remaining, 97);
/// assert_eq!(limit.interval_ms, None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RateLimit {
    /// Requests allowed in the window.
    pub max: u32,
    /// Requests left in the current window.
    pub remaining: u32,
    /// Window length in milliseconds, when reported.
    pub interval_ms: Option<u64>,
}

impl RateLimit {
    /// Parses the rate limit headers for `scope` (`"token"` or `"key"`).
    ///
    /// Returns `None` unless both the `max` and `remaining` headers are
    /// present and numeric. Header names must already be lower-cased.
    #[must_use]
    pub fn from_headers(headers: &HashMap<String, Vec<String>>, scope: &str) -> Option<Self> {
        let header = |suffix: &str| {
            headers
                .get(&format!("x-rate-limit-api-{scope}-{suffix}"))
                .and_then(|values| values.first())
        };

        let max = header("max")?.trim().parse().ok()?;
        let remaining = header("remaining")?.trim().parse().ok()?;
        let interval_ms = header("interval-ms").and_then(|v| v.trim().parse().ok());

        Some(Self {
            max,
            remaining,
            interval_ms,
        })
    }
}

/// An HTTP response from the remote API.
///
/// The body is kept as text; decoding is left to
/// [`get_content`](crate::api::get_content) so that HEAD responses and
/// non-JSON bodies can be handled by the caller.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, keyed by lower-cased name (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The raw response body.
    pub body: String,
    /// Per-token rate limit information.
    pub token_rate_limit: Option<RateLimit>,
    /// Per-key rate limit information.
    pub key_rate_limit: Option<RateLimit>,
    /// Seconds to wait before retrying (from `Retry-After` header).
    pub retry_request_after: Option<f64>,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`, parsing rate limit and `Retry-After` headers.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: impl Into<String>) -> Self {
        let token_rate_limit = RateLimit::from_headers(&headers, "token");
        let key_rate_limit = RateLimit::from_headers(&headers, "key");

        let retry_request_after = headers
            .get("retry-after")
            .and_then(|values| values.first())
            .and_then(|value| value.trim().parse::<f64>().ok());

        Self {
            code,
            headers,
            body: body.into(),
            token_rate_limit,
            key_rate_limit,
            retry_request_after,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the first value of the given header, if present.
    ///
    /// The lookup is case-insensitive.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the `Content-Type` header value, if present.
    #[must_use]
    pub fn content_type(&self) -> Option<&str> {
        self.header("content-type")
    }
}
