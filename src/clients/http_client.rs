//! HTTP client implementation for the Trello API.
//!
//! This module provides [`HttpClient`], the production [`Transport`]. It
//! handles URL construction, credential attachment, header merging, body
//! encoding, response parsing, and optional retries for 429/500 responses.

use std::collections::HashMap;
use std::time::Duration;

use reqwest::multipart::{Form, Part};
use serde_json::Value;

use crate::clients::errors::{HttpError, HttpResponseError, MaxHttpRetriesExceededError};
use crate::clients::http_request::{encode_pairs, scalar_text, DataType, HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::clients::transport::Transport;
use crate::config::TrelloConfig;

/// Library version, reported in the `User-Agent` header.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Fixed delay between retries when no `Retry-After` header is present.
const RETRY_WAIT_TIME: u64 = 1;

/// Async HTTP client for the Trello REST API.
///
/// Every request is sent to `<base_url>/<api_version>/<path>` with the API
/// key and member token attached as the `key` and `token` query parameters.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`; share one instance between any number of
/// API wrappers.
///
/// # Example
///
/// ```rust
/// use trello_api::{ApiKey, AccessToken, TrelloConfig};
/// use trello_api::clients::HttpClient;
///
/// let config = TrelloConfig::builder()
///     .api_key(ApiKey::new("key").unwrap())
///     .token(AccessToken::new("token").unwrap())
///     .build()
///     .unwrap();
///
/// let client = HttpClient::new(&config).unwrap();
/// assert_eq!(client.base_uri(), "https://api.trello.com/1");
/// ```
#[derive(Debug)]
pub struct HttpClient {
    client: reqwest::Client,
    /// Base URI including the version segment (e.g., `https://api.trello.com/1`).
    base_uri: String,
    /// Credentials appended to every query string.
    credentials: Vec<(String, String)>,
    default_headers: HashMap<String, String>,
    tries: u32,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the underlying reqwest client cannot
    /// be created (e.g., TLS initialization failure).
    pub fn new(config: &TrelloConfig) -> Result<Self, HttpError> {
        let base_uri = format!("{}/{}", config.base_url(), config.api_version());

        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}Trello API Library v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        let mut credentials = vec![("key".to_string(), config.api_key().as_ref().to_string())];
        match config.token() {
            Some(token) => credentials.push(("token".to_string(), token.as_ref().to_string())),
            None => tracing::warn!(
                "No member token configured; only public resources will be readable"
            ),
        }

        let mut builder = reqwest::Client::builder().use_rustls_tls();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            base_uri,
            credentials,
            default_headers,
            tries: config.tries(),
        })
    }

    /// Returns the base URI, including the version segment.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns how many times a request is attempted on 429/500 responses.
    #[must_use]
    pub const fn tries(&self) -> u32 {
        self.tries
    }

    /// Sends an HTTP request to the API.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - Network error occurs (`Network`)
    /// - Non-2xx response received (`Response`)
    /// - Retries are configured and exhausted (`MaxRetries`)
    pub async fn send(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = format!("{}/{}", self.base_uri, request.path.trim_start_matches('/'));

        let mut headers = self.default_headers.clone();
        if let Some(extra) = &request.extra_headers {
            for (key, value) in extra {
                headers.insert(key.clone(), value.clone());
            }
        }

        let mut query = self.credentials.clone();
        if let Some(params) = &request.query {
            query.extend(encode_pairs(params));
        }

        let mut tries: u32 = 0;
        loop {
            tries += 1;
            tracing::debug!(
                method = %request.http_method,
                path = %request.path,
                attempt = tries,
                "Sending Trello API request"
            );

            let mut req_builder = match request.http_method {
                HttpMethod::Get => self.client.get(&url),
                HttpMethod::Head => self.client.head(&url),
                HttpMethod::Post => self.client.post(&url),
                HttpMethod::Patch => self.client.patch(&url),
                HttpMethod::Put => self.client.put(&url),
                HttpMethod::Delete => self.client.delete(&url),
            };

            for (key, value) in &headers {
                req_builder = req_builder.header(key, value);
            }
            req_builder = req_builder.query(&query);

            if let (Some(body), Some(body_type)) = (&request.body, request.body_type) {
                req_builder = match body_type {
                    DataType::Form => {
                        let pairs = body
                            .as_object()
                            .map(encode_pairs)
                            .unwrap_or_default();
                        req_builder.form(&pairs)
                    }
                    DataType::Json => req_builder
                        .header("Content-Type", body_type.as_content_type())
                        .body(body.to_string()),
                    DataType::Text => req_builder
                        .header("Content-Type", body_type.as_content_type())
                        .body(body.as_str().unwrap_or_default().to_string()),
                    DataType::Multipart => req_builder.multipart(Self::multipart_form(body)?),
                };
            }

            let res = req_builder.send().await?;

            let code = res.status().as_u16();
            let res_headers = Self::parse_response_headers(res.headers());
            let body_text = res.text().await?;
            let response = HttpResponse::new(code, res_headers, body_text);

            if let Some(limit) = response.token_rate_limit {
                if limit.remaining == 0 {
                    tracing::warn!(path = %request.path, "Trello token rate limit exhausted");
                }
            }

            if response.is_ok() {
                return Ok(response);
            }

            let should_retry = code == 429 || code == 500;
            if !should_retry || self.tries == 1 {
                return Err(HttpError::Response(HttpResponseError {
                    code,
                    message: response.body,
                    path: request.path.clone(),
                }));
            }

            if tries >= self.tries {
                return Err(HttpError::MaxRetries(MaxHttpRetriesExceededError {
                    code,
                    tries: self.tries,
                    message: response.body,
                }));
            }

            let delay = Self::calculate_retry_delay(&response, code);
            tracing::warn!(
                path = %request.path,
                status = code,
                delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
                "Retrying Trello API request"
            );
            tokio::time::sleep(delay).await;
        }
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }

    /// Calculates the retry delay based on response and status code.
    ///
    /// A `Retry-After` value that is negative, not finite or too large for a
    /// [`Duration`] falls back to the fixed delay.
    fn calculate_retry_delay(response: &HttpResponse, status: u16) -> Duration {
        // 429 honours Retry-After; 500 always uses the fixed delay
        if status == 429 {
            if let Some(delay) = response
                .retry_request_after
                .and_then(|secs| Duration::try_from_secs_f64(secs).ok())
            {
                return delay;
            }
        }
        Duration::from_secs(RETRY_WAIT_TIME)
    }

    /// Builds a multipart form from an object body.
    fn multipart_form(body: &Value) -> Result<Form, HttpError> {
        let mut form = Form::new();
        let Some(entries) = body.as_object() else {
            return Ok(form);
        };

        for (name, value) in entries {
            form = match value {
                Value::Object(file) => {
                    let content = file
                        .get("content")
                        .and_then(Value::as_str)
                        .unwrap_or_default();
                    let mut part = Part::text(content.to_string());
                    if let Some(filename) = file.get("filename").and_then(Value::as_str) {
                        part = part.file_name(filename.to_string());
                    }
                    if let Some(mime) = file.get("mimeType").and_then(Value::as_str) {
                        part = part.mime_str(mime)?;
                    }
                    form.part(name.clone(), part)
                }
                other => match scalar_text(other) {
                    Some(text) => form.text(name.clone(), text),
                    None => form,
                },
            };
        }
        Ok(form)
    }
}

impl Transport for HttpClient {
    async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        self.send(request).await
    }
}
