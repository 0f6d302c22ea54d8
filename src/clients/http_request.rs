//! HTTP request types for the Trello API client.
//!
//! This module provides the [`HttpRequest`] type and its builder for
//! constructing requests to the remote API.

use std::collections::HashMap;
use std::fmt;

use serde_json::Value;

use crate::clients::errors::InvalidHttpRequestError;

/// Request parameters: an insertion-ordered map of key to JSON value.
pub type Params = serde_json::Map<String, Value>;

/// Extra request headers.
pub type Headers = HashMap<String, String>;

/// HTTP methods supported by the client.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP HEAD method for probing resources without a body.
    Head,
    /// HTTP POST method for creating resources.
    Post,
    /// HTTP PATCH method for partial updates.
    Patch,
    /// HTTP PUT method for updating resources.
    Put,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl HttpMethod {
    /// Returns `true` if requests with this method must carry a body.
    #[must_use]
    pub const fn requires_body(&self) -> bool {
        matches!(self, Self::Post | Self::Patch | Self::Put)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "get"),
            Self::Head => write!(f, "head"),
            Self::Post => write!(f, "post"),
            Self::Patch => write!(f, "patch"),
            Self::Put => write!(f, "put"),
            Self::Delete => write!(f, "delete"),
        }
    }
}

/// Content type for HTTP request bodies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataType {
    /// URL-encoded form (`application/x-www-form-urlencoded`). The body must be an object.
    Form,
    /// JSON content type (`application/json`).
    Json,
    /// Plain text (`text/plain`). The body must be a string.
    Text,
    /// Multipart form (`multipart/form-data`). The body must be an object.
    ///
    /// Scalar entries become text parts. An object entry with a string
    /// `content` becomes a file part, named by its optional `filename` and
    /// typed by its optional `mimeType`.
    Multipart,
}

impl DataType {
    /// Returns the MIME type string for this data type.
    #[must_use]
    pub const fn as_content_type(&self) -> &'static str {
        match self {
            Self::Form => "application/x-www-form-urlencoded",
            Self::Json => "application/json",
            Self::Text => "text/plain",
            Self::Multipart => "multipart/form-data",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_content_type())
    }
}

/// An HTTP request to be sent through a [`Transport`](crate::clients::Transport).
///
/// # Example
///
/// ```rust
/// use trello_api::clients::{HttpRequest, HttpMethod, DataType};
/// use serde_json::json;
///
/// let get_request = HttpRequest::builder(HttpMethod::Get, "boards/4d5ea62fd76aa1136000000c")
///     .query_param("fields", "name,desc")
///     .build()
///     .unwrap();
///
/// let post_request = HttpRequest::builder(HttpMethod::Post, "cards")
///     .body(json!({"idList": "abc", "name": "Card"}))
///     .body_type(DataType::Form)
///     .build()
///     .unwrap();
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub http_method: HttpMethod,
    /// The path (relative to the versioned base URL) for this request.
    pub path: String,
    /// The request body, if any.
    pub body: Option<Value>,
    /// The content type of the body.
    pub body_type: Option<DataType>,
    /// Query parameters to append to the URL.
    pub query: Option<Params>,
    /// Additional headers to include in the request.
    pub extra_headers: Option<Headers>,
}

impl HttpRequest {
    /// Creates a new builder for constructing an `HttpRequest`.
    #[must_use]
    pub fn builder(method: HttpMethod, path: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, path)
    }

    /// Validates the request, ensuring it meets all requirements.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if:
    /// - `body` is `Some` but `body_type` is `None`
    /// - `http_method` is `Post`, `Patch` or `Put` but `body` is `None`
    /// - `http_method` is `Head` and a body is present
    /// - a form or multipart body is not an object, or a text body is not a string
    pub fn verify(&self) -> Result<(), InvalidHttpRequestError> {
        if self.body.is_some() && self.body_type.is_none() {
            return Err(InvalidHttpRequestError::MissingBodyType);
        }

        if self.http_method.requires_body() && self.body.is_none() {
            return Err(InvalidHttpRequestError::MissingBody {
                method: self.http_method.to_string(),
            });
        }

        if self.http_method == HttpMethod::Head && self.body.is_some() {
            return Err(InvalidHttpRequestError::UnexpectedBody {
                method: self.http_method.to_string(),
            });
        }

        match (&self.body, self.body_type) {
            (Some(body), Some(DataType::Form)) if !body.is_object() => {
                Err(InvalidHttpRequestError::MalformedBody {
                    body_type: DataType::Form.to_string(),
                    reason: "form bodies must be objects",
                })
            }
            (Some(body), Some(DataType::Multipart)) if !body.is_object() => {
                Err(InvalidHttpRequestError::MalformedBody {
                    body_type: DataType::Multipart.to_string(),
                    reason: "multipart bodies must be objects",
                })
            }
            (Some(body), Some(DataType::Text)) if !body.is_string() => {
                Err(InvalidHttpRequestError::MalformedBody {
                    body_type: DataType::Text.to_string(),
                    reason: "text bodies must be strings",
                })
            }
            _ => Ok(()),
        }
    }
}

/// Builder for constructing [`HttpRequest`] instances.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    http_method: HttpMethod,
    path: String,
    body: Option<Value>,
    body_type: Option<DataType>,
    query: Option<Params>,
    extra_headers: Option<Headers>,
}

impl HttpRequestBuilder {
    fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            http_method: method,
            path: path.into(),
            body: None,
            body_type: None,
            query: None,
            extra_headers: None,
        }
    }

    /// Sets the request body.
    ///
    /// When setting a body, you must also set the body type via [`body_type`](Self::body_type).
    #[must_use]
    pub fn body(mut self, body: impl Into<Value>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Sets the content type of the request body.
    #[must_use]
    pub const fn body_type(mut self, body_type: DataType) -> Self {
        self.body_type = Some(body_type);
        self
    }

    /// Sets all query parameters at once. An empty map clears the query.
    #[must_use]
    pub fn query(mut self, query: Params) -> Self {
        self.query = if query.is_empty() { None } else { Some(query) };
        self
    }

    /// Adds a single query parameter.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.query
            .get_or_insert_with(Params::new)
            .insert(key.into(), value.into());
        self
    }

    /// Sets all extra headers at once.
    #[must_use]
    pub fn extra_headers(mut self, headers: Headers) -> Self {
        self.extra_headers = Some(headers);
        self
    }

    /// Adds a single extra header.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_headers
            .get_or_insert_with(Headers::new)
            .insert(key.into(), value.into());
        self
    }

    /// Builds the [`HttpRequest`], validating it in the process.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if the request fails validation.
    pub fn build(self) -> Result<HttpRequest, InvalidHttpRequestError> {
        let request = HttpRequest {
            http_method: self.http_method,
            path: self.path,
            body: self.body,
            body_type: self.body_type,
            query: self.query,
            extra_headers: self.extra_headers,
        };
        request.verify()?;
        Ok(request)
    }
}

/// Encodes parameters as string pairs for a query string or form body.
///
/// Booleans become `"true"`/`"false"`, arrays are comma-joined, nested objects
/// are expanded to `parent/child` keys and nulls are skipped.
#[must_use]
pub fn encode_pairs(params: &Params) -> Vec<(String, String)> {
    let mut pairs = Vec::with_capacity(params.len());
    for (key, value) in params {
        match value {
            Value::Object(nested) => {
                for (sub_key, sub_value) in nested {
                    if let Some(text) = scalar_text(sub_value) {
                        pairs.push((format!("{key}/{sub_key}"), text));
                    }
                }
            }
            other => {
                if let Some(text) = scalar_text(other) {
                    pairs.push((key.clone(), text));
                }
            }
        }
    }
    pairs
}

pub(crate) fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) => Some(s.clone()),
        Value::Array(items) => Some(
            items
                .iter()
                .filter_map(scalar_text)
                .collect::<Vec<_>>()
                .join(","),
        ),
        Value::Object(_) => Some(value.to_string()),
    }
}
