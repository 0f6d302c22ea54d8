//! HTTP client types for Trello API communication.
//!
//! This module provides the transport layer underneath the API wrappers.
//!
//! # Overview
//!
//! - [`Transport`]: The trait the API wrappers send requests through
//! - [`HttpClient`]: The reqwest-backed [`Transport`] implementation
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A response from the API, body still undecoded
//! - [`HttpMethod`]: Supported HTTP methods
//! - [`DataType`]: Content types for request bodies
//! - [`RateLimit`]: Rate limit state reported by Trello
//!
//! # Example
//!
//! ```rust,ignore
//! use trello_api::{ApiKey, AccessToken, TrelloConfig};
//! use trello_api::clients::{HttpClient, HttpMethod, HttpRequest, Transport};
//!
//! let config = TrelloConfig::builder()
//!     .api_key(ApiKey::new("key")?)
//!     .token(AccessToken::new("token")?)
//!     .build()?;
//! let client = HttpClient::new(&config)?;
//!
//! let request = HttpRequest::builder(HttpMethod::Get, "members/me")
//!     .query_param("fields", "username")
//!     .build()?;
//! let response = client.request(request).await?;
//! ```
//!
//! # Retry Behavior
//!
//! Requests are attempted once by default. With `tries` greater than one in
//! the configuration, 429 responses are retried after `Retry-After` seconds
//! (or 1 second) and 500 responses after 1 second, until the attempts run out.

mod errors;
mod http_client;
mod http_request;
mod http_response;
mod transport;

pub use errors::{
    HttpError, HttpResponseError, InvalidHttpRequestError, MaxHttpRetriesExceededError,
};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{
    encode_pairs, DataType, Headers, HttpMethod, HttpRequest, HttpRequestBuilder, Params,
};
pub use http_response::{HttpResponse, RateLimit};
pub use transport::Transport;
