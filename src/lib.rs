//! # Trello API Rust Client
//!
//! A Rust client for the Trello REST API: a reusable resource base layer on
//! top of an async HTTP transport.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`TrelloConfig`] and [`TrelloConfigBuilder`]
//! - Validated newtypes for credentials and the base URL
//! - An async HTTP client with retry logic and rate limit tracking
//! - A [`Transport`] trait so the resource layer can run over any client
//! - The [`Api`] base wrapper: request verbs, parameter normalization,
//!   response decoding, declarative validation and single-field accessors
//! - Wrappers for boards, lists, cards and members in [`api::resources`]
//!
//! ## Quick Start
//!
//! ```rust
//! use trello_api::{AccessToken, ApiKey, TrelloConfig};
//!
//! let config = TrelloConfig::builder()
//!     .api_key(ApiKey::new("your-api-key").unwrap())
//!     .token(AccessToken::new("your-token").unwrap())
//!     .tries(3)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.tries(), 3);
//! ```
//!
//! ## Making API Requests
//!
//! ```rust,ignore
//! use trello_api::api::resources::{Boards, Cards, NewCard};
//! use trello_api::HttpClient;
//!
//! let client = HttpClient::new(&config)?;
//!
//! let boards = Boards::new(&client);
//! let board = boards.show("4d5ea62fd76aa1136000000c", Params::new()).await?;
//! let name = boards.get_field("4d5ea62fd76aa1136000000c", "name").await?;
//! let open_lists = boards.lists().all("4d5ea62fd76aa1136000000c", "open").await?;
//!
//! let cards = Cards::new(&client);
//! cards.create_card(&NewCard::in_list("5abbe4b7ddc1b351ef961414").name("Buy milk")).await?;
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: Newtypes validate on construction and wrappers
//!   validate parameters before any request is sent
//! - **Thread-safe**: All public types are `Send + Sync`
//! - **Async-first**: Designed for use with the Tokio runtime

pub mod api;
pub mod clients;
pub mod config;
pub mod error;

// Re-export public types at crate root for convenience
pub use config::{AccessToken, ApiKey, BaseUrl, TrelloConfig, TrelloConfigBuilder};
pub use error::ConfigError;

pub use api::{Api, ApiError, ApiResource};

// Re-export HTTP client types
pub use clients::{
    DataType, Headers, HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder,
    HttpResponse, HttpResponseError, InvalidHttpRequestError, MaxHttpRetriesExceededError,
    Params, RateLimit, Transport,
};
