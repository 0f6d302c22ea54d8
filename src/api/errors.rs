//! Error types for API wrapper operations.
//!
//! Validation errors ([`ApiError::InvalidArgument`], [`ApiError::MissingArgument`],
//! [`ApiError::NoSuchMethod`]) are raised before any request is sent. Transport
//! failures are passed through untouched as [`ApiError::Http`].
//!
//! # Example
//!
//! ```rust,ignore
//! use trello_api::api::ApiError;
//!
//! match boards.get_field("4d5ea62fd76aa1136000000c", "name").await {
//!     Ok(name) => println!("{name}"),
//!     Err(ApiError::InvalidArgument { value, .. }) => println!("no field {value}"),
//!     Err(ApiError::Http(e)) => println!("request failed: {e}"),
//!     Err(e) => println!("other error: {e}"),
//! }
//! ```

use thiserror::Error;

use crate::clients::HttpError;

/// Error type for API wrapper operations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A supplied value is outside its allowed domain.
    #[error("Parameter \"{name}\" must be in [{}], \"{value}\" given.", .allowed.join(", "))]
    InvalidArgument {
        /// The parameter that was checked (e.g., `field`, `filter`).
        name: String,
        /// The offending value.
        value: String,
        /// The values that would have been accepted.
        allowed: Vec<String>,
    },

    /// A required parameter, or every member of a required group, is absent.
    #[error("{}", describe_missing(.keys, .any_of))]
    MissingArgument {
        /// The missing key, or every candidate key when `any_of` is set.
        keys: Vec<String>,
        /// `true` when at least one of `keys` was required.
        any_of: bool,
    },

    /// Dynamic accessor dispatch found no matching method.
    #[error("There is no method named {method} in {resource}.")]
    NoSuchMethod {
        /// The requested method name.
        method: String,
        /// The resource type the call was made on.
        resource: &'static str,
    },

    /// Parameters could not be serialized.
    #[error("Failed to serialize parameters: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The transport failed.
    #[error(transparent)]
    Http(#[from] HttpError),
}

impl ApiError {
    pub(crate) fn invalid_argument<S: AsRef<str>>(name: &str, value: &str, allowed: &[S]) -> Self {
        Self::InvalidArgument {
            name: name.to_string(),
            value: value.to_string(),
            allowed: allowed.iter().map(|s| s.as_ref().to_string()).collect(),
        }
    }

    /// Returns `true` if the error was raised by local validation, before any request.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidArgument { .. } | Self::MissingArgument { .. } | Self::NoSuchMethod { .. }
        )
    }
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn describe_missing(keys: &[String], any_of: &bool) -> String {
    if *any_of {
        format!(
            "At least one of the parameters ({}) is required!",
            keys.join(", ")
        )
    } else {
        format!("Required parameter \"{}\" is missing!", keys.join(", "))
    }
}
