//! Declarative parameter checks run by API wrappers before dispatch.
//!
//! Every helper fails with an [`ApiError`] without touching the network, so a
//! rejected call never sends a partial request.

use crate::api::ApiError;
use crate::clients::Params;

/// A single value or a list of values, as accepted by [`validate_filters`]
/// and [`validate_fields`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Selection {
    /// One value; normalized to a one-element list.
    One(String),
    /// Several values.
    Many(Vec<String>),
}

impl Selection {
    fn into_vec(self) -> Vec<String> {
        match self {
            Self::One(value) => vec![value],
            Self::Many(values) => values,
        }
    }
}

impl From<&str> for Selection {
    fn from(value: &str) -> Self {
        Self::One(value.to_string())
    }
}

impl From<String> for Selection {
    fn from(value: String) -> Self {
        Self::One(value)
    }
}

impl From<Vec<String>> for Selection {
    fn from(values: Vec<String>) -> Self {
        Self::Many(values)
    }
}

impl From<Vec<&str>> for Selection {
    fn from(values: Vec<&str>) -> Self {
        Self::Many(values.into_iter().map(String::from).collect())
    }
}

impl From<&[&str]> for Selection {
    fn from(values: &[&str]) -> Self {
        Self::Many(values.iter().map(|v| (*v).to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Selection {
    fn from(values: [&str; N]) -> Self {
        Self::Many(values.iter().map(|v| (*v).to_string()).collect())
    }
}

/// Checks that every `required` key is present in `params`.
///
/// # Errors
///
/// Returns [`ApiError::MissingArgument`] naming the first missing key.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use trello_api::api::{validate_params, ApiError};
///
/// let params = json!({"x": 1}).as_object().unwrap().clone();
///
/// assert!(validate_params(&["x"], &params).is_ok());
/// assert!(matches!(
///     validate_params(&["x", "y"], &params),
///     Err(ApiError::MissingArgument { keys, .. }) if keys == vec!["y".to_string()]
/// ));
/// ```
pub fn validate_params(required: &[&str], params: &Params) -> Result<(), ApiError> {
    match required.iter().find(|key| !params.contains_key(**key)) {
        Some(missing) => Err(ApiError::MissingArgument {
            keys: vec![(*missing).to_string()],
            any_of: false,
        }),
        None => Ok(()),
    }
}

/// Checks filter values against the allowed set.
///
/// A single value is coerced into a one-element list.
///
/// # Errors
///
/// Returns [`ApiError::InvalidArgument`] listing the allowed set and the
/// first value outside it.
///
/// # Example
///
/// ```rust
/// use trello_api::api::validate_filters;
///
/// let allowed = ["open", "closed"];
/// assert_eq!(validate_filters(&allowed, "open").unwrap(), vec!["open"]);
/// assert!(validate_filters(&allowed, "archived").is_err());
/// ```
pub fn validate_filters(
    allowed: &[&str],
    filters: impl Into<Selection>,
) -> Result<Vec<String>, ApiError> {
    validate_allowed(allowed, filters.into(), "filter")
}

/// Checks field-selection values against the allowed set.
///
/// Same contract as [`validate_filters`].
///
/// # Errors
///
/// Returns [`ApiError::InvalidArgument`] listing the allowed set and the
/// first value outside it.
pub fn validate_fields(
    allowed: &[&str],
    fields: impl Into<Selection>,
) -> Result<Vec<String>, ApiError> {
    validate_allowed(allowed, fields.into(), "fields")
}

/// Checks that at least one of `candidates` is present in `params`.
///
/// # Errors
///
/// Returns [`ApiError::MissingArgument`] listing every candidate when none is present.
pub fn validate_at_least_one_of(candidates: &[&str], params: &Params) -> Result<bool, ApiError> {
    if candidates.iter().any(|key| params.contains_key(*key)) {
        return Ok(true);
    }
    Err(ApiError::MissingArgument {
        keys: candidates.iter().map(|k| (*k).to_string()).collect(),
        any_of: true,
    })
}

fn validate_allowed(
    allowed: &[&str],
    actual: Selection,
    name: &str,
) -> Result<Vec<String>, ApiError> {
    let values = actual.into_vec();
    if let Some(bad) = values.iter().find(|v| !allowed.contains(&v.as_str())) {
        return Err(ApiError::invalid_argument(name, bad, allowed));
    }
    Ok(values)
}
