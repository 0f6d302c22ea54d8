//! The resource client base shared by every API wrapper.
//!
//! [`Api`] holds a borrowed [`Transport`] and a path template, and provides
//! the request verbs, parameter normalization, response decoding and the
//! single-field accessor. Resource types are zero-sized markers implementing
//! [`ApiResource`]; their operations are inherent methods on
//! `Api<'_, Marker, T>` (see [`resources`]).
//!
//! # Example
//!
//! ```rust,ignore
//! use trello_api::api::resources::Boards;
//! use trello_api::clients::HttpClient;
//!
//! let client = HttpClient::new(&config)?;
//! let boards = Boards::new(&client);
//!
//! let name = boards.get_field("4d5ea62fd76aa1136000000c", "name").await?;
//! let lists = boards.lists().all("4d5ea62fd76aa1136000000c", "open").await?;
//! ```

mod errors;
mod params;
mod path;
pub mod resources;
mod response;
mod validation;

pub use errors::ApiError;
pub use params::{normalize_params, stringify_booleans, to_params};
pub use path::{build_path, field_path, item_path, ID_PLACEHOLDER};
pub use response::{get_content, unwrap_value, VALUE_KEY};
pub use validation::{
    validate_at_least_one_of, validate_fields, validate_filters, validate_params, Selection,
};

use std::fmt;
use std::marker::PhantomData;

use serde_json::Value;

use self::params::drop_null_ref;
use crate::clients::{DataType, Headers, HttpResponse, Params, Transport};

/// Static description of a remote resource type.
///
/// # Example
///
/// ```rust
/// use trello_api::api::ApiResource;
///
/// pub struct Label;
///
/// impl ApiResource for Label {
///     const NAME: &'static str = "Label";
///     const PATH: &'static str = "labels";
///     const FIELDS: &'static [&'static str] = &["id", "idBoard", "name", "color"];
/// }
/// ```
pub trait ApiResource {
    /// Type name used in error messages (e.g., "Board").
    const NAME: &'static str;

    /// Default path template, with at most one `#id#` placeholder.
    const PATH: &'static str;

    /// Fields readable through [`Api::get_field`], in declaration order.
    const FIELDS: &'static [&'static str];
}

/// A resource wrapper bound to a transport.
///
/// The transport is borrowed, so one client can back any number of wrappers.
/// All validation happens before the transport is called; transport errors
/// are returned unchanged inside [`ApiError::Http`].
pub struct Api<'c, R, T> {
    client: &'c T,
    path: String,
    resource: PhantomData<fn() -> R>,
}

impl<'c, R: ApiResource, T> Api<'c, R, T> {
    /// Creates a wrapper using the resource's default path template.
    #[must_use]
    pub fn new(client: &'c T) -> Self {
        Self::with_path(client, R::PATH)
    }

    /// Creates a wrapper with a custom path template.
    #[must_use]
    pub fn with_path(client: &'c T, path: impl Into<String>) -> Self {
        Self {
            client,
            path: path.into(),
            resource: PhantomData,
        }
    }

    /// Returns the transport this wrapper sends requests through.
    #[must_use]
    pub const fn client(&self) -> &'c T {
        self.client
    }

    /// Returns the resource type name.
    #[must_use]
    pub fn resource_name(&self) -> &'static str {
        R::NAME
    }

    /// Returns the fields readable through [`get_field`](Self::get_field).
    #[must_use]
    pub fn fields() -> &'static [&'static str] {
        R::FIELDS
    }

    /// Returns the path template with `id` substituted for the placeholder,
    /// or the raw template when `id` is `None`.
    #[must_use]
    pub fn get_path(&self, id: Option<&str>) -> String {
        build_path(&self.path, id)
    }

    /// Returns the path of one resource: the template with the percent-encoded
    /// `id` substituted, or appended when the template has no placeholder.
    #[must_use]
    pub fn item_path(&self, id: &str) -> String {
        item_path(&self.path, id)
    }
}

impl<'c, R: ApiResource, T: Transport> Api<'c, R, T> {
    /// Fetches a single field of a resource.
    ///
    /// Sends one GET to `<path>/<id>/<field>` (segments percent-encoded) and
    /// returns the `_value` entry of the response when present, otherwise
    /// the whole decoded body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidArgument`] if `field` is not one of
    /// [`ApiResource::FIELDS`]; no request is sent in that case.
    pub async fn get_field(&self, id: &str, field: &str) -> Result<Value, ApiError> {
        if !R::FIELDS.contains(&field) {
            return Err(ApiError::invalid_argument("field", field, R::FIELDS));
        }

        tracing::debug!(resource = R::NAME, field, "Fetching resource field");
        let content = self
            .get(&field_path(&self.path, id, field), Params::new(), None)
            .await?;
        Ok(unwrap_value(content))
    }

    /// Dispatches a `get<Field>` accessor by name.
    ///
    /// `getIdBoard` maps to the field `idBoard`: the suffix must start with an
    /// upper-case letter and contain only letters. The call is forwarded to
    /// [`get_field`](Self::get_field) when the field is whitelisted.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NoSuchMethod`] when the name does not map to a
    /// whitelisted field.
    pub async fn call(&self, method: &str, id: &str) -> Result<Value, ApiError> {
        match accessor_field(method) {
            Some(field) if R::FIELDS.contains(&field.as_str()) => {
                self.get_field(id, &field).await
            }
            _ => Err(ApiError::NoSuchMethod {
                method: method.to_string(),
                resource: R::NAME,
            }),
        }
    }

    /// Sends a GET request with `params` in the query string and decodes the body.
    ///
    /// A null `ref` parameter is dropped.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the transport fails.
    pub async fn get(
        &self,
        path: &str,
        mut params: Params,
        headers: Option<Headers>,
    ) -> Result<Value, ApiError> {
        drop_null_ref(&mut params);
        let response = self.client.get(path, params, headers).await?;
        Ok(get_content(&response))
    }

    /// Sends a HEAD request and returns the raw response.
    ///
    /// A null `ref` parameter is dropped.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the transport fails.
    pub async fn head(
        &self,
        path: &str,
        mut params: Params,
        headers: Option<Headers>,
    ) -> Result<HttpResponse, ApiError> {
        drop_null_ref(&mut params);
        Ok(self.client.head(path, params, headers).await?)
    }

    /// Sends a POST request with normalized `params` as a form body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the transport fails.
    pub async fn post(
        &self,
        path: &str,
        params: Params,
        headers: Option<Headers>,
    ) -> Result<Value, ApiError> {
        let body = Value::Object(normalize_params(params));
        let response = self
            .client
            .post(path, body, DataType::Form, headers)
            .await?;
        Ok(get_content(&response))
    }

    /// Sends a POST request with a prepared body, skipping normalization.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the transport fails, including when the
    /// body does not fit `body_type`.
    pub async fn post_raw(
        &self,
        path: &str,
        body: Value,
        body_type: DataType,
        headers: Option<Headers>,
    ) -> Result<Value, ApiError> {
        let response = self.client.post(path, body, body_type, headers).await?;
        Ok(get_content(&response))
    }

    /// Sends a PATCH request with normalized `params` as a form body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the transport fails.
    pub async fn patch(
        &self,
        path: &str,
        params: Params,
        headers: Option<Headers>,
    ) -> Result<Value, ApiError> {
        let body = Value::Object(normalize_params(params));
        let response = self
            .client
            .patch(path, body, DataType::Form, headers)
            .await?;
        Ok(get_content(&response))
    }

    /// Sends a PUT request with normalized `params` as a form body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the transport fails.
    pub async fn put(
        &self,
        path: &str,
        params: Params,
        headers: Option<Headers>,
    ) -> Result<Value, ApiError> {
        // Top-level booleans are stringified before normalization as well
        let body = Value::Object(normalize_params(stringify_booleans(params)));
        let response = self
            .client
            .put(path, body, DataType::Form, headers)
            .await?;
        Ok(get_content(&response))
    }

    /// Sends a DELETE request with normalized `params` as a form body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the transport fails.
    pub async fn delete(
        &self,
        path: &str,
        params: Params,
        headers: Option<Headers>,
    ) -> Result<Value, ApiError> {
        let body = Value::Object(normalize_params(params));
        let response = self
            .client
            .delete(path, body, DataType::Form, headers)
            .await?;
        Ok(get_content(&response))
    }
}

impl<R, T> Clone for Api<'_, R, T> {
    fn clone(&self) -> Self {
        Self {
            client: self.client,
            path: self.path.clone(),
            resource: PhantomData,
        }
    }
}

impl<R: ApiResource, T> fmt::Debug for Api<'_, R, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Api")
            .field("resource", &R::NAME)
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

/// Maps `getFieldName` to `fieldName`.
fn accessor_field(method: &str) -> Option<String> {
    let suffix = method.strip_prefix("get")?;
    let mut chars = suffix.chars();
    let first = chars.next()?;
    let rest = chars.as_str();

    if !first.is_ascii_uppercase() || !rest.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    Some(format!("{}{rest}", first.to_ascii_lowercase()))
}
