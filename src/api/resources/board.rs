//! Boards and the lists nested under them.

use serde_json::{json, Value};

use crate::api::{validate_filters, validate_params, Api, ApiError, ApiResource, Selection};
use crate::clients::{Params, Transport};

/// The `boards` resource.
#[derive(Debug, Clone, Copy)]
pub struct Board;

impl ApiResource for Board {
    const NAME: &'static str = "Board";
    const PATH: &'static str = "boards";
    const FIELDS: &'static [&'static str] = &[
        "id",
        "name",
        "desc",
        "descData",
        "closed",
        "idOrganization",
        "pinned",
        "url",
        "shortUrl",
        "prefs",
        "labelNames",
        "starred",
        "limits",
        "memberships",
    ];
}

/// Wrapper for the `boards` resource.
pub type Boards<'c, T> = Api<'c, Board, T>;

/// Lists of a board (`boards/#id#/lists`).
#[derive(Debug, Clone, Copy)]
pub struct BoardList;

impl ApiResource for BoardList {
    const NAME: &'static str = "BoardList";
    const PATH: &'static str = "boards/#id#/lists";
    const FIELDS: &'static [&'static str] = &[];
}

/// Wrapper for the lists nested under a board.
pub type BoardLists<'c, T> = Api<'c, BoardList, T>;

/// Filters accepted by [`BoardLists::all`].
pub const LIST_FILTERS: &[&str] = &["none", "open", "closed", "all"];

impl<'c, T: Transport> Api<'c, Board, T> {
    /// Fetches a board.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the request fails.
    pub async fn show(&self, id: &str, params: Params) -> Result<Value, ApiError> {
        self.get(&self.item_path(id), params, None).await
    }

    /// Creates a board. `params` must contain `name`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MissingArgument`] without a `name`, or
    /// [`ApiError::Http`] if the request fails.
    pub async fn create(&self, params: Params) -> Result<Value, ApiError> {
        validate_params(&["name"], &params)?;
        self.post(&self.get_path(None), params, None).await
    }

    /// Updates a board.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the request fails.
    pub async fn update(&self, id: &str, params: Params) -> Result<Value, ApiError> {
        self.put(&self.item_path(id), params, None).await
    }

    /// Renames a board.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the request fails.
    pub async fn set_name(&self, id: &str, name: &str) -> Result<Value, ApiError> {
        self.set_value(id, "name", json!(name)).await
    }

    /// Closes or reopens a board.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the request fails.
    pub async fn set_closed(&self, id: &str, closed: bool) -> Result<Value, ApiError> {
        self.set_value(id, "closed", json!(closed)).await
    }

    /// Returns a wrapper for the lists of a board, sharing this client.
    #[must_use]
    pub fn lists(&self) -> BoardLists<'c, T> {
        Api::new(self.client())
    }

    async fn set_value(&self, id: &str, field: &str, value: Value) -> Result<Value, ApiError> {
        let mut params = Params::new();
        params.insert("value".to_string(), value);
        self.put(&format!("{}/{field}", self.item_path(id)), params, None)
            .await
    }
}

impl<'c, T: Transport> Api<'c, BoardList, T> {
    /// Lists the lists of a board matching `filter` (one of [`LIST_FILTERS`]).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidArgument`] for an unknown filter, or
    /// [`ApiError::Http`] if the request fails.
    pub async fn all(
        &self,
        board_id: &str,
        filter: impl Into<Selection>,
    ) -> Result<Value, ApiError> {
        let filters = validate_filters(LIST_FILTERS, filter)?;

        let mut params = Params::new();
        params.insert("filter".to_string(), Value::String(filters.join(",")));
        self.get(&self.item_path(board_id), params, None).await
    }

    /// Creates a list on a board. `params` must contain `name`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MissingArgument`] without a `name`, or
    /// [`ApiError::Http`] if the request fails.
    pub async fn create(&self, board_id: &str, params: Params) -> Result<Value, ApiError> {
        validate_params(&["name"], &params)?;
        self.post(&self.item_path(board_id), params, None).await
    }
}
