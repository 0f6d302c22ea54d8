//! Lists (the columns of a board).

use serde_json::Value;

use crate::api::{validate_at_least_one_of, validate_params, Api, ApiError, ApiResource};
use crate::clients::{Params, Transport};

/// The `lists` resource.
#[derive(Debug, Clone, Copy)]
pub struct CardList;

impl ApiResource for CardList {
    const NAME: &'static str = "CardList";
    const PATH: &'static str = "lists";
    const FIELDS: &'static [&'static str] =
        &["id", "name", "closed", "idBoard", "pos", "subscribed"];
}

/// Wrapper for the `lists` resource.
pub type CardLists<'c, T> = Api<'c, CardList, T>;

const UPDATABLE: &[&str] = &["name", "closed", "idBoard", "pos", "subscribed"];

impl<T: Transport> Api<'_, CardList, T> {
    /// Fetches a list.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the request fails.
    pub async fn show(&self, id: &str, params: Params) -> Result<Value, ApiError> {
        self.get(&self.item_path(id), params, None).await
    }

    /// Creates a list. `params` must contain `name` and `idBoard`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MissingArgument`] naming the first missing key, or
    /// [`ApiError::Http`] if the request fails.
    pub async fn create(&self, params: Params) -> Result<Value, ApiError> {
        validate_params(&["name", "idBoard"], &params)?;
        self.post(&self.get_path(None), params, None).await
    }

    /// Updates a list. At least one of `name`, `closed`, `idBoard`, `pos` or
    /// `subscribed` must be set.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MissingArgument`] when none is set, or
    /// [`ApiError::Http`] if the request fails.
    pub async fn update(&self, id: &str, params: Params) -> Result<Value, ApiError> {
        validate_at_least_one_of(UPDATABLE, &params)?;
        self.put(&self.item_path(id), params, None).await
    }

    /// Archives every card in a list.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the request fails.
    pub async fn archive_all_cards(&self, id: &str) -> Result<Value, ApiError> {
        self.post(
            &format!("{}/archiveAllCards", self.item_path(id)),
            Params::new(),
            None,
        )
        .await
    }
}
