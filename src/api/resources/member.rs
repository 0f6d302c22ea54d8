//! Members.

use serde_json::Value;

use crate::api::{validate_filters, Api, ApiError, ApiResource, Selection};
use crate::clients::{Params, Transport};

/// The `members` resource.
#[derive(Debug, Clone, Copy)]
pub struct Member;

impl ApiResource for Member {
    const NAME: &'static str = "Member";
    const PATH: &'static str = "members";
    const FIELDS: &'static [&'static str] = &[
        "id",
        "avatarHash",
        "bio",
        "bioData",
        "confirmed",
        "fullName",
        "idPremOrgsAdmin",
        "initials",
        "memberType",
        "products",
        "status",
        "url",
        "username",
    ];
}

/// Wrapper for the `members` resource.
pub type Members<'c, T> = Api<'c, Member, T>;

/// Filters accepted by [`Members::boards`].
pub const BOARD_FILTERS: &[&str] = &[
    "all",
    "closed",
    "members",
    "open",
    "organization",
    "pinned",
    "public",
    "starred",
    "unpinned",
];

impl<T: Transport> Api<'_, Member, T> {
    /// Fetches a member. `me` refers to the token owner.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the request fails.
    pub async fn show(&self, id: &str, params: Params) -> Result<Value, ApiError> {
        self.get(&self.item_path(id), params, None).await
    }

    /// Lists the boards of a member matching every value of `filter`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidArgument`] for a value outside
    /// [`BOARD_FILTERS`], or [`ApiError::Http`] if the request fails.
    pub async fn boards(
        &self,
        member_id: &str,
        filter: impl Into<Selection>,
    ) -> Result<Value, ApiError> {
        let filters = validate_filters(BOARD_FILTERS, filter)?;

        let mut params = Params::new();
        params.insert("filter".to_string(), Value::String(filters.join(",")));
        self.get(
            &format!("{}/boards", self.item_path(member_id)),
            params,
            None,
        )
        .await
    }

    /// Returns whether a member exists, using a HEAD request.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] for any failure other than a 404.
    pub async fn exists(&self, id: &str) -> Result<bool, ApiError> {
        match self.head(&self.item_path(id), Params::new(), None).await {
            Ok(_) => Ok(true),
            Err(ApiError::Http(e)) if e.status() == Some(404) => Ok(false),
            Err(e) => Err(e),
        }
    }
}
