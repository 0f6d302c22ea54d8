//! Cards.

use serde::Serialize;
use serde_json::{json, Value};

use crate::api::{to_params, validate_params, Api, ApiError, ApiResource};
use crate::clients::{DataType, Params, Transport};

/// The `cards` resource.
#[derive(Debug, Clone, Copy)]
pub struct Card;

impl ApiResource for Card {
    const NAME: &'static str = "Card";
    const PATH: &'static str = "cards";
    const FIELDS: &'static [&'static str] = &[
        "id",
        "badges",
        "checkItemStates",
        "closed",
        "dateLastActivity",
        "desc",
        "descData",
        "due",
        "email",
        "idBoard",
        "idChecklists",
        "idLabels",
        "idList",
        "idMembers",
        "idShort",
        "idAttachmentCover",
        "manualCoverAttachment",
        "labels",
        "name",
        "pos",
        "shortUrl",
        "url",
        "subscribed",
    ];
}

/// Wrapper for the `cards` resource.
pub type Cards<'c, T> = Api<'c, Card, T>;

/// Typed parameters for [`Cards::create_card`].
///
/// Unset optional fields are left out of the request.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCard {
    /// List the card is created in.
    pub id_list: String,
    /// Card name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Card description, in Markdown.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
    /// `top`, `bottom` or a positive number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pos: Option<Value>,
    /// Due date as an ISO 8601 timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due: Option<String>,
    /// Members assigned to the card.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub id_members: Vec<String>,
    /// Labels applied to the card.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub id_labels: Vec<String>,
}

impl NewCard {
    /// Creates parameters for a card in the given list.
    #[must_use]
    pub fn in_list(id_list: impl Into<String>) -> Self {
        Self {
            id_list: id_list.into(),
            ..Self::default()
        }
    }

    /// Sets the card name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the card description.
    #[must_use]
    pub fn desc(mut self, desc: impl Into<String>) -> Self {
        self.desc = Some(desc.into());
        self
    }
}

/// A URL attachment, sent as a JSON body.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAttachment {
    /// Address the attachment points to.
    pub url: String,
    /// Display name; Trello derives one from the URL when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// MIME type of the linked content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
}

impl<T: Transport> Api<'_, Card, T> {
    /// Fetches a card.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the request fails.
    pub async fn show(&self, id: &str, params: Params) -> Result<Value, ApiError> {
        self.get(&self.item_path(id), params, None).await
    }

    /// Creates a card. `params` must contain `idList`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MissingArgument`] without an `idList`, or
    /// [`ApiError::Http`] if the request fails.
    pub async fn create(&self, params: Params) -> Result<Value, ApiError> {
        validate_params(&["idList"], &params)?;
        self.post(&self.get_path(None), params, None).await
    }

    /// Creates a card from typed parameters.
    ///
    /// # Errors
    ///
    /// Same as [`create`](Self::create), plus [`ApiError::Serialization`].
    pub async fn create_card(&self, card: &NewCard) -> Result<Value, ApiError> {
        self.create(to_params(card)?).await
    }

    /// Updates a card.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the request fails.
    pub async fn update(&self, id: &str, params: Params) -> Result<Value, ApiError> {
        self.put(&self.item_path(id), params, None).await
    }

    /// Deletes a card.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the request fails.
    pub async fn remove(&self, id: &str) -> Result<Value, ApiError> {
        self.delete(&self.item_path(id), Params::new(), None).await
    }

    /// Replaces the description of a card.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the request fails.
    pub async fn set_description(&self, id: &str, desc: &str) -> Result<Value, ApiError> {
        let mut params = Params::new();
        params.insert("value".to_string(), json!(desc));
        self.put(&format!("{}/desc", self.item_path(id)), params, None)
            .await
    }

    /// Attaches a URL to a card.
    ///
    /// The attachment goes out as a JSON body, bypassing form normalization.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Serialization`] if the attachment cannot be
    /// encoded, or [`ApiError::Http`] if the request fails.
    pub async fn add_attachment(
        &self,
        id: &str,
        attachment: &NewAttachment,
    ) -> Result<Value, ApiError> {
        let body = serde_json::to_value(attachment)?;
        self.post_raw(
            &format!("{}/attachments", self.item_path(id)),
            body,
            DataType::Json,
            None,
        )
        .await
    }

    /// Uploads text content as a file attachment.
    ///
    /// The file goes out as a multipart body with the content in the `file` part.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the request fails, including when
    /// `mime_type` is not a valid MIME type.
    pub async fn attach_file(
        &self,
        id: &str,
        file_name: &str,
        content: &str,
        mime_type: &str,
    ) -> Result<Value, ApiError> {
        let body = json!({
            "name": file_name,
            "file": {
                "filename": file_name,
                "mimeType": mime_type,
                "content": content,
            },
        });
        self.post_raw(
            &format!("{}/attachments", self.item_path(id)),
            body,
            DataType::Multipart,
            None,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_card_serializes_set_fields_only() {
        let card = NewCard::in_list("l1").name("Buy milk");
        let params = to_params(&card).unwrap();

        assert_eq!(
            Value::Object(params),
            json!({"idList": "l1", "name": "Buy milk"})
        );
    }

    #[test]
    fn test_new_card_keeps_member_ids() {
        let card = NewCard {
            id_members: vec!["m1".to_string(), "m2".to_string()],
            ..NewCard::in_list("l1")
        };
        let params = to_params(&card).unwrap();

        assert_eq!(params["idMembers"], json!(["m1", "m2"]));
    }
}
