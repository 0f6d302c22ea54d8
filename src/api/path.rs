//! Resource path templates.
//!
//! A template is a request path with at most one `#id#` placeholder, e.g.
//! `boards` or `boards/#id#/lists`. Substitution is a plain textual replace.

/// Placeholder replaced by a resource identifier.
pub const ID_PLACEHOLDER: &str = "#id#";

/// Substitutes `id` into `template`, or returns the template unchanged when
/// no id is given.
///
/// # Example
///
/// ```rust
/// use trello_api::api::build_path;
///
/// assert_eq!(build_path("boards/#id#", Some("123")), "boards/123");
/// assert_eq!(build_path("boards/#id#", None), "boards/#id#");
/// ```
#[must_use]
pub fn build_path(template: &str, id: Option<&str>) -> String {
    match id {
        Some(id) => template.replacen(ID_PLACEHOLDER, id, 1),
        None => template.to_string(),
    }
}

/// Builds the path of a single resource.
///
/// The id is percent-encoded. A template with a placeholder receives the id
/// in place; a plain collection path gets it appended.
///
/// ```rust
/// use trello_api::api::item_path;
///
/// assert_eq!(item_path("cards/#id#", "42"), "cards/42");
/// assert_eq!(item_path("boards", "a b"), "boards/a%20b");
/// ```
#[must_use]
pub fn item_path(template: &str, id: &str) -> String {
    let id = urlencoding::encode(id);

    if template.contains(ID_PLACEHOLDER) {
        build_path(template, Some(&*id))
    } else {
        format!("{}/{id}", template.trim_end_matches('/'))
    }
}

/// Builds the path of a single field of a resource: the [`item_path`]
/// followed by the percent-encoded field name.
///
/// ```rust
/// use trello_api::api::field_path;
///
/// assert_eq!(field_path("cards/#id#", "42", "name"), "cards/42/name");
/// assert_eq!(field_path("boards", "a b", "desc"), "boards/a%20b/desc");
/// ```
#[must_use]
pub fn field_path(template: &str, id: &str, field: &str) -> String {
    format!("{}/{}", item_path(template, id), urlencoding::encode(field))
}
