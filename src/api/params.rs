//! Parameter normalization for request bodies.
//!
//! Trello's form encoding has no notion of nested structures. Nested values
//! are sent as slash-delimited keys (`prefs/permissionLevel`) and booleans as
//! the literal strings `"true"` and `"false"`.

use serde::Serialize;
use serde_json::Value;

use crate::clients::Params;

/// Rewrites parameters into the flat shape the form encoding expects.
///
/// - top-level booleans become `"true"` / `"false"`
/// - a top-level object `name -> {sub: v, ..}` is replaced by `name/sub -> v`
///   entries, with boolean `v` stringified the same way
/// - a top-level array is expanded the same way, keyed by element index
/// - every other value passes through unchanged
///
/// Expanded entries are appended after the untouched ones, in expansion order.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use trello_api::api::normalize_params;
///
/// let params = json!({"a": true, "b": {"c": false, "d": 1}});
/// let normalized = normalize_params(params.as_object().unwrap().clone());
///
/// assert_eq!(
///     serde_json::Value::Object(normalized),
///     json!({"a": "true", "b/c": "false", "b/d": 1})
/// );
/// ```
#[must_use]
pub fn normalize_params(params: Params) -> Params {
    let mut normalized = Params::new();
    let mut expanded = Vec::new();

    for (name, value) in params {
        match value {
            Value::Object(nested) => {
                for (sub_name, sub_value) in nested {
                    expanded.push((format!("{name}/{sub_name}"), stringify_bool(sub_value)));
                }
            }
            Value::Array(items) => {
                for (index, item) in items.into_iter().enumerate() {
                    expanded.push((format!("{name}/{index}"), stringify_bool(item)));
                }
            }
            other => {
                normalized.insert(name, stringify_bool(other));
            }
        }
    }

    for (key, value) in expanded {
        normalized.insert(key, value);
    }
    normalized
}

/// Replaces every top-level boolean with its string form.
///
/// Nested values are left alone; [`normalize_params`] handles those.
#[must_use]
pub fn stringify_booleans(mut params: Params) -> Params {
    for value in params.values_mut() {
        if let Value::Bool(b) = value {
            *value = Value::String(b.to_string());
        }
    }
    params
}

/// Drops a `ref` parameter whose value is null.
pub(crate) fn drop_null_ref(params: &mut Params) {
    if params.get("ref").is_some_and(Value::is_null) {
        params.remove("ref");
    }
}

/// Serializes a parameter struct into [`Params`].
///
/// `None` fields marked `skip_serializing_if` are omitted as usual; unit
/// values produce an empty map.
///
/// # Errors
///
/// Returns an error if serialization fails or the value does not serialize
/// to a map.
pub fn to_params<S: Serialize + ?Sized>(value: &S) -> Result<Params, serde_json::Error> {
    match serde_json::to_value(value)? {
        Value::Object(map) => Ok(map),
        Value::Null => Ok(Params::new()),
        other => Err(serde::ser::Error::custom(format!(
            "parameters must serialize to a map, got {other}"
        ))),
    }
}

fn stringify_bool(value: Value) -> Value {
    match value {
        Value::Bool(b) => Value::String(b.to_string()),
        other => other,
    }
}
