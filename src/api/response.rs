//! Response body decoding.

use serde_json::Value;

use crate::clients::HttpResponse;

/// Key Trello wraps scalar field values in (`{"_value": "My Board"}`).
pub const VALUE_KEY: &str = "_value";

/// Decodes a response body.
///
/// JSON bodies are parsed; anything else (including an empty body) is
/// returned as a JSON string holding the raw text.
///
/// # Example
///
/// ```rust
/// use std::collections::HashMap;
/// use serde_json::json;
/// use trello_api::api::get_content;
/// use trello_api::clients::HttpResponse;
///
/// let json = HttpResponse::new(200, HashMap::new(), r#"{"id":"b1"}"#);
/// assert_eq!(get_content(&json), json!({"id": "b1"}));
///
/// let text = HttpResponse::new(200, HashMap::new(), "ok");
/// assert_eq!(get_content(&text), json!("ok"));
/// ```
#[must_use]
pub fn get_content(response: &HttpResponse) -> Value {
    serde_json::from_str(&response.body).unwrap_or_else(|_| Value::String(response.body.clone()))
}

/// Returns the non-null `_value` entry of an object, or the value itself.
#[must_use]
pub fn unwrap_value(content: Value) -> Value {
    match content {
        Value::Object(mut map) if map.get(VALUE_KEY).is_some_and(|v| !v.is_null()) => {
            map.remove(VALUE_KEY).unwrap_or_default()
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashMap;

    #[test]
    fn test_get_content_decodes_json() {
        let response = HttpResponse::new(200, HashMap::new(), r#"[{"id":"l1"},{"id":"l2"}]"#);
        assert_eq!(get_content(&response), json!([{"id": "l1"}, {"id": "l2"}]));
    }

    #[test]
    fn test_get_content_returns_raw_text_when_not_json() {
        let response = HttpResponse::new(400, HashMap::new(), "invalid value for idList");
        assert_eq!(get_content(&response), json!("invalid value for idList"));
    }

    #[test]
    fn test_get_content_empty_body() {
        let response = HttpResponse::new(200, HashMap::new(), "");
        assert_eq!(get_content(&response), json!(""));
    }

    #[test]
    fn test_unwrap_value_extracts_wrapped_scalar() {
        assert_eq!(unwrap_value(json!({"_value": "Roadmap"})), json!("Roadmap"));
        assert_eq!(unwrap_value(json!({"_value": false})), json!(false));
    }

    #[test]
    fn test_unwrap_value_keeps_null_wrapper() {
        assert_eq!(
            unwrap_value(json!({"_value": null})),
            json!({"_value": null})
        );
    }

    #[test]
    fn test_unwrap_value_passes_through_other_values() {
        assert_eq!(
            unwrap_value(json!({"permissionLevel": "private"})),
            json!({"permissionLevel": "private"})
        );
        assert_eq!(unwrap_value(json!([1, 2])), json!([1, 2]));
    }
}
