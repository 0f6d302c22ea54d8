//! Integration tests for the board, list, card and member wrappers.
//!
//! Each test checks the request a wrapper produces and that invalid input is
//! rejected before anything reaches the transport.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use serde_json::{json, Value};
use trello_api::api::resources::{Boards, CardLists, Cards, Members, NewCard};
use trello_api::clients::{
    DataType, HttpError, HttpMethod, HttpRequest, HttpResponse, HttpResponseError, Params,
    Transport,
};
use trello_api::ApiError;

/// Records every request and answers with queued `(status, body)` pairs.
#[derive(Default)]
struct RecordingTransport {
    requests: Mutex<Vec<HttpRequest>>,
    responses: Mutex<VecDeque<(u16, String)>>,
}

impl RecordingTransport {
    fn reply(self, code: u16, body: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back((code, body.to_string()));
        self
    }

    fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    fn last(&self) -> HttpRequest {
        self.requests().pop().unwrap()
    }
}

impl Transport for RecordingTransport {
    async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        let path = request.path.clone();
        self.requests.lock().unwrap().push(request);

        let (code, body) = self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or((200, "{}".to_string()));

        if (200..300).contains(&code) {
            Ok(HttpResponse::new(code, HashMap::new(), body))
        } else {
            Err(HttpError::Response(HttpResponseError {
                code,
                message: body,
                path,
            }))
        }
    }
}

fn params(value: Value) -> Params {
    value.as_object().cloned().unwrap()
}

// ============================================================================
// Boards
// ============================================================================

#[tokio::test]
async fn test_board_show_and_field() {
    let transport = RecordingTransport::default()
        .reply(200, r#"{"id":"b1","name":"Roadmap"}"#)
        .reply(200, r#"{"_value":"Roadmap"}"#);
    let boards = Boards::new(&transport);

    let board = boards.show("b1", Params::new()).await.unwrap();
    let name = boards.get_field("b1", "name").await.unwrap();

    assert_eq!(board["name"], "Roadmap");
    assert_eq!(name, json!("Roadmap"));
    let paths: Vec<String> = transport.requests().into_iter().map(|r| r.path).collect();
    assert_eq!(paths, ["boards/b1", "boards/b1/name"]);
}

#[tokio::test]
async fn test_board_create_requires_name() {
    let transport = RecordingTransport::default();
    let boards = Boards::new(&transport);

    let error = boards
        .create(params(json!({"desc": "No name"})))
        .await
        .unwrap_err();

    assert_eq!(error.to_string(), "Required parameter \"name\" is missing!");
    assert!(error.is_validation());
    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn test_board_create_posts_form() {
    let transport = RecordingTransport::default().reply(200, r#"{"id":"b2"}"#);
    let boards = Boards::new(&transport);

    boards
        .create(params(json!({"name": "Roadmap", "defaultLists": false})))
        .await
        .unwrap();

    let request = transport.last();
    assert_eq!(request.http_method, HttpMethod::Post);
    assert_eq!(request.path, "boards");
    assert_eq!(
        request.body,
        Some(json!({"name": "Roadmap", "defaultLists": "false"}))
    );
}

#[tokio::test]
async fn test_board_setters_put_value() {
    let transport = RecordingTransport::default();
    let boards = Boards::new(&transport);

    boards.set_name("b1", "Renamed").await.unwrap();
    boards.set_closed("b1", true).await.unwrap();

    let requests = transport.requests();
    assert_eq!(requests[0].http_method, HttpMethod::Put);
    assert_eq!(requests[0].path, "boards/b1/name");
    assert_eq!(requests[0].body, Some(json!({"value": "Renamed"})));
    assert_eq!(requests[1].path, "boards/b1/closed");
    assert_eq!(requests[1].body, Some(json!({"value": "true"})));
}

#[tokio::test]
async fn test_board_lists_filter() {
    let transport = RecordingTransport::default().reply(200, r#"[{"id":"l1"}]"#);
    let boards = Boards::new(&transport);

    let lists = boards.lists().all("b1", "open").await.unwrap();

    assert_eq!(lists, json!([{"id": "l1"}]));
    let request = transport.last();
    assert_eq!(request.path, "boards/b1/lists");
    assert_eq!(request.query, Some(params(json!({"filter": "open"}))));
}

#[tokio::test]
async fn test_board_lists_rejects_unknown_filter() {
    let transport = RecordingTransport::default();
    let boards = Boards::new(&transport);

    let error = boards.lists().all("b1", "archived").await.unwrap_err();

    assert_eq!(
        error.to_string(),
        "Parameter \"filter\" must be in [none, open, closed, all], \"archived\" given."
    );
    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn test_board_lists_create() {
    let transport = RecordingTransport::default();
    let lists = Boards::new(&transport).lists();

    assert!(lists.create("b1", Params::new()).await.is_err());
    lists
        .create("b1", params(json!({"name": "Backlog", "pos": "top"})))
        .await
        .unwrap();

    let requests = transport.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].http_method, HttpMethod::Post);
    assert_eq!(requests[0].path, "boards/b1/lists");
}

// ============================================================================
// Lists
// ============================================================================

#[tokio::test]
async fn test_list_create_requires_name_and_board() {
    let transport = RecordingTransport::default();
    let lists = CardLists::new(&transport);

    let error = lists
        .create(params(json!({"name": "Backlog"})))
        .await
        .unwrap_err();

    assert!(matches!(
        error,
        ApiError::MissingArgument { ref keys, any_of: false } if keys == &["idBoard".to_string()]
    ));
    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn test_list_update_requires_one_field() {
    let transport = RecordingTransport::default();
    let lists = CardLists::new(&transport);

    let error = lists
        .update("l1", params(json!({"color": "red"})))
        .await
        .unwrap_err();
    assert_eq!(
        error.to_string(),
        "At least one of the parameters (name, closed, idBoard, pos, subscribed) is required!"
    );

    lists
        .update("l1", params(json!({"closed": true})))
        .await
        .unwrap();
    let request = transport.last();
    assert_eq!(request.path, "lists/l1");
    assert_eq!(request.body, Some(json!({"closed": "true"})));
}

#[tokio::test]
async fn test_list_archive_all_cards() {
    let transport = RecordingTransport::default();

    CardLists::new(&transport)
        .archive_all_cards("l1")
        .await
        .unwrap();

    let request = transport.last();
    assert_eq!(request.http_method, HttpMethod::Post);
    assert_eq!(request.path, "lists/l1/archiveAllCards");
    assert_eq!(request.body, Some(json!({})));
}

#[tokio::test]
async fn test_list_accessor() {
    let transport = RecordingTransport::default().reply(200, r#"{"_value":"b1"}"#);

    let board_id = CardLists::new(&transport)
        .call("getIdBoard", "l1")
        .await
        .unwrap();

    assert_eq!(board_id, json!("b1"));
    assert_eq!(transport.last().path, "lists/l1/idBoard");
}

// ============================================================================
// Cards
// ============================================================================

#[tokio::test]
async fn test_card_create_requires_list() {
    let transport = RecordingTransport::default();

    let error = Cards::new(&transport)
        .create(params(json!({"name": "Buy milk"})))
        .await
        .unwrap_err();

    assert_eq!(error.to_string(), "Required parameter \"idList\" is missing!");
    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn test_card_create_from_typed_params() {
    let transport = RecordingTransport::default().reply(200, r#"{"id":"c1"}"#);
    let card = NewCard {
        id_labels: vec!["lb1".to_string(), "lb2".to_string()],
        ..NewCard::in_list("l1").name("Buy milk")
    };

    let created = Cards::new(&transport).create_card(&card).await.unwrap();

    assert_eq!(created["id"], "c1");
    let request = transport.last();
    assert_eq!(request.path, "cards");
    assert_eq!(
        request.body,
        Some(json!({
            "idList": "l1",
            "name": "Buy milk",
            "idLabels/0": "lb1",
            "idLabels/1": "lb2"
        }))
    );
}

#[tokio::test]
async fn test_card_update_remove_and_description() {
    let transport = RecordingTransport::default();
    let cards = Cards::new(&transport);

    cards
        .update("c1", params(json!({"due": null, "closed": false})))
        .await
        .unwrap();
    cards.set_description("c1", "Two litres").await.unwrap();
    cards.remove("c1").await.unwrap();

    let requests = transport.requests();
    assert_eq!(requests[0].http_method, HttpMethod::Put);
    assert_eq!(
        requests[0].body,
        Some(json!({"due": null, "closed": "false"}))
    );
    assert_eq!(requests[1].path, "cards/c1/desc");
    assert_eq!(requests[1].body, Some(json!({"value": "Two litres"})));
    assert_eq!(requests[2].http_method, HttpMethod::Delete);
    assert_eq!(requests[2].path, "cards/c1");
}

#[tokio::test]
async fn test_card_attachment_is_json() {
    let transport = RecordingTransport::default();
    let attachment = trello_api::api::resources::NewAttachment {
        url: "https://example.com/a.png".to_string(),
        name: None,
        mime_type: Some("image/png".to_string()),
    };

    Cards::new(&transport)
        .add_attachment("c1", &attachment)
        .await
        .unwrap();

    let request = transport.last();
    assert_eq!(request.path, "cards/c1/attachments");
    assert_eq!(request.body_type, Some(DataType::Json));
    assert_eq!(
        request.body,
        Some(json!({"url": "https://example.com/a.png", "mimeType": "image/png"}))
    );
}

#[tokio::test]
async fn test_card_file_attachment_is_multipart() {
    let transport = RecordingTransport::default();

    Cards::new(&transport)
        .attach_file("c1", "notes.txt", "Meeting notes", "text/plain")
        .await
        .unwrap();

    let request = transport.last();
    assert_eq!(request.path, "cards/c1/attachments");
    assert_eq!(request.body_type, Some(DataType::Multipart));
    assert_eq!(
        request.body,
        Some(json!({
            "name": "notes.txt",
            "file": {
                "filename": "notes.txt",
                "mimeType": "text/plain",
                "content": "Meeting notes"
            }
        }))
    );
}

#[tokio::test]
async fn test_card_field_whitelist() {
    let transport = RecordingTransport::default();
    let cards = Cards::new(&transport);

    let error = cards.get_field("c1", "color").await.unwrap_err();

    assert!(matches!(error, ApiError::InvalidArgument { ref name, .. } if name == "field"));
    assert!(transport.requests().is_empty());
}

// ============================================================================
// Members
// ============================================================================

#[tokio::test]
async fn test_member_boards_joins_filters() {
    let transport = RecordingTransport::default().reply(200, "[]");

    Members::new(&transport)
        .boards("me", ["open", "starred"])
        .await
        .unwrap();

    let request = transport.last();
    assert_eq!(request.path, "members/me/boards");
    assert_eq!(request.query, Some(params(json!({"filter": "open,starred"}))));
}

#[tokio::test]
async fn test_member_boards_rejects_unknown_filter() {
    let transport = RecordingTransport::default();

    let result = Members::new(&transport)
        .boards("me", vec!["open", "mine"])
        .await;

    assert!(matches!(
        result,
        Err(ApiError::InvalidArgument { ref value, .. }) if value == "mine"
    ));
    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn test_member_exists() {
    let transport = RecordingTransport::default()
        .reply(200, "")
        .reply(404, "member not found")
        .reply(401, "invalid token");
    let members = Members::new(&transport);

    assert!(members.exists("alice").await.unwrap());
    assert!(!members.exists("nobody").await.unwrap());
    assert!(matches!(
        members.exists("alice").await,
        Err(ApiError::Http(ref e)) if e.status() == Some(401)
    ));
    assert!(transport
        .requests()
        .iter()
        .all(|r| r.http_method == HttpMethod::Head));
}
