//! Client behaviour over an in-memory transport.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use reqwest::Method;
use serde_json::json;
use superthread::{
    Board, ConvertOptions, Result, SuperthreadClient, Transport, TransportRequest,
    TransportResponse, VariantKind,
};

/// Replays one canned response and records every request.
#[derive(Debug, Default)]
struct Recorder {
    response: Mutex<Option<TransportResponse>>,
    sent: Mutex<Vec<TransportRequest>>,
}

impl Recorder {
    fn replying(status: u16, body: &str) -> Arc<Self> {
        Arc::new(Self {
            response: Mutex::new(Some(TransportResponse::new(status, body))),
            sent: Mutex::default(),
        })
    }

    fn sent(&self) -> Vec<TransportRequest> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for Recorder {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse> {
        self.sent.lock().unwrap().push(request);
        Ok(self
            .response
            .lock()
            .unwrap()
            .take()
            .unwrap_or_else(|| TransportResponse::new(500, "no response queued")))
    }
}

#[tokio::test]
async fn test_request_shape_reaches_transport() {
    let recorder = Recorder::replying(200, r#"{"list": {"type": "list", "id": "l_1"}}"#);
    let client = SuperthreadClient::with_transport(recorder.clone());

    let params = superthread::ListParams {
        color: Some("red".to_string()),
        ..Default::default()
    };
    let list = client
        .boards()
        .update_list("ws_1", "l_1", &params)
        .await
        .unwrap();
    assert_eq!(list.id(), Some("l_1"));

    let sent = recorder.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].method, Method::PATCH);
    assert_eq!(sent[0].path, "ws_1/lists/l_1");
    assert_eq!(sent[0].body, Some(json!({"color": "red"})));
    assert!(sent[0].query.is_none());
}

#[tokio::test]
async fn test_default_workspace_and_path_failure() {
    let recorder = Recorder::replying(200, "{}");
    let client =
        SuperthreadClient::with_transport(recorder.clone()).with_default_workspace("ws_default");

    let ws = client.workspace(None).unwrap();
    assert_eq!(ws, "ws_default");

    let err = client.notes().find(&ws, "!!!").await.unwrap_err();
    assert!(matches!(err, superthread::SuperthreadError::PathValidation(_)));
    assert!(recorder.sent().is_empty());
}

#[tokio::test]
async fn test_request_converted_with_options() {
    let recorder = Recorder::replying(
        200,
        r#"{"data": {"boards": [{"id": "b_1"}, {"id": "b_2"}], "count": 2}}"#,
    );
    let client = SuperthreadClient::with_transport(recorder);

    let options = ConvertOptions::collection("boards", Some(VariantKind::Board)).unwrap_key("data");
    let boards: Vec<Board> = client
        .request_converted(TransportRequest::get("ws_1/boards"), &options)
        .await
        .unwrap()
        .into_variant_list()
        .unwrap();

    assert_eq!(boards.len(), 2);
    assert_eq!(boards[1].id(), Some("b_2"));
}

#[tokio::test]
async fn test_unparseable_success_is_generic_success() {
    let recorder = Recorder::replying(200, "<html>ok</html>");
    let client = SuperthreadClient::with_transport(recorder);

    let body = client
        .request(TransportRequest::get("ws_1/boards"))
        .await
        .unwrap();
    assert_eq!(body, json!({"success": true}));
}

#[tokio::test]
async fn test_empty_list_has_no_success_marker() {
    let recorder = Recorder::replying(200, r#"{"notes": []}"#);
    let client = SuperthreadClient::with_transport(recorder);

    let notes = client.notes().list("ws_1").await.unwrap();
    assert!(notes.is_empty());
    assert!(notes.meta("success").is_none());
}

#[tokio::test]
async fn test_no_content_collection_is_empty() {
    let recorder = Recorder::replying(204, "");
    let client = SuperthreadClient::with_transport(recorder);

    let notes = client.notes().list("ws_1").await.unwrap();
    assert!(notes.is_empty());
    assert_eq!(notes.to_value(), json!([]));
    assert_eq!(notes.meta("success"), Some(&json!(true)));
    assert_eq!(notes.items_key(), Some("notes"));
}
