use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::Result;
use crate::object::DynamicObject;
use crate::objects::{Collection, Note};
use crate::path::{safe_id, workspace_path};
use crate::registry::VariantKind;
use crate::transport::TransportRequest;

super::resource! {
    Notes
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct NoteParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Notes<'_> {
    pub async fn list(&self, workspace_id: &str) -> Result<Collection> {
        let path = workspace_path(workspace_id, "/notes")?;
        self.client
            .request_collection(TransportRequest::get(path), Some("notes"), Some(VariantKind::Note))
            .await
    }

    pub async fn find(&self, workspace_id: &str, note_id: &str) -> Result<Note> {
        let path = note_path(workspace_id, note_id)?;
        self.client
            .request_object(TransportRequest::get(path), Some("note"))
            .await
    }

    pub async fn create(&self, workspace_id: &str, title: &str, params: &NoteParams) -> Result<Note> {
        let mut body = params.clone();
        body.title = Some(title.to_string());
        let request = TransportRequest::post(workspace_path(workspace_id, "/notes")?).json(&body)?;
        self.client.request_object(request, Some("note")).await
    }

    pub async fn destroy(&self, workspace_id: &str, note_id: &str) -> Result<DynamicObject> {
        let path = note_path(workspace_id, note_id)?;
        self.client.request_success(TransportRequest::delete(path)).await
    }
}

fn note_path(workspace_id: &str, note_id: &str) -> Result<String> {
    let note = safe_id("note_id", note_id)?;
    workspace_path(workspace_id, &format!("/notes/{note}"))
}
