use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::Result;
use crate::object::DynamicObject;
use crate::objects::{Collection, Comment};
use crate::path::{safe_id, workspace_path};
use crate::registry::VariantKind;
use crate::transport::TransportRequest;

super::resource! {
    /// Comments and threaded replies.
    Comments
}

/// Fields for comments and replies.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CommentParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_id: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CommentParams {
    /// A comment on a card.
    pub fn on_card(card_id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            card_id: Some(card_id.into()),
            ..Self::default()
        }
    }
}

impl Comments<'_> {
    pub async fn create(&self, workspace_id: &str, params: &CommentParams) -> Result<Comment> {
        let request = TransportRequest::post(workspace_path(workspace_id, "/comments")?).json(params)?;
        self.client.request_object(request, Some("comment")).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn find(&self, workspace_id: &str, comment_id: &str) -> Result<Comment> {
        let path = comment_path(workspace_id, comment_id)?;
        self.client
            .request_object(TransportRequest::get(path), Some("comment"))
            .await
    }

    pub async fn update(&self, workspace_id: &str, comment_id: &str, params: &CommentParams) -> Result<Comment> {
        let request = TransportRequest::patch(comment_path(workspace_id, comment_id)?).json(params)?;
        self.client.request_object(request, Some("comment")).await
    }

    pub async fn destroy(&self, workspace_id: &str, comment_id: &str) -> Result<DynamicObject> {
        let path = comment_path(workspace_id, comment_id)?;
        self.client.request_success(TransportRequest::delete(path)).await
    }

    pub async fn reply(&self, workspace_id: &str, comment_id: &str, params: &CommentParams) -> Result<Comment> {
        let path = format!("{}/comments", comment_path(workspace_id, comment_id)?);
        let request = TransportRequest::post(path).json(params)?;
        self.client.request_object(request, Some("comment")).await
    }

    pub async fn replies(&self, workspace_id: &str, comment_id: &str) -> Result<Collection> {
        let path = format!("{}/comments", comment_path(workspace_id, comment_id)?);
        self.client
            .request_collection(TransportRequest::get(path), Some("comments"), Some(VariantKind::Comment))
            .await
    }

    pub async fn update_reply(
        &self,
        workspace_id: &str,
        comment_id: &str,
        reply_id: &str,
        params: &CommentParams,
    ) -> Result<Comment> {
        let path = reply_path(workspace_id, comment_id, reply_id)?;
        let request = TransportRequest::patch(path).json(params)?;
        self.client.request_object(request, Some("comment")).await
    }

    pub async fn delete_reply(&self, workspace_id: &str, comment_id: &str, reply_id: &str) -> Result<DynamicObject> {
        let path = reply_path(workspace_id, comment_id, reply_id)?;
        self.client.request_success(TransportRequest::delete(path)).await
    }
}

fn comment_path(workspace_id: &str, comment_id: &str) -> Result<String> {
    let comment = safe_id("comment_id", comment_id)?;
    workspace_path(workspace_id, &format!("/comments/{comment}"))
}

fn reply_path(workspace_id: &str, comment_id: &str, reply_id: &str) -> Result<String> {
    let reply = safe_id("reply_id", reply_id)?;
    Ok(format!("{}/comments/{reply}", comment_path(workspace_id, comment_id)?))
}
