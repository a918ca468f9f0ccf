use serde::Serialize;

use crate::error::Result;
use crate::object::DynamicObject;
use crate::objects::Tag;
use crate::path::{safe_id, workspace_path};
use crate::transport::TransportRequest;

super::resource! {
    /// Workspace tags. Listing lives on [`Cards::tags`](super::Cards::tags).
    Tags
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct TagParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Restrict the tag to one space.
    #[serde(rename = "project_id", skip_serializing_if = "Option::is_none")]
    pub space_id: Option<String>,
}

impl Tags<'_> {
    pub async fn create(&self, workspace_id: &str, name: &str, color: &str, space_id: Option<&str>) -> Result<Tag> {
        let body = TagParams {
            name: Some(name.to_string()),
            color: Some(color.to_string()),
            space_id: space_id.map(str::to_string),
        };
        let request = TransportRequest::post(workspace_path(workspace_id, "/tags")?).json(&body)?;
        self.client.request_object(request, Some("tag")).await
    }

    pub async fn update(&self, workspace_id: &str, tag_id: &str, params: &TagParams) -> Result<Tag> {
        let request = TransportRequest::patch(tag_path(workspace_id, tag_id)?).json(params)?;
        self.client.request_object(request, Some("tag")).await
    }

    pub async fn destroy(&self, workspace_id: &str, tag_id: &str) -> Result<DynamicObject> {
        let path = tag_path(workspace_id, tag_id)?;
        self.client.request_success(TransportRequest::delete(path)).await
    }
}

fn tag_path(workspace_id: &str, tag_id: &str) -> Result<String> {
    let tag = safe_id("tag_id", tag_id)?;
    workspace_path(workspace_id, &format!("/tags/{tag}"))
}
