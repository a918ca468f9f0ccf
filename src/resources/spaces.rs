use serde::Serialize;
use serde_json::{json, Map, Value};

use crate::error::Result;
use crate::object::DynamicObject;
use crate::objects::{Collection, Space};
use crate::path::{safe_id, workspace_path};
use crate::registry::VariantKind;
use crate::transport::TransportRequest;

super::resource! {
    /// Spaces. The API calls them projects.
    Spaces
}

/// Fields for creating or updating a space.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SpaceParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<Value>,
    /// Any other fields the API accepts.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Spaces<'_> {
    pub async fn list(&self, workspace_id: &str) -> Result<Collection> {
        let path = workspace_path(workspace_id, "/projects")?;
        self.client
            .request_collection(TransportRequest::get(path), Some("projects"), Some(VariantKind::Space))
            .await
    }

    #[tracing::instrument(skip(self))]
    pub async fn find(&self, workspace_id: &str, space_id: &str) -> Result<Space> {
        let path = space_path(workspace_id, space_id)?;
        self.client
            .request_object(TransportRequest::get(path), Some("project"))
            .await
    }

    pub async fn create(&self, workspace_id: &str, title: &str, params: &SpaceParams) -> Result<Space> {
        let mut body = params.clone();
        body.title = Some(title.to_string());
        let request = TransportRequest::post(workspace_path(workspace_id, "/projects")?).json(&body)?;
        self.client.request_object(request, Some("project")).await
    }

    pub async fn update(&self, workspace_id: &str, space_id: &str, params: &SpaceParams) -> Result<Space> {
        let request = TransportRequest::patch(space_path(workspace_id, space_id)?).json(params)?;
        self.client.request_object(request, Some("project")).await
    }

    pub async fn destroy(&self, workspace_id: &str, space_id: &str) -> Result<DynamicObject> {
        let path = space_path(workspace_id, space_id)?;
        self.client.request_success(TransportRequest::delete(path)).await
    }

    pub async fn add_member(
        &self,
        workspace_id: &str,
        space_id: &str,
        user_id: &str,
        role: Option<&str>,
    ) -> Result<DynamicObject> {
        let mut body = json!({ "user_id": user_id });
        if let Some(role) = role {
            body["role"] = json!(role);
        }
        let path = format!("{}/members", space_path(workspace_id, space_id)?);
        let request = TransportRequest::post(path).json(&body)?;
        self.client.request_object(request, None).await
    }

    pub async fn remove_member(
        &self,
        workspace_id: &str,
        space_id: &str,
        member_id: &str,
    ) -> Result<DynamicObject> {
        let member = safe_id("member_id", member_id)?;
        let path = format!("{}/members/{member}", space_path(workspace_id, space_id)?);
        self.client.request_success(TransportRequest::delete(path)).await
    }
}

fn space_path(workspace_id: &str, space_id: &str) -> Result<String> {
    let space = safe_id("space_id", space_id)?;
    workspace_path(workspace_id, &format!("/projects/{space}"))
}
