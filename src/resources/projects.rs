use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::Result;
use crate::object::DynamicObject;
use crate::objects::{Collection, Project};
use crate::path::{safe_id, workspace_path};
use crate::registry::VariantKind;
use crate::transport::TransportRequest;

super::resource! {
    /// Projects, which the API serves under `/epics`.
    Projects
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ProjectParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Roadmap list the project sits in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Projects<'_> {
    pub async fn list(&self, workspace_id: &str) -> Result<Collection> {
        let path = workspace_path(workspace_id, "/epics")?;
        self.client
            .request_collection(TransportRequest::get(path), Some("epics"), Some(VariantKind::Project))
            .await
    }

    #[tracing::instrument(skip(self))]
    pub async fn find(&self, workspace_id: &str, project_id: &str) -> Result<Project> {
        let path = project_path(workspace_id, project_id)?;
        self.client
            .request_object(TransportRequest::get(path), Some("epic"))
            .await
    }

    pub async fn create(
        &self,
        workspace_id: &str,
        title: &str,
        list_id: &str,
        params: &ProjectParams,
    ) -> Result<Project> {
        let mut body = params.clone();
        body.title = Some(title.to_string());
        body.list_id = Some(list_id.to_string());
        let request = TransportRequest::post(workspace_path(workspace_id, "/epics")?).json(&body)?;
        self.client.request_object(request, Some("epic")).await
    }

    pub async fn update(&self, workspace_id: &str, project_id: &str, params: &ProjectParams) -> Result<Project> {
        let request = TransportRequest::patch(project_path(workspace_id, project_id)?).json(params)?;
        self.client.request_object(request, Some("epic")).await
    }

    pub async fn destroy(&self, workspace_id: &str, project_id: &str) -> Result<DynamicObject> {
        let path = project_path(workspace_id, project_id)?;
        self.client.request_success(TransportRequest::delete(path)).await
    }

    pub async fn add_card(&self, workspace_id: &str, project_id: &str, card_id: &str) -> Result<DynamicObject> {
        let path = project_card_path(workspace_id, project_id, card_id)?;
        self.client.request_object(TransportRequest::post(path), None).await
    }

    pub async fn remove_card(&self, workspace_id: &str, project_id: &str, card_id: &str) -> Result<DynamicObject> {
        let path = project_card_path(workspace_id, project_id, card_id)?;
        self.client.request_success(TransportRequest::delete(path)).await
    }
}

fn project_path(workspace_id: &str, project_id: &str) -> Result<String> {
    let project = safe_id("project_id", project_id)?;
    workspace_path(workspace_id, &format!("/epics/{project}"))
}

fn project_card_path(workspace_id: &str, project_id: &str, card_id: &str) -> Result<String> {
    let card = safe_id("card_id", card_id)?;
    Ok(format!("{}/cards/{card}", project_path(workspace_id, project_id)?))
}
