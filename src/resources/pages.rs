use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::Result;
use crate::object::DynamicObject;
use crate::objects::{Collection, Page};
use crate::path::{safe_id, workspace_path};
use crate::registry::VariantKind;
use crate::transport::TransportRequest;

super::resource! {
    /// Documentation pages.
    Pages
}

/// Fields for creating, updating or copying a page.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PageParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(rename = "project_id", skip_serializing_if = "Option::is_none")]
    pub space_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_page_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Filters for [`Pages::list`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct PageListQuery {
    #[serde(rename = "project_id", skip_serializing_if = "Option::is_none")]
    pub space_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_recently: Option<bool>,
}

impl Pages<'_> {
    pub async fn list(&self, workspace_id: &str, query: &PageListQuery) -> Result<Collection> {
        let request = TransportRequest::get(workspace_path(workspace_id, "/pages")?).params(query)?;
        self.client
            .request_collection(request, Some("pages"), Some(VariantKind::Page))
            .await
    }

    #[tracing::instrument(skip(self))]
    pub async fn find(&self, workspace_id: &str, page_id: &str) -> Result<Page> {
        let path = page_path(workspace_id, page_id)?;
        self.client
            .request_object(TransportRequest::get(path), Some("page"))
            .await
    }

    pub async fn create(&self, workspace_id: &str, space_id: &str, params: &PageParams) -> Result<Page> {
        let mut body = params.clone();
        body.space_id = Some(space_id.to_string());
        let request = TransportRequest::post(workspace_path(workspace_id, "/pages")?).json(&body)?;
        self.client.request_object(request, Some("page")).await
    }

    pub async fn update(&self, workspace_id: &str, page_id: &str, params: &PageParams) -> Result<Page> {
        let request = TransportRequest::patch(page_path(workspace_id, page_id)?).json(params)?;
        self.client.request_object(request, Some("page")).await
    }

    pub async fn duplicate(
        &self,
        workspace_id: &str,
        page_id: &str,
        space_id: &str,
        params: &PageParams,
    ) -> Result<Page> {
        let mut body = params.clone();
        body.space_id = Some(space_id.to_string());
        let path = format!("{}/copy", page_path(workspace_id, page_id)?);
        let request = TransportRequest::post(path).json(&body)?;
        self.client.request_object(request, Some("page")).await
    }

    /// Shorthand for an update that sets `archived`.
    pub async fn archive(&self, workspace_id: &str, page_id: &str) -> Result<Page> {
        let params = PageParams {
            archived: Some(true),
            ..PageParams::default()
        };
        self.update(workspace_id, page_id, &params).await
    }

    pub async fn destroy(&self, workspace_id: &str, page_id: &str) -> Result<DynamicObject> {
        let path = page_path(workspace_id, page_id)?;
        self.client.request_success(TransportRequest::delete(path)).await
    }
}

fn page_path(workspace_id: &str, page_id: &str) -> Result<String> {
    let page = safe_id("page_id", page_id)?;
    workspace_path(workspace_id, &format!("/pages/{page}"))
}
