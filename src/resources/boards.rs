use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::Result;
use crate::object::DynamicObject;
use crate::objects::{Board, Collection, List};
use crate::path::{safe_id, workspace_path};
use crate::registry::VariantKind;
use crate::transport::TransportRequest;

super::resource! {
    /// Boards and their lists.
    Boards
}

/// Fields for creating, updating or copying a board.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BoardParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Owning space.
    #[serde(rename = "project_id", skip_serializing_if = "Option::is_none")]
    pub space_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Filters for [`Boards::list`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct BoardListQuery {
    #[serde(rename = "project_id")]
    pub space_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bookmarked: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,
}

impl BoardListQuery {
    pub fn for_space(space_id: impl Into<String>) -> Self {
        Self {
            space_id: space_id.into(),
            ..Self::default()
        }
    }
}

/// Fields for creating or updating a list.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<f64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Serialize)]
struct NewList<'p> {
    board_id: &'p str,
    #[serde(flatten)]
    params: &'p ListParams,
}

impl Boards<'_> {
    #[tracing::instrument(skip(self, params))]
    pub async fn create(
        &self,
        workspace_id: &str,
        space_id: &str,
        title: &str,
        params: &BoardParams,
    ) -> Result<Board> {
        let mut body = params.clone();
        body.title = Some(title.to_string());
        body.space_id = Some(space_id.to_string());
        let request = TransportRequest::post(workspace_path(workspace_id, "/boards")?).json(&body)?;
        self.client.request_object(request, Some("board")).await
    }

    pub async fn list(&self, workspace_id: &str, query: &BoardListQuery) -> Result<Collection> {
        let request = TransportRequest::get(workspace_path(workspace_id, "/boards")?).params(query)?;
        self.client
            .request_collection(request, Some("boards"), Some(VariantKind::Board))
            .await
    }

    #[tracing::instrument(skip(self))]
    pub async fn find(&self, workspace_id: &str, board_id: &str) -> Result<Board> {
        let path = board_path(workspace_id, board_id)?;
        self.client
            .request_object(TransportRequest::get(path), Some("board"))
            .await
    }

    pub async fn update(&self, workspace_id: &str, board_id: &str, params: &BoardParams) -> Result<Board> {
        let request = TransportRequest::patch(board_path(workspace_id, board_id)?).json(params)?;
        self.client.request_object(request, Some("board")).await
    }

    /// Copy a board, optionally renaming it or moving it to another space.
    pub async fn duplicate(
        &self,
        workspace_id: &str,
        board_id: &str,
        params: &BoardParams,
    ) -> Result<Board> {
        let path = format!("{}/copy", board_path(workspace_id, board_id)?);
        let request = TransportRequest::post(path).json(params)?;
        self.client.request_object(request, Some("board")).await
    }

    pub async fn destroy(&self, workspace_id: &str, board_id: &str) -> Result<DynamicObject> {
        let path = board_path(workspace_id, board_id)?;
        self.client.request_success(TransportRequest::delete(path)).await
    }

    pub async fn create_list(
        &self,
        workspace_id: &str,
        board_id: &str,
        title: &str,
        params: &ListParams,
    ) -> Result<List> {
        let mut params = params.clone();
        params.title = Some(title.to_string());
        let body = NewList {
            board_id,
            params: &params,
        };
        let request = TransportRequest::post(workspace_path(workspace_id, "/lists")?).json(&body)?;
        self.client.request_object(request, Some("list")).await
    }

    pub async fn update_list(&self, workspace_id: &str, list_id: &str, params: &ListParams) -> Result<List> {
        let request = TransportRequest::patch(list_path(workspace_id, list_id)?).json(params)?;
        self.client.request_object(request, Some("list")).await
    }

    pub async fn delete_list(&self, workspace_id: &str, list_id: &str) -> Result<DynamicObject> {
        let path = list_path(workspace_id, list_id)?;
        self.client.request_success(TransportRequest::delete(path)).await
    }
}

fn board_path(workspace_id: &str, board_id: &str) -> Result<String> {
    let board = safe_id("board_id", board_id)?;
    workspace_path(workspace_id, &format!("/boards/{board}"))
}

fn list_path(workspace_id: &str, list_id: &str) -> Result<String> {
    let list = safe_id("list_id", list_id)?;
    workspace_path(workspace_id, &format!("/lists/{list}"))
}
