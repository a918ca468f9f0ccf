use serde::Serialize;
use serde_json::{json, Map, Value};

use crate::error::{Result, SuperthreadError};
use crate::object::DynamicObject;
use crate::objects::{Card, Checklist, ChecklistItem, Collection};
use crate::path::{safe_id, workspace_path};
use crate::registry::VariantKind;
use crate::transport::TransportRequest;

super::resource! {
    /// Cards, their members, checklists, tags and relations.
    Cards
}

const DEFAULT_MEMBER_ROLE: &str = "member";

/// Fields for creating, updating or copying a card.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CardParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub board_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sprint_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_card_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// 1 (urgent) to 4 (low).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimate: Option<i64>,
    /// Unix milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<i64>,
    /// Unix milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Narrows [`Cards::assigned`].
#[derive(Debug, Clone, Default)]
pub struct AssignedFilter {
    pub archived: Option<bool>,
    pub board_id: Option<String>,
    pub list_id: Option<String>,
    pub project_id: Option<String>,
}

impl AssignedFilter {
    /// The `views/preview` body selecting cards assigned to `user_id`.
    fn body(&self, user_id: &str) -> Value {
        let mut include = Map::new();
        include.insert("members".to_string(), json!([user_id]));
        let scopes = [
            ("boards", &self.board_id),
            ("lists", &self.list_id),
            ("projects", &self.project_id),
        ];
        for (key, id) in scopes {
            if let Some(id) = id {
                include.insert(key.to_string(), json!([id]));
            }
        }

        let mut filters = Map::new();
        filters.insert("include".to_string(), Value::Object(include));
        if let Some(archived) = self.archived {
            filters.insert("is_archived".to_string(), json!(archived));
        }

        json!({ "type": "card", "card_filters": filters })
    }
}

/// Fields for updating a checklist item.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ChecklistItemParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checked: Option<bool>,
}

/// Filters for [`Cards::tags`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct TagQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub all: Option<bool>,
}

impl Cards<'_> {
    /// Create a card on a board or in a sprint.
    ///
    /// # Errors
    ///
    /// Returns [`SuperthreadError::InvalidArgument`] without sending a
    /// request when neither `board_id` nor `sprint_id` is set.
    #[tracing::instrument(skip(self, params))]
    pub async fn create(&self, workspace_id: &str, params: &CardParams) -> Result<Card> {
        if params.board_id.is_none() && params.sprint_id.is_none() {
            return Err(SuperthreadError::InvalidArgument(
                "either board_id or sprint_id must be provided".to_string(),
            ));
        }
        let request = TransportRequest::post(workspace_path(workspace_id, "/cards")?).json(params)?;
        self.client.request_object(request, Some("card")).await
    }

    pub async fn update(&self, workspace_id: &str, card_id: &str, params: &CardParams) -> Result<Card> {
        let request = TransportRequest::patch(card_path(workspace_id, card_id)?).json(params)?;
        self.client.request_object(request, Some("card")).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn find(&self, workspace_id: &str, card_id: &str) -> Result<Card> {
        let path = card_path(workspace_id, card_id)?;
        self.client
            .request_object(TransportRequest::get(path), Some("card"))
            .await
    }

    pub async fn destroy(&self, workspace_id: &str, card_id: &str) -> Result<DynamicObject> {
        let path = card_path(workspace_id, card_id)?;
        self.client.request_success(TransportRequest::delete(path)).await
    }

    pub async fn duplicate(&self, workspace_id: &str, card_id: &str, params: &CardParams) -> Result<Card> {
        let path = format!("{}/copy", card_path(workspace_id, card_id)?);
        let request = TransportRequest::post(path).json(params)?;
        self.client.request_object(request, Some("card")).await
    }

    /// Cards assigned to `user_id`, as [`Card`]s.
    #[tracing::instrument(skip(self, filter))]
    pub async fn assigned(
        &self,
        workspace_id: &str,
        user_id: &str,
        filter: &AssignedFilter,
    ) -> Result<Collection> {
        let path = workspace_path(workspace_id, "/views/preview")?;
        let request = TransportRequest::post(path).json(&filter.body(user_id))?;
        self.client
            .request_collection(request, Some("cards"), Some(VariantKind::Card))
            .await
    }

    /// Link two cards. `relation_type` is one of `blocks`, `blocked_by`,
    /// `related` or `duplicates`.
    pub async fn add_related(
        &self,
        workspace_id: &str,
        card_id: &str,
        related_card_id: &str,
        relation_type: &str,
    ) -> Result<DynamicObject> {
        let path = format!("{}/linked_cards", card_path(workspace_id, card_id)?);
        let body = json!({ "card_id": related_card_id, "linked_card_type": relation_type });
        let request = TransportRequest::post(path).json(&body)?;
        self.client.request_object(request, None).await
    }

    pub async fn remove_related(
        &self,
        workspace_id: &str,
        card_id: &str,
        linked_card_id: &str,
    ) -> Result<DynamicObject> {
        let linked = safe_id("linked_card_id", linked_card_id)?;
        let path = format!("{}/linked_cards/{linked}", card_path(workspace_id, card_id)?);
        self.client.request_success(TransportRequest::delete(path)).await
    }

    /// Assign a user. `role` defaults to `"member"`.
    pub async fn add_member(
        &self,
        workspace_id: &str,
        card_id: &str,
        user_id: &str,
        role: Option<&str>,
    ) -> Result<DynamicObject> {
        let path = format!("{}/members", card_path(workspace_id, card_id)?);
        let body = json!({ "user_id": user_id, "role": role.unwrap_or(DEFAULT_MEMBER_ROLE) });
        let request = TransportRequest::post(path).json(&body)?;
        self.client.request_object(request, None).await
    }

    pub async fn remove_member(&self, workspace_id: &str, card_id: &str, user_id: &str) -> Result<DynamicObject> {
        let user = safe_id("user_id", user_id)?;
        let path = format!("{}/members/{user}", card_path(workspace_id, card_id)?);
        self.client.request_success(TransportRequest::delete(path)).await
    }

    pub async fn create_checklist(&self, workspace_id: &str, card_id: &str, title: &str) -> Result<Checklist> {
        let path = format!("{}/checklists", card_path(workspace_id, card_id)?);
        let request = TransportRequest::post(path).json(&json!({ "title": title }))?;
        self.client.request_object(request, None).await
    }

    pub async fn update_checklist(
        &self,
        workspace_id: &str,
        card_id: &str,
        checklist_id: &str,
        title: &str,
    ) -> Result<Checklist> {
        let path = checklist_path(workspace_id, card_id, checklist_id)?;
        let request = TransportRequest::patch(path).json(&json!({ "title": title }))?;
        self.client.request_object(request, None).await
    }

    pub async fn delete_checklist(
        &self,
        workspace_id: &str,
        card_id: &str,
        checklist_id: &str,
    ) -> Result<DynamicObject> {
        let path = checklist_path(workspace_id, card_id, checklist_id)?;
        self.client.request_success(TransportRequest::delete(path)).await
    }

    pub async fn add_checklist_item(
        &self,
        workspace_id: &str,
        card_id: &str,
        checklist_id: &str,
        title: &str,
        checked: bool,
    ) -> Result<ChecklistItem> {
        let checklist = checklist_path(workspace_id, card_id, checklist_id)?;
        let body = json!({ "title": title, "checklist_id": checklist_id, "checked": checked });
        let request = TransportRequest::post(format!("{checklist}/items")).json(&body)?;
        self.client.request_object(request, None).await
    }

    pub async fn update_checklist_item(
        &self,
        workspace_id: &str,
        card_id: &str,
        checklist_id: &str,
        item_id: &str,
        params: &ChecklistItemParams,
    ) -> Result<ChecklistItem> {
        let path = item_path(workspace_id, card_id, checklist_id, item_id)?;
        let request = TransportRequest::patch(path).json(params)?;
        self.client.request_object(request, None).await
    }

    pub async fn delete_checklist_item(
        &self,
        workspace_id: &str,
        card_id: &str,
        checklist_id: &str,
        item_id: &str,
    ) -> Result<DynamicObject> {
        let path = item_path(workspace_id, card_id, checklist_id, item_id)?;
        self.client.request_success(TransportRequest::delete(path)).await
    }

    /// Tags available in the workspace, as [`Tag`](crate::Tag)s.
    pub async fn tags(&self, workspace_id: &str, query: &TagQuery) -> Result<Collection> {
        let request = TransportRequest::get(workspace_path(workspace_id, "/tags")?).params(query)?;
        self.client
            .request_collection(request, Some("tags"), Some(VariantKind::Tag))
            .await
    }

    /// Attach tags. A single id is sent as `{"id"}`, several as `{"ids"}`.
    pub async fn add_tags(&self, workspace_id: &str, card_id: &str, tag_ids: &[&str]) -> Result<DynamicObject> {
        let body = match tag_ids {
            [] => {
                return Err(SuperthreadError::InvalidArgument(
                    "at least one tag id is required".to_string(),
                ))
            }
            [single] => json!({ "id": single }),
            many => json!({ "ids": many }),
        };
        let path = format!("{}/tags", card_path(workspace_id, card_id)?);
        let request = TransportRequest::post(path).json(&body)?;
        self.client.request_object(request, None).await
    }

    pub async fn remove_tag(&self, workspace_id: &str, card_id: &str, tag_id: &str) -> Result<DynamicObject> {
        let tag = safe_id("tag_id", tag_id)?;
        let path = format!("{}/tags/{tag}", card_path(workspace_id, card_id)?);
        self.client.request_success(TransportRequest::delete(path)).await
    }
}

fn card_path(workspace_id: &str, card_id: &str) -> Result<String> {
    let card = safe_id("card_id", card_id)?;
    workspace_path(workspace_id, &format!("/cards/{card}"))
}

fn checklist_path(workspace_id: &str, card_id: &str, checklist_id: &str) -> Result<String> {
    let checklist = safe_id("checklist_id", checklist_id)?;
    Ok(format!("{}/checklists/{checklist}", card_path(workspace_id, card_id)?))
}

fn item_path(workspace_id: &str, card_id: &str, checklist_id: &str, item_id: &str) -> Result<String> {
    let item = safe_id("item_id", item_id)?;
    Ok(format!(
        "{}/items/{item}",
        checklist_path(workspace_id, card_id, checklist_id)?
    ))
}
