use crate::error::Result;
use crate::objects::{Collection, Sprint};
use crate::path::{safe_id, workspace_path};
use crate::registry::VariantKind;
use crate::transport::TransportRequest;

super::resource! {
    /// Sprints. Both calls are scoped to a space.
    Sprints
}

#[derive(serde::Serialize)]
struct SpaceScope<'a> {
    project_id: &'a str,
}

impl Sprints<'_> {
    pub async fn list(&self, workspace_id: &str, space_id: &str) -> Result<Collection> {
        let request = TransportRequest::get(workspace_path(workspace_id, "/sprints")?)
            .params(&SpaceScope { project_id: space_id })?;
        self.client
            .request_collection(request, Some("sprints"), Some(VariantKind::Sprint))
            .await
    }

    #[tracing::instrument(skip(self))]
    pub async fn find(&self, workspace_id: &str, sprint_id: &str, space_id: &str) -> Result<Sprint> {
        let sprint = safe_id("sprint_id", sprint_id)?;
        let request = TransportRequest::get(workspace_path(workspace_id, &format!("/sprints/{sprint}"))?)
            .params(&SpaceScope { project_id: space_id })?;
        self.client.request_object(request, Some("sprint")).await
    }
}
