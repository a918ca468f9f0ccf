use crate::error::Result;
use crate::objects::{Collection, User};
use crate::path::safe_id;
use crate::registry::VariantKind;
use crate::transport::TransportRequest;

super::resource! {
    /// The signed-in user and workspace members.
    Users
}

impl Users<'_> {
    /// The account the API key belongs to.
    #[tracing::instrument(skip(self))]
    pub async fn me(&self) -> Result<User> {
        self.client
            .request_object(TransportRequest::get("users/me"), Some("user"))
            .await
    }

    /// Members of a workspace, as [`User`]s.
    #[tracing::instrument(skip(self))]
    pub async fn members(&self, workspace_id: &str) -> Result<Collection> {
        let ws = safe_id("workspace_id", workspace_id)?;
        self.client
            .request_collection(
                TransportRequest::get(format!("teams/{ws}/members")),
                Some("members"),
                Some(VariantKind::User),
            )
            .await
    }
}
