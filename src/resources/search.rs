use url::form_urlencoded;

use crate::error::Result;
use crate::object::DynamicObject;
use crate::path::workspace_path;
use crate::transport::TransportRequest;

super::resource! {
    /// Workspace-wide search.
    Search
}

/// Parameters for [`Search::query`].
///
/// List filters repeat an empty-bracket key (`types[]=card&types[]=page`).
#[derive(Debug, Clone, Default)]
pub struct SearchQuery {
    pub query: String,
    /// `title` or `content`.
    pub field: Option<String>,
    /// Entity types to include, such as `card` or `page`.
    pub types: Vec<String>,
    pub statuses: Vec<String>,
    /// Sent as `project_id`.
    pub space_id: Option<String>,
    pub archived: Option<bool>,
    /// Group results by entity type.
    pub grouped: Option<bool>,
    /// Pagination cursor from a previous response.
    pub cursor: Option<String>,
}

impl SearchQuery {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    /// The url-encoded query string.
    pub fn to_query(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        serializer.append_pair("q", &self.query);
        if let Some(field) = &self.field {
            serializer.append_pair("field", field);
        }
        for kind in &self.types {
            serializer.append_pair("types[]", kind);
        }
        for status in &self.statuses {
            serializer.append_pair("statuses[]", status);
        }
        if let Some(space_id) = &self.space_id {
            serializer.append_pair("project_id", space_id);
        }
        if let Some(archived) = self.archived {
            serializer.append_pair("archived", if archived { "true" } else { "false" });
        }
        if let Some(grouped) = self.grouped {
            serializer.append_pair("grouped", if grouped { "true" } else { "false" });
        }
        if let Some(cursor) = &self.cursor {
            serializer.append_pair("cursor", cursor);
        }
        serializer.finish()
    }
}

impl Search<'_> {
    /// Run a search. Results come back as one object; its shape depends
    /// on `grouped`.
    #[tracing::instrument(skip(self))]
    pub async fn query(&self, workspace_id: &str, query: &SearchQuery) -> Result<DynamicObject> {
        let request = TransportRequest::get(workspace_path(workspace_id, "/search")?)
            .with_query(Some(query.to_query()));
        self.client.request_object(request, None).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_encoding() {
        let query = SearchQuery {
            types: vec!["card".to_string(), "page".to_string()],
            space_id: Some("s1".to_string()),
            ..SearchQuery::new("login bug")
        };
        assert_eq!(
            query.to_query(),
            "q=login+bug&types%5B%5D=card&types%5B%5D=page&project_id=s1"
        );
    }

    #[test]
    fn test_query_encoding_flags_and_statuses() {
        let query = SearchQuery {
            statuses: vec!["started".to_string()],
            archived: Some(false),
            grouped: Some(true),
            cursor: Some("c2".to_string()),
            ..SearchQuery::new("x")
        };
        assert_eq!(
            query.to_query(),
            "q=x&statuses%5B%5D=started&archived=false&grouped=true&cursor=c2"
        );
    }
}
