//! Superthread API client.
//!
//! [`SuperthreadClient`] sends requests through a [`Transport`], turns
//! failed responses into [`ApiError`](crate::ApiError)s and converts
//! successful bodies into objects or collections. Endpoint methods live on
//! the resource handles returned by [`SuperthreadClient::cards`] and friends.

use std::sync::Arc;

use serde_json::Value;

use crate::config::{Config, WORKSPACE_VAR};
use crate::convert::{convert, success_value, ConvertOptions, Converted};
use crate::error::{classify, Result, SuperthreadError};
use crate::object::DynamicObject;
use crate::objects::{Collection, Variant};
use crate::registry::VariantKind;
use crate::resources::{
    Boards, Cards, Comments, Notes, Pages, Projects, Search, Spaces, Sprints, Tags, Users,
};
use crate::transport::{HttpTransport, Transport, TransportRequest, TransportResponse};

/// Client for the Superthread REST API.
///
/// Cheap to clone; clones share one transport.
///
/// # Example
///
/// ```no_run
/// use superthread::SuperthreadClient;
///
/// # async fn example() -> superthread::Result<()> {
/// // Reads SUPERTHREAD_API_KEY and friends
/// let client = SuperthreadClient::from_env()?;
///
/// let me = client.users().me().await?;
/// println!("Signed in as {}", me.display_name().unwrap_or("?"));
///
/// let card = client.cards().find("ws_1", "crd_42").await?;
/// println!("{} [{}]", card.title().unwrap_or(""), card.status().unwrap_or(""));
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct SuperthreadClient {
    transport: Arc<dyn Transport>,
    workspace: Option<String>,
}

impl std::fmt::Debug for SuperthreadClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SuperthreadClient")
            .field("transport", &self.transport)
            .field("workspace", &self.workspace)
            .finish()
    }
}

impl SuperthreadClient {
    /// Create a client from `SUPERTHREAD_*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `SUPERTHREAD_API_KEY` is not set.
    pub fn from_env() -> Result<Self> {
        Self::with_config(&Config::from_env()?)
    }

    /// Create a client with the provided token and base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the token is empty or the base URL is invalid.
    pub fn new(token: &str, base_url: &str) -> Result<Self> {
        Self::with_config(&Config::new(token).with_base_url(base_url))
    }

    pub fn with_config(config: &Config) -> Result<Self> {
        config.validate()?;
        let transport = HttpTransport::new(config)?;
        Ok(Self {
            transport: Arc::new(transport),
            workspace: config.workspace.clone(),
        })
    }

    /// Create a client over any transport.
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            workspace: None,
        }
    }

    #[must_use]
    pub fn with_default_workspace(mut self, workspace: impl Into<String>) -> Self {
        self.workspace = Some(workspace.into());
        self
    }

    pub fn default_workspace(&self) -> Option<&str> {
        self.workspace.as_deref()
    }

    /// `explicit` if given, else the default workspace.
    ///
    /// # Errors
    ///
    /// Returns [`SuperthreadError::ConfigMissing`] when neither is set.
    pub fn workspace(&self, explicit: Option<&str>) -> Result<String> {
        explicit
            .or(self.default_workspace())
            .map(str::to_string)
            .ok_or_else(|| {
                SuperthreadError::ConfigMissing(format!(
                    "workspace is required. Pass one or set {WORKSPACE_VAR}"
                ))
            })
    }

    pub fn users(&self) -> Users<'_> {
        Users::new(self)
    }

    pub fn spaces(&self) -> Spaces<'_> {
        Spaces::new(self)
    }

    pub fn boards(&self) -> Boards<'_> {
        Boards::new(self)
    }

    pub fn cards(&self) -> Cards<'_> {
        Cards::new(self)
    }

    pub fn comments(&self) -> Comments<'_> {
        Comments::new(self)
    }

    pub fn pages(&self) -> Pages<'_> {
        Pages::new(self)
    }

    pub fn notes(&self) -> Notes<'_> {
        Notes::new(self)
    }

    pub fn projects(&self) -> Projects<'_> {
        Projects::new(self)
    }

    pub fn sprints(&self) -> Sprints<'_> {
        Sprints::new(self)
    }

    pub fn tags(&self) -> Tags<'_> {
        Tags::new(self)
    }

    pub fn search(&self) -> Search<'_> {
        Search::new(self)
    }

    /// Send a request and return the parsed JSON body.
    ///
    /// Empty bodies, `204 No Content` and unparseable success bodies all
    /// come back as `{"success": true}`.
    ///
    /// # Errors
    ///
    /// Returns [`SuperthreadError::Api`] for any non-2xx status, or a
    /// transport error.
    pub async fn request(&self, request: TransportRequest) -> Result<Value> {
        Ok(self.fetch(request).await?.unwrap_or_else(success_value))
    }

    /// Send a request and convert its body with `options`.
    ///
    /// A success with no content converts to a generic `{"success": true}`
    /// object whatever the options ask for.
    pub async fn request_converted(
        &self,
        request: TransportRequest,
        options: &ConvertOptions,
    ) -> Result<Converted> {
        Ok(match self.fetch(request).await? {
            Some(body) => convert(body, options),
            None => Converted::Value(DynamicObject::construct(success_value())),
        })
    }

    /// Send a request and wrap the entity as `T`, unwrapping its envelope
    /// key first when one is given.
    pub async fn request_object<T: Variant>(
        &self,
        request: TransportRequest,
        unwrap_key: Option<&str>,
    ) -> Result<T> {
        let mut options = ConvertOptions::new().variant(T::KIND);
        options.unwrap_key = unwrap_key.map(str::to_string);
        self.request_converted(request, &options)
            .await?
            .into_variant()
    }

    /// Send a request and build a [`Collection`] from its body.
    ///
    /// A success with no content gives an empty collection. The
    /// `{"success": true}` marker is then carried by
    /// [`Collection::metadata`], so `collection.meta("success")` tells an
    /// empty list apart from a bodiless success.
    pub async fn request_collection(
        &self,
        request: TransportRequest,
        items_key: Option<&str>,
        item_variant: Option<VariantKind>,
    ) -> Result<Collection> {
        let body = self.request(request).await?;
        Ok(Collection::from_response(body, items_key, item_variant))
    }

    /// Send a request and discard the body in favour of the generic
    /// `{"success": true}` object.
    pub async fn request_success(&self, request: TransportRequest) -> Result<DynamicObject> {
        self.request(request).await?;
        Ok(success_object())
    }

    #[tracing::instrument(skip(self, request), fields(method = %request.method, path = %request.path))]
    async fn fetch(&self, request: TransportRequest) -> Result<Option<Value>> {
        let response = self.transport.send(request).await?;
        handle_response(response)
    }
}

/// The generic `{"success": true}` object returned by delete calls.
pub fn success_object() -> DynamicObject {
    match success_value() {
        Value::Object(map) => DynamicObject::from(map),
        _ => DynamicObject::new(),
    }
}

fn handle_response(response: TransportResponse) -> Result<Option<Value>> {
    if !response.is_success() {
        return Err(classify(response.status, &response.body, &response.headers).into());
    }
    if response.status == 204 || response.body.trim().is_empty() {
        return Ok(None);
    }
    match serde_json::from_str(&response.body) {
        Ok(body) => Ok(Some(body)),
        Err(err) => {
            tracing::debug!(error = %err, "unparseable success body treated as success");
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::{HeaderMap, HeaderValue};
    use reqwest::Method;
    use serde::Serialize;
    use serde_json::json;

    #[test]
    fn test_client_debug_hides_token() {
        let client = SuperthreadClient::new("test-token", "https://api.superthread.com/v1").unwrap();
        let debug = format!("{:?}", client);
        assert!(debug.contains("SuperthreadClient"));
        assert!(debug.contains("base_url"));
        assert!(!debug.contains("test-token"));
    }

    #[test]
    fn test_empty_token_rejected() {
        let err = SuperthreadClient::new("", "https://api.superthread.com/v1").unwrap_err();
        assert!(matches!(err, SuperthreadError::ConfigMissing(_)));
    }

    #[test]
    fn test_workspace_resolution() {
        let client = SuperthreadClient::new("t", "https://api.superthread.com/v1").unwrap();
        assert!(client.workspace(None).is_err());
        assert_eq!(client.workspace(Some("ws_x")).unwrap(), "ws_x");

        let client = client.with_default_workspace("ws_default");
        assert_eq!(client.workspace(None).unwrap(), "ws_default");
        assert_eq!(client.workspace(Some("ws_x")).unwrap(), "ws_x");
    }

    #[test]
    fn test_handle_response_no_content() {
        assert_eq!(handle_response(TransportResponse::new(204, "")).unwrap(), None);
        assert_eq!(handle_response(TransportResponse::new(200, "  ")).unwrap(), None);
        assert_eq!(handle_response(TransportResponse::new(200, "<html>")).unwrap(), None);
        assert_eq!(
            handle_response(TransportResponse::new(200, r#"{"a":1}"#)).unwrap(),
            Some(json!({"a": 1}))
        );
    }

    #[test]
    fn test_handle_response_classifies_failures() {
        let mut response = TransportResponse::new(429, "{}");
        let mut headers = HeaderMap::new();
        headers.insert("retry-after", HeaderValue::from_static("7"));
        response.headers = headers;

        let err = handle_response(response).unwrap_err();
        assert!(err.is_rate_limited());
        assert_eq!(err.retry_after(), Some(std::time::Duration::from_secs(7)));
    }

    #[test]
    fn test_request_builders() {
        #[derive(Serialize)]
        struct Query {
            project_id: &'static str,
            #[serde(skip_serializing_if = "Option::is_none")]
            archived: Option<bool>,
        }

        let request = TransportRequest::get("ws/boards")
            .params(&Query { project_id: "s1", archived: None })
            .unwrap();
        assert_eq!(request.method, Method::GET);
        assert_eq!(request.query.as_deref(), Some("project_id=s1"));

        let request = TransportRequest::post("ws/cards").json(&json!({"title": "T"})).unwrap();
        assert_eq!(request.body, Some(json!({"title": "T"})));
    }

    #[test]
    fn test_success_object() {
        assert_eq!(success_object().to_value(), json!({"success": true}));
    }
}
