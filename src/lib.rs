//! Superthread API client library.
//!
//! A Rust library for the Superthread project-management REST API. Every
//! response is wrapped in a [`DynamicObject`], a field map that keeps
//! unknown fields, and then specialised into a typed variant such as
//! [`Card`] or [`Board`] by its `type` discriminator.
//!
//! # Quick Start
//!
//! ```no_run
//! use superthread::{CardParams, SuperthreadClient};
//!
//! #[tokio::main]
//! async fn main() -> superthread::Result<()> {
//!     // Create client from environment variables
//!     let client = SuperthreadClient::from_env()?;
//!     let ws = client.workspace(None)?;
//!
//!     // Get a card by ID
//!     let card = client.cards().find(&ws, "crd_123").await?;
//!     println!("Card: {}", card.title().unwrap_or_default());
//!
//!     // Create one on a board
//!     let params = CardParams {
//!         title: Some("Fix login".to_string()),
//!         board_id: Some("brd_1".to_string()),
//!         list_id: Some("lst_1".to_string()),
//!         ..Default::default()
//!     };
//!     let created = client.cards().create(&ws, &params).await?;
//!     println!("Created {}", created.id().unwrap_or_default());
//!
//!     // List boards in a space
//!     let boards = client
//!         .boards()
//!         .list(&ws, &superthread::BoardListQuery::for_space("spc_1"))
//!         .await?;
//!     println!("Found {} boards", boards.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - [`TypeRegistry`] maps discriminator values to [`VariantKind`]s.
//! - [`DynamicObject`] and [`ApiValue`] wrap raw JSON; mappings become a
//!   [`Resource`], one case per variant.
//! - [`Collection`] holds the items of a list response plus its envelope.
//! - [`convert`] applies unwrap, collection and variant hints to a body.
//! - [`classify`] turns a failed response into an [`ApiError`].
//! - [`SuperthreadClient`] sends requests through a [`Transport`];
//!   endpoint methods live on its resource handles.
//!
//! # Configuration
//!
//! The client reads configuration from environment variables:
//!
//! - `SUPERTHREAD_API_KEY` (required) - Your Superthread API key
//! - `SUPERTHREAD_API_BASE_URL` (optional) - Base URL (defaults to `https://api.superthread.com/v1`)
//! - `SUPERTHREAD_WORKSPACE_ID` (optional) - Default workspace
//! - `SUPERTHREAD_TIMEOUT` / `SUPERTHREAD_OPEN_TIMEOUT` (optional) - Seconds

pub mod cli;
mod client;
mod config;
mod convert;
mod error;
mod object;
mod objects;
pub mod output;
mod path;
mod registry;
mod resources;
mod transport;

// Re-export core types
pub use client::{success_object, SuperthreadClient};
pub use config::{
    Config, API_KEY_VAR, BASE_URL_VAR, DEFAULT_BASE_URL, DEFAULT_OPEN_TIMEOUT, DEFAULT_TIMEOUT,
    OPEN_TIMEOUT_VAR, TIMEOUT_VAR, WORKSPACE_VAR,
};
pub use convert::{convert, success_value, ConvertOptions, Converted};
pub use error::{classify, ApiError, ErrorKind, Result, SuperthreadError};
pub use path::{safe_id, workspace_path};
pub use transport::{HttpTransport, Transport, TransportRequest, TransportResponse};

// Re-export the object model
pub use object::{ApiValue, DynamicObject};
pub use objects::{
    Board, Card, Checklist, ChecklistItem, Collection, Comment, LinkedCard, List, Member, Note,
    Page, Priority, Project, Resource, Space, Sprint, Tag, User, Variant, ITEMS_KEYS,
};
pub use registry::{registry, TypeRegistry, VariantKind, DISCRIMINATOR_FIELD, STANDARD_TYPES};

// Re-export endpoint handles and their parameters
pub use resources::{
    AssignedFilter, BoardListQuery, BoardParams, Boards, CardParams, Cards, ChecklistItemParams,
    CommentParams, Comments, ListParams, NoteParams, Notes, PageListQuery, PageParams, Pages,
    ProjectParams, Projects, Search, SearchQuery, SpaceParams, Spaces, Sprints, TagParams, TagQuery,
    Tags, Users,
};
