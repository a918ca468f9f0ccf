//! Endpoint wrappers.
//!
//! Each handle borrows the client and maps one API resource. Every
//! identifier passes through [`safe_id`](crate::safe_id) before it reaches
//! a path; delete calls return the generic `{"success": true}` object.

mod boards;
mod cards;
mod comments;
mod notes;
mod pages;
mod projects;
mod search;
mod spaces;
mod sprints;
mod tags;
mod users;

pub use boards::{BoardListQuery, BoardParams, Boards, ListParams};
pub use cards::{AssignedFilter, CardParams, Cards, ChecklistItemParams, TagQuery};
pub use comments::{CommentParams, Comments};
pub use notes::{NoteParams, Notes};
pub use pages::{PageListQuery, PageParams, Pages};
pub use projects::{ProjectParams, Projects};
pub use search::{Search, SearchQuery};
pub use spaces::{SpaceParams, Spaces};
pub use sprints::Sprints;
pub use tags::{TagParams, Tags};
pub use users::Users;

/// Declares a resource handle borrowing the client.
macro_rules! resource {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy)]
        pub struct $name<'a> {
            client: &'a $crate::client::SuperthreadClient,
        }

        impl<'a> $name<'a> {
            pub(crate) fn new(client: &'a $crate::client::SuperthreadClient) -> Self {
                Self { client }
            }
        }
    };
}

pub(crate) use resource;
