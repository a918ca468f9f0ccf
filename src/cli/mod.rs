//! CLI argument parsing types.
//!
//! This module provides the command-line interface structure for the superthread binary.

use std::fmt;

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::WORKSPACE_VAR;

/// Superthread API command-line interface.
#[derive(Parser, Debug)]
#[command(name = "superthread", about = "Superthread API CLI", version)]
pub struct Cli {
    /// Output results as JSON instead of a table.
    #[arg(long, global = true, default_value = "false")]
    pub json: bool,

    /// Workspace to operate on.
    #[arg(short, long, global = true, env = WORKSPACE_VAR)]
    pub workspace: Option<String>,

    /// Log requests to stderr.
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the signed-in user.
    Me,

    /// List workspace members.
    Members,

    /// Get a single entity by ID.
    Get {
        /// The type of entity to get.
        entity: Entity,

        /// The entity ID.
        id: String,

        /// Space ID (required for sprints).
        #[arg(long)]
        space: Option<String>,
    },

    /// List entities, optionally scoped to a space.
    List {
        /// The type of entity to list.
        entity: Entity,

        /// Space ID (required for boards and sprints).
        #[arg(long)]
        space: Option<String>,

        /// Include archived entities.
        #[arg(long)]
        archived: bool,
    },

    /// List cards assigned to a user.
    Assigned {
        /// The user ID.
        user: String,

        /// Only cards on this board.
        #[arg(long)]
        board: Option<String>,

        /// Only cards in this project.
        #[arg(long)]
        project: Option<String>,
    },

    /// Search the workspace.
    Search {
        /// Text to search for.
        query: String,

        /// Entity types to include (repeatable or comma separated).
        #[arg(long, value_delimiter = ',')]
        types: Vec<String>,
    },

    /// Delete an entity.
    Delete {
        /// The type of entity to delete.
        entity: Entity,

        /// The entity ID.
        id: String,
    },
}

/// Entity types that can be operated on.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Entity {
    /// A card (task or issue).
    #[value(alias = "cards")]
    Card,
    /// A board of lists.
    #[value(alias = "boards")]
    Board,
    /// A space grouping boards and pages.
    #[value(alias = "spaces")]
    Space,
    /// A project (epic).
    #[value(alias = "projects", alias = "epic", alias = "epics")]
    Project,
    /// A document page.
    #[value(alias = "pages")]
    Page,
    /// A meeting note.
    #[value(alias = "notes")]
    Note,
    /// A sprint in a space.
    #[value(alias = "sprints")]
    Sprint,
    /// A card comment.
    #[value(alias = "comments")]
    Comment,
    /// A card tag.
    #[value(alias = "tags")]
    Tag,
}

impl Entity {
    /// Singular lowercase name, as typed on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Self::Card => "card",
            Self::Board => "board",
            Self::Space => "space",
            Self::Project => "project",
            Self::Page => "page",
            Self::Note => "note",
            Self::Sprint => "sprint",
            Self::Comment => "comment",
            Self::Tag => "tag",
        }
    }
}

/// Subcommands that act on one [`Entity`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Get,
    List,
    Delete,
}

impl Action {
    pub fn name(self) -> &'static str {
        match self {
            Self::Get => "get",
            Self::List => "list",
            Self::Delete => "delete",
        }
    }
}

/// An entity command the CLI rejects before contacting the API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Unsupported {
    pub action: Action,
    pub entity: Entity,
    /// What to run instead, when there is an alternative.
    pub hint: Option<&'static str>,
}

impl fmt::Display for Unsupported {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} not supported", self.action.name(), self.entity.name())
    }
}

/// `Some` when `action` cannot be applied to `entity`.
pub fn unsupported(action: Action, entity: Entity) -> Option<Unsupported> {
    let hint = match (action, entity) {
        (Action::Get, Entity::Tag) => Some("Use 'superthread list tags'"),
        (Action::List, Entity::Card) => Some(
            "Use 'superthread assigned <user_id>' or 'superthread search <text> --types card'",
        ),
        (Action::List, Entity::Comment) => {
            Some("Use 'superthread get card <id>' to see a card with its comments")
        }
        (Action::Delete, Entity::Sprint) => None,
        _ => return None,
    };
    Some(Unsupported {
        action,
        entity,
        hint,
    })
}

impl Command {
    /// The rejection for this command, if it is an unsupported entity command.
    pub fn unsupported(&self) -> Option<Unsupported> {
        match self {
            Self::Get { entity, .. } => unsupported(Action::Get, *entity),
            Self::List { entity, .. } => unsupported(Action::List, *entity),
            Self::Delete { entity, .. } => unsupported(Action::Delete, *entity),
            _ => None,
        }
    }
}
