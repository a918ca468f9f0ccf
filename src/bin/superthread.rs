//! Superthread API CLI binary.
//!
//! A command-line interface for interacting with the Superthread API.

use clap::Parser;
use serde_json::Value;
use std::process::ExitCode;
use superthread::cli::{Action, Cli, Command, Entity};
use superthread::output::PrettyPrint;
use superthread::{
    AssignedFilter, BoardListQuery, PageListQuery, SearchQuery, SuperthreadClient,
    SuperthreadError, TagQuery, Variant,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli);

    if let Some(rejected) = cli.command.unsupported() {
        eprintln!("Error: {rejected}");
        if let Some(hint) = rejected.hint {
            eprintln!("Hint: {hint}");
        }
        return ExitCode::FAILURE;
    }

    let client = match SuperthreadClient::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Hint: Set SUPERTHREAD_API_KEY environment variable");
            return ExitCode::FAILURE;
        }
    };

    match run(&client, cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            if let Some(wait) = e.retry_after() {
                eprintln!("Hint: Retry after {} seconds", wait.as_secs());
            }
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(cli: &Cli) {
    let default = if cli.verbose {
        "superthread=debug"
    } else if cli.quiet {
        "error"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(client: &SuperthreadClient, cli: Cli) -> superthread::Result<()> {
    let json = cli.json;
    match cli.command {
        Command::Me => {
            let me = client.users().me().await?;
            output(me, json)
        }
        Command::Members => {
            let ws = client.workspace(cli.workspace.as_deref())?;
            let members = client.users().members(&ws).await?;
            output_collection(&members, json)
        }
        Command::Get { entity, id, space } => {
            let ws = client.workspace(cli.workspace.as_deref())?;
            handle_get(client, &ws, entity, &id, space.as_deref(), json).await
        }
        Command::List {
            entity,
            space,
            archived,
        } => {
            let ws = client.workspace(cli.workspace.as_deref())?;
            handle_list(client, &ws, entity, space.as_deref(), archived, json).await
        }
        Command::Assigned {
            user,
            board,
            project,
        } => {
            let ws = client.workspace(cli.workspace.as_deref())?;
            let filter = AssignedFilter {
                board_id: board,
                project_id: project,
                ..Default::default()
            };
            let cards = client.cards().assigned(&ws, &user, &filter).await?;
            output_collection(&cards, json)
        }
        Command::Search { query, types } => {
            let ws = client.workspace(cli.workspace.as_deref())?;
            let query = SearchQuery {
                types,
                ..SearchQuery::new(query)
            };
            let results = client.search().query(&ws, &query).await?;
            output(results, json)
        }
        Command::Delete { entity, id } => {
            let ws = client.workspace(cli.workspace.as_deref())?;
            handle_delete(client, &ws, entity, &id, json).await
        }
    }
}

async fn handle_get(
    client: &SuperthreadClient,
    ws: &str,
    entity: Entity,
    id: &str,
    space: Option<&str>,
    json: bool,
) -> superthread::Result<()> {
    match entity {
        Entity::Card => output(client.cards().find(ws, id).await?, json),
        Entity::Board => output(client.boards().find(ws, id).await?, json),
        Entity::Space => output(client.spaces().find(ws, id).await?, json),
        Entity::Project => output(client.projects().find(ws, id).await?, json),
        Entity::Page => output(client.pages().find(ws, id).await?, json),
        Entity::Note => output(client.notes().find(ws, id).await?, json),
        Entity::Comment => output(client.comments().find(ws, id).await?, json),
        Entity::Sprint => {
            let space = require_space(entity, space)?;
            output(client.sprints().find(ws, id, space).await?, json)
        }
        Entity::Tag => Err(rejected(Action::Get, entity)),
    }
}

async fn handle_list(
    client: &SuperthreadClient,
    ws: &str,
    entity: Entity,
    space: Option<&str>,
    archived: bool,
    json: bool,
) -> superthread::Result<()> {
    let archived = archived.then_some(true);
    let collection = match entity {
        Entity::Board => {
            let query = BoardListQuery {
                archived,
                ..BoardListQuery::for_space(require_space(entity, space)?)
            };
            client.boards().list(ws, &query).await?
        }
        Entity::Space => client.spaces().list(ws).await?,
        Entity::Project => client.projects().list(ws).await?,
        Entity::Page => {
            let query = PageListQuery {
                space_id: space.map(str::to_string),
                archived,
                ..Default::default()
            };
            client.pages().list(ws, &query).await?
        }
        Entity::Note => client.notes().list(ws).await?,
        Entity::Sprint => {
            client
                .sprints()
                .list(ws, require_space(entity, space)?)
                .await?
        }
        Entity::Tag => {
            let query = TagQuery {
                project_id: space.map(str::to_string),
                ..Default::default()
            };
            client.cards().tags(ws, &query).await?
        }
        Entity::Card | Entity::Comment => return Err(rejected(Action::List, entity)),
    };
    output_collection(&collection, json)
}

async fn handle_delete(
    client: &SuperthreadClient,
    ws: &str,
    entity: Entity,
    id: &str,
    json: bool,
) -> superthread::Result<()> {
    let result = match entity {
        Entity::Card => client.cards().destroy(ws, id).await?,
        Entity::Board => client.boards().destroy(ws, id).await?,
        Entity::Space => client.spaces().destroy(ws, id).await?,
        Entity::Project => client.projects().destroy(ws, id).await?,
        Entity::Page => client.pages().destroy(ws, id).await?,
        Entity::Note => client.notes().destroy(ws, id).await?,
        Entity::Comment => client.comments().destroy(ws, id).await?,
        Entity::Tag => client.tags().destroy(ws, id).await?,
        Entity::Sprint => return Err(rejected(Action::Delete, entity)),
    };
    output(result, json)
}

fn require_space(entity: Entity, space: Option<&str>) -> superthread::Result<&str> {
    space.ok_or_else(|| {
        SuperthreadError::InvalidArgument(format!("--space required for {}s", entity.name()))
    })
}

fn rejected(action: Action, entity: Entity) -> SuperthreadError {
    SuperthreadError::InvalidArgument(format!(
        "{} {} not supported",
        action.name(),
        entity.name()
    ))
}

fn output<T: Variant>(item: T, json: bool) -> superthread::Result<()> {
    if json {
        print_json(&item.to_value())
    } else {
        println!("{}", item.into_resource().pretty_print());
        Ok(())
    }
}

fn output_collection(collection: &superthread::Collection, json: bool) -> superthread::Result<()> {
    if json {
        print_json(&collection.to_value())
    } else {
        println!("{}", collection.pretty_print());
        Ok(())
    }
}

fn print_json(value: &Value) -> superthread::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
