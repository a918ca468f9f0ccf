//! CLI argument parsing tests.

use clap::Parser;
use superthread::cli::{unsupported, Action, Cli, Command, Entity};

#[test]
fn test_cli_parses_get_subcommand() {
    let cli = Cli::parse_from(["superthread", "get", "card", "crd_1"]);

    assert!(!cli.json);
    match cli.command {
        Command::Get { entity, id, space } => {
            assert_eq!(entity, Entity::Card);
            assert_eq!(id, "crd_1");
            assert!(space.is_none());
        }
        _ => panic!("Expected Get command"),
    }
}

#[test]
fn test_cli_parses_list_subcommand() {
    let cli = Cli::parse_from(["superthread", "list", "boards", "--space", "spc_1", "--archived"]);

    match cli.command {
        Command::List {
            entity,
            space,
            archived,
        } => {
            assert_eq!(entity, Entity::Board);
            assert_eq!(space.as_deref(), Some("spc_1"));
            assert!(archived);
        }
        _ => panic!("Expected List command"),
    }
}

#[test]
fn test_global_json_flag() {
    // --json before subcommand
    let cli = Cli::parse_from(["superthread", "--json", "list", "projects"]);
    assert!(cli.json);

    // --json after subcommand (global flag)
    let cli = Cli::parse_from(["superthread", "list", "projects", "--json"]);
    assert!(cli.json);
}

#[test]
fn test_global_workspace_flag() {
    let cli = Cli::parse_from(["superthread", "-w", "ws_1", "me"]);
    assert_eq!(cli.workspace.as_deref(), Some("ws_1"));

    let cli = Cli::parse_from(["superthread", "members", "--workspace", "ws_2"]);
    assert_eq!(cli.workspace.as_deref(), Some("ws_2"));
    assert!(matches!(cli.command, Command::Members));
}

#[test]
fn test_verbosity_flags() {
    let cli = Cli::parse_from(["superthread", "-v", "me"]);
    assert!(cli.verbose);
    assert!(!cli.quiet);

    let cli = Cli::parse_from(["superthread", "me", "--quiet"]);
    assert!(cli.quiet);

    assert!(Cli::try_parse_from(["superthread", "-v", "-q", "me"]).is_err());
}

#[test]
fn test_assigned_and_search() {
    let cli = Cli::parse_from(["superthread", "assigned", "u_1", "--board", "b_1"]);
    match cli.command {
        Command::Assigned {
            user,
            board,
            project,
        } => {
            assert_eq!(user, "u_1");
            assert_eq!(board.as_deref(), Some("b_1"));
            assert!(project.is_none());
        }
        _ => panic!("Expected Assigned command"),
    }

    let cli = Cli::parse_from(["superthread", "search", "login bug", "--types", "card,page"]);
    match cli.command {
        Command::Search { query, types } => {
            assert_eq!(query, "login bug");
            assert_eq!(types, vec!["card", "page"]);
        }
        _ => panic!("Expected Search command"),
    }
}

#[test]
fn test_entity_variants() {
    let cases = [
        ("card", Entity::Card),
        ("boards", Entity::Board),
        ("space", Entity::Space),
        ("epic", Entity::Project),
        ("pages", Entity::Page),
        ("note", Entity::Note),
        ("sprints", Entity::Sprint),
        ("comment", Entity::Comment),
        ("tags", Entity::Tag),
    ];
    for (arg, expected) in cases {
        let cli = Cli::parse_from(["superthread", "delete", arg, "x"]);
        assert!(
            matches!(cli.command, Command::Delete { entity, .. } if entity == expected),
            "{arg} should parse as {expected:?}"
        );
    }
    assert_eq!(Entity::Sprint.name(), "sprint");
}

#[test]
fn test_unknown_entity_rejected() {
    assert!(Cli::try_parse_from(["superthread", "get", "widget", "x"]).is_err());
}

#[test]
fn test_unsupported_entity_commands() {
    let cli = Cli::parse_from(["superthread", "get", "tag", "t_1"]);
    let rejected = cli.command.unsupported().unwrap();
    assert_eq!(rejected.to_string(), "get tag not supported");
    assert_eq!(rejected.hint, Some("Use 'superthread list tags'"));

    let cli = Cli::parse_from(["superthread", "list", "cards"]);
    let rejected = cli.command.unsupported().unwrap();
    assert_eq!(rejected.entity, Entity::Card);
    assert!(rejected.hint.unwrap().starts_with("Use "));

    let rejected = unsupported(Action::Delete, Entity::Sprint).unwrap();
    assert_eq!(rejected.to_string(), "delete sprint not supported");
    assert!(rejected.hint.is_none());
    assert!(unsupported(Action::List, Entity::Comment).is_some());
}

#[test]
fn test_supported_entity_commands() {
    for args in [
        vec!["superthread", "get", "card", "c_1"],
        vec!["superthread", "get", "sprint", "s_1", "--space", "spc"],
        vec!["superthread", "list", "tags"],
        vec!["superthread", "delete", "tag", "t_1"],
        vec!["superthread", "me"],
    ] {
        let cli = Cli::parse_from(args.clone());
        assert!(cli.command.unsupported().is_none(), "{args:?} should be supported");
    }
}
