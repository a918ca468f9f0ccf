//! Output formatting for CLI display.
//!
//! Provides the [`PrettyPrint`] trait for human-readable output
//! as an alternative to JSON serialization.

use chrono::{TimeZone, Utc};
use serde_json::Value;
use tabled::builder::Builder;

use crate::object::{ApiValue, DynamicObject};
use crate::objects::{Collection, Priority, Resource};
use crate::registry::VariantKind;

const OMISSION: &str = "...";
const CELL_WIDTH: usize = 50;
const EMPTY: &str = "-";

/// Shorten `text` to at most `max` characters, ending in `...` when cut.
///
/// ```
/// use superthread::output::truncate;
///
/// assert_eq!(truncate("short", 10), "short");
/// assert_eq!(truncate("a long card title", 10), "a long ...");
/// ```
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let keep = max.saturating_sub(OMISSION.len());
    let mut out: String = text.chars().take(keep).collect();
    out.push_str(OMISSION);
    out
}

/// Trait for human-readable output.
///
/// Implemented by response types to provide formatted output
/// suitable for terminal display when `--json` is not specified.
pub trait PrettyPrint {
    fn pretty_print(&self) -> String;
}

impl PrettyPrint for Resource {
    fn pretty_print(&self) -> String {
        let object = self.object();
        let id = object
            .str_field("id")
            .or_else(|| object.str_field("user_id"))
            .unwrap_or(EMPTY);
        let header = format!("{}: {}", self.kind().name(), id);
        let divider = "─".repeat(header.chars().count().max(30));

        let fields: Vec<&str> = if self.fields().is_empty() {
            object.keys().collect()
        } else {
            self.fields()
                .iter()
                .copied()
                .filter(|field| object.has(field))
                .collect()
        };
        let width = fields.iter().map(|f| f.len()).max().unwrap_or(0) + 2;

        let mut lines = vec![header, divider];
        for field in fields {
            let label = format!("{field}:");
            lines.push(format!("{label:<width$}{}", format_field(object, field)));
        }
        lines.join("\n")
    }
}

impl PrettyPrint for DynamicObject {
    fn pretty_print(&self) -> String {
        Resource::construct(self.clone()).pretty_print()
    }
}

impl PrettyPrint for ApiValue {
    fn pretty_print(&self) -> String {
        match self {
            ApiValue::Object(resource) => resource.pretty_print(),
            ApiValue::Array(items) => items
                .iter()
                .map(PrettyPrint::pretty_print)
                .collect::<Vec<_>>()
                .join("\n\n"),
            other => format_value(&other.to_value(), None),
        }
    }
}

impl PrettyPrint for Collection {
    fn pretty_print(&self) -> String {
        if self.is_empty() {
            return "No results".to_string();
        }

        let objects: Vec<&Resource> = self.iter().filter_map(ApiValue::as_resource).collect();
        let columns = match objects.first() {
            Some(first) => table_columns(first),
            None => vec!["value"],
        };

        let mut builder = Builder::default();
        builder.push_record(columns.iter().copied());
        if objects.is_empty() {
            for item in self.iter() {
                builder.push_record([format_value(&item.to_value(), None)]);
            }
        } else {
            for resource in objects {
                let object = resource.object();
                builder.push_record(columns.iter().map(|column| format_field(object, column)));
            }
        }

        let mut out = builder.build().to_string();
        if let Some(cursor) = self.meta("cursor").and_then(Value::as_str) {
            out.push_str(&format!("\n\nMore results available (cursor {cursor})"));
        }
        out
    }
}

/// Columns shown when listing resources of one kind.
fn table_columns(resource: &Resource) -> Vec<&'static str> {
    match resource.kind() {
        VariantKind::Card | VariantKind::LinkedCard => {
            vec!["id", "title", "status", "priority", "list_title"]
        }
        VariantKind::User => vec!["user_id", "display_name", "email", "role"],
        VariantKind::Member => vec!["user_id", "role"],
        VariantKind::Project | VariantKind::Sprint => vec!["id", "title", "status"],
        VariantKind::Comment => vec!["id", "user_id", "content"],
        VariantKind::Tag => vec!["id", "name", "color", "total_cards"],
        VariantKind::List => vec!["id", "title", "color"],
        VariantKind::Checklist => vec!["id", "title"],
        VariantKind::ChecklistItem => vec!["id", "title", "checked"],
        VariantKind::Board | VariantKind::Space | VariantKind::Page | VariantKind::Note => {
            vec!["id", "title"]
        }
        VariantKind::Generic => {
            let object = resource.object();
            let preferred: Vec<&'static str> = ["id", "title", "name", "type", "status"]
                .into_iter()
                .filter(|field| object.has(field))
                .collect();
            if preferred.is_empty() {
                vec!["id"]
            } else {
                preferred
            }
        }
    }
}

fn format_field(object: &DynamicObject, field: &str) -> String {
    match object.get_raw(field) {
        Some(value) => format_value(value, Some(field)),
        None => EMPTY.to_string(),
    }
}

fn format_value(value: &Value, field: Option<&str>) -> String {
    match value {
        Value::Null => EMPTY.to_string(),
        Value::String(text) => truncate(&text.replace('\n', " "), CELL_WIDTH),
        Value::Number(n) => match (field, n.as_i64()) {
            (Some("priority"), Some(level)) => Priority::from_level(level)
                .map(|p| p.name().to_string())
                .unwrap_or_else(|| level.to_string()),
            (Some(name), Some(ms)) if is_time_field(name) => format_millis(ms),
            _ => n.to_string(),
        },
        Value::Bool(b) => (if *b { "yes" } else { "no" }).to_string(),
        Value::Array(items) => format!("[{} items]", items.len()),
        Value::Object(_) => truncate(&value.to_string(), CELL_WIDTH),
    }
}

fn is_time_field(name: &str) -> bool {
    name.starts_with("time_") || name.ends_with("_date")
}

fn format_millis(ms: i64) -> String {
    match Utc.timestamp_millis_opt(ms).single() {
        Some(time) => time.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        None => ms.to_string(),
    }
}
