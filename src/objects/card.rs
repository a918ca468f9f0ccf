use std::fmt;

use crate::object::DynamicObject;
use crate::objects::{Checklist, Tag, Variant};

variant! {
    /// A card (task or issue).
    pub struct Card;
    fields {
        id: str,
        team_id: str,
        project_id: str,
        title: str,
        content: str,
        schema: i64,
        status: str,
        priority: i64,
        estimate: i64,
        board_id: str,
        board_title: str,
        list_id: str,
        list_title: str,
        list_color: str,
        sprint_id: str,
        owner_id: str,
        user_id: str,
        user_id_updated: str,
        start_date: millis,
        due_date: millis,
        completed_date: millis,
        time_created: millis,
        time_updated: millis,
        total_comments: i64,
        total_files: i64,
        is_watching: bool,
        is_bookmarked: bool,
        archived_list: bool,
        archived_board: bool,
    }
}

impl Card {
    time_accessor! {
        start_time => start_date,
        due_time => due_date,
        completed_time => completed_date,
        created_at => time_created,
        updated_at => time_updated,
    }

    pub fn members(&self) -> Vec<Member> {
        self.object.variant_list("members")
    }

    pub fn checklists(&self) -> Vec<Checklist> {
        self.object.variant_list("checklists")
    }

    pub fn tags(&self) -> Vec<Tag> {
        self.object.variant_list("tags")
    }

    pub fn child_cards(&self) -> Vec<Card> {
        self.object.variant_list("child_cards")
    }

    pub fn linked_cards(&self) -> Vec<LinkedCard> {
        self.object.variant_list("linked_cards")
    }

    /// Summary of the parent card, if this is a child card.
    pub fn parent_card(&self) -> Option<DynamicObject> {
        self.object.object_field("parent_card")
    }

    pub fn epic(&self) -> Option<DynamicObject> {
        self.object.object_field("epic")
    }

    /// Archive info (`user_id`, `time_archived`) when archived.
    pub fn archived(&self) -> Option<DynamicObject> {
        self.object.object_field("archived")
    }

    pub fn is_archived(&self) -> bool {
        self.object.truthy("archived")
    }

    pub fn is_watching_card(&self) -> bool {
        self.object.truthy("is_watching")
    }

    pub fn is_bookmarked_card(&self) -> bool {
        self.object.truthy("is_bookmarked")
    }

    pub fn priority_level(&self) -> Option<Priority> {
        self.priority().and_then(Priority::from_level)
    }

    /// `"urgent"`, `"high"`, `"medium"` or `"low"`.
    pub fn priority_name(&self) -> Option<&'static str> {
        self.priority_level().map(Priority::name)
    }
}

/// Card priority. Lower numbers are more urgent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Priority {
    Urgent = 1,
    High = 2,
    Medium = 3,
    Low = 4,
}

impl Priority {
    pub fn from_level(level: i64) -> Option<Self> {
        match level {
            1 => Some(Self::Urgent),
            2 => Some(Self::High),
            3 => Some(Self::Medium),
            4 => Some(Self::Low),
            _ => None,
        }
    }

    pub fn level(self) -> i64 {
        self as i64
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Urgent => "urgent",
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

variant! {
    /// A member assigned to a card or space.
    pub struct Member;
    fields {
        user_id: str,
        role: str,
        assigned_date: millis,
    }
}

impl Member {
    time_accessor! { assigned_at => assigned_date }
}

variant! {
    /// A card related to another card.
    pub struct LinkedCard;
    fields {
        id: str,
        team_id: str,
        project_id: str,
        title: str,
        content: str,
        schema: i64,
        status: str,
        priority: i64,
        estimate: i64,
        board_id: str,
        board_title: str,
        list_id: str,
        list_title: str,
        list_color: str,
        sprint_id: str,
        owner_id: str,
        user_id: str,
        user_id_updated: str,
        start_date: millis,
        due_date: millis,
        completed_date: millis,
        time_created: millis,
        time_updated: millis,
        total_comments: i64,
        total_files: i64,
        is_watching: bool,
        is_bookmarked: bool,
        archived_list: bool,
        archived_board: bool,
        linked_card_type: str,
    }
}

impl LinkedCard {
    /// One of `blocks`, `blocked_by`, `related` or `duplicates`.
    pub fn relationship(&self) -> Option<&str> {
        self.linked_card_type()
    }

    /// The same data viewed as a full [`Card`].
    pub fn as_card(&self) -> Card {
        Card::from_object(self.object.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn card(value: Value) -> Card {
        match value {
            Value::Object(map) => Card::from_map(map),
            _ => panic!("expected a JSON object"),
        }
    }

    #[test]
    fn test_documented_fields() {
        let card = card(json!({
            "type": "card",
            "id": "crd_1",
            "title": "Fix login",
            "status": "started",
            "priority": 2,
            "board_id": "b1",
            "is_watching": true,
            "time_created": 1_700_000_000_000_i64
        }));

        assert_eq!(card.id(), Some("crd_1"));
        assert_eq!(card.title(), Some("Fix login"));
        assert_eq!(card.status(), Some("started"));
        assert_eq!(card.board_id(), Some("b1"));
        assert_eq!(card.is_watching(), Some(true));
        assert_eq!(card.time_created(), Some(1_700_000_000_000));
        assert_eq!(card.object().discriminator(), Some("card"));
        assert!(card.due_date().is_none());
        assert!(card.sprint_id().is_none());
    }

    #[test]
    fn test_priority_names() {
        let names: Vec<Option<&str>> = [1, 2, 3, 4, 5]
            .into_iter()
            .map(|p| card(json!({"priority": p})).priority_name())
            .collect();
        assert_eq!(
            names,
            vec![Some("urgent"), Some("high"), Some("medium"), Some("low"), None]
        );
        assert!(card(json!({})).priority_name().is_none());
        assert_eq!(Priority::Urgent.to_string(), "urgent");
        assert!(Priority::Urgent < Priority::Low);
    }

    #[test]
    fn test_nested_collections() {
        let card = card(json!({
            "members": [{"user_id": "u1", "role": "admin", "assigned_date": 1000}, "junk"],
            "checklists": [{"id": "cl1", "items": []}],
            "tags": [{"id": "t1", "name": "bug"}],
            "child_cards": [{"id": "c2"}],
            "linked_cards": [{"id": "c3", "linked_card_type": "blocks"}]
        }));

        let members = card.members();
        assert_eq!(members.len(), 1);
        assert_eq!(members[0].role(), Some("admin"));
        assert_eq!(members[0].assigned_at().unwrap().timestamp(), 1);

        assert_eq!(card.checklists()[0].id(), Some("cl1"));
        assert_eq!(card.tags()[0].name(), Some("bug"));
        assert_eq!(card.child_cards()[0].id(), Some("c2"));
        assert_eq!(card.linked_cards()[0].relationship(), Some("blocks"));
    }

    #[test]
    fn test_missing_nested_collections_are_empty() {
        let card = card(json!({"id": "c"}));
        assert!(card.members().is_empty());
        assert!(card.tags().is_empty());
        assert!(card.parent_card().is_none());
        assert!(card.epic().is_none());
    }

    #[test]
    fn test_archived_and_flags() {
        let archived = card(json!({
            "archived": {"user_id": "u1", "time_archived": 5},
            "is_bookmarked": true,
            "is_watching": false
        }));
        assert!(archived.is_archived());
        assert_eq!(archived.archived().unwrap().str_field("user_id"), Some("u1"));
        assert!(archived.is_bookmarked_card());
        assert!(!archived.is_watching_card());

        let active = card(json!({"archived": null}));
        assert!(!active.is_archived());
        assert!(active.archived().is_none());
    }

    #[test]
    fn test_parent_and_epic_are_generic() {
        let card = card(json!({
            "parent_card": {"type": "card", "card_id": "p1"},
            "epic": {"id": "e1", "title": "Q3"}
        }));
        assert_eq!(card.parent_card().unwrap().str_field("card_id"), Some("p1"));
        assert_eq!(card.epic().unwrap().str_field("title"), Some("Q3"));
    }

    #[test]
    fn test_time_conversions() {
        let card = card(json!({
            "start_date": 1_000,
            "due_date": 2_000,
            "completed_date": null,
            "time_updated": 3_000
        }));
        assert_eq!(card.start_time().unwrap().timestamp(), 1);
        assert_eq!(card.due_time().unwrap().timestamp(), 2);
        assert!(card.completed_time().is_none());
        assert_eq!(card.updated_at().unwrap().timestamp(), 3);
        assert!(card.created_at().is_none());
    }

    #[test]
    fn test_accessors_see_writes() {
        let mut card = card(json!({"title": "Old"}));
        card.object_mut().set("title", "New");
        assert_eq!(card.title(), Some("New"));
    }

    #[test]
    fn test_linked_card_as_card() {
        let linked = LinkedCard::from_map(
            json!({"id": "c9", "title": "Dep", "linked_card_type": "blocked_by", "tags": [{"name": "x"}]})
                .as_object()
                .unwrap()
                .clone(),
        );
        assert_eq!(linked.title(), Some("Dep"));
        let card = linked.as_card();
        assert_eq!(card.id(), Some("c9"));
        assert_eq!(card.tags().len(), 1);
    }
}
