variant! {
    /// A checklist attached to a card.
    pub struct Checklist;
    fields {
        id: str,
        title: str,
        content: str,
        card_id: str,
        user_id: str,
        time_created: millis,
        time_updated: millis,
    }
}

impl Checklist {
    time_accessor! {
        created_at => time_created,
        updated_at => time_updated,
    }

    pub fn items(&self) -> Vec<ChecklistItem> {
        self.object.variant_list("items")
    }

    pub fn completed_count(&self) -> usize {
        self.items().iter().filter(|item| item.is_checked()).count()
    }

    pub fn total_count(&self) -> usize {
        self.items().len()
    }

    /// Percentage of checked items, rounded to one decimal place.
    pub fn progress(&self) -> f64 {
        let total = self.total_count();
        if total == 0 {
            return 0.0;
        }
        let percent = self.completed_count() as f64 / total as f64 * 100.0;
        (percent * 10.0).round() / 10.0
    }

    /// True when there is at least one item and every item is checked.
    pub fn is_complete(&self) -> bool {
        let total = self.total_count();
        total > 0 && self.completed_count() == total
    }
}

variant! {
    pub struct ChecklistItem;
    fields {
        id: str,
        title: str,
        content: str,
        checklist_id: str,
        user_id: str,
        checked: bool,
        time_created: millis,
        time_updated: millis,
    }
}

impl ChecklistItem {
    time_accessor! {
        created_at => time_created,
        updated_at => time_updated,
    }

    pub fn is_checked(&self) -> bool {
        self.object.truthy("checked")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objects::Variant;
    use serde_json::{json, Value};

    fn checklist(value: Value) -> Checklist {
        Checklist::from_map(value.as_object().unwrap().clone())
    }

    #[test]
    fn test_progress() {
        let list = checklist(json!({
            "items": [
                {"title": "a", "checked": true},
                {"title": "b", "checked": false},
                {"title": "c"}
            ]
        }));
        assert_eq!(list.total_count(), 3);
        assert_eq!(list.completed_count(), 1);
        assert_eq!(list.progress(), 33.3);
        assert!(!list.is_complete());
    }

    #[test]
    fn test_empty_checklist() {
        let list = checklist(json!({"title": "Nothing"}));
        assert_eq!(list.progress(), 0.0);
        assert!(!list.is_complete());
        assert_eq!(list.total_count(), 0);
    }

    #[test]
    fn test_complete_checklist() {
        let list = checklist(json!({
            "items": [{"checked": true}, {"checked": true}]
        }));
        assert_eq!(list.progress(), 100.0);
        assert!(list.is_complete());
    }

    #[test]
    fn test_two_thirds_rounds() {
        let list = checklist(json!({
            "items": [{"checked": true}, {"checked": true}, {"checked": false}]
        }));
        assert_eq!(list.progress(), 66.7);
    }

    #[test]
    fn test_item_fields() {
        let list = checklist(json!({
            "items": [{"id": "i1", "title": "Write specs", "checked": true, "checklist_id": "cl"}]
        }));
        let item = &list.items()[0];
        assert_eq!(item.id(), Some("i1"));
        assert_eq!(item.checked(), Some(true));
        assert_eq!(item.checklist_id(), Some("cl"));
        assert!(item.is_checked());
    }
}
