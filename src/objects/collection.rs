//! List response envelopes.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::object::{ApiValue, DynamicObject};
use crate::objects::{Resource, Variant};
use crate::registry::VariantKind;

/// Envelope keys checked, in this order, when no items key is given.
pub const ITEMS_KEYS: [&str; 15] = [
    "items", "cards", "boards", "lists", "users", "projects", "spaces", "sprints", "pages",
    "notes", "comments", "tags", "members", "results", "data",
];

const BARE_ARRAY_KEY: &str = "items";

/// Items of a list response plus the rest of its envelope.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Collection {
    /// The wrapped items, in response order.
    pub items: Vec<ApiValue>,
    /// The envelope without the items key (cursors, counts).
    #[serde(skip)]
    metadata: Map<String, Value>,
    #[serde(skip)]
    items_key: Option<String>,
}

impl Collection {
    /// Build a collection from a list response.
    ///
    /// A bare array is treated as `{"items": [...]}`. Without `items_key`
    /// the first array found under [`ITEMS_KEYS`] wins, then the first
    /// array value in envelope order. A key whose value is not an array
    /// yields no items and stays in the metadata. With `item_variant`,
    /// every mapping item is wrapped as that variant regardless of its
    /// `type`.
    pub fn from_response(
        raw: Value,
        items_key: Option<&str>,
        item_variant: Option<VariantKind>,
    ) -> Self {
        let (mut envelope, items_key) = match raw {
            Value::Array(items) => {
                let mut envelope = Map::new();
                envelope.insert(BARE_ARRAY_KEY.to_string(), Value::Array(items));
                (envelope, Some(BARE_ARRAY_KEY.to_string()))
            }
            Value::Object(map) => {
                let key = match items_key {
                    Some(key) => Some(key.to_string()),
                    None => detect_items_key(&map),
                };
                (map, key)
            }
            _ => (Map::new(), items_key.map(str::to_string)),
        };

        let is_array = items_key
            .as_deref()
            .is_some_and(|key| matches!(envelope.get(key), Some(Value::Array(_))));
        let source = match (is_array, items_key.as_deref()) {
            (true, Some(key)) => envelope.shift_remove(key),
            _ => None,
        };
        let items = match source {
            Some(Value::Array(items)) => items
                .into_iter()
                .map(|item| wrap_item(item, item_variant))
                .collect(),
            _ => Vec::new(),
        };

        tracing::trace!(items_key = ?items_key, count = items.len(), "built collection");

        Self {
            items,
            metadata: envelope,
            items_key,
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ApiValue> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn first(&self) -> Option<&ApiValue> {
        self.items.first()
    }

    pub fn last(&self) -> Option<&ApiValue> {
        self.items.last()
    }

    pub fn get(&self, index: usize) -> Option<&ApiValue> {
        self.items.get(index)
    }

    pub fn to_vec(&self) -> Vec<ApiValue> {
        self.items.clone()
    }

    pub fn into_vec(self) -> Vec<ApiValue> {
        self.items
    }

    /// Every item converted back to plain JSON.
    pub fn to_value_array(&self) -> Vec<Value> {
        self.items.iter().map(ApiValue::to_value).collect()
    }

    /// The envelope without the items key.
    pub fn metadata(&self) -> &Map<String, Value> {
        &self.metadata
    }

    /// One metadata field, such as a pagination cursor.
    pub fn meta(&self, field: &str) -> Option<&Value> {
        self.metadata.get(field)
    }

    /// The key the items were read from. `None` when nothing matched.
    pub fn items_key(&self) -> Option<&str> {
        self.items_key.as_deref()
    }

    /// The items as a JSON array.
    pub fn to_value(&self) -> Value {
        Value::Array(self.to_value_array())
    }

    /// Items that hold a `T`, skipping everything else.
    pub fn variants<T: Variant>(&self) -> Vec<&T> {
        self.items
            .iter()
            .filter_map(ApiValue::as_resource)
            .filter_map(T::from_resource)
            .collect()
    }

    /// Every mapping item re-wrapped as `T`, whatever variant it was.
    pub fn into_variants<T: Variant>(self) -> Vec<T> {
        self.items
            .into_iter()
            .filter_map(ApiValue::into_resource)
            .map(Resource::into_variant)
            .collect()
    }
}

fn detect_items_key(map: &Map<String, Value>) -> Option<String> {
    ITEMS_KEYS
        .iter()
        .find(|key| matches!(map.get(**key), Some(Value::Array(_))))
        .map(|key| key.to_string())
        .or_else(|| {
            map.iter()
                .find(|(_, value)| value.is_array())
                .map(|(key, _)| key.clone())
        })
}

fn wrap_item(item: Value, variant: Option<VariantKind>) -> ApiValue {
    match (item, variant) {
        (Value::Object(map), Some(kind)) => {
            ApiValue::Object(Resource::with_kind(kind, DynamicObject::from(map)))
        }
        (item, _) => ApiValue::from(item),
    }
}

impl IntoIterator for Collection {
    type Item = ApiValue;
    type IntoIter = std::vec::IntoIter<ApiValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a Collection {
    type Item = &'a ApiValue;
    type IntoIter = std::slice::Iter<'a, ApiValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl std::ops::Index<usize> for Collection {
    type Output = ApiValue;

    fn index(&self, index: usize) -> &ApiValue {
        &self.items[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objects::{Board, Card, User};
    use serde_json::json;

    #[test]
    fn test_priority_order_beats_envelope_order() {
        let raw = json!({"boards": [{"id": 1}], "cards": [{"id": 2}]});
        let collection = Collection::from_response(raw, None, None);

        assert_eq!(collection.items_key(), Some("cards"));
        assert_eq!(collection.len(), 1);
        assert_eq!(collection[0].as_object().unwrap().i64_field("id"), Some(2));
        assert!(collection.metadata().contains_key("boards"));
        assert!(!collection.metadata().contains_key("cards"));
    }

    #[test]
    fn test_later_priority_key_wins_over_envelope_order() {
        let raw = json!({"tags": [{"id": "t"}], "boards": [{"id": "b"}]});
        let collection = Collection::from_response(raw, None, None);

        assert_eq!(collection.items_key(), Some("boards"));
        assert_eq!(collection[0].as_object().unwrap().str_field("id"), Some("b"));
        assert!(collection.metadata().contains_key("tags"));
    }

    #[test]
    fn test_explicit_key_with_non_array_stays_in_metadata() {
        let raw = json!({"cards": {"a": 1}, "cursor": "n"});
        let collection = Collection::from_response(raw, Some("cards"), None);

        assert!(collection.is_empty());
        assert_eq!(collection.meta("cards"), Some(&json!({"a": 1})));
        assert_eq!(collection.meta("cursor"), Some(&json!("n")));
    }

    #[test]
    fn test_bare_array() {
        let collection = Collection::from_response(json!([{"id": 1}, {"id": 2}]), None, None);
        assert_eq!(collection.len(), 2);
        assert!(collection.metadata().is_empty());
        assert_eq!(collection.items_key(), Some("items"));
    }

    #[test]
    fn test_explicit_key_and_metadata() {
        let raw = json!({
            "epics": [{"id": "e1"}, {"id": "e2"}],
            "cursor": "next",
            "count": 2
        });
        let collection = Collection::from_response(raw, Some("epics"), None);

        assert_eq!(collection.len(), 2);
        assert_eq!(collection.meta("cursor"), Some(&json!("next")));
        assert_eq!(collection.metadata().len(), 2);
        assert!(collection.meta("epics").is_none());
    }

    #[test]
    fn test_missing_explicit_key_is_empty() {
        let raw = json!({"cards": [{"id": 1}]});
        let collection = Collection::from_response(raw, Some("boards"), None);
        assert!(collection.is_empty());
        assert!(collection.first().is_none());
        assert!(collection.metadata().contains_key("cards"));
    }

    #[test]
    fn test_fallback_to_first_array_value() {
        let raw = json!({"total": 5, "widgets": [1, 2], "gadgets": [3]});
        let collection = Collection::from_response(raw, None, None);
        assert_eq!(collection.items_key(), Some("widgets"));
        assert_eq!(collection.to_value(), json!([1, 2]));
        assert_eq!(collection.metadata().len(), 2);
    }

    #[test]
    fn test_no_array_anywhere() {
        let collection = Collection::from_response(json!({"total": 0}), None, None);
        assert!(collection.is_empty());
        assert_eq!(collection.items_key(), None);
        assert_eq!(collection.meta("total"), Some(&json!(0)));
    }

    #[test]
    fn test_priority_key_must_be_an_array() {
        let raw = json!({"items": "not a list", "boards": [{"id": "b"}]});
        let collection = Collection::from_response(raw, None, None);
        assert_eq!(collection.items_key(), Some("boards"));
        assert_eq!(collection.meta("items"), Some(&json!("not a list")));
    }

    #[test]
    fn test_items_dispatch_on_type() {
        let raw = json!({"results": [{"type": "card", "id": "c"}, {"type": "board", "id": "b"}, 7]});
        let collection = Collection::from_response(raw, None, None);

        assert_eq!(collection.len(), 3);
        assert_eq!(collection.variants::<Card>().len(), 1);
        assert_eq!(collection.variants::<Board>()[0].id(), Some("b"));
        assert_eq!(collection.last().unwrap().as_i64(), Some(7));
    }

    #[test]
    fn test_explicit_variant_bypasses_discriminator() {
        let raw = json!({"members": [{"type": "board", "user_id": "u1"}, {"user_id": "u2"}]});
        let collection = Collection::from_response(raw, None, Some(VariantKind::User));

        let users = collection.variants::<User>();
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].id(), Some("u1"));
        assert_eq!(users[1].id(), Some("u2"));
    }

    #[test]
    fn test_to_value_array_round_trips_items() {
        let items = json!([{"type": "tag", "name": "x"}, {"nested": {"a": [1]}}]);
        let collection = Collection::from_response(json!({"tags": items.clone()}), None, None);
        assert_eq!(Value::Array(collection.to_value_array()), items);
    }

    #[test]
    fn test_into_variants_rewraps() {
        let raw = json!({"cards": [{"id": "c1"}, {"type": "board", "id": "c2"}]});
        let cards: Vec<Card> = Collection::from_response(raw, None, None).into_variants();
        let ids: Vec<_> = cards.iter().map(|c| c.id().unwrap().to_string()).collect();
        assert_eq!(ids, vec!["c1", "c2"]);
    }

    #[test]
    fn test_iteration() {
        let collection = Collection::from_response(json!([1, 2, 3]), None, None);
        let sum: i64 = collection.iter().filter_map(ApiValue::as_i64).sum();
        assert_eq!(sum, 6);
        assert_eq!((&collection).into_iter().count(), 3);
        assert_eq!(collection.into_iter().count(), 3);
    }
}
