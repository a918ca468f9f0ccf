//! Schema-less response objects.
//!
//! A [`DynamicObject`] owns the JSON mapping it was built from and hands
//! out fields on demand. Nested mappings are wrapped on read, so the
//! backing data is never rewritten and always converts back unchanged.
//!
//! ```
//! use serde_json::json;
//! use superthread::{ApiValue, VariantKind};
//!
//! let value = ApiValue::from(json!({"id": "x1", "owner": {"type": "user", "user_id": "u1"}}));
//! let resource = value.as_resource().unwrap();
//!
//! assert_eq!(resource.get("id").as_str(), Some("x1"));
//! assert!(resource.get("missing").is_absent());
//! assert_eq!(resource.get("owner").as_resource().unwrap().kind(), VariantKind::User);
//! ```

use std::fmt;

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

use crate::objects::{Resource, Variant};
use crate::registry::DISCRIMINATOR_FIELD;

/// A JSON object with field access by name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DynamicObject {
    data: Map<String, Value>,
}

impl DynamicObject {
    /// An empty object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap arbitrary JSON, dispatching mappings on their `type` field.
    ///
    /// Sequences are wrapped element-wise and scalars pass through.
    pub fn construct(raw: Value) -> ApiValue {
        ApiValue::from(raw)
    }

    /// Read a field, wrapping mappings and sequences.
    ///
    /// Returns [`ApiValue::Absent`] for a missing field.
    pub fn get(&self, field: &str) -> ApiValue {
        match self.data.get(field) {
            Some(value) => ApiValue::from(value.clone()),
            None => ApiValue::Absent,
        }
    }

    /// Borrow the stored JSON for a field without wrapping it.
    pub fn get_raw(&self, field: &str) -> Option<&Value> {
        self.data.get(field)
    }

    /// Store a value, returning the previous one.
    ///
    /// Objects and variants convert into their backing mapping via `Into<Value>`.
    pub fn set(&mut self, field: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.data.insert(field.into(), value.into())
    }

    pub fn remove(&mut self, field: &str) -> Option<Value> {
        self.data.shift_remove(field)
    }

    /// Whether the field is present, even if it is `null`.
    pub fn has(&self, field: &str) -> bool {
        self.data.contains_key(field)
    }

    /// Boolean coercion of a field.
    ///
    /// Missing, `null` and `false` are false; every other value is true.
    /// A trailing `?` is ignored, so `"archived?"` reads `archived`.
    pub fn truthy(&self, field: &str) -> bool {
        let field = field.strip_suffix('?').unwrap_or(field);
        is_truthy(self.data.get(field))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.data.keys().map(String::as_str)
    }

    /// Iterate over fields with wrapped values.
    pub fn iter(&self) -> impl Iterator<Item = (&str, ApiValue)> {
        self.data
            .iter()
            .map(|(k, v)| (k.as_str(), ApiValue::from(v.clone())))
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The `type` discriminator, if it is a string.
    pub fn discriminator(&self) -> Option<&str> {
        self.str_field(DISCRIMINATOR_FIELD)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.data
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.data
    }

    /// Copy the backing mapping out as plain JSON.
    pub fn to_map(&self) -> Map<String, Value> {
        self.data.clone()
    }

    pub fn to_value(&self) -> Value {
        Value::Object(self.data.clone())
    }

    pub fn str_field(&self, field: &str) -> Option<&str> {
        self.data.get(field).and_then(Value::as_str)
    }

    pub fn i64_field(&self, field: &str) -> Option<i64> {
        self.data.get(field).and_then(Value::as_i64)
    }

    pub fn f64_field(&self, field: &str) -> Option<f64> {
        self.data.get(field).and_then(Value::as_f64)
    }

    pub fn bool_field(&self, field: &str) -> Option<bool> {
        self.data.get(field).and_then(Value::as_bool)
    }

    /// Integer milliseconds, accepting float encodings.
    pub fn millis_field(&self, field: &str) -> Option<i64> {
        let value = self.data.get(field)?;
        value
            .as_i64()
            .or_else(|| value.as_f64().map(|f| f.round() as i64))
    }

    /// A millisecond Unix timestamp as a UTC time.
    pub fn timestamp_field(&self, field: &str) -> Option<DateTime<Utc>> {
        self.millis_field(field)
            .and_then(|ms| Utc.timestamp_millis_opt(ms).single())
    }

    /// A nested mapping as a generic object, without type dispatch.
    pub fn object_field(&self, field: &str) -> Option<DynamicObject> {
        match self.data.get(field) {
            Some(Value::Object(map)) => Some(DynamicObject::from(map.clone())),
            _ => None,
        }
    }

    /// A nested sequence of mappings, each wrapped as `T`.
    ///
    /// Missing fields give an empty list; non-mapping elements are skipped.
    pub fn variant_list<T: Variant>(&self, field: &str) -> Vec<T> {
        match self.data.get(field) {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(|item| match item {
                    Value::Object(map) => Some(T::from_map(map.clone())),
                    _ => None,
                })
                .collect(),
            _ => Vec::new(),
        }
    }
}

fn is_truthy(value: Option<&Value>) -> bool {
    !matches!(value, None | Some(Value::Null) | Some(Value::Bool(false)))
}

impl From<Map<String, Value>> for DynamicObject {
    fn from(data: Map<String, Value>) -> Self {
        Self { data }
    }
}

impl From<DynamicObject> for Value {
    fn from(object: DynamicObject) -> Self {
        Value::Object(object.data)
    }
}

impl From<DynamicObject> for Map<String, Value> {
    fn from(object: DynamicObject) -> Self {
        object.data
    }
}

impl PartialEq<Map<String, Value>> for DynamicObject {
    fn eq(&self, other: &Map<String, Value>) -> bool {
        &self.data == other
    }
}

impl fmt::Display for DynamicObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match serde_json::to_string(&self.data) {
            Ok(json) => f.write_str(&json),
            Err(_) => Err(fmt::Error),
        }
    }
}

/// A wrapped JSON value.
///
/// Mappings become a [`Resource`], chosen by their discriminator.
/// `Absent` marks a field that was not present at all.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ApiValue {
    Absent,
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Array(Vec<ApiValue>),
    Object(Resource),
}

impl ApiValue {
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// True for both `null` and a missing field.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Absent | Self::Null)
    }

    pub fn truthy(&self) -> bool {
        !matches!(self, Self::Absent | Self::Null | Self::Bool(false))
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => n.as_f64(),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[ApiValue]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_resource(&self) -> Option<&Resource> {
        match self {
            Self::Object(resource) => Some(resource),
            _ => None,
        }
    }

    pub fn into_resource(self) -> Option<Resource> {
        match self {
            Self::Object(resource) => Some(resource),
            _ => None,
        }
    }

    /// The backing object of a wrapped mapping, whatever its variant.
    pub fn as_object(&self) -> Option<&DynamicObject> {
        self.as_resource().map(Resource::object)
    }

    /// Convert back to plain JSON. `Absent` becomes `null`.
    pub fn to_value(&self) -> Value {
        match self {
            Self::Absent | Self::Null => Value::Null,
            Self::Bool(b) => Value::Bool(*b),
            Self::Number(n) => Value::Number(n.clone()),
            Self::String(s) => Value::String(s.clone()),
            Self::Array(items) => Value::Array(items.iter().map(Self::to_value).collect()),
            Self::Object(resource) => resource.object().to_value(),
        }
    }
}

impl From<Value> for ApiValue {
    fn from(raw: Value) -> Self {
        match raw {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(b),
            Value::Number(n) => Self::Number(n),
            Value::String(s) => Self::String(s),
            Value::Array(items) => Self::Array(items.into_iter().map(Self::from).collect()),
            Value::Object(map) => Self::Object(Resource::construct(DynamicObject::from(map))),
        }
    }
}

impl From<ApiValue> for Value {
    fn from(value: ApiValue) -> Self {
        match value {
            ApiValue::Absent | ApiValue::Null => Value::Null,
            ApiValue::Bool(b) => Value::Bool(b),
            ApiValue::Number(n) => Value::Number(n),
            ApiValue::String(s) => Value::String(s),
            ApiValue::Array(items) => Value::Array(items.into_iter().map(Value::from).collect()),
            ApiValue::Object(resource) => resource.into_object().into(),
        }
    }
}
