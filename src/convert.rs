//! Turning parsed response bodies into objects and collections.

use serde_json::{json, Value};

use crate::error::{Result, SuperthreadError};
use crate::object::{ApiValue, DynamicObject};
use crate::objects::{Collection, Resource, Variant};
use crate::registry::VariantKind;

/// Body substituted for empty and `204 No Content` responses.
pub fn success_value() -> Value {
    json!({ "success": true })
}

/// Hints for [`convert`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConvertOptions {
    /// Wrap mappings as this variant instead of dispatching on `type`.
    pub variant: Option<VariantKind>,
    /// Envelope key holding a single entity.
    pub unwrap_key: Option<String>,
    /// Envelope key holding the items of a list.
    pub items_key: Option<String>,
    /// Produce a [`Collection`].
    pub as_collection: bool,
}

impl ConvertOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Options for a single entity nested under `unwrap_key`.
    pub fn object(variant: VariantKind, unwrap_key: &str) -> Self {
        Self::new().variant(variant).unwrap_key(unwrap_key)
    }

    /// Options for a list whose items sit under `items_key`.
    pub fn collection(items_key: &str, variant: Option<VariantKind>) -> Self {
        let mut options = Self::new().items_key(items_key).as_collection();
        options.variant = variant;
        options
    }

    #[must_use]
    pub fn variant(mut self, variant: VariantKind) -> Self {
        self.variant = Some(variant);
        self
    }

    #[must_use]
    pub fn unwrap_key(mut self, key: impl Into<String>) -> Self {
        self.unwrap_key = Some(key.into());
        self
    }

    #[must_use]
    pub fn items_key(mut self, key: impl Into<String>) -> Self {
        self.items_key = Some(key.into());
        self
    }

    #[must_use]
    pub fn as_collection(mut self) -> Self {
        self.as_collection = true;
        self
    }
}

/// The result of a conversion.
#[derive(Debug, Clone, PartialEq)]
pub enum Converted {
    Value(ApiValue),
    Collection(Collection),
}

impl Converted {
    pub fn as_value(&self) -> Option<&ApiValue> {
        match self {
            Self::Value(value) => Some(value),
            Self::Collection(_) => None,
        }
    }

    pub fn as_collection(&self) -> Option<&Collection> {
        match self {
            Self::Collection(collection) => Some(collection),
            Self::Value(_) => None,
        }
    }

    pub fn into_value(self) -> Result<ApiValue> {
        match self {
            Self::Value(value) => Ok(value),
            Self::Collection(_) => Err(unexpected("a single value", "a collection")),
        }
    }

    pub fn into_collection(self) -> Result<Collection> {
        match self {
            Self::Collection(collection) => Ok(collection),
            Self::Value(value) => Err(unexpected("a collection", describe(&value))),
        }
    }

    /// The converted mapping as `T`.
    pub fn into_variant<T: Variant>(self) -> Result<T> {
        match self.into_value()? {
            ApiValue::Object(resource) => Ok(resource.into_variant()),
            other => Err(unexpected("an object", describe(&other))),
        }
    }

    /// The converted sequence with every mapping as `T`.
    pub fn into_variant_list<T: Variant>(self) -> Result<Vec<T>> {
        match self {
            Self::Collection(collection) => Ok(collection.into_variants()),
            Self::Value(ApiValue::Array(items)) => Ok(items
                .into_iter()
                .filter_map(ApiValue::into_resource)
                .map(Resource::into_variant)
                .collect()),
            Self::Value(other) => Err(unexpected("an array", describe(&other))),
        }
    }

    /// Back to plain JSON. A collection gives its items array.
    pub fn to_value(&self) -> Value {
        match self {
            Self::Value(value) => value.to_value(),
            Self::Collection(collection) => collection.to_value(),
        }
    }
}

/// Convert a parsed response body according to `options`.
///
/// `unwrap_key` is applied first, and only when the body is a mapping
/// that has that key. Then a collection, an explicit variant or the
/// discriminator decides the shape.
pub fn convert(raw: Value, options: &ConvertOptions) -> Converted {
    let payload = match (raw, options.unwrap_key.as_deref()) {
        (Value::Object(mut map), Some(key)) if map.contains_key(key) => {
            map.shift_remove(key).unwrap_or(Value::Null)
        }
        (raw, _) => raw,
    };

    if options.as_collection {
        return Converted::Collection(Collection::from_response(
            payload,
            options.items_key.as_deref(),
            options.variant,
        ));
    }

    match options.variant {
        Some(kind) => Converted::Value(construct_as(payload, kind)),
        None => Converted::Value(DynamicObject::construct(payload)),
    }
}

/// Wrap mappings as `kind`. Sequences are wrapped element-wise.
fn construct_as(raw: Value, kind: VariantKind) -> ApiValue {
    match raw {
        Value::Object(map) => ApiValue::Object(Resource::with_kind(kind, DynamicObject::from(map))),
        Value::Array(items) => {
            ApiValue::Array(items.into_iter().map(|item| construct_as(item, kind)).collect())
        }
        scalar => ApiValue::from(scalar),
    }
}

fn describe(value: &ApiValue) -> &'static str {
    match value {
        ApiValue::Absent | ApiValue::Null => "null",
        ApiValue::Bool(_) => "a boolean",
        ApiValue::Number(_) => "a number",
        ApiValue::String(_) => "a string",
        ApiValue::Array(_) => "an array",
        ApiValue::Object(_) => "an object",
    }
}

fn unexpected(expected: &str, found: &str) -> SuperthreadError {
    SuperthreadError::UnexpectedResponse(format!("expected {expected}, got {found}"))
}
