//! Typed response objects.
//!
//! Every variant is a thin wrapper over a [`DynamicObject`] with named
//! accessors for the fields the API documents. Anything else stays
//! reachable through [`DynamicObject::get`].

use serde::Serialize;
use serde_json::{Map, Value};

use crate::object::{ApiValue, DynamicObject};
use crate::registry::{registry, VariantKind};

/// Generates one read-only accessor per documented field.
macro_rules! field_accessor {
    ($field:ident: str) => {
        #[doc = concat!("The `", stringify!($field), "` field.")]
        pub fn $field(&self) -> Option<&str> {
            self.object.str_field(stringify!($field))
        }
    };
    ($field:ident: i64) => {
        #[doc = concat!("The `", stringify!($field), "` field.")]
        pub fn $field(&self) -> Option<i64> {
            self.object.i64_field(stringify!($field))
        }
    };
    ($field:ident: f64) => {
        #[doc = concat!("The `", stringify!($field), "` field.")]
        pub fn $field(&self) -> Option<f64> {
            self.object.f64_field(stringify!($field))
        }
    };
    ($field:ident: bool) => {
        #[doc = concat!("The `", stringify!($field), "` field.")]
        pub fn $field(&self) -> Option<bool> {
            self.object.bool_field(stringify!($field))
        }
    };
    ($field:ident: millis) => {
        #[doc = concat!("The `", stringify!($field), "` field, Unix milliseconds.")]
        pub fn $field(&self) -> Option<i64> {
            self.object.millis_field(stringify!($field))
        }
    };
    ($field:ident: json) => {
        #[doc = concat!("The raw `", stringify!($field), "` field.")]
        pub fn $field(&self) -> Option<&serde_json::Value> {
            self.object.get_raw(stringify!($field))
        }
    };
}

/// Millisecond fields exposed as UTC times.
macro_rules! time_accessor {
    ($($name:ident => $field:ident),* $(,)?) => {
        $(
            #[doc = concat!("`", stringify!($field), "` as a UTC time.")]
            pub fn $name(&self) -> Option<chrono::DateTime<chrono::Utc>> {
                self.object.timestamp_field(stringify!($field))
            }
        )*
    };
}

/// Declares a variant struct, its field accessors and its [`Variant`] impl.
macro_rules! variant {
    (
        $(#[$meta:meta])*
        pub struct $name:ident;
        fields { $($field:ident: $ty:ident),* $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
        #[serde(transparent)]
        pub struct $name {
            object: $crate::object::DynamicObject,
        }

        impl $name {
            $(field_accessor!($field: $ty);)*
        }

        impl $crate::objects::Variant for $name {
            const KIND: $crate::registry::VariantKind = $crate::registry::VariantKind::$name;
            const FIELDS: &'static [&'static str] = &[$(stringify!($field)),*];

            fn from_object(object: $crate::object::DynamicObject) -> Self {
                Self { object }
            }

            fn object(&self) -> &$crate::object::DynamicObject {
                &self.object
            }

            fn object_mut(&mut self) -> &mut $crate::object::DynamicObject {
                &mut self.object
            }

            fn into_object(self) -> $crate::object::DynamicObject {
                self.object
            }

            fn from_resource(resource: &$crate::objects::Resource) -> Option<&Self> {
                match resource {
                    $crate::objects::Resource::$name(inner) => Some(inner),
                    _ => None,
                }
            }

            fn into_resource(self) -> $crate::objects::Resource {
                $crate::objects::Resource::$name(self)
            }
        }

        impl From<$name> for serde_json::Value {
            fn from(variant: $name) -> Self {
                variant.object.into()
            }
        }

        impl std::ops::Index<&str> for $name {
            type Output = serde_json::Value;

            fn index(&self, field: &str) -> &serde_json::Value {
                self.object.get_raw(field).unwrap_or(&serde_json::Value::Null)
            }
        }
    };
}

mod board;
mod card;
mod checklist;
mod collection;
mod comment;
mod note;
mod page;
mod project;
mod space;
mod sprint;
mod tag;
mod user;

pub use board::{Board, List};
pub use card::{Card, LinkedCard, Member, Priority};
pub use checklist::{Checklist, ChecklistItem};
pub use collection::{Collection, ITEMS_KEYS};
pub use comment::Comment;
pub use note::Note;
pub use page::Page;
pub use project::Project;
pub use space::Space;
pub use sprint::Sprint;
pub use tag::Tag;
pub use user::User;

/// A typed specialization of [`DynamicObject`].
pub trait Variant: Sized + Clone {
    /// Which variant this is.
    const KIND: VariantKind;

    /// Documented field names, in display order.
    const FIELDS: &'static [&'static str];

    /// Wrap an object. Missing documented fields read as `None`.
    fn from_object(object: DynamicObject) -> Self;

    fn object(&self) -> &DynamicObject;

    fn object_mut(&mut self) -> &mut DynamicObject;

    fn into_object(self) -> DynamicObject;

    /// Borrow this variant out of a [`Resource`], if it holds one.
    fn from_resource(resource: &Resource) -> Option<&Self>;

    fn into_resource(self) -> Resource;

    fn from_map(map: Map<String, Value>) -> Self {
        Self::from_object(DynamicObject::from(map))
    }

    /// Generic field access, see [`DynamicObject::get`].
    fn get(&self, field: &str) -> ApiValue {
        self.object().get(field)
    }

    fn has(&self, field: &str) -> bool {
        self.object().has(field)
    }

    fn to_value(&self) -> Value {
        self.object().to_value()
    }
}

impl Variant for DynamicObject {
    const KIND: VariantKind = VariantKind::Generic;
    const FIELDS: &'static [&'static str] = &[];

    fn from_object(object: DynamicObject) -> Self {
        object
    }

    fn object(&self) -> &DynamicObject {
        self
    }

    fn object_mut(&mut self) -> &mut DynamicObject {
        self
    }

    fn into_object(self) -> DynamicObject {
        self
    }

    fn from_resource(resource: &Resource) -> Option<&Self> {
        match resource {
            Resource::Generic(object) => Some(object),
            _ => None,
        }
    }

    fn into_resource(self) -> Resource {
        Resource::Generic(self)
    }
}

/// Applies `$body` to whichever variant a [`Resource`] holds.
macro_rules! each_variant {
    ($resource:expr, $inner:ident => $body:expr) => {
        match $resource {
            Resource::Generic($inner) => $body,
            Resource::Card($inner) => $body,
            Resource::Board($inner) => $body,
            Resource::List($inner) => $body,
            Resource::User($inner) => $body,
            Resource::Project($inner) => $body,
            Resource::Space($inner) => $body,
            Resource::Sprint($inner) => $body,
            Resource::Comment($inner) => $body,
            Resource::Page($inner) => $body,
            Resource::Note($inner) => $body,
            Resource::Tag($inner) => $body,
            Resource::Checklist($inner) => $body,
            Resource::ChecklistItem($inner) => $body,
            Resource::Member($inner) => $body,
            Resource::LinkedCard($inner) => $body,
        }
    };
}

/// A wrapped JSON object of any variant.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Resource {
    Generic(DynamicObject),
    Card(Card),
    Board(Board),
    List(List),
    User(User),
    Project(Project),
    Space(Space),
    Sprint(Sprint),
    Comment(Comment),
    Page(Page),
    Note(Note),
    Tag(Tag),
    Checklist(Checklist),
    ChecklistItem(ChecklistItem),
    Member(Member),
    LinkedCard(LinkedCard),
}

impl Resource {
    /// Wrap an object as the variant its discriminator is registered under.
    pub fn construct(object: DynamicObject) -> Self {
        let kind = registry().resolve(object.discriminator());
        Self::with_kind(kind, object)
    }

    /// Wrap an object as a specific variant, ignoring its discriminator.
    pub fn with_kind(kind: VariantKind, object: DynamicObject) -> Self {
        match kind {
            VariantKind::Generic => Self::Generic(object),
            VariantKind::Card => Self::Card(Card::from_object(object)),
            VariantKind::Board => Self::Board(Board::from_object(object)),
            VariantKind::List => Self::List(List::from_object(object)),
            VariantKind::User => Self::User(User::from_object(object)),
            VariantKind::Project => Self::Project(Project::from_object(object)),
            VariantKind::Space => Self::Space(Space::from_object(object)),
            VariantKind::Sprint => Self::Sprint(Sprint::from_object(object)),
            VariantKind::Comment => Self::Comment(Comment::from_object(object)),
            VariantKind::Page => Self::Page(Page::from_object(object)),
            VariantKind::Note => Self::Note(Note::from_object(object)),
            VariantKind::Tag => Self::Tag(Tag::from_object(object)),
            VariantKind::Checklist => Self::Checklist(Checklist::from_object(object)),
            VariantKind::ChecklistItem => Self::ChecklistItem(ChecklistItem::from_object(object)),
            VariantKind::Member => Self::Member(Member::from_object(object)),
            VariantKind::LinkedCard => Self::LinkedCard(LinkedCard::from_object(object)),
        }
    }

    pub fn kind(&self) -> VariantKind {
        each_variant!(self, inner => variant_kind(inner))
    }

    pub fn is_generic(&self) -> bool {
        matches!(self, Self::Generic(_))
    }

    /// The backing object, whatever the variant.
    pub fn object(&self) -> &DynamicObject {
        each_variant!(self, inner => inner.object())
    }

    pub fn object_mut(&mut self) -> &mut DynamicObject {
        each_variant!(self, inner => inner.object_mut())
    }

    pub fn into_object(self) -> DynamicObject {
        each_variant!(self, inner => inner.into_object())
    }

    /// Documented fields of the held variant.
    pub fn fields(&self) -> &'static [&'static str] {
        each_variant!(self, inner => variant_fields(inner))
    }

    pub fn get(&self, field: &str) -> ApiValue {
        self.object().get(field)
    }

    pub fn has(&self, field: &str) -> bool {
        self.object().has(field)
    }

    /// Borrow the held variant as `T`, if it is one.
    pub fn downcast_ref<T: Variant>(&self) -> Option<&T> {
        T::from_resource(self)
    }

    /// Re-wrap the backing data as `T`, whatever variant was held.
    pub fn into_variant<T: Variant>(self) -> T {
        T::from_object(self.into_object())
    }

    pub fn to_value(&self) -> Value {
        self.object().to_value()
    }
}

fn variant_kind<T: Variant>(_: &T) -> VariantKind {
    T::KIND
}

fn variant_fields<T: Variant>(_: &T) -> &'static [&'static str] {
    T::FIELDS
}

impl From<Resource> for Value {
    fn from(resource: Resource) -> Self {
        resource.into_object().into()
    }
}

impl From<Resource> for DynamicObject {
    fn from(resource: Resource) -> Self {
        resource.into_object()
    }
}
