//! Discriminator to variant mapping.
//!
//! The process-wide table is built once from [`STANDARD_TYPES`] and only
//! handed out by shared reference, so it cannot change after startup.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Wire field used to pick a variant.
pub const DISCRIMINATOR_FIELD: &str = "type";

/// Every typed representation a response object can take.
///
/// `Member` and `LinkedCard` have no discriminator of their own; they are
/// only produced when a caller asks for them explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariantKind {
    /// Plain [`DynamicObject`](crate::DynamicObject), used for unknown types.
    Generic,
    Card,
    Board,
    List,
    User,
    Project,
    Space,
    Sprint,
    Comment,
    Page,
    Note,
    Tag,
    Checklist,
    ChecklistItem,
    Member,
    LinkedCard,
}

impl VariantKind {
    /// Rust-side name of the variant.
    pub fn name(self) -> &'static str {
        match self {
            Self::Generic => "DynamicObject",
            Self::Card => "Card",
            Self::Board => "Board",
            Self::List => "List",
            Self::User => "User",
            Self::Project => "Project",
            Self::Space => "Space",
            Self::Sprint => "Sprint",
            Self::Comment => "Comment",
            Self::Page => "Page",
            Self::Note => "Note",
            Self::Tag => "Tag",
            Self::Checklist => "Checklist",
            Self::ChecklistItem => "ChecklistItem",
            Self::Member => "Member",
            Self::LinkedCard => "LinkedCard",
        }
    }
}

/// The registered discriminators, in registration order.
pub const STANDARD_TYPES: [(&str, VariantKind); 13] = [
    ("card", VariantKind::Card),
    ("board", VariantKind::Board),
    ("list", VariantKind::List),
    ("user", VariantKind::User),
    ("project", VariantKind::Project),
    ("space", VariantKind::Space),
    ("sprint", VariantKind::Sprint),
    ("comment", VariantKind::Comment),
    ("page", VariantKind::Page),
    ("note", VariantKind::Note),
    ("tag", VariantKind::Tag),
    ("checklist", VariantKind::Checklist),
    ("checklist_item", VariantKind::ChecklistItem),
];

static REGISTRY: Lazy<TypeRegistry> = Lazy::new(TypeRegistry::standard);

/// The process-wide registry, initialised on first use.
pub fn registry() -> &'static TypeRegistry {
    &REGISTRY
}

/// Append-only table from discriminator string to [`VariantKind`].
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    types: HashMap<&'static str, VariantKind>,
}

impl TypeRegistry {
    /// An empty registry. Everything resolves to [`VariantKind::Generic`].
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry populated from [`STANDARD_TYPES`].
    pub fn standard() -> Self {
        let mut registry = Self::new();
        for (discriminator, kind) in STANDARD_TYPES {
            registry.register(discriminator, kind);
        }
        registry
    }

    /// Register a discriminator.
    ///
    /// Returns `false` and keeps the existing entry if the discriminator is
    /// already taken.
    pub fn register(&mut self, discriminator: &'static str, kind: VariantKind) -> bool {
        if self.types.contains_key(discriminator) {
            tracing::warn!(discriminator, "duplicate variant registration ignored");
            return false;
        }
        self.types.insert(discriminator, kind);
        true
    }

    /// Look up a discriminator. Absent or unknown values resolve to
    /// [`VariantKind::Generic`].
    pub fn resolve(&self, discriminator: Option<&str>) -> VariantKind {
        discriminator
            .and_then(|d| self.types.get(d).copied())
            .unwrap_or(VariantKind::Generic)
    }

    pub fn contains(&self, discriminator: &str) -> bool {
        self.types.contains_key(discriminator)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Registered entries in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, VariantKind)> + '_ {
        self.types.iter().map(|(d, k)| (*d, *k))
    }
}
