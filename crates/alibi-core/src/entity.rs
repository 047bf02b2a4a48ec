//! Puzzle entities.

use crate::Category;

/// Stable identifier of an entity, such as `s1` or `w3`.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    derive_more::Display,
    derive_more::From,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(transparent)]
pub struct EntityId(String);

impl EntityId {
    /// Creates an identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for EntityId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// A suspect, weapon or location.
///
/// Entities are immutable once created. The display name is what clue text
/// refers to, so it has to be unique within a category of a [`Cast`](crate::Cast).
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Entity {
    id: EntityId,
    name: String,
    category: Category,
}

impl Entity {
    /// Creates an entity.
    #[must_use]
    pub fn new(id: impl Into<EntityId>, name: impl Into<String>, category: Category) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category,
        }
    }

    /// Creates a suspect.
    #[must_use]
    pub fn suspect(id: impl Into<EntityId>, name: impl Into<String>) -> Self {
        Self::new(id, name, Category::Suspect)
    }

    /// Creates a weapon.
    #[must_use]
    pub fn weapon(id: impl Into<EntityId>, name: impl Into<String>) -> Self {
        Self::new(id, name, Category::Weapon)
    }

    /// Creates a location.
    #[must_use]
    pub fn location(id: impl Into<EntityId>, name: impl Into<String>) -> Self {
        Self::new(id, name, Category::Location)
    }

    /// Returns the identifier.
    #[must_use]
    pub fn id(&self) -> &EntityId {
        &self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the category.
    #[must_use]
    pub fn category(&self) -> Category {
        self.category
    }
}
