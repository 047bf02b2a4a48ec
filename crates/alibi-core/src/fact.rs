//! Structured clue content.
//!
//! A [`Fact`] is what a normal clue says, independent of wording: two entities
//! of a [`CategoryPair`] do or do not belong together. An [`IdentityFact`] is
//! what the identity clue says about the culprit.

use crate::{Cast, Category, CategoryPair, EntityId, Mark};

/// Whether a fact asserts or denies a pairing.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    derive_more::Display,
    derive_more::IsVariant,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    /// The entities belong together.
    #[display("positive")]
    Positive,
    /// The entities do not belong together.
    #[display("negative")]
    Negative,
}

impl Polarity {
    /// Returns the mark a clue with this polarity puts in its cell.
    #[must_use]
    pub const fn mark(self) -> Mark {
        match self {
            Self::Positive => Mark::Confirmed,
            Self::Negative => Mark::Excluded,
        }
    }
}

/// A pairwise statement about two entities.
///
/// `first` belongs to the pair's row category and `second` to its column
/// category.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Fact {
    relation: CategoryPair,
    first: EntityId,
    second: EntityId,
    polarity: Polarity,
}

impl Fact {
    /// Creates a fact.
    #[must_use]
    pub fn new(
        relation: CategoryPair,
        first: impl Into<EntityId>,
        second: impl Into<EntityId>,
        polarity: Polarity,
    ) -> Self {
        Self {
            relation,
            first: first.into(),
            second: second.into(),
            polarity,
        }
    }

    /// Creates a fact asserting that two entities belong together.
    #[must_use]
    pub fn positive(
        relation: CategoryPair,
        first: impl Into<EntityId>,
        second: impl Into<EntityId>,
    ) -> Self {
        Self::new(relation, first, second, Polarity::Positive)
    }

    /// Creates a fact denying that two entities belong together.
    #[must_use]
    pub fn negative(
        relation: CategoryPair,
        first: impl Into<EntityId>,
        second: impl Into<EntityId>,
    ) -> Self {
        Self::new(relation, first, second, Polarity::Negative)
    }

    /// Returns the category pair the fact is about.
    #[must_use]
    pub fn relation(&self) -> CategoryPair {
        self.relation
    }

    /// Returns the entity of the row category.
    #[must_use]
    pub fn first(&self) -> &EntityId {
        &self.first
    }

    /// Returns the entity of the column category.
    #[must_use]
    pub fn second(&self) -> &EntityId {
        &self.second
    }

    /// Returns the polarity.
    #[must_use]
    pub fn polarity(&self) -> Polarity {
        self.polarity
    }

    /// Returns the `(row, col)` cell the fact marks in its relation grid.
    ///
    /// Returns `None` if either entity is not part of `cast` in the expected
    /// category.
    #[must_use]
    pub fn resolve(&self, cast: &Cast) -> Option<(usize, usize)> {
        let row = cast.position(self.relation.rows(), &self.first)?;
        let col = cast.position(self.relation.columns(), &self.second)?;
        Some((row, col))
    }
}

/// A statement about the culprit that does not name the culprit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase", tag = "category", content = "id")]
pub enum IdentityFact {
    /// The culprit used this weapon.
    Weapon(EntityId),
    /// The culprit was at this location.
    Location(EntityId),
}

impl IdentityFact {
    /// Returns the category of the named entity.
    #[must_use]
    pub fn category(&self) -> Category {
        match self {
            Self::Weapon(_) => Category::Weapon,
            Self::Location(_) => Category::Location,
        }
    }

    /// Returns the named entity.
    #[must_use]
    pub fn entity(&self) -> &EntityId {
        match self {
            Self::Weapon(id) | Self::Location(id) => id,
        }
    }
}
