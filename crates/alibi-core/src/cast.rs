//! The validated set of entities a puzzle is built from.

use std::collections::HashSet;

use crate::{Category, Entity, EntityId, phrasing::FACT_TEMPLATES};

/// Errors rejected when building a [`Cast`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum CastError {
    /// A category has no entities.
    #[display("no {category} entities were given")]
    Empty {
        /// The empty category.
        category: Category,
    },
    /// A category has a different number of entities than the suspects.
    #[display("expected {expected} {category} entities, got {actual}")]
    SizeMismatch {
        /// The category with the wrong size.
        category: Category,
        /// Number of suspects.
        expected: usize,
        /// Number of entities in `category`.
        actual: usize,
    },
    /// An entity was listed under a category it does not belong to.
    #[display("entity {id} is a {actual} but was listed as a {expected}")]
    WrongCategory {
        /// The misplaced entity.
        id: EntityId,
        /// The list it was placed in.
        expected: Category,
        /// Its own category.
        actual: Category,
    },
    /// Two entities share an identifier.
    #[display("entity id {id} is used more than once")]
    DuplicateId {
        /// The repeated identifier.
        id: EntityId,
    },
    /// Two entities of one category share a display name.
    #[display("{category} name {name:?} is used more than once")]
    DuplicateName {
        /// The category containing both entities.
        category: Category,
        /// The repeated name.
        name: String,
    },
    /// A display name contains the connecting words of a clue sentence.
    #[display("{category} name {name:?} contains the clue phrase {phrase:?}")]
    AmbiguousName {
        /// The category of the entity.
        category: Category,
        /// The offending name.
        name: String,
        /// The clue phrase found in the name.
        phrase: &'static str,
    },
}

/// The suspects, weapons and locations of one puzzle.
///
/// All three lists have the same, non-zero length (the grid size). Identifiers
/// are unique across the cast and display names are unique within a category.
/// No name contains the words joining two names in a clue sentence, which makes
/// every clue sentence resolvable back to the entities it names.
///
/// An entity's position in its list is the row or column index it occupies in
/// the relation grids.
///
/// # Examples
///
/// ```
/// use alibi_core::{Cast, CastError, Category, Entity};
///
/// let err = Cast::new(
///     vec![Entity::suspect("s1", "Mayor Grey")],
///     vec![],
///     vec![Entity::location("l1", "Library")],
/// )
/// .unwrap_err();
/// assert_eq!(err, CastError::Empty { category: Category::Weapon });
/// ```
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "RawCast")]
pub struct Cast {
    suspects: Vec<Entity>,
    weapons: Vec<Entity>,
    locations: Vec<Entity>,
}

#[derive(serde::Deserialize)]
struct RawCast {
    suspects: Vec<Entity>,
    weapons: Vec<Entity>,
    locations: Vec<Entity>,
}

impl TryFrom<RawCast> for Cast {
    type Error = CastError;

    fn try_from(raw: RawCast) -> Result<Self, Self::Error> {
        Self::new(raw.suspects, raw.weapons, raw.locations)
    }
}

impl Cast {
    /// Validates and builds a cast.
    ///
    /// # Errors
    ///
    /// Returns a [`CastError`] if any list is empty, the lists differ in
    /// length, an entity is in the wrong list, an identifier repeats, or a
    /// display name repeats within a category.
    pub fn new(
        suspects: Vec<Entity>,
        weapons: Vec<Entity>,
        locations: Vec<Entity>,
    ) -> Result<Self, CastError> {
        let this = Self {
            suspects,
            weapons,
            locations,
        };
        this.validate()?;
        Ok(this)
    }

    fn validate(&self) -> Result<(), CastError> {
        let expected = self.suspects.len();
        let mut ids = HashSet::new();
        for category in Category::ALL {
            let entities = self.entities(category);
            if entities.is_empty() {
                return Err(CastError::Empty { category });
            }
            if entities.len() != expected {
                return Err(CastError::SizeMismatch {
                    category,
                    expected,
                    actual: entities.len(),
                });
            }

            let mut names = HashSet::new();
            for entity in entities {
                if entity.category() != category {
                    return Err(CastError::WrongCategory {
                        id: entity.id().clone(),
                        expected: category,
                        actual: entity.category(),
                    });
                }
                if !ids.insert(entity.id()) {
                    return Err(CastError::DuplicateId {
                        id: entity.id().clone(),
                    });
                }
                if let Some(template) = FACT_TEMPLATES
                    .iter()
                    .find(|template| entity.name().contains(template.middle))
                {
                    return Err(CastError::AmbiguousName {
                        category,
                        name: entity.name().to_owned(),
                        phrase: template.middle,
                    });
                }
                if !names.insert(entity.name()) {
                    return Err(CastError::DuplicateName {
                        category,
                        name: entity.name().to_owned(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Returns the number of entities per category.
    #[must_use]
    pub fn size(&self) -> usize {
        self.suspects.len()
    }

    /// Returns the entities of a category in grid order.
    #[must_use]
    pub fn entities(&self, category: Category) -> &[Entity] {
        match category {
            Category::Suspect => &self.suspects,
            Category::Weapon => &self.weapons,
            Category::Location => &self.locations,
        }
    }

    /// Returns the suspects in grid order.
    #[must_use]
    pub fn suspects(&self) -> &[Entity] {
        &self.suspects
    }

    /// Returns the weapons in grid order.
    #[must_use]
    pub fn weapons(&self) -> &[Entity] {
        &self.weapons
    }

    /// Returns the locations in grid order.
    #[must_use]
    pub fn locations(&self) -> &[Entity] {
        &self.locations
    }

    /// Returns the entity at `index` in a category.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not smaller than [`Cast::size`].
    #[must_use]
    pub fn entity(&self, category: Category, index: usize) -> &Entity {
        &self.entities(category)[index]
    }

    /// Returns the grid index of the entity with `id` in a category.
    #[must_use]
    pub fn position(&self, category: Category, id: &EntityId) -> Option<usize> {
        self.entities(category).iter().position(|e| e.id() == id)
    }

    /// Returns the grid index of the entity called `name` in a category.
    #[must_use]
    pub fn position_by_name(&self, category: Category, name: &str) -> Option<usize> {
        self.entities(category).iter().position(|e| e.name() == name)
    }

    /// Returns the category and grid index of the entity with `id`.
    #[must_use]
    pub fn locate(&self, id: &EntityId) -> Option<(Category, usize)> {
        Category::ALL
            .into_iter()
            .find_map(|category| Some((category, self.position(category, id)?)))
    }
}
