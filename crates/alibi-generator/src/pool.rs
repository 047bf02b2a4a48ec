//! Entity pools and cast selection.

use alibi_core::{Cast, Category, Difficulty, Entity};

use crate::{GeneratorError, PuzzleSeed, SeedStream};

/// The largest grid size the generator accepts.
pub const MAX_GRID_SIZE: usize = 8;

const SUSPECTS: [&str; 10] = [
    "Mayor Grey",
    "Chef Red",
    "Lady Blue",
    "Professor Plum",
    "Colonel Mustard",
    "Miss Scarlet",
    "Reverend Green",
    "Mrs. Peacock",
    "Doctor Orchid",
    "Captain Brown",
];

const WEAPONS: [&str; 10] = [
    "Rusty Dagger",
    "Heavy Candlestick",
    "Poison Vial",
    "Lead Pipe",
    "Frayed Rope",
    "Old Revolver",
    "Iron Wrench",
    "Ice Pick",
    "Garden Shears",
    "Bronze Statue",
];

const LOCATIONS: [&str; 10] = [
    "Library",
    "Kitchen",
    "Conservatory",
    "Cellar",
    "Ballroom",
    "Study",
    "Billiard Room",
    "Attic",
    "Greenhouse",
    "Dining Room",
];

/// The entities a cast is drawn from, per category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityPools {
    suspects: Vec<Entity>,
    weapons: Vec<Entity>,
    locations: Vec<Entity>,
}

impl Default for EntityPools {
    fn default() -> Self {
        Self::builtin()
    }
}

impl EntityPools {
    /// Creates pools from explicit entities.
    ///
    /// The pools may differ in length. Entities are validated when a cast is
    /// selected from them.
    #[must_use]
    pub fn new(suspects: Vec<Entity>, weapons: Vec<Entity>, locations: Vec<Entity>) -> Self {
        Self {
            suspects,
            weapons,
            locations,
        }
    }

    /// Returns the built-in pools of ten entities per category.
    ///
    /// Identifiers are `s1`..`s10`, `w1`..`w10` and `l1`..`l10`.
    #[must_use]
    pub fn builtin() -> Self {
        fn entities(category: Category, prefix: char, names: &[&str]) -> Vec<Entity> {
            names
                .iter()
                .zip(1..)
                .map(|(name, n)| Entity::new(format!("{prefix}{n}"), *name, category))
                .collect()
        }
        Self::new(
            entities(Category::Suspect, 's', &SUSPECTS),
            entities(Category::Weapon, 'w', &WEAPONS),
            entities(Category::Location, 'l', &LOCATIONS),
        )
    }

    /// Returns the pool for `category`.
    #[must_use]
    pub fn entities(&self, category: Category) -> &[Entity] {
        match category {
            Category::Suspect => &self.suspects,
            Category::Weapon => &self.weapons,
            Category::Location => &self.locations,
        }
    }

    /// Returns the largest grid size every pool can fill.
    #[must_use]
    pub fn capacity(&self) -> usize {
        Category::ALL
            .into_iter()
            .map(|category| self.entities(category).len())
            .min()
            .unwrap_or(0)
    }

    /// Draws `size` entities of each category for `seed`.
    ///
    /// Each pool is shuffled with its own stream and the first `size`
    /// entities are kept, in shuffled order.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::InvalidGridSize`] if `size` is zero or larger
    /// than [`MAX_GRID_SIZE`], [`GeneratorError::PoolTooSmall`] if a pool
    /// holds fewer than `size` entities, and [`GeneratorError::Cast`] if the
    /// drawn entities do not form a valid cast.
    pub fn select_cast(&self, seed: PuzzleSeed, size: usize) -> Result<Cast, GeneratorError> {
        check_grid_size(size)?;
        let draw = |category, stream| {
            let pool = self.entities(category);
            if pool.len() < size {
                return Err(GeneratorError::PoolTooSmall {
                    category,
                    required: size,
                    available: pool.len(),
                });
            }
            let mut drawn = seed.stream(stream).shuffle(pool);
            drawn.truncate(size);
            Ok(drawn)
        };
        let cast = Cast::new(
            draw(Category::Suspect, SeedStream::CastSuspects)?,
            draw(Category::Weapon, SeedStream::CastWeapons)?,
            draw(Category::Location, SeedStream::CastLocations)?,
        )?;
        Ok(cast)
    }
}

/// Checks that `size` is a grid size the generator accepts.
///
/// # Errors
///
/// Returns [`GeneratorError::InvalidGridSize`] if `size` is zero or larger
/// than [`MAX_GRID_SIZE`].
pub fn check_grid_size(size: usize) -> Result<(), GeneratorError> {
    if (1..=MAX_GRID_SIZE).contains(&size) {
        Ok(())
    } else {
        Err(GeneratorError::InvalidGridSize { size })
    }
}

/// Chooses the difficulty of a seeded puzzle with a fair coin.
#[must_use]
pub fn choose_difficulty(seed: PuzzleSeed) -> Difficulty {
    if seed.stream(SeedStream::GridSize).coin_flip() {
        Difficulty::Normal
    } else {
        Difficulty::Easy
    }
}
