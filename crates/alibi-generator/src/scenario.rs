//! The hidden truth a puzzle is built around.

use alibi_core::{Cast, Category, CategoryPair, Solution};

use crate::{PuzzleSeed, SeedStream};

/// One suspect together with their weapon and location, as cast indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScenarioRow {
    suspect: usize,
    weapon: usize,
    location: usize,
}

impl ScenarioRow {
    /// Creates a row from cast indices.
    #[must_use]
    pub const fn new(suspect: usize, weapon: usize, location: usize) -> Self {
        Self {
            suspect,
            weapon,
            location,
        }
    }

    /// Returns the cast index of the row's entity in `category`.
    #[must_use]
    pub const fn get(&self, category: Category) -> usize {
        match category {
            Category::Suspect => self.suspect,
            Category::Weapon => self.weapon,
            Category::Location => self.location,
        }
    }

    /// Returns the row's cell in the relation grid of `pair`.
    #[must_use]
    pub const fn project(&self, pair: CategoryPair) -> (usize, usize) {
        (self.get(pair.rows()), self.get(pair.columns()))
    }
}

/// A complete assignment of every suspect to one weapon and one location.
///
/// Each weapon and each location appears in exactly one row. The first row
/// is the culprit's.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    rows: Vec<ScenarioRow>,
}

impl Scenario {
    /// Builds the scenario for `seed` by shuffling each category independently.
    ///
    /// Row `i` joins the `i`-th suspect, weapon and location of the shuffled
    /// orders.
    #[must_use]
    pub fn build(cast: &Cast, seed: PuzzleSeed) -> Self {
        let shuffled = |stream| {
            let indices: Vec<usize> = (0..cast.size()).collect();
            seed.stream(stream).shuffle(&indices)
        };
        let suspects = shuffled(SeedStream::ScenarioSuspects);
        let weapons = shuffled(SeedStream::ScenarioWeapons);
        let locations = shuffled(SeedStream::ScenarioLocations);

        let rows = suspects
            .into_iter()
            .zip(weapons)
            .zip(locations)
            .map(|((s, w), l)| ScenarioRow::new(s, w, l))
            .collect();
        Self { rows }
    }

    /// Creates a scenario from explicit rows.
    ///
    /// Returns `None` unless every category's indices form a permutation of
    /// `0..rows.len()`.
    #[must_use]
    pub fn from_rows(rows: Vec<ScenarioRow>) -> Option<Self> {
        let is_permutation = |category| {
            let mut seen = vec![false; rows.len()];
            rows.iter().all(|row| {
                let index = row.get(category);
                index < seen.len() && !std::mem::replace(&mut seen[index], true)
            })
        };
        Category::ALL
            .into_iter()
            .all(is_permutation)
            .then_some(Self { rows })
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    /// Returns all rows; the first is the culprit's.
    #[must_use]
    pub fn rows(&self) -> &[ScenarioRow] {
        &self.rows
    }

    /// Returns the culprit's row, or `None` for an empty scenario.
    #[must_use]
    pub fn culprit(&self) -> Option<&ScenarioRow> {
        self.rows.first()
    }

    /// Returns whether the scenario pairs the two entities of a cell.
    #[must_use]
    pub fn contains(&self, pair: CategoryPair, row: usize, col: usize) -> bool {
        self.rows.iter().any(|r| r.project(pair) == (row, col))
    }

    /// Returns the row holding entity `index` of `category`.
    #[must_use]
    pub fn row_of(&self, category: Category, index: usize) -> Option<&ScenarioRow> {
        self.rows.iter().find(|row| row.get(category) == index)
    }

    /// Returns the culprit's entities as a solution.
    #[must_use]
    pub fn solution(&self, cast: &Cast) -> Option<Solution> {
        let culprit = self.culprit()?;
        let id = |category| cast.entity(category, culprit.get(category)).id().clone();
        Some(Solution::new(
            id(Category::Suspect),
            id(Category::Weapon),
            id(Category::Location),
        ))
    }
}
