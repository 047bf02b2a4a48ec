//! Derives every true statement about a scenario.

use alibi_core::{Cast, CategoryPair, Fact, Polarity};

use crate::Scenario;

/// Every true fact about a scenario, split by polarity.
///
/// For a grid of size `n` there are `3n` positive facts, one per pairing in
/// each relation grid, and `3n(n - 1)` negative facts, one per non-pairing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CluePool {
    positive: Vec<Fact>,
    negative: Vec<Fact>,
}

impl CluePool {
    /// Creates a pool from explicit facts.
    #[must_use]
    pub fn new(positive: Vec<Fact>, negative: Vec<Fact>) -> Self {
        Self { positive, negative }
    }

    /// Derives all true facts about `scenario`.
    ///
    /// Positive facts follow scenario row order, giving the suspect–weapon,
    /// weapon–location and suspect–location facts of each row in turn.
    /// Negative facts follow cast order.
    #[must_use]
    pub fn synthesize(cast: &Cast, scenario: &Scenario) -> Self {
        let id = |category, index| cast.entity(category, index).id().clone();
        let fact = |pair: CategoryPair, (row, col): (usize, usize), polarity| {
            Fact::new(pair, id(pair.rows(), row), id(pair.columns(), col), polarity)
        };

        let relations = [
            CategoryPair::SuspectWeapon,
            CategoryPair::WeaponLocation,
            CategoryPair::SuspectLocation,
        ];
        let positive = scenario
            .rows()
            .iter()
            .flat_map(|row| relations.map(|pair| fact(pair, row.project(pair), Polarity::Positive)))
            .collect();

        let size = cast.size();
        let mut negative = vec![];
        for suspect in 0..size {
            for pair in [CategoryPair::SuspectWeapon, CategoryPair::SuspectLocation] {
                for other in 0..size {
                    if !scenario.contains(pair, suspect, other) {
                        negative.push(fact(pair, (suspect, other), Polarity::Negative));
                    }
                }
            }
        }
        for weapon in 0..size {
            for location in 0..size {
                if !scenario.contains(CategoryPair::WeaponLocation, weapon, location) {
                    let cell = (weapon, location);
                    negative.push(fact(CategoryPair::WeaponLocation, cell, Polarity::Negative));
                }
            }
        }
        debug_assert_eq!(
            negative.len(),
            3 * size * size.saturating_sub(1),
            "scenario of size {} is not a bijection",
            scenario.size()
        );

        Self { positive, negative }
    }

    /// Returns the positive facts.
    #[must_use]
    pub fn positive(&self) -> &[Fact] {
        &self.positive
    }

    /// Returns the negative facts.
    #[must_use]
    pub fn negative(&self) -> &[Fact] {
        &self.negative
    }

    /// Returns the total number of facts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.positive.len() + self.negative.len()
    }

    /// Returns `true` if the pool holds no facts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates over positive facts, then negative facts.
    pub fn iter(&self) -> impl Iterator<Item = &Fact> {
        self.positive.iter().chain(&self.negative)
    }
}
