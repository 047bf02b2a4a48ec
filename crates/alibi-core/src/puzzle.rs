//! The finished puzzle record.

use crate::{Cast, Category, CategoryPair, Clue, EntityId, IdentityFact, Line, RelationBoard};

/// The culprit's suspect, weapon and location.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Solution {
    suspect: EntityId,
    weapon: EntityId,
    location: EntityId,
}

impl Solution {
    /// Creates a solution.
    #[must_use]
    pub fn new(
        suspect: impl Into<EntityId>,
        weapon: impl Into<EntityId>,
        location: impl Into<EntityId>,
    ) -> Self {
        Self {
            suspect: suspect.into(),
            weapon: weapon.into(),
            location: location.into(),
        }
    }

    /// Returns the culprit.
    #[must_use]
    pub fn suspect(&self) -> &EntityId {
        &self.suspect
    }

    /// Returns the weapon used.
    #[must_use]
    pub fn weapon(&self) -> &EntityId {
        &self.weapon
    }

    /// Returns the crime scene.
    #[must_use]
    pub fn location(&self) -> &EntityId {
        &self.location
    }

    /// Reads the solution off a board using the identity statement.
    ///
    /// A determined board fixes which suspect, weapon and location belong
    /// together but not which of those triples is the culprit's. The identity
    /// statement names the culprit's weapon or location, which picks exactly
    /// one triple.
    ///
    /// Returns `None` if the board does not confirm the cells needed to follow
    /// the identity statement to a full triple, or if the statement names an
    /// entity outside `cast`.
    #[must_use]
    pub fn deduce(cast: &Cast, board: &RelationBoard, identity: &IdentityFact) -> Option<Self> {
        let (suspect, weapon, location) = match identity {
            IdentityFact::Weapon(id) => {
                let weapon = cast.position(Category::Weapon, id)?;
                let (suspect, _) = board
                    .grid(CategoryPair::SuspectWeapon)
                    .confirmed_in(Line::Column(weapon))?;
                let (_, location) = board
                    .grid(CategoryPair::SuspectLocation)
                    .confirmed_in(Line::Row(suspect))?;
                (suspect, weapon, location)
            }
            IdentityFact::Location(id) => {
                let location = cast.position(Category::Location, id)?;
                let (suspect, _) = board
                    .grid(CategoryPair::SuspectLocation)
                    .confirmed_in(Line::Column(location))?;
                let (_, weapon) = board
                    .grid(CategoryPair::SuspectWeapon)
                    .confirmed_in(Line::Row(suspect))?;
                (suspect, weapon, location)
            }
        };
        Some(Self::new(
            cast.entity(Category::Suspect, suspect).id().clone(),
            cast.entity(Category::Weapon, weapon).id().clone(),
            cast.entity(Category::Location, location).id().clone(),
        ))
    }
}

/// Standard grid sizes.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    derive_more::Display,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum Difficulty {
    /// Three entities per category.
    #[display("EASY")]
    Easy,
    /// Four entities per category.
    #[display("NORMAL")]
    Normal,
}

impl Difficulty {
    /// Returns the number of entities per category.
    #[must_use]
    pub const fn grid_size(self) -> usize {
        match self {
            Self::Easy => 3,
            Self::Normal => 4,
        }
    }

    /// Returns the difficulty whose grid size is `size`, if any.
    #[must_use]
    pub const fn for_grid_size(size: usize) -> Option<Self> {
        match size {
            3 => Some(Self::Easy),
            4 => Some(Self::Normal),
            _ => None,
        }
    }
}

/// A generated puzzle.
///
/// Created once per seed and never modified. Clues are in presentation
/// order with the identity clue last.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PuzzleData {
    label: String,
    cast: Cast,
    solution: Solution,
    clues: Vec<Clue>,
}

impl PuzzleData {
    /// Creates a puzzle record.
    #[must_use]
    pub fn new(label: impl Into<String>, cast: Cast, solution: Solution, clues: Vec<Clue>) -> Self {
        Self {
            label: label.into(),
            cast,
            solution,
            clues,
        }
    }

    /// Returns the label the seed was derived from, such as a date.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the entities of the puzzle.
    #[must_use]
    pub fn cast(&self) -> &Cast {
        &self.cast
    }

    /// Returns the number of entities per category.
    #[must_use]
    pub fn grid_size(&self) -> usize {
        self.cast.size()
    }

    /// Returns the difficulty matching the grid size, if it is a standard one.
    #[must_use]
    pub fn difficulty(&self) -> Option<Difficulty> {
        Difficulty::for_grid_size(self.grid_size())
    }

    /// Returns the hidden solution.
    #[must_use]
    pub fn solution(&self) -> &Solution {
        &self.solution
    }

    /// Returns all clues in presentation order.
    #[must_use]
    pub fn clues(&self) -> &[Clue] {
        &self.clues
    }

    /// Returns the identity clue.
    #[must_use]
    pub fn identity_clue(&self) -> Option<&Clue> {
        self.clues.iter().find(|clue| clue.kind().is_identity())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Entity, Mark};

    fn cast() -> Cast {
        Cast::new(
            vec![Entity::suspect("s1", "A"), Entity::suspect("s2", "B")],
            vec![Entity::weapon("w1", "X"), Entity::weapon("w2", "Y")],
            vec![Entity::location("l1", "P"), Entity::location("l2", "Q")],
        )
        .unwrap()
    }

    /// s1 + w2 @ l1, s2 + w1 @ l2.
    fn solved_board() -> RelationBoard {
        let mut board = RelationBoard::new(2);
        let confirmed = [
            (CategoryPair::SuspectWeapon, 0, 1),
            (CategoryPair::SuspectWeapon, 1, 0),
            (CategoryPair::SuspectLocation, 0, 0),
            (CategoryPair::SuspectLocation, 1, 1),
            (CategoryPair::WeaponLocation, 1, 0),
            (CategoryPair::WeaponLocation, 0, 1),
        ];
        for (pair, row, col) in confirmed {
            board.grid_mut(pair).mark_stated(row, col, Mark::Confirmed);
        }
        for pair in CategoryPair::ALL {
            for row in 0..2 {
                for col in 0..2 {
                    board.grid_mut(pair).mark_inferred(row, col, Mark::Excluded);
                }
            }
        }
        board
    }

    #[test]
    fn test_deduce_from_weapon() {
        let board = solved_board();
        assert_eq!(board.is_solved(), Ok(true));
        assert_eq!(
            Solution::deduce(&cast(), &board, &IdentityFact::Weapon("w2".into())),
            Some(Solution::new("s1", "w2", "l1"))
        );
    }

    #[test]
    fn test_deduce_from_location() {
        let board = solved_board();
        assert_eq!(
            Solution::deduce(&cast(), &board, &IdentityFact::Location("l2".into())),
            Some(Solution::new("s2", "w1", "l2"))
        );
    }

    #[test]
    fn test_deduce_needs_confirmed_cells() {
        let board = RelationBoard::new(2);
        assert_eq!(
            Solution::deduce(&cast(), &board, &IdentityFact::Weapon("w1".into())),
            None
        );
        assert_eq!(
            Solution::deduce(&cast(), &solved_board(), &IdentityFact::Weapon("l1".into())),
            None
        );
    }

    #[test]
    fn test_difficulty_sizes() {
        assert_eq!(Difficulty::for_grid_size(3), Some(Difficulty::Easy));
        assert_eq!(Difficulty::Normal.grid_size(), 4);
        assert_eq!(Difficulty::for_grid_size(5), None);
    }
}
