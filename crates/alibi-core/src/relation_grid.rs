//! Relation grids recording what is known about pairs of entities.
//!
//! A [`RelationGrid`] covers one [`CategoryPair`]: its rows are the entities
//! of the pair's row category and its columns those of the column category,
//! both in [`Cast`](crate::Cast) order. A [`RelationBoard`] bundles the three
//! grids of a puzzle.

use std::array;

use crate::CategoryPair;

/// What is known about one pairing.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    derive_more::Display,
    derive_more::IsVariant,
)]
pub enum Mark {
    /// Nothing is known yet.
    #[default]
    #[display("?")]
    Undetermined,
    /// The two entities belong together.
    #[display("O")]
    Confirmed,
    /// The two entities do not belong together.
    #[display("x")]
    Excluded,
}

/// A grid cell: a [`Mark`] plus whether deduction, rather than a clue, set it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Cell {
    mark: Mark,
    inferred: bool,
}

impl Cell {
    /// A cell nothing is known about.
    pub const UNDETERMINED: Self = Self {
        mark: Mark::Undetermined,
        inferred: false,
    };

    /// Creates a cell set directly from a clue.
    #[must_use]
    pub const fn stated(mark: Mark) -> Self {
        Self {
            mark,
            inferred: false,
        }
    }

    /// Creates a cell derived by deduction.
    #[must_use]
    pub const fn inferred(mark: Mark) -> Self {
        Self {
            mark,
            inferred: true,
        }
    }

    /// Returns the mark.
    #[must_use]
    pub const fn mark(self) -> Mark {
        self.mark
    }

    /// Returns `true` if deduction set this cell.
    #[must_use]
    pub const fn is_inferred(self) -> bool {
        self.inferred
    }

    /// Returns `true` if the cell is confirmed or excluded.
    #[must_use]
    pub const fn is_determined(self) -> bool {
        !matches!(self.mark, Mark::Undetermined)
    }
}

/// A row or a column of a relation grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Line {
    /// The row at the given index.
    #[display("row {_0}")]
    Row(usize),
    /// The column at the given index.
    #[display("column {_0}")]
    Column(usize),
}

/// A relation grid violating the one-to-one property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ConsistencyError {
    /// A line holds more than one confirmed cell.
    #[display("{pair} grid: {line} has more than one confirmed cell")]
    MultipleConfirmed {
        /// The grid.
        pair: CategoryPair,
        /// The offending line.
        line: Line,
    },
    /// Every cell of a line is excluded.
    #[display("{pair} grid: every cell of {line} is excluded")]
    NoCandidate {
        /// The grid.
        pair: CategoryPair,
        /// The offending line.
        line: Line,
    },
    /// Two pairings of a triple are confirmed while the third is excluded.
    #[display(
        "suspect {suspect}, weapon {weapon} and location {location} are both paired and excluded"
    )]
    BrokenTriangle {
        /// The suspect index.
        suspect: usize,
        /// The weapon index.
        weapon: usize,
        /// The location index.
        location: usize,
    },
}

/// A square grid of [`Cell`]s for one [`CategoryPair`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationGrid {
    pair: CategoryPair,
    size: usize,
    cells: Vec<Cell>,
}

impl RelationGrid {
    /// Creates a grid of `size` × `size` undetermined cells.
    #[must_use]
    pub fn new(pair: CategoryPair, size: usize) -> Self {
        Self {
            pair,
            size,
            cells: vec![Cell::UNDETERMINED; size * size],
        }
    }

    /// Returns the category pair this grid covers.
    #[must_use]
    pub fn pair(&self) -> CategoryPair {
        self.pair
    }

    /// Returns the number of rows (and columns).
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    fn offset(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.size && col < self.size,
            "cell ({row}, {col}) is out of a {0}x{0} grid",
            self.size
        );
        row * self.size + col
    }

    /// Returns the cell at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        self.cells[self.offset(row, col)]
    }

    /// Returns the mark at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    #[must_use]
    pub fn mark(&self, row: usize, col: usize) -> Mark {
        self.cell(row, col).mark()
    }

    /// Marks a cell as stated by a clue.
    ///
    /// Only undetermined cells change. A confirmation is also ignored when
    /// the cell's row or column already holds a confirmed cell, since it
    /// would contradict what is known.
    ///
    /// Returns `true` if the cell changed.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    pub fn mark_stated(&mut self, row: usize, col: usize, mark: Mark) -> bool {
        if mark.is_confirmed()
            && (self.confirmed_in(Line::Row(row)).is_some()
                || self.confirmed_in(Line::Column(col)).is_some())
        {
            return false;
        }
        self.set_if_undetermined(row, col, Cell::stated(mark))
    }

    /// Marks a cell as derived by deduction.
    ///
    /// Only undetermined cells change. Returns `true` if the cell changed.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    pub fn mark_inferred(&mut self, row: usize, col: usize, mark: Mark) -> bool {
        self.set_if_undetermined(row, col, Cell::inferred(mark))
    }

    fn set_if_undetermined(&mut self, row: usize, col: usize, cell: Cell) -> bool {
        let offset = self.offset(row, col);
        if self.cells[offset].is_determined() || !cell.is_determined() {
            return false;
        }
        self.cells[offset] = cell;
        true
    }

    /// Returns the `(row, col)` coordinates of every cell of a line.
    pub fn line_cells(&self, line: Line) -> impl Iterator<Item = (usize, usize)> + use<> {
        (0..self.size).map(move |i| match line {
            Line::Row(row) => (row, i),
            Line::Column(col) => (i, col),
        })
    }

    /// Returns every row and column of the grid.
    pub fn lines(&self) -> impl Iterator<Item = Line> + use<> {
        (0..self.size)
            .map(Line::Row)
            .chain((0..self.size).map(Line::Column))
    }

    /// Returns the coordinates of the first confirmed cell of a line.
    #[must_use]
    pub fn confirmed_in(&self, line: Line) -> Option<(usize, usize)> {
        self.line_cells(line)
            .find(|&(row, col)| self.mark(row, col).is_confirmed())
    }

    /// Returns the coordinates of the undetermined cells of a line.
    #[must_use]
    pub fn undetermined_in(&self, line: Line) -> Vec<(usize, usize)> {
        self.line_cells(line)
            .filter(|&(row, col)| self.mark(row, col).is_undetermined())
            .collect()
    }

    /// Returns the number of undetermined cells.
    #[must_use]
    pub fn undetermined_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_determined()).count()
    }

    /// Checks that no line has two confirmed cells or only excluded cells.
    ///
    /// # Errors
    ///
    /// Returns the first violation found.
    pub fn check_consistency(&self) -> Result<(), ConsistencyError> {
        for line in self.lines() {
            let mut confirmed = 0;
            let mut excluded = 0;
            for (row, col) in self.line_cells(line) {
                match self.mark(row, col) {
                    Mark::Confirmed => confirmed += 1,
                    Mark::Excluded => excluded += 1,
                    Mark::Undetermined => {}
                }
            }
            if confirmed > 1 {
                return Err(ConsistencyError::MultipleConfirmed {
                    pair: self.pair,
                    line,
                });
            }
            if excluded == self.size {
                return Err(ConsistencyError::NoCandidate {
                    pair: self.pair,
                    line,
                });
            }
        }
        Ok(())
    }
}

/// The three relation grids of a puzzle.
///
/// # Examples
///
/// ```
/// use alibi_core::{CategoryPair, Mark, RelationBoard};
///
/// let mut board = RelationBoard::new(2);
/// for pair in CategoryPair::ALL {
///     let grid = board.grid_mut(pair);
///     grid.mark_stated(0, 0, Mark::Confirmed);
///     grid.mark_stated(0, 1, Mark::Excluded);
///     grid.mark_stated(1, 0, Mark::Excluded);
///     grid.mark_stated(1, 1, Mark::Confirmed);
/// }
/// assert!(board.is_solved()?);
/// # Ok::<(), alibi_core::ConsistencyError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationBoard {
    grids: [RelationGrid; 3],
}

impl RelationBoard {
    /// Creates a board of undetermined grids for `size` entities per category.
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            grids: array::from_fn(|i| RelationGrid::new(CategoryPair::ALL[i], size)),
        }
    }

    /// Returns the number of entities per category.
    #[must_use]
    pub fn size(&self) -> usize {
        self.grids[0].size()
    }

    /// Returns the grid of a category pair.
    #[must_use]
    pub fn grid(&self, pair: CategoryPair) -> &RelationGrid {
        &self.grids[pair.index()]
    }

    /// Returns the grid of a category pair mutably.
    pub fn grid_mut(&mut self, pair: CategoryPair) -> &mut RelationGrid {
        &mut self.grids[pair.index()]
    }

    /// Returns the cell at `(row, col)` of a grid.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    #[must_use]
    pub fn cell(&self, pair: CategoryPair, row: usize, col: usize) -> Cell {
        self.grid(pair).cell(row, col)
    }

    /// Returns the number of undetermined cells across all grids.
    #[must_use]
    pub fn undetermined_count(&self) -> usize {
        self.grids.iter().map(RelationGrid::undetermined_count).sum()
    }

    /// Checks every grid for consistency, then checks the grids against each
    /// other.
    ///
    /// For every suspect, weapon and location, confirming two of the three
    /// pairings forces the third, so it must not be excluded.
    ///
    /// # Errors
    ///
    /// Returns the first violation found.
    pub fn check_consistency(&self) -> Result<(), ConsistencyError> {
        self.grids
            .iter()
            .try_for_each(RelationGrid::check_consistency)?;

        let size = self.size();
        for suspect in 0..size {
            for weapon in 0..size {
                for location in 0..size {
                    let marks = [
                        self.cell(CategoryPair::SuspectWeapon, suspect, weapon).mark(),
                        self.cell(CategoryPair::SuspectLocation, suspect, location).mark(),
                        self.cell(CategoryPair::WeaponLocation, weapon, location).mark(),
                    ];
                    let confirmed = marks.iter().filter(|m| m.is_confirmed()).count();
                    let excluded = marks.iter().filter(|m| m.is_excluded()).count();
                    if confirmed == 2 && excluded == 1 {
                        return Err(ConsistencyError::BrokenTriangle {
                            suspect,
                            weapon,
                            location,
                        });
                    }
                }
            }
        }
        Ok(())
    }

    /// Returns whether every cell of every grid is determined.
    ///
    /// A consistent, fully determined board has exactly one confirmed cell in
    /// every row and column.
    ///
    /// # Errors
    ///
    /// Returns [`ConsistencyError`] if the board contains contradictions.
    pub fn is_solved(&self) -> Result<bool, ConsistencyError> {
        self.check_consistency()?;
        Ok(self.undetermined_count() == 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_only_changes_undetermined_cells() {
        let mut grid = RelationGrid::new(CategoryPair::SuspectWeapon, 3);
        assert!(grid.mark_stated(0, 1, Mark::Excluded));
        assert!(!grid.mark_stated(0, 1, Mark::Confirmed));
        assert!(!grid.mark_inferred(0, 1, Mark::Confirmed));
        assert_eq!(grid.cell(0, 1), Cell::stated(Mark::Excluded));
        assert!(!grid.mark_inferred(0, 2, Mark::Undetermined));
    }

    #[test]
    fn test_stated_confirmation_conflicting_with_line_is_ignored() {
        let mut grid = RelationGrid::new(CategoryPair::WeaponLocation, 3);
        assert!(grid.mark_stated(1, 1, Mark::Confirmed));
        assert!(!grid.mark_stated(1, 2, Mark::Confirmed));
        assert!(!grid.mark_stated(0, 1, Mark::Confirmed));
        assert!(grid.mark_stated(1, 2, Mark::Excluded));
        assert!(grid.check_consistency().is_ok());
    }

    #[test]
    fn test_inferred_flag() {
        let mut grid = RelationGrid::new(CategoryPair::SuspectLocation, 2);
        grid.mark_inferred(1, 0, Mark::Excluded);
        assert!(grid.cell(1, 0).is_inferred());
        assert!(!grid.cell(0, 0).is_inferred());
    }

    #[test]
    fn test_consistency_detects_two_confirmed_in_column() {
        let mut grid = RelationGrid::new(CategoryPair::SuspectWeapon, 3);
        grid.mark_inferred(0, 2, Mark::Confirmed);
        grid.mark_inferred(1, 2, Mark::Confirmed);
        assert_eq!(
            grid.check_consistency(),
            Err(ConsistencyError::MultipleConfirmed {
                pair: CategoryPair::SuspectWeapon,
                line: Line::Column(2),
            })
        );
    }

    #[test]
    fn test_consistency_detects_fully_excluded_row() {
        let mut grid = RelationGrid::new(CategoryPair::SuspectWeapon, 2);
        grid.mark_stated(1, 0, Mark::Excluded);
        grid.mark_stated(1, 1, Mark::Excluded);
        assert_eq!(
            grid.check_consistency(),
            Err(ConsistencyError::NoCandidate {
                pair: CategoryPair::SuspectWeapon,
                line: Line::Row(1),
            })
        );
    }

    #[test]
    fn test_consistency_detects_broken_triangle() {
        let mut board = RelationBoard::new(2);
        board
            .grid_mut(CategoryPair::SuspectWeapon)
            .mark_stated(0, 0, Mark::Confirmed);
        board
            .grid_mut(CategoryPair::SuspectLocation)
            .mark_stated(0, 0, Mark::Confirmed);
        board
            .grid_mut(CategoryPair::WeaponLocation)
            .mark_stated(0, 0, Mark::Excluded);
        board
            .grid_mut(CategoryPair::WeaponLocation)
            .mark_stated(1, 1, Mark::Excluded);
        assert!(
            board
                .grids
                .iter()
                .all(|grid| grid.check_consistency().is_ok())
        );
        assert_eq!(
            board.is_solved(),
            Err(ConsistencyError::BrokenTriangle {
                suspect: 0,
                weapon: 0,
                location: 0,
            })
        );
    }

    #[test]
    fn test_consistency_accepts_closed_triangle() {
        let mut board = RelationBoard::new(2);
        board
            .grid_mut(CategoryPair::SuspectWeapon)
            .mark_stated(1, 0, Mark::Confirmed);
        board
            .grid_mut(CategoryPair::WeaponLocation)
            .mark_stated(0, 1, Mark::Confirmed);
        board
            .grid_mut(CategoryPair::SuspectLocation)
            .mark_stated(1, 0, Mark::Excluded);
        assert!(board.check_consistency().is_ok());
        board
            .grid_mut(CategoryPair::SuspectLocation)
            .mark_stated(1, 1, Mark::Confirmed);
        assert!(board.check_consistency().is_ok());
    }

    #[test]
    fn test_line_queries() {
        let mut grid = RelationGrid::new(CategoryPair::SuspectWeapon, 3);
        grid.mark_stated(2, 0, Mark::Excluded);
        grid.mark_stated(2, 1, Mark::Confirmed);
        assert_eq!(grid.confirmed_in(Line::Row(2)), Some((2, 1)));
        assert_eq!(grid.confirmed_in(Line::Column(1)), Some((2, 1)));
        assert_eq!(grid.confirmed_in(Line::Row(0)), None);
        assert_eq!(grid.undetermined_in(Line::Row(2)), vec![(2, 2)]);
        assert_eq!(grid.undetermined_in(Line::Column(0)), vec![(0, 0), (1, 0)]);
        assert_eq!(grid.undetermined_count(), 7);
        assert_eq!(grid.lines().count(), 6);
    }

    #[test]
    fn test_board_starts_unsolved() {
        let board = RelationBoard::new(3);
        assert_eq!(board.size(), 3);
        assert_eq!(board.undetermined_count(), 27);
        assert_eq!(board.is_solved(), Ok(false));
        for pair in CategoryPair::ALL {
            assert_eq!(board.grid(pair).pair(), pair);
        }
    }
}
