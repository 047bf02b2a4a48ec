use alibi_core::{
    Cast, Cell, CategoryPair, ConsistencyError, Fact, Line, Mark, RelationBoard, phrasing,
};

/// Solver state for deduction.
///
/// This type wraps a [`RelationBoard`] and exposes the operations techniques
/// need: querying lines and marking cells as inferred. Clue facts enter
/// through [`apply_fact`](Self::apply_fact) and are recorded as stated.
///
/// # Examples
///
/// ```
/// use alibi_core::{CategoryPair, Mark};
/// use alibi_solver::DeductionGrid;
///
/// let mut grid = DeductionGrid::new(3);
/// grid.mark_stated(CategoryPair::SuspectWeapon, 0, 2, Mark::Confirmed);
/// assert_eq!(grid.undetermined_count(), 26);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeductionGrid {
    board: RelationBoard,
}

impl From<RelationBoard> for DeductionGrid {
    fn from(board: RelationBoard) -> Self {
        Self { board }
    }
}

impl DeductionGrid {
    /// Creates a grid of undetermined cells for `size` entities per category.
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self::from(RelationBoard::new(size))
    }

    /// Returns the underlying board.
    #[must_use]
    pub fn board(&self) -> &RelationBoard {
        &self.board
    }

    /// Consumes the wrapper and returns the underlying board.
    #[must_use]
    pub fn into_board(self) -> RelationBoard {
        self.board
    }

    /// Returns the number of entities per category.
    #[must_use]
    pub fn size(&self) -> usize {
        self.board.size()
    }

    /// Marks the cell a fact refers to as stated.
    ///
    /// Facts naming entities outside `cast`, facts about a cell that is
    /// already determined, and confirmations whose row or column is already
    /// confirmed elsewhere are ignored.
    ///
    /// Returns `true` if the grid changed.
    pub fn apply_fact(&mut self, cast: &Cast, fact: &Fact) -> bool {
        let Some((row, col)) = fact.resolve(cast) else {
            return false;
        };
        self.mark_stated(fact.relation(), row, col, fact.polarity().mark())
    }

    /// Parses a clue sentence and applies it as a fact.
    ///
    /// Text that matches no clue shape is ignored. Returns `true` if the grid
    /// changed.
    pub fn apply_text(&mut self, cast: &Cast, text: &str) -> bool {
        phrasing::parse_fact(cast, text).is_some_and(|fact| self.apply_fact(cast, &fact))
    }

    /// Marks a cell as stated by a clue.
    ///
    /// This mirrors [`RelationGrid::mark_stated`](alibi_core::RelationGrid::mark_stated).
    pub fn mark_stated(&mut self, pair: CategoryPair, row: usize, col: usize, mark: Mark) -> bool {
        self.board.grid_mut(pair).mark_stated(row, col, mark)
    }

    /// Confirms an undetermined cell as an inference.
    ///
    /// Returns `true` if the cell changed.
    pub fn confirm(&mut self, pair: CategoryPair, row: usize, col: usize) -> bool {
        self.board
            .grid_mut(pair)
            .mark_inferred(row, col, Mark::Confirmed)
    }

    /// Excludes an undetermined cell as an inference.
    ///
    /// Returns `true` if the cell changed.
    pub fn exclude(&mut self, pair: CategoryPair, row: usize, col: usize) -> bool {
        self.board
            .grid_mut(pair)
            .mark_inferred(row, col, Mark::Excluded)
    }

    /// Returns the cell at `(row, col)` of a grid.
    #[must_use]
    pub fn cell(&self, pair: CategoryPair, row: usize, col: usize) -> Cell {
        self.board.cell(pair, row, col)
    }

    /// Returns the coordinates of the confirmed cell of a line, if any.
    #[must_use]
    pub fn confirmed_in(&self, pair: CategoryPair, line: Line) -> Option<(usize, usize)> {
        self.board.grid(pair).confirmed_in(line)
    }

    /// Returns the coordinates of the undetermined cells of a line.
    #[must_use]
    pub fn undetermined_in(&self, pair: CategoryPair, line: Line) -> Vec<(usize, usize)> {
        self.board.grid(pair).undetermined_in(line)
    }

    /// Returns every row and column of a grid.
    pub fn lines(&self, pair: CategoryPair) -> impl Iterator<Item = Line> + use<> {
        self.board.grid(pair).lines()
    }

    /// Returns the coordinates of every cell of a line.
    pub fn line_cells(
        &self,
        pair: CategoryPair,
        line: Line,
    ) -> impl Iterator<Item = (usize, usize)> + use<> {
        self.board.grid(pair).line_cells(line)
    }

    /// Returns the number of undetermined cells across all grids.
    #[must_use]
    pub fn undetermined_count(&self) -> usize {
        self.board.undetermined_count()
    }

    /// Checks whether the grids are consistent.
    ///
    /// # Errors
    ///
    /// Returns [`ConsistencyError`] if a line has two confirmed cells or no
    /// possible cell.
    pub fn check_consistency(&self) -> Result<(), ConsistencyError> {
        self.board.check_consistency()
    }

    /// Returns whether every cell is determined.
    ///
    /// # Errors
    ///
    /// Returns [`ConsistencyError`] if the grids contain contradictions.
    pub fn is_solved(&self) -> Result<bool, ConsistencyError> {
        self.board.is_solved()
    }
}

#[cfg(test)]
mod tests {
    use alibi_core::Entity;

    use super::*;

    fn cast() -> Cast {
        Cast::new(
            vec![Entity::suspect("s1", "Mayor Grey"), Entity::suspect("s2", "Chef Red")],
            vec![Entity::weapon("w1", "Lead Pipe"), Entity::weapon("w2", "Rope")],
            vec![Entity::location("l1", "Library"), Entity::location("l2", "Kitchen")],
        )
        .unwrap()
    }

    #[test]
    fn test_apply_fact_marks_stated_cell() {
        let cast = cast();
        let mut grid = DeductionGrid::new(2);
        assert!(grid.apply_fact(
            &cast,
            &Fact::negative(CategoryPair::WeaponLocation, "w2", "l1")
        ));
        assert_eq!(
            grid.cell(CategoryPair::WeaponLocation, 1, 0),
            Cell::stated(Mark::Excluded)
        );
    }

    #[test]
    fn test_apply_fact_ignores_unknown_entities() {
        let mut grid = DeductionGrid::new(2);
        assert!(!grid.apply_fact(
            &cast(),
            &Fact::positive(CategoryPair::SuspectWeapon, "s7", "w1")
        ));
        assert_eq!(grid.undetermined_count(), 12);
    }

    #[test]
    fn test_apply_text() {
        let cast = cast();
        let mut grid = DeductionGrid::new(2);
        assert!(grid.apply_text(&cast, "Chef Red used the Rope."));
        assert_eq!(
            grid.cell(CategoryPair::SuspectWeapon, 1, 1).mark(),
            Mark::Confirmed
        );
        assert!(!grid.apply_text(&cast, "Chef Red used the Rope."));
        assert!(!grid.apply_text(&cast, "Nobody saw anything."));
        // Contradicts the confirmed cell in the same row.
        assert!(!grid.apply_text(&cast, "Chef Red used the Lead Pipe."));
        assert!(grid.check_consistency().is_ok());
    }

    #[test]
    fn test_inferred_marks() {
        let mut grid = DeductionGrid::new(2);
        assert!(grid.exclude(CategoryPair::SuspectLocation, 0, 0));
        assert!(grid.confirm(CategoryPair::SuspectLocation, 0, 1));
        assert!(!grid.confirm(CategoryPair::SuspectLocation, 0, 0));
        assert!(grid.cell(CategoryPair::SuspectLocation, 0, 1).is_inferred());
    }
}
