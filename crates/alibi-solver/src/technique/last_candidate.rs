use alibi_core::CategoryPair;

use super::BoxedTechnique;
use crate::{
    SolverError,
    technique::{DeductionGrid, Technique},
};

const NAME: &str = "last candidate";

/// A technique that confirms the only cell of a line that is not excluded.
///
/// Every row and column of a relation grid has exactly one confirmed cell.
/// When all cells of a line but one are excluded and none is confirmed, the
/// remaining cell must be the confirmed one.
///
/// # Examples
///
/// ```
/// use alibi_core::{CategoryPair, Mark};
/// use alibi_solver::technique::{DeductionGrid, LastCandidate, Technique};
///
/// let mut grid = DeductionGrid::new(2);
/// grid.mark_stated(CategoryPair::SuspectWeapon, 0, 0, Mark::Excluded);
///
/// assert!(LastCandidate::new().apply(&mut grid)?);
/// assert_eq!(grid.cell(CategoryPair::SuspectWeapon, 0, 1).mark(), Mark::Confirmed);
/// # Ok::<(), alibi_solver::SolverError>(())
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct LastCandidate;

impl LastCandidate {
    /// Creates a new `LastCandidate` technique.
    #[must_use]
    pub const fn new() -> Self {
        LastCandidate
    }
}

impl Technique for LastCandidate {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedTechnique {
        Box::new(*self)
    }

    fn apply(&self, grid: &mut DeductionGrid) -> Result<bool, SolverError> {
        let mut changed = false;
        for pair in CategoryPair::ALL {
            for line in grid.lines(pair) {
                if grid.confirmed_in(pair, line).is_some() {
                    continue;
                }
                if let [(row, col)] = grid.undetermined_in(pair, line)[..] {
                    changed |= grid.confirm(pair, row, col);
                }
            }
        }
        Ok(changed)
    }
}
