use alibi_core::{CategoryPair, Line};

use super::BoxedTechnique;
use crate::{
    SolverError,
    technique::{DeductionGrid, Technique},
};

const NAME: &str = "line exclusion";

/// A technique that excludes every other cell in the row and column of a
/// confirmed cell.
///
/// Each entity pairs with exactly one entity of every other category, so once
/// a pairing is confirmed, no other cell of its row or column can be.
///
/// This technique is the solver's propagation step: the other techniques only
/// confirm cells, and the resulting exclusions happen when control returns here.
///
/// # Examples
///
/// ```
/// use alibi_core::{CategoryPair, Mark};
/// use alibi_solver::technique::{DeductionGrid, LineExclusion, Technique};
///
/// let mut grid = DeductionGrid::new(3);
/// grid.mark_stated(CategoryPair::SuspectWeapon, 0, 0, Mark::Confirmed);
///
/// let changed = LineExclusion::new().apply(&mut grid)?;
/// assert!(changed);
/// # Ok::<(), alibi_solver::SolverError>(())
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct LineExclusion;

impl LineExclusion {
    /// Creates a new `LineExclusion` technique.
    #[must_use]
    pub const fn new() -> Self {
        LineExclusion
    }
}

impl Technique for LineExclusion {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedTechnique {
        Box::new(*self)
    }

    fn apply(&self, grid: &mut DeductionGrid) -> Result<bool, SolverError> {
        let mut changed = false;
        for pair in CategoryPair::ALL {
            for row in 0..grid.size() {
                let Some((_, col)) = grid.confirmed_in(pair, Line::Row(row)) else {
                    continue;
                };
                let peers = grid
                    .line_cells(pair, Line::Row(row))
                    .chain(grid.line_cells(pair, Line::Column(col)))
                    .filter(|&cell| cell != (row, col));
                for (r, c) in peers {
                    changed |= grid.exclude(pair, r, c);
                }
            }
        }
        Ok(changed)
    }
}

#[cfg(test)]
mod tests {
    use alibi_core::Mark;

    use super::*;
    use crate::testing::DeductionTester;

    #[test]
    fn test_excludes_row_and_column() {
        DeductionTester::new(3)
            .stated(CategoryPair::SuspectLocation, 1, 2, Mark::Confirmed)
            .apply_once(&LineExclusion::new())
            // same row
            .assert_excluded(CategoryPair::SuspectLocation, 1, 0)
            .assert_inferred(CategoryPair::SuspectLocation, 1, 0)
            .assert_excluded(CategoryPair::SuspectLocation, 1, 1)
            // same column
            .assert_excluded(CategoryPair::SuspectLocation, 0, 2)
            .assert_excluded(CategoryPair::SuspectLocation, 2, 2)
            // elsewhere
            .assert_undetermined(CategoryPair::SuspectLocation, 0, 0)
            .assert_untouched(CategoryPair::SuspectWeapon, 1, 0)
            .assert_untouched(CategoryPair::SuspectLocation, 1, 2);
    }

    #[test]
    fn test_keeps_stated_marks() {
        DeductionTester::new(2)
            .stated(CategoryPair::WeaponLocation, 0, 0, Mark::Confirmed)
            .stated(CategoryPair::WeaponLocation, 0, 1, Mark::Excluded)
            .apply_once(&LineExclusion::new())
            .assert_untouched(CategoryPair::WeaponLocation, 0, 1)
            .assert_inferred(CategoryPair::WeaponLocation, 1, 0);
    }

    #[test]
    fn test_no_change_without_confirmed_cells() {
        DeductionTester::new(3)
            .stated(CategoryPair::SuspectWeapon, 0, 0, Mark::Excluded)
            .apply_once(&LineExclusion::new())
            .assert_no_change();
    }
}
