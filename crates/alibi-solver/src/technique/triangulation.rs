use alibi_core::{CategoryPair, ConsistencyError, Line};

use super::BoxedTechnique;
use crate::{
    SolverError,
    technique::{DeductionGrid, Technique},
};

const NAME: &str = "triangulation";

/// A technique that closes confirmed pairings across the three grids.
///
/// If two confirmed pairings share an entity, the other two entities belong
/// together as well:
///
/// - suspect–weapon and suspect–location confirm weapon–location
/// - suspect–weapon and weapon–location confirm suspect–location
/// - suspect–location and weapon–location confirm suspect–weapon
///
/// Finding the third pairing already excluded is a contradiction and is
/// reported as [`ConsistencyError::BrokenTriangle`].
///
/// # Examples
///
/// ```
/// use alibi_core::{CategoryPair, Mark};
/// use alibi_solver::technique::{DeductionGrid, Technique, Triangulation};
///
/// let mut grid = DeductionGrid::new(3);
/// grid.mark_stated(CategoryPair::SuspectWeapon, 0, 2, Mark::Confirmed);
/// grid.mark_stated(CategoryPair::SuspectLocation, 0, 1, Mark::Confirmed);
///
/// assert!(Triangulation::new().apply(&mut grid)?);
/// assert_eq!(grid.cell(CategoryPair::WeaponLocation, 2, 1).mark(), Mark::Confirmed);
/// # Ok::<(), alibi_solver::SolverError>(())
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct Triangulation;

impl Triangulation {
    /// Creates a new `Triangulation` technique.
    #[must_use]
    pub const fn new() -> Self {
        Triangulation
    }
}

impl Technique for Triangulation {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedTechnique {
        Box::new(*self)
    }

    fn apply(&self, grid: &mut DeductionGrid) -> Result<bool, SolverError> {
        let mut changed = false;
        for suspect in 0..grid.size() {
            let weapon = grid
                .confirmed_in(CategoryPair::SuspectWeapon, Line::Row(suspect))
                .map(|(_, w)| w);
            let location = grid
                .confirmed_in(CategoryPair::SuspectLocation, Line::Row(suspect))
                .map(|(_, l)| l);

            let weapon_location = match (weapon, location) {
                (Some(weapon), Some(location)) => Some((weapon, location)),
                (Some(weapon), None) => grid
                    .confirmed_in(CategoryPair::WeaponLocation, Line::Row(weapon)),
                (None, Some(location)) => grid
                    .confirmed_in(CategoryPair::WeaponLocation, Line::Column(location)),
                (None, None) => None,
            };
            let Some((weapon, location)) = weapon_location else {
                continue;
            };

            for (pair, row, col) in [
                (CategoryPair::SuspectWeapon, suspect, weapon),
                (CategoryPair::SuspectLocation, suspect, location),
                (CategoryPair::WeaponLocation, weapon, location),
            ] {
                if grid.cell(pair, row, col).mark().is_excluded() {
                    return Err(ConsistencyError::BrokenTriangle {
                        suspect,
                        weapon,
                        location,
                    }
                    .into());
                }
                changed |= grid.confirm(pair, row, col);
            }
        }
        Ok(changed)
    }
}
