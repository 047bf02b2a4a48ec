use alibi_core::{Cast, Fact, RelationBoard};

use crate::{
    DeductionGrid, SolverError,
    technique::{self, BoxedTechnique},
};

/// Upper bound on full passes of a single solve.
pub const DEFAULT_MAX_PASSES: usize = 50;

/// Statistics collected during deduction.
///
/// Tracks how many passes changed a technique's grid and how many full passes
/// made progress.
///
/// # Examples
///
/// ```
/// use alibi_solver::{DeductionGrid, DeductionSolver};
///
/// let solver = DeductionSolver::with_all_techniques();
/// let mut grid = DeductionGrid::new(3);
/// let mut stats = solver.new_stats();
///
/// let _ = solver.solve_with_stats(&mut grid, &mut stats)?;
///
/// for (i, count) in stats.applications().iter().enumerate() {
///     println!("{}: {} times", solver.techniques()[i].name(), count);
/// }
/// # Ok::<(), alibi_solver::SolverError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeductionSolverStats {
    applications: Vec<usize>,
    passes: usize,
}

impl DeductionSolverStats {
    /// Returns technique application counts in solver order.
    ///
    /// Includes techniques that were never applied with a count of `0`.
    #[must_use]
    pub fn applications(&self) -> &[usize] {
        &self.applications
    }

    /// Returns the number of passes that made progress.
    #[must_use]
    pub fn passes(&self) -> usize {
        self.passes
    }

    /// Returns `true` if any technique was applied at least once.
    #[must_use]
    pub fn has_progress(&self) -> bool {
        self.passes > 0
    }
}

/// The result of solving a clue set from scratch.
#[derive(Debug, Clone)]
pub struct SolveOutcome {
    grid: DeductionGrid,
    solved: bool,
    stats: DeductionSolverStats,
}

impl SolveOutcome {
    /// Returns `true` if every cell of every grid was determined.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.solved
    }

    /// Returns the number of cells left undetermined.
    #[must_use]
    pub fn undetermined_count(&self) -> usize {
        self.grid.undetermined_count()
    }

    /// Returns the final grid.
    #[must_use]
    pub fn grid(&self) -> &DeductionGrid {
        &self.grid
    }

    /// Consumes the outcome and returns the final board.
    #[must_use]
    pub fn into_board(self) -> RelationBoard {
        self.grid.into_board()
    }

    /// Returns the solving statistics.
    #[must_use]
    pub fn stats(&self) -> &DeductionSolverStats {
        &self.stats
    }
}

/// A solver that applies deduction techniques to a fixed point.
///
/// Each pass applies every technique once, in order. Solving stops when the
/// grid is solved, when a full pass changes nothing, or after the configured
/// maximum number of passes. The grid is checked for consistency after every
/// technique application.
///
/// The solver holds no state between calls. Every [`evaluate`](Self::evaluate)
/// starts from an empty grid, so marks from one clue set never leak into the
/// evaluation of another.
///
/// # Examples
///
/// ```
/// use alibi_solver::{DeductionGrid, DeductionSolver};
///
/// let solver = DeductionSolver::with_all_techniques();
/// let mut grid = DeductionGrid::new(3);
///
/// let (solved, stats) = solver.solve(&mut grid)?;
/// assert!(!solved);
/// assert!(!stats.has_progress());
/// # Ok::<(), alibi_solver::SolverError>(())
/// ```
#[derive(Debug, Clone)]
pub struct DeductionSolver {
    techniques: Vec<BoxedTechnique>,
    max_passes: usize,
}

impl Default for DeductionSolver {
    fn default() -> Self {
        Self::with_all_techniques()
    }
}

impl DeductionSolver {
    /// Creates a new solver with the specified techniques.
    ///
    /// Techniques are applied in the order they appear in the vector.
    #[must_use]
    pub fn new(techniques: Vec<BoxedTechnique>) -> Self {
        Self {
            techniques,
            max_passes: DEFAULT_MAX_PASSES,
        }
    }

    /// Creates a new solver with all available techniques.
    #[must_use]
    pub fn with_all_techniques() -> Self {
        Self::new(technique::all_techniques())
    }

    /// Sets the maximum number of passes per solve.
    #[must_use]
    pub fn with_max_passes(mut self, max_passes: usize) -> Self {
        self.max_passes = max_passes;
        self
    }

    /// Returns the maximum number of passes per solve.
    #[must_use]
    pub fn max_passes(&self) -> usize {
        self.max_passes
    }

    /// Creates a statistics object aligned with this solver's technique order.
    #[must_use]
    pub fn new_stats(&self) -> DeductionSolverStats {
        DeductionSolverStats {
            applications: vec![0; self.techniques.len()],
            passes: 0,
        }
    }

    /// Returns the configured techniques in application order.
    #[must_use]
    pub fn techniques(&self) -> &[BoxedTechnique] {
        &self.techniques
    }

    /// Applies one full pass of every technique.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - At least one technique changed the grid
    /// * `Ok(false)` - No technique could make progress (fixed point)
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::Inconsistent`] if the grid is or becomes
    /// inconsistent.
    pub fn step(
        &self,
        grid: &mut DeductionGrid,
        stats: &mut DeductionSolverStats,
    ) -> Result<bool, SolverError> {
        debug_assert_eq!(self.techniques.len(), stats.applications.len());
        grid.check_consistency()?;

        let mut changed = false;
        for (i, technique) in self.techniques.iter().enumerate() {
            if technique.apply(grid)? {
                stats.applications[i] += 1;
                changed = true;
                grid.check_consistency()?;
            }
        }
        if changed {
            stats.passes += 1;
        }
        Ok(changed)
    }

    /// Applies passes until the grid is solved or no progress can be made.
    ///
    /// Returns a tuple `(solved, stats)`.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::Inconsistent`] if the grid becomes inconsistent
    /// during solving.
    pub fn solve(
        &self,
        grid: &mut DeductionGrid,
    ) -> Result<(bool, DeductionSolverStats), SolverError> {
        let mut stats = self.new_stats();
        let solved = self.solve_with_stats(grid, &mut stats)?;
        Ok((solved, stats))
    }

    /// Applies passes until the grid is solved or no progress can be made,
    /// using the provided statistics object.
    ///
    /// Returns `true` if the grid is completely solved, `false` if stuck.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::Inconsistent`] if the grid becomes inconsistent
    /// during solving.
    pub fn solve_with_stats(
        &self,
        grid: &mut DeductionGrid,
        stats: &mut DeductionSolverStats,
    ) -> Result<bool, SolverError> {
        for _ in 0..self.max_passes {
            if grid.is_solved()? || !self.step(grid, stats)? {
                break;
            }
        }
        Ok(grid.is_solved()?)
    }

    /// Solves a clue set from an empty grid.
    ///
    /// Every fact is applied as a stated mark first; facts about unknown
    /// entities and facts contradicting earlier ones are ignored. Deduction
    /// then runs to its fixed point.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::Inconsistent`] if deduction reaches a
    /// contradiction.
    pub fn evaluate<'a, I>(&self, cast: &Cast, facts: I) -> Result<SolveOutcome, SolverError>
    where
        I: IntoIterator<Item = &'a Fact>,
    {
        let mut grid = DeductionGrid::new(cast.size());
        for fact in facts {
            grid.apply_fact(cast, fact);
        }
        let (solved, stats) = self.solve(&mut grid)?;
        Ok(SolveOutcome {
            grid,
            solved,
            stats,
        })
    }

    /// Solves a set of clue sentences from an empty grid.
    ///
    /// Sentences that do not parse as facts about `cast` are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::Inconsistent`] if deduction reaches a
    /// contradiction.
    pub fn evaluate_texts<'a, I>(&self, cast: &Cast, texts: I) -> Result<SolveOutcome, SolverError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut grid = DeductionGrid::new(cast.size());
        for text in texts {
            grid.apply_text(cast, text);
        }
        let (solved, stats) = self.solve(&mut grid)?;
        Ok(SolveOutcome {
            grid,
            solved,
            stats,
        })
    }
}
