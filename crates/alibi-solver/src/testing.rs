//! Test harness for deduction techniques.
//!
//! This module provides [`DeductionTester`], a harness for verifying that
//! deduction techniques mark exactly the cells they should.
//!
//! # Example
//!
//! ```ignore
//! DeductionTester::new(3)
//!     .stated(CategoryPair::SuspectWeapon, 0, 1, Mark::Confirmed)
//!     .apply_once(&LineExclusion::new())
//!     .assert_excluded(CategoryPair::SuspectWeapon, 0, 0)
//!     .assert_untouched(CategoryPair::SuspectLocation, 0, 0);
//! ```

use alibi_core::{CategoryPair, Mark};

use crate::{DeductionGrid, DeductionSolver, Technique};

/// Drives a technique over a grid and checks the marks it leaves.
///
/// `DeductionTester` tracks the initial and current state of a deduction
/// grid, allowing you to apply techniques and assert that they produce the
/// expected changes.
///
/// # Method Chaining
///
/// Every method takes and returns `self`, so a test reads as one chain.
///
/// # Panics
///
/// Assertions panic with the offending cell in the message and report the
/// caller's line through `#[track_caller]`.
#[derive(Debug)]
pub struct DeductionTester {
    initial: DeductionGrid,
    current: DeductionGrid,
}

impl DeductionTester {
    /// Creates a tester over an empty grid for `size` entities per category.
    pub fn new(size: usize) -> Self {
        Self::from_grid(DeductionGrid::new(size))
    }

    /// Creates a tester from an initial grid state.
    pub fn from_grid(initial: DeductionGrid) -> Self {
        let current = initial.clone();
        Self { initial, current }
    }

    /// Records a stated mark in both the initial and current state.
    ///
    /// # Panics
    ///
    /// Panics if the mark could not be placed.
    #[track_caller]
    pub fn stated(mut self, pair: CategoryPair, row: usize, col: usize, mark: Mark) -> Self {
        assert!(
            self.current.mark_stated(pair, row, col, mark),
            "could not state {mark} at {pair} ({row}, {col})"
        );
        self.initial = self.current.clone();
        self
    }

    /// Applies the technique once.
    ///
    /// # Panics
    ///
    /// Panics if the technique returns an error.
    #[track_caller]
    pub fn apply_once<T>(mut self, technique: &T) -> Self
    where
        T: Technique,
    {
        technique.apply(&mut self.current).unwrap();
        self
    }

    /// Applies the technique until it stops changing the grid.
    ///
    /// # Panics
    ///
    /// Panics if the technique returns an error.
    #[track_caller]
    pub fn apply_until_stuck<T>(mut self, technique: &T) -> Self
    where
        T: Technique,
    {
        while technique.apply(&mut self.current).unwrap() {}
        self
    }

    /// Runs a solver to its fixed point.
    ///
    /// # Panics
    ///
    /// Panics if the solver returns an error.
    #[track_caller]
    pub fn solve(mut self, solver: &DeductionSolver) -> Self {
        solver.solve(&mut self.current).unwrap();
        self
    }

    /// Asserts that the cell is confirmed.
    #[track_caller]
    pub fn assert_confirmed(self, pair: CategoryPair, row: usize, col: usize) -> Self {
        self.assert_mark(pair, row, col, Mark::Confirmed)
    }

    /// Asserts that the cell is excluded.
    #[track_caller]
    pub fn assert_excluded(self, pair: CategoryPair, row: usize, col: usize) -> Self {
        self.assert_mark(pair, row, col, Mark::Excluded)
    }

    /// Asserts that the cell is still undetermined.
    #[track_caller]
    pub fn assert_undetermined(self, pair: CategoryPair, row: usize, col: usize) -> Self {
        self.assert_mark(pair, row, col, Mark::Undetermined)
    }

    #[track_caller]
    fn assert_mark(self, pair: CategoryPair, row: usize, col: usize, expected: Mark) -> Self {
        let actual = self.current.cell(pair, row, col).mark();
        assert_eq!(
            actual, expected,
            "{pair} ({row}, {col}): expected {expected}, got {actual}"
        );
        self
    }

    /// Asserts that the cell was changed, and changed by inference.
    #[track_caller]
    pub fn assert_inferred(self, pair: CategoryPair, row: usize, col: usize) -> Self {
        let before = self.initial.cell(pair, row, col);
        let after = self.current.cell(pair, row, col);
        assert_ne!(before, after, "{pair} ({row}, {col}) did not change");
        assert!(
            after.is_inferred(),
            "{pair} ({row}, {col}) changed but is not marked as inferred"
        );
        self
    }

    /// Asserts that the cell has the same state as initially.
    #[track_caller]
    pub fn assert_untouched(self, pair: CategoryPair, row: usize, col: usize) -> Self {
        let before = self.initial.cell(pair, row, col);
        let after = self.current.cell(pair, row, col);
        assert_eq!(before, after, "{pair} ({row}, {col}) changed");
        self
    }

    /// Asserts that nothing changed.
    #[track_caller]
    pub fn assert_no_change(self) -> Self {
        assert_eq!(self.initial, self.current, "grid changed");
        self
    }

    /// Asserts that every cell is determined and the grid is consistent.
    #[track_caller]
    pub fn assert_solved(self) -> Self {
        assert_eq!(self.current.is_solved(), Ok(true), "grid is not solved");
        self
    }
}
