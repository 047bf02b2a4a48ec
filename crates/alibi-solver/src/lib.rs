//! Deduction engine for alibi puzzles.
//!
//! The solver marks the three relation grids of a puzzle from a set of clue
//! facts and then applies human-style deductions until nothing changes:
//!
//! - [`technique::LineExclusion`]: a confirmed cell excludes the rest of its row and column
//! - [`technique::LastCandidate`]: the only undetermined cell of a line is confirmed
//! - [`technique::Triangulation`]: two confirmed pairings sharing an entity confirm the third
//!
//! [`DeductionSolver::evaluate`] runs a fresh solve for a clue subset, which
//! is what clue selection is built on.
//!
//! # Examples
//!
//! ```
//! use alibi_core::{Cast, CategoryPair, Entity, Fact};
//! use alibi_solver::DeductionSolver;
//!
//! let cast = Cast::new(
//!     vec![Entity::suspect("s1", "A"), Entity::suspect("s2", "B")],
//!     vec![Entity::weapon("w1", "X"), Entity::weapon("w2", "Y")],
//!     vec![Entity::location("l1", "P"), Entity::location("l2", "Q")],
//! )?;
//! let facts = [
//!     Fact::positive(CategoryPair::SuspectWeapon, "s1", "w2"),
//!     Fact::positive(CategoryPair::SuspectLocation, "s1", "l1"),
//! ];
//!
//! let solver = DeductionSolver::with_all_techniques();
//! let outcome = solver.evaluate(&cast, &facts)?;
//! assert!(outcome.is_solved());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use self::{
    deduction_grid::*,
    deduction_solver::*,
    error::*,
    technique::{BoxedTechnique, Technique},
};

mod deduction_grid;
mod deduction_solver;
mod error;
pub mod technique;

#[cfg(test)]
mod testing;
