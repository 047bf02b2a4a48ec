use alibi_core::{CastError, Category};
use alibi_solver::SolverError;

use crate::MAX_GRID_SIZE;

/// Errors that can occur while generating a puzzle.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum GeneratorError {
    /// The selected entities do not form a valid cast.
    #[display("invalid cast: {_0}")]
    #[from]
    Cast(CastError),
    /// The deduction engine reported a contradiction.
    #[display("deduction failed: {_0}")]
    #[from]
    Solver(SolverError),
    /// The requested grid size is out of range.
    #[display("grid size {size} is outside 1..={}", MAX_GRID_SIZE)]
    InvalidGridSize {
        /// The requested size.
        size: usize,
    },
    /// An entity pool holds fewer entities than the grid needs.
    #[display("the {category} pool has {available} entities but {required} are needed")]
    PoolTooSmall {
        /// Category of the short pool.
        category: Category,
        /// Entities the grid needs.
        required: usize,
        /// Entities in the pool.
        available: usize,
    },
    /// A fact or identity statement names an entity outside the cast.
    #[display("a clue names an entity outside the cast")]
    UnknownEntity,
    /// Every clue was added and the grid is still not determined.
    #[display("the clues never determine the grid")]
    Unsolvable,
    /// The finished clues lead to a different culprit than the scenario's.
    #[display("the clues do not single out the culprit")]
    AmbiguousCulprit,
}
