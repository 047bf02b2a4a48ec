use alibi_core::ConsistencyError;

/// Errors raised while solving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum SolverError {
    /// The grids hold contradictory marks.
    ///
    /// Clues generated from a consistent scenario never lead here; reaching it
    /// means the clue set or a technique is broken.
    #[display("inconsistent relation grids: {_0}")]
    Inconsistent(ConsistencyError),
}
