//! Seeded puzzle generation for alibi.
//!
//! Generation runs in fixed stages, each drawing from its own random stream
//! of the [`PuzzleSeed`]:
//!
//! 1. [`EntityPools::select_cast`] draws the suspects, weapons and locations.
//! 2. [`Scenario::build`] pairs them into the hidden truth; the first row is
//!    the culprit's.
//! 3. [`CluePool::synthesize`] lists every true fact about the scenario.
//! 4. [`HintSelector`] keeps only the facts the solver needs, then adds the
//!    statement that singles out the culprit.
//! 5. [`PuzzleGenerator`] renders the clues and checks that they solve.
//!
//! # Examples
//!
//! ```
//! use alibi_generator::{EntityPools, PuzzleGenerator, PuzzleSeed};
//! use alibi_solver::DeductionSolver;
//!
//! let solver = DeductionSolver::with_all_techniques();
//! let generator = PuzzleGenerator::new(&solver);
//! let puzzle = generator.generate_with_seed(&EntityPools::builtin(), PuzzleSeed::new(42), Some(3))?;
//!
//! assert_eq!(puzzle.cast.size(), 3);
//! for clue in &puzzle.clues {
//!     println!("{}", clue.text());
//! }
//! # Ok::<(), alibi_generator::GeneratorError>(())
//! ```

pub use self::{error::*, generator::*, pool::*, rng::*, scenario::*, seed::*, selector::*, synthesizer::*};

mod error;
mod generator;
mod pool;
mod rng;
mod scenario;
mod seed;
mod selector;
mod synthesizer;

#[cfg(test)]
mod testing;
