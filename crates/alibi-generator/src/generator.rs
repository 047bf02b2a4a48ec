use alibi_core::{Cast, Clue, ClueContent, IdentityFact, PuzzleData, Solution, phrasing};
use alibi_solver::DeductionSolver;

use crate::{
    CluePool, EntityPools, GeneratorError, HintSelector, PuzzleSeed, Scenario, SeedStream,
    SelectionStats, check_grid_size, choose_difficulty,
};

/// A puzzle generator backed by a deduction solver.
///
/// The solver decides which clues are informative: a clue is only kept if
/// the solver makes progress with it, and the finished clue set is exactly
/// what the solver needs to determine every cell. A weaker solver therefore
/// produces puzzles with more clues.
#[derive(Debug)]
pub struct PuzzleGenerator<'a> {
    solver: &'a DeductionSolver,
    front_load_positive: bool,
}

/// A generated puzzle before it is packaged for a player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// The seed used to generate the puzzle.
    pub seed: PuzzleSeed,
    /// The entities the puzzle is about.
    pub cast: Cast,
    /// The culprit's suspect, weapon and location.
    pub solution: Solution,
    /// The clues in presentation order, identity clue last.
    pub clues: Vec<Clue>,
    /// Counters from hint selection.
    pub stats: SelectionStats,
}

impl GeneratedPuzzle {
    /// Packages the puzzle under a label.
    #[must_use]
    pub fn into_data(self, label: impl Into<String>) -> PuzzleData {
        PuzzleData::new(label, self.cast, self.solution, self.clues)
    }

    /// Returns the clue texts in presentation order.
    pub fn clue_texts(&self) -> impl Iterator<Item = &str> {
        self.clues.iter().map(Clue::text)
    }
}

impl<'a> PuzzleGenerator<'a> {
    /// Creates a new puzzle generator.
    #[must_use]
    pub fn new(solver: &'a DeductionSolver) -> Self {
        Self {
            solver,
            front_load_positive: true,
        }
    }

    /// Sets whether positive facts are tried before negative ones.
    #[must_use]
    pub fn with_front_load_positive(mut self, front_load_positive: bool) -> Self {
        self.front_load_positive = front_load_positive;
        self
    }

    /// Generates the puzzle for a label, such as a date.
    ///
    /// The seed is derived from the label and decides the grid size.
    ///
    /// # Errors
    ///
    /// Returns an error if the pools cannot fill the grid or generation fails.
    pub fn generate_daily(
        &self,
        pools: &EntityPools,
        label: &str,
    ) -> Result<PuzzleData, GeneratorError> {
        let seed = PuzzleSeed::from_label(label);
        let puzzle = self.generate_with_seed(pools, seed, None)?;
        Ok(puzzle.into_data(label))
    }

    /// Generates a puzzle from a seed, drawing the cast from `pools`.
    ///
    /// If `size` is `None`, the seed chooses between the easy and normal
    /// grid sizes.
    ///
    /// # Errors
    ///
    /// Returns an error if `size` is out of range, the pools cannot fill
    /// the grid, or generation fails.
    pub fn generate_with_seed(
        &self,
        pools: &EntityPools,
        seed: PuzzleSeed,
        size: Option<usize>,
    ) -> Result<GeneratedPuzzle, GeneratorError> {
        let size = size.unwrap_or_else(|| choose_difficulty(seed).grid_size());
        let cast = pools.select_cast(seed, size)?;
        self.generate(&cast, seed)
    }

    /// Generates a puzzle for a fixed cast.
    ///
    /// The seed decides the hidden scenario, which facts become clues, the
    /// identity statement and the presentation order. Equal casts and seeds
    /// always give equal puzzles.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::InvalidGridSize`] if the cast is larger
    /// than the generator supports. The remaining errors indicate a
    /// disagreement between the clues and the solver and should not occur
    /// with a consistent solver.
    pub fn generate(&self, cast: &Cast, seed: PuzzleSeed) -> Result<GeneratedPuzzle, GeneratorError> {
        check_grid_size(cast.size())?;

        let scenario = Scenario::build(cast, seed);
        let pool = CluePool::synthesize(cast, &scenario);
        let selection = HintSelector::new(self.solver)
            .with_front_load_positive(self.front_load_positive)
            .select(cast, &scenario, &pool, seed)?;
        let solution = scenario.solution(cast).ok_or(GeneratorError::Unsolvable)?;

        let facts = seed
            .stream(SeedStream::PresentationOrder)
            .shuffle(&selection.facts);
        let mut clues = Vec::with_capacity(facts.len() + 1);
        for fact in facts {
            let text = phrasing::render_fact(cast, &fact).ok_or(GeneratorError::UnknownEntity)?;
            let id = format!("h{}", clues.len() + 1);
            clues.push(Clue::new(id, text, ClueContent::Fact(fact)));
        }
        let text = phrasing::render_identity(cast, &selection.identity)
            .ok_or(GeneratorError::UnknownEntity)?;
        let id = format!("h{}", clues.len() + 1);
        clues.push(Clue::new(id, text, ClueContent::Identity(selection.identity.clone())));

        self.verify(cast, &clues, &selection.identity, &solution)?;

        log::info!(
            "generated puzzle {seed}: size {}, {} clues, {} pruned",
            cast.size(),
            clues.len(),
            selection.stats.pruned
        );
        Ok(GeneratedPuzzle {
            seed,
            cast: cast.clone(),
            solution,
            clues,
            stats: selection.stats,
        })
    }

    /// Re-solves the rendered clues the way a player would read them.
    fn verify(
        &self,
        cast: &Cast,
        clues: &[Clue],
        identity: &IdentityFact,
        solution: &Solution,
    ) -> Result<(), GeneratorError> {
        let texts = clues
            .iter()
            .filter(|clue| clue.kind().is_normal())
            .map(Clue::text);
        let outcome = self.solver.evaluate_texts(cast, texts)?;
        if !outcome.is_solved() {
            return Err(GeneratorError::Unsolvable);
        }
        match Solution::deduce(cast, outcome.grid().board(), identity) {
            Some(deduced) if deduced == *solution => Ok(()),
            _ => Err(GeneratorError::AmbiguousCulprit),
        }
    }
}

#[cfg(test)]
mod tests {
    use alibi_core::ClueKind;

    use super::*;
    use crate::testing::{letter_cast, numbered_cast};

    #[test]
    fn test_generate_is_deterministic() {
        let solver = DeductionSolver::with_all_techniques();
        let generator = PuzzleGenerator::new(&solver);
        let cast = numbered_cast(4);
        let a = generator.generate(&cast, PuzzleSeed::new(7)).unwrap();
        let b = generator.generate(&cast, PuzzleSeed::new(7)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_identity_clue_is_last() {
        let solver = DeductionSolver::with_all_techniques();
        let generator = PuzzleGenerator::new(&solver);
        let puzzle = generator.generate(&letter_cast(), PuzzleSeed::new(42)).unwrap();
        let (last, rest) = puzzle.clues.split_last().unwrap();
        assert_eq!(last.kind(), ClueKind::Identity);
        assert!(rest.iter().all(|clue| clue.kind() == ClueKind::Normal));
    }

    #[test]
    fn test_clue_ids_are_sequential() {
        let solver = DeductionSolver::with_all_techniques();
        let generator = PuzzleGenerator::new(&solver);
        let puzzle = generator.generate(&numbered_cast(3), PuzzleSeed::new(1)).unwrap();
        for (i, clue) in puzzle.clues.iter().enumerate() {
            assert_eq!(clue.id(), format!("h{}", i + 1));
        }
    }

    #[test]
    fn test_clue_texts_round_trip() {
        let solver = DeductionSolver::with_all_techniques();
        let generator = PuzzleGenerator::new(&solver);
        let cast = numbered_cast(4);
        let puzzle = generator.generate(&cast, PuzzleSeed::new(3)).unwrap();
        for clue in &puzzle.clues {
            match clue.content() {
                ClueContent::Fact(fact) => {
                    assert_eq!(phrasing::parse_fact(&cast, clue.text()).as_ref(), Some(fact));
                }
                ClueContent::Identity(identity) => {
                    assert_eq!(
                        phrasing::parse_identity(&cast, clue.text()).as_ref(),
                        Some(identity)
                    );
                }
            }
        }
    }

    #[test]
    fn test_generate_with_seed_picks_standard_size() {
        let solver = DeductionSolver::with_all_techniques();
        let generator = PuzzleGenerator::new(&solver);
        let pools = EntityPools::builtin();
        for seed in 0..10 {
            let seed = PuzzleSeed::new(seed);
            let puzzle = generator.generate_with_seed(&pools, seed, None).unwrap();
            assert_eq!(puzzle.cast.size(), choose_difficulty(seed).grid_size());
        }
        let puzzle = generator
            .generate_with_seed(&pools, PuzzleSeed::new(0), Some(6))
            .unwrap();
        assert_eq!(puzzle.cast.size(), 6);
    }

    #[test]
    fn test_generate_daily_is_stable() {
        let solver = DeductionSolver::with_all_techniques();
        let generator = PuzzleGenerator::new(&solver);
        let pools = EntityPools::builtin();
        let a = generator.generate_daily(&pools, "2025-01-31").unwrap();
        let b = generator.generate_daily(&pools, "2025-01-31").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.label(), "2025-01-31");
        assert!(a.difficulty().is_some());
    }

    #[test]
    fn test_oversized_cast_is_rejected() {
        let solver = DeductionSolver::with_all_techniques();
        let generator = PuzzleGenerator::new(&solver);
        let result = generator.generate(&numbered_cast(9), PuzzleSeed::new(0));
        assert!(matches!(
            result,
            Err(GeneratorError::InvalidGridSize { size: 9 })
        ));
    }
}
