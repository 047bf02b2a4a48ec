//! Chooses a minimal set of clues that determines the grid.

use alibi_core::{Cast, Category, CategoryPair, Fact, IdentityFact, phrasing};
use alibi_solver::DeductionSolver;

use crate::{CluePool, GeneratorError, PuzzleSeed, Scenario, SeedStream};

/// Counters describing one selection run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionStats {
    /// Candidates accepted during accumulation.
    pub accepted: usize,
    /// Candidates rejected because they revealed nothing new.
    pub rejected: usize,
    /// Positive facts added after the pool ran out.
    pub fallback: usize,
    /// Accepted facts removed as redundant.
    pub pruned: usize,
}

/// The clues chosen for a puzzle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// Facts that together determine every cell, in acceptance order.
    pub facts: Vec<Fact>,
    /// The statement that singles out the culprit.
    pub identity: IdentityFact,
    /// Counters for the run.
    pub stats: SelectionStats,
}

/// Selects hints by greedy accumulation followed by pruning.
///
/// Candidates are drawn from a shuffled pool and kept only if they strictly
/// reduce the number of undetermined cells the solver leaves behind.
/// Accumulation stops as soon as the grid is determined. Afterwards each
/// kept fact, last to first, is dropped if the remaining facts still
/// determine the grid.
#[derive(Debug)]
pub struct HintSelector<'a> {
    solver: &'a DeductionSolver,
    front_load_positive: bool,
}

impl<'a> HintSelector<'a> {
    /// Creates a selector that front-loads positive facts.
    #[must_use]
    pub fn new(solver: &'a DeductionSolver) -> Self {
        Self {
            solver,
            front_load_positive: true,
        }
    }

    /// Sets whether positive facts are tried before negative ones.
    ///
    /// With front-loading off the whole pool is shuffled together, which
    /// tends to produce puzzles with more negative clues.
    #[must_use]
    pub fn with_front_load_positive(mut self, front_load_positive: bool) -> Self {
        self.front_load_positive = front_load_positive;
        self
    }

    /// Returns whether positive facts are tried first.
    #[must_use]
    pub fn front_load_positive(&self) -> bool {
        self.front_load_positive
    }

    /// Selects the clues for a scenario.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::Solver`] if the facts contradict each other,
    /// which only happens when `pool` disagrees with `scenario`, and
    /// [`GeneratorError::Unsolvable`] if even the scenario's positive facts
    /// do not determine the grid.
    pub fn select(
        &self,
        cast: &Cast,
        scenario: &Scenario,
        pool: &CluePool,
        seed: PuzzleSeed,
    ) -> Result<Selection, GeneratorError> {
        let mut stats = SelectionStats::default();
        let candidates = self.order_candidates(pool, seed);
        let (mut facts, solved) = self.accumulate(cast, candidates, &mut stats)?;
        if !solved {
            log::warn!(
                "clue pool exhausted after {} facts without determining the grid; adding positive facts",
                facts.len()
            );
            self.complete_with_positives(cast, scenario, &mut facts, &mut stats)?;
        }
        self.prune(cast, &mut facts, &mut stats)?;

        let identity = choose_identity(cast, scenario, seed);
        log::debug!(
            "selected {} facts: {} accepted, {} rejected, {} fallback, {} pruned",
            facts.len(),
            stats.accepted,
            stats.rejected,
            stats.fallback,
            stats.pruned
        );
        Ok(Selection {
            facts,
            identity,
            stats,
        })
    }

    fn order_candidates(&self, pool: &CluePool, seed: PuzzleSeed) -> Vec<Fact> {
        let mut rng = seed.stream(SeedStream::CluePool);
        if self.front_load_positive {
            let mut candidates = rng.shuffle(pool.positive());
            candidates.extend(rng.shuffle(pool.negative()));
            candidates
        } else {
            let all: Vec<Fact> = pool.iter().cloned().collect();
            rng.shuffle(&all)
        }
    }

    fn accumulate(
        &self,
        cast: &Cast,
        candidates: Vec<Fact>,
        stats: &mut SelectionStats,
    ) -> Result<(Vec<Fact>, bool), GeneratorError> {
        let mut accepted: Vec<Fact> = vec![];
        let mut undetermined = self.solver.evaluate(cast, &accepted)?.undetermined_count();
        if undetermined == 0 {
            return Ok((accepted, true));
        }

        for candidate in candidates {
            let outcome = self
                .solver
                .evaluate(cast, accepted.iter().chain([&candidate]))?;
            if outcome.undetermined_count() >= undetermined {
                log::debug!("rejected: {}", describe(cast, &candidate));
                stats.rejected += 1;
                continue;
            }
            log::debug!(
                "accepted: {} ({} -> {} undetermined)",
                describe(cast, &candidate),
                undetermined,
                outcome.undetermined_count()
            );
            undetermined = outcome.undetermined_count();
            accepted.push(candidate);
            stats.accepted += 1;
            if outcome.is_solved() {
                return Ok((accepted, true));
            }
        }
        Ok((accepted, false))
    }

    fn complete_with_positives(
        &self,
        cast: &Cast,
        scenario: &Scenario,
        facts: &mut Vec<Fact>,
        stats: &mut SelectionStats,
    ) -> Result<(), GeneratorError> {
        let positives = scenario.rows().iter().flat_map(|row| {
            [CategoryPair::SuspectWeapon, CategoryPair::SuspectLocation].map(|pair| {
                let (r, c) = row.project(pair);
                Fact::positive(
                    pair,
                    cast.entity(pair.rows(), r).id().clone(),
                    cast.entity(pair.columns(), c).id().clone(),
                )
            })
        });
        for fact in positives {
            if facts.contains(&fact) {
                continue;
            }
            log::debug!("fallback: {}", describe(cast, &fact));
            facts.push(fact);
            stats.fallback += 1;
            if self.solver.evaluate(cast, facts.iter())?.is_solved() {
                return Ok(());
            }
        }
        Err(GeneratorError::Unsolvable)
    }

    fn prune(
        &self,
        cast: &Cast,
        facts: &mut Vec<Fact>,
        stats: &mut SelectionStats,
    ) -> Result<(), GeneratorError> {
        for i in (0..facts.len()).rev() {
            let others = facts
                .iter()
                .enumerate()
                .filter(|&(j, _)| j != i)
                .map(|(_, fact)| fact);
            if self.solver.evaluate(cast, others)?.is_solved() {
                let fact = facts.remove(i);
                log::debug!("pruned: {}", describe(cast, &fact));
                stats.pruned += 1;
            }
        }
        Ok(())
    }
}

/// Names the culprit's weapon or location, chosen by a fair coin.
fn choose_identity(cast: &Cast, scenario: &Scenario, seed: PuzzleSeed) -> IdentityFact {
    let culprit = scenario.culprit();
    let id = |category| {
        let index = culprit.map_or(0, |row| row.get(category));
        cast.entity(category, index).id().clone()
    };
    if seed.stream(SeedStream::IdentityCoin).coin_flip() {
        IdentityFact::Weapon(id(Category::Weapon))
    } else {
        IdentityFact::Location(id(Category::Location))
    }
}

fn describe(cast: &Cast, fact: &Fact) -> String {
    phrasing::render_fact(cast, fact).unwrap_or_else(|| format!("{fact:?}"))
}
