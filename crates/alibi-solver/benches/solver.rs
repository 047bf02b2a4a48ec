//! Benchmarks for solving clue sets.
//!
//! This benchmark suite measures a full [`DeductionSolver::evaluate`] call,
//! which is what clue selection runs once per candidate and once per pruning
//! trial.
//!
//! # Benchmarks
//!
//! - **`evaluate_positive`**: the `N` suspect-weapon and `N - 1`
//!   suspect-location facts of a diagonal scenario, which solve the grid.
//! - **`evaluate_stalled`**: negative facts only, which stall early.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench solver
//! ```

use std::hint;

use alibi_core::{Cast, CategoryPair, Entity, Fact};
use alibi_solver::DeductionSolver;
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

const SIZES: [usize; 3] = [3, 4, 6];

fn cast(size: usize) -> Cast {
    let make = |prefix: &str, f: fn(String, String) -> Entity| {
        (0..size)
            .map(|i| f(format!("{prefix}{i}"), format!("{prefix} {i}")))
            .collect::<Vec<_>>()
    };
    Cast::new(
        make("s", |id, name| Entity::suspect(id, name)),
        make("w", |id, name| Entity::weapon(id, name)),
        make("l", |id, name| Entity::location(id, name)),
    )
    .unwrap()
}

fn positive_facts(size: usize) -> Vec<Fact> {
    let sw = (0..size).map(|i| Fact::positive(CategoryPair::SuspectWeapon, format!("s{i}"), format!("w{i}")));
    let sl = (1..size).map(|i| Fact::positive(CategoryPair::SuspectLocation, format!("s{i}"), format!("l{i}")));
    sw.chain(sl).collect()
}

fn negative_facts(size: usize) -> Vec<Fact> {
    (1..size)
        .map(|i| Fact::negative(CategoryPair::WeaponLocation, "w0", format!("l{i}")))
        .collect()
}

fn bench_evaluate_positive(c: &mut Criterion) {
    let solver = DeductionSolver::with_all_techniques();
    for size in SIZES {
        let cast = cast(size);
        let facts = positive_facts(size);
        c.bench_with_input(
            BenchmarkId::new("evaluate_positive", size),
            &facts,
            |b, facts| {
                b.iter(|| solver.evaluate(&cast, hint::black_box(facts)).unwrap());
            },
        );
    }
}

fn bench_evaluate_stalled(c: &mut Criterion) {
    let solver = DeductionSolver::with_all_techniques();
    for size in SIZES {
        let cast = cast(size);
        let facts = negative_facts(size);
        c.bench_with_input(
            BenchmarkId::new("evaluate_stalled", size),
            &facts,
            |b, facts| {
                b.iter(|| solver.evaluate(&cast, hint::black_box(facts)).unwrap());
            },
        );
    }
}

criterion_group!(benches, bench_evaluate_positive, bench_evaluate_stalled);
criterion_main!(benches);
