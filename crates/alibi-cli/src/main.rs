//! Command-line front end for alibi puzzles.
//!
//! # Usage
//!
//! Generate today's puzzle from a date label:
//!
//! ```sh
//! alibi generate --label 2025-01-31
//! ```
//!
//! Generate from a numeric seed with a larger grid and show the answer:
//!
//! ```sh
//! alibi generate --seed 42 --size 5 --reveal
//! ```
//!
//! Check solvability and minimality for 10000 consecutive seeds:
//!
//! ```sh
//! alibi verify --count 10000
//! ```
//!
//! Set `RUST_LOG=debug` to trace clue selection.

use std::process;

use alibi_core::{Cast, Category, Clue, ClueKind, Difficulty, Entity, EntityId, Solution};
use alibi_generator::{
    EntityPools, GeneratedPuzzle, GeneratorError, PuzzleGenerator, PuzzleSeed, SelectionStats,
    check_grid_size, choose_difficulty,
};
use alibi_solver::{DeductionSolver, DeductionSolverStats, SolverError};
use clap::{Args, Parser, Subcommand};
use rayon::prelude::*;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate a puzzle and print its clues.
    Generate(GenerateArgs),
    /// Generate puzzles for a range of seeds and check their properties.
    Verify(VerifyArgs),
}

#[derive(Debug, Args)]
struct GenerateArgs {
    /// Numeric seed. A random seed is used if neither this nor a label is given.
    #[arg(long, value_name = "SEED", conflicts_with = "label")]
    seed: Option<PuzzleSeed>,

    /// Label to derive the seed from, such as a date.
    #[arg(long, value_name = "TEXT")]
    label: Option<String>,

    /// Entities per category. Chosen by the seed if omitted.
    #[arg(long, value_name = "N", value_parser = parse_size)]
    size: Option<usize>,

    /// Shuffle positive and negative facts together instead of trying positive facts first.
    #[arg(long)]
    no_front_load: bool,

    /// Print the solution.
    #[arg(long)]
    reveal: bool,
}

#[derive(Debug, Args)]
struct VerifyArgs {
    /// Number of consecutive seeds to check.
    #[arg(long, value_name = "COUNT", default_value_t = 1000)]
    count: u32,

    /// First seed to check.
    #[arg(long, value_name = "SEED", default_value_t = 0)]
    start: u32,

    /// Entities per category. Chosen by each seed if omitted.
    #[arg(long, value_name = "N", value_parser = parse_size)]
    size: Option<usize>,

    /// Shuffle positive and negative facts together instead of trying positive facts first.
    #[arg(long)]
    no_front_load: bool,
}

fn parse_size(s: &str) -> Result<usize, String> {
    let size: usize = s.parse().map_err(|e| format!("{e}"))?;
    check_grid_size(size).map_err(|e| e.to_string())?;
    Ok(size)
}

fn main() {
    better_panic::install();
    env_logger::init();

    let cli = Cli::parse();
    let solver = DeductionSolver::with_all_techniques();
    match cli.command {
        Command::Generate(args) => {
            if let Err(err) = generate(&solver, &args) {
                eprintln!("Failed to generate puzzle: {err}");
                process::exit(1);
            }
        }
        Command::Verify(args) => {
            if args.count == 0 {
                eprintln!("--count must be at least 1.");
                process::exit(2);
            }
            if !verify(&solver, &args) {
                process::exit(1);
            }
        }
    }
}

fn generate(solver: &DeductionSolver, args: &GenerateArgs) -> Result<(), Failure> {
    let (label, seed) = match (&args.label, args.seed) {
        (Some(label), _) => (label.clone(), PuzzleSeed::from_label(label)),
        (None, Some(seed)) => (seed.to_string(), seed),
        (None, None) => {
            let seed = PuzzleSeed::random();
            (seed.to_string(), seed)
        }
    };
    let generator = PuzzleGenerator::new(solver).with_front_load_positive(!args.no_front_load);
    let puzzle = generator.generate_with_seed(&EntityPools::builtin(), seed, args.size)?;
    let stats = solve_stats(solver, &puzzle)?;
    print_puzzle(&label, &puzzle, solver, &stats, args.reveal);
    Ok(())
}

fn solve_stats(
    solver: &DeductionSolver,
    puzzle: &GeneratedPuzzle,
) -> Result<DeductionSolverStats, SolverError> {
    let outcome = solver.evaluate_texts(&puzzle.cast, puzzle.clue_texts())?;
    Ok(outcome.stats().clone())
}

fn print_puzzle(
    label: &str,
    puzzle: &GeneratedPuzzle,
    solver: &DeductionSolver,
    stats: &DeductionSolverStats,
    reveal: bool,
) {
    let cast = &puzzle.cast;

    println!("Label:");
    println!("  {label}");
    println!();
    println!("Seed:");
    println!("  {}", puzzle.seed);
    println!();
    println!("Difficulty:");
    match Difficulty::for_grid_size(cast.size()) {
        Some(difficulty) => println!("  {difficulty} ({} per category)", cast.size()),
        None => println!("  custom ({} per category)", cast.size()),
    }
    println!();

    for (title, category) in [
        ("Suspects", Category::Suspect),
        ("Weapons", Category::Weapon),
        ("Locations", Category::Location),
    ] {
        let names: Vec<&str> = cast.entities(category).iter().map(Entity::name).collect();
        println!("{title}:");
        println!("  {}", names.join(", "));
        println!();
    }

    println!("Clues:");
    for clue in &puzzle.clues {
        let marker = match clue.kind() {
            ClueKind::Normal => ' ',
            ClueKind::Identity => '*',
        };
        println!(" {marker}{:>4}. {}", clue.id(), clue.text());
    }
    println!();

    println!("Deduction:");
    println!("  Passes: {}", stats.passes());
    for (technique, count) in solver.techniques().iter().zip(stats.applications()) {
        println!("  {}: {count}", technique.name());
    }
    println!("  Selection: {}", selection_summary(&puzzle.stats));

    if reveal {
        println!();
        println!("Solution:");
        println!("  {}", describe_solution(cast, &puzzle.solution));
    }
}

fn selection_summary(stats: &SelectionStats) -> String {
    format!(
        "{} accepted, {} rejected, {} fallback, {} pruned",
        stats.accepted, stats.rejected, stats.fallback, stats.pruned
    )
}

fn describe_solution(cast: &Cast, solution: &Solution) -> String {
    format!(
        "{} with the {} in the {}",
        entity_name(cast, solution.suspect()),
        entity_name(cast, solution.weapon()),
        entity_name(cast, solution.location()),
    )
}

fn entity_name<'a>(cast: &'a Cast, id: &'a EntityId) -> &'a str {
    cast.locate(id)
        .map_or(id.as_str(), |(category, index)| {
            cast.entity(category, index).name()
        })
}

#[derive(Debug, derive_more::Display, derive_more::From)]
enum Failure {
    #[display("{_0}")]
    #[from]
    Generator(GeneratorError),
    #[display("{_0}")]
    #[from]
    Solver(SolverError),
    #[display("the clues do not determine the grid")]
    Unsolved,
    #[display("clue {id} is redundant: {text}")]
    Redundant { id: String, text: String },
    #[display("the clues lead to a different solution")]
    WrongSolution,
}

fn verify(solver: &DeductionSolver, args: &VerifyArgs) -> bool {
    let generator = PuzzleGenerator::new(solver).with_front_load_positive(!args.no_front_load);
    let pools = EntityPools::builtin();

    let mut results: Vec<(PuzzleSeed, Result<usize, Failure>)> = (0..args.count)
        .into_par_iter()
        .map(|i| {
            let seed = PuzzleSeed::new(args.start.wrapping_add(i));
            (seed, check_seed(&generator, solver, &pools, seed, args.size))
        })
        .collect();
    results.sort_by_key(|(seed, _)| *seed);

    let mut clue_counts = vec![];
    let mut failures = 0_usize;
    for (seed, result) in &results {
        match result {
            Ok(clues) => clue_counts.push(*clues),
            Err(failure) => {
                failures += 1;
                eprintln!("seed {seed}: {failure}");
            }
        }
    }

    println!("Checked:");
    println!("  {} puzzles from seed {}", results.len(), args.start);
    if let (Some(min), Some(max)) = (clue_counts.iter().min(), clue_counts.iter().max()) {
        let total: usize = clue_counts.iter().sum();
        println!("Clues:");
        println!("  min {min}, max {max}, total {total}");
    }
    println!("Failures:");
    println!("  {failures}");
    failures == 0
}

fn check_seed(
    generator: &PuzzleGenerator<'_>,
    solver: &DeductionSolver,
    pools: &EntityPools,
    seed: PuzzleSeed,
    size: Option<usize>,
) -> Result<usize, Failure> {
    let size = size.unwrap_or_else(|| choose_difficulty(seed).grid_size());
    let puzzle = generator.generate_with_seed(pools, seed, Some(size))?;
    let cast = &puzzle.cast;
    let normal: Vec<_> = puzzle
        .clues
        .iter()
        .filter(|clue| clue.kind() == ClueKind::Normal)
        .collect();

    let outcome = solver.evaluate_texts(cast, normal.iter().map(|clue| clue.text()))?;
    if !outcome.is_solved() {
        return Err(Failure::Unsolved);
    }
    let identity = puzzle
        .clues
        .iter()
        .find_map(Clue::identity)
        .ok_or(Failure::WrongSolution)?;
    if Solution::deduce(cast, outcome.grid().board(), identity).as_ref() != Some(&puzzle.solution) {
        return Err(Failure::WrongSolution);
    }

    for (i, clue) in normal.iter().enumerate() {
        let others = normal
            .iter()
            .enumerate()
            .filter(|&(j, _)| j != i)
            .map(|(_, clue)| clue.text());
        if solver.evaluate_texts(cast, others)?.is_solved() {
            return Err(Failure::Redundant {
                id: clue.id().to_owned(),
                text: clue.text().to_owned(),
            });
        }
    }
    Ok(puzzle.clues.len())
}

#[cfg(test)]
mod tests {
    use alibi_generator::MAX_GRID_SIZE;

    use super::*;

    #[test]
    fn test_parse_size_accepts_supported_sizes() {
        assert_eq!(parse_size("1"), Ok(1));
        assert_eq!(parse_size("4"), Ok(4));
        assert_eq!(parse_size(&MAX_GRID_SIZE.to_string()), Ok(MAX_GRID_SIZE));
    }

    #[test]
    fn test_parse_size_rejects_out_of_range() {
        let expected = GeneratorError::InvalidGridSize { size: 0 }.to_string();
        assert_eq!(parse_size("0"), Err(expected));
        let too_large = MAX_GRID_SIZE + 1;
        assert_eq!(
            parse_size(&too_large.to_string()),
            Err(GeneratorError::InvalidGridSize { size: too_large }.to_string())
        );
        assert!(parse_size("four").is_err());
    }

    #[test]
    fn test_selection_summary_lists_every_counter() {
        let stats = SelectionStats {
            accepted: 5,
            rejected: 3,
            fallback: 2,
            pruned: 1,
        };
        assert_eq!(
            selection_summary(&stats),
            "5 accepted, 3 rejected, 2 fallback, 1 pruned"
        );
    }
}
