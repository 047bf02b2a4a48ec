//! Core data structures for alibi deduction puzzles.
//!
//! This crate provides the vocabulary shared by the solver, the generator and
//! any presentation layer: the three entity categories, the validated cast of
//! a puzzle, the relation grids a solver marks, structured clue facts and the
//! prose they are rendered to.
//!
//! # Overview
//!
//! 1. **Entities** - What a puzzle is about
//!    - [`category`]: [`Category`] and the three [`CategoryPair`]s
//!    - [`entity`]: [`Entity`] and its [`EntityId`]
//!    - [`cast`]: [`Cast`], the validated per-category entity lists of a puzzle
//!
//! 2. **Relation grids** - What a solver knows
//!    - [`relation_grid`]: [`Cell`], [`Mark`], [`RelationGrid`] and the
//!      three-grid [`RelationBoard`]
//!
//! 3. **Clues** - What a player reads
//!    - [`fact`]: structured [`Fact`]s and [`IdentityFact`]s
//!    - [`phrasing`]: rendering facts to sentences and parsing them back
//!    - [`clue`]: [`Clue`], pairing text with its structured content
//!    - [`puzzle`]: the immutable [`PuzzleData`] record and its [`Solution`]
//!
//! # Examples
//!
//! ```
//! use alibi_core::{Cast, CategoryPair, Entity, Mark, RelationBoard};
//!
//! let cast = Cast::new(
//!     vec![Entity::suspect("s1", "Mayor Grey"), Entity::suspect("s2", "Chef Red")],
//!     vec![Entity::weapon("w1", "Rusty Dagger"), Entity::weapon("w2", "Lead Pipe")],
//!     vec![Entity::location("l1", "Library"), Entity::location("l2", "Kitchen")],
//! )?;
//!
//! let mut board = RelationBoard::new(cast.size());
//! board
//!     .grid_mut(CategoryPair::SuspectWeapon)
//!     .mark_stated(0, 1, Mark::Confirmed);
//! assert_eq!(board.cell(CategoryPair::SuspectWeapon, 0, 1).mark(), Mark::Confirmed);
//! # Ok::<(), alibi_core::CastError>(())
//! ```

pub use self::{
    cast::{Cast, CastError},
    category::{Category, CategoryPair},
    clue::{Clue, ClueContent, ClueKind},
    entity::{Entity, EntityId},
    fact::{Fact, IdentityFact, Polarity},
    puzzle::{Difficulty, PuzzleData, Solution},
    relation_grid::{Cell, ConsistencyError, Line, Mark, RelationBoard, RelationGrid},
};

pub mod cast;
pub mod category;
pub mod clue;
pub mod entity;
pub mod fact;
pub mod phrasing;
pub mod puzzle;
pub mod relation_grid;
