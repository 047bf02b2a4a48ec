use std::{num::ParseIntError, str::FromStr};

use rand::SeedableRng as _;
use rand_pcg::Pcg64;
use sha2::{Digest as _, Sha256};

use crate::PuzzleRng;

/// Seed of a puzzle.
///
/// The same seed and cast always produce the same puzzle. Seeds print and
/// parse as decimal integers.
///
/// # Examples
///
/// ```
/// use alibi_generator::PuzzleSeed;
///
/// let seed: PuzzleSeed = "42".parse()?;
/// assert_eq!(seed, PuzzleSeed::new(42));
/// assert_eq!(seed.to_string(), "42");
///
/// // Labels such as dates hash to a stable seed.
/// assert_eq!(
///     PuzzleSeed::from_label("2025-01-31"),
///     PuzzleSeed::from_label("2025-01-31")
/// );
/// # Ok::<(), alibi_generator::ParseSeedError>(())
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    derive_more::Display,
    derive_more::From,
)]
pub struct PuzzleSeed(u32);

/// Error returned when seed text is not a 32-bit unsigned integer.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
#[display("invalid puzzle seed: {_0}")]
pub struct ParseSeedError(ParseIntError);

impl FromStr for PuzzleSeed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}

/// Independent random streams derived from one seed.
///
/// Each generation step draws from its own stream, so changing how many
/// values one step consumes never changes another step's values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeedStream {
    /// Selecting suspects from the pool.
    CastSuspects,
    /// Selecting weapons from the pool.
    CastWeapons,
    /// Selecting locations from the pool.
    CastLocations,
    /// Choosing the grid size.
    GridSize,
    /// Shuffling suspects into the scenario.
    ScenarioSuspects,
    /// Shuffling weapons into the scenario.
    ScenarioWeapons,
    /// Shuffling locations into the scenario.
    ScenarioLocations,
    /// Ordering the clue pool before accumulation.
    CluePool,
    /// Choosing the identity clue's category.
    IdentityCoin,
    /// Ordering the final clues.
    PresentationOrder,
}

impl SeedStream {
    /// Stable tag hashed into the stream's seed.
    ///
    /// Tags must never change: doing so changes every puzzle.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::CastSuspects => "cast/suspects",
            Self::CastWeapons => "cast/weapons",
            Self::CastLocations => "cast/locations",
            Self::GridSize => "grid-size",
            Self::ScenarioSuspects => "scenario/suspects",
            Self::ScenarioWeapons => "scenario/weapons",
            Self::ScenarioLocations => "scenario/locations",
            Self::CluePool => "clue-pool",
            Self::IdentityCoin => "identity-coin",
            Self::PresentationOrder => "presentation-order",
        }
    }
}

impl PuzzleSeed {
    /// Creates a seed from its numeric value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the numeric value.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Derives a seed from an arbitrary label, such as a date string.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        let digest = Sha256::new()
            .chain_update(b"alibi/label/")
            .chain_update(label.as_bytes())
            .finalize();
        Self(u32::from_le_bytes([digest[0], digest[1], digest[2], digest[3]]))
    }

    /// Draws a seed from the operating system's random source.
    #[must_use]
    pub fn random() -> Self {
        Self(rand::random())
    }

    /// Returns the random stream for one generation step.
    #[must_use]
    pub fn stream(self, stream: SeedStream) -> PuzzleRng {
        let digest: [u8; 32] = Sha256::new()
            .chain_update(b"alibi/stream/")
            .chain_update(stream.tag().as_bytes())
            .chain_update([0_u8])
            .chain_update(self.0.to_le_bytes())
            .finalize()
            .into();
        PuzzleRng::from(Pcg64::from_seed(digest))
    }
}
