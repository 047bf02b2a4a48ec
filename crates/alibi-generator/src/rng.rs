use rand::Rng as _;
use rand_pcg::Pcg64;

/// A deterministic random stream.
///
/// Produces the same sequence of values for the same seed on every platform.
/// A `PuzzleRng` is owned by the step that draws from it and never shared;
/// independent steps use independent streams from [`PuzzleSeed::stream`].
///
/// [`PuzzleSeed::stream`]: crate::PuzzleSeed::stream
#[derive(Debug, Clone)]
pub struct PuzzleRng {
    inner: Pcg64,
}

impl From<Pcg64> for PuzzleRng {
    fn from(inner: Pcg64) -> Self {
        Self { inner }
    }
}

impl PuzzleRng {
    /// Returns a float uniformly distributed in `[0, 1)`.
    #[expect(clippy::cast_precision_loss)]
    pub fn next_f64(&mut self) -> f64 {
        // 53 random bits fill an f64 mantissa exactly.
        (self.inner.next_u64() >> 11) as f64 / (1_u64 << 53) as f64
    }

    /// Returns an index uniformly distributed in `[0, bound)`.
    ///
    /// # Panics
    ///
    /// Panics if `bound` is zero.
    #[expect(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    pub fn below(&mut self, bound: usize) -> usize {
        assert!(bound > 0, "bound must be positive");
        ((self.next_f64() * bound as f64) as usize).min(bound - 1)
    }

    /// Returns `true` or `false` with equal probability.
    pub fn coin_flip(&mut self) -> bool {
        self.next_f64() >= 0.5
    }

    /// Shuffles a slice in place with the Fisher-Yates algorithm.
    ///
    /// Scanning from the end, element `i` is swapped with a uniformly chosen
    /// index in `[0, i]`.
    pub fn shuffle_in_place<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.below(i + 1);
            items.swap(i, j);
        }
    }

    /// Returns a shuffled copy of a slice.
    #[must_use]
    pub fn shuffle<T: Clone>(&mut self, items: &[T]) -> Vec<T> {
        let mut items = items.to_vec();
        self.shuffle_in_place(&mut items);
        items
    }
}
