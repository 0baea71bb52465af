// File: crates/grains-core/src/growth.rs
// Summary: Validated square index and closed-form doubling arithmetic.

use crate::error::GrainsError;
use crate::types::BOARD_SQUARES;

/// 1-based position on the 64-square board.
/// Contract: the wrapped value is always in 1..=64.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct SquareIndex(u32);

impl SquareIndex {
    /// Validate a raw index. The slider owning the input keeps itself in
    /// range, so a failure here means a caller bug; the model rejects
    /// rather than clamps.
    pub fn new(square: u32) -> Result<Self, GrainsError> {
        if square < 1 || square > BOARD_SQUARES {
            return Err(GrainsError::SquareOutOfRange { square });
        }
        Ok(Self(square))
    }

    pub const fn get(self) -> u32 {
        self.0
    }

    /// Grains on this square alone: 2^(n-1).
    /// Closed form; exact for the whole board (max 2^63 < u128::MAX).
    #[inline]
    pub const fn grains_on(self) -> u128 {
        1u128 << (self.0 - 1)
    }

    /// Grains on squares 1..=n together: 2^n - 1.
    #[inline]
    pub const fn total_through(self) -> u128 {
        (1u128 << self.0) - 1
    }

    /// Squares 1..=n in order.
    pub fn walk(self) -> impl Iterator<Item = SquareIndex> {
        (1..=self.0).map(SquareIndex)
    }
}

impl TryFrom<u32> for SquareIndex {
    type Error = GrainsError;
    fn try_from(square: u32) -> Result<Self, GrainsError> {
        Self::new(square)
    }
}

impl std::fmt::Display for SquareIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// (square, grains) pairs for squares 1..=n.
pub fn grain_pairs(up_to: SquareIndex) -> Vec<(u32, u128)> {
    up_to.walk().map(|s| (s.get(), s.grains_on())).collect()
}

/// (square, running total) pairs for squares 1..=n.
pub fn total_pairs(up_to: SquareIndex) -> Vec<(u32, u128)> {
    up_to.walk().map(|s| (s.get(), s.total_through())).collect()
}
