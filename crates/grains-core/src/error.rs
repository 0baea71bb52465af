// File: crates/grains-core/src/error.rs
// Summary: Domain error for the doubling model.

use thiserror::Error;

/// The model's single failure mode: a square index off the board.
/// Everything past input validation is infallible.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum GrainsError {
    #[error("square index {square} out of range 1..=64")]
    SquareOutOfRange { square: u32 },
}
