// File: crates/grains-core/src/board.rs
// Summary: Raster placement of squares and the heatmap cell grid.

use crate::growth::SquareIndex;
use crate::types::{BOARD_SIDE, BOARD_SQUARES};

/// One board cell of the heatmap.
/// Cells past the selected square stay empty (zero grains, zero intensity).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoardCell {
    pub square: u32,
    pub row: u32,
    pub col: u32,
    pub grains: u128,
    /// log10(grains + 1); heat value for a log-scale color ramp.
    pub intensity: f64,
}

/// Map a square number to its (row, col) in raster order.
/// Contract: `square` is 1-based and on the board.
pub const fn position(square: u32) -> (u32, u32) {
    ((square - 1) / BOARD_SIDE, (square - 1) % BOARD_SIDE)
}

/// Build all 64 cells in raster order, filled through `up_to`.
pub fn heatmap(up_to: SquareIndex) -> Vec<BoardCell> {
    let mut cells: Vec<BoardCell> = (1..=BOARD_SQUARES)
        .map(|square| {
            let (row, col) = position(square);
            BoardCell { square, row, col, grains: 0, intensity: 0.0 }
        })
        .collect();
    for s in up_to.walk() {
        let cell = &mut cells[(s.get() - 1) as usize];
        cell.grains = s.grains_on();
        cell.intensity = (s.grains_on() as f64 + 1.0).log10();
    }
    cells
}
