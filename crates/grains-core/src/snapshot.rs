// File: crates/grains-core/src/snapshot.rs
// Summary: Composition root mapping one selected square to the full display
// artifact set (board heatmap, growth and cumulative charts, text panel).

use crate::axis::Axis;
use crate::board::{heatmap, BoardCell};
use crate::chart::Chart;
use crate::compare::{evaluate_all, Comparison};
use crate::error::GrainsError;
use crate::format::{format_compact, format_exact};
use crate::growth::{grain_pairs, total_pairs, SquareIndex};
use crate::series::{Series, SeriesKind};
use crate::types::{BOARD_SQUARES, GRAIN_MASS_KG};

/// Values for the text panel beside the charts.
#[derive(Clone, Debug, PartialEq)]
pub struct StatsPanel {
    /// e.g. "37/64".
    pub square_label: String,
    pub grains_compact: String,
    pub grains_exact: String,
    pub total_compact: String,
    pub total_exact: String,
    /// Narrative line for the current square.
    pub context: String,
    /// Present only on the final square.
    pub milestone: Option<String>,
}

/// Everything the render layer needs for one selected square.
/// Recomputed from scratch on every call; nothing is cached between inputs.
#[derive(Clone, Debug)]
pub struct BoardSnapshot {
    pub square: SquareIndex,
    pub grains_on_square: u128,
    pub total_grains: u128,
    pub board: Vec<BoardCell>,
    pub growth_chart: Chart,
    pub cumulative_chart: Chart,
    pub comparisons: Vec<Comparison>,
    pub stats: StatsPanel,
}

impl BoardSnapshot {
    /// Entry point for each input change: validate, then recompute everything.
    pub fn at(square: u32) -> Result<Self, GrainsError> {
        let square = SquareIndex::new(square)?;
        let grains_on_square = square.grains_on();
        let total_grains = square.total_through();

        // Chart points are f64 for the renderer; exact values stay u128.
        let growth: Vec<(f64, f64)> = grain_pairs(square)
            .into_iter()
            .map(|(s, g)| (s as f64, g as f64))
            .collect();
        let cumulative: Vec<(f64, f64)> = total_pairs(square)
            .into_iter()
            .map(|(s, t)| (s as f64, t as f64))
            .collect();

        let mut growth_chart = Chart::new("Grains per square");
        growth_chart.x_axis = Axis::new("Square", 1.0, square.get() as f64);
        growth_chart.y_axis = Axis::log10("Grains", 1.0, grains_on_square as f64);
        growth_chart.add_series(Series::with_data(SeriesKind::Line, growth));

        let mut cumulative_chart = Chart::new("Cumulative grains");
        cumulative_chart.x_axis = Axis::new("Square", 1.0, square.get() as f64);
        cumulative_chart.y_axis = Axis::log10("Total grains", 1.0, total_grains as f64);
        cumulative_chart
            .add_series(Series::with_data(SeriesKind::Area, cumulative).with_baseline(0.0));

        Ok(Self {
            board: heatmap(square),
            comparisons: evaluate_all(total_grains),
            stats: stats_panel(square, grains_on_square, total_grains),
            square,
            grains_on_square,
            total_grains,
            growth_chart,
            cumulative_chart,
        })
    }
}

fn stats_panel(square: SquareIndex, grains: u128, total: u128) -> StatsPanel {
    StatsPanel {
        square_label: format!("{}/{}", square, BOARD_SQUARES),
        grains_compact: format_compact(grains as f64),
        grains_exact: format_exact(grains),
        total_compact: format_compact(total as f64),
        total_exact: format_exact(total),
        context: context_line(square, grains, total),
        milestone: milestone_line(square, total),
    }
}

/// Narrative tier for the current square.
fn context_line(square: SquareIndex, grains: u128, total: u128) -> String {
    let n = square.get();
    if n <= 10 {
        format!(
            "At square {n}, {} grains sit on this square, still a manageable amount.",
            format_compact(grains as f64)
        )
    } else if n <= 20 {
        format!(
            "At square {n}, {} grains per square is getting significant.",
            format_compact(grains as f64)
        )
    } else if n <= 30 {
        let mass_kg = total as f64 * GRAIN_MASS_KG;
        format!(
            "Total mass so far: about {} kg ({} metric tons).",
            format_compact(mass_kg),
            format_compact(mass_kg / 1000.0)
        )
    } else {
        format!(
            "The numbers are now astronomical. This square alone holds {} grains.",
            format_compact(grains as f64)
        )
    }
}

fn milestone_line(square: SquareIndex, total: u128) -> Option<String> {
    if square.get() < BOARD_SQUARES {
        return None;
    }
    Some(format!(
        "Complete board: {} grains, roughly 461 billion metric tons of rice, \
         more than a thousand years of world harvests.",
        format_exact(total)
    ))
}
