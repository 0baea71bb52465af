// File: crates/grains-core/src/lib.rs
// Summary: Core library entry point; exports the doubling model and display artifacts.

pub mod axis;
pub mod board;
pub mod chart;
pub mod compare;
pub mod error;
pub mod format;
pub mod growth;
pub mod series;
pub mod snapshot;
pub mod types;

pub use axis::{Axis, ScaleKind};
pub use board::{heatmap, position, BoardCell};
pub use chart::Chart;
pub use compare::{evaluate_all, references, Comparison, ComparisonFact};
pub use error::GrainsError;
pub use format::{format_compact, format_exact};
pub use growth::{grain_pairs, total_pairs, SquareIndex};
pub use series::{Series, SeriesKind};
pub use snapshot::{BoardSnapshot, StatsPanel};
