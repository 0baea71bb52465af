// File: crates/grains-core/src/series.rs
// Summary: Series model for line and filled-area chart data.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeriesKind {
    Line,
    Area, // filled toward the baseline (default 0.0)
}

#[derive(Clone, Debug)]
pub struct Series {
    pub kind: SeriesKind,
    pub data_xy: Vec<(f64, f64)>,
    pub baseline: Option<f64>, // used by Area (fill origin)
}

impl Series {
    pub fn new(kind: SeriesKind) -> Self {
        Self { kind, data_xy: Vec::new(), baseline: None }
    }

    pub fn with_data(kind: SeriesKind, data: Vec<(f64, f64)>) -> Self {
        Self { kind, data_xy: data, baseline: None }
    }

    pub fn with_baseline(mut self, baseline: f64) -> Self {
        self.baseline = Some(baseline);
        self
    }

    /// Get baseline value or default (0.0) when not set.
    pub fn baseline_value(&self) -> f64 {
        self.baseline.unwrap_or(0.0)
    }
}
