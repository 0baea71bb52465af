// File: crates/grains-core/src/axis.rs
// Summary: Axis metadata with labels, ranges, and scale kind.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScaleKind {
    Linear,
    Log10,
}

#[derive(Clone, Debug)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub kind: ScaleKind,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max, kind: ScaleKind::Linear }
    }

    pub fn log10(label: impl Into<String>, min: f64, max: f64) -> Self {
        let mut a = Self::new(label, min, max);
        a.kind = ScaleKind::Log10;
        a
    }

    pub fn default_x() -> Self {
        Self::new("Square", 1.0, 64.0)
    }

    pub fn default_y() -> Self {
        Self::log10("Grains", 1.0, 2f64.powi(63))
    }
}
