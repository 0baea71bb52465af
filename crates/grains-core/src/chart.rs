// File: crates/grains-core/src/chart.rs
// Summary: Chart artifact: axes plus series with range autoscaling. Data only;
// rasterization belongs to the consuming render layer.

use crate::axis::{Axis, ScaleKind};
use crate::series::Series;

#[derive(Clone, Debug)]
pub struct Chart {
    pub title: String,
    pub series: Vec<Series>,
    pub x_axis: Axis,
    pub y_axis: Axis,
}

impl Chart {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            series: Vec::new(),
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
        }
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    /// Fit axis ranges to the series data, padding Y by `margin_frac` of its
    /// span. Charts with no finite data are left untouched.
    pub fn autoscale_axes(&mut self, margin_frac: f64) {
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        for s in &self.series {
            for &(x, y) in &s.data_xy {
                x_min = x_min.min(x);
                x_max = x_max.max(x);
                y_min = y_min.min(y);
                y_max = y_max.max(y);
            }
            if let Some(b) = s.baseline {
                y_min = y_min.min(b);
                y_max = y_max.max(b);
            }
        }
        if !x_min.is_finite() || !x_max.is_finite() || !y_min.is_finite() || !y_max.is_finite() {
            return;
        }
        if (x_max - x_min).abs() < 1e-9 {
            x_max = x_min + 1.0;
        }
        if (y_max - y_min).abs() < 1e-9 {
            y_max = y_min + 1.0;
        }
        let m = (y_max - y_min) * margin_frac;
        self.x_axis.min = x_min;
        self.x_axis.max = x_max;
        self.y_axis.min = y_min - m;
        self.y_axis.max = y_max + m;
        if self.y_axis.kind == ScaleKind::Log10 {
            // keep a strictly positive floor for log rendering
            self.y_axis.min = self.y_axis.min.max(1e-12);
        }
    }
}
