use super::entities::{ChartPoint, SparklineGeometry};
use super::value_objects::ChartOptions;
use crate::domain::market_data::PriceSeries;

/// Domain service - maps an ordered sample series onto surface
/// coordinates for the given width/height/padding.
pub struct SparklineLayout;

impl SparklineLayout {
    /// Returns `None` for an empty series; callers must treat that as
    /// an explicit no-op rather than an error.
    ///
    /// Horizontal: sample `i` lands at `padding + i * x_step` where
    /// `x_step = (width - 2*padding) / (n - 1)`. A single-sample series
    /// has no defined step and places its one point at `x == padding`.
    /// Vertical: higher values render higher on the surface; a flat
    /// series uses scale factor 0, putting every point at
    /// `height - padding` instead of dividing by zero.
    pub fn compute(
        series: &PriceSeries,
        width: f64,
        height: f64,
        options: &ChartOptions,
    ) -> Option<SparklineGeometry> {
        let n = series.len();
        if n == 0 {
            return None;
        }

        let min = series.min()?;
        let max = series.max()?;
        let range = max - min;

        let padding = options.padding;
        let x_step = if n == 1 { 0.0 } else { (width - 2.0 * padding) / (n - 1) as f64 };
        let y_scale = if range == 0.0 { 0.0 } else { (height - 2.0 * padding) / range };

        let points = series
            .values()
            .iter()
            .enumerate()
            .map(|(i, &sample)| {
                ChartPoint::new(
                    padding + i as f64 * x_step,
                    height - padding - (sample - min) * y_scale,
                )
            })
            .collect();

        Some(SparklineGeometry {
            baseline_start: ChartPoint::new(padding, height / 2.0),
            baseline_end: ChartPoint::new(width - padding, height / 2.0),
            points,
        })
    }
}
