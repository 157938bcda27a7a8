use crate::domain::chart::{ChartOptions, ChartTheme, SparklineLayout, color_for_trend};
use crate::domain::errors::AppError;
use crate::domain::logging::{LogComponent, get_logger};
use crate::domain::market_data::{PriceSeries, Trend};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// Canvas 2D renderer for one card's sparkline.
///
/// Every draw clears the surface and repaints from scratch; there is no
/// incremental diffing against the previous drawing.
pub struct SparklineRenderer {
    canvas_id: String,
    width: u32,
    height: u32,
    options: ChartOptions,
}

impl SparklineRenderer {
    pub fn new(canvas_id: String, width: u32, height: u32) -> Self {
        Self { canvas_id, width, height, options: ChartOptions::default() }
    }

    pub fn with_options(mut self, options: ChartOptions) -> Self {
        self.options = options;
        self
    }

    /// Get canvas element and context
    fn get_canvas_context(&self) -> Result<(HtmlCanvasElement, CanvasRenderingContext2d), AppError> {
        let window =
            web_sys::window().ok_or_else(|| AppError::Rendering("no window".to_string()))?;
        let document =
            window.document().ok_or_else(|| AppError::Rendering("no document".to_string()))?;
        let canvas = document
            .get_element_by_id(&self.canvas_id)
            .ok_or_else(|| AppError::Rendering(format!("canvas '{}' not found", self.canvas_id)))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| AppError::Rendering("element is not a canvas".to_string()))?;

        canvas.set_width(self.width);
        canvas.set_height(self.height);

        let context = canvas
            .get_context("2d")
            .map_err(|_| AppError::Rendering("failed to get 2D context".to_string()))?
            .ok_or_else(|| AppError::Rendering("2D context unavailable".to_string()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| AppError::Rendering("failed to cast to 2D context".to_string()))?;

        Ok((canvas, context))
    }

    /// Draws the series: reference line, trend-colored polyline and one
    /// filled marker per sample. An empty series is an explicit no-op.
    pub fn draw(
        &self,
        series: &PriceSeries,
        trend: Trend,
        theme: ChartTheme,
    ) -> Result<(), AppError> {
        let Some(geometry) = SparklineLayout::compute(
            series,
            self.width as f64,
            self.height as f64,
            &self.options,
        ) else {
            get_logger().debug(
                LogComponent::Infrastructure("SparklineRenderer"),
                &format!("No samples for '{}', skipping draw", self.canvas_id),
            );
            return Ok(());
        };

        let (_canvas, context) = self.get_canvas_context()?;

        context.clear_rect(0.0, 0.0, self.width as f64, self.height as f64);

        // Horizontal reference line at vertical center
        context.set_stroke_style(&JsValue::from(theme.grid_color()));
        context.set_line_width(0.5);
        context.begin_path();
        context.move_to(geometry.baseline_start.x, geometry.baseline_start.y);
        context.line_to(geometry.baseline_end.x, geometry.baseline_end.y);
        context.stroke();

        // The series line takes the trend color over the theme color
        let line_color = color_for_trend(trend);
        context.set_stroke_style(&JsValue::from(line_color));
        context.set_line_width(self.options.line_width);
        context.begin_path();
        for (i, point) in geometry.points.iter().enumerate() {
            if i == 0 {
                context.move_to(point.x, point.y);
            } else {
                context.line_to(point.x, point.y);
            }
        }
        context.stroke();

        // Markers at each sample position
        context.set_fill_style(&JsValue::from(line_color));
        for point in &geometry.points {
            context.begin_path();
            context
                .arc(point.x, point.y, self.options.marker_radius, 0.0, std::f64::consts::PI * 2.0)
                .map_err(|_| AppError::Rendering("arc failed".to_string()))?;
            context.fill();
        }

        Ok(())
    }
}
