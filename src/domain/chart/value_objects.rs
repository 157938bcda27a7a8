use crate::domain::market_data::Trend;
use derive_more::Display;
use strum::{AsRefStr, EnumIter, EnumString};

/// Value Object - active chart theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumString, AsRefStr)]
pub enum ChartTheme {
    #[display(fmt = "Light")]
    #[strum(serialize = "light")]
    Light,
    #[display(fmt = "Dark")]
    #[strum(serialize = "dark")]
    Dark,
}

impl ChartTheme {
    pub fn from_dark_flag(dark: bool) -> Self {
        if dark { Self::Dark } else { Self::Light }
    }

    pub fn grid_color(&self) -> &'static str {
        match self {
            Self::Light => "rgba(0,0,0,0.1)",
            Self::Dark => "rgba(255,255,255,0.1)",
        }
    }

    pub fn text_color(&self) -> &'static str {
        match self {
            Self::Light => "#333333",
            Self::Dark => "#f0f0f0",
        }
    }

    /// Theme line color for non-series strokes. The series polyline
    /// itself always takes the trend color instead.
    pub fn line_color(&self) -> &'static str {
        match self {
            Self::Light => "#0f3460",
            Self::Dark => "#e94560",
        }
    }
}

impl Default for ChartTheme {
    fn default() -> Self {
        Self::Light
    }
}

/// Series line color decided by trend direction, overriding the theme.
pub fn color_for_trend(trend: Trend) -> &'static str {
    match trend {
        Trend::Rising => "#28a745",
        Trend::Falling => "#dc3545",
    }
}

/// Value Object - sparkline drawing parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartOptions {
    pub padding: f64,
    pub line_width: f64,
    pub marker_radius: f64,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self { padding: 10.0, line_width: 2.0, marker_radius: 2.0 }
    }
}
