// File: crates/chart-core/src/series.rs
// Summary: Dataset model for category line charts (one value per label) and its fixed styling.

use serde::Serialize;

use crate::color::Rgba;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesStyle {
    pub background_color: Rgba,
    pub border_color: Rgba,
    pub fill: bool,
    /// Bezier smoothing in `[0, 1]`; `None` draws straight segments.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tension: Option<f32>,
}

impl SeriesStyle {
    /// Filled line whose area and stroke share an RGB with different alphas.
    pub const fn filled(r: u8, g: u8, b: u8) -> Self {
        Self {
            background_color: Rgba::new(r, g, b, 0.1),
            border_color: Rgba::new(r, g, b, 0.7),
            fill: true,
            tension: None,
        }
    }

    pub fn with_tension(mut self, tension: f32) -> Self {
        self.tension = Some(tension);
        self
    }

    /// Tension clamped to `[0, 1]`, zero when unset.
    pub fn tension_value(&self) -> f32 {
        self.tension.unwrap_or(0.0).clamp(0.0, 1.0)
    }
}

/// A named line series. `data[i]` belongs to the chart's `labels[i]`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: String,
    #[serde(flatten)]
    pub style: SeriesStyle,
    pub data: Vec<f64>,
}

impl Dataset {
    pub fn new(label: impl Into<String>, style: SeriesStyle, data: Vec<f64>) -> Self {
        Self { label: label.into(), style, data }
    }

    /// Largest finite value, if any.
    pub fn max_value(&self) -> Option<f64> {
        self.data.iter().copied().filter(|v| v.is_finite()).fold(None, |acc, v| {
            Some(acc.map_or(v, |m: f64| m.max(v)))
        })
    }
}
