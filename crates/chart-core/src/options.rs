// File: crates/chart-core/src/options.rs
// Summary: Chart configuration bag (interaction, plugins, axis grid/tick styling) derived from a Theme.

use serde::Serialize;

use crate::color::Rgba;
use crate::theme::Theme;

pub const TICK_FONT_FAMILY: &str = "'Mulish', sans-serif";
pub const TICK_FONT_SIZE_PX: f32 = 16.0;
/// Dash pattern of the vertical (x) grid lines, in pixels.
pub const X_GRID_DASH: [f32; 1] = [6.0];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractionMode {
    /// All datasets at the hovered category index.
    Index,
    Nearest,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractionAxis {
    X,
    Y,
    Xy,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Interaction {
    pub mode: InteractionMode,
    pub intersect: bool,
    pub axis: InteractionAxis,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Tooltip {
    pub enabled: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Plugins {
    pub tooltip: Tooltip,
    /// `false` hides the legend.
    pub legend: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridOptions {
    pub color: Rgba,
    pub draw_on_chart_area: bool,
    pub draw_border: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_dash: Option<Vec<f32>>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FontOptions {
    pub color: Rgba,
    pub family: String,
    #[serde(serialize_with = "serialize_px")]
    pub size: f32,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TickOptions {
    pub font: FontOptions,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AxisOptions {
    pub grid: GridOptions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticks: Option<TickOptions>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Scales {
    pub x: AxisOptions,
    pub y: AxisOptions,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub maintain_aspect_ratio: bool,
    pub interaction: Interaction,
    pub plugins: Plugins,
    pub scales: Scales,
}

impl ChartOptions {
    /// Options for the dashboard line chart. Only colors depend on `theme`.
    pub fn for_theme(theme: &Theme) -> Self {
        Self {
            maintain_aspect_ratio: false,
            interaction: Interaction {
                mode: InteractionMode::Index,
                intersect: false,
                axis: InteractionAxis::X,
            },
            plugins: Plugins { tooltip: Tooltip { enabled: true }, legend: false },
            scales: Scales {
                y: AxisOptions {
                    grid: GridOptions {
                        color: theme.grid,
                        draw_on_chart_area: false,
                        draw_border: false,
                        border_dash: None,
                    },
                    ticks: None,
                },
                x: AxisOptions {
                    grid: GridOptions {
                        color: theme.grid,
                        draw_on_chart_area: true,
                        draw_border: false,
                        border_dash: Some(X_GRID_DASH.to_vec()),
                    },
                    ticks: Some(TickOptions {
                        font: FontOptions {
                            color: theme.tick,
                            family: TICK_FONT_FAMILY.to_string(),
                            size: TICK_FONT_SIZE_PX,
                        },
                    }),
                },
            },
        }
    }
}

fn serialize_px<S: serde::Serializer>(size: &f32, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&format_args!("{size}px"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_only_changes_colors() {
        let light = ChartOptions::for_theme(&Theme::light());
        let dark = ChartOptions::for_theme(&Theme::dark());
        assert_eq!(light.interaction, dark.interaction);
        assert_eq!(light.plugins, dark.plugins);
        assert_eq!(light.scales.x.grid.border_dash, dark.scales.x.grid.border_dash);
        assert_ne!(light.scales.x.grid.color, dark.scales.x.grid.color);
        assert_eq!(light.scales.y.grid.color, Rgba::hex(0xdddfe5));
        assert_eq!(dark.scales.y.grid.color, Rgba::hex(0x26323f));
    }

    #[test]
    fn serializes_in_chartjs_shape() {
        let v = serde_json::to_value(ChartOptions::for_theme(&Theme::light())).unwrap();
        assert_eq!(v["maintainAspectRatio"], false);
        assert_eq!(v["interaction"]["mode"], "index");
        assert_eq!(v["interaction"]["axis"], "x");
        assert_eq!(v["plugins"]["legend"], false);
        assert_eq!(v["scales"]["y"]["grid"]["drawOnChartArea"], false);
        assert_eq!(v["scales"]["x"]["grid"]["color"], "#dddfe5");
        assert_eq!(v["scales"]["x"]["ticks"]["font"]["size"], "16px");
        assert_eq!(v["scales"]["x"]["ticks"]["font"]["color"], "#929292");
        assert!(v["scales"]["y"].get("ticks").is_none());
    }
}
