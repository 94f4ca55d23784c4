// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports the chart description API and rendering.

pub mod chart;
pub mod color;
pub mod series;
pub mod options;
pub mod grid;
pub mod types;
pub mod scale;
pub mod theme;
pub mod text;

pub use chart::{ChartSpec, RenderOptions, TooltipItem};
pub use color::Rgba;
pub use series::{Dataset, SeriesStyle};
pub use options::ChartOptions;
pub use theme::Theme;
pub use text::TextShaper;
