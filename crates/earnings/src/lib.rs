// File: crates/earnings/src/lib.rs
// Summary: Monthly earnings chart: simulated data loading and the chart container lifecycle.
// Notes: A `ChartContainer` owns a `DataLoader` and a `ChartRenderer`. While a load is pending
// its view is the loading placeholder; once records resolve, the view is a
// `chart_core::ChartSpec` styled for the current theme flag.

pub mod config;
pub mod container;
pub mod context;
pub mod error;
pub mod loader;
pub mod logging;
pub mod record;
pub mod renderer;
pub mod source;

pub use config::DashboardConfig;
pub use container::{ChartContainer, LoadOutcome, Phase, RequestToken, View, LOADING_PLACEHOLDER};
pub use context::UiContext;
pub use error::{ConfigError, DataError};
pub use loader::{DataLoader, DEFAULT_DELAY};
pub use record::{MonthlyRecord, SeriesField, MONTHS};
pub use renderer::{ChartRenderer, SeriesPreset, SeriesSpec};
pub use source::{FixtureSource, GeneratorConfig, RandomSource, RecordSource};
