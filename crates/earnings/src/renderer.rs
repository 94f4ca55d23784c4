// File: crates/earnings/src/renderer.rs
// Summary: Turns loaded records into a themed chart description.

use chart_core::{ChartOptions, ChartSpec, Dataset, SeriesStyle, Theme};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::record::{MonthlyRecord, SeriesField};

/// One charted field with its fixed label and styling.
#[derive(Clone, Debug, PartialEq)]
pub struct SeriesSpec {
    pub field: SeriesField,
    pub label: String,
    pub style: SeriesStyle,
}

impl SeriesSpec {
    pub fn sales() -> Self {
        Self { field: SeriesField::Sales, label: "Sales".into(), style: SeriesStyle::filled(51, 200, 99) }
    }

    pub fn profit() -> Self {
        Self { field: SeriesField::Profit, label: "Profit".into(), style: SeriesStyle::filled(242, 153, 74) }
    }

    pub fn new_users() -> Self {
        Self {
            field: SeriesField::NewUsers,
            label: "New Users".into(),
            style: SeriesStyle::filled(86, 130, 255).with_tension(0.4),
        }
    }
}

/// Built-in series lists.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesPreset {
    /// Sales and profit.
    #[default]
    Earnings,
    /// Sales, profit and new users.
    Growth,
}

impl SeriesPreset {
    pub fn series(self) -> Vec<SeriesSpec> {
        match self {
            SeriesPreset::Earnings => vec![SeriesSpec::sales(), SeriesSpec::profit()],
            SeriesPreset::Growth => vec![SeriesSpec::sales(), SeriesSpec::profit(), SeriesSpec::new_users()],
        }
    }

    /// Whether records must carry new-user counts.
    pub fn needs_new_users(self) -> bool {
        ChartRenderer::from_preset(self).required_fields().contains(&SeriesField::NewUsers)
    }
}

impl FromStr for SeriesPreset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "earnings" => Ok(SeriesPreset::Earnings),
            "growth" => Ok(SeriesPreset::Growth),
            other => Err(format!("unknown series preset `{other}` (expected earnings or growth)")),
        }
    }
}

impl fmt::Display for SeriesPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SeriesPreset::Earnings => "earnings",
            SeriesPreset::Growth => "growth",
        })
    }
}

/// Builds chart descriptions. Input length is not checked; labels and data
/// simply follow the records given.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartRenderer {
    series: Vec<SeriesSpec>,
}

impl ChartRenderer {
    pub fn new(series: Vec<SeriesSpec>) -> Self {
        Self { series }
    }

    pub fn from_preset(preset: SeriesPreset) -> Self {
        Self::new(preset.series())
    }

    pub fn series(&self) -> &[SeriesSpec] {
        &self.series
    }

    /// Fields every record must carry to be charted.
    pub fn required_fields(&self) -> Vec<SeriesField> {
        self.series.iter().map(|s| s.field).collect()
    }

    pub fn render(&self, records: &[MonthlyRecord], theme_flag: &str) -> ChartSpec {
        let theme = Theme::for_flag(theme_flag);
        let labels = records.iter().map(|r| r.label().to_string()).collect();
        let mut chart = ChartSpec::new(labels, ChartOptions::for_theme(&theme));
        for spec in &self.series {
            let data = records.iter().map(|r| r.value(spec.field).map_or(0.0, f64::from)).collect();
            chart.add_dataset(Dataset::new(spec.label.clone(), spec.style, data));
        }
        chart
    }
}

impl Default for ChartRenderer {
    fn default() -> Self {
        Self::from_preset(SeriesPreset::default())
    }
}
