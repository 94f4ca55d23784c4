// File: crates/earnings/src/container.rs
// Summary: Chart container: load-on-mount lifecycle with a placeholder while pending.
// Notes: Every `load` call takes a request token. Only the resolution carrying the latest
// token may write the container state, so an older request that resolves late can never
// overwrite newer data.

use chart_core::ChartSpec;
use std::sync::{Mutex, MutexGuard};
use tracing::{debug, info, warn};

use crate::error::DataError;
use crate::loader::DataLoader;
use crate::record::{validate_fields, MonthlyRecord};
use crate::renderer::ChartRenderer;
use crate::source::RecordSource;

pub const LOADING_PLACEHOLDER: &str = "Loading...";

/// Identity of one load request. Tokens increase monotonically per container.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn get(self) -> u64 {
        self.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Pending,
    Resolved,
    Failed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The result was written to the container.
    Applied,
    /// A newer request was issued meanwhile; the result was dropped.
    Stale,
}

/// What the component shows.
#[derive(Clone, Debug, PartialEq)]
pub enum View {
    Loading(&'static str),
    Chart(ChartSpec),
    Error(String),
}

enum Slot {
    Idle,
    Pending,
    Resolved(Vec<MonthlyRecord>),
    Failed(String),
}

struct State {
    slot: Slot,
    latest: u64,
}

pub struct ChartContainer<S> {
    loader: DataLoader<S>,
    renderer: ChartRenderer,
    state: Mutex<State>,
}

impl<S: RecordSource> ChartContainer<S> {
    pub fn new(loader: DataLoader<S>, renderer: ChartRenderer) -> Self {
        Self { loader, renderer, state: Mutex::new(State { slot: Slot::Idle, latest: 0 }) }
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Issue a new request token. A container without data switches to pending;
    /// one that already shows a chart keeps it until the new data arrives.
    pub fn begin_load(&self) -> RequestToken {
        let mut state = self.state();
        state.latest += 1;
        if matches!(state.slot, Slot::Idle | Slot::Failed(_)) {
            state.slot = Slot::Pending;
        }
        debug!(token = state.latest, "load requested");
        RequestToken(state.latest)
    }

    /// Apply a load result if `token` is still the latest request. Records
    /// lacking a field the series list charts are applied as a failure.
    pub fn resolve(
        &self,
        token: RequestToken,
        result: Result<Vec<MonthlyRecord>, DataError>,
    ) -> Result<LoadOutcome, DataError> {
        let mut state = self.state();
        if token.get() != state.latest {
            warn!(token = token.get(), latest = state.latest, "dropping stale load result");
            return Ok(LoadOutcome::Stale);
        }
        let result = result.and_then(|records| {
            validate_fields(&records, &self.renderer.required_fields())?;
            Ok(records)
        });
        match result {
            Ok(records) => {
                info!(token = token.get(), records = records.len(), "chart data loaded");
                state.slot = Slot::Resolved(records);
                Ok(LoadOutcome::Applied)
            }
            Err(err) => {
                warn!(token = token.get(), error = %err, "chart data failed to load");
                state.slot = Slot::Failed(err.to_string());
                Err(err)
            }
        }
    }

    /// Run one load through the loader and apply it under the token guard.
    pub async fn load(&self) -> Result<LoadOutcome, DataError> {
        let token = self.begin_load();
        let result = self.loader.load().await;
        self.resolve(token, result)
    }

    pub fn phase(&self) -> Phase {
        match self.state().slot {
            Slot::Idle => Phase::Idle,
            Slot::Pending => Phase::Pending,
            Slot::Resolved(_) => Phase::Resolved,
            Slot::Failed(_) => Phase::Failed,
        }
    }

    /// Records currently shown, if any.
    pub fn records(&self) -> Option<Vec<MonthlyRecord>> {
        match &self.state().slot {
            Slot::Resolved(records) => Some(records.clone()),
            _ => None,
        }
    }

    /// Current output for the given theme flag.
    pub fn view(&self, theme_flag: &str) -> View {
        match &self.state().slot {
            Slot::Idle | Slot::Pending => View::Loading(LOADING_PLACEHOLDER),
            Slot::Resolved(records) => View::Chart(self.renderer.render(records, theme_flag)),
            Slot::Failed(message) => View::Error(message.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::year_from_profits;
    use crate::renderer::SeriesPreset;
    use crate::source::FixtureSource;
    use std::time::Duration;

    fn container(profits: [u32; 12]) -> ChartContainer<FixtureSource> {
        let loader = DataLoader::new(FixtureSource::new(year_from_profits(profits))).with_delay(Duration::ZERO);
        ChartContainer::new(loader, ChartRenderer::default())
    }

    #[test]
    fn idle_container_shows_placeholder() {
        let c = container([300; 12]);
        assert_eq!(c.phase(), Phase::Idle);
        assert_eq!(c.view("light"), View::Loading("Loading..."));
        assert!(c.records().is_none());
    }

    #[test]
    fn tokens_increase() {
        let c = container([300; 12]);
        let a = c.begin_load();
        let b = c.begin_load();
        assert!(b > a);
        assert_eq!(b.get(), a.get() + 1);
        assert_eq!(c.phase(), Phase::Pending);
    }

    #[test]
    fn stale_token_is_ignored() {
        let c = container([300; 12]);
        let old = c.begin_load();
        let new = c.begin_load();
        assert_eq!(c.resolve(new, Ok(year_from_profits([500; 12]))).unwrap(), LoadOutcome::Applied);
        assert_eq!(c.resolve(old, Ok(year_from_profits([900; 12]))).unwrap(), LoadOutcome::Stale);
        assert!(c.records().unwrap().iter().all(|r| r.profit == 500));
    }

    #[test]
    fn stale_failure_does_not_clobber_data() {
        let c = container([300; 12]);
        let old = c.begin_load();
        let new = c.begin_load();
        c.resolve(new, Ok(year_from_profits([500; 12]))).unwrap();
        let outcome = c.resolve(old, Err(DataError::Fetch("timeout".into())));
        assert!(matches!(outcome, Ok(LoadOutcome::Stale)));
        assert_eq!(c.phase(), Phase::Resolved);
    }

    #[test]
    fn reload_keeps_chart_visible() {
        let c = container([300; 12]);
        let t = c.begin_load();
        c.resolve(t, Ok(year_from_profits([300; 12]))).unwrap();
        c.begin_load();
        assert_eq!(c.phase(), Phase::Resolved);
        assert!(matches!(c.view("light"), View::Chart(_)));
    }

    #[test]
    fn failure_is_reported_in_view() {
        let c = container([300; 12]);
        let t = c.begin_load();
        assert!(c.resolve(t, Err(DataError::Fetch("offline".into()))).is_err());
        assert_eq!(c.phase(), Phase::Failed);
        assert_eq!(c.view("dark"), View::Error("fetch failed: offline".into()));
    }

    #[test]
    fn records_without_charted_field_fail() {
        let loader = DataLoader::new(FixtureSource::default());
        let c = ChartContainer::new(loader, ChartRenderer::from_preset(SeriesPreset::Growth));
        let t = c.begin_load();
        let outcome = c.resolve(t, Ok(year_from_profits([300; 12])));
        assert!(matches!(outcome, Err(DataError::MissingField { position: 0, field: "newUsers" })));
        assert_eq!(c.phase(), Phase::Failed);
        assert!(c.records().is_none());
    }

    #[tokio::test]
    async fn load_resolves_to_chart() {
        let c = container([250; 12]);
        assert_eq!(c.load().await.unwrap(), LoadOutcome::Applied);
        match c.view("light") {
            View::Chart(chart) => {
                assert_eq!(chart.labels.len(), 12);
                assert_eq!(chart.datasets[1].data, vec![250.0; 12]);
                assert_eq!(chart.datasets[0].data, vec![50.0; 12]);
            }
            other => panic!("expected chart, got {other:?}"),
        }
    }
}
