// File: crates/earnings/src/source.rs
// Summary: Injectable sources of monthly records.
// Notes: `RecordSource` is the capability "produce twelve monthly records". The simulated API
// uses `RandomSource`; tests and reproducible demos use `FixtureSource` or a seeded
// `RandomSource`.

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::{Arc, Mutex};

use crate::error::DataError;
use crate::record::{MonthlyRecord, MONTHS};

#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, automock)]
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Fetch one year of records.
    async fn fetch(&self) -> Result<Vec<MonthlyRecord>, DataError>;
}

#[async_trait]
impl<S: RecordSource + ?Sized> RecordSource for Arc<S> {
    async fn fetch(&self) -> Result<Vec<MonthlyRecord>, DataError> {
        (**self).fetch().await
    }
}

#[async_trait]
impl<S: RecordSource + ?Sized> RecordSource for Box<S> {
    async fn fetch(&self) -> Result<Vec<MonthlyRecord>, DataError> {
        (**self).fetch().await
    }
}

/// Bounds for randomly generated records.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Smallest profit value.
    pub profit_min: u32,
    /// Profit is drawn from `profit_min .. profit_min + profit_span`, capped at `u32::MAX`.
    pub profit_span: u32,
    /// New users are drawn from `0 .. new_users_max`.
    pub new_users_max: u32,
    pub include_new_users: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self { profit_min: 200, profit_span: 1000, new_users_max: 500, include_new_users: false }
    }
}

/// Simulated API payload: fresh random figures on every fetch.
pub struct RandomSource {
    config: GeneratorConfig,
    rng: Mutex<StdRng>,
}

impl RandomSource {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config, rng: Mutex::new(StdRng::from_entropy()) }
    }

    /// Reproducible sequence of years for a given seed.
    pub fn with_seed(config: GeneratorConfig, seed: u64) -> Self {
        Self { config, rng: Mutex::new(StdRng::seed_from_u64(seed)) }
    }

    pub fn generate(&self) -> Vec<MonthlyRecord> {
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let cfg = self.config;
        MONTHS
            .iter()
            .map(|&month| {
                let profit = cfg.profit_min.saturating_add(rng.gen_range(0..cfg.profit_span.max(1)));
                let record = MonthlyRecord::from_profit(month, profit);
                if cfg.include_new_users {
                    record.with_new_users(rng.gen_range(0..cfg.new_users_max.max(1)))
                } else {
                    record
                }
            })
            .collect()
    }
}

#[async_trait]
impl RecordSource for RandomSource {
    async fn fetch(&self) -> Result<Vec<MonthlyRecord>, DataError> {
        Ok(self.generate())
    }
}

/// Keys every record in a fixture must have.
const REQUIRED_KEYS: [&str; 3] = ["month", "sales", "profit"];

/// Returns the same records on every fetch.
#[derive(Clone, Debug, Default)]
pub struct FixtureSource {
    records: Vec<MonthlyRecord>,
}

impl FixtureSource {
    pub fn new(records: Vec<MonthlyRecord>) -> Self {
        Self { records }
    }

    /// Parse a JSON array of records (`[{"month": "Jan", "sales": .., "profit": ..}, ..]`).
    ///
    /// Text that is not a JSON array fails as [`DataError::Fetch`]; an entry
    /// lacking a required key or holding a bad value is invalid data.
    pub fn from_json(json: &str) -> Result<Self, DataError> {
        let items: Vec<serde_json::Value> =
            serde_json::from_str(json).map_err(|e| DataError::Fetch(format!("invalid fixture: {e}")))?;
        items
            .into_iter()
            .enumerate()
            .map(|(position, item)| {
                if !item.is_object() {
                    return Err(DataError::InvalidRecord { position, reason: "not an object".into() });
                }
                if let Some(field) = REQUIRED_KEYS.into_iter().find(|key| item.get(*key).is_none()) {
                    return Err(DataError::MissingField { position, field });
                }
                serde_json::from_value(item)
                    .map_err(|e| DataError::InvalidRecord { position, reason: e.to_string() })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self::new)
    }
}

#[async_trait]
impl RecordSource for FixtureSource {
    async fn fetch(&self) -> Result<Vec<MonthlyRecord>, DataError> {
        Ok(self.records.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{sales_for_profit, validate_year};

    #[test]
    fn generated_year_within_bounds() {
        let source = RandomSource::new(GeneratorConfig::default());
        for _ in 0..50 {
            let year = source.generate();
            validate_year(&year).unwrap();
            for r in &year {
                assert!((200..=1199).contains(&r.profit), "profit {}", r.profit);
                assert_eq!(r.sales, sales_for_profit(r.profit));
                assert_eq!(r.new_users, None);
            }
        }
    }

    #[test]
    fn new_users_only_when_enabled() {
        let cfg = GeneratorConfig { include_new_users: true, ..GeneratorConfig::default() };
        let year = RandomSource::with_seed(cfg, 7).generate();
        assert!(year.iter().all(|r| matches!(r.new_users, Some(n) if n < 500)));
    }

    #[test]
    fn seeded_sources_repeat() {
        let a = RandomSource::with_seed(GeneratorConfig::default(), 42);
        let b = RandomSource::with_seed(GeneratorConfig::default(), 42);
        assert_eq!(a.generate(), b.generate());
        assert_eq!(a.generate(), b.generate());
    }

    #[test]
    fn profits_near_u32_max_saturate() {
        let cfg = GeneratorConfig { profit_min: u32::MAX - 3, profit_span: 1000, ..GeneratorConfig::default() };
        let year = RandomSource::with_seed(cfg, 5).generate();
        assert_eq!(year.len(), 12);
        assert!(year.iter().all(|r| r.profit >= u32::MAX - 3));
    }

    #[tokio::test]
    async fn fixture_returns_same_records() {
        let fixture = FixtureSource::from_json(
            r#"[{"month":"Jan","sales":40,"profit":200},{"month":"Feb","sales":60,"profit":300,"newUsers":9}]"#,
        )
        .unwrap();
        let first = fixture.fetch().await.unwrap();
        assert_eq!(first.len(), 2);
        assert_eq!(first[1].new_users, Some(9));
        assert_eq!(fixture.fetch().await.unwrap(), first);
        assert!(matches!(FixtureSource::from_json("{"), Err(DataError::Fetch(_))));
    }

    #[test]
    fn fixture_entries_are_checked() {
        let no_profit = FixtureSource::from_json(r#"[{"month":"Jan","sales":40,"profit":200},{"month":"Feb","sales":60}]"#);
        assert!(matches!(no_profit, Err(DataError::MissingField { position: 1, field: "profit" })));

        let bad_month = FixtureSource::from_json(r#"[{"month":"Foo","sales":1,"profit":5}]"#);
        assert!(matches!(bad_month, Err(DataError::InvalidRecord { position: 0, .. })));

        let not_object = FixtureSource::from_json("[3]");
        assert!(matches!(not_object, Err(DataError::InvalidRecord { position: 0, .. })));
    }

    #[tokio::test]
    async fn shared_sources_delegate() {
        let shared: Arc<dyn RecordSource> = Arc::new(FixtureSource::new(Vec::new()));
        assert!(shared.fetch().await.unwrap().is_empty());
    }
}
