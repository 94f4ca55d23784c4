// File: crates/earnings/src/record.rs
// Summary: Monthly record model.
// Notes: A year of data is exactly twelve `MonthlyRecord`s, one per calendar month in calendar
// order. `validate_year` enforces that shape.

use chrono::Month;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::DataError;

/// Calendar months in display order.
pub const MONTHS: [Month; 12] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
    Month::July,
    Month::August,
    Month::September,
    Month::October,
    Month::November,
    Month::December,
];

/// Three-letter axis label for a month.
pub fn month_label(month: Month) -> &'static str {
    match month {
        Month::January => "Jan",
        Month::February => "Feb",
        Month::March => "Mar",
        Month::April => "Apr",
        Month::May => "May",
        Month::June => "Jun",
        Month::July => "Jul",
        Month::August => "Aug",
        Month::September => "Sep",
        Month::October => "Oct",
        Month::November => "Nov",
        Month::December => "Dec",
    }
}

/// Inverse of [`month_label`].
pub fn parse_month_label(label: &str) -> Option<Month> {
    MONTHS.iter().copied().find(|m| month_label(*m) == label)
}

/// Numeric fields of a record that can be charted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SeriesField {
    Sales,
    Profit,
    NewUsers,
}

impl SeriesField {
    /// Key of the field in the JSON form of a record.
    pub fn key(self) -> &'static str {
        match self {
            SeriesField::Sales => "sales",
            SeriesField::Profit => "profit",
            SeriesField::NewUsers => "newUsers",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyRecord {
    #[serde(serialize_with = "serialize_month", deserialize_with = "deserialize_month")]
    pub month: Month,
    pub sales: u32,
    pub profit: u32,
    #[serde(rename = "newUsers", default, skip_serializing_if = "Option::is_none")]
    pub new_users: Option<u32>,
}

impl MonthlyRecord {
    /// Record whose sales are derived from profit (`round(profit / 5)`).
    pub fn from_profit(month: Month, profit: u32) -> Self {
        Self { month, sales: sales_for_profit(profit), profit, new_users: None }
    }

    pub fn with_new_users(mut self, new_users: u32) -> Self {
        self.new_users = Some(new_users);
        self
    }

    pub fn label(&self) -> &'static str {
        month_label(self.month)
    }

    /// Value of `field`, `None` when the record does not carry it.
    pub fn value(&self, field: SeriesField) -> Option<u32> {
        match field {
            SeriesField::Sales => Some(self.sales),
            SeriesField::Profit => Some(self.profit),
            SeriesField::NewUsers => self.new_users,
        }
    }
}

pub fn sales_for_profit(profit: u32) -> u32 {
    (f64::from(profit) / 5.0).round() as u32
}

/// A full year built from twelve profit figures (extra values are ignored).
pub fn year_from_profits(profits: impl IntoIterator<Item = u32>) -> Vec<MonthlyRecord> {
    MONTHS.iter().zip(profits).map(|(m, p)| MonthlyRecord::from_profit(*m, p)).collect()
}

/// Check that `records` holds one record per month in calendar order.
pub fn validate_year(records: &[MonthlyRecord]) -> Result<(), DataError> {
    if records.len() != MONTHS.len() {
        return Err(DataError::InvalidRecordCount { expected: MONTHS.len(), found: records.len() });
    }
    for (position, (record, expected)) in records.iter().zip(MONTHS).enumerate() {
        if record.month != expected {
            return Err(DataError::MonthOutOfOrder {
                position,
                expected: month_label(expected),
                found: record.label(),
            });
        }
    }
    Ok(())
}

/// Check that every record carries each of `fields`.
pub fn validate_fields(records: &[MonthlyRecord], fields: &[SeriesField]) -> Result<(), DataError> {
    for (position, record) in records.iter().enumerate() {
        if let Some(field) = fields.iter().find(|f| record.value(**f).is_none()) {
            return Err(DataError::MissingField { position, field: field.key() });
        }
    }
    Ok(())
}

fn serialize_month<S: Serializer>(month: &Month, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(month_label(*month))
}

fn deserialize_month<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Month, D::Error> {
    let label = String::deserialize(deserializer)?;
    parse_month_label(&label)
        .ok_or_else(|| serde::de::Error::custom(format!("unknown month label `{label}`")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_calendar_abbreviations() {
        let labels: Vec<_> = MONTHS.iter().map(|m| month_label(*m)).collect();
        assert_eq!(
            labels,
            ["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"]
        );
        assert_eq!(parse_month_label("Sep"), Some(Month::September));
        assert_eq!(parse_month_label("Sept"), None);
    }

    #[test]
    fn sales_round_half_up() {
        assert_eq!(sales_for_profit(200), 40);
        assert_eq!(sales_for_profit(1199), 240);
        assert_eq!(sales_for_profit(1197), 239);
        assert_eq!(sales_for_profit(202), 40);
        assert_eq!(sales_for_profit(203), 41);
    }

    #[test]
    fn validate_rejects_wrong_length() {
        let short = year_from_profits([300; 11]);
        assert!(matches!(
            validate_year(&short),
            Err(DataError::InvalidRecordCount { expected: 12, found: 11 })
        ));
        assert!(validate_year(&year_from_profits([300; 12])).is_ok());
    }

    #[test]
    fn validate_rejects_out_of_order_months() {
        let mut year = year_from_profits([300; 12]);
        year.swap(2, 3);
        match validate_year(&year) {
            Err(DataError::MonthOutOfOrder { position, expected, found }) => {
                assert_eq!((position, expected, found), (2, "Mar", "Apr"));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn json_uses_labels_and_camel_case() {
        let r = MonthlyRecord::from_profit(Month::March, 500).with_new_users(12);
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(json, serde_json::json!({"month": "Mar", "sales": 100, "profit": 500, "newUsers": 12}));

        let plain = serde_json::to_value(MonthlyRecord::from_profit(Month::May, 250)).unwrap();
        assert!(plain.get("newUsers").is_none());

        let back: MonthlyRecord = serde_json::from_value(json).unwrap();
        assert_eq!(back, r);
        assert!(serde_json::from_str::<MonthlyRecord>(r#"{"month":"Foo","sales":1,"profit":5}"#).is_err());
    }

    #[test]
    fn new_users_are_optional() {
        let r = MonthlyRecord::from_profit(Month::June, 640);
        assert_eq!(r.value(SeriesField::NewUsers), None);
        assert_eq!(r.value(SeriesField::Sales), Some(128));
        assert_eq!(r.value(SeriesField::Profit), Some(640));
        assert_eq!(r.with_new_users(3).value(SeriesField::NewUsers), Some(3));
    }

    #[test]
    fn validate_fields_reports_first_gap() {
        let mut year: Vec<_> = year_from_profits([300; 12]).into_iter().map(|r| r.with_new_users(5)).collect();
        assert!(validate_fields(&year, &[SeriesField::Sales, SeriesField::NewUsers]).is_ok());
        year[4].new_users = None;
        year[9].new_users = None;
        match validate_fields(&year, &[SeriesField::Profit, SeriesField::NewUsers]) {
            Err(DataError::MissingField { position, field }) => assert_eq!((position, field), (4, "newUsers")),
            other => panic!("unexpected {other:?}"),
        }
        assert!(validate_fields(&year, &[SeriesField::Sales, SeriesField::Profit]).is_ok());
    }
}
