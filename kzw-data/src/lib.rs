//! Filtering, aggregation and advisories over loaded weather tables.
//!
//! This crate handles transforming a loaded [`WeatherTable`] into the
//! forms the CLI presents: filtered views, range statistics, per-day
//! condition reports and the composite planting advisory.

pub use kzw_weather::{EmptyRangeError, WeatherRecord, WeatherTable};

/// Read-only filters producing new table views.
pub mod filter {
    use chrono::NaiveDate;
    use kzw_weather::WeatherTable;

    /// Records with `start <= date <= end`, inclusive both ends.
    ///
    /// A reversed range (start after end) yields an empty table, not
    /// an error.
    pub fn by_date(table: &WeatherTable, start: NaiveDate, end: NaiveDate) -> WeatherTable {
        let records = table
            .records()
            .iter()
            .filter(|r| start <= r.date && r.date <= end)
            .cloned()
            .collect();
        WeatherTable::from_records(records)
    }

    /// Records whose region matches exactly. Records without a region
    /// never match.
    pub fn by_region(table: &WeatherTable, region: &str) -> WeatherTable {
        let records = table
            .records()
            .iter()
            .filter(|r| r.region.as_deref() == Some(region))
            .cloned()
            .collect();
        WeatherTable::from_records(records)
    }

}

/// Mean/max statistics over a filtered range.
pub mod aggregate {
    use kzw_weather::{EmptyRangeError, WeatherTable};
    use serde::{Deserialize, Serialize};

    /// Summary statistics for one date range.
    #[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
    pub struct RangeSummary {
        pub mean_temp: f64,
        pub max_temp: f64,
        pub mean_precip: f64,
        pub max_precip: f64,
    }

    /// Compute mean and max temperature/precipitation over a table.
    ///
    /// An empty table is an [`EmptyRangeError`]: the mean of nothing
    /// is undefined, not zero.
    pub fn summarize(table: &WeatherTable) -> Result<RangeSummary, EmptyRangeError> {
        if table.is_empty() {
            return Err(EmptyRangeError);
        }
        let n = table.len() as f64;
        let records = table.records();
        let mean_temp = records.iter().map(|r| r.temperature_c).sum::<f64>() / n;
        let mean_precip = records.iter().map(|r| r.precipitation_mm).sum::<f64>() / n;
        let max_temp = records
            .iter()
            .map(|r| r.temperature_c)
            .fold(f64::MIN, f64::max);
        let max_precip = records
            .iter()
            .map(|r| r.precipitation_mm)
            .fold(f64::MIN, f64::max);
        Ok(RangeSummary {
            mean_temp,
            max_temp,
            mean_precip,
            max_precip,
        })
    }

}

/// Composite planting advisory derived from range means.
pub mod advisory {
    use serde::{Deserialize, Serialize};
    use std::fmt;

    /// Advisory outcome for an aggregated date range.
    ///
    /// Distinct from the per-day `ConditionCategory` scheme: this one
    /// operates on range means, not single rows.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub enum AdvisoryCategory {
        HotDry,
        WarmDry,
        ColdWet,
        Wet,
        Favorable,
    }

    impl AdvisoryCategory {
        /// Derive the advisory from mean temperature and precipitation.
        ///
        /// Prioritized decision list, first match wins. The order is
        /// load-bearing: HotDry is strictly more specific than WarmDry,
        /// and both must be checked before the precipitation-only rule.
        pub fn from_means(mean_temp: f64, mean_precip: f64) -> Self {
            if mean_temp > 30.0 && mean_precip < 1.0 {
                AdvisoryCategory::HotDry
            } else if mean_temp > 25.0 && mean_precip < 3.0 {
                AdvisoryCategory::WarmDry
            } else if mean_temp < 10.0 && mean_precip > 5.0 {
                AdvisoryCategory::ColdWet
            } else if mean_precip > 10.0 {
                AdvisoryCategory::Wet
            } else {
                AdvisoryCategory::Favorable
            }
        }

        pub fn message(&self) -> &'static str {
            match self {
                AdvisoryCategory::HotDry => {
                    "Hot & dry — high drought risk; consider drought-resistant crops."
                }
                AdvisoryCategory::WarmDry => {
                    "Warm & dry — possible moisture deficit; recommend drip irrigation."
                }
                AdvisoryCategory::ColdWet => {
                    "Cold & wet — rot risk; recommend delaying planting."
                }
                AdvisoryCategory::Wet => "Heavy precipitation — possible waterlogging.",
                AdvisoryCategory::Favorable => "Conditions favorable for planting.",
            }
        }
    }

    impl fmt::Display for AdvisoryCategory {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}", self.message())
        }
    }

    #[cfg(test)]
    mod tests {
        use super::AdvisoryCategory;

        #[test]
        fn test_hot_dry_wins_over_warm_dry() {
            // 31°C / 0.5mm satisfies both rule 1 and rule 2; rule 1
            // must win because it is checked first.
            assert_eq!(
                AdvisoryCategory::from_means(31.0, 0.5),
                AdvisoryCategory::HotDry
            );
        }

        #[test]
        fn test_warm_dry_boundary() {
            // 26°C fails rule 1's > 30 but passes rule 2's > 25 with
            // precip < 3.
            assert_eq!(
                AdvisoryCategory::from_means(26.0, 2.0),
                AdvisoryCategory::WarmDry
            );
        }

        #[test]
        fn test_cold_wet() {
            assert_eq!(
                AdvisoryCategory::from_means(8.0, 6.0),
                AdvisoryCategory::ColdWet
            );
        }

        #[test]
        fn test_wet_checked_after_temperature_rules() {
            // cold and very wet hits rule 3 before the generic rule 4
            assert_eq!(
                AdvisoryCategory::from_means(5.0, 15.0),
                AdvisoryCategory::ColdWet
            );
            // mild and very wet falls through to rule 4
            assert_eq!(
                AdvisoryCategory::from_means(15.0, 15.0),
                AdvisoryCategory::Wet
            );
        }

        #[test]
        fn test_favorable_default() {
            assert_eq!(
                AdvisoryCategory::from_means(20.0, 4.0),
                AdvisoryCategory::Favorable
            );
        }

        #[test]
        fn test_exact_boundaries_fall_through() {
            // 30°C exactly fails rule 1 (> 30 is strict); 0.5mm precip
            // with 30°C then passes rule 2 via > 25.
            assert_eq!(
                AdvisoryCategory::from_means(30.0, 0.5),
                AdvisoryCategory::WarmDry
            );
            // precip exactly 10 is not Wet (> 10 is strict)
            assert_eq!(
                AdvisoryCategory::from_means(15.0, 10.0),
                AdvisoryCategory::Favorable
            );
        }
    }
}

/// Per-day condition report rows, the tabular view of a filtered range.
pub mod report {
    use chrono::NaiveDate;
    use kzw_weather::{ConditionCategory, WeatherTable};
    use serde::Serialize;

    /// One row of the daily conditions report.
    #[derive(Debug, Clone, Serialize)]
    pub struct DayReport {
        pub date: NaiveDate,
        pub region: Option<String>,
        pub temperature_c: f64,
        pub precipitation_mm: f64,
        pub condition: ConditionCategory,
        pub recommendation: &'static str,
    }

    /// Classify every record in the table into a report row.
    pub fn daily_report(table: &WeatherTable) -> Vec<DayReport> {
        table
            .records()
            .iter()
            .map(|r| {
                let condition =
                    ConditionCategory::classify(r.temperature_c, r.precipitation_mm);
                DayReport {
                    date: r.date,
                    region: r.region.clone(),
                    temperature_c: r.temperature_c,
                    precipitation_mm: r.precipitation_mm,
                    condition,
                    recommendation: condition.recommendation(),
                }
            })
            .collect()
    }

}

#[cfg(test)]
mod testutil {
    use kzw_weather::{WeatherRecord, WeatherTable};

    /// Build a table from (date, temp, precip, region) tuples.
    pub fn table_of(rows: &[(&str, f64, f64, Option<&str>)]) -> WeatherTable {
        let records = rows
            .iter()
            .map(|(date, temp, precip, region)| WeatherRecord {
                date: WeatherRecord::parse_date(date).unwrap(),
                temperature_c: *temp,
                precipitation_mm: *precip,
                region: region.map(String::from),
            })
            .collect();
        WeatherTable::from_records(records)
    }
}

#[cfg(test)]
mod end_to_end {
    use crate::{aggregate, filter};
    use chrono::NaiveDate;
    use kzw_weather::WeatherTable;

    const FIXTURE: &str = "\
date,temperature_C,precipitation_mm
2024-06-10,22.0,1.5
2024-06-11,28.0,0.0
2024-06-12,19.5,7.0
";

    #[test]
    fn test_load_filter_aggregate() {
        let table = WeatherTable::from_reader(FIXTURE.as_bytes()).unwrap();
        let day = NaiveDate::from_ymd_opt(2024, 6, 11).unwrap();
        let filtered = filter::by_date(&table, day, day);
        assert_eq!(filtered.len(), 1);
        let summary = aggregate::summarize(&filtered).unwrap();
        assert_eq!(summary.mean_temp, 28.0);
        assert_eq!(summary.max_temp, 28.0);
        assert_eq!(summary.mean_precip, 0.0);
        assert_eq!(summary.max_precip, 0.0);
    }
}
