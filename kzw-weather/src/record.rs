use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Primary date format used in the weather CSV: "YYYY-MM-DD"
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Fallback date formats accepted by the loader.
pub const DATE_FORMAT_FALLBACKS: [&str; 2] = ["%Y/%m/%d", "%d.%m.%Y"];

/// A single daily weather record for one location.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherRecord {
    pub date: NaiveDate,
    pub temperature_c: f64,
    pub precipitation_mm: f64,
    pub region: Option<String>,
}

impl WeatherRecord {
    /// Parse a date field, trying the primary format first and then
    /// the fallback formats.
    pub fn parse_date(s: &str) -> Option<NaiveDate> {
        let s = s.trim();
        if let Ok(d) = NaiveDate::parse_from_str(s, DATE_FORMAT) {
            return Some(d);
        }
        DATE_FORMAT_FALLBACKS
            .iter()
            .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
    }
}

impl Ord for WeatherRecord {
    fn cmp(&self, other: &Self) -> Ordering {
        self.date.cmp(&other.date)
    }
}

impl PartialOrd for WeatherRecord {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Eq for WeatherRecord {}

impl PartialEq for WeatherRecord {
    fn eq(&self, other: &Self) -> bool {
        self.date == other.date && self.region == other.region
    }
}

#[cfg(test)]
mod tests {
    use super::WeatherRecord;
    use chrono::NaiveDate;

    #[test]
    fn test_parse_date_primary_format() {
        let parsed = WeatherRecord::parse_date("2024-03-15").unwrap();
        assert_eq!(parsed, NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
    }

    #[test]
    fn test_parse_date_fallback_formats() {
        let slash = WeatherRecord::parse_date("2024/03/15").unwrap();
        let dotted = WeatherRecord::parse_date("15.03.2024").unwrap();
        let expected = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        assert_eq!(slash, expected);
        assert_eq!(dotted, expected);
    }

    #[test]
    fn test_parse_date_rejects_garbage() {
        assert!(WeatherRecord::parse_date("not-a-date").is_none());
        assert!(WeatherRecord::parse_date("").is_none());
    }

    #[test]
    fn test_ordering_by_date() {
        let earlier = WeatherRecord {
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            temperature_c: -12.0,
            precipitation_mm: 0.4,
            region: None,
        };
        let later = WeatherRecord {
            date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            temperature_c: 24.0,
            precipitation_mm: 3.1,
            region: None,
        };
        assert!(earlier < later);
    }
}
