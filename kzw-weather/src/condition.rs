use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of a single day's growing conditions.
///
/// Produced purely from that day's temperature and precipitation;
/// distinct from the range-level advisory in `kzw-data`, which works
/// on aggregated means.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConditionCategory {
    Drought,
    Waterlogged,
    TooCold,
    Normal,
}

impl ConditionCategory {
    /// Classify one day's conditions.
    ///
    /// Evaluated in strict priority order, first match wins: the
    /// precipitation rules are checked before the temperature rule, so
    /// a dry cold day is `Drought`, not `TooCold`.
    pub fn classify(temperature_c: f64, precipitation_mm: f64) -> Self {
        if precipitation_mm < 5.0 {
            ConditionCategory::Drought
        } else if precipitation_mm > 20.0 {
            ConditionCategory::Waterlogged
        } else if temperature_c < 5.0 {
            ConditionCategory::TooCold
        } else {
            ConditionCategory::Normal
        }
    }

    /// Planting recommendation for this category.
    pub fn recommendation(&self) -> &'static str {
        match self {
            ConditionCategory::Normal => "Suitable for planting",
            ConditionCategory::Drought => "Drought risk - wait",
            ConditionCategory::Waterlogged => "Waterlogged - not recommended",
            ConditionCategory::TooCold => "Too cold - do not plant",
        }
    }
}

/// Recommendation text for a possibly-absent category.
///
/// The category enum is closed, so "unknown" can only arise as an
/// absent value (e.g. a row that failed to classify upstream).
pub fn recommendation_or_no_data(category: Option<ConditionCategory>) -> &'static str {
    match category {
        Some(c) => c.recommendation(),
        None => "No data",
    }
}

impl fmt::Display for ConditionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ConditionCategory::Drought => "Drought",
            ConditionCategory::Waterlogged => "Waterlogged",
            ConditionCategory::TooCold => "Too cold",
            ConditionCategory::Normal => "Normal",
        };
        write!(f, "{name}")
    }
}
