//! Core types for Kazakhstan daily weather data.
//!
//! Defines the weather record and table types, CSV loading, and the
//! per-day condition classifier.

pub mod condition;
pub mod record;
pub mod table;

pub use condition::ConditionCategory;
pub use record::WeatherRecord;
pub use table::{EmptyRangeError, LoadError, WeatherTable};
