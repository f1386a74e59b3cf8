use crate::record::WeatherRecord;
use chrono::NaiveDate;
use csv::ReaderBuilder;
use rand::Rng;
use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Required CSV columns, resolved by header name rather than position.
pub const DATE_COLUMN: &str = "date";
pub const TEMPERATURE_COLUMN: &str = "temperature_C";
pub const PRECIPITATION_COLUMN: &str = "precipitation_mm";
/// Optional region column.
pub const REGION_COLUMN: &str = "region";

/// Fixed region set used when synthesizing a region column.
pub const REGIONS: [&str; 5] = ["Akmola", "Almaty", "Karaganda", "Pavlodar", "Turkistan"];

/// Errors raised while loading a weather CSV. Fatal to the operation;
/// individual malformed rows are skipped and counted instead.
#[derive(Debug)]
pub enum LoadError {
    Io(std::io::Error),
    Csv(csv::Error),
    MissingColumn(&'static str),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io(e) => write!(f, "failed to read weather CSV: {e}"),
            LoadError::Csv(e) => write!(f, "failed to parse weather CSV: {e}"),
            LoadError::MissingColumn(name) => {
                write!(f, "weather CSV is missing required column '{name}'")
            }
        }
    }
}

impl std::error::Error for LoadError {}

impl From<std::io::Error> for LoadError {
    fn from(e: std::io::Error) -> Self {
        LoadError::Io(e)
    }
}

impl From<csv::Error> for LoadError {
    fn from(e: csv::Error) -> Self {
        LoadError::Csv(e)
    }
}

/// Raised when an operation needs at least one record (aggregation,
/// random sampling) and the table is empty. Recoverable: callers
/// should ask the user to widen the date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyRangeError;

impl fmt::Display for EmptyRangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no weather records in the selected range")
    }
}

impl std::error::Error for EmptyRangeError {}

/// An in-memory table of daily weather records.
///
/// Loaded once from CSV and read-only afterwards; filters produce new
/// tables rather than mutating the source. Dates are not required to
/// be unique or sorted.
#[derive(Debug, Clone, Default)]
pub struct WeatherTable {
    records: Vec<WeatherRecord>,
    skipped_rows: usize,
}

impl WeatherTable {
    /// Build a table from already-parsed records (used by filters).
    pub fn from_records(records: Vec<WeatherRecord>) -> Self {
        WeatherTable {
            records,
            skipped_rows: 0,
        }
    }

    /// Load a table from a CSV file on disk.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let file = File::open(path.as_ref())?;
        Self::from_reader(file)
    }

    /// Load a table from any CSV reader.
    ///
    /// The header row must contain `date`, `temperature_C` and
    /// `precipitation_mm`; `region` is optional. Rows with an
    /// unparseable date or a non-numeric measurement are skipped and
    /// counted, not fatal.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, LoadError> {
        let mut csv_reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        let find = |name: &'static str| -> Result<usize, LoadError> {
            headers
                .iter()
                .position(|h| h.trim() == name)
                .ok_or(LoadError::MissingColumn(name))
        };
        let date_idx = find(DATE_COLUMN)?;
        let temp_idx = find(TEMPERATURE_COLUMN)?;
        let precip_idx = find(PRECIPITATION_COLUMN)?;
        let region_idx = headers.iter().position(|h| h.trim() == REGION_COLUMN);

        let mut records = Vec::new();
        let mut skipped_rows = 0usize;

        for row in csv_reader.records() {
            let row = match row {
                Ok(r) => r,
                Err(_) => {
                    skipped_rows += 1;
                    continue;
                }
            };

            let date = row.get(date_idx).and_then(WeatherRecord::parse_date);
            let temperature_c: Option<f64> =
                row.get(temp_idx).and_then(|s| s.trim().parse().ok());
            let precipitation_mm: Option<f64> =
                row.get(precip_idx).and_then(|s| s.trim().parse().ok());

            let (Some(date), Some(temperature_c), Some(precipitation_mm)) =
                (date, temperature_c, precipitation_mm)
            else {
                skipped_rows += 1;
                continue;
            };

            let region = region_idx
                .and_then(|i| row.get(i))
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from);

            records.push(WeatherRecord {
                date,
                temperature_c,
                precipitation_mm,
                region,
            });
        }

        if skipped_rows > 0 {
            log::warn!("skipped {skipped_rows} malformed weather rows");
        }

        Ok(WeatherTable {
            records,
            skipped_rows,
        })
    }

    pub fn records(&self) -> &[WeatherRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of malformed rows excluded at load time.
    pub fn skipped_rows(&self) -> usize {
        self.skipped_rows
    }

    /// Earliest and latest record dates, if any records exist.
    pub fn date_span(&self) -> Option<(NaiveDate, NaiveDate)> {
        let first = self.records.iter().map(|r| r.date).min()?;
        let last = self.records.iter().map(|r| r.date).max()?;
        Some((first, last))
    }

    /// Draw one record uniformly at random. Independent draws: the
    /// same record may recur across calls.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> Result<&WeatherRecord, EmptyRangeError> {
        if self.records.is_empty() {
            return Err(EmptyRangeError);
        }
        let idx = rng.gen_range(0..self.records.len());
        Ok(&self.records[idx])
    }

    /// Assign a random region from [`REGIONS`] to every record that
    /// has none. Records with genuine region data are left untouched.
    /// Presentation convenience only, not a data-integrity operation.
    pub fn synthesize_regions<R: Rng>(&mut self, rng: &mut R) {
        for record in &mut self.records {
            if record.region.is_none() {
                let name = REGIONS[rng.gen_range(0..REGIONS.len())];
                record.region = Some(name.to_string());
            }
        }
    }
}
