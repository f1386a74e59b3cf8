//! Report, classify and advise command implementations.

use kzw_data::advisory::AdvisoryCategory;
use kzw_data::aggregate::{self, RangeSummary};
use kzw_data::report::{daily_report, DayReport};
use kzw_data::filter;
use kzw_utils::dates;
use kzw_weather::{ConditionCategory, WeatherTable};
use log::info;
use serde::Serialize;

/// JSON payload for `report --json`.
#[derive(Serialize)]
struct ReportOutput {
    rows: Vec<DayReport>,
    summary: RangeSummary,
    advisory: &'static str,
}

/// Load, filter, and print the daily report plus range summary and
/// composite advisory.
pub fn run_report(
    csv_path: &str,
    start: Option<&str>,
    end: Option<&str>,
    region: Option<&str>,
    json: bool,
) -> anyhow::Result<()> {
    let table = WeatherTable::from_path(csv_path)?;
    info!(
        "loaded {} records from {} ({} skipped)",
        table.len(),
        csv_path,
        table.skipped_rows()
    );
    if table.skipped_rows() > 0 {
        eprintln!("note: {} malformed rows were skipped", table.skipped_rows());
    }

    let Some((first, last)) = table.date_span() else {
        println!("No weather records loaded from {csv_path}.");
        return Ok(());
    };
    let start = match start {
        Some(s) => dates::parse_date(s)?,
        None => first,
    };
    let end = match end {
        Some(s) => dates::parse_date(s)?,
        None => last,
    };

    let mut filtered = filter::by_date(&table, start, end);
    if let Some(region) = region {
        filtered = filter::by_region(&filtered, region);
    }

    let summary = match aggregate::summarize(&filtered) {
        Ok(s) => s,
        Err(_) => {
            println!(
                "No records between {} and {}{} - try widening the date range.",
                dates::format_date(&start),
                dates::format_date(&end),
                region.map(|r| format!(" in {r}")).unwrap_or_default()
            );
            return Ok(());
        }
    };

    let advisory = AdvisoryCategory::from_means(summary.mean_temp, summary.mean_precip);
    let rows = daily_report(&filtered);

    if json {
        let output = ReportOutput {
            rows,
            summary,
            advisory: advisory.message(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{:<12} {:<10} {:>8} {:>8}  {:<12} {}", "date", "region", "temp", "precip", "condition", "recommendation");
    for row in &rows {
        println!(
            "{:<12} {:<10} {:>7.1}C {:>6.1}mm  {:<12} {}",
            dates::format_date(&row.date),
            row.region.as_deref().unwrap_or("-"),
            row.temperature_c,
            row.precipitation_mm,
            row.condition.to_string(),
            row.recommendation
        );
    }
    println!();
    println!(
        "{} days | mean temp {:.1}C (max {:.1}C) | mean precip {:.1}mm (max {:.1}mm)",
        rows.len(),
        summary.mean_temp,
        summary.max_temp,
        summary.mean_precip,
        summary.max_precip
    );
    println!("Advisory: {}", advisory.message());
    Ok(())
}

/// One-off condition classification for a single day's values.
pub fn run_classify(temp: f64, precip: f64) {
    let category = ConditionCategory::classify(temp, precip);
    println!("{category}: {}", category.recommendation());
}

/// One-off composite advisory from range means.
pub fn run_advise(mean_temp: f64, mean_precip: f64) {
    let advisory = AdvisoryCategory::from_means(mean_temp, mean_precip);
    println!("{}", advisory.message());
}
