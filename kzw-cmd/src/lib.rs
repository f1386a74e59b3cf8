//! Command implementations for the kzw CLI.
//!
//! Provides subcommands for browsing the weather table (report,
//! one-off classification and advisory) and for the interactive
//! weather games.

use clap::Subcommand;

pub mod play;
pub mod report;

#[derive(Subcommand)]
pub enum Command {
    /// Daily conditions report over a date range, with summary and advisory
    Report {
        /// Path to the weather CSV
        #[arg(short, long)]
        csv: String,

        /// Start date (YYYY-MM-DD); defaults to the earliest record
        #[arg(long)]
        start: Option<String>,

        /// End date (YYYY-MM-DD); defaults to the latest record
        #[arg(long)]
        end: Option<String>,

        /// Only include records for this region
        #[arg(long)]
        region: Option<String>,

        /// Emit JSON instead of a text table
        #[arg(long)]
        json: bool,
    },

    /// Classify a single day's conditions
    Classify {
        /// Temperature in °C
        #[arg(long)]
        temp: f64,

        /// Precipitation in mm
        #[arg(long)]
        precip: f64,
    },

    /// Composite planting advisory from range means
    Advise {
        /// Mean temperature in °C
        #[arg(long)]
        mean_temp: f64,

        /// Mean precipitation in mm
        #[arg(long)]
        mean_precip: f64,
    },

    /// Play an interactive weather game on random sampled days
    Play {
        /// Game mode: decision, crop, guess, bands, or quick
        mode: String,

        /// Path to the weather CSV
        #[arg(short, long)]
        csv: String,

        /// Only sample records from this region
        #[arg(long)]
        region: Option<String>,

        /// Crop for the crop mode (wheat, corn, potato)
        #[arg(long)]
        crop: Option<String>,

        /// RNG seed for reproducible runs
        #[arg(long)]
        seed: Option<u64>,

        /// Number of rounds to play
        #[arg(long, default_value_t = 5)]
        rounds: u32,

        /// Print the final session state as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Report {
            csv,
            start,
            end,
            region,
            json,
        } => report::run_report(&csv, start.as_deref(), end.as_deref(), region.as_deref(), json),
        Command::Classify { temp, precip } => {
            report::run_classify(temp, precip);
            Ok(())
        }
        Command::Advise {
            mean_temp,
            mean_precip,
        } => {
            report::run_advise(mean_temp, mean_precip);
            Ok(())
        }
        Command::Play {
            mode,
            csv,
            region,
            crop,
            seed,
            rounds,
            json,
        } => play::run_play(
            &mode,
            &csv,
            region.as_deref(),
            crop.as_deref(),
            seed,
            rounds,
            json,
        ),
    }
}
