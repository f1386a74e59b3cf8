use crate::session::{RoundRecord, SessionState};
use kzw_weather::WeatherRecord;
use serde::{Deserialize, Serialize};

/// Grade of a numeric temperature guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GuessGrade {
    NearPerfect,
    Decent,
    Miss,
}

impl GuessGrade {
    pub fn tag(&self) -> &'static str {
        match self {
            GuessGrade::NearPerfect => "near-perfect",
            GuessGrade::Decent => "decent",
            GuessGrade::Miss => "miss",
        }
    }
}

/// Grade a numeric guess by absolute error: within 2 degrees is
/// near-perfect, within 5 is decent, beyond that a miss. Both
/// boundaries inclusive.
pub fn grade_numeric(true_temp: f64, guess: f64) -> GuessGrade {
    let diff = (true_temp - guess).abs();
    if diff <= 2.0 {
        GuessGrade::NearPerfect
    } else if diff <= 5.0 {
        GuessGrade::Decent
    } else {
        GuessGrade::Miss
    }
}

/// Evaluate a numeric guess against a sampled day: near-perfect
/// scores, a miss fails, decent moves no counter. One round per
/// submission either way.
pub fn evaluate_numeric_guess(
    record: &WeatherRecord,
    guess: f64,
    session: &mut SessionState,
) -> GuessGrade {
    let grade = grade_numeric(record.temperature_c, guess);
    match grade {
        GuessGrade::NearPerfect => session.score += 1,
        GuessGrade::Miss => session.fails += 1,
        GuessGrade::Decent => {}
    }
    session.rounds += 1;
    session.history.push(RoundRecord {
        date: record.date,
        temperature_c: record.temperature_c,
        precipitation_mm: record.precipitation_mm,
        action: format!("guess {guess:.1}"),
        outcome: grade.tag().to_string(),
    });
    grade
}

/// Five temperature bands for the banded guess game. Half-open on
/// the internal boundaries: 5 °C falls in the 5-15 band, 35 °C in
/// the top band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TempBand {
    Below5,
    From5To15,
    From15To25,
    From25To35,
    Above35,
}

impl TempBand {
    pub const ALL: [TempBand; 5] = [
        TempBand::Below5,
        TempBand::From5To15,
        TempBand::From15To25,
        TempBand::From25To35,
        TempBand::Above35,
    ];

    /// Band containing the given temperature.
    pub fn of(temperature_c: f64) -> Self {
        if temperature_c < 5.0 {
            TempBand::Below5
        } else if temperature_c < 15.0 {
            TempBand::From5To15
        } else if temperature_c < 25.0 {
            TempBand::From15To25
        } else if temperature_c < 35.0 {
            TempBand::From25To35
        } else {
            TempBand::Above35
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TempBand::Below5 => "< 5°C",
            TempBand::From5To15 => "5-15°C",
            TempBand::From15To25 => "15-25°C",
            TempBand::From25To35 => "25-35°C",
            TempBand::Above35 => ">= 35°C",
        }
    }
}

/// Three coarse bands used by the simpler guess game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CoarseBand {
    Below10,
    From10To25,
    Above25,
}

impl CoarseBand {
    pub const ALL: [CoarseBand; 3] = [
        CoarseBand::Below10,
        CoarseBand::From10To25,
        CoarseBand::Above25,
    ];

    /// Band containing the given temperature. The middle band is
    /// closed on both ends: 10 °C and 25 °C both land in it.
    pub fn of(temperature_c: f64) -> Self {
        if temperature_c < 10.0 {
            CoarseBand::Below10
        } else if temperature_c > 25.0 {
            CoarseBand::Above25
        } else {
            CoarseBand::From10To25
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CoarseBand::Below10 => "< 10°C",
            CoarseBand::From10To25 => "10-25°C",
            CoarseBand::Above25 => "> 25°C",
        }
    }
}

/// Evaluate a banded guess: exact band match scores, any mismatch
/// fails. Binary, no partial credit. Returns the true band and
/// whether the guess matched.
pub fn evaluate_band_guess(
    record: &WeatherRecord,
    guess: TempBand,
    session: &mut SessionState,
) -> (TempBand, bool) {
    let truth = TempBand::of(record.temperature_c);
    let correct = guess == truth;
    record_band_round(record, guess.label(), correct, session);
    (truth, correct)
}

/// Coarse-band counterpart of [`evaluate_band_guess`].
pub fn evaluate_coarse_guess(
    record: &WeatherRecord,
    guess: CoarseBand,
    session: &mut SessionState,
) -> (CoarseBand, bool) {
    let truth = CoarseBand::of(record.temperature_c);
    let correct = guess == truth;
    record_band_round(record, guess.label(), correct, session);
    (truth, correct)
}

fn record_band_round(
    record: &WeatherRecord,
    guess_label: &str,
    correct: bool,
    session: &mut SessionState,
) {
    if correct {
        session.score += 1;
    } else {
        session.fails += 1;
    }
    session.rounds += 1;
    session.history.push(RoundRecord {
        date: record.date,
        temperature_c: record.temperature_c,
        precipitation_mm: record.precipitation_mm,
        action: format!("band {guess_label}"),
        outcome: if correct { "correct" } else { "wrong" }.to_string(),
    });
}
