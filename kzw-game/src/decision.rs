use crate::session::{RoundRecord, SessionState};
use kzw_weather::WeatherRecord;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

/// Player action in the plant-or-wait game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerAction {
    Plant,
    Wait,
}

impl PlayerAction {
    pub fn label(&self) -> &'static str {
        match self {
            PlayerAction::Plant => "plant",
            PlayerAction::Wait => "wait",
        }
    }
}

/// Ground-truth quality of a sampled day for planting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Good,
    Bad,
    Neutral,
}

impl Outcome {
    pub fn tag(&self) -> &'static str {
        match self {
            Outcome::Good => "good",
            Outcome::Bad => "bad",
            Outcome::Neutral => "neutral",
        }
    }
}

/// Ground truth for one sampled day: the outcome plus the reason
/// shown to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroundTruth {
    pub outcome: Outcome,
    pub reason: &'static str,
}

impl GroundTruth {
    /// Generic per-day ground truth, first match wins.
    pub fn for_day(temperature_c: f64, precipitation_mm: f64) -> Self {
        if temperature_c > 30.0 && precipitation_mm < 1.0 {
            GroundTruth {
                outcome: Outcome::Bad,
                reason: "too hot and dry - drought conditions",
            }
        } else if temperature_c < 10.0 && precipitation_mm > 5.0 {
            GroundTruth {
                outcome: Outcome::Bad,
                reason: "cold and damp - rot risk",
            }
        } else if (20.0..=28.0).contains(&temperature_c)
            && (1.0..=5.0).contains(&precipitation_mm)
        {
            GroundTruth {
                outcome: Outcome::Good,
                reason: "excellent conditions",
            }
        } else if precipitation_mm > 10.0 {
            GroundTruth {
                outcome: Outcome::Bad,
                reason: "too much rain",
            }
        } else {
            GroundTruth {
                outcome: Outcome::Neutral,
                reason: "moderate conditions",
            }
        }
    }

    /// Crop-specific ground truth: Good when both measurements fall
    /// in the crop's preferred ranges, Neutral when exactly one does,
    /// Bad when neither does.
    pub fn for_crop(crop: Crop, temperature_c: f64, precipitation_mm: f64) -> Self {
        let temp_ok = crop.good_temp().contains(&temperature_c);
        let precip_ok = crop.good_precip().contains(&precipitation_mm);
        match (temp_ok, precip_ok) {
            (true, true) => GroundTruth {
                outcome: Outcome::Good,
                reason: "both temperature and moisture suit this crop",
            },
            (true, false) | (false, true) => GroundTruth {
                outcome: Outcome::Neutral,
                reason: "conditions partially suit this crop",
            },
            (false, false) => GroundTruth {
                outcome: Outcome::Bad,
                reason: "neither temperature nor moisture suits this crop",
            },
        }
    }
}

/// Crop types for the crop-specific decision game, each with its own
/// preferred temperature and precipitation ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Crop {
    Wheat,
    Corn,
    Potato,
}

impl Crop {
    pub fn good_temp(&self) -> RangeInclusive<f64> {
        match self {
            Crop::Wheat => 12.0..=25.0,
            Crop::Corn => 18.0..=30.0,
            Crop::Potato => 10.0..=22.0,
        }
    }

    pub fn good_precip(&self) -> RangeInclusive<f64> {
        match self {
            Crop::Wheat => 2.0..=10.0,
            Crop::Corn => 3.0..=12.0,
            Crop::Potato => 2.0..=8.0,
        }
    }
}

impl fmt::Display for Crop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Crop::Wheat => "wheat",
            Crop::Corn => "corn",
            Crop::Potato => "potato",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Crop {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "wheat" => Ok(Crop::Wheat),
            "corn" => Ok(Crop::Corn),
            "potato" => Ok(Crop::Potato),
            other => Err(format!("unknown crop '{other}' (wheat, corn, potato)")),
        }
    }
}

/// How a submission moved the session counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Payoff {
    Scored,
    Failed,
    Unchanged,
}

/// Evaluate one plant-or-wait submission against a sampled day.
///
/// Payoff table: planting on a good day or waiting out a bad one
/// scores; planting on a bad day or waiting through a good one fails;
/// neutral days move no counter. `rounds` increments exactly once per
/// submission regardless of outcome, and a history row is appended.
pub fn evaluate_decision(
    record: &WeatherRecord,
    action: PlayerAction,
    crop: Option<Crop>,
    session: &mut SessionState,
) -> (GroundTruth, Payoff) {
    let truth = match crop {
        Some(c) => GroundTruth::for_crop(c, record.temperature_c, record.precipitation_mm),
        None => GroundTruth::for_day(record.temperature_c, record.precipitation_mm),
    };

    let payoff = match (truth.outcome, action) {
        (Outcome::Good, PlayerAction::Plant) => Payoff::Scored,
        (Outcome::Good, PlayerAction::Wait) => Payoff::Failed,
        (Outcome::Bad, PlayerAction::Plant) => Payoff::Failed,
        (Outcome::Bad, PlayerAction::Wait) => Payoff::Scored,
        (Outcome::Neutral, _) => Payoff::Unchanged,
    };

    match payoff {
        Payoff::Scored => session.score += 1,
        Payoff::Failed => session.fails += 1,
        Payoff::Unchanged => {}
    }
    session.rounds += 1;
    session.history.push(RoundRecord {
        date: record.date,
        temperature_c: record.temperature_c,
        precipitation_mm: record.precipitation_mm,
        action: action.label().to_string(),
        outcome: truth.outcome.tag().to_string(),
    });

    (truth, payoff)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use kzw_weather::WeatherRecord;

    fn day(temp: f64, precip: f64) -> WeatherRecord {
        WeatherRecord {
            date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            temperature_c: temp,
            precipitation_mm: precip,
            region: None,
        }
    }

    #[test]
    fn test_ground_truth_chain() {
        assert_eq!(GroundTruth::for_day(32.0, 0.5).outcome, Outcome::Bad);
        assert_eq!(GroundTruth::for_day(8.0, 6.0).outcome, Outcome::Bad);
        assert_eq!(GroundTruth::for_day(24.0, 3.0).outcome, Outcome::Good);
        assert_eq!(GroundTruth::for_day(15.0, 12.0).outcome, Outcome::Bad);
        assert_eq!(GroundTruth::for_day(15.0, 7.0).outcome, Outcome::Neutral);
    }

    #[test]
    fn test_ground_truth_good_boundaries() {
        // both ranges inclusive
        assert_eq!(GroundTruth::for_day(20.0, 1.0).outcome, Outcome::Good);
        assert_eq!(GroundTruth::for_day(28.0, 5.0).outcome, Outcome::Good);
    }

    #[test]
    fn test_plant_on_good_day_scores() {
        let mut session = SessionState::new();
        let (truth, payoff) =
            evaluate_decision(&day(24.0, 3.0), PlayerAction::Plant, None, &mut session);
        assert_eq!(truth.outcome, Outcome::Good);
        assert_eq!(payoff, Payoff::Scored);
        assert_eq!(session.score, 1);
        assert_eq!(session.fails, 0);
        assert_eq!(session.rounds, 1);
    }

    #[test]
    fn test_wait_on_bad_day_scores() {
        let mut session = SessionState::new();
        let (truth, payoff) =
            evaluate_decision(&day(32.0, 0.0), PlayerAction::Wait, None, &mut session);
        assert_eq!(truth.outcome, Outcome::Bad);
        assert_eq!(payoff, Payoff::Scored);
        assert_eq!(session.score, 1);
        assert_eq!(session.fails, 0);
    }

    #[test]
    fn test_wait_on_good_day_fails() {
        let mut session = SessionState::new();
        let (_, payoff) =
            evaluate_decision(&day(24.0, 3.0), PlayerAction::Wait, None, &mut session);
        assert_eq!(payoff, Payoff::Failed);
        assert_eq!(session.fails, 1);
        assert_eq!(session.score, 0);
    }

    #[test]
    fn test_neutral_day_moves_no_counter_but_counts_round() {
        let mut session = SessionState::new();
        let (truth, payoff) =
            evaluate_decision(&day(15.0, 7.0), PlayerAction::Plant, None, &mut session);
        assert_eq!(truth.outcome, Outcome::Neutral);
        assert_eq!(payoff, Payoff::Unchanged);
        assert_eq!(session.score, 0);
        assert_eq!(session.fails, 0);
        assert_eq!(session.rounds, 1);
    }

    #[test]
    fn test_history_row_appended() {
        let mut session = SessionState::new();
        evaluate_decision(&day(24.0, 3.0), PlayerAction::Plant, None, &mut session);
        assert_eq!(session.history.len(), 1);
        let row = &session.history[0];
        assert_eq!(row.action, "plant");
        assert_eq!(row.outcome, "good");
        assert_eq!(row.temperature_c, 24.0);
    }

    #[test]
    fn test_crop_ground_truth() {
        // wheat: 12..=25 °C, 2..=10 mm
        assert_eq!(
            GroundTruth::for_crop(Crop::Wheat, 18.0, 5.0).outcome,
            Outcome::Good
        );
        assert_eq!(
            GroundTruth::for_crop(Crop::Wheat, 18.0, 0.5).outcome,
            Outcome::Neutral
        );
        assert_eq!(
            GroundTruth::for_crop(Crop::Wheat, 35.0, 0.5).outcome,
            Outcome::Bad
        );
    }

    #[test]
    fn test_crop_payoff_table_unchanged() {
        // same payoff rules as the generic game: 30°C/2mm is Good for
        // corn, so planting scores.
        let mut session = SessionState::new();
        let (truth, payoff) = evaluate_decision(
            &day(30.0, 4.0),
            PlayerAction::Plant,
            Some(Crop::Corn),
            &mut session,
        );
        assert_eq!(truth.outcome, Outcome::Good);
        assert_eq!(payoff, Payoff::Scored);
        assert_eq!(session.rounds, 1);
    }

    #[test]
    fn test_crop_from_str() {
        assert_eq!("Wheat".parse::<Crop>().unwrap(), Crop::Wheat);
        assert!("rice".parse::<Crop>().is_err());
    }
}
