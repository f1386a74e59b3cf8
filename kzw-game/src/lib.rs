//! Quiz/game engine over weather records.
//!
//! Two game families share one shape: sample a random row, hide some
//! of its fields, accept a player submission, and update per-session
//! score/fails/rounds counters. All randomness flows through an
//! injected RNG so tests can assert on exact sampled rows.

pub mod decision;
pub mod guess;
pub mod rng;
pub mod round;
pub mod session;

pub use decision::{evaluate_decision, Crop, GroundTruth, Outcome, Payoff, PlayerAction};
pub use guess::{
    evaluate_band_guess, evaluate_coarse_guess, evaluate_numeric_guess, grade_numeric,
    CoarseBand, GuessGrade, TempBand,
};
pub use rng::GameRng;
pub use round::QuizRound;
pub use session::{RoundRecord, SessionState};
