use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Summary of one completed round, kept in session history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundRecord {
    pub date: NaiveDate,
    pub temperature_c: f64,
    pub precipitation_mm: f64,
    /// What the player did, e.g. "plant", "wait", "guess 22.0".
    pub action: String,
    /// Outcome tag, e.g. "good", "bad", "near-perfect", "miss".
    pub outcome: String,
}

/// Per-session mutable counters and history.
///
/// Owned by the caller (the CLI creates one per game session) and
/// mutated only by the game evaluation functions. Never persisted
/// across sessions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionState {
    pub score: u32,
    pub fails: u32,
    pub rounds: u32,
    pub history: Vec<RoundRecord>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all counters and history to the session-start state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::{RoundRecord, SessionState};
    use chrono::NaiveDate;

    #[test]
    fn test_new_session_is_zeroed() {
        let session = SessionState::new();
        assert_eq!(session.score, 0);
        assert_eq!(session.fails, 0);
        assert_eq!(session.rounds, 0);
        assert!(session.history.is_empty());
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut session = SessionState::new();
        session.score = 3;
        session.fails = 1;
        session.rounds = 4;
        session.history.push(RoundRecord {
            date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            temperature_c: 20.0,
            precipitation_mm: 2.0,
            action: "plant".into(),
            outcome: "good".into(),
        });
        session.reset();
        assert_eq!(session.rounds, 0);
        assert!(session.history.is_empty());
    }
}
