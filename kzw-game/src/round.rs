use kzw_weather::{EmptyRangeError, WeatherRecord, WeatherTable};
use rand::Rng;

/// One quiz round's presentation state.
///
/// Idle until [`present`](QuizRound::present) draws a row, then holds
/// it until [`take`](QuizRound::take) hands it to an evaluation
/// function, which returns the round to Idle. Draws are independent:
/// the same record may recur.
#[derive(Debug, Default)]
pub struct QuizRound {
    current: Option<WeatherRecord>,
}

impl QuizRound {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw a fresh random row from the table. Replaces any
    /// previously presented row.
    pub fn present<'a, R: Rng>(
        &'a mut self,
        table: &WeatherTable,
        rng: &mut R,
    ) -> Result<&'a WeatherRecord, EmptyRangeError> {
        let record = table.sample(rng)?.clone();
        Ok(self.current.insert(record))
    }

    /// The currently presented row, if any.
    pub fn presented(&self) -> Option<&WeatherRecord> {
        self.current.as_ref()
    }

    /// Take the presented row for evaluation, returning the round to
    /// Idle. `None` means nothing was presented (a caller error, not
    /// a panic).
    pub fn take(&mut self) -> Option<WeatherRecord> {
        self.current.take()
    }
}

#[cfg(test)]
mod tests {
    use super::QuizRound;
    use crate::rng::GameRng;
    use kzw_weather::WeatherTable;

    const CSV: &str = "\
date,temperature_C,precipitation_mm
2024-05-01,18.5,2.0
2024-05-02,21.0,6.5
2024-05-03,16.2,24.0
";

    #[test]
    fn test_round_lifecycle() {
        let table = WeatherTable::from_reader(CSV.as_bytes()).unwrap();
        let mut rng = GameRng::from_seed_u64(3);
        let mut round = QuizRound::new();

        assert!(round.presented().is_none());
        assert!(round.take().is_none());

        let presented_date = round.present(&table, &mut rng.0).unwrap().date;
        assert_eq!(round.presented().unwrap().date, presented_date);

        let taken = round.take().unwrap();
        assert_eq!(taken.date, presented_date);
        // back to Idle
        assert!(round.presented().is_none());
    }

    #[test]
    fn test_present_empty_table_fails() {
        let table = WeatherTable::default();
        let mut rng = GameRng::from_seed_u64(0);
        let mut round = QuizRound::new();
        assert!(round.present(&table, &mut rng.0).is_err());
    }

    #[test]
    fn test_seeded_draws_are_reproducible() {
        let table = WeatherTable::from_reader(CSV.as_bytes()).unwrap();
        let mut rng_a = GameRng::from_seed_u64(99);
        let mut rng_b = GameRng::from_seed_u64(99);
        let mut round_a = QuizRound::new();
        let mut round_b = QuizRound::new();
        for _ in 0..10 {
            let a = round_a.present(&table, &mut rng_a.0).unwrap().date;
            let b = round_b.present(&table, &mut rng_b.0).unwrap().date;
            assert_eq!(a, b);
        }
    }
}
