//! Interactive weather game loops.
//!
//! Each mode samples random days from the loaded table, reads the
//! player's submission from stdin, and updates the session tally via
//! the `kzw-game` evaluation functions.

use anyhow::bail;
use kzw_data::filter;
use kzw_game::{
    evaluate_band_guess, evaluate_coarse_guess, evaluate_decision, evaluate_numeric_guess,
    CoarseBand, Crop, GameRng, GuessGrade, Payoff, PlayerAction, QuizRound, SessionState,
    TempBand,
};
use kzw_utils::dates;
use kzw_weather::WeatherTable;
use log::info;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GameMode {
    Decision,
    Crop,
    Guess,
    Bands,
    Quick,
}

impl FromStr for GameMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "decision" => Ok(GameMode::Decision),
            "crop" => Ok(GameMode::Crop),
            "guess" => Ok(GameMode::Guess),
            "bands" => Ok(GameMode::Bands),
            "quick" => Ok(GameMode::Quick),
            other => Err(format!(
                "unknown game mode '{other}' (decision, crop, guess, bands, quick)"
            )),
        }
    }
}

pub fn run_play(
    mode: &str,
    csv_path: &str,
    region: Option<&str>,
    crop: Option<&str>,
    seed: Option<u64>,
    rounds: u32,
    json: bool,
) -> anyhow::Result<()> {
    let mode = GameMode::from_str(mode).map_err(anyhow::Error::msg)?;
    let crop: Option<Crop> = crop
        .map(str::parse)
        .transpose()
        .map_err(anyhow::Error::msg)?;
    if mode == GameMode::Crop && crop.is_none() {
        bail!("--crop is required for the crop game (wheat, corn, potato)");
    }

    let mut rng = match seed {
        Some(seed) => GameRng::from_seed_u64(seed),
        None => GameRng::from_entropy(),
    };

    let mut table = WeatherTable::from_path(csv_path)?;
    info!("loaded {} records from {}", table.len(), csv_path);
    if let Some(region) = region {
        table = filter::by_region(&table, region);
    }
    if table.is_empty() {
        bail!("no weather records to play with (check the CSV and --region)");
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut session = SessionState::new();
    let mut round = QuizRound::new();

    for n in 1..=rounds {
        let record = round.present(&table, &mut rng.0)?.clone();
        println!();
        println!("--- Round {n} of {rounds} ---");
        println!("Date: {}", dates::format_date(&record.date));
        if let Some(region) = &record.region {
            println!("Region: {region}");
        }

        let quit = match mode {
            GameMode::Decision | GameMode::Crop => {
                println!("Temperature: {:.1}C", record.temperature_c);
                println!("Precipitation: {:.1}mm", record.precipitation_mm);
                play_decision_round(&mut lines, &mut round, crop, &mut session)?
            }
            GameMode::Guess => {
                println!("Precipitation: {:.1}mm", record.precipitation_mm);
                play_guess_round(&mut lines, &mut round, &mut session)?
            }
            GameMode::Bands => play_bands_round(&mut lines, &mut round, &mut session)?,
            GameMode::Quick => play_quick_round(&mut lines, &mut round, &mut session)?,
        };
        if quit {
            break;
        }
        println!(
            "Score {} | Fails {} | Rounds {}",
            session.score, session.fails, session.rounds
        );
    }

    println!();
    println!(
        "Session over: {} wins, {} fails over {} rounds.",
        session.score, session.fails, session.rounds
    );
    if !session.history.is_empty() {
        println!();
        println!("History (most recent first):");
        for row in session.history.iter().rev() {
            println!(
                "  {} {:>6.1}C {:>5.1}mm  {:<12} {}",
                dates::format_date(&row.date),
                row.temperature_c,
                row.precipitation_mm,
                row.action,
                row.outcome
            );
        }
    }
    if json {
        println!("{}", serde_json::to_string_pretty(&session)?);
    }
    Ok(())
}

/// Returns true if the player quit (or stdin closed).
fn play_decision_round(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    round: &mut QuizRound,
    crop: Option<Crop>,
    session: &mut SessionState,
) -> anyhow::Result<bool> {
    let action = loop {
        let Some(answer) = ask("[p]lant, [w]ait or [q]uit: ", lines)? else {
            return Ok(true);
        };
        match answer.as_str() {
            "p" | "plant" => break PlayerAction::Plant,
            "w" | "wait" => break PlayerAction::Wait,
            "q" | "quit" => return Ok(true),
            _ => println!("Please answer p, w or q."),
        }
    };
    let Some(record) = round.take() else {
        return Ok(true);
    };
    let (truth, payoff) = evaluate_decision(&record, action, crop, session);
    println!("Outcome: {} ({})", truth.outcome.tag(), truth.reason);
    match payoff {
        Payoff::Scored => println!("Good call!"),
        Payoff::Failed => println!("Bad call."),
        Payoff::Unchanged => println!("Either choice was defensible."),
    }
    Ok(false)
}

fn play_guess_round(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    round: &mut QuizRound,
    session: &mut SessionState,
) -> anyhow::Result<bool> {
    let guess = loop {
        let Some(answer) = ask("Your temperature guess in C (q to quit): ", lines)? else {
            return Ok(true);
        };
        if answer == "q" || answer == "quit" {
            return Ok(true);
        }
        match answer.parse::<f64>() {
            Ok(v) => break v,
            Err(_) => println!("Please enter a number."),
        }
    };
    let Some(record) = round.take() else {
        return Ok(true);
    };
    let grade = evaluate_numeric_guess(&record, guess, session);
    let verdict = match grade {
        GuessGrade::NearPerfect => "Near-perfect!",
        GuessGrade::Decent => "Decent guess.",
        GuessGrade::Miss => "A miss.",
    };
    println!(
        "{} The temperature was {:.1}C.",
        verdict, record.temperature_c
    );
    Ok(false)
}

fn play_bands_round(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    round: &mut QuizRound,
    session: &mut SessionState,
) -> anyhow::Result<bool> {
    println!("Which band was the temperature in?");
    for (i, band) in TempBand::ALL.iter().enumerate() {
        println!("  {}) {}", i + 1, band.label());
    }
    let guess = match pick_index("Band number (q to quit): ", TempBand::ALL.len(), lines)? {
        Some(i) => TempBand::ALL[i],
        None => return Ok(true),
    };
    let Some(record) = round.take() else {
        return Ok(true);
    };
    let (truth, correct) = evaluate_band_guess(&record, guess, session);
    print_band_verdict(correct, truth.label(), record.temperature_c);
    Ok(false)
}

fn play_quick_round(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    round: &mut QuizRound,
    session: &mut SessionState,
) -> anyhow::Result<bool> {
    println!("Which band was the temperature in?");
    for (i, band) in CoarseBand::ALL.iter().enumerate() {
        println!("  {}) {}", i + 1, band.label());
    }
    let guess = match pick_index("Band number (q to quit): ", CoarseBand::ALL.len(), lines)? {
        Some(i) => CoarseBand::ALL[i],
        None => return Ok(true),
    };
    let Some(record) = round.take() else {
        return Ok(true);
    };
    let (truth, correct) = evaluate_coarse_guess(&record, guess, session);
    print_band_verdict(correct, truth.label(), record.temperature_c);
    Ok(false)
}

fn print_band_verdict(correct: bool, truth_label: &str, temperature_c: f64) {
    if correct {
        println!("Correct! It was {temperature_c:.1}C.");
    } else {
        println!("Wrong - it was {temperature_c:.1}C ({truth_label}).");
    }
}

/// Prompt and read one trimmed, lowercased line. `None` on EOF.
fn ask(
    prompt: &str,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> anyhow::Result<Option<String>> {
    print!("{prompt}");
    io::stdout().flush()?;
    match lines.next() {
        Some(line) => Ok(Some(line?.trim().to_ascii_lowercase())),
        None => Ok(None),
    }
}

/// Prompt for a 1-based menu choice, returning the 0-based index.
/// `None` means the player quit or stdin closed.
fn pick_index(
    prompt: &str,
    len: usize,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> anyhow::Result<Option<usize>> {
    loop {
        let Some(answer) = ask(prompt, lines)? else {
            return Ok(None);
        };
        if answer == "q" || answer == "quit" {
            return Ok(None);
        }
        match answer.parse::<usize>() {
            Ok(n) if (1..=len).contains(&n) => return Ok(Some(n - 1)),
            _ => println!("Please enter a number from 1 to {len}."),
        }
    }
}
