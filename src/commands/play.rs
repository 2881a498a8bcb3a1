//! Interactive play mode
//!
//! Suggests a guess, reads the colors the player saw, and narrows the pool.
//! Reads commands from any `BufRead` so the loop can be driven by a script.

use crate::core::{FeedbackRow, Word};
use crate::output::formatters::colored_tiles;
use crate::solver::{Session, SessionConfig, SessionStatus, Solver, SolverError, StrategyType};
use anyhow::Result;
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// Candidates listed when few remain
const SHOW_CANDIDATES_BELOW: usize = 10;

/// Games finished during one play run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PlaySummary {
    pub games: usize,
    pub solved: usize,
}

/// Run interactive mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_play<R: Rng + ?Sized>(
    pool: &[Word],
    strategy: StrategyType,
    config: SessionConfig,
    rng: &mut R,
) -> Result<PlaySummary> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    run_play_with(pool, strategy, config, rng, &mut input, &mut output)
}

/// Run interactive mode on the given input and output
///
/// End of input is treated like `quit`.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
#[allow(clippy::too_many_lines)] // Interactive game loop requires detailed handling
pub fn run_play_with<R, I, W>(
    pool: &[Word],
    strategy: StrategyType,
    config: SessionConfig,
    rng: &mut R,
    input: &mut I,
    out: &mut W,
) -> Result<PlaySummary>
where
    R: Rng + ?Sized,
    I: BufRead,
    W: Write,
{
    let mut session = Session::new(Solver::new(strategy, pool), config);
    let mut summary = PlaySummary::default();

    writeln!(out, "\n{}", "Wordle Solver - Interactive Mode".bright_cyan().bold())?;
    writeln!(out, "Strategy: {strategy} ({})\n", strategy.description())?;
    writeln!(out, "After each guess, enter the feedback you saw:")?;
    writeln!(out, "  - G/g/2/🟩 for green (correct position)")?;
    writeln!(out, "  - Y/y/1/🟨 for yellow (wrong position)")?;
    writeln!(out, "  - -/_/0/⬜ for gray (not in word)")?;
    writeln!(out, "  - or 'win' if the guess was right")?;
    writeln!(out, "Commands: 'quit', 'new', 'undo'\n")?;

    loop {
        let candidates = session.candidates();
        let guess = match session.propose(rng) {
            Ok(guess) => guess,
            Err(SolverError::EmptyCandidatePool) => {
                writeln!(out, "\n{}", "No candidates remain! Your feedback may be incorrect.".red())?;
                writeln!(out, "Type 'undo' to go back, or 'new' to start over.\n")?;

                loop {
                    let Some(command) = prompt(input, out, "Command")? else {
                        return Ok(summary);
                    };
                    match command.to_lowercase().as_str() {
                        "undo" | "u" => {
                            if let Some(record) = session.undo() {
                                writeln!(out, "Undone {}\n", record.word)?;
                                break;
                            }
                            writeln!(out, "Nothing to undo!\n")?;
                        }
                        "new" | "n" => {
                            session.reset();
                            writeln!(out, "\nNew game started!\n")?;
                            break;
                        }
                        "quit" | "q" | "exit" => return Ok(summary),
                        _ => writeln!(out, "Type 'undo', 'new' or 'quit'.")?,
                    }
                }
                continue;
            }
            Err(e) => return Err(e.into()),
        };

        let turn = session.history().len() + 1;
        writeln!(out, "{}", "─".repeat(60))?;
        writeln!(
            out,
            "Turn {turn}/{}: {} candidates remaining",
            session.config().max_attempts,
            candidates.len()
        )?;
        writeln!(out, "{}", "─".repeat(60))?;
        writeln!(out, "\nSuggested guess: {}", guess.text().bright_yellow().bold())?;
        writeln!(
            out,
            "Chance it is the answer: {:.1}%\n",
            100.0 / candidates.len() as f64
        )?;

        if candidates.len() <= SHOW_CANDIDATES_BELOW {
            writeln!(out, "Remaining candidates:")?;
            for candidate in &candidates {
                writeln!(out, "  • {candidate}")?;
            }
            writeln!(out)?;
        }

        let feedback = loop {
            let Some(line) = prompt(input, out, "Enter feedback (G/Y/-, 'win', or command)")? else {
                return Ok(summary);
            };

            match line.to_lowercase().as_str() {
                "quit" | "q" | "exit" => return Ok(summary),
                "new" | "n" => {
                    session.reset();
                    writeln!(out, "\nNew game started!\n")?;
                    break None;
                }
                "undo" | "u" => {
                    if let Some(record) = session.undo() {
                        writeln!(out, "Undone {}\n", record.word)?;
                        break None;
                    }
                    writeln!(out, "Nothing to undo!\n")?;
                }
                "win" | "correct" | "yes" | "solved" => break Some(FeedbackRow::SOLVED),
                _ => match line.parse::<FeedbackRow>() {
                    Ok(row) => break Some(row),
                    Err(e) => writeln!(out, "Invalid pattern: {e}. Use G/Y/-, 'win', or '🟩🟨⬜🟩🟨'\n")?,
                },
            }
        };

        let Some(feedback) = feedback else {
            continue;
        };

        match session.record(guess.clone(), feedback)? {
            SessionStatus::Solved => {
                summary.games += 1;
                summary.solved += 1;
                writeln!(out, "\n{}", "═".repeat(60).bright_cyan())?;
                writeln!(out, "{}", "  W O R D L E   S O L V E D !".bright_green().bold())?;
                writeln!(out, "{}", "═".repeat(60).bright_cyan())?;
                writeln!(
                    out,
                    "\n  Solution found in {turn} {}",
                    if turn == 1 { "guess" } else { "guesses" }
                )?;
            }
            SessionStatus::Exhausted => {
                summary.games += 1;
                writeln!(
                    out,
                    "\n{}",
                    format!("Out of attempts after {turn} guesses.").red().bold()
                )?;
            }
            _ => continue,
        }

        writeln!(out, "\n  Guess history:")?;
        for (i, record) in session.history().iter().enumerate() {
            writeln!(
                out,
                "    {}. {} {}",
                i + 1,
                colored_tiles(&record.word, &record.feedback),
                record.feedback.to_emoji()
            )?;
        }
        writeln!(out)?;

        match prompt(input, out, "Play again? (yes/no)")?
            .map(|answer| answer.to_lowercase())
            .as_deref()
        {
            Some("yes" | "y") => {
                session.reset();
                writeln!(out, "\nNew game started!\n")?;
            }
            _ => {
                writeln!(out, "\nThanks for playing!\n")?;
                return Ok(summary);
            }
        }
    }
}

/// Read one trimmed line, `None` at end of input
fn prompt<I: BufRead, W: Write>(input: &mut I, out: &mut W, label: &str) -> io::Result<Option<String>> {
    write!(out, "{label}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
