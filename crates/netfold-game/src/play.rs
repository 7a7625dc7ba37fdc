//! Line-based quiz loop.
//!
//! Reads one command per line and writes the quiz to `out`. Generic over the
//! reader and writer so the loop runs the same against stdin or a test buffer.

use std::io::{self, BufRead, Write};

use netfold_config::DisplayConfig;
use netfold_quiz::{QuizError, QuizSession};
use tracing::{debug, warn};

use crate::render;

/// Player input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Choose the option at this index (0-based).
    Answer(usize),
    /// Move on to a fresh question.
    Next,
    /// Show an opposite-face hint for the current net.
    Hint,
    /// Print the running score.
    Stats,
    /// Clear counters and start over.
    Reset,
    Help,
    Quit,
}

/// Map one input line to a command, ignoring case and surrounding whitespace.
pub fn parse_command(line: &str) -> Option<Command> {
    match line.trim().to_ascii_lowercase().as_str() {
        "1" => Some(Command::Answer(0)),
        "2" => Some(Command::Answer(1)),
        "3" => Some(Command::Answer(2)),
        "4" => Some(Command::Answer(3)),
        "n" | "next" | "" => Some(Command::Next),
        "h" | "hint" => Some(Command::Hint),
        "s" | "stats" => Some(Command::Stats),
        "r" | "reset" => Some(Command::Reset),
        "?" | "help" => Some(Command::Help),
        "q" | "quit" | "exit" => Some(Command::Quit),
        _ => None,
    }
}

const HELP: &str = "Keys: 1-4 answer, n next question, h hint, s stats, r reset, q quit";

fn ask<W: Write>(session: &mut QuizSession, display: &DisplayConfig, out: &mut W) -> io::Result<()> {
    match session.next_question() {
        Ok(question) => {
            writeln!(out, "{}", render::render_question(question, display.cell_width))?;
        }
        Err(e) => {
            warn!(error = %e, "question generation failed");
            writeln!(out, "Could not build a question ({e}). Press n to try again.")?;
            return Ok(());
        }
    }
    if display.show_hints {
        show_hint(session, out)?;
    }
    Ok(())
}

fn show_hint<W: Write>(session: &QuizSession, out: &mut W) -> io::Result<()> {
    match session.hint() {
        Ok(Some(hint)) => writeln!(out, "{}", render::render_hint(&hint)),
        Ok(None) => Ok(()),
        Err(e) => writeln!(out, "{e}"),
    }
}

fn answer<W: Write>(session: &mut QuizSession, index: usize, out: &mut W) -> io::Result<()> {
    match session.select_index(index) {
        Ok(feedback) => {
            let line = session
                .current()
                .map(|q| render::render_feedback(&feedback, &q.answers))
                .unwrap_or_default();
            writeln!(out, "{line}")?;
            writeln!(out, "{}", render::render_stats(&session.stats()))?;
            writeln!(out, "Press n for the next question.")
        }
        Err(QuizError::AlreadyAnswered(_)) => {
            writeln!(out, "Already answered. Press n for the next question.")
        }
        Err(QuizError::NoActiveQuestion) => writeln!(out, "No question yet. Press n to start."),
        Err(e) => writeln!(out, "{e}"),
    }
}

/// Run the quiz until `q` or end of input.
pub fn run<R: BufRead, W: Write>(
    session: &mut QuizSession,
    display: &DisplayConfig,
    input: R,
    mut out: W,
) -> io::Result<()> {
    writeln!(out, "{HELP}")?;
    ask(session, display, &mut out)?;

    for line in input.lines() {
        let line = line?;
        let Some(command) = parse_command(&line) else {
            writeln!(out, "Unknown command {:?}. {HELP}", line.trim())?;
            continue;
        };
        debug!(?command, "input");
        match command {
            Command::Answer(index) => answer(session, index, &mut out)?,
            Command::Next => ask(session, display, &mut out)?,
            Command::Hint => show_hint(session, &mut out)?,
            Command::Stats => writeln!(out, "{}", render::render_stats(&session.stats()))?,
            Command::Reset => {
                session.reset();
                writeln!(out, "Session reset.")?;
                ask(session, display, &mut out)?;
            }
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Quit => break,
        }
        out.flush()?;
    }

    writeln!(out, "{}", render::render_stats(&session.stats()))?;
    Ok(())
}
