//! netfold: a terminal quiz on folding cube nets.
//!
//! Shows a labeled net and four cube corners; exactly one of them can be
//! folded from the net. `--json` prints a single question for other
//! front ends instead of starting the interactive loop.
//!
//! Run with: `cargo run -p netfold-game`

mod play;
mod render;

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use netfold_config::{CliArgs, Config, default_config_dir};
use netfold_geometry::{ShapeFamily, catalog::verify_catalog};
use netfold_quiz::{GenerationLimits, QuizSession, SessionSettings};
use tracing::{error, info, warn};

fn session_settings(config: &Config) -> SessionSettings {
    let families = config
        .quiz
        .families
        .iter()
        .filter_map(|name| {
            let family = ShapeFamily::from_name(name);
            if family.is_none() {
                warn!(name = name.as_str(), "ignoring unknown shape family");
            }
            family
        })
        .collect();

    SessionSettings {
        seed: config.quiz.seed,
        families,
        limits: GenerationLimits {
            wrong_sample_attempts: config.quiz.wrong_sample_attempts,
            regenerate_attempts: config.quiz.regenerate_attempts,
        },
    }
}

fn print_json(session: &mut QuizSession) -> ExitCode {
    let question = match session.next_question() {
        Ok(question) => question,
        Err(e) => {
            error!(error = %e, "question generation failed");
            return ExitCode::FAILURE;
        }
    };
    match serde_json::to_string_pretty(question) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "failed to serialize question");
            ExitCode::FAILURE
        }
    }
}

fn main() -> ExitCode {
    let args = CliArgs::parse();

    let config_dir = args
        .config
        .clone()
        .or_else(default_config_dir)
        .unwrap_or_else(|| PathBuf::from(".netfold"));

    // Load or create config, then apply CLI overrides
    let mut config = Config::load_or_create(&config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        Config::default()
    });
    config.apply_cli_overrides(&args);

    let log_dir = config.log_dir(&config_dir);
    netfold_log::init_logging(Some(&log_dir), cfg!(debug_assertions), Some(&config));

    info!(config_dir = %config_dir.display(), "netfold starting");
    let defects = verify_catalog();
    if defects.is_empty() {
        info!(templates = netfold_geometry::catalog().len(), "net catalog verified");
    } else {
        for defect in &defects {
            warn!(?defect, "net template does not fold to its family topology");
        }
    }

    let mut session = QuizSession::new(session_settings(&config));
    if args.json {
        return print_json(&mut session);
    }

    let stdin = io::stdin();
    match play::run(&mut session, &config.display, stdin.lock(), io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "terminal i/o failed");
            ExitCode::FAILURE
        }
    }
}
