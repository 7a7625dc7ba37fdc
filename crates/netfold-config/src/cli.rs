//! Command-line arguments for the netfold quiz.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Cube-net folding quiz.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "netfold", about = "Which cube does this net fold into?")]
pub struct CliArgs {
    /// Fixed RNG seed for a reproducible session.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Comma-separated shape families to draw nets from (cross, t, z, l).
    #[arg(long, value_delimiter = ',')]
    pub families: Option<Vec<String>>,

    /// Show the opposite-face hint.
    #[arg(long)]
    pub hints: Option<bool>,

    /// Print one question as JSON and exit.
    #[arg(long)]
    pub json: bool,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(seed) = args.seed {
            self.quiz.seed = Some(seed);
        }
        if let Some(ref families) = args.families {
            self.quiz.families = families.clone();
        }
        if let Some(hints) = args.hints {
            self.display.show_hints = hints;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
