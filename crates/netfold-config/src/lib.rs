//! Configuration for the netfold quiz.
//!
//! Settings persist to disk as `config.ron`. Missing fields take their
//! defaults and unknown fields are ignored, so files written by older or
//! newer builds still load. Command-line flags override file values.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{Config, DebugConfig, DisplayConfig, QuizConfig, default_config_dir};
pub use error::ConfigError;
