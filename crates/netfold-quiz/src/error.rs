//! Quiz error types.

use netfold_geometry::GeometryError;

/// Errors raised while generating or answering questions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuizError {
    /// A geometry query rejected its arguments.
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    /// No three faces of the net meet at a corner. Only a defective
    /// topology table can cause this.
    #[error("no corner found on net template {template}")]
    GenerationFailure {
        /// Template the net was built from.
        template: &'static str,
    },

    /// A finished answer set does not have exactly one correct option.
    #[error("answer set has {0} correct options, expected 1")]
    InvalidAnswerSet(usize),

    /// An answer was submitted before any question was generated.
    #[error("no question is active")]
    NoActiveQuestion,

    /// The active question already has an answer.
    #[error("question {0} has already been answered")]
    AlreadyAnswered(u32),

    /// The selected option does not exist on the active question.
    #[error("unknown option {0}")]
    UnknownOption(String),
}
