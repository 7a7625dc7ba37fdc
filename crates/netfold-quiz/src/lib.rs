//! Quiz generation on top of `netfold-geometry`: random labeled nets, answer
//! options with exactly one foldable corner, and a session that numbers
//! questions and keeps score.

mod answer;
mod error;
mod net_gen;
pub mod options;
mod session;

pub use answer::{AnswerSet, CubeOption, FaceTriple};
pub use error::QuizError;
pub use net_gen::{NetGenerator, generate_net};
pub use options::{GenerationLimits, WrongStrategy, generate_options};
pub use session::{Feedback, Hint, Question, QuizSession, SessionSettings, SessionStats};
