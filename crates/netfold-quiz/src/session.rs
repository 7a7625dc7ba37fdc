//! A running quiz: question numbering, answer locking and score keeping.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use tracing::info;

use netfold_geometry::{AdjacencyEngine, Net, ShapeFamily};

use crate::answer::AnswerSet;
use crate::error::QuizError;
use crate::net_gen::NetGenerator;
use crate::options::{GenerationLimits, generate_options};

/// How a session generates its questions.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionSettings {
    /// Fixed RNG seed. `None` seeds from the thread RNG.
    pub seed: Option<u64>,
    /// Families to draw templates from. Empty means all.
    pub families: Vec<ShapeFamily>,
    /// Retry bounds for option generation.
    pub limits: GenerationLimits,
}

/// One question: a net and the four options offered for it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Question {
    /// 1-based position in the session.
    pub number: u32,
    /// The net to fold.
    pub net: Net,
    /// The options in presentation order.
    pub answers: AnswerSet,
    /// Identifier of the chosen option once answered.
    pub selected: Option<String>,
}

impl Question {
    /// Whether an option has been chosen.
    #[must_use]
    pub fn is_answered(&self) -> bool {
        self.selected.is_some()
    }
}

/// Session counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SessionStats {
    /// Questions generated.
    pub generated: u32,
    /// Questions answered.
    pub answered: u32,
    /// Questions answered correctly.
    pub correct: u32,
}

impl SessionStats {
    /// Share of answered questions that were right, 0.0 before any answer.
    #[must_use]
    pub fn accuracy(&self) -> f32 {
        if self.answered == 0 {
            return 0.0;
        }
        self.correct as f32 / self.answered as f32
    }
}

/// Result of answering a question.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Feedback {
    /// Whether the chosen option was the correct one.
    pub correct: bool,
    /// Identifier of the chosen option.
    pub selected: String,
    /// Identifier of the correct option.
    pub correct_id: String,
}

/// The face opposite the correct option's front face.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Hint {
    /// Front label of the correct option.
    pub label: u8,
    /// Label that folds opposite `label`.
    pub opposite: u8,
}

/// Generates questions and records answers.
pub struct QuizSession {
    engine: AdjacencyEngine,
    generator: NetGenerator,
    limits: GenerationLimits,
    seed: Option<u64>,
    rng: ChaCha8Rng,
    next_number: u32,
    current: Option<Question>,
    stats: SessionStats,
}

fn seeded_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_rng(&mut rand::rng()),
    }
}

impl QuizSession {
    /// Start a session with no current question. A seeded session replays
    /// the same questions.
    pub fn new(settings: SessionSettings) -> Self {
        Self {
            engine: AdjacencyEngine::default(),
            generator: NetGenerator::with_families(&settings.families),
            limits: settings.limits,
            seed: settings.seed,
            rng: seeded_rng(settings.seed),
            next_number: 1,
            current: None,
            stats: SessionStats::default(),
        }
    }

    /// Generate the next question and make it current.
    ///
    /// On failure the current question and the numbering are left as they
    /// were, so a retry reuses the same number.
    pub fn next_question(&mut self) -> Result<&Question, QuizError> {
        let net = self.generator.generate(&mut self.engine, &mut self.rng)?;
        let answers = generate_options(&mut self.engine, &net, &self.limits, &mut self.rng)?;
        let correct = answers.correct_count();
        if correct != 1 {
            return Err(QuizError::InvalidAnswerSet(correct));
        }

        let number = self.next_number;
        self.next_number += 1;
        self.stats.generated += 1;
        info!(number, template = net.template_name(), family = %net.family(), "new question");

        Ok(self.current.insert(Question {
            number,
            net,
            answers,
            selected: None,
        }))
    }

    /// The question being asked, if any.
    #[must_use]
    pub fn current(&self) -> Option<&Question> {
        self.current.as_ref()
    }

    /// Answer with the option at `index` in presentation order.
    pub fn select_index(&mut self, index: usize) -> Result<Feedback, QuizError> {
        let question = self.current.as_ref().ok_or(QuizError::NoActiveQuestion)?;
        let id = question
            .answers
            .options()
            .get(index)
            .map(|o| o.id.clone())
            .ok_or_else(|| QuizError::UnknownOption(index.to_string()))?;
        self.select_id(&id)
    }

    /// Answer with the option identified by `id`.
    ///
    /// A question can only be answered once.
    pub fn select_id(&mut self, id: &str) -> Result<Feedback, QuizError> {
        let question = self.current.as_mut().ok_or(QuizError::NoActiveQuestion)?;
        if question.is_answered() {
            return Err(QuizError::AlreadyAnswered(question.number));
        }
        let option = question
            .answers
            .get(id)
            .ok_or_else(|| QuizError::UnknownOption(id.to_owned()))?;
        let correct = option.is_correct;
        let correct_id = question
            .answers
            .correct()
            .map(|o| o.id.clone())
            .ok_or(QuizError::InvalidAnswerSet(0))?;

        question.selected = Some(id.to_owned());
        self.stats.answered += 1;
        if correct {
            self.stats.correct += 1;
        }
        info!(number = question.number, selected = id, correct, "answered");

        Ok(Feedback {
            correct,
            selected: id.to_owned(),
            correct_id,
        })
    }

    /// The label opposite the correct option's front face.
    pub fn hint(&self) -> Result<Option<Hint>, QuizError> {
        let question = self.current.as_ref().ok_or(QuizError::NoActiveQuestion)?;
        let Some(correct) = question.answers.correct() else {
            return Ok(None);
        };
        let label = correct.faces.front();
        Ok(self
            .engine
            .opposite_face(label, &question.net)?
            .map(|opposite| Hint { label, opposite }))
    }

    /// Counters for questions generated, answered and answered correctly.
    #[must_use]
    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    /// Drop the current question and the counters. A seeded session replays
    /// the same questions afterwards.
    pub fn reset(&mut self) {
        self.current = None;
        self.next_number = 1;
        self.stats = SessionStats::default();
        self.rng = seeded_rng(self.seed);
        info!("session reset");
    }

    /// The engine, bound to the current question's family.
    #[must_use]
    pub fn engine(&self) -> &AdjacencyEngine {
        &self.engine
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(seed: u64) -> QuizSession {
        QuizSession::new(SessionSettings {
            seed: Some(seed),
            ..SessionSettings::default()
        })
    }

    #[test]
    fn test_answer_before_question() {
        let mut session = seeded(1);
        assert_eq!(session.select_index(0), Err(QuizError::NoActiveQuestion));
        assert_eq!(session.hint(), Err(QuizError::NoActiveQuestion));
        assert!(session.current().is_none());
    }

    #[test]
    fn test_questions_are_numbered() {
        let mut session = seeded(2);
        assert_eq!(session.next_question().unwrap().number, 1);
        assert_eq!(session.next_question().unwrap().number, 2);
        assert_eq!(session.stats().generated, 2);
    }

    #[test]
    fn test_answer_is_locked() {
        let mut session = seeded(3);
        session.next_question().unwrap();
        let feedback = session.select_index(2).unwrap();
        assert_eq!(feedback.selected, session.current().unwrap().answers.options()[2].id);
        assert_eq!(session.select_index(1), Err(QuizError::AlreadyAnswered(1)));
        assert!(session.current().unwrap().is_answered());
    }

    #[test]
    fn test_correct_answer_is_scored() {
        let mut session = seeded(4);
        let correct_id = session.next_question().unwrap().answers.correct().unwrap().id.clone();
        let feedback = session.select_id(&correct_id).unwrap();
        assert!(feedback.correct);
        assert_eq!(feedback.correct_id, correct_id);

        let question = session.next_question().unwrap();
        let wrong_id = question.answers.iter().find(|o| !o.is_correct).unwrap().id.clone();
        let feedback = session.select_id(&wrong_id).unwrap();
        assert!(!feedback.correct);
        assert_ne!(feedback.correct_id, wrong_id);

        let stats = session.stats();
        assert_eq!((stats.generated, stats.answered, stats.correct), (2, 2, 1));
        assert!((stats.accuracy() - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn test_unknown_option() {
        let mut session = seeded(5);
        session.next_question().unwrap();
        assert_eq!(
            session.select_id("option-9"),
            Err(QuizError::UnknownOption("option-9".into()))
        );
        assert_eq!(session.select_index(4), Err(QuizError::UnknownOption("4".into())));
        assert!(!session.current().unwrap().is_answered());
    }

    #[test]
    fn test_hint_names_opposite_face() {
        let mut session = seeded(6);
        session.next_question().unwrap();
        let hint = session.hint().unwrap().unwrap();
        let question = session.current().unwrap();
        assert_eq!(hint.label, question.answers.correct().unwrap().faces.front());
        assert!(!session.engine().faces_adjacent(hint.label, hint.opposite, &question.net).unwrap());
        assert_ne!(hint.label, hint.opposite);
    }

    #[test]
    fn test_reset_replays_seeded_questions() {
        let mut session = seeded(7);
        let first = session.next_question().unwrap().clone();
        session.select_index(0).unwrap();
        session.reset();
        assert_eq!(session.stats(), SessionStats::default());
        assert!(session.current().is_none());
        assert_eq!(session.next_question().unwrap(), &first);
    }

    #[test]
    fn test_family_filter_applies() {
        let mut session = QuizSession::new(SessionSettings {
            seed: Some(8),
            families: vec![ShapeFamily::L],
            ..SessionSettings::default()
        });
        for _ in 0..10 {
            assert_eq!(session.next_question().unwrap().net.family(), ShapeFamily::L);
        }
    }
}
