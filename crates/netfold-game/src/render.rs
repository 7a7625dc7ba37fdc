//! Plain-text rendering of nets, options and session status.

use netfold_geometry::Net;
use netfold_quiz::{AnswerSet, Feedback, Hint, Question, SessionStats};

/// Narrowest cell that fits the brackets and a label.
const MIN_CELL_WIDTH: usize = 3;

/// Draw the net on its grid, one bracketed label per face.
pub fn render_net(net: &Net, cell_width: usize) -> String {
    let width = cell_width.max(MIN_CELL_WIDTH);
    let inner = width - 2;
    let grid = net.grid();

    let mut rows = Vec::with_capacity(usize::from(grid.rows));
    for row in 0..grid.rows {
        let mut line = String::new();
        for col in 0..grid.cols {
            match net.face_at(row, col) {
                Some(face) => line.push_str(&format!("[{:^inner$}]", face.label)),
                None => line.push_str(&" ".repeat(width)),
            }
        }
        rows.push(line.trim_end().to_string());
    }
    rows.join("\n")
}

/// One line per option, numbered from 1 in presentation order.
pub fn render_options(answers: &AnswerSet) -> String {
    answers
        .iter()
        .enumerate()
        .map(|(i, option)| {
            format!(
                "  {}) front {}  left {}  top {}",
                i + 1,
                option.faces.front(),
                option.faces.left(),
                option.faces.top()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Option number (1-based) of `id`.
fn option_number(answers: &AnswerSet, id: &str) -> Option<usize> {
    answers.iter().position(|o| o.id == id).map(|i| i + 1)
}

/// Header, net drawing and numbered options for one question.
pub fn render_question(question: &Question, cell_width: usize) -> String {
    format!(
        "Question {} ({} net)\n\n{}\n\nWhich cube can this net fold into?\n{}",
        question.number,
        question.net.family(),
        render_net(&question.net, cell_width),
        render_options(&question.answers)
    )
}

/// Verdict line for an answer, naming the correct option number on a miss.
pub fn render_feedback(feedback: &Feedback, answers: &AnswerSet) -> String {
    if feedback.correct {
        return "Correct!".to_string();
    }
    match option_number(answers, &feedback.correct_id) {
        Some(n) => format!("Not quite. The answer was option {n}."),
        None => "Not quite.".to_string(),
    }
}

/// One-line opposite-face hint.
pub fn render_hint(hint: &Hint) -> String {
    format!("Hint: face {} is opposite face {}.", hint.label, hint.opposite)
}

/// Score summary with accuracy as a whole percentage.
pub fn render_stats(stats: &SessionStats) -> String {
    format!(
        "Questions: {}  Answered: {}  Correct: {} ({:.0}%)",
        stats.generated,
        stats.answered,
        stats.correct,
        stats.accuracy() * 100.0
    )
}
