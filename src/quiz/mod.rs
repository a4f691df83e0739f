//! Character quizzes: a single scored pass over one profession's questions.

mod engine;
mod tier;

pub use engine::{AnswerFeedback, QuizError, QuizProgress, QuizRun};
pub use tier::{Thresholds, Tier};
