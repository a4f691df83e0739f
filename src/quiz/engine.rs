use std::time::Duration;

use thiserror::Error;
use tokio::time::Instant;
use tracing::{debug, info};

use crate::data::QuestionBank;
use crate::models::Question;

use super::tier::{Thresholds, Tier};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuizError {
    #[error("no questions are tagged for character '{0}'")]
    NoQuestions(String),

    #[error("question {0} has already been answered")]
    AlreadyAnswered(usize),

    #[error("option {option} does not exist, question has {options} options")]
    InvalidOption { option: usize, options: usize },

    #[error("the quiz is already complete")]
    Completed,

    #[error("no quiz is running")]
    NotRunning,

    #[error("no character is selected")]
    NoCharacter,
}

/// Immediate result of a submitted answer, before the reveal delay passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerFeedback {
    pub question_index: usize,
    pub chosen: usize,
    pub correct_answer: usize,
    pub is_correct: bool,
}

/// What happened when a reveal delay ran out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizProgress {
    Advanced(usize),
    Completed { score: usize, total: usize },
}

/// One pass through a character's questions.
#[derive(Debug, Clone)]
pub struct QuizRun {
    character_id: String,
    questions: Vec<Question>,
    current_index: usize,
    score: usize,
    last_answer: Option<usize>,
    completed: bool,
    reveal: Duration,
    advance_at: Option<Instant>,
}

impl QuizRun {
    /// Starts a fresh run over the questions tagged with `character_id`.
    pub fn start(bank: &QuestionBank, character_id: &str, reveal: Duration) -> Result<Self, QuizError> {
        let questions = bank.for_character(character_id);
        if questions.is_empty() {
            return Err(QuizError::NoQuestions(character_id.to_string()));
        }

        info!(character = character_id, total = questions.len(), "quiz started");

        Ok(Self {
            character_id: character_id.to_string(),
            questions,
            current_index: 0,
            score: 0,
            last_answer: None,
            completed: false,
            reveal,
            advance_at: None,
        })
    }

    pub fn character_id(&self) -> &str {
        &self.character_id
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn current_question(&self) -> &Question {
        &self.questions[self.current_index]
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_question_number(&self) -> usize {
        self.current_index + 1
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn last_answer(&self) -> Option<usize> {
        self.last_answer
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.advance_at
    }

    /// Scores an answer for the current question and schedules the advance.
    ///
    /// Only one answer per question is accepted.
    pub fn submit_answer(&mut self, option: usize, now: Instant) -> Result<AnswerFeedback, QuizError> {
        if self.completed {
            return Err(QuizError::Completed);
        }
        if self.last_answer.is_some() {
            return Err(QuizError::AlreadyAnswered(self.current_index));
        }

        let question = &self.questions[self.current_index];
        if option >= question.options.len() {
            return Err(QuizError::InvalidOption {
                option,
                options: question.options.len(),
            });
        }

        let is_correct = question.is_correct(option);
        let correct_answer = question.correct_answer;
        if is_correct {
            self.score += 1;
        }

        self.last_answer = Some(option);
        self.advance_at = Some(now + self.reveal);

        debug!(
            character = %self.character_id,
            question = self.current_index,
            option,
            is_correct,
            "answer submitted"
        );

        Ok(AnswerFeedback {
            question_index: self.current_index,
            chosen: option,
            correct_answer,
            is_correct,
        })
    }

    /// Applies the pending advance once its reveal delay has elapsed.
    pub fn tick(&mut self, now: Instant) -> Option<QuizProgress> {
        match self.advance_at {
            Some(deadline) if now >= deadline => self.advance(),
            _ => None,
        }
    }

    /// Applies the pending advance immediately, skipping the reveal delay.
    pub fn advance(&mut self) -> Option<QuizProgress> {
        self.advance_at.take()?;

        if self.current_index + 1 < self.questions.len() {
            self.current_index += 1;
            self.last_answer = None;
            Some(QuizProgress::Advanced(self.current_index))
        } else {
            self.completed = true;
            info!(
                character = %self.character_id,
                score = self.score,
                total = self.questions.len(),
                "quiz completed"
            );
            Some(QuizProgress::Completed {
                score: self.score,
                total: self.questions.len(),
            })
        }
    }

    /// Back to the first question with a zero score. Any pending advance is
    /// dropped.
    pub fn reset(&mut self) {
        self.current_index = 0;
        self.score = 0;
        self.last_answer = None;
        self.completed = false;
        self.advance_at = None;
    }

    pub fn tier(&self, thresholds: &Thresholds) -> Option<Tier> {
        self.completed
            .then(|| thresholds.classify(self.score, self.questions.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REVEAL: Duration = Duration::from_millis(2000);

    fn bank() -> QuestionBank {
        let questions = (0..5)
            .map(|i| Question {
                character: "farmer".to_string(),
                text: format!("question {}", i),
                options: vec!["a".into(), "b".into(), "c".into(), "d".into()],
                correct_answer: 1,
                explanation: None,
            })
            .collect();
        QuestionBank::new(questions)
    }

    /// Answers every question, `correct` of them correctly, letting each
    /// reveal delay run out.
    fn play(run: &mut QuizRun, correct: usize, start: Instant) -> Instant {
        let mut now = start;
        for i in 0..run.total() {
            let option = if i < correct { 1 } else { 0 };
            run.submit_answer(option, now).unwrap();
            now += REVEAL;
            run.tick(now);
        }
        now
    }

    #[test]
    fn test_start_without_questions_is_error() {
        let err = QuizRun::start(&bank(), "pilot", REVEAL).unwrap_err();
        assert_eq!(err, QuizError::NoQuestions("pilot".to_string()));
    }

    #[test]
    fn test_answer_is_visible_before_advance() {
        let mut run = QuizRun::start(&bank(), "farmer", REVEAL).unwrap();
        let now = Instant::now();

        let feedback = run.submit_answer(1, now).unwrap();
        assert!(feedback.is_correct);
        assert_eq!(run.score(), 1);
        assert_eq!(run.last_answer(), Some(1));
        assert_eq!(run.current_index(), 0);

        assert_eq!(run.tick(now + Duration::from_millis(1999)), None);
        assert_eq!(run.current_index(), 0);

        assert_eq!(run.tick(now + REVEAL), Some(QuizProgress::Advanced(1)));
        assert_eq!(run.current_index(), 1);
        assert_eq!(run.last_answer(), None);
    }

    #[test]
    fn test_double_submit_is_rejected() {
        let mut run = QuizRun::start(&bank(), "farmer", REVEAL).unwrap();
        let now = Instant::now();

        run.submit_answer(1, now).unwrap();
        assert_eq!(run.submit_answer(1, now), Err(QuizError::AlreadyAnswered(0)));
        assert_eq!(run.score(), 1);
    }

    #[test]
    fn test_invalid_option_is_rejected() {
        let mut run = QuizRun::start(&bank(), "farmer", REVEAL).unwrap();
        assert_eq!(
            run.submit_answer(4, Instant::now()),
            Err(QuizError::InvalidOption {
                option: 4,
                options: 4
            })
        );
        assert_eq!(run.last_answer(), None);
    }

    #[test]
    fn test_score_and_index_are_monotonic() {
        let mut run = QuizRun::start(&bank(), "farmer", REVEAL).unwrap();
        let mut now = Instant::now();
        let mut last_score = 0;

        for i in 0..5 {
            assert_eq!(run.current_index(), i);
            run.submit_answer(if i % 2 == 0 { 1 } else { 2 }, now).unwrap();
            assert!(run.score() >= last_score);
            last_score = run.score();
            now += REVEAL;
            run.tick(now);
        }

        assert!(run.is_completed());
        assert_eq!(run.current_index(), 4);
        assert_eq!(run.score(), 3);

        assert_eq!(run.tick(now + REVEAL), None);
        assert_eq!(run.current_index(), 4);
        assert_eq!(run.submit_answer(1, now), Err(QuizError::Completed));
    }

    #[test]
    fn test_tiers_from_played_runs() {
        let thresholds = Thresholds::default();

        for (correct, tier) in [(4, Tier::Excellent), (3, Tier::Good), (2, Tier::NeedsReview)] {
            let mut run = QuizRun::start(&bank(), "farmer", REVEAL).unwrap();
            assert_eq!(run.tier(&thresholds), None);
            play(&mut run, correct, Instant::now());
            assert_eq!(run.score(), correct);
            assert_eq!(run.tier(&thresholds), Some(tier));
        }
    }

    #[test]
    fn test_reset_restores_zero_state() {
        let mut run = QuizRun::start(&bank(), "farmer", REVEAL).unwrap();
        let now = play(&mut run, 5, Instant::now());
        assert!(run.is_completed());

        run.reset();
        assert_eq!(run.score(), 0);
        assert_eq!(run.current_index(), 0);
        assert!(!run.is_completed());
        assert_eq!(run.last_answer(), None);
        assert_eq!(run.total(), 5);

        run.submit_answer(0, now).unwrap();
        run.reset();
        assert_eq!(run.next_deadline(), None);
        assert_eq!(run.tick(now + REVEAL), None);
    }

    #[test]
    fn test_advance_skips_the_delay() {
        let mut run = QuizRun::start(&bank(), "farmer", REVEAL).unwrap();
        assert_eq!(run.advance(), None);

        run.submit_answer(1, Instant::now()).unwrap();
        assert_eq!(run.advance(), Some(QuizProgress::Advanced(1)));
    }
}
