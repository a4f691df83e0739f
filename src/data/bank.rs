use crate::models::Question;

/// The full set of quiz questions, each tagged with a character id.
#[derive(Debug, Clone, Default)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Questions for one character, in bank order.
    pub fn for_character(&self, character_id: &str) -> Vec<Question> {
        self.questions
            .iter()
            .filter(|q| q.character == character_id)
            .cloned()
            .collect()
    }
}
