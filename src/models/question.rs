use serde::Deserialize;

/// A single quiz question, tagged with the profession it belongs to.
#[derive(Debug, Clone, Deserialize)]
pub struct Question {
    pub character: String,
    pub text: String,
    pub options: Vec<String>,
    pub correct_answer: usize,
    #[serde(default)]
    pub explanation: Option<String>,
}

impl Question {
    pub fn is_correct(&self, option: usize) -> bool {
        option == self.correct_answer
    }
}
