mod bank;
mod loader;

pub use bank::QuestionBank;
pub use loader::{
    LoadError, default_questions, default_roster, load_questions_from_json, parse_questions,
    parse_roster, validate_bank,
};
