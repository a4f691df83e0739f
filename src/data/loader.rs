use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::models::{Character, Question};

const DEFAULT_QUESTIONS: &str = include_str!("../../assets/questions.json");
const DEFAULT_ROSTER: &str = include_str!("../../assets/characters.json");

/// Errors raised while reading questions or characters.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("{0} must contain at least one entry")]
    Empty(String),

    #[error("question {index} has correct answer {correct} but only {options} options")]
    AnswerOutOfRange {
        index: usize,
        correct: usize,
        options: usize,
    },

    #[error("question {index} is tagged '{character}', which is not in the roster")]
    UnknownCharacter { index: usize, character: String },

    #[error("character '{0}' has no questions")]
    MissingQuestions(String),
}

/// The question bank shipped with the binary.
pub fn default_questions() -> Result<Vec<Question>, LoadError> {
    parse_questions(DEFAULT_QUESTIONS, "built-in question bank")
}

/// The professions shipped with the binary.
pub fn default_roster() -> Result<Vec<Character>, LoadError> {
    parse_roster(DEFAULT_ROSTER, "built-in character roster")
}

pub fn load_questions_from_json<P: AsRef<Path>>(path: P) -> Result<Vec<Question>, LoadError> {
    let path = path.as_ref();

    let json_content = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let questions = parse_questions(&json_content, &path.display().to_string())?;
    debug!(path = %path.display(), count = questions.len(), "loaded question bank");
    Ok(questions)
}

pub fn parse_questions(json: &str, origin: &str) -> Result<Vec<Question>, LoadError> {
    let questions: Vec<Question> =
        serde_json::from_str(json).map_err(|source| LoadError::Parse {
            origin: origin.to_string(),
            source,
        })?;

    if questions.is_empty() {
        return Err(LoadError::Empty(origin.to_string()));
    }

    if let Some((index, question)) = questions
        .iter()
        .enumerate()
        .find(|(_, q)| q.correct_answer >= q.options.len())
    {
        return Err(LoadError::AnswerOutOfRange {
            index,
            correct: question.correct_answer,
            options: question.options.len(),
        });
    }

    Ok(questions)
}

pub fn parse_roster(json: &str, origin: &str) -> Result<Vec<Character>, LoadError> {
    let roster: Vec<Character> = serde_json::from_str(json).map_err(|source| LoadError::Parse {
        origin: origin.to_string(),
        source,
    })?;

    if roster.is_empty() {
        return Err(LoadError::Empty(origin.to_string()));
    }

    Ok(roster)
}

/// Checks that every question belongs to a roster character and every
/// character has at least one question.
pub fn validate_bank(questions: &[Question], roster: &[Character]) -> Result<(), LoadError> {
    if let Some((index, question)) = questions
        .iter()
        .enumerate()
        .find(|(_, q)| !roster.iter().any(|c| c.id == q.character))
    {
        return Err(LoadError::UnknownCharacter {
            index,
            character: question.character.clone(),
        });
    }

    if let Some(character) = roster
        .iter()
        .find(|c| !questions.iter().any(|q| q.character == c.id))
    {
        return Err(LoadError::MissingQuestions(character.id.clone()));
    }

    Ok(())
}
