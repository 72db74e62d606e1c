use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};
use crate::models::domain::quiz_question::QuizQuestion;

/// The quiz embedded in the page: an ordered list of questions.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuizBank {
    pub questions: Vec<QuizQuestion>,
}

impl QuizBank {
    pub fn new(questions: Vec<QuizQuestion>) -> AppResult<Self> {
        let bank = QuizBank { questions };
        bank.check_ids()?;
        Ok(bank)
    }

    /// Parses page data of the form `{"questions": [...]}`.
    pub fn from_json(json: &str) -> AppResult<Self> {
        let bank: QuizBank = serde_json::from_str(json)?;
        bank.check_ids()?;
        log::debug!("loaded quiz bank with {} questions", bank.questions.len());
        Ok(bank)
    }

    pub fn question(&self, id: &str) -> Option<&QuizQuestion> {
        self.questions.iter().find(|q| q.id == id)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    // Radio groups are keyed by question id, so ids must be unique.
    fn check_ids(&self) -> AppResult<()> {
        let mut seen = HashSet::new();
        for question in &self.questions {
            if !seen.insert(question.id.as_str()) {
                return Err(AppError::InvalidInput(format!(
                    "duplicate quiz question id '{}'",
                    question.id
                )));
            }
            let mut option_ids = HashSet::new();
            for option in &question.options {
                if !option_ids.insert(option.id.as_str()) {
                    return Err(AppError::InvalidInput(format!(
                        "duplicate option id '{}' in question '{}'",
                        option.id, question.id
                    )));
                }
            }
        }
        Ok(())
    }
}
