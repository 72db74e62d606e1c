use serde::{Deserialize, Serialize};

use crate::constants::messages::{self, Locale};
use crate::errors::{AppError, AppResult};
use crate::models::domain::QuizQuestion;

/// The user's current selections, one slot per question in page order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuizSubmission {
    selections: Vec<(String, Option<String>)>,
}

impl QuizSubmission {
    /// A submission with every question of `questions` unanswered.
    pub fn blank(questions: &[QuizQuestion]) -> Self {
        QuizSubmission {
            selections: questions.iter().map(|q| (q.id.clone(), None)).collect(),
        }
    }

    /// Selects `option_id` for `question_id`, replacing any earlier choice.
    pub fn select(&mut self, question_id: &str, option_id: &str) -> AppResult<()> {
        let slot = self
            .selections
            .iter_mut()
            .find(|(id, _)| id == question_id)
            .ok_or_else(|| AppError::NotFound(format!("quiz question '{}'", question_id)))?;
        slot.1 = Some(option_id.to_string());
        Ok(())
    }

    pub fn clear(&mut self, question_id: &str) {
        if let Some(slot) = self.selections.iter_mut().find(|(id, _)| id == question_id) {
            slot.1 = None;
        }
    }

    pub fn selected(&self, question_id: &str) -> Option<&str> {
        self.selections
            .iter()
            .find(|(id, _)| id == question_id)
            .and_then(|(_, selected)| selected.as_deref())
    }

    pub fn answered_count(&self) -> usize {
        self.selections.iter().filter(|(_, s)| s.is_some()).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.selections
            .iter()
            .map(|(id, selected)| (id.as_str(), selected.as_deref()))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    Unanswered,
    Correct,
    Incorrect,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuestionOutcome {
    pub question_id: String,
    pub selected_option_id: Option<String>,
    pub classification: Classification,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuizResult {
    pub per_question: Vec<QuestionOutcome>,
    pub correct_count: usize,
    pub total_count: usize,
}

impl QuizResult {
    pub fn classification(&self, question_id: &str) -> Option<Classification> {
        self.per_question
            .iter()
            .find(|o| o.question_id == question_id)
            .map(|o| o.classification)
    }

    pub fn count(&self, classification: Classification) -> usize {
        self.per_question
            .iter()
            .filter(|o| o.classification == classification)
            .count()
    }

    pub fn summary(&self, locale: Locale) -> String {
        messages::quiz_summary(self.correct_count, self.total_count, locale)
    }
}
