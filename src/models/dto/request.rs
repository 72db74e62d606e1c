use chrono::NaiveDate;
use serde::Deserialize;
use validator::{Validate, ValidationErrors};

use crate::errors::AppResult;
use crate::models::domain::{FieldName, FieldSnapshot, FieldValue, QuizQuestion, QuizSubmission};
use crate::services::form_validator::FormValidator;
use crate::services::quiz_grader::QuizGrader;

/// The registration form as posted by the page, one key per input.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RebelFormRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub birthdate: Option<String>,
    pub faction: Option<String>,
    pub experience: Option<String>,
    pub message: String,
    pub terms: bool,
}

impl RebelFormRequest {
    pub fn to_snapshot(&self) -> FieldSnapshot {
        FieldSnapshot::new()
            .with(FieldName::Name, FieldValue::Text(self.name.clone()))
            .with(FieldName::Email, FieldValue::Email(self.email.clone()))
            .with(FieldName::Password, FieldValue::Password(self.password.clone()))
            .with(
                FieldName::Birthdate,
                FieldValue::Date(self.birthdate.clone().unwrap_or_default()),
            )
            .with(FieldName::Faction, FieldValue::Select(non_empty(&self.faction)))
            .with(FieldName::Experience, FieldValue::Radio(non_empty(&self.experience)))
            .with(FieldName::Message, FieldValue::Text(self.message.clone()))
            .with(FieldName::Terms, FieldValue::Checkbox(self.terms))
    }

    pub fn validate_as_of(
        &self,
        validator: &FormValidator,
        today: NaiveDate,
    ) -> Result<(), ValidationErrors> {
        let result = validator.validate_as_of(&self.to_snapshot(), today);
        if result.overall_valid {
            Ok(())
        } else {
            Err(result.to_validation_errors())
        }
    }
}

impl Validate for RebelFormRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let result = FormValidator::default().validate(&self.to_snapshot());
        if result.overall_valid {
            Ok(())
        } else {
            Err(result.to_validation_errors())
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|v| !v.is_empty()).cloned()
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct QuizAnswerInput {
    #[validate(length(min = 1))]
    pub question_id: String,

    #[validate(length(min = 1))]
    pub option_id: String,
}

/// Quiz selections as posted by the page; unanswered questions are omitted.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuizSubmitRequest {
    #[serde(default)]
    pub answers: Vec<QuizAnswerInput>,
}

impl QuizSubmitRequest {
    pub fn into_submission(self, questions: &[QuizQuestion]) -> AppResult<QuizSubmission> {
        let mut submission = QuizGrader::reset(questions);
        for answer in self.answers {
            answer.validate()?;
            submission.select(&answer.question_id, &answer.option_id)?;
        }
        Ok(submission)
    }
}
