#[cfg(test)]
pub mod fixtures {
    use chrono::NaiveDate;

    use crate::models::domain::{FieldName, FieldSnapshot, FieldValue, QuizOption, QuizQuestion};

    /// A fixed "today" so date rules are deterministic.
    pub fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 4).expect("fixture date is valid")
    }

    /// A snapshot that passes every rule.
    pub fn valid_snapshot() -> FieldSnapshot {
        FieldSnapshot::new()
            .with(FieldName::Name, FieldValue::Text("Leia".into()))
            .with(FieldName::Email, FieldValue::Email("leia@rebellion.org".into()))
            .with(FieldName::Password, FieldValue::Password("alderaan".into()))
            .with(FieldName::Birthdate, FieldValue::Date("1977-05-25".into()))
            .with(FieldName::Faction, FieldValue::Select(Some("rebellion".into())))
            .with(FieldName::Experience, FieldValue::Radio(Some("veteran".into())))
            .with(
                FieldName::Message,
                FieldValue::Text("Help me, Obi-Wan Kenobi.".into()),
            )
            .with(FieldName::Terms, FieldValue::Checkbox(true))
    }

    /// Three questions, each with exactly one correct option.
    pub fn quiz_questions() -> Vec<QuizQuestion> {
        vec![
            QuizQuestion::new(
                "q1",
                "Who is Luke's father?",
                vec![
                    QuizOption::new("q1-a", "Obi-Wan Kenobi", false),
                    QuizOption::new("q1-b", "Anakin Skywalker", true),
                ],
            ),
            QuizQuestion::new(
                "q2",
                "What is the name of Han Solo's ship?",
                vec![
                    QuizOption::new("q2-a", "Millennium Falcon", true),
                    QuizOption::new("q2-b", "Slave I", false),
                    QuizOption::new("q2-c", "Ghost", false),
                ],
            ),
            QuizQuestion::new(
                "q3",
                "Which planet is Rey from?",
                vec![
                    QuizOption::new("q3-a", "Tatooine", false),
                    QuizOption::new("q3-b", "Jakku", true),
                ],
            ),
        ]
    }
}

#[cfg(test)]
pub mod test_helpers {
    use crate::models::domain::{FieldName, ValidationResult};

    /// Asserts that exactly `fields` failed, and that each failure has a message.
    pub fn assert_failed_fields(result: &ValidationResult, fields: &[FieldName]) {
        let failed: Vec<FieldName> = result.errors.keys().copied().collect();
        let mut expected = fields.to_vec();
        expected.sort();
        assert_eq!(failed, expected, "unexpected failing fields");
        assert_eq!(result.overall_valid, fields.is_empty());
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::test_helpers::*;
    use crate::models::domain::FieldName;
    use crate::services::form_validator::FormValidator;

    #[test]
    fn test_fixtures_valid_snapshot_has_every_field() {
        let snapshot = valid_snapshot();
        assert_eq!(snapshot.len(), FieldName::ALL.len());
    }

    #[test]
    fn test_fixtures_quiz_questions_have_one_correct_option() {
        for question in quiz_questions() {
            assert_eq!(question.correct_option_ids().count(), 1, "{}", question.id);
        }
    }

    #[test]
    fn test_assert_failed_fields_accepts_valid_result() {
        let result = FormValidator::default().validate_as_of(&valid_snapshot(), today());
        assert_failed_fields(&result, &[]);
    }
}
