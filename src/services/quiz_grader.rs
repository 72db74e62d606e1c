use crate::models::domain::{
    Classification, QuestionOutcome, QuizQuestion, QuizResult, QuizSubmission,
};

pub struct QuizGrader;

impl QuizGrader {
    /// Grade a submission against the page's questions, in question order.
    ///
    /// `total_count` is the number of questions, answered or not. Entries in
    /// the submission for questions not in `questions` are ignored.
    pub fn grade(questions: &[QuizQuestion], submission: &QuizSubmission) -> QuizResult {
        let per_question: Vec<QuestionOutcome> = questions
            .iter()
            .map(|question| {
                let selected = submission.selected(&question.id);
                QuestionOutcome {
                    question_id: question.id.clone(),
                    selected_option_id: selected.map(str::to_string),
                    classification: Self::classify(question, selected),
                }
            })
            .collect();

        let correct_count = per_question
            .iter()
            .filter(|o| o.classification == Classification::Correct)
            .count();

        log::info!(
            "quiz graded: {} / {} correct",
            correct_count,
            questions.len()
        );

        QuizResult {
            per_question,
            correct_count,
            total_count: questions.len(),
        }
    }

    /// A fresh submission with nothing selected.
    pub fn reset(questions: &[QuizQuestion]) -> QuizSubmission {
        QuizSubmission::blank(questions)
    }

    /// Single-select grading: the chosen option decides, whatever else is
    /// tagged correct on the question.
    fn classify(question: &QuizQuestion, selected: Option<&str>) -> Classification {
        let Some(option_id) = selected else {
            return Classification::Unanswered;
        };

        match question.option(option_id) {
            Some(option) if option.correct => Classification::Correct,
            Some(_) => Classification::Incorrect,
            None => {
                log::warn!(
                    "question '{}' has no option '{}'; counting as incorrect",
                    question.id,
                    option_id
                );
                Classification::Incorrect
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::domain::QuizOption;
    use crate::test_utils::fixtures::quiz_questions;

    fn answer_all(questions: &[QuizQuestion], pick_correct: bool) -> QuizSubmission {
        let mut submission = QuizGrader::reset(questions);
        for question in questions {
            let option = question
                .options
                .iter()
                .find(|o| o.correct == pick_correct)
                .expect("fixture has both kinds of option");
            submission.select(&question.id, &option.id).unwrap();
        }
        submission
    }

    #[test]
    fn unanswered_quiz_scores_zero() {
        let questions = quiz_questions();
        let result = QuizGrader::grade(&questions, &QuizGrader::reset(&questions));

        assert_eq!(result.correct_count, 0);
        assert_eq!(result.total_count, questions.len());
        assert!(result
            .per_question
            .iter()
            .all(|o| o.classification == Classification::Unanswered));
    }

    #[test]
    fn all_correct_scores_total() {
        let questions = quiz_questions();
        let result = QuizGrader::grade(&questions, &answer_all(&questions, true));

        assert_eq!(result.correct_count, result.total_count);
        assert_eq!(result.count(Classification::Correct), questions.len());
    }

    #[test]
    fn all_wrong_scores_zero_but_marks_incorrect() {
        let questions = quiz_questions();
        let result = QuizGrader::grade(&questions, &answer_all(&questions, false));

        assert_eq!(result.correct_count, 0);
        assert_eq!(result.count(Classification::Incorrect), questions.len());
        assert_eq!(result.count(Classification::Unanswered), 0);
    }

    #[test]
    fn mixed_submission_keeps_question_order() {
        let questions = quiz_questions();
        let mut submission = QuizGrader::reset(&questions);
        submission.select("q1", "q1-b").unwrap();
        submission.select("q3", "q3-a").unwrap();

        let result = QuizGrader::grade(&questions, &submission);

        let ids: Vec<&str> = result.per_question.iter().map(|o| o.question_id.as_str()).collect();
        assert_eq!(ids, vec!["q1", "q2", "q3"]);
        assert_eq!(result.classification("q1"), Some(Classification::Correct));
        assert_eq!(result.classification("q2"), Some(Classification::Unanswered));
        assert_eq!(result.classification("q3"), Some(Classification::Incorrect));
        assert_eq!(result.correct_count, 1);
        assert_eq!(result.total_count, 3);
    }

    #[test]
    fn unknown_option_is_incorrect() {
        let questions = quiz_questions();
        let mut submission = QuizGrader::reset(&questions);
        submission.select("q2", "q2-z").unwrap();

        let result = QuizGrader::grade(&questions, &submission);
        assert_eq!(result.classification("q2"), Some(Classification::Incorrect));
    }

    #[test]
    fn submission_for_other_questions_is_ignored() {
        let other = vec![QuizQuestion::new(
            "elsewhere",
            "",
            vec![QuizOption::new("x", "", true)],
        )];
        let mut submission = QuizGrader::reset(&other);
        submission.select("elsewhere", "x").unwrap();

        let questions = quiz_questions();
        let result = QuizGrader::grade(&questions, &submission);

        assert_eq!(result.correct_count, 0);
        assert_eq!(result.per_question.len(), questions.len());
    }

    #[test]
    fn any_correct_tagged_option_counts() {
        let questions = vec![QuizQuestion::new(
            "q",
            "",
            vec![QuizOption::new("a", "", true), QuizOption::new("b", "", true)],
        )];
        let mut submission = QuizGrader::reset(&questions);
        submission.select("q", "b").unwrap();

        assert_eq!(QuizGrader::grade(&questions, &submission).correct_count, 1);
    }

    #[test]
    fn reset_then_grade_is_idempotent() {
        let questions = quiz_questions();
        let first = QuizGrader::grade(&questions, &QuizGrader::reset(&questions));
        let second = QuizGrader::grade(&questions, &QuizGrader::reset(&questions));

        assert_eq!(first, second);
    }

    #[test]
    fn empty_quiz_grades_to_zero_of_zero() {
        let result = QuizGrader::grade(&[], &QuizSubmission::default());
        assert_eq!(result.correct_count, 0);
        assert_eq!(result.total_count, 0);
    }
}
