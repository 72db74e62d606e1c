//! Seams between the decision logic and whatever renders the page.
//!
//! Readers take a snapshot of the current input state; sinks receive the
//! computed result and own every visual side effect.

pub mod memory;

use crate::models::domain::{FieldSnapshot, QuizResult, QuizSubmission, ValidationResult};

pub use memory::{MemoryFieldReader, MemoryQuizState, RecordingSink};

#[cfg_attr(test, mockall::automock)]
pub trait FieldReader {
    fn snapshot(&self) -> FieldSnapshot;
}

#[cfg_attr(test, mockall::automock)]
pub trait ValidationSink {
    /// Clears every error slot before a new verdict is shown.
    fn clear_errors(&mut self);

    fn render_validation(&mut self, result: &ValidationResult);
}

#[cfg_attr(test, mockall::automock)]
pub trait QuizStateReader {
    fn submission(&self) -> QuizSubmission;
}

#[cfg_attr(test, mockall::automock)]
pub trait QuizSink {
    /// Removes correct/incorrect decoration from every option.
    fn clear_marks(&mut self);

    fn render_quiz(&mut self, result: &QuizResult);

    /// Applies a blank submission: unchecks every option and empties the summary.
    fn apply_reset(&mut self, blank: &QuizSubmission);
}
