use chrono::NaiveDate;
use serde::Serialize;

use crate::models::domain::ValidationResult;
use crate::presentation::{FieldReader, ValidationSink};
use crate::services::form_validator::FormValidator;

/// Whether the browser's own form submission may go ahead.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum SubmitDecision {
    Proceed,
    Suppress,
}

impl From<&ValidationResult> for SubmitDecision {
    fn from(result: &ValidationResult) -> Self {
        if result.overall_valid {
            SubmitDecision::Proceed
        } else {
            SubmitDecision::Suppress
        }
    }
}

/// The registration form feature: reads the inputs, validates, renders.
pub struct RebelForm {
    validator: FormValidator,
    reader: Box<dyn FieldReader>,
    sink: Box<dyn ValidationSink>,
}

impl RebelForm {
    pub fn new(
        validator: FormValidator,
        reader: Box<dyn FieldReader>,
        sink: Box<dyn ValidationSink>,
    ) -> Self {
        Self {
            validator,
            reader,
            sink,
        }
    }

    pub fn on_submit(&mut self) -> SubmitDecision {
        let snapshot = self.reader.snapshot();
        let result = self.validator.validate(&snapshot);
        self.render(result)
    }

    pub fn on_submit_as_of(&mut self, today: NaiveDate) -> SubmitDecision {
        let snapshot = self.reader.snapshot();
        let result = self.validator.validate_as_of(&snapshot, today);
        self.render(result)
    }

    fn render(&mut self, result: ValidationResult) -> SubmitDecision {
        self.sink.clear_errors();
        self.sink.render_validation(&result);

        let decision = SubmitDecision::from(&result);
        log::info!(
            "registration form submit: {:?} ({} field errors)",
            decision,
            result.errors.len()
        );
        decision
    }
}
