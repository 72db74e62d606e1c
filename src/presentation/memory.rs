use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use crate::constants::messages::Locale;
use crate::errors::AppResult;
use crate::models::domain::{
    Classification, FieldName, FieldSnapshot, FieldValue, QuizQuestion, QuizResult,
    QuizSubmission, ValidationResult,
};
use crate::presentation::{FieldReader, QuizSink, QuizStateReader, ValidationSink};

/// Form inputs held in memory. Clones share the same state, so a test can
/// keep a handle and type into the form after handing it to a controller.
#[derive(Clone, Debug, Default)]
pub struct MemoryFieldReader {
    state: Rc<RefCell<FieldSnapshot>>,
}

impl MemoryFieldReader {
    pub fn new(snapshot: FieldSnapshot) -> Self {
        Self {
            state: Rc::new(RefCell::new(snapshot)),
        }
    }

    pub fn set(&self, field: FieldName, value: FieldValue) {
        self.state.borrow_mut().set(field, value);
    }
}

impl FieldReader for MemoryFieldReader {
    fn snapshot(&self) -> FieldSnapshot {
        self.state.borrow().clone()
    }
}

/// Radio-group state of the quiz form, shared between clones.
#[derive(Clone, Debug, Default)]
pub struct MemoryQuizState {
    state: Rc<RefCell<QuizSubmission>>,
}

impl MemoryQuizState {
    pub fn new(questions: &[QuizQuestion]) -> Self {
        Self {
            state: Rc::new(RefCell::new(QuizSubmission::blank(questions))),
        }
    }

    pub fn check(&self, question_id: &str, option_id: &str) -> AppResult<()> {
        self.state.borrow_mut().select(question_id, option_id)
    }

    pub fn replace(&self, submission: QuizSubmission) {
        *self.state.borrow_mut() = submission;
    }
}

impl QuizStateReader for MemoryQuizState {
    fn submission(&self) -> QuizSubmission {
        self.state.borrow().clone()
    }
}

/// What a rendered page would currently show.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderedPage {
    pub error_slots: BTreeMap<FieldName, String>,
    /// Decoration of checked options, keyed by `(question id, option id)`.
    pub option_marks: BTreeMap<(String, String), Classification>,
    pub quiz_summary: String,
    pub renders: usize,
}

impl RenderedPage {
    pub fn mark(&self, question_id: &str, option_id: &str) -> Option<Classification> {
        self.option_marks
            .get(&(question_id.to_string(), option_id.to_string()))
            .copied()
    }
}

/// A sink that records the visible outcome instead of touching a document.
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    locale: Locale,
    page: Rc<RefCell<RenderedPage>>,
    quiz_state: Option<MemoryQuizState>,
}

impl RecordingSink {
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            ..Self::default()
        }
    }

    /// Lets `apply_reset` uncheck the radios held by `state`.
    pub fn with_quiz_state(mut self, state: MemoryQuizState) -> Self {
        self.quiz_state = Some(state);
        self
    }

    pub fn rendered(&self) -> RenderedPage {
        self.page.borrow().clone()
    }
}

impl ValidationSink for RecordingSink {
    fn clear_errors(&mut self) {
        self.page.borrow_mut().error_slots.clear();
    }

    fn render_validation(&mut self, result: &ValidationResult) {
        let mut page = self.page.borrow_mut();
        page.error_slots = result.errors.clone();
        page.renders += 1;
    }
}

impl QuizSink for RecordingSink {
    fn clear_marks(&mut self) {
        self.page.borrow_mut().option_marks.clear();
    }

    fn render_quiz(&mut self, result: &QuizResult) {
        let mut page = self.page.borrow_mut();
        for outcome in &result.per_question {
            // Only the checked option is decorated.
            if let Some(option_id) = &outcome.selected_option_id {
                page.option_marks.insert(
                    (outcome.question_id.clone(), option_id.clone()),
                    outcome.classification,
                );
            }
        }
        page.quiz_summary = result.summary(self.locale);
        page.renders += 1;
    }

    fn apply_reset(&mut self, blank: &QuizSubmission) {
        if let Some(state) = &self.quiz_state {
            state.replace(blank.clone());
        }
        let mut page = self.page.borrow_mut();
        page.option_marks.clear();
        page.quiz_summary.clear();
    }
}
