//! Wires the page features to their events.
//!
//! Each feature is initialised on its own: a feature whose anchors are absent
//! registers no handler, and the remaining features are unaffected.

use std::collections::HashMap;

use crate::config::Config;
use crate::handlers::{Quiz, RebelForm, SubmitDecision};
use crate::models::domain::{QuizQuestion, QuizResult, QuizSubmission};
use crate::presentation::{FieldReader, QuizSink, QuizStateReader, ValidationSink};
use crate::services::form_validator::FormValidator;

pub const REBEL_FORM_ID: &str = "rebelForm";
pub const QUIZ_FORM_ID: &str = "quizForm";
pub const QUIZ_RESET_ID: &str = "quizReset";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageEvent {
    FormSubmit,
    QuizSubmit,
    QuizReset,
}

impl PageEvent {
    /// Maps a DOM event on an anchor element to a page event.
    pub fn from_dom(anchor_id: &str, event_name: &str) -> Option<Self> {
        match (anchor_id, event_name) {
            (REBEL_FORM_ID, "submit") => Some(PageEvent::FormSubmit),
            (QUIZ_FORM_ID, "submit") => Some(PageEvent::QuizSubmit),
            (QUIZ_RESET_ID, "click") => Some(PageEvent::QuizReset),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventOutcome {
    Form(SubmitDecision),
    QuizGraded(QuizResult),
    QuizReset(QuizSubmission),
}

pub struct FormAnchors {
    pub reader: Box<dyn FieldReader>,
    pub sink: Box<dyn ValidationSink>,
}

pub struct QuizAnchors {
    pub questions: Vec<QuizQuestion>,
    pub reader: Box<dyn QuizStateReader>,
    pub sink: Box<dyn QuizSink>,
    pub has_reset_button: bool,
}

/// The parts of the page that were found at load time.
#[derive(Default)]
pub struct PageAnchors {
    pub form: Option<FormAnchors>,
    pub quiz: Option<QuizAnchors>,
}

pub type Handler = fn(&mut Page) -> Option<EventOutcome>;

pub struct Page {
    form: Option<RebelForm>,
    quiz: Option<Quiz>,
    handlers: HashMap<PageEvent, Handler>,
}

impl Page {
    pub fn init(config: &Config, anchors: PageAnchors) -> Self {
        let mut page = Page {
            form: None,
            quiz: None,
            handlers: HashMap::new(),
        };

        match anchors.form {
            Some(form) => {
                page.form = Some(RebelForm::new(
                    FormValidator::new(config),
                    form.reader,
                    form.sink,
                ));
                page.register(PageEvent::FormSubmit, handle_form_submit);
            }
            None => log::debug!("#{} not found; registration form disabled", REBEL_FORM_ID),
        }

        match anchors.quiz {
            Some(quiz) => {
                let has_reset_button = quiz.has_reset_button;
                page.quiz = Some(Quiz::new(quiz.questions, quiz.reader, quiz.sink));
                page.register(PageEvent::QuizSubmit, handle_quiz_submit);
                if has_reset_button {
                    page.register(PageEvent::QuizReset, handle_quiz_reset);
                }
            }
            None => log::debug!("#{} not found; quiz disabled", QUIZ_FORM_ID),
        }

        page
    }

    pub fn register(&mut self, event: PageEvent, handler: Handler) {
        self.handlers.insert(event, handler);
    }

    pub fn handles(&self, event: PageEvent) -> bool {
        self.handlers.contains_key(&event)
    }

    /// Runs the handler for `event`; `None` when nothing is registered.
    pub fn dispatch(&mut self, event: PageEvent) -> Option<EventOutcome> {
        let handler = *self.handlers.get(&event)?;
        handler(self)
    }

    pub fn dispatch_dom(&mut self, anchor_id: &str, event_name: &str) -> Option<EventOutcome> {
        self.dispatch(PageEvent::from_dom(anchor_id, event_name)?)
    }
}

fn handle_form_submit(page: &mut Page) -> Option<EventOutcome> {
    page.form
        .as_mut()
        .map(|form| EventOutcome::Form(form.on_submit()))
}

fn handle_quiz_submit(page: &mut Page) -> Option<EventOutcome> {
    page.quiz
        .as_mut()
        .map(|quiz| EventOutcome::QuizGraded(quiz.on_submit()))
}

fn handle_quiz_reset(page: &mut Page) -> Option<EventOutcome> {
    page.quiz
        .as_mut()
        .map(|quiz| EventOutcome::QuizReset(quiz.on_reset()))
}
