use crate::models::domain::{QuizQuestion, QuizResult, QuizSubmission};
use crate::presentation::{QuizSink, QuizStateReader};
use crate::services::quiz_grader::QuizGrader;

/// The quiz feature: grades on submit and clears everything on reset.
pub struct Quiz {
    questions: Vec<QuizQuestion>,
    reader: Box<dyn QuizStateReader>,
    sink: Box<dyn QuizSink>,
}

impl Quiz {
    pub fn new(
        questions: Vec<QuizQuestion>,
        reader: Box<dyn QuizStateReader>,
        sink: Box<dyn QuizSink>,
    ) -> Self {
        Self {
            questions,
            reader,
            sink,
        }
    }

    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    pub fn on_submit(&mut self) -> QuizResult {
        let submission = self.reader.submission();
        let result = QuizGrader::grade(&self.questions, &submission);

        // Marks from a previous submit never survive into this one.
        self.sink.clear_marks();
        self.sink.render_quiz(&result);
        result
    }

    pub fn on_reset(&mut self) -> QuizSubmission {
        let blank = QuizGrader::reset(&self.questions);
        self.sink.apply_reset(&blank);
        log::debug!("quiz reset ({} questions)", self.questions.len());
        blank
    }
}
