pub mod form_validator;
pub mod quiz_grader;

pub use form_validator::FormValidator;
pub use quiz_grader::QuizGrader;
