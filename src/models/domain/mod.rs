pub mod field_value;
pub mod quiz;
pub mod quiz_attempt;
pub mod quiz_question;
pub mod validation_result;
pub use field_value::{FieldName, FieldSnapshot, FieldValue};
pub use quiz::QuizBank;
pub use quiz_attempt::{Classification, QuestionOutcome, QuizResult, QuizSubmission};
pub use quiz_question::{QuizOption, QuizQuestion};
pub use validation_result::{FieldError, ValidationResult};
