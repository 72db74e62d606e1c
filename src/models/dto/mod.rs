pub mod request;

pub use request::{QuizAnswerInput, QuizSubmitRequest, RebelFormRequest};
