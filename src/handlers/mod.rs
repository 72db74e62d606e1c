pub mod form_handler;
pub mod quiz_handler;

pub use form_handler::{RebelForm, SubmitDecision};
pub use quiz_handler::Quiz;
